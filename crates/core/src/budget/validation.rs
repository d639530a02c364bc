//! Boundary validation for budget records.

use rust_decimal::Decimal;

use super::error::BudgetError;
use super::types::Budget;

impl Budget {
    /// Checks the invariants the Budget Service is expected to uphold.
    ///
    /// Call this where records are decoded from the service response. The
    /// progress engine does not call it and tolerates records that fail it.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, checked in field order.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.name.trim().is_empty() {
            return Err(BudgetError::EmptyName);
        }

        if self.amount < Decimal::ZERO {
            return Err(BudgetError::NegativeAmount(self.amount));
        }

        if self.spent < Decimal::ZERO {
            return Err(BudgetError::NegativeSpent(self.spent));
        }

        if self.start_date >= self.end_date {
            return Err(BudgetError::InvalidPeriod {
                start: self.start_date,
                end: self.end_date,
            });
        }

        if self.alert_threshold > 100 {
            return Err(BudgetError::ThresholdOutOfRange(self.alert_threshold));
        }

        Ok(())
    }
}
