//! Core business logic for Budgetlens.
//!
//! This crate contains pure business logic with ZERO web or HTTP client dependencies.
//! Budget snapshots come in, derived progress metrics come out.
//!
//! # Modules
//!
//! - `budget` - Budget records, progress engine, projections, and list overviews

pub mod budget;
