//! Core business logic layer
//!
//! Data structures, the BMI calculation, lookup traits, and the operations
//! hub that ties the profile store and meal catalog together.

pub mod bmi;
pub mod data;
pub mod operations;
pub mod traits;
