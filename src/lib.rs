//! smart-nutrient - a small nutrition tracking tool
//!
//! Holds user profiles and a meal catalog in memory, computes BMI, filters
//! meals against dietary requirements, and looks up nutrient facts for a
//! tracked meal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    bmi::{calculate_bmi, try_calculate_bmi},
    data::{Meal, MealCatalog, Nutrient, NutrientRecord, ProfileStore, UserProfile},
    operations::NutrientOperations,
    traits::{MealAdvisor, ProfileLookup},
};
pub use utils::error::{AppError, AppResult};

