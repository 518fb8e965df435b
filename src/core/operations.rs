//! Core operations implementation
//!
//! `NutrientOperations` owns the profile store and meal catalog for a run and
//! implements the lookup traits over them.

use crate::config::Config;
use crate::core::{
    data::{Meal, MealCatalog, NutrientRecord, ProfileStore, UserProfile},
    traits::{MealAdvisor, ProfileLookup},
};
use crate::utils::error::{AppError, AppResult};
use tracing::debug;

/// Main operations hub over the read-only stores
#[derive(Debug, Clone)]
pub struct NutrientOperations {
    profiles: ProfileStore,
    catalog: MealCatalog,
}

impl NutrientOperations {
    pub fn new(profiles: ProfileStore, catalog: MealCatalog) -> Self {
        Self { profiles, catalog }
    }

    /// Build both stores from the loaded configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let profiles = ProfileStore::from_profiles(config.profiles.clone())?;
        let catalog = MealCatalog::from_meals(config.meals.clone())?;
        debug!(
            profiles = profiles.len(),
            meals = catalog.len(),
            "stores loaded"
        );
        Ok(Self::new(profiles, catalog))
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }
}

impl ProfileLookup for NutrientOperations {
    fn find_profile(&self, user_id: &str) -> AppResult<&UserProfile> {
        self.profiles.get(user_id)
    }
}

impl MealAdvisor for NutrientOperations {
    fn recommend_for(&self, profile: &UserProfile) -> Vec<&Meal> {
        let meals: Vec<&Meal> = self
            .catalog
            .meals()
            .iter()
            .filter(|meal| meal.satisfies(&profile.dietary_requirements))
            .collect();

        debug!(user_id = %profile.id, matched = meals.len(), "recommendations computed");
        meals
    }

    fn try_track_intake(&self, user_id: &str, meal_name: &str) -> AppResult<NutrientRecord> {
        self.find_profile(user_id)?;

        let meal = self
            .catalog
            .find_by_name(meal_name)
            .ok_or_else(|| AppError::not_found("Meal", meal_name))?;

        debug!(user_id, meal_name, "intake tracked");
        Ok(meal.nutrients.clone())
    }
}
