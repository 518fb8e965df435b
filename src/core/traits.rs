//! Core trait definitions for nutrition lookups
//!
//! The `try_*` methods report `NotFound` explicitly so presenters can decide
//! how to show it. The plain methods are the lenient forms: they log the
//! problem and hand back an empty result.

use crate::core::data::{Meal, NutrientRecord, UserProfile};
use crate::utils::error::AppResult;
use tracing::warn;

/// Read access to user profiles
pub trait ProfileLookup {
    /// Find a profile by user id
    fn find_profile(&self, user_id: &str) -> AppResult<&UserProfile>;
}

/// Meal recommendation and intake lookup for a user
pub trait MealAdvisor: ProfileLookup {
    /// Meals whose tags cover all of the profile's dietary requirements, in catalog order
    fn recommend_for(&self, profile: &UserProfile) -> Vec<&Meal>;

    /// `recommend_for` after resolving the user id
    fn try_recommend_meals(&self, user_id: &str) -> AppResult<Vec<&Meal>> {
        let profile = self.find_profile(user_id)?;
        Ok(self.recommend_for(profile))
    }

    /// Nutrient facts of the named meal, checked against a known user
    fn try_track_intake(&self, user_id: &str, meal_name: &str) -> AppResult<NutrientRecord>;

    /// Recommended meals, or an empty list when the user is unknown
    fn recommend_meals(&self, user_id: &str) -> Vec<&Meal> {
        self.try_recommend_meals(user_id).unwrap_or_else(|e| {
            warn!(user_id, error = %e, "no recommendations");
            Vec::new()
        })
    }

    /// Nutrient facts, or an empty record when the user or meal is unknown
    fn track_intake(&self, user_id: &str, meal_name: &str) -> NutrientRecord {
        self.try_track_intake(user_id, meal_name).unwrap_or_else(|e| {
            warn!(user_id, meal_name, error = %e, "intake not tracked");
            NutrientRecord::default()
        })
    }
}
