//! Dashboard presenter
//!
//! Orchestrates profile lookup, BMI and recommendations for one user and
//! renders them into an output sink. Unknown users and meals are reported
//! inline; only sink failures come back as errors.

use crate::core::bmi::calculate_bmi;
use crate::core::data::Meal;
use crate::core::traits::MealAdvisor;
use crate::utils::error::{handle_flow, AppError, AppResult};
use crate::utils::format::format_amount;
use crate::utils::output::{handle_empty_list, OutputStyle};
use std::io::Write;
use tracing::debug;

pub struct Dashboard<'a, A: MealAdvisor> {
    advisor: &'a A,
}

impl<'a, A: MealAdvisor> Dashboard<'a, A> {
    pub fn new(advisor: &'a A) -> Self {
        Self { advisor }
    }

    /// Profile attributes, BMI and recommended meals for `user_id`
    pub fn render(&self, out: &mut dyn Write, user_id: &str) -> AppResult<()> {
        let profile = match self.advisor.find_profile(user_id) {
            Ok(profile) => profile,
            Err(e) => return report_lookup_failure(out, e),
        };
        debug!(user_id, "rendering dashboard");

        OutputStyle::write_header(out, "📊 Nutrition Dashboard")?;
        OutputStyle::write_profile(out, profile)?;

        if let Some(bmi) = calculate_bmi(profile.weight, profile.height) {
            OutputStyle::write_field(out, "BMI", &format_amount(bmi), OutputStyle::number)?;
        }

        writeln!(out)?;
        write_recommendations(out, &self.advisor.recommend_for(profile))
    }

    /// Only the recommendation section
    pub fn render_recommendations(&self, out: &mut dyn Write, user_id: &str) -> AppResult<()> {
        match self.advisor.try_recommend_meals(user_id) {
            Ok(meals) => write_recommendations(out, &meals),
            Err(e) => report_lookup_failure(out, e),
        }
    }

    /// Nutrient record of a tracked meal as indented JSON
    pub fn render_intake(&self, out: &mut dyn Write, user_id: &str, meal_name: &str) -> AppResult<()> {
        let record = match self.advisor.try_track_intake(user_id, meal_name) {
            Ok(record) => record,
            Err(e) => return report_lookup_failure(out, e),
        };
        if record.is_empty() {
            return handle_empty_list(out, &format!("nutrient facts for {}", meal_name));
        }

        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| AppError::Io(format!("Failed to serialize nutrients: {}", e)))?;

        writeln!(out, "{}: {}", OutputStyle::label("Tracking meal"), OutputStyle::name(meal_name))?;
        writeln!(out, "Nutrient intake from {}: {}", meal_name, json)?;
        Ok(())
    }
}

fn write_recommendations(out: &mut dyn Write, meals: &[&Meal]) -> AppResult<()> {
    writeln!(out, "{}:", OutputStyle::header("Recommended Meals"))?;
    if meals.is_empty() {
        return handle_empty_list(out, "meals matching the dietary requirements");
    }
    for meal in meals {
        writeln!(out, "{}", OutputStyle::format_meal_summary(meal))?;
    }
    Ok(())
}

/// Not-found and computation problems are shown to the user; anything else propagates
fn report_lookup_failure(out: &mut dyn Write, err: AppError) -> AppResult<()> {
    match err {
        AppError::NotFound { .. } | AppError::Computation(_) => handle_flow(out, err.into()),
        other => Err(other),
    }
}
