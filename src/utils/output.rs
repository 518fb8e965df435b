use crate::cli::ListFormat;
use crate::core::data::{Meal, Nutrient, UserProfile};
use crate::utils::error::{handle_flow, AppError, AppResult, FlowResult};
use crate::utils::format::{format_amount, format_optional_amount, format_tags_comma, format_tags_hash, truncate_string};
use colored::*;
use std::io::Write;

pub struct OutputStyle;

impl OutputStyle {
    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn tags(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn number(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn write_header(out: &mut dyn Write, title: &str) -> AppResult<()> {
        writeln!(out, "{}", Self::title(title))?;
        writeln!(out, "{}", Self::header_separator())?;
        Ok(())
    }

    pub fn write_field(
        out: &mut dyn Write,
        label: &str,
        value: &str,
        color_fn: impl Fn(&str) -> ColoredString,
    ) -> AppResult<()> {
        writeln!(out, "{}: {}", Self::label(label), color_fn(value))?;
        Ok(())
    }

    /// Profile attributes block shown at the top of the dashboard
    pub fn write_profile(out: &mut dyn Write, profile: &UserProfile) -> AppResult<()> {
        Self::write_field(out, "User", &profile.id, Self::name)?;
        Self::write_field(out, "Age", &profile.age.to_string(), Self::content)?;
        Self::write_field(out, "Weight", &format!("{} kg", format_amount(profile.weight)), Self::content)?;
        Self::write_field(out, "Height", &format!("{} cm", format_amount(profile.height)), Self::content)?;

        if !profile.dietary_requirements.is_empty() {
            Self::write_field(out, "Dietary requirements", &format_tags_comma(&profile.dietary_requirements), Self::tags)?;
        }
        if !profile.health_goals.is_empty() {
            Self::write_field(out, "Health goals", &format_tags_comma(&profile.health_goals), Self::tags)?;
        }
        Ok(())
    }

    /// One-line meal summary: `- Name (Calories: 300, Protein: 30g)`
    pub fn format_meal_summary(meal: &Meal) -> String {
        format!(
            "- {} (Calories: {}, Protein: {}g)",
            Self::name(&meal.name),
            Self::number(&format_optional_amount(meal.nutrients.get(Nutrient::Calories))),
            Self::number(&format_optional_amount(meal.nutrients.get(Nutrient::Protein))),
        )
    }
}

// Utility functions for common patterns
pub fn handle_not_found(out: &mut dyn Write, item_type: &str, identifier: &str) -> AppResult<()> {
    handle_flow(
        out,
        FlowResult::NotFound {
            item_type: item_type.to_string(),
            search_term: identifier.to_string(),
        },
    )
}

pub fn handle_empty_list(out: &mut dyn Write, item_type: &str) -> AppResult<()> {
    handle_flow(
        out,
        FlowResult::EmptyList {
            item_type: item_type.to_string(),
        },
    )
}

pub fn print_warning(out: &mut dyn Write, message: &str) -> AppResult<()> {
    handle_flow(out, FlowResult::Warning(message.to_string()))
}

/// Display formatter for catalog and profile listings
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Format meals list according to the specified format
    pub fn format_meals(out: &mut dyn Write, meals: &[&Meal], format: &ListFormat) -> AppResult<()> {
        if meals.is_empty() {
            return handle_empty_list(out, "meals");
        }

        match format {
            ListFormat::Simple => Self::write_simple_list(out, meals),
            ListFormat::Table => Self::write_table_list(out, meals),
            ListFormat::Json => Self::write_json(out, meals),
        }
    }

    /// Print tags list
    pub fn format_tags(out: &mut dyn Write, tags: &[String]) -> AppResult<()> {
        if tags.is_empty() {
            return handle_empty_list(out, "tags");
        }

        writeln!(out, "🏷️  Available Tags ({})", tags.len())?;
        writeln!(out, "====================")?;
        for tag in tags {
            writeln!(out, "  {}", OutputStyle::tags(tag))?;
        }
        Ok(())
    }

    pub fn format_profiles(out: &mut dyn Write, profiles: &[&UserProfile]) -> AppResult<()> {
        if profiles.is_empty() {
            return handle_empty_list(out, "profiles");
        }

        OutputStyle::write_header(out, &format!("👥 Profiles ({})", profiles.len()))?;
        for (i, profile) in profiles.iter().enumerate() {
            if i > 0 {
                writeln!(out, "{}", OutputStyle::separator())?;
            }
            OutputStyle::write_profile(out, profile)?;
        }
        Ok(())
    }

    fn write_simple_list(out: &mut dyn Write, meals: &[&Meal]) -> AppResult<()> {
        writeln!(
            out,
            "🍽️  {} ({} found)",
            OutputStyle::header("Meals"),
            OutputStyle::number(&meals.len().to_string())
        )?;
        writeln!(out, "{}", OutputStyle::separator())?;

        for meal in meals {
            writeln!(
                out,
                "{}{}",
                OutputStyle::format_meal_summary(meal),
                OutputStyle::tags(&format_tags_hash(&meal.dietary_tags))
            )?;
        }
        Ok(())
    }

    fn write_table_list(out: &mut dyn Write, meals: &[&Meal]) -> AppResult<()> {
        // Column widths, clamped to keep rows readable
        let name_width = meals
            .iter()
            .map(|m| m.name.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(10, 40);
        let tag_width = meals
            .iter()
            .map(|m| format_tags_comma(&m.dietary_tags).chars().count())
            .max()
            .unwrap_or(0)
            .clamp(4, 30);
        let num_width = 8;

        writeln!(
            out,
            "┌─{}─┬─{}─{}┐",
            "─".repeat(name_width),
            "─".repeat(tag_width),
            format!("┬─{}─", "─".repeat(num_width)).repeat(Nutrient::ALL.len())
        )?;

        let mut header = format!("│ {:<name_width$} │ {:<tag_width$} ", "Meal", "Tags");
        for nutrient in Nutrient::ALL {
            header.push_str(&format!("│ {:>num_width$} ", nutrient.as_str()));
        }
        writeln!(out, "{}│", header)?;

        writeln!(
            out,
            "├─{}─┼─{}─{}┤",
            "─".repeat(name_width),
            "─".repeat(tag_width),
            format!("┼─{}─", "─".repeat(num_width)).repeat(Nutrient::ALL.len())
        )?;

        for meal in meals {
            let mut row = format!(
                "│ {:<name_width$} │ {:<tag_width$} ",
                truncate_string(&meal.name, name_width),
                truncate_string(&format_tags_comma(&meal.dietary_tags), tag_width),
            );
            for nutrient in Nutrient::ALL {
                let value = format_optional_amount(meal.nutrients.get(nutrient));
                row.push_str(&format!("│ {:>num_width$} ", value));
            }
            writeln!(out, "{}│", row)?;
        }

        writeln!(
            out,
            "└─{}─┴─{}─{}┘",
            "─".repeat(name_width),
            "─".repeat(tag_width),
            format!("┴─{}─", "─".repeat(num_width)).repeat(Nutrient::ALL.len())
        )?;
        Ok(())
    }

    fn write_json(out: &mut dyn Write, meals: &[&Meal]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(meals)
            .map_err(|e| AppError::Io(format!("Failed to serialize meals to JSON: {}", e)))?;
        writeln!(out, "{}", json)?;
        Ok(())
    }
}
