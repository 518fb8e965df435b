use crate::cli::{ListFormat, MealsArgs};
use crate::core::data::Meal;
use crate::core::operations::NutrientOperations;
use crate::utils::DisplayFormatter;
use crate::utils::error::AppResult;
use std::io::Write;

pub fn handle_meals_command(
    ops: &NutrientOperations,
    args: &MealsArgs,
    out: &mut dyn Write,
) -> AppResult<()> {
    if args.tags {
        return DisplayFormatter::format_tags(out, &ops.catalog().get_all_tags());
    }

    let meals: Vec<&Meal> = ops.catalog().meals().iter().collect();
    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    DisplayFormatter::format_meals(out, &meals, format)
}
