use crate::cli::RecommendArgs;
use crate::config::Config;
use crate::core::operations::NutrientOperations;
use crate::core::traits::MealAdvisor;
use crate::utils::error::{AppError, AppResult};
use crate::utils::{handle_not_found, Dashboard, DisplayFormatter};
use std::io::Write;

pub fn handle_recommend_command(
    config: &Config,
    ops: &NutrientOperations,
    args: &RecommendArgs,
    out: &mut dyn Write,
) -> AppResult<()> {
    let user_id = args.user.as_deref().unwrap_or(&config.general.default_user);

    let Some(format) = &args.format else {
        return Dashboard::new(ops).render_recommendations(out, user_id);
    };

    match ops.try_recommend_meals(user_id) {
        Ok(meals) => DisplayFormatter::format_meals(out, &meals, format),
        Err(AppError::NotFound { item_type, identifier }) => {
            handle_not_found(out, &item_type, &identifier)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ListFormat;
    use crate::core::data::Meal;

    fn run(args: RecommendArgs) -> String {
        colored::control::set_override(false);
        let config = Config::default();
        let ops = NutrientOperations::from_config(&config).unwrap();
        let mut buf = Vec::new();
        handle_recommend_command(&config, &ops, &args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_section() {
        let text = run(RecommendArgs { user: None, format: None });
        assert!(text.starts_with("Recommended Meals:"));
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 2);
    }

    #[test]
    fn test_json_format() {
        let text = run(RecommendArgs {
            user: Some("user_1".to_string()),
            format: Some(ListFormat::Json),
        });
        let meals: Vec<Meal> = serde_json::from_str(&text).unwrap();
        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].name, "Grilled Chicken Salad");
    }

    #[test]
    fn test_unknown_user_with_format() {
        let text = run(RecommendArgs {
            user: Some("nobody".to_string()),
            format: Some(ListFormat::Table),
        });
        assert!(text.contains("User 'nobody' not found"));
    }
}
