use crate::cli::TrackArgs;
use crate::config::Config;
use crate::core::operations::NutrientOperations;
use crate::utils::Dashboard;
use crate::utils::error::AppResult;
use std::io::Write;

pub fn handle_track_command(
    config: &Config,
    ops: &NutrientOperations,
    args: &TrackArgs,
    out: &mut dyn Write,
) -> AppResult<()> {
    let user_id = args.user.as_deref().unwrap_or(&config.general.default_user);
    Dashboard::new(ops).render_intake(out, user_id, &args.meal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(meal: &str, user: Option<&str>) -> String {
        colored::control::set_override(false);
        let config = Config::default();
        let ops = NutrientOperations::from_config(&config).unwrap();
        let args = TrackArgs {
            meal: meal.to_string(),
            user: user.map(str::to_string),
        };
        let mut buf = Vec::new();
        handle_track_command(&config, &ops, &args, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_track_known_meal() {
        let text = run("Vegan Quinoa Bowl", None);
        assert!(text.contains("Tracking meal: Vegan Quinoa Bowl"));
        assert!(text.contains("\"calories\": 400"));
        assert!(text.contains("\"carbs\": 55"));
    }

    #[test]
    fn test_track_unknown_user_checked_before_meal() {
        let text = run("Nonexistent Meal", Some("ghost"));
        assert!(text.contains("User 'ghost' not found"));
        assert!(!text.contains("Meal 'Nonexistent Meal'"));
    }
}
