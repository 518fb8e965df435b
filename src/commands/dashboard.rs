use crate::cli::UserArgs;
use crate::config::Config;
use crate::core::operations::NutrientOperations;
use crate::utils::Dashboard;
use crate::utils::error::AppResult;
use std::io::Write;

pub fn handle_dashboard_command(
    config: &Config,
    ops: &NutrientOperations,
    args: &UserArgs,
    out: &mut dyn Write,
) -> AppResult<()> {
    let user_id = args.user.as_deref().unwrap_or(&config.general.default_user);
    Dashboard::new(ops).render(out, user_id)
}

/// Fixed demonstration: dashboard for the default user, then track the default meal
pub fn handle_demo_command(
    config: &Config,
    ops: &NutrientOperations,
    out: &mut dyn Write,
) -> AppResult<()> {
    let dashboard = Dashboard::new(ops);
    let user_id = &config.general.default_user;

    dashboard.render(out, user_id)?;
    writeln!(out)?;
    dashboard.render_intake(out, user_id, &config.general.default_meal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(f: impl FnOnce(&Config, &NutrientOperations, &mut dyn Write) -> AppResult<()>) -> String {
        colored::control::set_override(false);
        let config = Config::default();
        let ops = NutrientOperations::from_config(&config).unwrap();
        let mut buf = Vec::new();
        f(&config, &ops, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_demo_renders_dashboard_then_intake() {
        let text = run(|config, ops, out| handle_demo_command(config, ops, out));

        let bmi = text.find("BMI: 22.86").unwrap();
        let tracking = text.find("Tracking meal: Grilled Chicken Salad").unwrap();
        assert!(bmi < tracking);
        assert!(text.contains("\"carbs\": 20"));
    }

    #[test]
    fn test_dashboard_defaults_to_configured_user() {
        let text = run(|config, ops, out| {
            handle_dashboard_command(config, ops, &UserArgs { user: None }, out)
        });
        assert!(text.contains("User: user_1"));

        let text = run(|config, ops, out| {
            handle_dashboard_command(config, ops, &UserArgs { user: Some("user_2".to_string()) }, out)
        });
        assert!(text.contains("User 'user_2' not found"));
    }

    #[test]
    fn test_demo_with_unknown_default_user_still_succeeds() {
        let text = run(|config, ops, out| {
            let mut config = config.clone();
            config.general.default_user = "ghost".to_string();
            handle_demo_command(&config, ops, out)
        });

        assert_eq!(text.matches("User 'ghost' not found").count(), 2);
    }
}
