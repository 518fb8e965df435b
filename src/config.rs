use crate::core::data::{default_meals, default_profiles, Meal, MealCatalog, ProfileStore, UserProfile};
use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default = "default_profiles")]
    pub profiles: Vec<UserProfile>,
    #[serde(default = "default_meals")]
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// User shown by the demo and by commands run without a user
    pub default_user: String,
    /// Meal tracked by the demo
    pub default_meal: String,
    pub color: bool,
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_user: "user_1".to_string(),
            default_meal: "Grilled Chicken Salad".to_string(),
            color: true,
            log_level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            profiles: default_profiles(),
            meals: default_meals(),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to built-in data when absent
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_file_path();
        if !config_path.exists() {
            return Ok(Config::default());
        }
        Self::load_custom(&config_path)
    }

    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        let content = std::fs::read_to_string(config_path)?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.general.default_user.trim().is_empty() {
            return Err(AppError::Config("Default user cannot be empty".to_string()));
        }

        if self.general.default_meal.trim().is_empty() {
            return Err(AppError::Config("Default meal cannot be empty".to_string()));
        }

        if !LOG_LEVELS.contains(&self.general.log_level.to_lowercase().as_str()) {
            return Err(AppError::Config(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.general.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if let Some(meal) = self.meals.iter().find(|m| m.name.is_empty()) {
            return Err(AppError::Config(format!(
                "Meal name cannot be empty (tags: {:?})",
                meal.dietary_tags
            )));
        }

        ProfileStore::from_profiles(self.profiles.clone())?;
        MealCatalog::from_meals(self.meals.clone())?;

        Ok(())
    }

    /// Effective configuration as TOML, suitable for saving as a config file
    pub fn to_toml_string(&self) -> AppResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))
    }

    pub fn config_file_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("smart-nutrient")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Nutrient;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_user, "user_1");
        assert_eq!(config.meals.len(), 2);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = config.to_toml_string().unwrap();
        let file = write_config(&text);

        let loaded = Config::load_custom(file.path()).unwrap();
        assert_eq!(loaded.profiles, config.profiles);
        assert_eq!(loaded.meals, config.meals);
        assert_eq!(loaded.general.default_meal, config.general.default_meal);
    }

    #[test]
    fn test_partial_config_uses_builtin_data() {
        let file = write_config(
            r#"
[general]
default_user = "user_2"
default_meal = "Lentil Soup"

[[profiles]]
id = "user_2"
age = 41
weight = 82.5
height = 180
dietary_requirements = ["vegan"]
"#,
        );

        let config = Config::load_custom(file.path()).unwrap();
        assert_eq!(config.profiles.len(), 1);
        assert_eq!(config.profiles[0].height, 180.0);
        assert!(config.profiles[0].health_goals.is_empty());
        assert_eq!(config.meals, default_meals());
        assert!(config.general.color);
        assert_eq!(config.general.log_level, "warn");
    }

    #[test]
    fn test_general_table_may_set_only_display_options() {
        let file = write_config("[general]\ncolor = false\n");

        let config = Config::load_custom(file.path()).unwrap();
        assert!(!config.general.color);
        assert_eq!(config.general.default_user, "user_1");
        assert_eq!(config.general.default_meal, "Grilled Chicken Salad");
        assert_eq!(config.general.log_level, "warn");

        let config: Config = toml::from_str("[general]\nlog_level = \"debug\"\n").unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert!(config.general.color);
    }

    #[test]
    fn test_meal_nutrients_from_toml() {
        let file = write_config(
            r#"
[[meals]]
name = "Lentil Soup"
dietary_tags = ["vegan"]

[meals.nutrients]
carbs = 40
calories = 250
protein = 18.5
"#,
        );

        let config = Config::load_custom(file.path()).unwrap();
        let soup = &config.meals[0];
        assert_eq!(soup.nutrients.get(Nutrient::Protein), Some(18.5));
        assert_eq!(soup.nutrients.get(Nutrient::Fat), None);
        assert_eq!(config.profiles, default_profiles());
    }

    #[test]
    fn test_duplicate_meal_names_rejected() {
        let file = write_config(
            r#"
[[meals]]
name = "Soup"

[[meals]]
name = "Soup"
"#,
        );

        let err = Config::load_custom(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Config(msg) if msg.contains("Duplicate meal name")));
    }

    #[test]
    fn test_unknown_nutrient_is_parse_error() {
        let file = write_config(
            r#"
[[meals]]
name = "Soup"
nutrients = { fiber = 3 }
"#,
        );
        assert!(matches!(
            Config::load_custom(file.path()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = Config::default();
        config.general.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load_custom(&missing),
            Err(AppError::Config(msg)) if msg.contains("not found")
        ));
    }
}
