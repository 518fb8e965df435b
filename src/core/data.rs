//! Core data structures for nutrition tracking
//!
//! Profiles, meals and the nutrient records handed out by intake lookups.
//! Everything here is built once at startup and then only read.

use crate::utils::error::{AppError, AppResult};
use crate::utils::format;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// Nutrient keys tracked per meal. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Nutrient {
    Calories,
    Protein,
    Fat,
    Carbs,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Fat => "fat",
            Nutrient::Carbs => "carbs",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Nutrient {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nutrient::ALL
            .into_iter()
            .find(|n| n.as_str() == s)
            .ok_or_else(|| AppError::Config(format!("Unknown nutrient '{}'", s)))
    }
}

impl Serialize for Nutrient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Nutrient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Nutrient name to amount. Copy of a meal's facts; may be empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct NutrientRecord(BTreeMap<Nutrient, f64>);

impl NutrientRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used for the built-in catalog
    pub fn with(mut self, nutrient: Nutrient, amount: f64) -> Self {
        self.0.insert(nutrient, amount);
        self
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        self.0.get(&nutrient).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        self.0.iter().map(|(n, v)| (*n, *v))
    }
}

impl Serialize for NutrientRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (nutrient, amount) in &self.0 {
            map.serialize_entry(nutrient, &format::Amount(*amount))?;
        }
        map.end()
    }
}

/// A user's static biometric and preference record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub age: u32,
    /// Kilograms
    pub weight: f64,
    /// Centimetres
    pub height: f64,
    #[serde(default)]
    pub dietary_requirements: BTreeSet<String>,
    #[serde(default)]
    pub health_goals: BTreeSet<String>,
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(default)]
    pub dietary_tags: BTreeSet<String>,
    #[serde(default)]
    pub nutrients: NutrientRecord,
}

impl Meal {
    /// True when every requirement tag is present on the meal
    pub fn satisfies(&self, requirements: &BTreeSet<String>) -> bool {
        requirements.is_subset(&self.dietary_tags)
    }
}

/// In-memory profile lookup keyed by user id
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    profiles: HashMap<String, UserProfile>,
}

impl ProfileStore {
    /// Build the store, rejecting duplicate ids
    pub fn from_profiles(profiles: Vec<UserProfile>) -> AppResult<Self> {
        let mut map = HashMap::with_capacity(profiles.len());
        for profile in profiles {
            if map.contains_key(&profile.id) {
                return Err(AppError::Config(format!(
                    "Duplicate profile id '{}'",
                    profile.id
                )));
            }
            map.insert(profile.id.clone(), profile);
        }
        Ok(Self { profiles: map })
    }

    pub fn get(&self, id: &str) -> AppResult<&UserProfile> {
        self.profiles
            .get(id)
            .ok_or_else(|| AppError::not_found("User", id))
    }

    /// All profiles ordered by id
    pub fn sorted(&self) -> Vec<&UserProfile> {
        let mut profiles: Vec<_> = self.profiles.values().collect();
        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Ordered meal collection; insertion order is preserved everywhere
#[derive(Debug, Clone, Default)]
pub struct MealCatalog {
    meals: Vec<Meal>,
}

impl MealCatalog {
    /// Build the catalog, rejecting duplicate meal names
    pub fn from_meals(meals: Vec<Meal>) -> AppResult<Self> {
        let mut seen = BTreeSet::new();
        for meal in &meals {
            if !seen.insert(meal.name.as_str()) {
                return Err(AppError::Config(format!(
                    "Duplicate meal name '{}'",
                    meal.name
                )));
            }
        }
        Ok(Self { meals })
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// First meal whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Meal> {
        self.meals.iter().find(|m| m.name == name)
    }

    /// Get all unique dietary tags from the catalog
    pub fn get_all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .meals
            .iter()
            .flat_map(|m| m.dietary_tags.iter().cloned())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

fn tags(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in profiles used when no config file overrides them
pub fn default_profiles() -> Vec<UserProfile> {
    vec![UserProfile {
        id: "user_1".to_string(),
        age: 30,
        weight: 70.0,
        height: 175.0,
        dietary_requirements: tags(&["gluten-free"]),
        health_goals: tags(&["weight_loss"]),
    }]
}

/// Built-in meal catalog
pub fn default_meals() -> Vec<Meal> {
    vec![
        Meal {
            name: "Grilled Chicken Salad".to_string(),
            dietary_tags: tags(&["gluten-free", "low-carb"]),
            nutrients: NutrientRecord::new()
                .with(Nutrient::Calories, 300.0)
                .with(Nutrient::Protein, 30.0)
                .with(Nutrient::Fat, 10.0)
                .with(Nutrient::Carbs, 20.0),
        },
        Meal {
            name: "Vegan Quinoa Bowl".to_string(),
            dietary_tags: tags(&["vegan", "gluten-free"]),
            nutrients: NutrientRecord::new()
                .with(Nutrient::Calories, 400.0)
                .with(Nutrient::Protein, 15.0)
                .with(Nutrient::Fat, 15.0)
                .with(Nutrient::Carbs, 55.0),
        },
    ]
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
