use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Largest f64 that still maps exactly onto an integer
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Numeric amount that serializes whole numbers as integers (300, not 300.0)
#[derive(Debug, Clone, Copy)]
pub struct Amount(pub f64);

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if is_whole(self.0) {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

fn is_whole(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INT
}

/// Human formatting for a numeric amount
pub fn format_amount(value: f64) -> String {
    if is_whole(value) {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format an optional amount, falling back to "n/a"
pub fn format_optional_amount(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| "n/a".to_string())
}

/// Format tags as comma-separated list
pub fn format_tags_comma(tags: &BTreeSet<String>) -> String {
    tags.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Format tags as hashtags (#tag1 #tag2)
pub fn format_tags_hash(tags: &BTreeSet<String>) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!(" #{}", tags.iter().cloned().collect::<Vec<_>>().join(" #"))
    }
}

/// Truncate string to max length, respecting char boundaries
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let mut out: String = s.chars().take(max_len - 3).collect();
        out.push_str("...");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(300.0), "300");
        assert_eq!(format_amount(22.86), "22.86");
        assert_eq!(format_amount(-4.0), "-4");
        assert_eq!(format_optional_amount(None), "n/a");
    }

    #[test]
    fn test_format_tags() {
        let tags: BTreeSet<String> = ["vegan", "gluten-free"].iter().map(|s| s.to_string()).collect();
        assert_eq!(format_tags_comma(&tags), "gluten-free, vegan");
        assert_eq!(format_tags_hash(&tags), " #gluten-free #vegan");
        assert_eq!(format_tags_hash(&BTreeSet::new()), "");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Grilled Chicken Salad", 10), "Grilled...");
        assert_eq!(truncate_string("Soup", 10), "Soup");
    }
}
