use crate::core::operations::NutrientOperations;
use crate::utils::DisplayFormatter;
use crate::utils::error::AppResult;
use std::io::Write;

pub fn handle_profiles_command(ops: &NutrientOperations, out: &mut dyn Write) -> AppResult<()> {
    DisplayFormatter::format_profiles(out, &ops.profiles().sorted())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_profiles_listing() {
        colored::control::set_override(false);
        let ops = NutrientOperations::from_config(&Config::default()).unwrap();
        let mut buf = Vec::new();
        handle_profiles_command(&ops, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Profiles (1)"));
        assert!(text.contains("User: user_1"));
        assert!(text.contains("Weight: 70 kg"));
    }
}
