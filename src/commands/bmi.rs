use crate::cli::BmiArgs;
use crate::core::bmi::try_calculate_bmi;
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::format_amount;
use crate::utils::{print_warning, OutputStyle};
use std::io::Write;

pub fn handle_bmi_command(args: &BmiArgs, out: &mut dyn Write) -> AppResult<()> {
    match try_calculate_bmi(args.weight, args.height) {
        Ok(bmi) => OutputStyle::write_field(out, "BMI", &format_amount(bmi), OutputStyle::number),
        Err(e @ AppError::Computation(_)) => print_warning(out, &e.to_string()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(weight: f64, height: f64) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        handle_bmi_command(&BmiArgs { weight, height }, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bmi_output() {
        assert_eq!(run(70.0, 175.0).trim(), "BMI: 22.86");
    }

    #[test]
    fn test_zero_height_warns() {
        let text = run(70.0, 0.0);
        assert!(text.contains("height must not be zero"));
        assert!(!text.contains("BMI:"));
    }
}
