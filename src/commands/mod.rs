// Command handlers, one per subcommand
pub mod bmi;
pub mod configure;
pub mod dashboard;
pub mod meals;
pub mod profiles;
pub mod recommend;
pub mod track;
