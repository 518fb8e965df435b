pub mod dashboard;
pub mod error;
pub mod format;
pub mod logging;
pub mod output;

pub use dashboard::Dashboard;
pub use output::*;
