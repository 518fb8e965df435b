use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("{item_type} '{identifier}' not found")]
    NotFound {
        item_type: String,
        identifier: String,
    },

    #[error("Computation error: {0}")]
    Computation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl AppError {
    pub fn not_found(item_type: &str, identifier: &str) -> Self {
        AppError::NotFound {
            item_type: item_type.to_string(),
            identifier: identifier.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub enum FlowResult {
    NotFound {
        item_type: String,
        search_term: String,
    },
    EmptyList {
        item_type: String,
    },
    Warning(String),
}

impl From<AppError> for FlowResult {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound {
                item_type,
                identifier,
            } => FlowResult::NotFound {
                item_type,
                search_term: identifier,
            },
            other => FlowResult::Warning(other.to_string()),
        }
    }
}

impl FlowResult {
    pub fn message(&self) -> String {
        match self {
            FlowResult::NotFound {
                item_type,
                search_term,
            } => format!("{} '{}' not found", item_type, search_term),
            FlowResult::EmptyList { item_type } => format!("No {} found", item_type),
            FlowResult::Warning(msg) => msg.clone(),
        }
    }
}

/// Last-resort reporter used by the binary's error boundary.
pub fn report_error(err: &AppError) {
    match err {
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
        other => {
            eprintln!("❌ {}", OutputStyle::error(&other.to_string()));
        }
    }
}

/// Render a non-fatal outcome into the output sink.
pub fn handle_flow(out: &mut dyn std::io::Write, flow: FlowResult) -> AppResult<()> {
    let msg = flow.message();
    match flow {
        FlowResult::NotFound { .. } | FlowResult::Warning(_) => {
            writeln!(out, "⚠️  {}", OutputStyle::warning(&msg))?;
        }
        FlowResult::EmptyList { .. } => {
            writeln!(out, "{}", OutputStyle::muted(&msg))?;
        }
    }
    Ok(())
}
