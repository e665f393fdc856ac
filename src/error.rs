pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create empty input error
///
/// Blank SQL is rejected at the boundary; the core itself treats blank
/// input as "no issues" / empty output.
pub fn empty_input_error() -> AppError {
    AppError::bad_request("SQL input is empty or blank".to_string())
}
