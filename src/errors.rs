use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitchenError {
    #[error("Invalid selection: {0} matches no menu entry")]
    InvalidSelection(i32),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),
}

impl KitchenError {
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::ConfigError(msg.into())
    }
}
