use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Lets scripts tell a missing hardware field apart from a bad flag
/// or a failure while writing the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report produced
    Success = 0,
    /// A hardware profile field was not supplied, or the price range is inverted
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, file I/O, runtime error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code the CLI should return
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<RigcheckError>() {
            Some(RigcheckError::MissingInput { .. })
            | Some(RigcheckError::InvalidPriceRange { .. }) => ExitCode::ValidationFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping every message user-facing with a hint on how to recover.
#[derive(Debug, Error)]
pub enum RigcheckError {
    #[error("Please fill in all fields before analyzing. Missing: {}\n\n💡 Hint: Pass the missing values as flags (e.g. --ram 16 --cpu high) or add a `profile` section to rigcheck.config.yml", fields.join(", "))]
    MissingInput { fields: Vec<&'static str> },

    #[error("Search query is empty\n\n💡 Hint: Type a product name, e.g. `rigcheck search headphones`")]
    EmptyQuery,

    #[error("Invalid price range: minimum {min} is greater than maximum {max}\n\n💡 Hint: Swap the values of --min-price and --max-price")]
    InvalidPriceRange { min: f64, max: f64 },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for config values and builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
