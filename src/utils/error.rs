use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    JsonEncodeError(#[from] serde_json::Error),

    #[error("cannot read {path}: {reason}")]
    FileAccessError { path: String, reason: String },

    #[error("cannot write {path}: {reason}")]
    OutputWriteError { path: String, reason: String },

    #[error("missing column \"{column}\"")]
    MissingColumnError { column: String },

    #[error("bad {field} \"{value}\": {reason}")]
    FormatError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("row {row}: {source}")]
    RowError { row: usize, source: Box<ConvertError> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ConvertError {
    /// Process exit code for this error: 2 for configuration and
    /// file-access problems, 1 for everything that went wrong with the
    /// data itself.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::FileAccessError { .. }
            | ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
