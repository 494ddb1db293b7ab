use std::fmt;

#[derive(Debug)]
pub enum ScanError {
    InvalidArgument(String),
    RaggedMap { row: usize, expected: usize, found: usize },
    MalformedCell { row: usize, token: String },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Self::RaggedMap { row, expected, found } => {
                write!(f, "ragged map: row {} has {} cells, expected {}", row, found, expected)
            }
            Self::MalformedCell { row, token } => {
                write!(f, "malformed cell in row {}: '{}'", row, token)
            }
        }
    }
}

impl std::error::Error for ScanError {}

pub type Result<T> = std::result::Result<T, ScanError>;
