use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidUrl { input: String },
    UnsupportedScheme { scheme: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidUrl { input } => write!(f, "invalid url: {input}"),
            Self::UnsupportedScheme { scheme } => {
                write!(f, "unsupported url scheme: {scheme} (expected http or https)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
