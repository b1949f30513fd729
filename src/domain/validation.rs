use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    MissingDestination,
    InvalidCountryCode { input: String },
    InvalidEndpoint { input: String },
    UnknownVariant { field: &'static str, input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::MissingDestination => write!(f, "message has no destination set"),
            Self::InvalidCountryCode { input } => write!(f, "invalid country code: {input}"),
            Self::InvalidEndpoint { input } => write!(f, "invalid endpoint url: {input}"),
            Self::UnknownVariant { field, input } => {
                write!(f, "unknown {field} value: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
