use std::error::Error;
use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum VitalsError {
    UnknownLocale(String),
    UnknownMetric(String),
    Catalog { locale: String, message: String },
    UnknownLesson { week: u8, slug: String },
}

impl Error for VitalsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for VitalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            VitalsError::UnknownLocale(ref code) => write!(f, "Unsupported locale: {}", code),
            VitalsError::UnknownMetric(ref name) => write!(f, "Unknown metric: {}", name),
            VitalsError::Catalog { ref locale, ref message } => {
                write!(f, "Could not load translations for {}: {}", locale, message)
            }
            VitalsError::UnknownLesson { week, ref slug } => {
                write!(f, "No lesson '{}' in week {}", slug, week)
            }
        }
    }
}
