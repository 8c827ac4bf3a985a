use crate::CustomFmt;

/// Failure to configure the logger or to write a record.
#[derive(Debug)]
pub enum LogError {
    NotInitialized,
    UnknownFormat(CustomFmt),
    IoError(std::io::Error),
}

impl core::fmt::Display for LogError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "logger was not initialized"),
            Self::UnknownFormat(fmt) => write!(f, "no custom format registered at {}", fmt.index()),
            Self::IoError(err) => write!(f, "failed to write log record: {}", err),
        }
    }
}

impl core::error::Error for LogError {

    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LogError {

    fn from(value: std::io::Error) -> Self {
        Self::IoError(value)
    }
}
