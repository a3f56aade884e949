use crate::driver::DriverError;
use thiserror::Error;

/// A list specifying categories of [`XmlError`](crate::XmlError).
///
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum XmlError {
    /// The driver returned an object that is neither the native XML type
    /// nor a generic XML stream handle.
    #[error("Unsupported object type: {type_name}")]
    UnsupportedType {
        /// Runtime type name of the offending object.
        type_name: String,
    },

    /// The database driver reported an error;
    /// the contained `DriverError` describes the concrete reason.
    #[error("Database driver responded with an error")]
    Driver {
        /// The causing Error.
        #[from]
        source: DriverError,
    },

    /// Error occured while reading or writing the content stream.
    #[error(transparent)]
    Io {
        /// The causing Error.
        #[from]
        source: std::io::Error,
    },

    /// The content is not valid UTF-8.
    #[error("Content is not valid UTF-8")]
    Utf8 {
        /// The causing Error.
        #[from]
        source: std::string::FromUtf8Error,
    },

    /// The content is not well-formed XML.
    #[error("Malformed XML at byte position {position}: {reason}")]
    MalformedXml {
        /// Byte position at which the problem was detected.
        position: usize,
        /// Description of the problem.
        reason: String,
    },

    /// The operation was cancelled through the progress monitor.
    #[error("Operation was cancelled")]
    Cancelled,

    /// The handler configuration could not be parsed.
    #[error("Erroneous handler configuration")]
    Configuration {
        /// The causing Error.
        #[from]
        source: serde_json::Error,
    },

    /// Error occured in thread synchronization.
    #[error("Error occured in thread synchronization")]
    Poison,

    /// Implementation error.
    #[error("Implementation error: {}", _0)]
    Impl(&'static str),

    /// Implementation error.
    #[error("Implementation error: {}", _0)]
    ImplDetailed(String),

    /// Error caused by wrong usage.
    #[error("Wrong usage: {}", _0)]
    Usage(&'static str),

    /// Error caused by wrong usage.
    #[error("Wrong usage: {}", _0)]
    UsageDetailed(String),
}

/// Abbreviation of `Result<T, XmlError>`.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

impl XmlError {
    /// Returns the contained `DriverError`, if any.
    ///
    /// This method helps in case you need programmatic access to e.g. the error code.
    pub fn driver_error(&self) -> Option<&DriverError> {
        match self {
            Self::Driver { source } => Some(source),
            _ => None,
        }
    }

    /// Reveal the inner error
    pub fn inner(&self) -> Option<&dyn std::error::Error> {
        match self {
            Self::Driver { source } => Some(source),
            Self::Io { source } => Some(source),
            Self::Utf8 { source } => Some(source),
            Self::Configuration { source } => Some(source),
            _ => None,
        }
    }

    pub(crate) fn unsupported_type<S: Into<String>>(type_name: S) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }
}

impl<G> From<std::sync::PoisonError<G>> for XmlError {
    fn from(_error: std::sync::PoisonError<G>) -> Self {
        Self::Poison
    }
}

/// Creates an `XmlError::UsageDetailed` from a format string.
#[macro_export]
macro_rules! usage_err {
    ($($arg:tt)*) => {
        $crate::XmlError::UsageDetailed(format!($($arg)*))
    };
}
