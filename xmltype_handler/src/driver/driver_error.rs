use std::error::Error;

/// Severity of a driver message
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    /// A warning that was sent along with a regular response.
    Warning,
    /// The request could not be answered correctly.
    Error,
    /// A fatal, session-terminating error occured.
    Fatal,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::Warning => write!(f, "Warning")?,
            Self::Error => write!(f, "Error")?,
            Self::Fatal => write!(f, "Fatal error")?,
        }
        Ok(())
    }
}

/// Describes an error that is reported from the database driver.
///
/// The handler never retries or rewraps a `DriverError` during binds; it reaches the caller
/// within [`XmlError::Driver`](crate::XmlError::Driver).
#[derive(Clone, PartialEq, Eq)]
pub struct DriverError {
    code: i32,
    severity: Severity,
    sqlstate: String,
    text: String,
}

/// Abbreviation of `Result<T, DriverError>`.
pub type DriverResult<T> = std::result::Result<T, DriverError>;

impl DriverError {
    /// Creates a new `DriverError` with severity `Error`.
    pub fn new<S: Into<String>, T: Into<String>>(code: i32, sqlstate: S, text: T) -> Self {
        Self {
            code,
            severity: Severity::Error,
            sqlstate: sqlstate.into(),
            text: text.into(),
        }
    }

    /// Builder-method for setting the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the error code.
    pub fn code(&self) -> i32 {
        self.code
    }
    /// Returns the Severity of the error.
    pub fn severity(&self) -> &Severity {
        &self.severity
    }
    /// Returns the SQL state of the error.
    pub fn sqlstate(&self) -> &str {
        &self.sqlstate
    }
    /// Returns the description of the error.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Error for DriverError {}

impl std::fmt::Display for DriverError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fmt,
            r#"{}[code: {}, sql state: {}]: "{}""#,
            self.severity, self.code, self.sqlstate, self.text
        )
    }
}

impl std::fmt::Debug for DriverError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self}")
    }
}
