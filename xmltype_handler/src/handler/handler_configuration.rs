use crate::{XmlError, XmlResult, XMLTYPE_CLASS_NAME};

/// A collection of settings that influence the runtime behavior of an
/// [`XmlValueHandler`](crate::XmlValueHandler).
///
/// # Example
///
/// ```rust,no_run
/// # use xmltype_handler::HandlerConfiguration;
/// let config = HandlerConfiguration::default().with_copy_chunk_size(1_000_000);
/// let config = HandlerConfiguration::from_json(r#"{"copy_chunk_size": 65536}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfiguration {
    copy_chunk_size: usize,
    native_class_name: String,
}

impl Default for HandlerConfiguration {
    fn default() -> Self {
        Self {
            copy_chunk_size: Self::DEFAULT_COPY_CHUNK_SIZE,
            native_class_name: XMLTYPE_CLASS_NAME.to_string(),
        }
    }
}

impl HandlerConfiguration {
    /// Default value for the number of bytes that are copied in one step when content is
    /// duplicated.
    ///
    /// Cancellation requests are checked between two steps.
    pub const DEFAULT_COPY_CHUNK_SIZE: usize = 199 * 1024_usize;

    /// Parses a configuration from its JSON representation; missing fields get their default.
    pub fn from_json(json: &str) -> XmlResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> XmlResult<()> {
        if self.copy_chunk_size == 0 {
            return Err(XmlError::Usage("copy_chunk_size must be > 0"));
        }
        if self.native_class_name.is_empty() {
            return Err(XmlError::Usage("native_class_name must not be empty"));
        }
        Ok(())
    }

    /// Returns the number of bytes that are copied in one step when content is duplicated.
    pub fn copy_chunk_size(&self) -> usize {
        self.copy_chunk_size
    }
    /// Sets the number of bytes that are copied in one step when content is duplicated.
    pub fn set_copy_chunk_size(&mut self, copy_chunk_size: usize) {
        self.copy_chunk_size = copy_chunk_size;
    }
    /// Builder-method for setting the number of bytes that are copied in one step.
    #[must_use]
    pub fn with_copy_chunk_size(mut self, copy_chunk_size: usize) -> Self {
        self.copy_chunk_size = copy_chunk_size;
        self
    }

    /// Returns the class name that identifies the driver-native XML type.
    pub fn native_class_name(&self) -> &str {
        &self.native_class_name
    }
    /// Sets the class name that identifies the driver-native XML type.
    pub fn set_native_class_name<S: Into<String>>(&mut self, native_class_name: S) {
        self.native_class_name = native_class_name.into();
    }
    /// Builder-method for setting the class name that identifies the driver-native XML type.
    #[must_use]
    pub fn with_native_class_name<S: Into<String>>(mut self, native_class_name: S) -> Self {
        self.native_class_name = native_class_name.into();
        self
    }
}
