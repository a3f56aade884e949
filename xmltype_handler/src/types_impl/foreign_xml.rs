use crate::SqlXml;

/// Generic XML content that was produced by some other database driver,
/// e.g. when rows are copied from one database into another.
#[derive(Clone, Debug)]
pub struct ForeignXmlContent {
    source_driver: String,
    raw: Option<SqlXml>,
}

impl ForeignXmlContent {
    /// Creates a new instance; `raw` is `None` for a NULL value.
    pub fn new<S: Into<String>>(source_driver: S, raw: Option<SqlXml>) -> Self {
        Self {
            source_driver: source_driver.into(),
            raw,
        }
    }

    /// Name of the driver that produced the content.
    pub fn source_driver(&self) -> &str {
        &self.source_driver
    }

    /// Returns true if the content represents a NULL value.
    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// The generic stream handle, unless the content is NULL.
    pub fn raw_value(&self) -> Option<&SqlXml> {
        self.raw.as_ref()
    }
}
