use crate::{driver::DriverObject, SqlXml};
use std::sync::Arc;

/// Tag of a runtime class, as handed out by a [`DriverCatalog`](crate::driver::DriverCatalog).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ClassId(u32);
impl ClassId {
    /// Creates a new tag.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
    /// Returns the numeric value of the tag.
    pub fn id(self) -> u32 {
        self.0
    }
}

/// A value as it is returned from a read on a [`ResultCursor`](crate::driver::ResultCursor).
#[derive(Debug, Clone)]
pub enum DriverValue {
    /// SQL NULL.
    Null,
    /// Some driver object.
    Object(Arc<dyn DriverObject>),
    /// A generic XML stream handle.
    SqlXml(SqlXml),
    /// A plain character value.
    Text(String),
    /// A plain binary value.
    Bytes(Vec<u8>),
}

impl DriverValue {
    /// Returns the runtime type name of the value.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Null => "NULL",
            Self::Object(o) => o.class_name(),
            Self::SqlXml(_) => "SQLXML",
            Self::Text(_) => "TEXT",
            Self::Bytes(_) => "BINARY",
        }
    }

    /// Returns true if the value is a NULL value.
    pub fn is_null(&self) -> bool {
        matches!(*self, Self::Null)
    }
}
