use crate::{NativeXml, SqlXml};

/// Value of an XML column, after classification by the [`DriverAdapter`](crate::driver::DriverAdapter).
#[derive(Debug, Clone)]
pub enum ColumnValue {
    /// The column is NULL, or could not be read at all.
    Absent,
    /// A driver-native XML object.
    Native(NativeXml),
    /// A generic XML stream handle.
    Stream(SqlXml),
    /// Anything else; not usable as XML content.
    Raw(RawValue),
}

impl ColumnValue {
    /// Returns true if the value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(*self, Self::Absent)
    }
}

/// A value of some other type, with its runtime type name.
#[derive(Debug, Clone)]
pub struct RawValue {
    type_name: String,
    bytes: Vec<u8>,
}
impl RawValue {
    pub(crate) fn new<S: Into<String>>(type_name: S, bytes: Vec<u8>) -> Self {
        Self {
            type_name: type_name.into(),
            bytes,
        }
    }

    /// Runtime type name of the value.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The plain payload, if the value had one; empty for opaque objects.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
