use crate::{
    driver::{ClassId, DriverObject, DriverResult, XmlSession},
    types_impl::read_all,
    XmlResult,
};
use std::{io::Read, sync::Arc};

/// Adapter around a driver-native XML object.
///
/// Gives the native object the same read access as a generic [`SqlXml`](crate::SqlXml),
/// and keeps the object itself available for binding it back to the same driver.
#[derive(Clone, Debug)]
pub struct NativeXml(Arc<dyn DriverObject>);

impl NativeXml {
    pub(crate) fn new(object: Arc<dyn DriverObject>) -> Self {
        Self(object)
    }

    /// The class tag of the wrapped object.
    pub fn class_id(&self) -> ClassId {
        self.0.class_id()
    }

    /// The runtime class name of the wrapped object.
    pub fn class_name(&self) -> &str {
        self.0.class_name()
    }

    /// The wrapped driver object.
    pub fn as_driver_object(&self) -> &dyn DriverObject {
        &*self.0
    }

    /// Opens a new stream over the complete content.
    pub fn binary_stream(&self) -> DriverResult<Box<dyn Read + Send + '_>> {
        self.0.binary_stream()
    }

    /// Length of the content in bytes, if known upfront.
    pub fn byte_length(&self) -> Option<u64> {
        self.0.byte_length()
    }

    /// Reads the complete content.
    pub fn to_bytes(&self) -> XmlResult<Vec<u8>> {
        read_all(&*self.0)
    }

    /// Reads the complete content and decodes it as UTF-8.
    pub fn to_string_value(&self) -> XmlResult<String> {
        Ok(String::from_utf8(self.to_bytes()?)?)
    }

    /// Returns true if both adapters wrap the same driver object.
    pub fn shares_object_with(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// Constructs a driver-native XML object from a byte stream, using the session's driver.
///
/// Driver failures are returned unchanged within [`XmlError::Driver`](crate::XmlError::Driver).
pub fn create_xml_object(session: &dyn XmlSession, stream: &mut dyn Read) -> XmlResult<NativeXml> {
    let object = session.create_xml_object(stream)?;
    debug!(
        "create_xml_object(): created {} in {}",
        object.class_name(),
        session.execution_context()
    );
    Ok(NativeXml::new(object))
}
