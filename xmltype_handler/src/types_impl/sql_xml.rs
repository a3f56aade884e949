use crate::{
    driver::{DriverResult, LobSource},
    XmlResult,
};
use std::{io::Read, sync::Arc};

/// Generic, driver-neutral handle on XML content.
///
/// The content is not materialized by the handle; it is read from the underlying
/// [`LobSource`] whenever a stream is opened.
/// Cloning a `SqlXml` is cheap; clones share the source.
#[derive(Clone, Debug)]
pub struct SqlXml(Arc<dyn LobSource>);

impl SqlXml {
    /// Creates a handle on the given source.
    pub fn new(source: Arc<dyn LobSource>) -> Self {
        Self(source)
    }

    /// Creates a handle on content that is held in memory.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Arc::new(InMemoryLob::new(bytes)))
    }

    /// Creates a handle on the UTF-8 representation of the given String.
    pub fn from_string(s: String) -> Self {
        Self::from_bytes(s.into_bytes())
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

    /// Returns true if both handles refer to the same source.
    pub fn shares_source_with(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// A [`LobSource`] over bytes that are held in memory.
#[derive(Debug, Default)]
pub struct InMemoryLob(Vec<u8>);
impl InMemoryLob {
    /// Creates a new source.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}
impl LobSource for InMemoryLob {
    fn binary_stream(&self) -> DriverResult<Box<dyn Read + Send + '_>> {
        Ok(Box::new(self.0.as_slice()))
    }

    fn byte_length(&self) -> Option<u64> {
        Some(self.0.len() as u64)
    }
}

pub(crate) fn read_all<L: LobSource + ?Sized>(source: &L) -> XmlResult<Vec<u8>> {
    let mut stream = source.binary_stream()?;
    let mut bytes = Vec::<u8>::new();
    stream.read_to_end(&mut bytes)?;
    trace!("read_all(): got {} bytes", bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod test {
    use super::SqlXml;

    #[test]
    fn test_sqlxml() {
        let sqlxml = SqlXml::from_string("<café/>".to_string());
        assert_eq!(sqlxml.byte_length(), Some(8));
        assert_eq!(sqlxml.to_bytes().unwrap(), "<café/>".as_bytes());
        assert_eq!(sqlxml.to_string_value().unwrap(), "<café/>");

        let clone = sqlxml.clone();
        assert!(clone.shares_source_with(&sqlxml));
        let other = SqlXml::from_string("<café/>".to_string());
        assert!(!other.shares_source_with(&sqlxml));
    }

    #[test]
    fn test_invalid_utf8() {
        let sqlxml = SqlXml::from_bytes(vec![b'<', 0xff, b'/', b'>']);
        assert!(sqlxml.to_string_value().is_err());
    }
}
