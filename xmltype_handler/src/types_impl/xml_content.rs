use crate::{
    driver::{DriverResult, XmlSession},
    types_impl::create_xml_object,
    ExecutionContext, NativeXml, ProgressMonitor, SqlXml, SubTask, XmlError, XmlResult,
    MIME_TEXT_XML,
};
use std::{io::Read, sync::Arc};

// Upper bound for the buffer that is pre-allocated when content is duplicated.
const MAX_PREALLOCATION: u64 = 16 * 1024 * 1024;

/// Large-object content of an XML column.
///
/// `XmlContent` is either NULL, or it wraps exactly one of
///
/// - a driver-native XML object (see [`NativeXml`]),
/// - a generic XML stream handle (see [`SqlXml`]).
///
/// It also keeps the [`ExecutionContext`] under which it was created.
///
/// Cloning an `XmlContent` is cheap, the clones share the underlying object.
/// An independent copy is created with [`clone_value`](XmlContent::clone_value).
#[derive(Clone, Debug)]
pub struct XmlContent {
    context: Arc<ExecutionContext>,
    source: Option<XmlSource>,
}

#[derive(Clone, Debug)]
enum XmlSource {
    Native(NativeXml),
    Stream(SqlXml),
}
impl XmlSource {
    fn binary_stream(&self) -> DriverResult<Box<dyn Read + Send + '_>> {
        match self {
            Self::Native(native) => native.binary_stream(),
            Self::Stream(sqlxml) => sqlxml.binary_stream(),
        }
    }
}

impl XmlContent {
    /// Creates NULL content.
    pub fn null(context: Arc<ExecutionContext>) -> Self {
        Self {
            context,
            source: None,
        }
    }

    /// Creates content that wraps a driver-native XML object.
    pub fn with_native(context: Arc<ExecutionContext>, native: NativeXml) -> Self {
        Self {
            context,
            source: Some(XmlSource::Native(native)),
        }
    }

    /// Creates content that wraps a generic XML stream handle.
    pub fn with_stream(context: Arc<ExecutionContext>, sqlxml: SqlXml) -> Self {
        Self {
            context,
            source: Some(XmlSource::Stream(sqlxml)),
        }
    }

    /// Returns true if the content represents a NULL value.
    pub fn is_null(&self) -> bool {
        self.source.is_none()
    }

    /// The execution context under which the content was created.
    pub fn execution_context(&self) -> &Arc<ExecutionContext> {
        &self.context
    }

    /// The MIME type of the content.
    pub fn content_type(&self) -> &'static str {
        MIME_TEXT_XML
    }

    /// The wrapped driver-native object, if any.
    pub fn native(&self) -> Option<&NativeXml> {
        match self.source {
            Some(XmlSource::Native(ref native)) => Some(native),
            _ => None,
        }
    }

    /// The wrapped generic stream handle, if any.
    pub fn stream(&self) -> Option<&SqlXml> {
        match self.source {
            Some(XmlSource::Stream(ref sqlxml)) => Some(sqlxml),
            _ => None,
        }
    }

    /// Length of the content in bytes, if known upfront.
    pub fn content_length(&self) -> Option<u64> {
        match self.source {
            None => Some(0),
            Some(XmlSource::Native(ref native)) => native.byte_length(),
            Some(XmlSource::Stream(ref sqlxml)) => sqlxml.byte_length(),
        }
    }

    /// Opens a new stream over the content, or returns `None` for NULL content.
    pub fn binary_stream(&self) -> XmlResult<Option<Box<dyn Read + Send + '_>>> {
        match self.source {
            None => Ok(None),
            Some(ref source) => Ok(Some(source.binary_stream()?)),
        }
    }

    /// Reads the complete content, or returns `None` for NULL content.
    pub fn to_bytes(&self) -> XmlResult<Option<Vec<u8>>> {
        match self.source {
            None => Ok(None),
            Some(XmlSource::Native(ref native)) => Ok(Some(native.to_bytes()?)),
            Some(XmlSource::Stream(ref sqlxml)) => Ok(Some(sqlxml.to_bytes()?)),
        }
    }

    /// Reads the complete content as String, or returns `None` for NULL content.
    pub fn to_string_value(&self) -> XmlResult<Option<String>> {
        match self.to_bytes()? {
            None => Ok(None),
            Some(bytes) => Ok(Some(String::from_utf8(bytes)?)),
        }
    }

    /// Returns true if both instances share the underlying object.
    pub fn shares_source_with(&self, other: &Self) -> bool {
        match (&self.source, &other.source) {
            (Some(XmlSource::Native(a)), Some(XmlSource::Native(b))) => a.shares_object_with(b),
            (Some(XmlSource::Stream(a)), Some(XmlSource::Stream(b))) => a.shares_source_with(b),
            _ => false,
        }
    }

    /// Creates an independent copy of the content.
    ///
    /// The content is read in chunks of `chunk_size` bytes and held in memory by the copy.
    /// Progress is reported in a sub-task of the monitor, so that the host's own task is
    /// left alone, and the copy is abandoned with [`XmlError::Cancelled`] as soon as the
    /// monitor is cancelled.
    ///
    /// The copy keeps the execution context of `self`.
    pub fn clone_value(&self, monitor: &ProgressMonitor, chunk_size: usize) -> XmlResult<Self> {
        let Some(ref source) = self.source else {
            return Ok(Self::null(Arc::clone(&self.context)));
        };
        if chunk_size == 0 {
            return Err(XmlError::Usage("chunk size must not be 0"));
        }

        let total = self.content_length().unwrap_or(0);
        let bytes = {
            let sub_task = monitor.sub_task("Copy XML content", total)?;
            copy_chunked(source, &sub_task, chunk_size, total)?
        };
        debug!("clone_value(): copied {} bytes", bytes.len());
        Ok(Self::with_stream(
            Arc::clone(&self.context),
            SqlXml::from_bytes(bytes),
        ))
    }

    // Provides the driver-native object for binding; stream content is converted by the driver.
    pub(crate) fn to_native(&self, session: &dyn XmlSession) -> XmlResult<Option<NativeXml>> {
        match self.source {
            None => Ok(None),
            Some(XmlSource::Native(ref native)) => Ok(Some(native.clone())),
            Some(XmlSource::Stream(ref sqlxml)) => {
                let mut stream = sqlxml.binary_stream()?;
                Ok(Some(create_xml_object(session, &mut stream)?))
            }
        }
    }
}

fn copy_chunked(
    source: &XmlSource,
    sub_task: &SubTask<'_>,
    chunk_size: usize,
    total: u64,
) -> XmlResult<Vec<u8>> {
    let mut stream = source.binary_stream()?;
    let mut buf = vec![0_u8; chunk_size].into_boxed_slice();
    let mut copy =
        Vec::<u8>::with_capacity(usize::try_from(total.min(MAX_PREALLOCATION)).unwrap_or(0));
    loop {
        if sub_task.is_canceled() {
            debug!("copy_chunked(): cancelled after {} bytes", copy.len());
            return Err(XmlError::Cancelled);
        }
        let read = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        copy.extend_from_slice(&buf[0..read]);
        sub_task.worked(read as u64);
    }
    Ok(copy)
}
