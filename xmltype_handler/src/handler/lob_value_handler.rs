use crate::{
    check_well_formed,
    driver::{DeclaredType, PreparedStatement, SqlType, XmlSession},
    HandlerConfiguration, HandlerStatistics, HostValue, SqlXml, XmlContent, XmlError, XmlResult,
};
use std::sync::{Arc, Mutex};

/// The handling that XML content shares with other character large objects.
///
/// [`XmlValueHandler`](crate::XmlValueHandler) deals with the XML specific cases itself
/// and delegates everything else to this handler.
#[derive(Clone, Debug)]
pub struct LobValueHandler {
    copy_chunk_size: usize,
    statistics: Arc<Mutex<HandlerStatistics>>,
}

impl LobValueHandler {
    // The statistics are shared with the owning XmlValueHandler.
    pub(crate) fn new(
        config: &HandlerConfiguration,
        statistics: Arc<Mutex<HandlerStatistics>>,
    ) -> Self {
        Self {
            copy_chunk_size: config.copy_chunk_size(),
            statistics,
        }
    }

    /// Number of bytes that are copied in one step when content is duplicated.
    pub fn copy_chunk_size(&self) -> usize {
        self.copy_chunk_size
    }

    /// Binds a NULL value of type XML that carries the declared type name.
    pub fn bind_null(
        &self,
        statement: &mut dyn PreparedStatement,
        param_type: &DeclaredType,
        index: usize,
    ) -> XmlResult<()> {
        trace!("bind_null(): parameter {index} of type {param_type}");
        statement.set_null(index, SqlType::SQLXML, param_type.type_name())?;
        Ok(())
    }

    /// Binds content that is owned by this handler family.
    ///
    /// NULL content is bound as typed NULL, a wrapped native object is bound as is,
    /// and a wrapped stream is first converted into a native object by the session's driver.
    pub fn bind_content(
        &self,
        session: &dyn XmlSession,
        statement: &mut dyn PreparedStatement,
        param_type: &DeclaredType,
        index: usize,
        content: &XmlContent,
    ) -> XmlResult<()> {
        match content.to_native(session)? {
            None => self.bind_null(statement, param_type, index),
            Some(native) => {
                trace!(
                    "bind_content(): parameter {index} of type {param_type} with {}",
                    native.class_name()
                );
                statement.set_object(index, native.as_driver_object())?;
                Ok(())
            }
        }
    }

    /// Converts a host value into content.
    ///
    /// - NULL becomes NULL content,
    /// - content is taken over, or duplicated if `copy` is set,
    /// - Strings and UTF-8 encoded bytes are wrapped into in-memory content,
    /// - other values are rejected with [`XmlError::UnsupportedType`].
    ///
    /// With `validate`, non-NULL content must be well-formed XML.
    pub fn value_from_object(
        &self,
        session: &dyn XmlSession,
        declared: &DeclaredType,
        value: HostValue,
        copy: bool,
        validate: bool,
    ) -> XmlResult<XmlContent> {
        trace!(
            "value_from_object(): {} for type {declared}, copy = {copy}, validate = {validate}",
            value.type_name()
        );
        let context = Arc::clone(session.execution_context());
        let content = match value {
            HostValue::Null => XmlContent::null(context),
            HostValue::Xml(content) => self.take_over(session, content, copy)?,
            HostValue::ForeignXml(foreign) => match foreign.raw_value() {
                None => XmlContent::null(context),
                Some(sqlxml) => {
                    debug!(
                        "value_from_object(): taking over content from {}",
                        foreign.source_driver()
                    );
                    self.take_over(session, XmlContent::with_stream(context, sqlxml.clone()), copy)?
                }
            },
            HostValue::String(s) => XmlContent::with_stream(context, SqlXml::from_string(s)),
            HostValue::Bytes(bytes) => {
                XmlContent::with_stream(context, SqlXml::from_string(String::from_utf8(bytes)?))
            }
            other => return Err(XmlError::unsupported_type(other.type_name())),
        };

        if validate {
            if let Some(bytes) = content.to_bytes()? {
                check_well_formed(&bytes)?;
            }
        }
        Ok(content)
    }

    // Returns the content itself, or with `copy` an independent duplicate that is counted
    // in the statistics.
    pub(crate) fn take_over(
        &self,
        session: &dyn XmlSession,
        content: XmlContent,
        copy: bool,
    ) -> XmlResult<XmlContent> {
        if copy {
            let duplicate =
                content.clone_value(session.progress_monitor(), self.copy_chunk_size)?;
            self.statistics
                .lock()?
                .add_duplicate(duplicate.content_length().unwrap_or(0));
            Ok(duplicate)
        } else {
            Ok(content)
        }
    }
}
