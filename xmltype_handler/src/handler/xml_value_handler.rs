use crate::{
    create_xml_object,
    driver::{
        ColumnValue, DeclaredType, DriverAdapter, DriverCatalog, DriverValue, PreparedStatement,
        ResultCursor, XmlSession,
    },
    HandlerConfiguration, HandlerStatistics, HostValue, LobValueHandler, XmlContent, XmlError,
    XmlResult, MIME_TEXT_XML,
};
use std::{
    io::Read,
    sync::{Arc, Mutex},
};

/// Value handler for XML columns.
///
/// Converts between what the driver returns for an XML column and [`XmlContent`],
/// in both directions.
///
/// Content that originates from a different driver, e.g. when data are copied between
/// databases, is accepted for binding as well; it is converted into the native XML object
/// of this handler's driver.
///
/// The handler keeps no state across calls, apart from its [`HandlerStatistics`].
///
/// # Example
///
/// ```rust,no_run
/// # use xmltype_handler::{driver::*, HostValue, XmlResult, XmlValueHandler};
/// # fn foo(
/// #     catalog: &dyn DriverCatalog,
/// #     session: &dyn XmlSession,
/// #     cursor: &mut dyn ResultCursor,
/// #     statement: &mut dyn PreparedStatement,
/// # ) -> XmlResult<()> {
/// let handler = XmlValueHandler::new(catalog);
/// let declared = DeclaredType::xmltype();
///
/// // read from one place ...
/// let content = handler.fetch_column_value(session, cursor, &declared, 1)?;
/// // ... and write to another
/// handler.bind_parameter(session, statement, &declared, 1, &HostValue::Xml(content))?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct XmlValueHandler {
    config: HandlerConfiguration,
    adapter: DriverAdapter,
    lob_handler: LobValueHandler,
    statistics: Arc<Mutex<HandlerStatistics>>,
}

impl XmlValueHandler {
    /// Creates a handler with the default configuration.
    pub fn new(catalog: &dyn DriverCatalog) -> Self {
        Self::build(catalog, HandlerConfiguration::default())
    }

    /// Creates a handler with the given configuration.
    pub fn with_configuration(
        catalog: &dyn DriverCatalog,
        config: &HandlerConfiguration,
    ) -> XmlResult<Self> {
        config.validate()?;
        Ok(Self::build(catalog, config.clone()))
    }

    fn build(catalog: &dyn DriverCatalog, config: HandlerConfiguration) -> Self {
        let statistics = Arc::new(Mutex::new(HandlerStatistics::new()));
        Self {
            adapter: DriverAdapter::new(catalog, config.native_class_name()),
            lob_handler: LobValueHandler::new(&config, Arc::clone(&statistics)),
            statistics,
            config,
        }
    }

    /// The configuration of the handler.
    pub fn configuration(&self) -> &HandlerConfiguration {
        &self.config
    }

    /// The driver adapter that classifies the values returned by the driver.
    pub fn driver_adapter(&self) -> &DriverAdapter {
        &self.adapter
    }

    /// The handler for the generic large-object cases.
    pub fn lob_handler(&self) -> &LobValueHandler {
        &self.lob_handler
    }

    /// The MIME type of the produced content; always `text/xml`.
    pub fn value_content_type(&self, _declared: &DeclaredType) -> &'static str {
        MIME_TEXT_XML
    }

    /// Returns a snapshot of the handler statistics.
    pub fn statistics(&self) -> XmlResult<HandlerStatistics> {
        Ok(self.statistics.lock()?.clone())
    }

    /// Resets the handler statistics.
    pub fn reset_statistics(&self) -> XmlResult<()> {
        self.statistics.lock()?.reset();
        Ok(())
    }

    /// Reads an XML column from the current row of the cursor.
    ///
    /// The column is read as generic object; if that fails, it is read as XML stream handle;
    /// if that fails as well, the value is treated as absent.
    /// Read failures are thus never returned, they are logged and counted in the
    /// [`HandlerStatistics`].
    ///
    /// # Errors
    ///
    /// [`XmlError::UnsupportedType`] if the driver returned something that is neither the
    /// native XML object nor an XML stream handle.
    pub fn fetch_column_value(
        &self,
        session: &dyn XmlSession,
        cursor: &mut dyn ResultCursor,
        declared: &DeclaredType,
        index: usize,
    ) -> XmlResult<XmlContent> {
        let value = self.read_column(cursor, index)?.unwrap_or(DriverValue::Null);
        trace!(
            "fetch_column_value(): column {index} of type {declared} returned {}",
            value.type_name()
        );

        let context = Arc::clone(session.execution_context());
        let content = match self.adapter.classify(value) {
            ColumnValue::Absent => XmlContent::null(context),
            ColumnValue::Native(native) => XmlContent::with_native(context, native),
            ColumnValue::Stream(sqlxml) => XmlContent::with_stream(context, sqlxml),
            ColumnValue::Raw(raw) => {
                self.statistics.lock()?.add_unsupported_type();
                return Err(XmlError::unsupported_type(raw.type_name()));
            }
        };
        self.statistics.lock()?.add_fetch(content.is_null());
        Ok(content)
    }

    // Ordered read attempts; `None` if all of them failed.
    fn read_column(
        &self,
        cursor: &mut dyn ResultCursor,
        index: usize,
    ) -> XmlResult<Option<DriverValue>> {
        if let Some(value) = read_as_object(cursor, index) {
            return Ok(Some(value));
        }
        self.statistics.lock()?.add_fallback_read();

        let value = read_as_sqlxml(cursor, index);
        if value.is_none() {
            self.statistics.lock()?.add_swallowed_read_failure();
        }
        Ok(value)
    }

    /// Binds a value to a parameter of a prepared statement.
    ///
    /// - content of this handler is bound by the [`LobValueHandler`],
    /// - content from other drivers, and all other values in their string form,
    ///   are converted into the driver-native XML object,
    /// - NULL values are bound as NULL of type XML, with the declared type name.
    ///
    /// # Errors
    ///
    /// Failures of the driver are returned unchanged, within [`XmlError::Driver`].
    pub fn bind_parameter(
        &self,
        session: &dyn XmlSession,
        statement: &mut dyn PreparedStatement,
        param_type: &DeclaredType,
        index: usize,
        value: &HostValue,
    ) -> XmlResult<()> {
        trace!(
            "bind_parameter(): parameter {index} of type {param_type} with {}",
            value.type_name()
        );
        match value {
            HostValue::Xml(content) => {
                self.lob_handler
                    .bind_content(session, statement, param_type, index, content)?;
                let mut statistics = self.statistics.lock()?;
                if content.is_null() {
                    statistics.add_null_bind();
                } else if content.native().is_some() {
                    statistics.add_native_bind();
                } else {
                    statistics.add_converted_bind();
                }
                Ok(())
            }
            HostValue::ForeignXml(foreign) => match foreign.raw_value() {
                None => self.bind_null(statement, param_type, index),
                Some(sqlxml) => {
                    debug!(
                        "bind_parameter(): converting content from {}",
                        foreign.source_driver()
                    );
                    let mut stream = sqlxml.binary_stream()?;
                    self.bind_converted(session, statement, index, &mut stream)
                }
            },
            value if value.is_null_value() => self.bind_null(statement, param_type, index),
            value => {
                let bytes = value.to_string_form()?.into_bytes();
                self.bind_converted(session, statement, index, &mut std::io::Cursor::new(bytes))
            }
        }
    }

    fn bind_null(
        &self,
        statement: &mut dyn PreparedStatement,
        param_type: &DeclaredType,
        index: usize,
    ) -> XmlResult<()> {
        self.lob_handler.bind_null(statement, param_type, index)?;
        self.statistics.lock()?.add_null_bind();
        Ok(())
    }

    fn bind_converted(
        &self,
        session: &dyn XmlSession,
        statement: &mut dyn PreparedStatement,
        index: usize,
        stream: &mut dyn Read,
    ) -> XmlResult<()> {
        let native = create_xml_object(session, stream)?;
        statement.set_object(index, native.as_driver_object())?;
        self.statistics.lock()?.add_converted_bind();
        Ok(())
    }

    /// Converts a host value into [`XmlContent`].
    ///
    /// NULL becomes NULL content. Content of this handler is returned as is, or, if `copy`
    /// is set, as an independent copy that is created under the session's progress monitor.
    /// All other values are converted by the [`LobValueHandler`].
    ///
    /// # Errors
    ///
    /// [`XmlError::Cancelled`] if the copy was cancelled through the progress monitor,
    /// and the errors of [`LobValueHandler::value_from_object`].
    pub fn value_from_object(
        &self,
        session: &dyn XmlSession,
        declared: &DeclaredType,
        value: HostValue,
        copy: bool,
        validate: bool,
    ) -> XmlResult<XmlContent> {
        match value {
            HostValue::Null => Ok(XmlContent::null(Arc::clone(session.execution_context()))),
            HostValue::Xml(content) => self.lob_handler.take_over(session, content, copy),
            value => self
                .lob_handler
                .value_from_object(session, declared, value, copy, validate),
        }
    }
}

fn read_as_object(cursor: &mut dyn ResultCursor, index: usize) -> Option<DriverValue> {
    match cursor.get_object(index) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("read_as_object(): column {index} not readable as object: {e}");
            None
        }
    }
}

fn read_as_sqlxml(cursor: &mut dyn ResultCursor, index: usize) -> Option<DriverValue> {
    match cursor.get_sqlxml(index) {
        Ok(Some(sqlxml)) => Some(DriverValue::SqlXml(sqlxml)),
        Ok(None) => Some(DriverValue::Null),
        Err(e) => {
            warn!("read_as_sqlxml(): column {index} not readable, treating it as absent: {e}");
            None
        }
    }
}
