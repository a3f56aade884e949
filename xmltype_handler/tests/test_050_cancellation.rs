
use log::info;
use std::{io::Read, sync::Arc};
use test_utils::{MockCatalog, MockSession};
use xmltype_handler::{
    driver::{DeclaredType, DriverResult, LobSource, XmlSession},
    HandlerConfiguration, HostValue, ProgressMonitor, SqlXml, XmlContent, XmlError, XmlResult,
    XmlValueHandler,
};

#[test]
fn test_050_cancellation() -> XmlResult<()> {
    let _log_handle = test_utils::init_logger();
    let config = HandlerConfiguration::default().with_copy_chunk_size(16);
    let handler = XmlValueHandler::with_configuration(&MockCatalog::new(), &config)?;

    cancel_during_copy(&handler)?;
    cancel_before_copy(&handler)?;
    copy_without_cancellation(&handler)?;
    copy_within_host_task(&handler)?;
    Ok(())
}

// Content source that cancels the monitor as soon as it is read.
#[derive(Debug)]
struct CancellingLob {
    bytes: Vec<u8>,
    monitor: ProgressMonitor,
}
impl LobSource for CancellingLob {
    fn binary_stream(&self) -> DriverResult<Box<dyn Read + Send + '_>> {
        Ok(Box::new(CancellingReader {
            bytes: &self.bytes,
            monitor: &self.monitor,
        }))
    }
    fn byte_length(&self) -> Option<u64> {
        Some(self.bytes.len() as u64)
    }
}

struct CancellingReader<'a> {
    bytes: &'a [u8],
    monitor: &'a ProgressMonitor,
}
impl Read for CancellingReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.monitor.cancel();
        self.bytes.read(buf)
    }
}

fn cancel_during_copy(handler: &XmlValueHandler) -> XmlResult<()> {
    info!("a copy stops as soon as the monitor is cancelled");
    let session = MockSession::new();
    let lob = CancellingLob {
        bytes: b"<a>".repeat(100),
        monitor: session.progress_monitor().clone(),
    };
    let content = XmlContent::with_stream(
        Arc::clone(session.execution_context()),
        SqlXml::new(Arc::new(lob)),
    );

    let result = handler.value_from_object(
        &session,
        &DeclaredType::xmltype(),
        HostValue::Xml(content),
        true,
        false,
    );
    assert!(matches!(result, Err(XmlError::Cancelled)));

    let monitor = session.progress_monitor();
    assert_eq!(monitor.sub_work_done(), 16);
    assert_eq!(monitor.sub_total_work(), 300);
    assert_eq!(monitor.current_sub_task()?, None);
    assert_eq!(handler.statistics()?.duplicate_count(), 0);
    Ok(())
}

fn cancel_before_copy(handler: &XmlValueHandler) -> XmlResult<()> {
    info!("a copy with an already cancelled monitor does not read anything");
    let session = MockSession::new();
    session.progress_monitor().cancel();
    let content = XmlContent::with_stream(
        Arc::clone(session.execution_context()),
        SqlXml::from_bytes(b"<a/>".to_vec()),
    );

    let error = handler
        .value_from_object(
            &session,
            &DeclaredType::xmltype(),
            HostValue::Xml(content.clone()),
            true,
            false,
        )
        .unwrap_err();
    assert!(matches!(error, XmlError::Cancelled));
    assert_eq!(session.progress_monitor().sub_work_done(), 0);

    // without copy, the monitor is not involved
    let same = handler.value_from_object(
        &session,
        &DeclaredType::xmltype(),
        HostValue::Xml(content.clone()),
        false,
        false,
    )?;
    assert!(same.shares_source_with(&content));
    Ok(())
}

fn copy_without_cancellation(handler: &XmlValueHandler) -> XmlResult<()> {
    info!("progress is reported for each chunk");
    let session = MockSession::new();
    let text = "<doc>".to_string() + &"x".repeat(1000) + "</doc>";
    let content = XmlContent::with_stream(
        Arc::clone(session.execution_context()),
        SqlXml::from_string(text.clone()),
    );

    let copy = handler.value_from_object(
        &session,
        &DeclaredType::xmltype(),
        HostValue::Xml(content),
        true,
        true,
    )?;
    assert_eq!(copy.to_string_value()?.unwrap_or_default(), text);
    assert_eq!(session.progress_monitor().sub_work_done(), text.len() as u64);
    assert!(!session.progress_monitor().is_canceled());
    Ok(())
}

fn copy_within_host_task(handler: &XmlValueHandler) -> XmlResult<()> {
    info!("a copy does not disturb the task the host is running");
    let session = MockSession::new();
    let monitor = session.progress_monitor();
    monitor.begin_task("Export rows", 1000)?;
    monitor.worked(500);

    let content = XmlContent::with_stream(
        Arc::clone(session.execution_context()),
        SqlXml::from_bytes(b"<a/>".to_vec()),
    );
    handler.value_from_object(
        &session,
        &DeclaredType::xmltype(),
        HostValue::Xml(content),
        true,
        false,
    )?;

    assert_eq!(monitor.current_task()?.as_deref(), Some("Export rows"));
    assert_eq!(monitor.work_done(), 500);
    assert_eq!(monitor.total_work(), 1000);
    assert_eq!(monitor.sub_work_done(), 4);
    assert_eq!(monitor.current_sub_task()?, None);
    Ok(())
}
