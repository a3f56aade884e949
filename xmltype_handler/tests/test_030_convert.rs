
use log::info;
use std::sync::Arc;
use test_utils::{MockCatalog, MockColumn, MockCursor, MockObject, MockSession};
use xmltype_handler::{
    driver::{DeclaredType, DriverValue, XmlSession},
    ForeignXmlContent, HostValue, SqlXml, XmlContent, XmlError, XmlResult, XmlValueHandler,
};

#[test]
fn test_030_convert() -> XmlResult<()> {
    let _log_handle = test_utils::init_logger();
    let handler = XmlValueHandler::new(&MockCatalog::new());
    let session = MockSession::new();
    let declared = DeclaredType::xmltype();

    convert_null(&handler, &session, &declared)?;
    convert_own_content(&handler, &session, &declared)?;
    convert_foreign_content(&handler, &session, &declared)?;
    convert_plain_values(&handler, &session, &declared)?;
    convert_with_validation(&handler, &session, &declared)?;

    info!("{}", handler.statistics()?);
    Ok(())
}

fn convert_null(
    handler: &XmlValueHandler,
    session: &MockSession,
    declared: &DeclaredType,
) -> XmlResult<()> {
    info!("NULL converts into NULL content");
    for copy in [false, true] {
        let content = handler.value_from_object(session, declared, HostValue::Null, copy, true)?;
        assert!(content.is_null());
        assert!(Arc::ptr_eq(
            content.execution_context(),
            session.execution_context()
        ));
    }
    Ok(())
}

fn convert_own_content(
    handler: &XmlValueHandler,
    session: &MockSession,
    declared: &DeclaredType,
) -> XmlResult<()> {
    info!("own content is taken over, or duplicated with copy = true");
    let mut cursor = MockCursor::new(vec![
        MockColumn::object(DriverValue::Object(MockObject::xmltype(b"<native/>"))),
        MockColumn::object(DriverValue::SqlXml(SqlXml::from_bytes(b"<stream/>".to_vec()))),
    ]);

    for (index, expected) in [(1, &b"<native/>"[..]), (2, &b"<stream/>"[..])] {
        let original = handler.fetch_column_value(session, &mut cursor, declared, index)?;

        let same =
            handler.value_from_object(session, declared, original.clone().into(), false, false)?;
        assert!(same.shares_source_with(&original));

        let duplicate =
            handler.value_from_object(session, declared, original.clone().into(), true, false)?;
        assert!(!duplicate.shares_source_with(&original));
        assert_eq!(duplicate.to_bytes()?.unwrap(), expected);
        assert_eq!(original.to_bytes()?.unwrap(), expected);
        assert!(Arc::ptr_eq(
            duplicate.execution_context(),
            original.execution_context()
        ));
    }

    // a NULL wrapper stays NULL, also when copied
    let null = XmlContent::null(Arc::clone(session.execution_context()));
    assert!(handler
        .value_from_object(session, declared, null.into(), true, false)?
        .is_null());

    assert_eq!(handler.statistics()?.duplicate_count(), 3);
    assert_eq!(handler.statistics()?.duplicated_bytes(), 9 + 9);
    Ok(())
}

fn convert_foreign_content(
    handler: &XmlValueHandler,
    session: &MockSession,
    declared: &DeclaredType,
) -> XmlResult<()> {
    info!("content of other drivers is wrapped by the large-object handler");
    let sqlxml = SqlXml::from_string("<pg/>".to_string());
    let foreign = ForeignXmlContent::new("postgres", Some(sqlxml.clone()));

    let content =
        handler.value_from_object(session, declared, foreign.clone().into(), false, false)?;
    assert!(content.stream().unwrap().shares_source_with(&sqlxml));

    let content = handler.value_from_object(session, declared, foreign.into(), true, false)?;
    assert!(!content.stream().unwrap().shares_source_with(&sqlxml));
    assert_eq!(content.to_string_value()?.unwrap(), "<pg/>");

    // copies of foreign content are counted like copies of own content
    let statistics = handler.statistics()?;
    assert_eq!(statistics.duplicate_count(), 4);
    assert_eq!(statistics.duplicated_bytes(), 18 + 5);

    let content = handler.value_from_object(
        session,
        declared,
        ForeignXmlContent::new("postgres", None).into(),
        true,
        true,
    )?;
    assert!(content.is_null());
    Ok(())
}

fn convert_plain_values(
    handler: &XmlValueHandler,
    session: &MockSession,
    declared: &DeclaredType,
) -> XmlResult<()> {
    info!("strings and UTF-8 bytes become content, other values are rejected");
    let content = handler.value_from_object(session, declared, "<a>é</a>".into(), false, false)?;
    assert_eq!(content.to_string_value()?.unwrap(), "<a>é</a>");
    assert_eq!(content.content_length(), Some(9));

    let content = handler.value_from_object(
        session,
        declared,
        HostValue::Bytes(b"<b/>".to_vec()),
        false,
        false,
    )?;
    assert_eq!(content.to_bytes()?.unwrap(), b"<b/>");

    assert!(matches!(
        handler.value_from_object(
            session,
            declared,
            HostValue::Bytes(vec![0xff, 0xfe]),
            false,
            false
        ),
        Err(XmlError::Utf8 { .. })
    ));

    for value in [HostValue::Int(1), HostValue::Double(1.0), HostValue::Bool(true)] {
        let type_name = value.type_name();
        match handler.value_from_object(session, declared, value, false, false) {
            Err(XmlError::UnsupportedType { type_name: t }) => assert_eq!(t, type_name),
            other => panic!("unexpected result: {other:?}"),
        }
    }
    Ok(())
}

fn convert_with_validation(
    handler: &XmlValueHandler,
    session: &MockSession,
    declared: &DeclaredType,
) -> XmlResult<()> {
    info!("with validate = true, the content must be well-formed");
    handler.value_from_object(session, declared, "<a><b/></a>".into(), false, true)?;

    for malformed in ["<a><b></a>", "<a id='1' id='2'/>", "<a>&nbsp;</a>"] {
        match handler.value_from_object(session, declared, malformed.into(), false, true) {
            Err(XmlError::MalformedXml { reason, .. }) => info!("rejected {malformed}: {reason}"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    // without validation, anything goes
    let content = handler.value_from_object(session, declared, "<a>".into(), false, false)?;
    assert_eq!(content.to_string_value()?.unwrap(), "<a>");
    Ok(())
}
