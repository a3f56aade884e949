use crate::{
    driver::{ClassId, ColumnValue, DriverCatalog, DriverValue, RawValue},
    NativeXml,
};

/// Classifies the values that a driver returns into [`ColumnValue`]s.
///
/// The native XML class is resolved once, at construction; classification then only
/// compares class tags.
#[derive(Clone, Debug)]
pub struct DriverAdapter {
    driver_name: String,
    native_class_name: String,
    native_xml: Option<ClassId>,
}

impl DriverAdapter {
    /// Resolves the native XML class in the driver's catalog.
    pub fn new(catalog: &dyn DriverCatalog, native_class_name: &str) -> Self {
        let native_xml = catalog.resolve_class(native_class_name);
        match native_xml {
            Some(class_id) => info!(
                "driver {} supports native XML class {native_class_name} ({class_id:?})",
                catalog.driver_name()
            ),
            None => info!(
                "driver {} has no native XML class {native_class_name}; \
                 only generic XML streams are recognized",
                catalog.driver_name()
            ),
        }
        Self {
            driver_name: catalog.driver_name().to_string(),
            native_class_name: native_class_name.to_string(),
            native_xml,
        }
    }

    /// Name of the driver this adapter was created for.
    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    /// Fully qualified name of the native XML class.
    pub fn native_class_name(&self) -> &str {
        &self.native_class_name
    }

    /// Returns true if the driver provides the native XML class.
    pub fn supports_native_xml(&self) -> bool {
        self.native_xml.is_some()
    }

    /// The tag of the native XML class, if the driver provides it.
    pub fn native_xml_class(&self) -> Option<ClassId> {
        self.native_xml
    }

    /// Maps a driver value into the closed set of column value shapes.
    pub fn classify(&self, value: DriverValue) -> ColumnValue {
        match value {
            DriverValue::Null => ColumnValue::Absent,
            DriverValue::Object(object) => {
                if Some(object.class_id()) == self.native_xml {
                    ColumnValue::Native(NativeXml::new(object))
                } else {
                    ColumnValue::Raw(RawValue::new(object.class_name(), Vec::new()))
                }
            }
            DriverValue::SqlXml(sqlxml) => ColumnValue::Stream(sqlxml),
            DriverValue::Text(s) => ColumnValue::Raw(RawValue::new("TEXT", s.into_bytes())),
            DriverValue::Bytes(bytes) => ColumnValue::Raw(RawValue::new("BINARY", bytes)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::DriverAdapter;
    use crate::{
        driver::{
            ClassId, ColumnValue, DriverCatalog, DriverObject, DriverResult, DriverValue,
            LobSource,
        },
        SqlXml, XMLTYPE_CLASS_NAME,
    };
    use std::{io::Read, sync::Arc};

    const XMLTYPE: ClassId = ClassId::new(7);
    const STRUCT: ClassId = ClassId::new(8);

    struct Catalog(bool);
    impl DriverCatalog for Catalog {
        fn driver_name(&self) -> &str {
            "testdriver"
        }
        fn resolve_class(&self, class_name: &str) -> Option<ClassId> {
            (self.0 && class_name == XMLTYPE_CLASS_NAME).then_some(XMLTYPE)
        }
    }

    #[derive(Debug)]
    struct Object(ClassId, &'static str);
    impl LobSource for Object {
        fn binary_stream(&self) -> DriverResult<Box<dyn Read + Send + '_>> {
            Ok(Box::new(&b"<a/>"[..]))
        }
    }
    impl DriverObject for Object {
        fn class_id(&self) -> ClassId {
            self.0
        }
        fn class_name(&self) -> &str {
            self.1
        }
    }

    #[test]
    fn test_classify() {
        let adapter = DriverAdapter::new(&Catalog(true), XMLTYPE_CLASS_NAME);
        assert!(adapter.supports_native_xml());

        assert!(adapter.classify(DriverValue::Null).is_absent());
        assert!(matches!(
            adapter.classify(DriverValue::Object(Arc::new(Object(XMLTYPE, XMLTYPE_CLASS_NAME)))),
            ColumnValue::Native(_)
        ));
        assert!(matches!(
            adapter.classify(DriverValue::SqlXml(SqlXml::from_bytes(b"<a/>".to_vec()))),
            ColumnValue::Stream(_)
        ));
        match adapter.classify(DriverValue::Object(Arc::new(Object(STRUCT, "oracle.sql.STRUCT")))) {
            ColumnValue::Raw(raw) => assert_eq!(raw.type_name(), "oracle.sql.STRUCT"),
            other => panic!("unexpected classification: {other:?}"),
        }
        match adapter.classify(DriverValue::Text("<a/>".to_string())) {
            ColumnValue::Raw(raw) => {
                assert_eq!(raw.type_name(), "TEXT");
                assert_eq!(raw.bytes(), b"<a/>");
            }
            other => panic!("unexpected classification: {other:?}"),
        }
    }

    #[test]
    fn test_classify_without_native_class() {
        let adapter = DriverAdapter::new(&Catalog(false), XMLTYPE_CLASS_NAME);
        assert!(!adapter.supports_native_xml());
        // an object that claims the name, but was not resolved by the catalog
        assert!(matches!(
            adapter.classify(DriverValue::Object(Arc::new(Object(XMLTYPE, XMLTYPE_CLASS_NAME)))),
            ColumnValue::Raw(_)
        ));
    }
}
