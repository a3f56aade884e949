use crate::{XmlError, XmlResult};
use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};

/// Checks that the given bytes are a well-formed XML document.
///
/// The document must have exactly one root element, all elements must be closed
/// with matching end tags, and no text is allowed outside of the root element
/// (except for whitespace). Attributes must be unique per element, and all entity
/// references must resolve to predefined entities or character references.
pub fn check_well_formed(bytes: &[u8]) -> XmlResult<()> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::<u8>::new();
    let mut depth = 0_usize;
    let mut roots = 0_usize;

    loop {
        let position = reader.buffer_position();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref start)) => {
                check_attributes(start, position)?;
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Ok(Event::End(_)) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| malformed(position, "end tag without start tag"))?;
            }
            Ok(Event::Empty(ref empty)) => {
                check_attributes(empty, position)?;
                if depth == 0 {
                    roots += 1;
                }
            }
            Ok(Event::Text(text)) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(malformed(position, "text outside of the root element"));
                }
                text.unescape().map_err(|e| malformed(position, &e.to_string()))?;
            }
            Ok(Event::CData(_)) => {
                if depth == 0 {
                    return Err(malformed(position, "CDATA outside of the root element"));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(reader.buffer_position(), &e.to_string())),
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(malformed(bytes.len(), "unclosed element"));
    }
    match roots {
        0 => Err(malformed(bytes.len(), "no root element")),
        1 => Ok(()),
        _ => Err(malformed(bytes.len(), "more than one root element")),
    }
}

fn check_attributes(start: &BytesStart<'_>, position: usize) -> XmlResult<()> {
    for attribute in start.attributes().with_checks(true) {
        attribute
            .map_err(|e| malformed(position, &e.to_string()))?
            .unescape_value()
            .map_err(|e| malformed(position, &e.to_string()))?;
    }
    Ok(())
}

fn malformed(position: usize, reason: &str) -> XmlError {
    XmlError::MalformedXml {
        position,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::check_well_formed;
    use crate::XmlError;

    #[test]
    fn test_well_formed() {
        check_well_formed(b"<a/>").unwrap();
        check_well_formed(
            br#"<?xml version="1.0" encoding="UTF-8"?>
            <!-- comment -->
            <order id="1" note="a &amp; b"><item>caf&#233; &lt;1&gt;</item><![CDATA[<raw>]]></order>
            "#,
        )
        .unwrap();
    }

    #[test]
    fn test_malformed() {
        let docs: [&[u8]; 10] = [
            b"",
            b"just text",
            b"<a>",
            b"<a></b>",
            b"</a>",
            b"<a/><b/>",
            b"<a/>trailing",
            b"<a x='1' x='2'/>",
            b"<a><b y=\"1\" y=\"1\"></b></a>",
            b"<a>&bogus;</a>",
        ];
        for doc in docs {
            match check_well_formed(doc) {
                Err(XmlError::MalformedXml { .. }) => {}
                other => panic!(
                    "{:?} should be malformed, got {other:?}",
                    String::from_utf8_lossy(doc)
                ),
            }
        }
    }
}
