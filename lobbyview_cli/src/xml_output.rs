use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

use lobbyview_api::{Endpoint, Record};

/// Element name for one record of `endpoint`, e.g. `legislator` or `quarter_level_network`.
fn item_tag(endpoint: Endpoint) -> String {
    let name = endpoint.to_string();
    match name.strip_suffix('s') {
        Some(singular) => singular.to_string(),
        None => name,
    }
}

/// Element name for the members of an array field.
fn singular(field: &str) -> &str {
    match field {
        "legislator_party" => "party",
        "legislator_state" => "state",
        _ => "item",
    }
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    match value {
        serde_json::Value::Null => {
            // Omit null fields entirely
        }
        serde_json::Value::Bool(b) => {
            write_text(writer, tag, if *b { "true" } else { "false" })?;
        }
        serde_json::Value::Number(n) => {
            write_text(writer, tag, &n.to_string())?;
        }
        serde_json::Value::String(s) => {
            write_text(writer, tag, s)?;
        }
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            write_record(writer, tag, map)?;
        }
    }
    Ok(())
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_record<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    record: &Record,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    for (key, val) in record {
        write_value(writer, key, val)?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Serializes the records of one endpoint into an XML document rooted at
/// the endpoint name, one child element per record.
pub fn records_to_xml(endpoint: Endpoint, records: &[Record]) -> anyhow::Result<String> {
    let root_tag = endpoint.to_string();
    let item_tag = item_tag(endpoint);
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if records.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag.as_str())))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag.as_str())))?;
        for record in records {
            write_record(&mut writer, &item_tag, record)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag.as_str())))?;
    }

    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}
