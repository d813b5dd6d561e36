//! OSM XML request bodies
//!
//! The write endpoints take XML payloads; everything here produces
//! them. Responses are parsed from JSON, so no XML reading happens in
//! this crate. Attribute escaping is the writer's.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use meridian_domain::{Element, Preferences, Tags};

use crate::error::{ApiError, ApiResult};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn write(writer: &mut XmlWriter, event: Event<'_>) -> ApiResult<()> {
    writer
        .write_event(event)
        .map_err(|e| ApiError::Xml(e.to_string()))
}

fn into_string(writer: XmlWriter) -> ApiResult<String> {
    String::from_utf8(writer.into_inner().into_inner()).map_err(|e| ApiError::Xml(e.to_string()))
}

fn write_tags(writer: &mut XmlWriter, tags: &Tags) -> ApiResult<()> {
    for (key, value) in tags {
        let mut tag = BytesStart::new("tag");
        tag.push_attribute(("k", key.as_str()));
        tag.push_attribute(("v", value.as_str()));
        write(writer, Event::Empty(tag))?;
    }
    Ok(())
}

/// Renders an element into the `<osm>...</osm>` upload document for
/// the create, update and delete endpoints.
///
/// New elements carry no id attribute; uploaded ones carry id and
/// version so the server can detect conflicts.
pub(crate) fn element_payload(element: &Element, changeset: i64) -> ApiResult<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write(&mut writer, Event::Start(BytesStart::new("osm")))?;

    let name = element.element_type().as_str();
    let mut start = BytesStart::new(name);
    if !element.is_new() {
        start.push_attribute(("id", element.id().to_string().as_str()));
    }
    start.push_attribute(("changeset", changeset.to_string().as_str()));
    if let Some(version) = element.version() {
        start.push_attribute(("version", version.to_string().as_str()));
    }
    if let Element::Node(node) = element {
        start.push_attribute(("lat", node.lat.to_string().as_str()));
        start.push_attribute(("lon", node.lon.to_string().as_str()));
    }
    write(&mut writer, Event::Start(start))?;

    match element {
        Element::Node(_) => {}
        Element::Way(way) => {
            for node_id in &way.nodes {
                let mut nd = BytesStart::new("nd");
                nd.push_attribute(("ref", node_id.to_string().as_str()));
                write(&mut writer, Event::Empty(nd))?;
            }
        }
        Element::Relation(relation) => {
            for member in &relation.members {
                let mut m = BytesStart::new("member");
                m.push_attribute(("type", member.member_type.as_str()));
                m.push_attribute(("ref", member.member_ref.to_string().as_str()));
                m.push_attribute(("role", member.role.as_str()));
                write(&mut writer, Event::Empty(m))?;
            }
        }
    }
    write_tags(&mut writer, element.tags())?;

    write(&mut writer, Event::End(BytesEnd::new(name)))?;
    write(&mut writer, Event::End(BytesEnd::new("osm")))?;
    into_string(writer)
}

/// Renders the `<osm><changeset>...` document for changeset creation
/// and tag updates.
pub(crate) fn changeset_payload(tags: &Tags) -> ApiResult<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write(&mut writer, Event::Start(BytesStart::new("osm")))?;
    write(&mut writer, Event::Start(BytesStart::new("changeset")))?;
    write_tags(&mut writer, tags)?;
    write(&mut writer, Event::End(BytesEnd::new("changeset")))?;
    write(&mut writer, Event::End(BytesEnd::new("osm")))?;
    into_string(writer)
}

/// Renders the `<osm><preferences>...` document replacing the whole
/// preference set.
pub(crate) fn preferences_payload(preferences: &Preferences) -> ApiResult<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write(&mut writer, Event::Start(BytesStart::new("osm")))?;
    write(&mut writer, Event::Start(BytesStart::new("preferences")))?;
    for (key, value) in preferences {
        let mut preference = BytesStart::new("preference");
        preference.push_attribute(("k", key.as_str()));
        preference.push_attribute(("v", value.as_str()));
        write(&mut writer, Event::Empty(preference))?;
    }
    write(&mut writer, Event::End(BytesEnd::new("preferences")))?;
    write(&mut writer, Event::End(BytesEnd::new("osm")))?;
    into_string(writer)
}
