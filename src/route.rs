//! Dashboard Route
//!
//! The navigable location `/dashboard/{menuId}` and path-segment encoding
//! shared with the HTTP client.

use dashboard_sync::MenuId;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that may not appear raw inside one path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const DASHBOARD_PREFIX: &str = "/dashboard/";

pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

pub fn dashboard_path(id: &MenuId) -> String {
    format!("{}{}", DASHBOARD_PREFIX, encode_segment(id.as_str()))
}

/// Route parameter of a dashboard path, decoded; `None` for any other path
pub fn parse_dashboard_path(path: &str) -> Option<String> {
    let rest = path.strip_prefix(DASHBOARD_PREFIX)?;
    let segment = rest.split('/').next()?.trim();
    if segment.is_empty() {
        return None;
    }
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}
