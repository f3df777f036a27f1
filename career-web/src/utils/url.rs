//! Query string helpers for `?section=` deep links

use web_sys::window;

use crate::utils::constants::{SECTION_IDS, SECTION_QUERY_PARAM};

/// Look up `key` in a raw query string (with or without the leading `?`).
/// A bare key without `=` yields an empty value.
pub fn find_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    query_string.split('&').find_map(|pair| {
        let (param_key, param_value) = pair.split_once('=').unwrap_or((pair, ""));
        (param_key == key).then(|| {
            urlencoding::decode(param_value)
                .map(|value| value.into_owned())
                .unwrap_or_else(|_| param_value.to_string())
        })
    })
}

/// Section requested with `?section=<id>`, if it names a known section.
pub fn deep_link_section() -> Option<String> {
    let search = window()?.location().search().ok()?;
    section_from_query(&search)
}

pub fn section_from_query(search: &str) -> Option<String> {
    let requested = find_query_param(search, SECTION_QUERY_PARAM)?;
    let id = requested.trim().trim_start_matches('#');
    SECTION_IDS.contains(&id).then(|| id.to_string())
}
