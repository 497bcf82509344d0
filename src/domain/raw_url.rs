//! URL text slicing that keeps the text exactly as written.
//!
//! `url::Url` is used to validate URLs, but it lowercases hosts, percent-encodes
//! paths and collapses dot-segments. Values copied into collections come from here.

/// Split `scheme://authority<rest>` into the authority and everything after it.
pub(crate) fn split_authority(raw: &str) -> Option<(&str, &str)> {
    let (_, after_scheme) = raw.split_once(':')?;
    let hierarchy = after_scheme.trim_start_matches('/');
    let end = hierarchy.find(['/', '?', '#']).unwrap_or(hierarchy.len());
    Some(hierarchy.split_at(end))
}

/// Host part of an authority, without userinfo or port.
pub(crate) fn authority_host(authority: &str) -> &str {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    if host_port.starts_with('[') {
        host_port.find(']').map_or(host_port, |end| &host_port[..=end])
    } else {
        host_port.split_once(':').map_or(host_port, |(host, _)| host)
    }
}

/// Path and optional query of a URL tail, with any fragment dropped.
pub(crate) fn split_tail(tail: &str) -> (&str, Option<&str>) {
    let without_fragment = tail.split_once('#').map_or(tail, |(kept, _)| kept);
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    }
}
