//! Object-path codec.
//!
//! AT-SPI2 addresses every object with a D-Bus object path. The application
//! root uses the fixed [`ROOT_PATH`]; node records use
//! `<NODE_PATH_PREFIX><decimal index>`. Decoding is strict: anything that
//! is not exactly one of those two shapes — wrong prefix, empty or
//! non-numeric suffix, signs, trailing garbage, or an index outside the
//! current snapshot — is unrecognized, which makes the dispatcher decline
//! the message rather than answer it.

use super::{NODE_PATH_PREFIX, ROOT_PATH};
use crate::snapshot::ObjectTarget;

/// Decode an object path against a snapshot of `node_count` records.
///
/// Returns `None` for unrecognized paths.
pub fn decode(path: &str, node_count: usize) -> Option<ObjectTarget> {
    if path == ROOT_PATH {
        return Some(ObjectTarget::Root);
    }
    let suffix = path.strip_prefix(NODE_PATH_PREFIX)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let idx: usize = suffix.parse().ok()?;
    (idx < node_count).then_some(ObjectTarget::Node(idx))
}

/// Encode a target as its object path.
pub fn encode(target: ObjectTarget) -> String {
    match target {
        ObjectTarget::Root => ROOT_PATH.to_string(),
        ObjectTarget::Node(idx) => format!("{NODE_PATH_PREFIX}{idx}"),
    }
}
