use uuid::{Uuid, Variant};

/// UUID versions accepted by the sync layer.
pub const SUPPORTED_UUID_VERSIONS: &[usize] = &[1, 3, 4, 5];

/// Probe which supported UUID version an id string conforms to.
///
/// Versions are tried in the fixed order {1, 3, 4, 5}; the first match
/// wins. A version matches only when the input parses, carries that
/// version number with the RFC 4122 variant, and round-trips to the exact
/// input through the canonical hyphenated form. Braced, urn-prefixed,
/// compact or uppercase spellings are rejected even though the parser
/// would accept them.
pub fn get_uuid_version(id: &str) -> Option<usize> {
    SUPPORTED_UUID_VERSIONS
        .iter()
        .copied()
        .find(|&version| matches_version(id, version))
}

/// Check whether `candidate` is a valid UUID.
///
/// Empty input is never valid. When `version` is `None`, any supported
/// version counts; otherwise the candidate must match that version
/// exactly.
pub fn is_valid_uuid(candidate: &str, version: Option<usize>) -> bool {
    if candidate.is_empty() {
        return false;
    }

    match version {
        Some(version) => matches_version(candidate, version),
        None => get_uuid_version(candidate).is_some(),
    }
}

fn matches_version(candidate: &str, version: usize) -> bool {
    let Ok(parsed) = Uuid::parse_str(candidate) else {
        return false;
    };

    parsed.get_version_num() == version
        && parsed.get_variant() == Variant::RFC4122
        && parsed.hyphenated().to_string() == candidate
}
