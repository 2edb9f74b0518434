//! Application id policy, shared with the runtime's build script so catalog ids are rejected at
//! build time by the same rule the runtime applies.

const MAX_ID_LEN: usize = 120;
const MAX_SEGMENT_LEN: usize = 32;

/// True when `raw` is at least two non-empty dotted segments of lowercase ascii, digits, and
/// inner hyphens, each starting with a letter and within the length limits.
pub fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > MAX_ID_LEN {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > MAX_SEGMENT_LEN {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}
