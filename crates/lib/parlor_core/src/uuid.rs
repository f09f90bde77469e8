//! Conversation identifiers.
//!
//! Ids are UUIDv7, generated app-side so that they sort by creation time.
//! Only the canonical hyphenated form (`8-4-4-4-12` hex digits) is a
//! well-formed id.

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}

/// Length of the canonical hyphenated form.
const HYPHENATED_LEN: usize = 36;

/// Parse a client-supplied id. Returns `None` for malformed input,
/// including padded, braced, URN and unhyphenated spellings.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    if raw.len() != HYPHENATED_LEN {
        return None;
    }
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuidv7_is_valid() {
        let id = uuidv7();
        assert_eq!(id.get_version(), Some(uuid::Version::SortRand));
    }

    #[test]
    fn uuidv7_is_monotonic() {
        let a = uuidv7();
        let b = uuidv7();
        assert!(b >= a);
    }

    #[test]
    fn parse_id_accepts_generated_ids() {
        let id = uuidv7();
        assert_eq!(parse_id(&id.to_string()), Some(id));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("not-an-id"), None);
        assert_eq!(parse_id("64b7f0c2e4b0a1a2b3c4d5e6"), None);
    }

    #[test]
    fn parse_id_only_accepts_hyphenated_form() {
        let id = uuidv7();
        assert_eq!(parse_id(&id.hyphenated().to_string().to_uppercase()), Some(id));
        assert_eq!(parse_id(&format!("  {id}\n")), None);
        assert_eq!(parse_id(&id.braced().to_string()), None);
        assert_eq!(parse_id(&id.urn().to_string()), None);
        assert_eq!(parse_id(&id.simple().to_string()), None);
    }
}
