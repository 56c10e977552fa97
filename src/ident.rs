//! Opaque identifiers for stored items

use std::fmt::{Display, Formatter};

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;
const SUFFIX_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The unique id of a stored item.
///
/// Ids are opaque strings: a millisecond timestamp plus a random alphanumeric suffix
/// (and an optional leading prefix). The suffix makes collisions negligible even for
/// items created within the same millisecond, without any coordination beyond the
/// current process.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId {
    content: String,
}

impl ItemId {
    /// Generate a random ItemId
    pub fn random() -> Self {
        let content = format!("{}-{}", Utc::now().timestamp_millis(), random_suffix(SUFFIX_LEN));
        Self { content }
    }

    /// Generate a random ItemId starting with `prefix`
    pub fn random_with_prefix(prefix: &str) -> Self {
        let content = format!(
            "{}-{}-{}",
            prefix,
            Utc::now().timestamp_millis(),
            random_suffix(SUFFIX_LEN)
        );
        Self { content }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for ItemId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for ItemId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for ItemId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<ItemId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(ItemId { content })
    }
}

/// A short alphanumeric string, drawn from the entropy of a brand new UUID
fn random_suffix(len: usize) -> String {
    Uuid::new_v4()
        .as_bytes()
        .iter()
        .take(len)
        .map(|byte| SUFFIX_ALPHABET[(byte % 36) as usize] as char)
        .collect()
}

/// A pseudo-random number in `0..bound`.
///
/// This backs cosmetic display metadata only (attendee counts, color picks), so the slight
/// modulo bias does not matter.
pub(crate) fn random_below(bound: u32) -> u32 {
    let uuid = Uuid::new_v4();
    let bytes = uuid.as_bytes();
    let n = (u32::from(bytes[0]) << 8) | u32::from(bytes[1]);
    n % bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<ItemId> = (0..1000).map(|_| ItemId::random()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn prefixed_ids() {
        let id = ItemId::random_with_prefix("e");
        assert!(id.as_str().starts_with("e-"));
    }

    #[test]
    fn suffix_is_alphanumeric() {
        let suffix = random_suffix(SUFFIX_LEN);
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn random_below_stays_in_bounds() {
        for _ in 0..100 {
            assert!(random_below(20) < 20);
        }
    }

    #[test]
    fn serde_as_plain_string() {
        let id = ItemId::from("t1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"t1\"");
        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
