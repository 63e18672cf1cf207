//! Session identifier.
//!
//! ULID ベースの ID。時刻順にソートできるため、ログと突き合わせやすい。

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier of one interactive auction session.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(Ulid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_prefix() {
        let id = SessionId::generate();
        assert!(id.to_string().starts_with("session-"));
    }

    #[test]
    fn ids_are_sortable_by_generation_time() {
        let a = SessionId::generate();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = SessionId::generate();
        assert!(a < b);
    }

    #[test]
    fn serde_roundtrip() {
        let id = SessionId::generate();
        let s = serde_json::to_string(&id).unwrap();
        let back: SessionId = serde_json::from_str(&s).unwrap();
        assert_eq!(id, back);
    }
}
