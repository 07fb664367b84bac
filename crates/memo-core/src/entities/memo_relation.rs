//! Memo relation entity - a typed link from one memo to another

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the memo relates to the related memo; persisted by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemoRelationType {
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified,
    Reference,
    Additional,
}

impl MemoRelationType {
    pub const ALL: [MemoRelationType; 3] = [Self::Unspecified, Self::Reference, Self::Additional];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "TYPE_UNSPECIFIED",
            Self::Reference => "REFERENCE",
            Self::Additional => "ADDITIONAL",
        }
    }

    /// Resolve a persisted name; unknown names map to `Unspecified`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for MemoRelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Memo relation entity
///
/// Identified by the whole `(memo_id, related_memo_id, relation_type)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoRelation {
    pub memo_id: i64,
    pub related_memo_id: i64,
    pub relation_type: MemoRelationType,
}

impl MemoRelation {
    pub fn new(memo_id: i64, related_memo_id: i64, relation_type: MemoRelationType) -> Self {
        Self {
            memo_id,
            related_memo_id,
            relation_type,
        }
    }
}
