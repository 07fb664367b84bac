//! Reaction entity - a typed acknowledgment attached to a piece of content

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reaction type enum
///
/// Persisted by name; the integer value is the wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ReactionType {
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified = 0,
    Like = 1,
    ThumbsUp = 2,
    ThumbsDown = 3,
    Heart = 4,
    Fire = 5,
    ClappingHands = 6,
    Laugh = 7,
    OkHand = 8,
    Rocket = 9,
    Eyes = 10,
    ThinkingFace = 11,
    ClownFace = 12,
    QuestionMark = 13,
}

impl ReactionType {
    /// Every defined reaction type, in integer order
    pub const ALL: [ReactionType; 14] = [
        Self::Unspecified,
        Self::Like,
        Self::ThumbsUp,
        Self::ThumbsDown,
        Self::Heart,
        Self::Fire,
        Self::ClappingHands,
        Self::Laugh,
        Self::OkHand,
        Self::Rocket,
        Self::Eyes,
        Self::ThinkingFace,
        Self::ClownFace,
        Self::QuestionMark,
    ];

    /// Get the persisted name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "TYPE_UNSPECIFIED",
            Self::Like => "LIKE",
            Self::ThumbsUp => "THUMBS_UP",
            Self::ThumbsDown => "THUMBS_DOWN",
            Self::Heart => "HEART",
            Self::Fire => "FIRE",
            Self::ClappingHands => "CLAPPING_HANDS",
            Self::Laugh => "LAUGH",
            Self::OkHand => "OK_HAND",
            Self::Rocket => "ROCKET",
            Self::Eyes => "EYES",
            Self::ThinkingFace => "THINKING_FACE",
            Self::ClownFace => "CLOWN_FACE",
            Self::QuestionMark => "QUESTION_MARK",
        }
    }

    /// Get the numeric value
    #[inline]
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Resolve a numeric value; unknown values map to `Unspecified`
    #[must_use]
    pub fn from_i32(value: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_i32() == value)
            .unwrap_or_default()
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

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<i32> for ReactionType {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl From<ReactionType> for i32 {
    fn from(rt: ReactionType) -> Self {
        rt.as_i32()
    }
}

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub created_ts: i64,
    pub creator_id: i64,
    pub content_id: i64,
    pub reaction_type: ReactionType,
}

impl Reaction {
    /// Create a new, not yet persisted Reaction
    pub fn new(creator_id: i64, content_id: i64, reaction_type: ReactionType) -> Self {
        Self {
            id: 0,
            created_ts: 0,
            creator_id,
            content_id,
            reaction_type,
        }
    }
}
