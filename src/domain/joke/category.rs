use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Joke categories offered by the joke service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    General,
    KnockKnock,
    Programming,
    Anime,
    Food,
    Dad,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::KnockKnock,
        Category::Programming,
        Category::Anime,
        Category::Food,
        Category::Dad,
    ];

    /// Internal identifier
    pub fn id(&self) -> &'static str {
        match self {
            Category::General => "general",
            Category::KnockKnock => "knock_knock",
            Category::Programming => "programming",
            Category::Anime => "anime",
            Category::Food => "food",
            Category::Dad => "dad",
        }
    }

    /// Spelling used by the joke service, both in URLs and for display.
    /// Only knock-knock differs from the identifier.
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            Category::KnockKnock => "knock-knock",
            other => other.id(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_path_segment())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown joke category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == normalized || c.as_path_segment() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
