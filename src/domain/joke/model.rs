use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A joke as returned by the remote joke service.
///
/// Two jokes are equal when their setup and punchline match; the
/// self-reported `type` is ignored so the same joke filed under different
/// categories dedupes in favorites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Joke {
    #[serde(rename = "type")]
    pub kind: String,
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    pub fn new(
        kind: impl Into<String>,
        setup: impl Into<String>,
        punchline: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            setup: setup.into(),
            punchline: punchline.into(),
        }
    }

    /// An empty setup marks "no joke available"
    pub fn is_empty(&self) -> bool {
        self.setup.is_empty()
    }
}

impl PartialEq for Joke {
    fn eq(&self, other: &Self) -> bool {
        self.setup == other.setup && self.punchline == other.punchline
    }
}

impl Eq for Joke {}

impl Hash for Joke {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.setup.hash(state);
        self.punchline.hash(state);
    }
}
