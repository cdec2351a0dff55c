use serde::{Deserialize, Serialize};

/// What a seed points at. Only artist seeds are sent to the recommendation endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeedKind {
    Artist,
    Genre,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Seed {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeedKind,
}

impl Seed {
    pub fn artist(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: SeedKind::Artist,
        }
    }

    pub fn genre(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: SeedKind::Genre,
        }
    }
}
