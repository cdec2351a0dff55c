use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Track {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String, // Empty for local files, which have no catalog id
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    pub uri: String,
    pub album: Option<Album>,
}

impl Track {
    pub fn artist_names(&self) -> Vec<&str> {
        self.artists.iter().map(|a| a.name.as_str()).collect()
    }

    /// "Name - Artist A, Artist B" line used by the listing output
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.name, self.artist_names().join(", "))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Artist {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Album {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}
