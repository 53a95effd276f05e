//! Character Entities
//!
//! Records returned by the character API. Read-only on our side.

use serde::{Deserialize, Serialize};

/// Place of origin (or last known location)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A character record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default)]
    pub location: Option<Origin>,
}

impl Character {
    /// Image URL, or `placeholder` when the record has none
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self.image.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => placeholder,
        }
    }

    /// Fields searched by the catalog filter, in display order
    pub fn searchable_fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.status,
            &self.species,
            &self.gender,
            &self.origin.name,
        ]
    }
}

/// Paging metadata of a character page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Body of `GET /api/character/?page=N`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPage {
    #[serde(default)]
    pub info: Option<PageInfo>,
    pub results: Vec<Character>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"{
        "info": {"count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character/?page=2", "prev": null},
        "results": [
            {
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
                "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
                "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                "episode": ["https://rickandmortyapi.com/api/episode/1"],
                "url": "https://rickandmortyapi.com/api/character/1",
                "created": "2017-11-04T18:48:46.250Z"
            },
            {
                "id": 2,
                "name": "Morty Smith",
                "status": "Alive",
                "species": "Human",
                "gender": "Male",
                "origin": {"name": "unknown", "url": ""},
                "image": ""
            }
        ]
    }"#;

    #[test]
    fn test_decode_api_page() {
        let page: CharacterPage = serde_json::from_str(PAGE).expect("page should decode");
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.info.as_ref().map(|i| i.pages), Some(42));

        let rick = &page.results[0];
        assert_eq!(rick.origin.name, "Earth (C-137)");
        assert_eq!(rick.location.as_ref().map(|l| l.name.as_str()), Some("Citadel of Ricks"));
        assert!(page.results[1].location.is_none());
    }

    #[test]
    fn test_image_falls_back_to_placeholder() {
        let page: CharacterPage = serde_json::from_str(PAGE).unwrap();
        assert_eq!(
            page.results[0].image_or("/img/placeholder.png"),
            "https://rickandmortyapi.com/api/character/avatar/1.jpeg"
        );
        // Empty string counts as missing
        assert_eq!(page.results[1].image_or("/img/placeholder.png"), "/img/placeholder.png");
    }
}
