//! Catalog Filter
//!
//! Turns a fetched character page into the list of thumbnails to show.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::character::Character;

/// Normalised free-text search query (trimmed, lowercased)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery(String);

impl CatalogQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if any searchable field contains the query, or the id does
    pub fn matches(&self, character: &Character) -> bool {
        if self.is_empty() {
            return true;
        }
        character
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.0))
            || character.id.to_string().contains(&self.0)
    }
}

/// Collation key: accents stripped, lowercased
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Tie-break key: lowercase sorts before uppercase
fn case_key(s: &str) -> Vec<(bool, char)> {
    s.chars().map(|c| (c.is_uppercase(), c)).collect()
}

/// Locale-style name comparison: accent- and case-insensitive first,
/// then lowercase before uppercase so the order is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| case_key(a).cmp(&case_key(b)))
}

/// Cap the page at `limit`, keep matches, sort by name
pub fn filter_characters(
    mut characters: Vec<Character>,
    query: &CatalogQuery,
    limit: usize,
) -> Vec<Character> {
    characters.truncate(limit);
    characters.retain(|c| query.matches(c));
    characters.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    log::debug!(
        "catalog filter {:?} kept {} characters",
        query.as_str(),
        characters.len()
    );
    characters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Origin;

    fn make_character(id: u32, name: &str, species: &str, origin: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            image: Some(format!("https://example.test/{}.jpeg", id)),
            status: "Alive".to_string(),
            species: species.to_string(),
            gender: "Male".to_string(),
            origin: Origin {
                name: origin.to_string(),
                url: String::new(),
            },
            location: None,
        }
    }

    fn sample() -> Vec<Character> {
        vec![
            make_character(1, "Rick Sanchez", "Human", "Earth (C-137)"),
            make_character(2, "Morty Smith", "Human", "unknown"),
            make_character(15, "Alien Rick", "Alien", "unknown"),
            make_character(21, "Aqua Morty", "Humanoid", "unknown"),
            make_character(7, "Abradolf Lincler", "Human", "Earth (Replacement Dimension)"),
        ]
    }

    fn names(list: &[Character]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        assert_eq!(CatalogQuery::new("  RiCk \t").as_str(), "rick");
        assert!(CatalogQuery::new("   ").is_empty());
    }

    #[test]
    fn test_empty_query_keeps_all_sorted_by_name() {
        let result = filter_characters(sample(), &CatalogQuery::new(""), 50);
        assert_eq!(
            names(&result),
            vec!["Abradolf Lincler", "Alien Rick", "Aqua Morty", "Morty Smith", "Rick Sanchez"]
        );
    }

    #[test]
    fn test_matches_any_text_field() {
        let by_name = filter_characters(sample(), &CatalogQuery::new("rick"), 50);
        assert_eq!(names(&by_name), vec!["Alien Rick", "Rick Sanchez"]);

        let by_species = filter_characters(sample(), &CatalogQuery::new("HUMANOID"), 50);
        assert_eq!(names(&by_species), vec!["Aqua Morty"]);

        let by_origin = filter_characters(sample(), &CatalogQuery::new("c-137"), 50);
        assert_eq!(names(&by_origin), vec!["Rick Sanchez"]);
    }

    #[test]
    fn test_id_substring_matches_regardless_of_fields() {
        let result = filter_characters(sample(), &CatalogQuery::new("15"), 50);
        assert_eq!(names(&result), vec!["Alien Rick"]);

        // "1" is contained in ids 1, 15 and 21
        let result = filter_characters(sample(), &CatalogQuery::new("1"), 50);
        assert_eq!(names(&result), vec!["Alien Rick", "Aqua Morty", "Rick Sanchez"]);
    }

    #[test]
    fn test_limit_applies_before_filter() {
        let mut page = sample();
        page.push(make_character(99, "Zeep Xanflorp", "Human", "Microverse"));
        let result = filter_characters(page, &CatalogQuery::new("zeep"), 5);
        assert!(result.is_empty());
    }

    #[test]
    fn test_locale_cmp_ignores_case_and_accents() {
        assert_eq!(locale_cmp("abe", "Abf"), Ordering::Less);
        assert_eq!(locale_cmp("Élan", "Emma"), Ordering::Less);
        assert_eq!(locale_cmp("zed", "Émile"), Ordering::Greater);
        assert_eq!(locale_cmp("rick", "Rick"), Ordering::Less);
        assert_eq!(locale_cmp("Rick", "rick"), Ordering::Greater);
        assert_eq!(locale_cmp("Rick", "Rick"), Ordering::Equal);
    }

    #[test]
    fn test_names_differing_only_in_case_sort_lowercase_first() {
        let page = vec![
            make_character(3, "Summer", "Human", "Earth"),
            make_character(4, "summer", "Human", "Earth"),
        ];
        let result = filter_characters(page, &CatalogQuery::new(""), 50);
        assert_eq!(names(&result), vec!["summer", "Summer"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let result = filter_characters(sample(), &CatalogQuery::new("birdperson"), 50);
        assert!(result.is_empty());
    }
}
