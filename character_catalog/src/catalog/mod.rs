//! The catalog - an ordered, read-only collection of characters.
//!
//! Catalogs are validated once when they are built. Everything downstream
//! (the quiz filter in particular) relies on these guarantees and never
//! checks them again:
//! - names are unique
//! - multi-element affinities are non-empty
//! - rarity is one of [`RARITIES`]

use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

use crate::character::Character;
use crate::traits::ElementAffinity;

/// Star ratings a character can carry.
pub const RARITIES: [u8; 2] = [4, 5];

/// Roster shipped with the crate.
const BUNDLED_ROSTER: &str = include_str!("../../data/characters.json");

/// Errors raised while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate character name '{name}'")]
    DuplicateName { name: String },

    #[error("Character '{name}' has an empty element set")]
    EmptyElementSet { name: String },

    #[error("Character '{name}' has invalid rarity {rarity}")]
    InvalidRarity { name: String, rarity: u8 },
}

/// An ordered, validated collection of characters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    characters: Vec<Character>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order.
    pub fn from_characters(characters: Vec<Character>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for character in &characters {
            if !seen.insert(character.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: character.name.clone(),
                });
            }

            if let ElementAffinity::Multi(elements) = &character.element {
                if elements.is_empty() {
                    return Err(CatalogError::EmptyElementSet {
                        name: character.name.clone(),
                    });
                }
            }

            if !RARITIES.contains(&character.rarity) {
                return Err(CatalogError::InvalidRarity {
                    name: character.name.clone(),
                    rarity: character.rarity,
                });
            }
        }

        debug!(characters = characters.len(), "catalog loaded");
        Ok(Self { characters })
    }

    /// Parse a catalog from a JSON array of character records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let characters: Vec<Character> = serde_json::from_str(json)?;
        Self::from_characters(characters)
    }

    /// Load the roster bundled with this crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json_str(BUNDLED_ROSTER)
    }

    /// Get a character by name.
    pub fn get(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Check if a character with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.characters.iter()
    }

    pub fn as_slice(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Element, Region, Weapon};

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() > 90);

        let skirk = catalog.get("Skirk").unwrap();
        assert_eq!(skirk.region, Region::Traveler);
        assert_eq!(skirk.weapon, Weapon::Sword);

        let aether = catalog.get("Aether").unwrap();
        assert!(matches!(&aether.element, ElementAffinity::Multi(e) if e.len() > 1));
        assert!(catalog.contains("Lumine"));
        assert!(!catalog.contains("Paimon"));
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"name": "Xiao", "element": "Anemo", "weapon": "Polearm", "rarity": 5, "region": "Liyue"},
                {"name": "Amber", "element": "Pyro", "weapon": "Bow", "rarity": 4, "region": "Mondstadt"}
            ]"#,
        )
        .unwrap();

        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Xiao", "Amber"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = Catalog::from_characters(vec![
            Character::new("Kaeya", Element::Cryo, Weapon::Sword, 4, Region::Mondstadt),
            Character::new("Kaeya", Element::Cryo, Weapon::Sword, 4, Region::Mondstadt),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateName { name }) if name == "Kaeya"));
    }

    #[test]
    fn test_empty_element_set_rejected() {
        let result = Catalog::from_characters(vec![Character::new(
            "Nobody",
            ElementAffinity::Multi(vec![]),
            Weapon::Sword,
            5,
            Region::Traveler,
        )]);
        assert!(matches!(result, Err(CatalogError::EmptyElementSet { .. })));
    }

    #[test]
    fn test_invalid_rarity_rejected() {
        let result = Catalog::from_characters(vec![Character::new(
            "Odd",
            Element::Geo,
            Weapon::Claymore,
            3,
            Region::Liyue,
        )]);
        assert!(matches!(result, Err(CatalogError::InvalidRarity { rarity: 3, .. })));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Catalog::from_json_str(r#"[{"name": "Nahida", "element": "Dendro"}]"#);
        assert!(matches!(result, Err(CatalogError::Parse(_))));

        let result = Catalog::from_json_str(
            r#"[{"name": "X", "element": "Void", "weapon": "Sword", "rarity": 4, "region": "Liyue"}]"#,
        );
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
