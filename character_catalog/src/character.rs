//! Character definitions.

use serde::{Deserialize, Serialize};

use crate::traits::{Attribute, ElementAffinity, Region, Weapon};

/// An immutable catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique within a catalog.
    pub name: String,
    pub element: ElementAffinity,
    pub weapon: Weapon,
    /// Star rating, 4 or 5.
    pub rarity: u8,
    pub region: Region,
}

impl Character {
    /// Create a new character record.
    pub fn new(
        name: impl Into<String>,
        element: impl Into<ElementAffinity>,
        weapon: Weapon,
        rarity: u8,
        region: Region,
    ) -> Self {
        Self {
            name: name.into(),
            element: element.into(),
            weapon,
            rarity,
            region,
        }
    }

    /// Check whether this character agrees with an answer for one attribute.
    ///
    /// Rarity is compared through its canonical decimal form, so `"5"`
    /// matches but `"05"` does not.
    pub fn matches(&self, attribute: Attribute, answer: &str) -> bool {
        match attribute {
            Attribute::Element => self.element.matches(answer),
            Attribute::Weapon => self.weapon.as_str() == answer,
            Attribute::Rarity => self.rarity.to_string() == answer,
            Attribute::Region => self.region.as_str() == answer,
        }
    }

    /// One-line description, e.g. `Pyro • Sword • 4★ • Mondstadt`.
    pub fn summary(&self) -> String {
        format!(
            "{} • {} • {}★ • {}",
            self.element, self.weapon, self.rarity, self.region
        )
    }
}
