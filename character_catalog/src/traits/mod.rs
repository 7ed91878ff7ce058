//! Character traits: elements, weapons, regions and the attributes the quiz asks about.

use serde::{Deserialize, Serialize};

/// Elemental affinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Anemo,
    Cryo,
    Dendro,
    Electro,
    Geo,
    Hydro,
    Pyro,
}

impl Element {
    pub const ALL: [Element; 7] = [
        Element::Anemo,
        Element::Cryo,
        Element::Dendro,
        Element::Electro,
        Element::Geo,
        Element::Hydro,
        Element::Pyro,
    ];

    /// Canonical name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Anemo => "Anemo",
            Element::Cryo => "Cryo",
            Element::Dendro => "Dendro",
            Element::Electro => "Electro",
            Element::Geo => "Geo",
            Element::Hydro => "Hydro",
            Element::Pyro => "Pyro",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weapon classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weapon {
    Sword,
    Bow,
    Claymore,
    Polearm,
    Catalyst,
}

impl Weapon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weapon::Sword => "Sword",
            Weapon::Bow => "Bow",
            Weapon::Claymore => "Claymore",
            Weapon::Polearm => "Polearm",
            Weapon::Catalyst => "Catalyst",
        }
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regions of origin.
///
/// `Traveler` is a pseudo-region: it marks a narrative role (outlanders and
/// the protagonists) rather than a place on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Mondstadt,
    Liyue,
    Inazuma,
    Sumeru,
    Fontaine,
    Snezhnaya,
    Natlan,
    Traveler,
    #[serde(rename = "Nod-Krai")]
    NodKrai,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Mondstadt => "Mondstadt",
            Region::Liyue => "Liyue",
            Region::Inazuma => "Inazuma",
            Region::Sumeru => "Sumeru",
            Region::Fontaine => "Fontaine",
            Region::Snezhnaya => "Snezhnaya",
            Region::Natlan => "Natlan",
            Region::Traveler => "Traveler",
            Region::NodKrai => "Nod-Krai",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One or more elemental affinities.
///
/// Most characters have a single element. The protagonists resonate with
/// several, so their catalog entry carries an ordered, non-empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementAffinity {
    Single(Element),
    Multi(Vec<Element>),
}

impl ElementAffinity {
    /// Check whether an answered element name matches this affinity.
    ///
    /// A single affinity must equal the answer; a multi affinity must contain it.
    pub fn matches(&self, answer: &str) -> bool {
        match self {
            ElementAffinity::Single(element) => element.as_str() == answer,
            ElementAffinity::Multi(elements) => elements.iter().any(|e| e.as_str() == answer),
        }
    }

    /// All elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        match self {
            ElementAffinity::Single(element) => std::slice::from_ref(element),
            ElementAffinity::Multi(elements) => elements,
        }
    }
}

impl From<Element> for ElementAffinity {
    fn from(element: Element) -> Self {
        ElementAffinity::Single(element)
    }
}

impl std::fmt::Display for ElementAffinity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.elements().iter().map(Element::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Attributes a question can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Element,
    Weapon,
    Rarity,
    Region,
}

impl Attribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Element => "element",
            Attribute::Weapon => "weapon",
            Attribute::Rarity => "rarity",
            Attribute::Region => "region",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
