//! The quiz script and the answers collected against it.

use character_catalog::Attribute;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single question: which attribute it narrows and what can be picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: Attribute,
    pub label: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    /// Check if a value is one of this question's options.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.contains(&value)
    }
}

/// The quiz script. Order is significant: it is both the order questions are
/// asked in and the order the filter evaluates answers in.
pub const QUESTIONS: &[Question] = &[
    Question {
        key: Attribute::Element,
        label: "What is the character's element?",
        options: &["Anemo", "Cryo", "Dendro", "Electro", "Geo", "Hydro", "Pyro"],
    },
    Question {
        key: Attribute::Weapon,
        label: "What weapon does the character use?",
        options: &["Sword", "Bow", "Claymore", "Polearm", "Catalyst"],
    },
    Question {
        key: Attribute::Rarity,
        label: "What is the character's rarity?",
        options: &["4", "5"],
    },
    Question {
        key: Attribute::Region,
        label: "Which region is the character from?",
        options: &[
            "Mondstadt",
            "Liyue",
            "Inazuma",
            "Sumeru",
            "Fontaine",
            "Snezhnaya",
            "Natlan",
            "Traveler",
            "Nod-Krai",
        ],
    },
];

/// Answers committed so far, one per attribute.
///
/// A missing key means the attribute has not been asked yet and imposes no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<Attribute, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer for an attribute.
    pub fn record(&mut self, attribute: Attribute, value: impl Into<String>) {
        self.answers.insert(attribute, value.into());
    }

    /// Builder-style [`AnswerSet::record`].
    pub fn with(mut self, attribute: Attribute, value: impl Into<String>) -> Self {
        self.record(attribute, value);
        self
    }

    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.answers.get(&attribute).map(String::as_str)
    }

    pub fn contains(&self, attribute: Attribute) -> bool {
        self.answers.contains_key(&attribute)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.answers.iter().map(|(k, v)| (*k, v.as_str()))
    }
}
