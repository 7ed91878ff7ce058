//! Narrative override rules.
//!
//! Some answer combinations identify characters by story role rather than by
//! their catalog attributes alone. An override names such a combination and
//! the characters it stands for; when it fires, the base filter's survivors
//! are cut down to those characters.

use character_catalog::{Attribute, Character};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::script::AnswerSet;

/// A test against a single answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum Condition {
    /// The attribute was answered with exactly `value`.
    Equals { attribute: Attribute, value: String },
    /// The attribute was answered with anything other than `value`.
    PresentAndNot { attribute: Attribute, value: String },
}

impl Condition {
    pub fn equals(attribute: Attribute, value: impl Into<String>) -> Self {
        Condition::Equals {
            attribute,
            value: value.into(),
        }
    }

    pub fn present_and_not(attribute: Attribute, value: impl Into<String>) -> Self {
        Condition::PresentAndNot {
            attribute,
            value: value.into(),
        }
    }

    pub fn holds(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Equals { attribute, value } => answers.get(*attribute) == Some(value.as_str()),
            Condition::PresentAndNot { attribute, value } => {
                matches!(answers.get(*attribute), Some(answer) if answer != value.as_str())
            }
        }
    }
}

/// A named override: when every condition holds, only `survivors` remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub name: String,
    pub conditions: Vec<Condition>,
    pub survivors: Vec<String>,
}

impl OverrideRule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
            survivors: Vec::new(),
        }
    }

    pub fn when(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn keep(mut self, name: impl Into<String>) -> Self {
        self.survivors.push(name.into());
        self
    }

    /// A rule without conditions never fires.
    pub fn applies(&self, answers: &AnswerSet) -> bool {
        !self.conditions.is_empty() && self.conditions.iter().all(|c| c.holds(answers))
    }

    /// Restrict a survivor set to this rule's characters, keeping order.
    pub fn restrict<'c>(&self, mut candidates: Vec<&'c Character>) -> Vec<&'c Character> {
        candidates.retain(|c| self.survivors.iter().any(|name| *name == c.name));
        candidates
    }
}

/// Override rules in priority order. At most one rule fires per evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverridePolicy {
    rules: Vec<OverrideRule>,
}

impl OverridePolicy {
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    /// A policy that never overrides anything.
    pub fn none() -> Self {
        Self::default()
    }

    /// The story rules for the bundled roster.
    ///
    /// Skirk is the only Traveler who wields a sword with Cryo. Aether and
    /// Lumine are the Travelers with a sword and any other element.
    pub fn builtin() -> Self {
        Self::new(builtin_rules())
    }

    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    /// The first rule that fires for these answers, if any.
    pub fn matching_rule(&self, answers: &AnswerSet) -> Option<&OverrideRule> {
        self.rules.iter().find(|rule| rule.applies(answers))
    }

    /// Apply the policy to the base filter's survivors.
    pub fn apply<'c>(&self, answers: &AnswerSet, candidates: Vec<&'c Character>) -> Vec<&'c Character> {
        match self.matching_rule(answers) {
            Some(rule) => {
                let restricted = rule.restrict(candidates);
                debug!(rule = %rule.name, survivors = restricted.len(), "override applied");
                restricted
            }
            None => candidates,
        }
    }
}

fn builtin_rules() -> Vec<OverrideRule> {
    vec![
        OverrideRule::new("cryo-sword-traveler")
            .when(Condition::equals(Attribute::Element, "Cryo"))
            .when(Condition::equals(Attribute::Weapon, "Sword"))
            .when(Condition::equals(Attribute::Region, "Traveler"))
            .keep("Skirk"),
        OverrideRule::new("elemental-sword-traveler")
            .when(Condition::equals(Attribute::Weapon, "Sword"))
            .when(Condition::equals(Attribute::Region, "Traveler"))
            .when(Condition::present_and_not(Attribute::Element, "Cryo"))
            .keep("Aether")
            .keep("Lumine"),
    ]
}
