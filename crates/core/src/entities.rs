//! Suggestion, role and user profile types shared across the search surface

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Kind of entity a suggestion refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SuggestionKind {
    HsCode,
    Company,
    Country,
    Product,
    Recent,
}

impl SuggestionKind {
    /// Short badge shown next to a suggestion in the dropdown
    pub fn badge(self) -> &'static str {
        match self {
            Self::HsCode => "HS",
            Self::Company => "Co",
            Self::Country => "Loc",
            Self::Product => "Prod",
            Self::Recent => "Recent",
        }
    }
}

/// Wire shape of a suggestion before the value check runs
#[derive(Deserialize)]
struct RawSuggestion {
    kind: SuggestionKind,
    value: String,
    label: String,
    #[serde(default)]
    description: Option<String>,
}

/// An entity candidate offered in response to partial query text
///
/// `(kind, value)` fully determines what the suggestion means and where
/// selecting it navigates to. `value` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Suggestion {
    kind: SuggestionKind,
    value: String,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Suggestion {
    /// Create a suggestion, rejecting an empty value
    pub fn new(
        kind: SuggestionKind,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::invalid_input(format!(
                "{kind} suggestion requires a non-empty value"
            )));
        }
        Ok(Self {
            kind,
            value,
            label: label.into(),
            description: None,
        })
    }

    /// Attach secondary display text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> SuggestionKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl<'de> Deserialize<'de> for Suggestion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSuggestion::deserialize(deserializer)?;
        let suggestion =
            Suggestion::new(raw.kind, raw.value, raw.label).map_err(serde::de::Error::custom)?;
        Ok(match raw.description {
            Some(description) => suggestion.with_description(description),
            None => suggestion,
        })
    }
}

/// Professional role of the signed-in user
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    #[default]
    Exporter,
    Importer,
    Logistics,
    Chamber,
    Government,
}

impl Role {
    /// Role used when the supplied value is not recognized
    pub const DEFAULT: Role = Role::Exporter;

    pub const ALL: [Role; 5] = [
        Role::Exporter,
        Role::Importer,
        Role::Logistics,
        Role::Chamber,
        Role::Government,
    ];

    /// Parse a role, falling back to [`Role::DEFAULT`] for unknown values
    pub fn parse_lenient(value: &str) -> Role {
        Role::from_str(&value.trim().to_ascii_lowercase()).unwrap_or(Role::DEFAULT)
    }
}

/// Identity handed to the search surface once per page load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    pub tier: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, role: &str, tier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: Role::parse_lenient(role),
            tier: tier.into(),
        }
    }
}
