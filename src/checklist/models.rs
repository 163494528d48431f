use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identity of a checklist item. Stable across renames, toggles and
/// the removal of other items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    checked: bool,
}

impl Item {
    /// Builds an item from a name that is already trimmed and non-empty.
    /// Only the store and the seed list create items.
    pub(crate) fn new(name: String, checked: bool) -> Self {
        Self {
            id: ItemId::new(),
            name,
            checked,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn toggle(&mut self) {
        self.checked = !self.checked;
    }

    /// The fixed list every session starts with.
    pub fn seed(locale: Locale) -> Vec<Item> {
        let names = match locale {
            Locale::Ja => ["りんご", "みかん", "バナナ", "パイナップル"],
            Locale::En => ["Apple", "Orange", "Banana", "Pineapple"],
        };
        let checked = [false, true, false, true];

        names
            .iter()
            .zip(checked)
            .map(|(name, checked)| Item::new(name.to_string(), checked))
            .collect()
    }
}

/// Trims a candidate name, returning `None` when nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown locale '{}' (expected 'ja' or 'en')", other)),
        }
    }
}
