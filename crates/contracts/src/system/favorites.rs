use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::StoreRecord;

/// Composite favorites key `"<type>:<id>"`, e.g. `"product:p12"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavoriteKey(String);

impl FavoriteKey {
    pub fn new(kind: &str, id: &str) -> Self {
        Self(format!("{}:{}", kind, id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `("product", "p12")`; `None` for keys without a type prefix
    pub fn split(&self) -> Option<(&str, &str)> {
        self.0.split_once(':')
    }
}

impl From<&str> for FavoriteKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// `favorites`: mirrored wholesale from the session on every change.
///
/// Only `true` entries are kept; un-favoriting removes the entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(BTreeMap<String, bool>);

impl Favorites {
    pub fn set(&mut self, key: &FavoriteKey, is_favorite: bool) {
        if is_favorite {
            self.0.insert(key.as_str().to_string(), true);
        } else {
            self.0.remove(key.as_str());
        }
    }

    /// Returns the new state
    pub fn toggle(&mut self, key: &FavoriteKey) -> bool {
        let next = !self.contains(key);
        self.set(key, next);
        next
    }

    pub fn contains(&self, key: &FavoriteKey) -> bool {
        self.0.get(key.as_str()).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.0.values().filter(|v| **v).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Favorited ids of one item type
    pub fn ids_of<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(|(_, v)| **v)
            .filter_map(move |(k, _)| {
                k.split_once(':')
                    .filter(|(prefix, _)| *prefix == kind)
                    .map(|(_, id)| id)
            })
    }
}

impl StoreRecord for Favorites {}
