use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ModuleKind;
use crate::shared::record::ensure;
use crate::shared::{DecodeError, StoreRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyViewedEntry {
    pub id: String,
    pub module: ModuleKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub viewed_at: DateTime<Utc>,
}

impl RecentlyViewedEntry {
    pub fn new(id: impl Into<String>, module: ModuleKind, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            module,
            title: title.into(),
            subtitle: None,
            viewed_at: Utc::now(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl StoreRecord for RecentlyViewedEntry {
    fn validate(&self) -> Result<(), DecodeError> {
        ensure(!self.id.is_empty(), "recently viewed entry without id")
    }
}

/// Moves `entry` to the front, dropping any older entry with the same id,
/// and evicts from the back beyond `cap`.
pub fn push_recently_viewed(
    list: &mut Vec<RecentlyViewedEntry>,
    entry: RecentlyViewedEntry,
    cap: usize,
) {
    list.retain(|existing| existing.id != entry.id);
    list.insert(0, entry);
    list.truncate(cap);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> RecentlyViewedEntry {
        RecentlyViewedEntry::new(id, ModuleKind::Shopping, format!("Product {}", id))
    }

    #[test]
    fn test_duplicate_moves_to_front() {
        let mut list = vec![];
        push_recently_viewed(&mut list, entry("a"), 5);
        push_recently_viewed(&mut list, entry("b"), 5);
        push_recently_viewed(&mut list, entry("a"), 5);
        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_oldest_is_evicted() {
        let mut list = vec![];
        for id in ["a", "b", "c", "d"] {
            push_recently_viewed(&mut list, entry(id), 3);
        }
        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "b"]);
    }
}
