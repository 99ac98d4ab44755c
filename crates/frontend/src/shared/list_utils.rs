//! List helpers shared by every listing view: search and sort

use std::cmp::Ordering;

/// Rows that can be matched against a search box
pub trait Searchable {
    /// `filter` is already trimmed and lowercased
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Rows that can be ordered by a sort key `K`
pub trait Sortable<K> {
    fn compare_by(&self, other: &Self, key: K) -> Ordering;
}

/// Stable sort, so equal keys keep the generated order
pub fn sort_list<K: Copy, T: Sortable<K>>(items: &mut [T], key: K, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by(b, key);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keeps the rows matching `filter`; a blank filter keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items;
    }
    let filter = filter.to_lowercase();
    items
        .into_iter()
        .filter(|item| item.matches_filter(&filter))
        .collect()
}

/// Case-insensitive `contains` against an already lower-cased needle
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// NaN-safe ordering for prices and ratings
pub fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, u32);

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    impl Sortable<()> for Item {
        fn compare_by(&self, other: &Self, _key: ()) -> Ordering {
            self.1.cmp(&other.1)
        }
    }

    #[test]
    fn test_sort_both_directions_is_stable() {
        let mut items = vec![Item("b", 2), Item("a", 1), Item("c", 2)];
        sort_list(&mut items, (), true);
        assert_eq!(items, vec![Item("a", 1), Item("b", 2), Item("c", 2)]);
        sort_list(&mut items, (), false);
        assert_eq!(items, vec![Item("b", 2), Item("c", 2), Item("a", 1)]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = vec![Item("Masala Dosa", 1), Item("Paneer Tikka", 2)];
        assert_eq!(filter_list(items.clone(), "  DOSA "), vec![Item("Masala Dosa", 1)]);
        assert_eq!(filter_list(items.clone(), "").len(), 2);
    }
}
