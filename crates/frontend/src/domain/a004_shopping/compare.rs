//! Product comparison list.
//!
//! `compareItems` holds the full products and `compareList` the bare ids an
//! older build wrote. Both are always written together.

use contracts::domain::a004_shopping::Product;
use contracts::shared::StoreKey;

use super::catalog::product_by_id;
use crate::layout::global_context::AppContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    Added,
    AlreadyPresent,
    Full,
}

impl AppContext {
    /// Stored comparison list, rebuilt from `compareList` ids when only the
    /// legacy key is present
    pub fn compare_items(&self) -> Vec<Product> {
        let store = self.store();
        let items: Vec<Product> = store.load(StoreKey::CompareItems);
        if !items.is_empty() {
            return items;
        }
        let ids: Vec<String> = store.load(StoreKey::CompareList);
        ids.iter()
            .filter_map(|id| product_by_id(id).cloned())
            .collect()
    }

    /// What the compare view shows: at most `max_items` entries
    pub fn visible_compare_items(&self) -> Vec<Product> {
        let max = self.config().compare.max_items;
        let mut items = self.compare_items();
        items.truncate(max);
        items
    }

    pub fn is_in_compare(&self, id: &str) -> bool {
        self.compare_items().iter().any(|p| p.id == id)
    }

    pub fn add_to_compare(&self, product: &Product) -> CompareOutcome {
        let mut items = self.compare_items();
        if items.iter().any(|p| p.id == product.id) {
            return CompareOutcome::AlreadyPresent;
        }
        if items.len() >= self.config().compare.max_items {
            log::debug!("compare list full, '{}' not added", product.id);
            return CompareOutcome::Full;
        }
        items.push(product.clone());
        self.write_compare(&items);
        CompareOutcome::Added
    }

    /// Removes by id; the stored list is first cut to what the view shows
    pub fn remove_from_compare(&self, id: &str) -> Vec<Product> {
        let mut items = self.visible_compare_items();
        items.retain(|p| p.id != id);
        self.write_compare(&items);
        items
    }

    pub fn clear_compare(&self) {
        let store = self.store();
        store.remove(StoreKey::CompareItems);
        store.remove(StoreKey::CompareList);
    }

    fn write_compare(&self, items: &[Product]) {
        let ids: Vec<String> = items.iter().map(|p| p.id.clone()).collect();
        let store = self.store();
        store.save(StoreKey::CompareItems, &items.to_vec());
        store.save(StoreKey::CompareList, &ids);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_shopping::catalog::products;
    use crate::layout::global_context::testing::fresh_context;

    #[test]
    fn test_compare_view_caps_and_removal_keeps_keys_in_sync() {
        let ctx = fresh_context();
        let four: Vec<Product> = products()[..4].to_vec();
        ctx.store().save(StoreKey::CompareItems, &four);

        let visible = ctx.visible_compare_items();
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0].id, "p1");

        let left = ctx.remove_from_compare("p2");
        let ids: Vec<String> = left.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);

        let stored: Vec<Product> = ctx.store().load(StoreKey::CompareItems);
        let stored_ids: Vec<String> = stored.iter().map(|p| p.id.clone()).collect();
        let legacy: Vec<String> = ctx.store().load(StoreKey::CompareList);
        assert_eq!(stored_ids, ids);
        assert_eq!(legacy, ids);
    }

    #[test]
    fn test_add_dedupes_and_refuses_when_full() {
        let ctx = fresh_context();
        let all = products();
        assert_eq!(ctx.add_to_compare(&all[0]), CompareOutcome::Added);
        assert_eq!(ctx.add_to_compare(&all[0]), CompareOutcome::AlreadyPresent);
        assert_eq!(ctx.add_to_compare(&all[1]), CompareOutcome::Added);
        assert_eq!(ctx.add_to_compare(&all[2]), CompareOutcome::Added);
        assert_eq!(ctx.add_to_compare(&all[3]), CompareOutcome::Full);
        assert!(ctx.is_in_compare("p3"));
        assert!(!ctx.is_in_compare("p4"));
    }

    #[test]
    fn test_legacy_id_list_is_rebuilt() {
        let ctx = fresh_context();
        ctx.store()
            .set_raw(StoreKey::CompareList, r#"["p6","unknown","p5"]"#);
        let ids: Vec<String> = ctx.compare_items().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["p6", "p5"]);

        ctx.clear_compare();
        assert!(ctx.compare_items().is_empty());
    }
}
