//! Client-side search over the last fetched snapshot.
//!
//! A record matches when its `name` or `sku` contains the query as a
//! case-insensitive substring. The empty query matches everything.

use crate::InventoryItem;

/// Returns `true` if `item` matches `query`.
pub fn matches(item: &InventoryItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.name().to_lowercase().contains(&needle) || item.sku().to_lowercase().contains(&needle)
}

/// The subset of `items` matching `query`, in snapshot order.
pub fn filter_items<'a>(items: &'a [InventoryItem], query: &str) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| matches(item, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemData, ItemId};

    fn item(id: &str, name: &str, sku: &str) -> InventoryItem {
        InventoryItem::new(
            ItemId::new(id).unwrap(),
            ItemData {
                name: name.into(),
                sku: sku.into(),
                ..Default::default()
            },
        )
    }

    fn snapshot() -> Vec<InventoryItem> {
        vec![
            item("a", "Ring A", "R-001"),
            item("b", "Bangle", "B-200"),
            item("c", "Diamond Stud", "E-310"),
        ]
    }

    #[test]
    fn empty_query_returns_full_snapshot_in_order() {
        let items = snapshot();
        let visible = filter_items(&items, "");
        let ids: Vec<_> = visible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn sku_match_is_case_insensitive() {
        let items = snapshot();
        let visible = filter_items(&items, "r-0");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].sku(), "R-001");
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let items = snapshot();
        let visible = filter_items(&items, "DIAMOND");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id.as_str(), "c");
    }

    #[test]
    fn query_matching_either_key_selects_the_record() {
        let items = vec![item("x", "Band", "K-9"), item("y", "Cuff", "BAND-2")];
        let visible = filter_items(&items, "band");
        let ids: Vec<_> = visible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn records_with_blank_keys_only_match_empty_query() {
        let blank = item("z", "", "");
        assert!(matches(&blank, ""));
        assert!(!matches(&blank, "r"));
    }

    #[test]
    fn no_match_yields_empty_list() {
        let items = snapshot();
        assert!(filter_items(&items, "platinum").is_empty());
    }
}
