//! Item Ledger
//!
//! In-memory item sequence of the current menu. All transformations are pure
//! and return a new ledger; persistence is the reconciler's job.

use crate::model::{Item, MenuRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemLedger {
    items: Vec<Item>,
}

impl ItemLedger {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Build from a loaded menu. Counters the backend omitted are already
    /// zero after deserialization; `taken` is re-clamped in case the server
    /// reports more taken than prepared.
    pub fn from_menu(menu: &MenuRecord) -> Self {
        let items = menu
            .items
            .iter()
            .map(|item| Item {
                taken: item.taken.min(item.quantity),
                ..item.clone()
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Set `taken` for one item from raw user input.
    ///
    /// Returns `None` if `index` is out of range; otherwise a new ledger in
    /// which only that item changed.
    pub fn with_taken_quantity(&self, index: usize, raw_value: &str) -> Option<ItemLedger> {
        let current = self.items.get(index)?;
        let taken = coerce_quantity(raw_value).min(current.quantity);

        let mut items = self.items.clone();
        items[index].taken = taken;
        Some(ItemLedger { items })
    }
}

/// Coerce free-form input into a non-negative integer.
///
/// Non-numeric, empty, negative and non-finite input become 0; fractions are
/// truncated and oversized values saturate.
pub fn coerce_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value.trunc() as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> ItemLedger {
        ItemLedger::new(vec![Item::new("Apple", 10), Item::new("Bread", 4)])
    }

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity("7"), 7);
        assert_eq!(coerce_quantity(" 3 "), 3);
        assert_eq!(coerce_quantity("2.9"), 2);
        assert_eq!(coerce_quantity("-4"), 0);
        assert_eq!(coerce_quantity(""), 0);
        assert_eq!(coerce_quantity("abc"), 0);
        assert_eq!(coerce_quantity("NaN"), 0);
        assert_eq!(coerce_quantity("inf"), 0);
        assert_eq!(coerce_quantity("1e12"), u32::MAX);
    }

    #[test]
    fn test_taken_is_clamped_to_initial() {
        let updated = ledger().with_taken_quantity(0, "15").unwrap();
        let apple = &updated.items()[0];
        assert_eq!(apple.taken, 10);
        assert_eq!(apple.leftovers(), 0);
    }

    #[test]
    fn test_only_target_index_changes() {
        let original = ledger();
        let updated = original.with_taken_quantity(1, "3").unwrap();

        assert_eq!(updated.items()[0], original.items()[0]);
        assert_eq!(updated.items()[1].taken, 3);
        assert_eq!(original.items()[1].taken, 0);
    }

    #[test]
    fn test_clamp_property_holds_for_many_inputs() {
        let inputs = ["-1", "0", "1", "4", "5", "99", "x", "3.5", " 2", "-0"];
        for raw in inputs {
            let updated = ledger().with_taken_quantity(1, raw).unwrap();
            let bread = &updated.items()[1];
            let expected = coerce_quantity(raw).min(4);
            assert_eq!(bread.taken, expected, "input {raw:?}");
            assert_eq!(bread.leftovers(), 4 - expected);
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert!(ledger().with_taken_quantity(2, "1").is_none());
    }

    #[test]
    fn test_from_menu_reclamps_server_values() {
        let menu = MenuRecord {
            name: "m".into(),
            items: vec![Item { name: "Soup".into(), quantity: 3, taken: 9, wasted: 1 }],
            ..Default::default()
        };
        let ledger = ItemLedger::from_menu(&menu);
        assert_eq!(ledger.items()[0].taken, 3);
        assert_eq!(ledger.items()[0].wasted, 1);
        assert_eq!(ledger.items()[0].leftovers(), 0);
    }
}
