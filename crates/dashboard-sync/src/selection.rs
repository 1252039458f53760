//! Selection/Persistence Bridge
//!
//! Which menu and scope are current, plus the seams that mirror the current
//! menu into durable client storage and into the navigable location.

use crate::model::{MenuId, MenuSummary, Scope};

/// Session-scoped selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub menu_id: Option<MenuId>,
    pub scope: Scope,
}

/// Durable last-selected menu (one key, last write wins)
pub trait SelectionStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, id: &MenuId);
    fn clear(&self);
}

/// Navigable location of the dashboard view
pub trait Location {
    /// Point the location at `id` without adding a history entry
    fn replace_menu(&self, id: &MenuId);
}

/// Resolve the initial menu: route parameter, else stored value, else none;
/// a candidate that is not among `menus` falls back to the first menu.
///
/// Returns `None` only when `menus` is empty.
pub fn resolve_initial_selection(
    menus: &[MenuSummary],
    route_param: Option<&str>,
    stored: Option<&str>,
) -> Option<MenuId> {
    let first = menus.first()?;
    let non_empty = |s: &&str| !s.is_empty();
    let candidate = route_param.filter(non_empty).or(stored.filter(non_empty));

    let resolved = candidate
        .and_then(|id| menus.iter().find(|m| m.id.as_str() == id))
        .unwrap_or(first);
    Some(resolved.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MealPeriod;

    fn menus(ids: &[&str]) -> Vec<MenuSummary> {
        ids.iter()
            .map(|id| MenuSummary {
                id: MenuId::from(*id),
                name: format!("Menu {}", id),
                meal_period: MealPeriod::Breakfast,
                item_count: 0,
            })
            .collect()
    }

    #[test]
    fn test_empty_list_resolves_to_none() {
        assert_eq!(resolve_initial_selection(&[], Some("1"), Some("1")), None);
    }

    #[test]
    fn test_route_takes_precedence_over_storage() {
        let list = menus(&["1", "2", "3"]);
        let resolved = resolve_initial_selection(&list, Some("2"), Some("1"));
        assert_eq!(resolved, Some(MenuId::from("2")));
    }

    #[test]
    fn test_stored_value_used_without_route() {
        let list = menus(&["1", "2", "3"]);
        let resolved = resolve_initial_selection(&list, None, Some("3"));
        assert_eq!(resolved, Some(MenuId::from("3")));
    }

    #[test]
    fn test_unknown_candidate_falls_back_to_first() {
        let list = menus(&["1", "2", "3"]);
        assert_eq!(resolve_initial_selection(&list, None, Some("5")), Some(MenuId::from("1")));
        // An unknown route id does not fall through to storage
        assert_eq!(resolve_initial_selection(&list, Some("9"), Some("3")), Some(MenuId::from("1")));
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let list = menus(&["1", "2"]);
        assert_eq!(resolve_initial_selection(&list, Some(""), Some("2")), Some(MenuId::from("2")));
        assert_eq!(resolve_initial_selection(&list, None, Some("")), Some(MenuId::from("1")));
    }
}
