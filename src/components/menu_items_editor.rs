//! Menu Items Editor Component
//!
//! Draft item list shared by the new-menu and edit-menu forms: add an item
//! with a quantity, change quantities in place, remove with confirmation.

use dashboard_sync::NewMenuItem;
use leptos::prelude::*;

use super::DeleteConfirmButton;

/// Unparseable quantities become 0 and are rejected when the form submits
fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
pub fn MenuItemsEditor(items: RwSignal<Vec<NewMenuItem>>) -> impl IntoView {
    let (item_name, set_item_name) = signal(String::new());
    let (item_quantity, set_item_quantity) = signal(String::from("1"));

    let add_item = move |_| {
        let name = item_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let quantity = parse_quantity(&item_quantity.get());
        items.update(|list| list.push(NewMenuItem { name, quantity }));
        set_item_name.set(String::new());
        set_item_quantity.set(String::from("1"));
    };

    view! {
        <ul class="draft-items">
            {move || items.get().into_iter().enumerate().map(|(index, item)| view! {
                <li>
                    <span class="draft-item-name">{item.name}</span>
                    <input
                        type="number"
                        min="1"
                        prop:value=item.quantity.to_string()
                        on:change=move |ev| {
                            let quantity = parse_quantity(&event_target_value(&ev));
                            items.update(|list| {
                                if let Some(entry) = list.get_mut(index) {
                                    entry.quantity = quantity;
                                }
                            });
                        }
                    />
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        on_confirm=move |_| items.update(|list| {
                            if index < list.len() {
                                list.remove(index);
                            }
                        })
                    />
                </li>
            }).collect_view()}
        </ul>

        <div class="new-item-row">
            <input
                type="text"
                placeholder="Item"
                prop:value=move || item_name.get()
                on:input=move |ev| set_item_name.set(event_target_value(&ev))
            />
            <input
                type="number"
                min="1"
                prop:value=move || item_quantity.get()
                on:input=move |ev| set_item_quantity.set(event_target_value(&ev))
            />
            <button type="button" on:click=add_item>"Add Item"</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity("-3"), -3);
        assert_eq!(parse_quantity("2.5"), 0);
        assert_eq!(parse_quantity(""), 0);
    }
}
