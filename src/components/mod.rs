//! UI Components
//!
//! Dashboard panels and the controls they share.

mod delete_confirm_button;
mod edit_menu_form;
mod ledger_table;
mod meal_period_selector;
mod menu_header;
mod menu_items_editor;
mod menu_selector;
mod new_menu_form;
mod summary_panel;
mod waste_report_panel;

pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_menu_form::EditMenuForm;
pub use ledger_table::LedgerTable;
pub use meal_period_selector::MealPeriodSelector;
pub use menu_header::MenuHeader;
pub use menu_items_editor::MenuItemsEditor;
pub use menu_selector::MenuSelector;
pub use new_menu_form::NewMenuForm;
pub use summary_panel::SummaryPanel;
pub use waste_report_panel::WasteReportPanel;
