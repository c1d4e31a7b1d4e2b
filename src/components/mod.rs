//! UI Components
//!
//! Reusable Leptos components.

mod action_bar;
mod budget_panel;
mod delete_confirm_button;
mod item_list;
mod item_row;
mod new_item_form;
mod recipe_import_form;
mod toast;

pub use action_bar::ActionBar;
pub use budget_panel::BudgetPanel;
pub use delete_confirm_button::DeleteConfirmButton;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use recipe_import_form::RecipeImportForm;
pub use toast::Toast;
