//! Grocery List Core
//!
//! Target-independent logic behind the grocery list UI:
//! - models: items and their share-payload wire form
//! - list: ordered, name-deduplicated item list
//! - budget: totals, over-budget flag and progress
//! - links: retailer search URLs sorted by ascending price
//! - toast: single-slot notification with generation guard
//! - share: URL query encode/decode of the list and budget
//! - recipe: Gemini request/response handling for recipe import
//! - voice: dictated transcript normalization
//! - config: explicit app configuration

pub mod budget;
pub mod config;
pub mod error;
pub mod links;
pub mod list;
pub mod models;
pub mod recipe;
pub mod share;
pub mod toast;
pub mod voice;

mod encoding;

pub use budget::{parse_amount, BudgetSummary};
pub use config::{AppConfig, GeminiConfig};
pub use error::{ImportError, ShareError};
pub use links::{links_for, open_all_plan, search_url, Retailer};
pub use list::GroceryList;
pub use models::{Item, ItemId};
pub use share::{decode_share_query, encode_share_url, SharedState};
pub use toast::ToastSlot;
pub use voice::normalize_transcript;
