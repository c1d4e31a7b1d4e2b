//! Share Codec
//!
//! Encodes the list and budget into `?items=...&budget=...` on the page's own
//! URL and restores them on load. The payload has no version field.

use crate::encoding::{decode_query_value, encode_component};
use crate::error::ShareError;
use crate::models::Item;

const ITEMS_PARAM: &str = "items";
const BUDGET_PARAM: &str = "budget";

/// What a share link carried
#[derive(Debug, Clone, PartialEq)]
pub struct SharedState {
    /// `Ok(None)` when the link had no items parameter
    pub items: Result<Option<Vec<Item>>, ShareError>,
    pub budget: Option<String>,
}

/// Build the share URL. `base` is origin + path; any query or fragment on it
/// is discarded.
pub fn encode_share_url(base: &str, items: &[Item], budget: &str) -> String {
    let base = base.split(&['?', '#'][..]).next().unwrap_or(base);
    // Serializing plain strings and bools cannot fail
    let json = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());

    let mut url = format!("{}?{}={}", base, ITEMS_PARAM, encode_component(&json));
    if !budget.is_empty() {
        url.push_str(&format!("&{}={}", BUDGET_PARAM, encode_component(budget)));
    }
    url
}

/// Read share parameters from a location search string (leading `?` optional)
pub fn decode_share_query(search: &str) -> SharedState {
    let mut items_raw = None;
    let mut budget = None;

    for pair in search.trim_start_matches('?').split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match decode_query_value(key).as_str() {
            ITEMS_PARAM if items_raw.is_none() => items_raw = Some(decode_query_value(value)),
            BUDGET_PARAM if budget.is_none() => budget = Some(decode_query_value(value)),
            _ => {}
        }
    }

    let items = match items_raw {
        None => Ok(None),
        Some(json) => serde_json::from_str::<Vec<Item>>(&json)
            .map(Some)
            .map_err(|e| ShareError::Json(e.to_string())),
    };

    SharedState { items, budget }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::GroceryList;

    fn sample_list() -> GroceryList {
        let mut list = GroceryList::new();
        let milk = list.add_item("Milk").unwrap();
        let eggs = list.add_item("organic eggs").unwrap();
        list.add_item("Mac & Cheese?");
        list.toggle_pantry(milk);
        list.update_price(eggs, "4.99");
        list
    }

    #[test]
    fn test_round_trip() {
        let list = sample_list();
        let url = encode_share_url("https://example.com/app/", list.items(), "42.5");
        let search = url.split_once('?').map(|(_, q)| q).unwrap();

        let shared = decode_share_query(search);
        let restored = GroceryList::from_items(shared.items.unwrap().unwrap());
        assert_eq!(restored.items(), list.items());
        assert_eq!(shared.budget.as_deref(), Some("42.5"));
    }

    #[test]
    fn test_encode_discards_existing_query_and_empty_budget() {
        let list = sample_list();
        let url = encode_share_url("https://example.com/?items=old#top", list.items(), "");
        assert!(url.starts_with("https://example.com/?items=%5B%7B"));
        assert!(!url.contains("old"));
        assert!(!url.contains("budget="));
        assert!(!url.contains('#'));
    }

    #[test]
    fn test_decode_without_params() {
        let shared = decode_share_query("");
        assert_eq!(shared.items, Ok(None));
        assert_eq!(shared.budget, None);

        let shared = decode_share_query("?utm_source=x");
        assert_eq!(shared.items, Ok(None));
    }

    #[test]
    fn test_decode_malformed_items_keeps_budget() {
        let shared = decode_share_query("?items=%5Bnot-json&budget=20");
        assert!(matches!(shared.items, Err(ShareError::Json(_))));
        assert_eq!(shared.budget.as_deref(), Some("20"));
    }

    #[test]
    fn test_decode_numeric_price_and_budget_only() {
        let payload = encode_component(r#"[{"name":"Rice","inPantry":false,"estimatedPrice":3}]"#);
        let shared = decode_share_query(&format!("items={}", payload));
        let items = shared.items.unwrap().unwrap();
        assert_eq!(items[0].name, "Rice");
        assert_eq!(items[0].estimated_price, "3");

        let shared = decode_share_query("?budget=15");
        assert_eq!(shared.items, Ok(None));
        assert_eq!(shared.budget.as_deref(), Some("15"));
    }
}
