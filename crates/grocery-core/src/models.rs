//! Grocery Models
//!
//! Item data structure and its wire form inside share links.

use serde::{Deserialize, Deserializer, Serialize};

/// Session-local item identity. Never serialized; reassigned on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemId(pub u32);

/// A single grocery list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip)]
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "inPantry", default)]
    pub in_pantry: bool,
    /// Raw user text; validated only when totals are computed
    #[serde(
        rename = "estimatedPrice",
        default,
        deserialize_with = "deserialize_price"
    )]
    pub estimated_price: String,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            in_pantry: false,
            estimated_price: String::new(),
        }
    }
}

/// Older share links may carry the price as a bare JSON number
fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(s) => s,
        RawPrice::Number(n) => n.to_string(),
        RawPrice::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form_uses_camel_case_and_skips_id() {
        let mut item = Item::new(ItemId(7), "Milk");
        item.in_pantry = true;
        item.estimated_price = "3.49".to_string();

        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"name":"Milk","inPantry":true,"estimatedPrice":"3.49"}"#);
    }

    #[test]
    fn test_price_accepts_number_and_null() {
        let items: Vec<Item> = serde_json::from_str(
            r#"[{"name":"Eggs","inPantry":false,"estimatedPrice":2.5},
                {"name":"Rice","inPantry":false,"estimatedPrice":null},
                {"name":"Salt"}]"#,
        )
        .unwrap();

        assert_eq!(items[0].estimated_price, "2.5");
        assert_eq!(items[1].estimated_price, "");
        assert_eq!(items[2].estimated_price, "");
        assert!(!items[2].in_pantry);
        assert_eq!(items[0].id, ItemId::default());
    }
}
