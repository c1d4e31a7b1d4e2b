//! Grocery List
//!
//! Ordered item list. Names are unique (case-insensitive) when inserted and
//! immutable afterwards; only the pantry flag and price change in place.

use crate::models::{Item, ItemId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryList {
    items: Vec<Item>,
    next_id: u32,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from restored items, assigning fresh ids in order
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut list = Self::new();
        list.replace_all(items);
        list
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

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items not already in the pantry, in list order
    pub fn shopping_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.in_pantry)
    }

    pub fn pantry_count(&self) -> usize {
        self.items.iter().filter(|item| item.in_pantry).count()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.items.iter().any(|item| item.name.to_lowercase() == needle)
    }

    /// Append a trimmed name. Returns `None` for empty or duplicate names.
    pub fn add_item(&mut self, name: &str) -> Option<ItemId> {
        let name = name.trim();
        if name.is_empty() || self.contains_name(name) {
            return None;
        }
        let id = self.push(name.to_string());
        log::debug!("added item {:?} ({})", id, name);
        Some(id)
    }

    /// Append every candidate that is non-empty and not already on the list.
    ///
    /// Duplicates are checked against the list as it was when the batch
    /// arrived, so repeats inside one batch are all kept.
    pub fn add_multiple_items<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let survivors: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty() && !self.contains_name(name))
            .collect();

        for name in &survivors {
            self.push(name.clone());
        }
        log::debug!("batch added {} items", survivors.len());
        survivors.len()
    }

    pub fn remove_item(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    pub fn toggle_pantry(&mut self, id: ItemId) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.in_pantry = !item.in_pantry;
        }
    }

    /// Store the raw price text verbatim
    pub fn update_price(&mut self, id: ItemId, raw: &str) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.estimated_price = raw.to_string();
        }
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// Replace the whole list wholesale (no dedup), assigning fresh ids
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items.clear();
        for mut item in items {
            item.id = self.allocate_id();
            self.items.push(item);
        }
    }

    fn push(&mut self, name: String) -> ItemId {
        let id = self.allocate_id();
        self.items.push(Item::new(id, name));
        id
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &GroceryList) -> Vec<&str> {
        list.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_add_item_trims() {
        let mut list = GroceryList::new();
        let id = list.add_item("  Eggs  ").unwrap();

        let item = list.get(id).unwrap();
        assert_eq!(item.name, "Eggs");
        assert!(!item.in_pantry);
        assert_eq!(item.estimated_price, "");
    }

    #[test]
    fn test_add_item_rejects_empty_and_duplicates() {
        let mut list = GroceryList::new();
        list.add_item("Milk");

        assert!(list.add_item("   ").is_none());
        assert!(list.add_item("milk").is_none());
        assert!(list.add_item(" MILK ").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_multiple_items() {
        let mut list = GroceryList::new();
        list.add_item("Bread");

        let added = list.add_multiple_items(["  flour ", "", "bread", "sugar"]);
        assert_eq!(added, 2);
        assert_eq!(names(&list), vec!["Bread", "flour", "sugar"]);
    }

    #[test]
    fn test_add_multiple_items_keeps_in_batch_repeats() {
        let mut list = GroceryList::new();
        let added = list.add_multiple_items(vec!["milk".to_string(), "Milk".to_string()]);
        assert_eq!(added, 2);
        assert_eq!(names(&list), vec!["milk", "Milk"]);
    }

    #[test]
    fn test_add_multiple_items_nothing_new() {
        let mut list = GroceryList::new();
        list.add_item("Milk");
        assert_eq!(list.add_multiple_items(["milk", " "]), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_toggle_update_remove_by_id() {
        let mut list = GroceryList::new();
        let milk = list.add_item("Milk").unwrap();
        let eggs = list.add_item("Eggs").unwrap();

        list.toggle_pantry(milk);
        list.update_price(eggs, "not a number");
        assert!(list.get(milk).unwrap().in_pantry);
        assert_eq!(list.get(eggs).unwrap().estimated_price, "not a number");
        assert_eq!(list.shopping_items().count(), 1);
        assert_eq!(list.pantry_count(), 1);
        assert_eq!(list.len(), 2);

        list.remove_item(milk);
        assert_eq!(names(&list), vec!["Eggs"]);

        // stale ids are ignored
        list.remove_item(milk);
        list.toggle_pantry(milk);
        list.update_price(milk, "1");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = GroceryList::new();
        let a = list.add_item("a").unwrap();
        list.remove_item(a);
        let b = list.add_item("b").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_clear_and_replace_all() {
        let mut list = GroceryList::new();
        list.add_item("Milk");
        list.clear_all();
        assert!(list.is_empty());

        let restored = vec![Item::new(ItemId(99), "Tea"), Item::new(ItemId(99), "tea")];
        list.replace_all(restored);
        assert_eq!(names(&list), vec!["Tea", "tea"]);
        assert_ne!(list.items()[0].id, list.items()[1].id);
    }
}
