//! Retailer Links
//!
//! Search URLs that ask each retailer to sort results by ascending price.
//! Nothing here checks that the retailer honors the sort.

use crate::encoding::encode_component;
use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retailer {
    Walmart,
    Target,
    Amazon,
}

impl Retailer {
    pub const ALL: [Retailer; 3] = [Retailer::Walmart, Retailer::Target, Retailer::Amazon];

    pub fn name(self) -> &'static str {
        match self {
            Retailer::Walmart => "Walmart",
            Retailer::Target => "Target",
            Retailer::Amazon => "Amazon",
        }
    }

    fn search_base(self) -> &'static str {
        match self {
            Retailer::Walmart => "https://www.walmart.com/search?q=",
            Retailer::Target => "https://www.target.com/s?searchTerm=",
            Retailer::Amazon => "https://www.amazon.com/s?k=",
        }
    }

    /// Query parameter requesting low-to-high price sort
    pub fn price_sort_param(self) -> &'static str {
        match self {
            Retailer::Walmart => "sort=price_low",
            Retailer::Target => "sortBy=PriceLow",
            Retailer::Amazon => "s=price-asc-rank",
        }
    }
}

pub fn search_url(retailer: Retailer, name: &str) -> String {
    format!(
        "{}{}&{}",
        retailer.search_base(),
        encode_component(name),
        retailer.price_sort_param()
    )
}

/// All retailer links for one item, in fixed retailer order
pub fn links_for(name: &str) -> Vec<(Retailer, String)> {
    Retailer::ALL
        .iter()
        .map(|&retailer| (retailer, search_url(retailer, name)))
        .collect()
}

/// Schedule for "open all links": one `(delay_ms, url)` per shopping item per
/// retailer. Staggered so popup blockers are less likely to drop the burst.
pub fn open_all_plan<'a, I>(items: I, stagger_ms: u32) -> Vec<(u32, String)>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| !item.in_pantry)
        .flat_map(|item| links_for(&item.name))
        .enumerate()
        .map(|(n, (_, url))| ((n as u32).saturating_mul(stagger_ms), url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::GroceryList;

    #[test]
    fn test_search_url_encodes_and_sorts() {
        let links = links_for("organic eggs");
        assert_eq!(links.len(), 3);
        for (retailer, url) in &links {
            assert!(url.contains("organic%20eggs"), "{}", url);
            assert!(url.ends_with(retailer.price_sort_param()), "{}", url);
            assert!(url.starts_with("https://"));
        }
        assert_eq!(
            search_url(Retailer::Walmart, "organic eggs"),
            "https://www.walmart.com/search?q=organic%20eggs&sort=price_low"
        );
    }

    #[test]
    fn test_search_url_escapes_query_delimiters() {
        let url = search_url(Retailer::Amazon, "salt&pepper=1");
        assert_eq!(url, "https://www.amazon.com/s?k=salt%26pepper%3D1&s=price-asc-rank");
    }

    #[test]
    fn test_open_all_plan() {
        let mut list = GroceryList::new();
        list.add_item("milk");
        let owned = list.add_item("flour").unwrap();
        list.add_item("eggs");
        list.toggle_pantry(owned);

        let plan = open_all_plan(list.items(), 300);
        assert_eq!(plan.len(), 6);
        let delays: Vec<u32> = plan.iter().map(|(d, _)| *d).collect();
        assert_eq!(delays, vec![0, 300, 600, 900, 1200, 1500]);
        assert!(plan[0].1.contains("walmart.com") && plan[0].1.contains("q=milk"));
        assert!(plan[2].1.contains("amazon.com"));
        assert!(plan[3].1.contains("q=eggs"));
        assert!(plan.iter().all(|(_, url)| !url.contains("flour")));
    }
}
