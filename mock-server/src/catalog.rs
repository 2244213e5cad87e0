//! Canned catalog served by the mock.
//!
//! Items and browse nodes are plain `serde_json::Value`s shaped like the
//! live service's responses. `select` trims an item down to the requested
//! resources.

use serde_json::{json, Map, Value};

pub struct Catalog {
    items: Vec<Value>,
    browse_nodes: Vec<Value>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: vec![
                json!({
                    "ASIN": "B07YCM5K55",
                    "DetailPageURL": "https://www.amazon.com/dp/B07YCM5K55?tag=mytag-20",
                    "Images": {
                        "Primary": {
                            "Small": {"URL": "https://m.media-amazon.com/images/I/41abc._SL75_.jpg", "Height": 75, "Width": 56},
                            "Medium": {"URL": "https://m.media-amazon.com/images/I/41abc._SL160_.jpg", "Height": 160, "Width": 120},
                            "Large": {"URL": "https://m.media-amazon.com/images/I/41abc.jpg", "Height": 500, "Width": 375}
                        }
                    },
                    "ItemInfo": {
                        "ByLineInfo": {
                            "Brand": {"DisplayValue": "Amazon", "Label": "Brand", "Locale": "en_US"},
                            "Manufacturer": {"DisplayValue": "Amazon", "Label": "Manufacturer", "Locale": "en_US"}
                        },
                        "Classifications": {
                            "Binding": {"DisplayValue": "Electronics", "Label": "Binding", "Locale": "en_US"},
                            "ProductGroup": {"DisplayValue": "Digital Device", "Label": "ProductGroup", "Locale": "en_US"}
                        },
                        "ProductInfo": {
                            "Color": {"DisplayValue": "Black", "Label": "Color", "Locale": "en_US"},
                            "IsAdultProduct": {"DisplayValue": false, "Label": "IsAdultProduct", "Locale": "en_US"},
                            "ReleaseDate": {"DisplayValue": "2019-10-30T00:00:01Z", "Label": "ReleaseDate", "Locale": "en_US"}
                        },
                        "Title": {"DisplayValue": "Kindle E-reader with Built-in Front Light", "Label": "Title", "Locale": "en_US"}
                    },
                    "CustomerReviews": {"Count": 1520, "StarRating": {"Value": 4.6}},
                    "Offers": {
                        "Listings": [{
                            "Id": "listing-1",
                            "IsBuyBoxWinner": true,
                            "Price": {"Amount": 89.99, "Currency": "USD", "DisplayAmount": "$89.99"},
                            "Availability": {"Message": "In Stock.", "Type": "Now", "MinOrderQuantity": 1, "MaxOrderQuantity": 30}
                        }],
                        "Summaries": [{
                            "Condition": {"Value": "New"},
                            "LowestPrice": {"Amount": 89.99, "Currency": "USD", "DisplayAmount": "$89.99"},
                            "OfferCount": 1
                        }]
                    },
                    "BrowseNodeInfo": {
                        "BrowseNodes": [{
                            "Id": "6669702011",
                            "DisplayName": "Kindle E-readers",
                            "ContextFreeName": "Kindle E-readers",
                            "IsRoot": false,
                            "SalesRank": 3,
                            "Ancestor": {"Id": "2102313011", "DisplayName": "Kindle Store", "ContextFreeName": "Kindle Store"}
                        }]
                    }
                }),
                json!({
                    "ASIN": "B07YCM5K56",
                    "ParentASIN": "B07YCM5K55",
                    "DetailPageURL": "https://www.amazon.com/dp/B07YCM5K56?tag=mytag-20",
                    "ItemInfo": {
                        "ProductInfo": {"Color": {"DisplayValue": "White", "Label": "Color", "Locale": "en_US"}},
                        "Title": {"DisplayValue": "Kindle E-reader with Built-in Front Light, White", "Label": "Title", "Locale": "en_US"}
                    },
                    "VariationAttributes": [{"Name": "color_name", "Value": "White"}],
                    "Offers": {
                        "Listings": [{
                            "Id": "listing-2",
                            "Price": {"Amount": 99.99, "Currency": "USD", "DisplayAmount": "$99.99"}
                        }]
                    }
                }),
                json!({
                    "ASIN": "4900900028",
                    "DetailPageURL": "https://www.amazon.co.jp/dp/4900900028?tag=mytag-20",
                    "ItemInfo": {
                        "ByLineInfo": {
                            "Contributors": [{"Name": "Spiegel", "Locale": "ja_JP", "Role": "Author"}]
                        },
                        "ContentInfo": {
                            "Languages": {"DisplayValues": [{"DisplayValue": "Japanese", "Type": "Published"}], "Label": "Language", "Locale": "en_US"},
                            "PagesCount": {"DisplayValue": 256, "Label": "NumberOfPages", "Locale": "en_US"},
                            "PublicationDate": {"DisplayValue": "2019-05", "Label": "PublicationDate", "Locale": "en_US"}
                        },
                        "ExternalIds": {
                            "ISBNs": {"DisplayValues": ["4900900028"], "Label": "ISBN", "Locale": "en_US"}
                        },
                        "Title": {"DisplayValue": "Practical Cryptography Primer", "Label": "Title", "Locale": "ja_JP"}
                    },
                    "BrowseNodeInfo": {
                        "BrowseNodes": [{
                            "Id": "3040",
                            "DisplayName": "Computers & Technology",
                            "ContextFreeName": "Computers & Technology Books",
                            "IsRoot": false,
                            "Ancestor": {"Id": "283155", "DisplayName": "Books", "ContextFreeName": "Books"}
                        }]
                    }
                }),
            ],
            browse_nodes: vec![
                json!({
                    "Id": "283155",
                    "DisplayName": "Books",
                    "ContextFreeName": "Books",
                    "IsRoot": true,
                    "Children": [{"Id": "3040", "DisplayName": "Computers & Technology", "ContextFreeName": "Computers & Technology Books"}]
                }),
                json!({
                    "Id": "3040",
                    "DisplayName": "Computers & Technology",
                    "ContextFreeName": "Computers & Technology Books",
                    "IsRoot": false,
                    "Ancestor": {"Id": "283155", "DisplayName": "Books", "ContextFreeName": "Books"}
                }),
            ],
        }
    }
}

impl Catalog {
    pub fn item(&self, asin: &str) -> Option<&Value> {
        self.items.iter().find(|item| item["ASIN"] == asin)
    }

    /// Items whose title contains every word of `keywords`, ignoring case.
    pub fn search(&self, keywords: &str) -> Vec<&Value> {
        let words: Vec<String> = keywords.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .filter(|item| {
                let title = item["ItemInfo"]["Title"]["DisplayValue"]
                    .as_str()
                    .unwrap_or_default()
                    .to_lowercase();
                words.iter().all(|w| title.contains(w.as_str()))
            })
            .collect()
    }

    /// `asin` and every item naming it as parent. A child ASIN resolves to
    /// its parent's family.
    pub fn variations(&self, asin: &str) -> Vec<&Value> {
        let parent = self
            .item(asin)
            .and_then(|item| item["ParentASIN"].as_str())
            .unwrap_or(asin);
        self.items
            .iter()
            .filter(|item| item["ASIN"] == parent || item["ParentASIN"] == parent)
            .collect()
    }

    pub fn browse_node(&self, id: &str) -> Option<&Value> {
        self.browse_nodes.iter().find(|node| node["Id"] == id)
    }
}

/// Keep only the parts of `value` named by the dotted `resources` paths.
///
/// A path that ends at a key keeps that key's whole subtree. `keep` keys
/// survive regardless.
pub fn select(value: &Value, resources: &[&str], keep: &[&str]) -> Value {
    let paths: Vec<Vec<&str>> = resources.iter().map(|r| r.split('.').collect()).collect();
    prune(value, &paths, keep)
}

fn prune(value: &Value, paths: &[Vec<&str>], keep: &[&str]) -> Value {
    let Some(object) = value.as_object() else {
        return value.clone();
    };
    let mut out = Map::new();
    for (key, child) in object {
        if keep.contains(&key.as_str()) {
            out.insert(key.clone(), child.clone());
            continue;
        }
        let tails: Vec<Vec<&str>> = paths
            .iter()
            .filter(|p| p.first() == Some(&key.as_str()))
            .map(|p| p[1..].to_vec())
            .collect();
        if tails.is_empty() {
            continue;
        }
        if tails.iter().any(|t| t.is_empty()) || !child.is_object() {
            out.insert(key.clone(), child.clone());
        } else {
            let pruned = prune(child, &tails, &[]);
            if pruned.as_object().is_some_and(|m| !m.is_empty()) {
                out.insert(key.clone(), pruned);
            }
        }
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_items_and_nodes() {
        let c = Catalog::default();
        assert!(c.item("B07YCM5K55").is_some());
        assert!(c.item("B000000000").is_none());
        assert!(c.browse_node("3040").is_some());
    }

    #[test]
    fn search_matches_all_words() {
        let c = Catalog::default();
        assert_eq!(c.search("kindle").len(), 2);
        assert_eq!(c.search("kindle white").len(), 1);
        assert!(c.search("toaster").is_empty());
        assert!(c.search("  ").is_empty());
    }

    #[test]
    fn variations_resolve_parent() {
        let c = Catalog::default();
        assert_eq!(c.variations("B07YCM5K55").len(), 2);
        assert_eq!(c.variations("B07YCM5K56").len(), 2);
        assert_eq!(c.variations("4900900028").len(), 1);
    }

    #[test]
    fn select_keeps_requested_paths() {
        let c = Catalog::default();
        let item = c.item("B07YCM5K55").unwrap();
        let out = select(item, &["ItemInfo.Title", "Images.Primary.Small"], &["ASIN", "DetailPageURL"]);

        assert_eq!(out["ASIN"], "B07YCM5K55");
        assert!(out["DetailPageURL"].is_string());
        assert!(out["ItemInfo"]["Title"].is_object());
        assert!(out["ItemInfo"].get("ByLineInfo").is_none());
        assert!(out["Images"]["Primary"]["Small"].is_object());
        assert!(out["Images"]["Primary"].get("Large").is_none());
        assert!(out.get("Offers").is_none());
    }

    #[test]
    fn select_with_no_resources_keeps_identity_only() {
        let c = Catalog::default();
        let out = select(c.item("4900900028").unwrap(), &[], &["ASIN", "DetailPageURL"]);
        assert_eq!(out.as_object().unwrap().len(), 2);
    }

    #[test]
    fn select_keeps_arrays_whole() {
        let c = Catalog::default();
        let out = select(c.item("B07YCM5K55").unwrap(), &["Offers.Listings.Price"], &[]);
        assert_eq!(out["Offers"]["Listings"][0]["Id"], "listing-1");
    }
}
