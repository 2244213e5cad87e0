//! Filter registry: the named request parameters, the value domain of each,
//! and the per-operation allow-lists.
//!
//! # Design
//! `Filter` is declared in the order its fields appear in the JSON body, so
//! a `BTreeMap<Filter, FilterValue>` iterates in wire order. Values are a
//! small sum type; a value of the wrong variant for a filter is simply
//! invalid rather than coerced.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::operation::Operation;

/// A named request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Filter {
    Actor,
    Artist,
    Asin,
    Availability,
    Author,
    Brand,
    BrowseNodeId,
    Condition,
    CurrencyOfPreference,
    DeliveryFlags,
    ItemIds,
    ItemIdType,
    ItemCount,
    ItemPage,
    Keywords,
    BrowseNodeIds,
    LanguagesOfPreference,
    Marketplace,
    MaxPrice,
    Merchant,
    MinPrice,
    MinReviewsRating,
    MinSavingPercent,
    OfferCount,
    PartnerTag,
    PartnerType,
    Properties,
    SearchIndex,
    SortBy,
    Title,
    VariationCount,
    VariationPage,
}

pub const AVAILABILITY: &[&str] = &["Available", "IncludeOutOfStock"];
pub const CONDITION: &[&str] = &["Any", "New", "Used", "Collectible", "Refurbished"];
pub const DELIVERY_FLAGS: &[&str] = &["AmazonGlobal", "FreeShipping", "FulfilledByAmazon", "Prime"];
pub const ITEM_ID_TYPE: &[&str] = &["ASIN"];
pub const MERCHANT: &[&str] = &["All", "Amazon"];
pub const PARTNER_TYPE: &[&str] = &["Associates"];
pub const SORT_BY: &[&str] = &[
    "AvgCustomerReviews",
    "Featured",
    "NewestArrivals",
    "Price:HighToLow",
    "Price:LowToHigh",
    "Relevance",
];
pub const SEARCH_INDEX: &[&str] = &[
    "All",
    "AmazonVideo",
    "Apparel",
    "Appliances",
    "ArtsAndCrafts",
    "Automotive",
    "Baby",
    "Beauty",
    "Books",
    "Classical",
    "Collectibles",
    "Computers",
    "DigitalMusic",
    "Electronics",
    "EverythingElse",
    "Fashion",
    "FashionBaby",
    "FashionBoys",
    "FashionGirls",
    "FashionMen",
    "FashionWomen",
    "GardenAndOutdoor",
    "GiftCards",
    "GroceryAndGourmetFood",
    "Handmade",
    "HealthPersonalCare",
    "HomeAndKitchen",
    "Industrial",
    "Jewelry",
    "KindleStore",
    "LocalServices",
    "Luggage",
    "LuxuryBeauty",
    "Magazines",
    "MobileAndAccessories",
    "MobileApps",
    "MoviesAndTV",
    "Music",
    "MusicalInstruments",
    "OfficeProducts",
    "PetSupplies",
    "Photo",
    "Shoes",
    "Software",
    "SportsAndOutdoors",
    "ToolsAndHomeImprovement",
    "ToysAndGames",
    "VHS",
    "VideoGames",
    "Watches",
];

const GET_ITEMS: &[Filter] = &[
    Filter::Condition,
    Filter::CurrencyOfPreference,
    Filter::ItemIds,
    Filter::ItemIdType,
    Filter::LanguagesOfPreference,
    Filter::Marketplace,
    Filter::Merchant,
    Filter::OfferCount,
    Filter::PartnerTag,
    Filter::PartnerType,
];

const SEARCH_ITEMS: &[Filter] = &[
    Filter::Actor,
    Filter::Artist,
    Filter::Author,
    Filter::Availability,
    Filter::Brand,
    Filter::BrowseNodeId,
    Filter::Condition,
    Filter::CurrencyOfPreference,
    Filter::DeliveryFlags,
    Filter::ItemCount,
    Filter::ItemPage,
    Filter::Keywords,
    Filter::LanguagesOfPreference,
    Filter::Marketplace,
    Filter::MaxPrice,
    Filter::Merchant,
    Filter::MinPrice,
    Filter::MinReviewsRating,
    Filter::MinSavingPercent,
    Filter::OfferCount,
    Filter::PartnerTag,
    Filter::PartnerType,
    Filter::Properties,
    Filter::SearchIndex,
    Filter::SortBy,
    Filter::Title,
];

const GET_VARIATIONS: &[Filter] = &[
    Filter::Asin,
    Filter::Condition,
    Filter::CurrencyOfPreference,
    Filter::LanguagesOfPreference,
    Filter::Marketplace,
    Filter::Merchant,
    Filter::OfferCount,
    Filter::PartnerTag,
    Filter::PartnerType,
    Filter::VariationCount,
    Filter::VariationPage,
];

const GET_BROWSE_NODES: &[Filter] = &[
    Filter::BrowseNodeIds,
    Filter::LanguagesOfPreference,
    Filter::Marketplace,
    Filter::PartnerTag,
    Filter::PartnerType,
];

/// Value domain of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Any non-empty string.
    Text,
    /// A base-10 integer carried as a string.
    Numeric,
    /// One of a closed set of strings.
    OneOf(&'static [&'static str]),
    /// An integer in `min..=max`; `None` leaves the top open.
    Range(i64, Option<i64>),
    /// A non-empty string map.
    Map,
}

impl Filter {
    pub const ALL: [Filter; 32] = [
        Filter::Actor,
        Filter::Artist,
        Filter::Asin,
        Filter::Availability,
        Filter::Author,
        Filter::Brand,
        Filter::BrowseNodeId,
        Filter::Condition,
        Filter::CurrencyOfPreference,
        Filter::DeliveryFlags,
        Filter::ItemIds,
        Filter::ItemIdType,
        Filter::ItemCount,
        Filter::ItemPage,
        Filter::Keywords,
        Filter::BrowseNodeIds,
        Filter::LanguagesOfPreference,
        Filter::Marketplace,
        Filter::MaxPrice,
        Filter::Merchant,
        Filter::MinPrice,
        Filter::MinReviewsRating,
        Filter::MinSavingPercent,
        Filter::OfferCount,
        Filter::PartnerTag,
        Filter::PartnerType,
        Filter::Properties,
        Filter::SearchIndex,
        Filter::SortBy,
        Filter::Title,
        Filter::VariationCount,
        Filter::VariationPage,
    ];

    /// JSON key of the filter in the request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            Filter::Actor => "Actor",
            Filter::Artist => "Artist",
            Filter::Asin => "ASIN",
            Filter::Availability => "Availability",
            Filter::Author => "Author",
            Filter::Brand => "Brand",
            Filter::BrowseNodeId => "BrowseNodeId",
            Filter::Condition => "Condition",
            Filter::CurrencyOfPreference => "CurrencyOfPreference",
            Filter::DeliveryFlags => "DeliveryFlags",
            Filter::ItemIds => "ItemIds",
            Filter::ItemIdType => "ItemIdType",
            Filter::ItemCount => "ItemCount",
            Filter::ItemPage => "ItemPage",
            Filter::Keywords => "Keywords",
            Filter::BrowseNodeIds => "BrowseNodeIds",
            Filter::LanguagesOfPreference => "LanguagesOfPreference",
            Filter::Marketplace => "Marketplace",
            Filter::MaxPrice => "MaxPrice",
            Filter::Merchant => "Merchant",
            Filter::MinPrice => "MinPrice",
            Filter::MinReviewsRating => "MinReviewsRating",
            Filter::MinSavingPercent => "MinSavingPercent",
            Filter::OfferCount => "OfferCount",
            Filter::PartnerTag => "PartnerTag",
            Filter::PartnerType => "PartnerType",
            Filter::Properties => "Properties",
            Filter::SearchIndex => "SearchIndex",
            Filter::SortBy => "SortBy",
            Filter::Title => "Title",
            Filter::VariationCount => "VariationCount",
            Filter::VariationPage => "VariationPage",
        }
    }

    /// Inverse of `wire_name`.
    pub fn from_wire_name(name: &str) -> Option<Filter> {
        Filter::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    pub fn rule(self) -> Rule {
        match self {
            Filter::Availability => Rule::OneOf(AVAILABILITY),
            Filter::Condition => Rule::OneOf(CONDITION),
            Filter::DeliveryFlags => Rule::OneOf(DELIVERY_FLAGS),
            Filter::ItemIdType => Rule::OneOf(ITEM_ID_TYPE),
            Filter::Merchant => Rule::OneOf(MERCHANT),
            Filter::PartnerType => Rule::OneOf(PARTNER_TYPE),
            Filter::SearchIndex => Rule::OneOf(SEARCH_INDEX),
            Filter::SortBy => Rule::OneOf(SORT_BY),
            Filter::BrowseNodeId | Filter::BrowseNodeIds => Rule::Numeric,
            Filter::ItemCount | Filter::ItemPage | Filter::VariationCount => {
                Rule::Range(1, Some(10))
            }
            Filter::MinReviewsRating => Rule::Range(1, Some(4)),
            Filter::MinSavingPercent => Rule::Range(1, Some(99)),
            Filter::MaxPrice | Filter::MinPrice | Filter::OfferCount | Filter::VariationPage => {
                Rule::Range(1, None)
            }
            Filter::Properties => Rule::Map,
            _ => Rule::Text,
        }
    }

    /// Filters that take a string list; a single string is promoted to a
    /// one-element list.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            Filter::DeliveryFlags
                | Filter::ItemIds
                | Filter::BrowseNodeIds
                | Filter::LanguagesOfPreference
        )
    }

    /// Check one string against the filter's rule. For list filters this is
    /// the per-element check.
    pub fn accepts(self, s: &str) -> bool {
        match self.rule() {
            Rule::Text => !s.is_empty(),
            Rule::Numeric => s.parse::<i64>().is_ok(),
            Rule::OneOf(set) => set.contains(&s),
            Rule::Range(..) | Rule::Map => false,
        }
    }

    /// Whether `value` lies in this filter's domain.
    pub fn is_valid(self, value: &FilterValue) -> bool {
        match (self.rule(), value) {
            (Rule::Range(min, max), FilterValue::Int(n)) => {
                *n >= min && max.is_none_or(|max| *n <= max)
            }
            (Rule::Map, FilterValue::StringMap(map)) => !map.is_empty(),
            (Rule::Range(..) | Rule::Map, _) => false,
            (_, FilterValue::Str(s)) => self.accepts(s),
            (_, FilterValue::StringList(list)) if self.is_list() => {
                list.iter().all(|s| self.accepts(s))
            }
            _ => false,
        }
    }

    /// Allow-list of `operation`; `None` means every filter is accepted.
    pub fn allowed_for(operation: Operation) -> Option<&'static [Filter]> {
        match operation {
            Operation::GetItems => Some(GET_ITEMS),
            Operation::SearchItems => Some(SEARCH_ITEMS),
            Operation::GetVariations => Some(GET_VARIATIONS),
            Operation::GetBrowseNodes => Some(GET_BROWSE_NODES),
            Operation::Unknown => None,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl Operation {
    /// Whether `filter` may be assigned on a query for this operation.
    pub fn allows(self, filter: Filter) -> bool {
        Filter::allowed_for(self).is_none_or(|list| list.contains(&filter))
    }
}

/// A filter value as assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    StringList(Vec<String>),
    StringMap(BTreeMap<String, String>),
}

impl FilterValue {
    /// Empty values are never emitted.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Str(s) => s.is_empty(),
            FilterValue::Int(_) => false,
            FilterValue::StringList(v) => v.is_empty(),
            FilterValue::StringMap(m) => m.is_empty(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Str(s)
    }
}

impl From<&String> for FilterValue {
    fn from(s: &String) -> Self {
        FilterValue::Str(s.clone())
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Int(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Int(n.into())
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        FilterValue::Int(n.into())
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(v: Vec<String>) -> Self {
        FilterValue::StringList(v)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(v: Vec<&str>) -> Self {
        FilterValue::StringList(v.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for FilterValue {
    fn from(v: &[&str]) -> Self {
        FilterValue::StringList(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FilterValue {
    fn from(v: [&str; N]) -> Self {
        FilterValue::StringList(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<BTreeMap<String, String>> for FilterValue {
    fn from(m: BTreeMap<String, String>) -> Self {
        FilterValue::StringMap(m)
    }
}

impl From<HashMap<String, String>> for FilterValue {
    fn from(m: HashMap<String, String>) -> Self {
        FilterValue::StringMap(m.into_iter().collect())
    }
}

/// Why a filter assignment was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("filter {filter} is not allowed for operation {operation:?}")]
    NotAllowed { filter: Filter, operation: Operation },

    /// For list filters `value` holds only the excluded elements.
    #[error("invalid value for filter {filter}: {value:?}")]
    InvalidValue { filter: Filter, value: FilterValue },
}
