//! Response entities.
//!
//! # Design
//! Every field is optional: which blocks appear depends on the resources
//! requested, and the service omits anything it has no data for. Absent
//! fields are skipped again on serialization so a decoded response
//! round-trips to the same shape.

use std::fmt;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ApiError;

// ---------------------------------------------------------------------------
// Top level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_result: Option<ItemsResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_result: Option<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variations_result: Option<VariationsResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_nodes_result: Option<BrowseNodesResult>,
}

impl Response {
    /// Decode a response body. The raw body is kept in the error.
    pub fn decode(body: &[u8]) -> Result<Response, ApiError> {
        serde_json::from_slice(body).map_err(|e| ApiError::Decode {
            message: e.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        })
    }

    pub fn to_json(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Items of whichever result block is present.
    pub fn items(&self) -> &[Item] {
        if let Some(r) = &self.items_result {
            &r.items
        } else if let Some(r) = &self.search_result {
            &r.items
        } else if let Some(r) = &self.variations_result {
            &r.items
        } else {
            &[]
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorInfo {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_refinements: Option<SearchRefinements>,
    #[serde(rename = "SearchURL", default, skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_result_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRefinements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_index: Option<Refinement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_node: Option<Refinement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other_refinements: Vec<Refinement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Refinement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bins: Vec<RefinementBin>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefinementBin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationsResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_summary: Option<VariationSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variation_dimensions: Vec<VariationDimension>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriceRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_price: Option<Money>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationDimension {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrowseNodesResult {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub browse_nodes: Vec<BrowseNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrowseNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<Ancestor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BrowseNodeChild>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_free_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_root: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrowseNodeChild {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_free_name: Option<String>,
}

/// A browse node's parent chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ancestor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_free_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<Box<Ancestor>>,
}

impl Ancestor {
    /// Number of nodes in the chain, this one included.
    pub fn depth(&self) -> usize {
        1 + self.ancestor.as_ref().map_or(0, |a| a.depth())
    }
}

// ---------------------------------------------------------------------------
// Shared value blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
}

/// Labelled display value. `T` is the value type: text, number, flag or
/// date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenInfo<T = String> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Money {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Savings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<Money>,
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(rename = "ASIN", default)]
    pub asin: String,
    #[serde(rename = "ParentASIN", default, skip_serializing_if = "Option::is_none")]
    pub parent_asin: Option<String>,
    #[serde(rename = "DetailPageURL", default, skip_serializing_if = "Option::is_none")]
    pub detail_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_reviews: Option<CustomerReviews>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browse_node_info: Option<BrowseNodeInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Images>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_info: Option<ItemInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variation_attributes: Vec<VariationAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offers>,
    #[serde(rename = "OffersV2", default, skip_serializing_if = "Option::is_none")]
    pub offers_v2: Option<OffersV2>,
}

impl Item {
    pub fn title(&self) -> Option<&str> {
        self.item_info
            .as_ref()?
            .title
            .as_ref()?
            .display_value
            .as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerReviews {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub star_rating: Option<StarRating>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StarRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BrowseNodeInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub browse_nodes: Vec<ItemBrowseNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_sales_rank: Option<SalesRank>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemBrowseNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_free_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_root: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<Ancestor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesRank {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_free_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_rank: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Images {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<ImageSet>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<ImageSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

// ---------------------------------------------------------------------------
// ItemInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_line_info: Option<ByLineInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifications: Option<Classifications>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_info: Option<ContentInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_rating: Option<ContentRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ids: Option<ExternalIds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<IdInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacture_info: Option<ManufactureInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_info: Option<ProductInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_info: Option<TechnicalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_in_info: Option<TradeInInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ByLineInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contributors: Vec<Contributor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contributor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Classifications {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_group: Option<GenInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Languages>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_count: Option<GenInfo<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<GenInfo<Date>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Languages {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub display_values: Vec<LanguageValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentRating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience_rating: Option<GenInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(rename = "EANs", default, skip_serializing_if = "Option::is_none")]
    pub eans: Option<IdInfo>,
    #[serde(rename = "ISBNs", default, skip_serializing_if = "Option::is_none")]
    pub isbns: Option<IdInfo>,
    #[serde(rename = "UPCs", default, skip_serializing_if = "Option::is_none")]
    pub upcs: Option<IdInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManufactureInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_part_number: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<GenInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_adult_product: Option<GenInfo<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_dimensions: Option<ItemDimensions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<GenInfo<Date>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<GenInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<GenInfo<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemDimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<GenInfo<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<GenInfo<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<GenInfo<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<GenInfo<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TechnicalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formats: Option<IdInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeInInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_eligible_for_trade_in: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Money>,
}

// ---------------------------------------------------------------------------
// Offers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Offers {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listings: Vec<OfferListing>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub summaries: Vec<OfferSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_info: Option<DeliveryInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_buy_box_winner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_points: Option<LoyaltyPoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_info: Option<MerchantInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<OfferPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_eligibility: Option<ProgramEligibility>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub promotions: Vec<Promotion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving_basis: Option<Money>,
    #[serde(rename = "ViolateMAP", default, skip_serializing_if = "Option::is_none")]
    pub violate_map: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Availability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_order_quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_quantity: Option<i64>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_condition: Option<Box<Condition>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_amazon_fulfilled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_free_shipping_eligible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_prime_eligible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoyaltyPoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MerchantInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_shipping_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<Savings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProgramEligibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_prime_exclusive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_prime_pantry: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Promotion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_price: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OffersV2 {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listings: Vec<OfferListingV2>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferListingV2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionV2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_details: Option<DealDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_buy_box_winner: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_points: Option<LoyaltyPoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_info: Option<MerchantInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<OfferPriceV2>,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "ViolateMAP", default, skip_serializing_if = "Option::is_none")]
    pub violate_map: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConditionV2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_condition: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DealDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_access_duration_in_milliseconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_claimed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferPriceV2 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving_basis: Option<SavingBasis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<Savings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SavingBasis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving_basis_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving_basis_type_label: Option<String>,
}

// ---------------------------------------------------------------------------
// Date
// ---------------------------------------------------------------------------

/// A calendar value as the service reports it: sometimes a full RFC 3339
/// timestamp, often only a year or a year and month.
///
/// Missing parts default to the first month or day at midnight UTC. An
/// empty string or `null` decodes to the absent date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Option<DateTime<Utc>>);

/// `(layout, padding, padding layout)`. The padding supplies the month and
/// day a partial layout leaves out.
const DATE_LAYOUTS: &[(&str, &str, &str)] = &[
    ("%Y-%mT", "-01", "-%d"),
    ("%Y-%m-%d", "", ""),
    ("%Y-%m", "-01", "-%d"),
    ("%Y/%m/%d", "", ""),
    ("%Y/%m", "/01", "/%d"),
    ("%Y", "-01-01", "-%m-%d"),
    ("%YT", "-01-01", "-%m-%d"),
];

impl Date {
    pub fn new(time: DateTime<Utc>) -> Self {
        Date(Some(time))
    }

    pub fn get(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Parse one of the accepted layouts.
    pub fn parse(s: &str) -> Result<Date, String> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("null") {
            return Ok(Date::default());
        }
        if let Ok(time) = DateTime::parse_from_rfc3339(s) {
            return Ok(Date::new(time.with_timezone(&Utc)));
        }
        for (layout, pad, pad_layout) in DATE_LAYOUTS {
            let text = format!("{s}{pad}");
            let fmt = format!("{layout}{pad_layout}");
            if let Some(time) = NaiveDate::parse_from_str(&text, &fmt)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
            {
                return Ok(Date::new(time.and_utc()));
            }
        }
        Err(format!("unrecognized date {s:?}"))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(time) => f.write_str(&time.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => Ok(()),
        }
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(_) => serializer.serialize_str(&self.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DateVisitor)
    }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
    type Value = Date;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a date string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Date, E> {
        Date::parse(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Date, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Date, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Date, E> {
        Ok(Date::default())
    }

    fn visit_none<E: de::Error>(self) -> Result<Date, E> {
        Ok(Date::default())
    }
}
