//! Query builder.
//!
//! # Overview
//! A `Query` accumulates the filters and resource groups of one request and
//! serializes them into the JSON body the service expects:
//! `Operation` first, then every assigned filter in registry order, then the
//! `Resources` list. Unset and empty fields are omitted, never emitted as
//! `null` or `""`.
//!
//! # Design
//! - Filters live in a `BTreeMap` keyed by `Filter` and resource groups in a
//!   `BTreeSet`, so emission order is fixed by declaration order and
//!   `Resources` is recomputed from scratch on every serialization.
//! - `set_filter` refuses illegal or out-of-domain assignments with a
//!   `FilterError` and leaves the query untouched. `request` is the
//!   chainable form that swallows the error. Either way the refusal is kept
//!   in `rejections()` so a caller can find out what was dropped.
//! - A query built with `Query::unbound()` has no operation. It accepts
//!   every filter and serializes as `{"Operation":""}` plus whatever was
//!   assigned. An absent query (`payload_of(None)`) is a `NullReference`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::error::ApiError;
use crate::filter::{Filter, FilterError, FilterValue};
use crate::operation::Operation;
use crate::resource::{self, ResourceGroup};

/// Which free-text filter `Query::search` assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Actor,
    Artist,
    Author,
    Brand,
    Keywords,
    Title,
}

impl SearchKind {
    pub fn filter(self) -> Filter {
        match self {
            SearchKind::Actor => Filter::Actor,
            SearchKind::Artist => Filter::Artist,
            SearchKind::Author => Filter::Author,
            SearchKind::Brand => Filter::Brand,
            SearchKind::Keywords => Filter::Keywords,
            SearchKind::Title => Filter::Title,
        }
    }
}

/// One catalog request under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    operation: Operation,
    filters: BTreeMap<Filter, FilterValue>,
    resources: BTreeSet<ResourceGroup>,
    rejections: Vec<FilterError>,
}

impl Query {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            ..Self::default()
        }
    }

    /// A query with no operation bound.
    pub fn unbound() -> Self {
        Self::default()
    }

    pub fn get_items(marketplace: &str, partner_tag: &str, partner_type: &str) -> Self {
        Self::for_operation(Operation::GetItems, marketplace, partner_tag, partner_type)
    }

    pub fn search_items(marketplace: &str, partner_tag: &str, partner_type: &str) -> Self {
        Self::for_operation(Operation::SearchItems, marketplace, partner_tag, partner_type)
    }

    pub fn get_variations(marketplace: &str, partner_tag: &str, partner_type: &str) -> Self {
        Self::for_operation(Operation::GetVariations, marketplace, partner_tag, partner_type)
    }

    pub fn get_browse_nodes(marketplace: &str, partner_tag: &str, partner_type: &str) -> Self {
        Self::for_operation(Operation::GetBrowseNodes, marketplace, partner_tag, partner_type)
    }

    /// Blank identity fields are skipped rather than logged as rejections.
    pub fn for_operation(operation: Operation, marketplace: &str, partner_tag: &str, partner_type: &str) -> Self {
        let mut query = Self::new(operation);
        for (filter, value) in [
            (Filter::Marketplace, marketplace),
            (Filter::PartnerTag, partner_tag),
            (Filter::PartnerType, partner_type),
        ] {
            if !value.is_empty() {
                let _ = query.set_filter(filter, value);
            }
        }
        query
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    // -----------------------------------------------------------------------
    // Filters
    // -----------------------------------------------------------------------

    /// Assign `value` to `filter`.
    ///
    /// Fails without touching the query when the filter is not allowed for
    /// this operation or the value lies outside its domain. List filters are
    /// the exception: valid elements are stored even when others are
    /// excluded, and the error then names the excluded elements only.
    pub fn set_filter(&mut self, filter: Filter, value: impl Into<FilterValue>) -> Result<(), FilterError> {
        let result = self.assign(filter, value.into());
        if let Err(err) = &result {
            debug!(operation = %self.operation, %err, "filter assignment rejected");
            self.rejections.push(err.clone());
        }
        result
    }

    /// Chainable `set_filter` that ignores the outcome.
    pub fn request(mut self, filter: Filter, value: impl Into<FilterValue>) -> Self {
        let _ = self.set_filter(filter, value);
        self
    }

    fn assign(&mut self, filter: Filter, value: FilterValue) -> Result<(), FilterError> {
        if !self.operation.allows(filter) {
            return Err(FilterError::NotAllowed {
                filter,
                operation: self.operation,
            });
        }

        if filter.is_list() {
            return match value {
                FilterValue::Str(s) if filter.accepts(&s) => {
                    self.filters.insert(filter, FilterValue::StringList(vec![s]));
                    Ok(())
                }
                FilterValue::StringList(list) => {
                    let (kept, dropped): (Vec<String>, Vec<String>) =
                        list.into_iter().partition(|s| filter.accepts(s));
                    if kept.is_empty() {
                        self.filters.remove(&filter);
                    } else {
                        self.filters.insert(filter, FilterValue::StringList(kept));
                    }
                    if dropped.is_empty() {
                        Ok(())
                    } else {
                        Err(FilterError::InvalidValue {
                            filter,
                            value: FilterValue::StringList(dropped),
                        })
                    }
                }
                other => Err(FilterError::InvalidValue { filter, value: other }),
            };
        }

        if !filter.is_valid(&value) {
            return Err(FilterError::InvalidValue { filter, value });
        }
        self.filters.insert(filter, value);
        Ok(())
    }

    pub fn filter(&self, filter: Filter) -> Option<&FilterValue> {
        self.filters.get(&filter)
    }

    /// Every refused assignment since the query was created, oldest first.
    pub fn rejections(&self) -> &[FilterError] {
        &self.rejections
    }

    // -----------------------------------------------------------------------
    // Resources
    // -----------------------------------------------------------------------

    pub fn enable(&mut self, group: ResourceGroup) {
        self.resources.insert(group);
    }

    pub fn disable(&mut self, group: ResourceGroup) {
        self.resources.remove(&group);
    }

    pub fn with_resource(mut self, group: ResourceGroup) -> Self {
        self.enable(group);
        self
    }

    pub fn without_resource(mut self, group: ResourceGroup) -> Self {
        self.disable(group);
        self
    }

    pub fn is_enabled(&self, group: ResourceGroup) -> bool {
        self.resources.contains(&group)
    }

    /// The `Resources` list as it would be sent now.
    pub fn resources(&self) -> Vec<&'static str> {
        resource::expand_all(&self.resources)
    }

    // -----------------------------------------------------------------------
    // Convenience setters
    // -----------------------------------------------------------------------

    /// Look up items by ASIN.
    pub fn asins(self, ids: impl Into<FilterValue>) -> Self {
        self.request(Filter::ItemIds, ids).request(Filter::ItemIdType, "ASIN")
    }

    /// The parent or child ASIN whose variations are wanted.
    pub fn asin(self, asin: &str) -> Self {
        self.request(Filter::Asin, asin)
    }

    pub fn search(self, kind: SearchKind, param: &str) -> Self {
        self.request(kind.filter(), param)
    }

    pub fn keywords(self, keywords: &str) -> Self {
        self.search(SearchKind::Keywords, keywords)
    }

    pub fn title(self, title: &str) -> Self {
        self.search(SearchKind::Title, title)
    }

    pub fn actor(self, actor: &str) -> Self {
        self.search(SearchKind::Actor, actor)
    }

    pub fn artist(self, artist: &str) -> Self {
        self.search(SearchKind::Artist, artist)
    }

    pub fn author(self, author: &str) -> Self {
        self.search(SearchKind::Author, author)
    }

    pub fn brand(self, brand: &str) -> Self {
        self.search(SearchKind::Brand, brand)
    }

    pub fn browse_node_ids(self, ids: impl Into<FilterValue>) -> Self {
        self.request(Filter::BrowseNodeIds, ids)
    }

    pub fn search_index(self, index: &str) -> Self {
        self.request(Filter::SearchIndex, index)
    }

    pub fn sort_by(self, key: &str) -> Self {
        self.request(Filter::SortBy, key)
    }

    pub fn item_count(self, count: i64) -> Self {
        self.request(Filter::ItemCount, count)
    }

    pub fn item_page(self, page: i64) -> Self {
        self.request(Filter::ItemPage, page)
    }

    pub fn variation_count(self, count: i64) -> Self {
        self.request(Filter::VariationCount, count)
    }

    pub fn variation_page(self, page: i64) -> Self {
        self.request(Filter::VariationPage, page)
    }

    pub fn condition(self, condition: &str) -> Self {
        self.request(Filter::Condition, condition)
    }

    pub fn merchant(self, merchant: &str) -> Self {
        self.request(Filter::Merchant, merchant)
    }

    pub fn languages_of_preference(self, languages: impl Into<FilterValue>) -> Self {
        self.request(Filter::LanguagesOfPreference, languages)
    }

    pub fn currency_of_preference(self, currency: &str) -> Self {
        self.request(Filter::CurrencyOfPreference, currency)
    }

    // -----------------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------------

    /// Request body bytes.
    pub fn payload(&self) -> Result<Vec<u8>, ApiError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Serialize a query that may be absent.
pub fn payload_of(query: Option<&Query>) -> Result<Vec<u8>, ApiError> {
    query.ok_or(ApiError::NullReference)?.payload()
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let resources = self.resources();
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("Operation", &self.operation)?;
        for (filter, value) in self.filters.iter().filter(|(_, v)| !v.is_empty()) {
            map.serialize_entry(filter.wire_name(), value)?;
        }
        if !resources.is_empty() {
            map.serialize_entry("Resources", &resources)?;
        }
        map.end()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).unwrap_or_default();
        f.write_str(&json)
    }
}
