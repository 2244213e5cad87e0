//! Resource registry: named groups of response-field selectors.
//!
//! Groups are declared in wire order; the derived `Ord` follows that order,
//! so iterating a `BTreeSet<ResourceGroup>` yields the expansion the service
//! expects no matter in which order the groups were enabled.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceGroup {
    BrowseNodeInfo,
    Images,
    ItemInfo,
    Offers,
    OffersV2,
    SearchRefinements,
    ParentAsin,
    CustomerReviews,
    BrowseNodes,
    VariationSummary,
}

const BROWSE_NODE_INFO: &[&str] = &[
    "BrowseNodeInfo.BrowseNodes",
    "BrowseNodeInfo.BrowseNodes.Ancestor",
    "BrowseNodeInfo.BrowseNodes.SalesRank",
    "BrowseNodeInfo.WebsiteSalesRank",
];

const IMAGES: &[&str] = &[
    "Images.Primary.Small",
    "Images.Primary.Medium",
    "Images.Primary.Large",
    "Images.Variants.Small",
    "Images.Variants.Medium",
    "Images.Variants.Large",
];

const ITEM_INFO: &[&str] = &[
    "ItemInfo.ByLineInfo",
    "ItemInfo.ContentInfo",
    "ItemInfo.ContentRating",
    "ItemInfo.Classifications",
    "ItemInfo.ExternalIds",
    "ItemInfo.Features",
    "ItemInfo.ManufactureInfo",
    "ItemInfo.ProductInfo",
    "ItemInfo.TechnicalInfo",
    "ItemInfo.Title",
    "ItemInfo.TradeInInfo",
];

const OFFERS: &[&str] = &[
    "Offers.Listings.Availability.MaxOrderQuantity",
    "Offers.Listings.Availability.Message",
    "Offers.Listings.Availability.MinOrderQuantity",
    "Offers.Listings.Availability.Type",
    "Offers.Listings.Condition",
    "Offers.Listings.Condition.SubCondition",
    "Offers.Listings.DeliveryInfo.IsAmazonFulfilled",
    "Offers.Listings.DeliveryInfo.IsFreeShippingEligible",
    "Offers.Listings.DeliveryInfo.IsPrimeEligible",
    "Offers.Listings.DeliveryInfo.ShippingCharges",
    "Offers.Listings.IsBuyBoxWinner",
    "Offers.Listings.LoyaltyPoints.Points",
    "Offers.Listings.MerchantInfo",
    "Offers.Listings.Price",
    "Offers.Listings.ProgramEligibility.IsPrimeExclusive",
    "Offers.Listings.ProgramEligibility.IsPrimePantry",
    "Offers.Listings.Promotions",
    "Offers.Listings.SavingBasis",
    "Offers.Summaries.HighestPrice",
    "Offers.Summaries.LowestPrice",
    "Offers.Summaries.OfferCount",
];

const OFFERS_V2: &[&str] = &[
    "OffersV2.Listings.Availability",
    "OffersV2.Listings.Condition",
    "OffersV2.Listings.DealDetails",
    "OffersV2.Listings.IsBuyBoxWinner",
    "OffersV2.Listings.LoyaltyPoints",
    "OffersV2.Listings.MerchantInfo",
    "OffersV2.Listings.Price",
    "OffersV2.Listings.Type",
];

const SEARCH_REFINEMENTS: &[&str] = &["SearchRefinements"];

const PARENT_ASIN: &[&str] = &["ParentASIN"];

const CUSTOMER_REVIEWS: &[&str] = &["CustomerReviews.Count", "CustomerReviews.StarRating"];

const BROWSE_NODES: &[&str] = &["BrowseNodes.Ancestor", "BrowseNodes.Children"];

const VARIATION_SUMMARY: &[&str] = &[
    "VariationSummary.Price.HighestPrice",
    "VariationSummary.Price.LowestPrice",
    "VariationSummary.VariationDimension",
];

impl ResourceGroup {
    pub const ALL: [ResourceGroup; 10] = [
        ResourceGroup::BrowseNodeInfo,
        ResourceGroup::Images,
        ResourceGroup::ItemInfo,
        ResourceGroup::Offers,
        ResourceGroup::OffersV2,
        ResourceGroup::SearchRefinements,
        ResourceGroup::ParentAsin,
        ResourceGroup::CustomerReviews,
        ResourceGroup::BrowseNodes,
        ResourceGroup::VariationSummary,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceGroup::BrowseNodeInfo => "BrowseNodeInfo",
            ResourceGroup::Images => "Images",
            ResourceGroup::ItemInfo => "ItemInfo",
            ResourceGroup::Offers => "Offers",
            ResourceGroup::OffersV2 => "OffersV2",
            ResourceGroup::SearchRefinements => "SearchRefinements",
            ResourceGroup::ParentAsin => "ParentASIN",
            ResourceGroup::CustomerReviews => "CustomerReviews",
            ResourceGroup::BrowseNodes => "BrowseNodes",
            ResourceGroup::VariationSummary => "VariationSummary",
        }
    }

    pub fn from_name(name: &str) -> Option<ResourceGroup> {
        ResourceGroup::ALL.into_iter().find(|g| g.name() == name)
    }

    /// Wire-level resource paths of this group, in fixed order.
    pub fn expand(self) -> &'static [&'static str] {
        match self {
            ResourceGroup::BrowseNodeInfo => BROWSE_NODE_INFO,
            ResourceGroup::Images => IMAGES,
            ResourceGroup::ItemInfo => ITEM_INFO,
            ResourceGroup::Offers => OFFERS,
            ResourceGroup::OffersV2 => OFFERS_V2,
            ResourceGroup::SearchRefinements => SEARCH_REFINEMENTS,
            ResourceGroup::ParentAsin => PARENT_ASIN,
            ResourceGroup::CustomerReviews => CUSTOMER_REVIEWS,
            ResourceGroup::BrowseNodes => BROWSE_NODES,
            ResourceGroup::VariationSummary => VARIATION_SUMMARY,
        }
    }
}

/// Concatenate the expansions of `groups` in declaration order. Paths
/// repeated across groups are kept.
pub fn expand_all(groups: &BTreeSet<ResourceGroup>) -> Vec<&'static str> {
    groups.iter().flat_map(|g| g.expand().iter().copied()).collect()
}
