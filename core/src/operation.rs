//! Catalog of remote operations.
//!
//! Each operation maps to a URL path under `/paapi5/` and to the
//! `X-Amz-Target` value the service dispatches on. `Unknown` is the
//! operation of an unbound query and renders as the empty string everywhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const PATH_PREFIX: &str = "/paapi5";
const TARGET_PREFIX: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1";

/// A remote catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    GetItems,
    SearchItems,
    GetVariations,
    GetBrowseNodes,
    #[default]
    Unknown,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::GetItems,
        Operation::SearchItems,
        Operation::GetVariations,
        Operation::GetBrowseNodes,
    ];

    /// Wire name, e.g. `GetItems`. Empty for `Unknown`.
    pub fn name(self) -> &'static str {
        match self {
            Operation::GetItems => "GetItems",
            Operation::SearchItems => "SearchItems",
            Operation::GetVariations => "GetVariations",
            Operation::GetBrowseNodes => "GetBrowseNodes",
            Operation::Unknown => "",
        }
    }

    /// URL path, e.g. `/paapi5/getitems`.
    pub fn path(self) -> String {
        match self {
            Operation::Unknown => String::new(),
            op => format!("{PATH_PREFIX}/{}", op.name().to_lowercase()),
        }
    }

    /// `X-Amz-Target` header value.
    pub fn target(self) -> String {
        match self {
            Operation::Unknown => String::new(),
            op => format!("{TARGET_PREFIX}.{}", op.name()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0:?}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or(Operation::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_and_targets() {
        assert_eq!(Operation::GetItems.path(), "/paapi5/getitems");
        assert_eq!(Operation::SearchItems.path(), "/paapi5/searchitems");
        assert_eq!(Operation::GetVariations.path(), "/paapi5/getvariations");
        assert_eq!(Operation::GetBrowseNodes.path(), "/paapi5/getbrowsenodes");
        assert_eq!(
            Operation::GetItems.target(),
            "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetItems"
        );
        assert_eq!(
            Operation::GetBrowseNodes.target(),
            "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.GetBrowseNodes"
        );
    }

    #[test]
    fn unknown_renders_empty() {
        assert_eq!(Operation::Unknown.to_string(), "");
        assert_eq!(Operation::Unknown.path(), "");
        assert_eq!(Operation::Unknown.target(), "");
        assert_eq!(serde_json::to_string(&Operation::Unknown).unwrap(), r#""""#);
    }

    #[test]
    fn parses_wire_names() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
        assert!("ItemLookup".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn deserializes_unrecognized_as_unknown() {
        let op: Operation = serde_json::from_str(r#""SearchItems""#).unwrap();
        assert_eq!(op, Operation::SearchItems);
        let op: Operation = serde_json::from_str(r#""Bogus""#).unwrap();
        assert_eq!(op, Operation::Unknown);
    }
}
