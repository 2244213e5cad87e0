//! Local stand-in for the catalog API.
//!
//! Serves `POST /paapi5/{operation}` for the four operations, rejects any
//! request whose signature does not verify against the configured key pair,
//! and answers from a small canned catalog.

pub mod catalog;
pub mod verify;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};
use uuid::Uuid;

pub use catalog::Catalog;
pub use verify::Credentials;

const TARGET_PREFIX: &str = "com.amazon.paapi5.v1.ProductAdvertisingAPIv1.";
const DEFAULT_ITEM_COUNT: usize = 10;
/// Upper bound of `ItemCount`/`VariationCount` and of the page numbers.
const MAX_PAGE: u64 = 10;
const ALWAYS_SELECTED: &[&str] = &["ASIN", "DetailPageURL", "ParentASIN"];

pub struct AppState {
    pub credentials: Credentials,
    pub catalog: Catalog,
}

pub type Shared = Arc<AppState>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorBody {
    pub errors: Vec<ErrorEntry>,
}

/// A refused request: status plus one service error entry.
#[derive(Debug)]
pub struct Rejection {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl Rejection {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            errors: vec![ErrorEntry {
                code: self.code.to_string(),
                message: self.message,
            }],
        };
        with_request_id((self.status, Json(body)).into_response())
    }
}

pub fn app(credentials: Credentials) -> Router {
    let state: Shared = Arc::new(AppState {
        credentials,
        catalog: Catalog::default(),
    });
    Router::new()
        .route("/paapi5/{operation}", post(dispatch))
        .with_state(state)
}

pub async fn run(listener: TcpListener, credentials: Credentials) -> Result<(), std::io::Error> {
    axum::serve(listener, app(credentials)).await
}

async fn dispatch(
    State(state): State<Shared>,
    Path(operation): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, Rejection> {
    let name = operation_name(&operation).ok_or_else(|| {
        Rejection::new(
            StatusCode::NOT_FOUND,
            "UnknownOperation",
            format!("the operation {operation} is not supported"),
        )
    })?;

    let path = format!("/paapi5/{operation}");
    let sig = verify::verify(&state.credentials, &path, &headers, &body).map_err(|e| {
        warn!(%path, error = %e, "signature rejected");
        let status = match &e {
            verify::VerifyError::MissingHeader(_) | verify::VerifyError::Malformed(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNAUTHORIZED,
        };
        Rejection::new(status, e.code(), e.to_string())
    })?;

    let target = headers
        .get("x-amz-target")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if target != format!("{TARGET_PREFIX}{name}") {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "InvalidTarget",
            format!("X-Amz-Target {target:?} does not match {name}"),
        ));
    }

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        Rejection::new(StatusCode::BAD_REQUEST, "InvalidParameterValue", format!("body is not JSON: {e}"))
    })?;
    if payload["Operation"] != name {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "InvalidParameterValue",
            format!("Operation must be {name}"),
        ));
    }
    if payload["PartnerTag"].as_str().unwrap_or_default().is_empty() {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "MissingParameter",
            "the request must contain the parameter PartnerTag",
        ));
    }

    let resources: Vec<&str> = payload["Resources"]
        .as_array()
        .map(|list| list.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    info!(operation = name, region = %sig.region, resources = resources.len(), "request accepted");
    let result = match name {
        "GetItems" => get_items(&state.catalog, &payload, &resources),
        "SearchItems" => search_items(&state.catalog, &payload, &resources),
        "GetVariations" => get_variations(&state.catalog, &payload, &resources),
        _ => get_browse_nodes(&state.catalog, &payload),
    }?;
    Ok(with_request_id(Json(result).into_response()))
}

fn operation_name(path_segment: &str) -> Option<&'static str> {
    match path_segment {
        "getitems" => Some("GetItems"),
        "searchitems" => Some("SearchItems"),
        "getvariations" => Some("GetVariations"),
        "getbrowsenodes" => Some("GetBrowseNodes"),
        _ => None,
    }
}

fn with_request_id(mut response: Response) -> Response {
    if let Ok(id) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
        response.headers_mut().insert("x-amzn-requestid", id);
    }
    response
}

fn strings(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(list) => list.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn project(items: &[&Value], resources: &[&str]) -> Vec<Value> {
    items
        .iter()
        .map(|item| catalog::select(item, resources, ALWAYS_SELECTED))
        .collect()
}

fn invalid_id(id: &str) -> ErrorEntry {
    ErrorEntry {
        code: "InvalidParameterValue".to_string(),
        message: format!("The ItemId {id} provided in the request is invalid."),
    }
}

/// `(skip, take)` for a paged listing. Count and page are clamped to
/// `1..=10`, the range the service accepts.
fn page_window(payload: &Value, count_key: &str, page_key: &str) -> (usize, usize) {
    let count = payload[count_key]
        .as_u64()
        .map_or(DEFAULT_ITEM_COUNT, |n| n.clamp(1, MAX_PAGE) as usize);
    let page = payload[page_key].as_u64().unwrap_or(1).clamp(1, MAX_PAGE) as usize;
    ((page - 1) * count, count)
}

fn get_items(catalog: &Catalog, payload: &Value, resources: &[&str]) -> Result<Value, Rejection> {
    let ids = strings(&payload["ItemIds"]);
    if ids.is_empty() {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "MissingParameter",
            "the request must contain the parameter ItemIds",
        ));
    }

    let (found, missing): (Vec<&str>, Vec<&str>) = ids.into_iter().partition(|id| catalog.item(id).is_some());
    if found.is_empty() {
        return Err(Rejection::new(
            StatusCode::NOT_FOUND,
            "InvalidParameterValue",
            invalid_id(missing.first().copied().unwrap_or_default()).message,
        ));
    }

    let items: Vec<&Value> = found.iter().filter_map(|id| catalog.item(id)).collect();
    let mut body = json!({"ItemsResult": {"Items": project(&items, resources)}});
    if !missing.is_empty() {
        body["Errors"] = json!(missing.iter().map(|id| invalid_id(id)).collect::<Vec<_>>());
    }
    Ok(body)
}

fn search_items(catalog: &Catalog, payload: &Value, resources: &[&str]) -> Result<Value, Rejection> {
    let terms: Vec<&str> = ["Keywords", "Title", "Actor", "Artist", "Author", "Brand"]
        .iter()
        .filter_map(|k| payload[*k].as_str())
        .collect();
    if terms.is_empty() {
        return Err(Rejection::new(
            StatusCode::BAD_REQUEST,
            "MissingParameter",
            "the request must contain one of Keywords, Title, Actor, Artist, Author or Brand",
        ));
    }
    let keywords = terms.join(" ");
    let matches = catalog.search(&keywords);
    if matches.is_empty() {
        return Err(Rejection::new(
            StatusCode::NOT_FOUND,
            "NoResults",
            "No results found for your request.",
        ));
    }

    let (skip, count) = page_window(payload, "ItemCount", "ItemPage");
    let items: Vec<&Value> = matches.iter().skip(skip).take(count).copied().collect();

    let mut result = json!({
        "Items": project(&items, resources),
        "SearchURL": format!("https://www.amazon.com/s?k={}", keywords.replace(' ', "+")),
        "TotalResultCount": matches.len(),
    });
    if resources.contains(&"SearchRefinements") {
        result["SearchRefinements"] = json!({
            "SearchIndex": {
                "Id": "SearchIndex",
                "DisplayName": "Department",
                "Bins": [{"Id": "All", "DisplayName": "All Departments"}]
            }
        });
    }
    Ok(json!({"SearchResult": result}))
}

fn get_variations(catalog: &Catalog, payload: &Value, resources: &[&str]) -> Result<Value, Rejection> {
    let asin = payload["ASIN"].as_str().unwrap_or_default();
    if catalog.item(asin).is_none() {
        return Err(Rejection::new(
            StatusCode::NOT_FOUND,
            "InvalidParameterValue",
            invalid_id(asin).message,
        ));
    }
    let family = catalog.variations(asin);
    let (skip, count) = page_window(payload, "VariationCount", "VariationPage");
    let items: Vec<&Value> = family.iter().skip(skip).take(count).copied().collect();

    let mut result = json!({"Items": project(&items, resources)});
    if resources.iter().any(|r| r.starts_with("VariationSummary")) {
        result["VariationSummary"] = json!({
            "PageCount": family.len().div_ceil(count),
            "VariationCount": family.len(),
            "VariationDimensions": [{"DisplayName": "Color", "Name": "color_name", "Values": ["Black", "White"]}]
        });
    }
    Ok(json!({"VariationsResult": result}))
}

fn get_browse_nodes(catalog: &Catalog, payload: &Value) -> Result<Value, Rejection> {
    let ids = strings(&payload["BrowseNodeIds"]);
    let nodes: Vec<&Value> = ids.iter().filter_map(|id| catalog.browse_node(id)).collect();
    if nodes.is_empty() {
        return Err(Rejection::new(
            StatusCode::NOT_FOUND,
            "InvalidParameterValue",
            "none of the BrowseNodeIds provided in the request are valid",
        ));
    }
    Ok(json!({"BrowseNodesResult": {"BrowseNodes": nodes}}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_names_map_from_path() {
        assert_eq!(operation_name("getitems"), Some("GetItems"));
        assert_eq!(operation_name("getbrowsenodes"), Some("GetBrowseNodes"));
        assert_eq!(operation_name("GetItems"), None);
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            errors: vec![ErrorEntry {
                code: "InvalidSignature".to_string(),
                message: "nope".to_string(),
            }],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"Errors":[{"Code":"InvalidSignature","Message":"nope"}]}"#
        );
    }

    #[test]
    fn get_items_reports_missing_ids() {
        let payload = json!({"ItemIds": ["B07YCM5K55", "B000000000"]});
        let body = get_items(&Catalog::default(), &payload, &["ItemInfo.Title"]).unwrap();
        assert_eq!(body["ItemsResult"]["Items"].as_array().unwrap().len(), 1);
        assert_eq!(body["Errors"][0]["Code"], "InvalidParameterValue");
    }

    #[test]
    fn search_items_pages() {
        let c = Catalog::default();
        let body = search_items(&c, &json!({"Keywords": "kindle", "ItemCount": 1, "ItemPage": 2}), &[]).unwrap();
        assert_eq!(body["SearchResult"]["TotalResultCount"], 2);
        assert_eq!(body["SearchResult"]["Items"].as_array().unwrap().len(), 1);
        assert_eq!(body["SearchResult"]["Items"][0]["ASIN"], "B07YCM5K56");
    }

    #[test]
    fn out_of_range_pages_are_clamped() {
        let c = Catalog::default();
        for page in [json!(u64::MAX), json!(11), json!(0)] {
            let body = search_items(&c, &json!({"Keywords": "kindle", "ItemCount": u64::MAX, "ItemPage": page}), &[])
                .unwrap();
            assert_eq!(body["SearchResult"]["TotalResultCount"], 2);
        }
        let body = search_items(&c, &json!({"Keywords": "kindle", "ItemPage": u64::MAX}), &[]).unwrap();
        assert!(body["SearchResult"]["Items"].as_array().unwrap().is_empty());

        let body = get_variations(&c, &json!({"ASIN": "B07YCM5K55", "VariationPage": u64::MAX}), &[]).unwrap();
        assert!(body["VariationsResult"]["Items"].as_array().unwrap().is_empty());
        let body = get_variations(&c, &json!({"ASIN": "B07YCM5K55", "VariationCount": 0}), &[]).unwrap();
        assert_eq!(body["VariationsResult"]["Items"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn page_window_bounds() {
        assert_eq!(page_window(&json!({}), "ItemCount", "ItemPage"), (0, 10));
        assert_eq!(page_window(&json!({"ItemCount": 3, "ItemPage": 2}), "ItemCount", "ItemPage"), (3, 3));
        assert_eq!(page_window(&json!({"ItemCount": u64::MAX, "ItemPage": u64::MAX}), "ItemCount", "ItemPage"), (90, 10));
    }

    #[test]
    fn search_without_terms_is_rejected() {
        let err = search_items(&Catalog::default(), &json!({}), &[]).unwrap_err();
        assert_eq!(err.code, "MissingParameter");
    }

    #[test]
    fn variation_summary_on_request() {
        let c = Catalog::default();
        let body = get_variations(&c, &json!({"ASIN": "B07YCM5K55"}), &["VariationSummary.VariationDimension"]).unwrap();
        assert_eq!(body["VariationsResult"]["VariationSummary"]["VariationCount"], 2);
        let body = get_variations(&c, &json!({"ASIN": "B07YCM5K55"}), &[]).unwrap();
        assert!(body["VariationsResult"].get("VariationSummary").is_none());
    }
}
