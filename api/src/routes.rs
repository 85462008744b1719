//! Watchlist HTTP surface.
//!
//! GET    /api/watchlist                - all active stocks
//! POST   /api/watchlist/add            - add a single stock or a batch
//! GET    /api/watchlist/:symbol        - one stock by symbol
//! PUT    /api/watchlist/:symbol        - partial update
//! DELETE /api/watchlist/:symbol        - soft delete
//! GET    /api/watchlist/sector/:sector - active stocks in a sector
//! GET    /api/watchlist/export/json    - raw JSON array export
//! GET    /api/watchlist/export/csv     - CSV download

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use shared::{StockPayload, StockUpdate, StoreError, WatchlistStore};

use crate::export;

pub fn router(store: WatchlistStore) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/watchlist", get(get_watchlist))
        .route("/api/watchlist/add", post(add_to_watchlist))
        .route("/api/watchlist/export/json", get(export_json))
        .route("/api/watchlist/export/csv", get(export_csv))
        .route("/api/watchlist/sector/:sector", get(get_by_sector))
        .route(
            "/api/watchlist/:symbol",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .with_state(store)
}

/// Add body, resolved once at the parse boundary: a bare object adds a single
/// stock, an array adds each element independently.
enum AddRequest {
    Single(StockPayload),
    Batch(Vec<StockPayload>),
}

impl AddRequest {
    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_array() {
            serde_json::from_value(value).map(AddRequest::Batch)
        } else {
            serde_json::from_value(value).map(AddRequest::Single)
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn get_watchlist(State(store): State<WatchlistStore>) -> Response {
    match store.get_all().await {
        Ok(stocks) => Json(json!({
            "success": true,
            "count": stocks.len(),
            "stocks": stocks,
        }))
        .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn add_to_watchlist(
    State(store): State<WatchlistStore>,
    Json(body): Json<Value>,
) -> Response {
    let request = match AddRequest::from_value(body) {
        Ok(request) => request,
        Err(e) => return bad_request(e.to_string()),
    };

    match request {
        AddRequest::Single(payload) => {
            let (success, message) = add_outcome(&store, payload).await;
            Json(json!({ "success": success, "message": message })).into_response()
        }
        AddRequest::Batch(payloads) => {
            // Each element is added independently; a failed element never
            // aborts its siblings. The outer success only says the batch ran.
            let mut results = Vec::with_capacity(payloads.len());
            for payload in payloads {
                let symbol = payload.symbol.clone();
                let (success, message) = add_outcome(&store, payload).await;
                results.push(json!({
                    "symbol": symbol,
                    "success": success,
                    "message": message,
                }));
            }
            Json(json!({ "success": true, "results": results })).into_response()
        }
    }
}

async fn add_outcome(store: &WatchlistStore, payload: StockPayload) -> (bool, String) {
    match store.add(payload).await {
        Ok(()) => (true, "Stock added successfully".to_string()),
        Err(e) => (false, e.to_string()),
    }
}

async fn get_stock(State(store): State<WatchlistStore>, Path(symbol): Path<String>) -> Response {
    match store.get_one(&symbol).await {
        Ok(Some(stock)) => Json(json!({ "success": true, "stock": stock })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "message": "Stock not found" })),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn update_stock(
    State(store): State<WatchlistStore>,
    Path(symbol): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let update: StockUpdate = match serde_json::from_value(body) {
        Ok(update) => update,
        Err(e) => return bad_request(e.to_string()),
    };

    match store.update(&symbol, update).await {
        Ok(()) => {
            Json(json!({ "success": true, "message": "Stock updated successfully" }))
                .into_response()
        }
        Err(e) => Json(json!({ "success": false, "message": e.to_string() })).into_response(),
    }
}

async fn delete_stock(State(store): State<WatchlistStore>, Path(symbol): Path<String>) -> Response {
    match store.soft_delete(&symbol).await {
        Ok(()) => {
            Json(json!({ "success": true, "message": "Stock removed successfully" }))
                .into_response()
        }
        Err(e) => Json(json!({ "success": false, "message": e.to_string() })).into_response(),
    }
}

async fn get_by_sector(
    State(store): State<WatchlistStore>,
    Path(sector): Path<String>,
) -> Response {
    match store.get_by_sector(&sector).await {
        Ok(stocks) => Json(json!({
            "success": true,
            "sector": sector,
            "count": stocks.len(),
            "stocks": stocks,
        }))
        .into_response(),
        Err(e) => internal_error(e),
    }
}

async fn export_json(State(store): State<WatchlistStore>) -> Response {
    match store.get_all().await {
        Ok(stocks) => Json(stocks).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn export_csv(State(store): State<WatchlistStore>) -> Response {
    let stocks = match store.get_all().await {
        Ok(stocks) => stocks,
        // CSV failures stay plain text for non-JSON clients
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };

    if stocks.is_empty() {
        return (StatusCode::NOT_FOUND, "No stocks in watchlist").into_response();
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=watchlist.csv",
            ),
        ],
        export::to_csv(&stocks),
    )
        .into_response()
}

fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "success": false, "message": message })),
    )
        .into_response()
}

fn internal_error(e: StoreError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "success": false, "message": e.to_string() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_request_object() {
        let value = json!({ "symbol": "AAPL", "sector": "Technology" });
        match AddRequest::from_value(value).unwrap() {
            AddRequest::Single(payload) => {
                assert_eq!(payload.symbol, "AAPL");
                assert_eq!(payload.sector.as_deref(), Some("Technology"));
                assert!(payload.entry_price.is_none());
            }
            AddRequest::Batch(_) => panic!("object body must parse as a single add"),
        }
    }

    #[test]
    fn test_add_request_array() {
        let value = json!([{ "symbol": "AAPL" }, { "symbol": "MSFT" }]);
        match AddRequest::from_value(value).unwrap() {
            AddRequest::Batch(payloads) => {
                assert_eq!(payloads.len(), 2);
                assert_eq!(payloads[0].symbol, "AAPL");
                assert_eq!(payloads[1].symbol, "MSFT");
            }
            AddRequest::Single(_) => panic!("array body must parse as a batch"),
        }
    }

    #[test]
    fn test_add_request_missing_symbol_is_rejected() {
        let value = json!({ "company_name": "Apple Inc." });
        assert!(AddRequest::from_value(value).is_err());
    }

    #[test]
    fn test_update_ignores_unknown_keys() {
        let value = json!({ "target_price": 210, "id": 999, "added_date": "2020-01-01" });
        let update: StockUpdate = serde_json::from_value(value).unwrap();
        assert!(update.target_price.is_some());
        assert!(!update.is_empty());
    }
}
