//! Backend API Client
//!
//! Thin fetch wrappers over the collection-point backend.

use gloo_net::http::Request;

use crate::models::{Item, NewPoint};

/// Backend base URL
pub const API_BASE: &str = "http://localhost:3333";

/// List the recyclable item categories.
pub async fn list_items() -> Result<Vec<Item>, String> {
    let text = Request::get(&format!("{API_BASE}/items"))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .text()
        .await
        .map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

/// Register a new collection point.
pub async fn create_point(point: &NewPoint) -> Result<(), String> {
    let body = serde_json::to_string(point).map_err(|e| e.to_string())?;
    Request::post(&format!("{API_BASE}/points"))
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    Ok(())
}
