//! HTTP API
//!
//! Frontend binding to the attraction endpoint.

use gloo_net::http::Request;

use crate::error::{MapError, Result};
use crate::models::Attraction;

pub async fn fetch_attractions(url: &str) -> Result<Vec<Attraction>> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| MapError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(MapError::Http {
            status: resp.status(),
            url: url.to_string(),
        });
    }
    resp.json::<Vec<Attraction>>()
        .await
        .map_err(|e| MapError::Decode(e.to_string()))
}
