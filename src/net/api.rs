//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the persisted
//! bearer token attached when present.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Auth calls
//! surface an [`AuthError`] for the session store to translate; data calls
//! degrade to empty lists or display-ready messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Asset, CreateRental, Credentials, DashboardData, FinancialSummary, NewAsset, Registration, Rental, User};
#[cfg(feature = "hydrate")]
use crate::util::token;

/// Why an auth call failed, before translation to a user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Transport failure; no response was decoded.
    Network,
    /// The backend answered with a non-success status. Carries the `msg`
    /// field from the error body when one was provided.
    Rejected(Option<String>),
    /// Success status, but the body held no usable access token.
    MissingToken,
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn asset_endpoint(asset_id: i64) -> String {
    format!("/objects/{asset_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn asset_maintenance_endpoint(asset_id: i64) -> String {
    format!("/objects/{asset_id}/maintenance")
}

#[cfg(any(test, feature = "hydrate"))]
fn asset_available_endpoint(asset_id: i64) -> String {
    format!("/objects/{asset_id}/available")
}

#[cfg(any(test, feature = "hydrate"))]
fn rental_cancel_endpoint(rental_id: i64) -> String {
    format!("/rentals/{rental_id}/cancel")
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16) -> String {
    format!("Запит не вдався: {status}")
}

/// Classify an auth endpoint response.
///
/// A call succeeds iff the status matches the endpoint's success status and
/// the body carries a non-empty `access_token`. A matching status with a
/// missing or empty token is a malformed success, not a rejection.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_auth_response(
    status: u16,
    expected: u16,
    body: &serde_json::Value,
) -> Result<String, AuthError> {
    if status == expected {
        match body.get("access_token").and_then(serde_json::Value::as_str) {
            Some(token) if !token.is_empty() => Ok(token.to_owned()),
            _ => Err(AuthError::MissingToken),
        }
    } else {
        Err(AuthError::Rejected(
            body.get("msg")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned),
        ))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn mutation_error(status: u16, msg: Option<&str>) -> String {
    msg.map(str::to_owned).unwrap_or_else(|| failure_message(status))
}

/// POST credentials to `/auth/login`; `Ok(token)` on HTTP 200 with a
/// non-empty `access_token`.
pub async fn login(credentials: &Credentials) -> Result<String, AuthError> {
    auth_request("/auth/login", credentials, 200).await
}

/// POST registration data to `/auth/register`; success status is 201.
pub async fn register(data: &Registration) -> Result<String, AuthError> {
    auth_request("/auth/register", data, 201).await
}

#[cfg(feature = "hydrate")]
async fn auth_request<T: serde::Serialize>(
    path: &str,
    payload: &T,
    expected: u16,
) -> Result<String, AuthError> {
    let resp = gloo_net::http::Request::post(path)
        .json(payload)
        .map_err(|_| AuthError::Network)?
        .send()
        .await
        .map_err(|e| {
            log::warn!("{path}: {e}");
            AuthError::Network
        })?;
    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    interpret_auth_response(status, expected, &body)
}

#[cfg(not(feature = "hydrate"))]
async fn auth_request<T>(path: &str, payload: &T, expected: u16) -> Result<String, AuthError> {
    let _ = (path, payload, expected);
    Err(AuthError::Network)
}

/// Fetch the current user via `GET /auth/me` with the persisted token.
/// Returns `None` if unauthenticated, on any failure, or on the server.
pub async fn fetch_me() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get("/auth/me"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the asset catalogue from `GET /objects/`. Failures degrade to an
/// empty list.
pub async fn fetch_assets() -> Vec<Asset> {
    get_json("/objects/").await.unwrap_or_default()
}

/// Fetch a single asset for the create-rental form.
pub async fn fetch_asset(asset_id: i64) -> Option<Asset> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&asset_endpoint(asset_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = asset_id;
        None
    }
}

/// Fetch the caller's rentals (all rentals for admins) from `GET /rentals/`.
pub async fn fetch_rentals() -> Vec<Rental> {
    get_json("/rentals/").await.unwrap_or_default()
}

/// Fetch monthly financial summaries from `GET /financial_summary/`.
pub async fn fetch_summaries() -> Vec<FinancialSummary> {
    get_json("/financial_summary/").await.unwrap_or_default()
}

/// Fetch the dashboard aggregate from `GET /dashboard/`.
pub async fn fetch_dashboard() -> Option<DashboardData> {
    get_json("/dashboard/").await
}

/// Create a rental via `POST /rentals/`.
///
/// # Errors
///
/// Returns a display-ready message when the backend rejects the rental or
/// the request fails.
pub async fn create_rental(payload: &CreateRental) -> Result<(), String> {
    post_json("/rentals/", payload).await
}

/// Cancel an active rental via `POST /rentals/{id}/cancel`.
///
/// # Errors
///
/// Returns a display-ready message on rejection or transport failure.
pub async fn cancel_rental(rental_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(&rental_cancel_endpoint(rental_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rental_id;
        Err("not available on server".to_owned())
    }
}

/// Admin: add an asset via `POST /objects/`.
///
/// # Errors
///
/// Returns a display-ready message on rejection or transport failure.
pub async fn add_asset(payload: &NewAsset) -> Result<(), String> {
    post_json("/objects/", payload).await
}

/// Admin: move an available asset into maintenance.
///
/// # Errors
///
/// Returns a display-ready message on rejection or transport failure.
pub async fn set_asset_maintenance(asset_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(&asset_maintenance_endpoint(asset_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = asset_id;
        Err("not available on server".to_owned())
    }
}

/// Admin: return an asset from maintenance to the catalogue.
///
/// # Errors
///
/// Returns a display-ready message on rejection or transport failure.
pub async fn set_asset_available(asset_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        post_empty(&asset_available_endpoint(asset_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = asset_id;
        Err("not available on server".to_owned())
    }
}

/// Admin: delete an asset via `DELETE /objects/{id}`.
///
/// # Errors
///
/// Returns a display-ready message on rejection or transport failure.
pub async fn delete_asset(asset_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let sent = authorized(gloo_net::http::Request::delete(&asset_endpoint(asset_id)))
            .send()
            .await;
        finish(sent).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = asset_id;
        Err("not available on server".to_owned())
    }
}

/// Attach the persisted bearer token, if any.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token::load() {
        Some(token) => builder.header("Authorization", &bearer(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Option<T> {
    let resp = authorized(gloo_net::http::Request::get(path))
        .send()
        .await
        .map_err(|e| log::warn!("{path}: {e}"))
        .ok()?;
    if !resp.ok() {
        log::warn!("{path}: status {}", resp.status());
        return None;
    }
    resp.json::<T>().await.ok()
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T>(path: &str) -> Option<T> {
    let _ = path;
    None
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(path: &str, payload: &T) -> Result<(), String> {
    let request = authorized(gloo_net::http::Request::post(path))
        .json(payload)
        .map_err(|e| e.to_string())?;
    finish(request.send().await).await
}

#[cfg(not(feature = "hydrate"))]
async fn post_json<T>(path: &str, payload: &T) -> Result<(), String> {
    let _ = (path, payload);
    Err("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn post_empty(path: &str) -> Result<(), String> {
    finish(authorized(gloo_net::http::Request::post(path)).send().await).await
}

/// Collapse a mutation response into `Ok` or a display-ready message.
#[cfg(feature = "hydrate")]
async fn finish(sent: Result<gloo_net::http::Response, gloo_net::Error>) -> Result<(), String> {
    let resp = sent.map_err(|e| e.to_string())?;
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    Err(mutation_error(
        status,
        body.get("msg").and_then(serde_json::Value::as_str),
    ))
}
