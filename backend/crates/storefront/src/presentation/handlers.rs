//! HTTP Handlers

use crate::application::browse_catalog::BrowseCatalogUseCase;
use crate::application::config::StorefrontConfig;
use crate::application::view_vehicle::ViewVehicleUseCase;
use crate::domain::game::GameState;
use crate::domain::repository::CatalogRepository;
use crate::error::{StorefrontError, StorefrontResult};
use crate::infra::session_cookie::{game_state_cookie, read_game_state};
use crate::presentation::dto::{MockQuery, PageQuery};
use crate::presentation::templates::{self, IndexPage, ItemDetailsPage, MockKind, MockPage};
use askama::Template;
use axum::extract::{Query, Request, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};
use chrono::Utc;
use kernel::VehicleId;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Shared state for storefront handlers
#[derive(Clone)]
pub struct StorefrontAppState<R>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<StorefrontConfig>,
}

/// GET /
pub async fn index<R>(
    State(state): State<StorefrontAppState<R>>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> StorefrontResult<Response>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let session = read_game_state(&headers, &state.config);

    let use_case = BrowseCatalogUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case
        .execute(session, Utc::now().timestamp_millis())
        .await?;

    let page = IndexPage {
        vehicles: &output.vehicles,
        reserved: query.is_reserved(),
    };
    let mut response = Html(page.render()?).into_response();

    if output.session_changed {
        if let Some(cookie) = game_state_cookie(&output.session, &state.config) {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }

    Ok(response)
}

/// GET /items/{*path}
///
/// `item_{id}.html` renders the vehicle page, anything else is a file
/// beneath the items root.
pub async fn items<R>(State(state): State<StorefrontAppState<R>>, request: Request) -> Response
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    match parse_item_page(request.uri().path()) {
        Some(id) => {
            let query = Query::<PageQuery>::try_from_uri(request.uri())
                .map(|Query(query)| query)
                .unwrap_or_default();
            let session = read_game_state(request.headers(), &state.config);

            item_details(&state, id, &query, &session)
                .await
                .into_response()
        }
        None => serve_item_file(&state.config.items_dir, request).await,
    }
}

async fn item_details<R>(
    state: &StorefrontAppState<R>,
    id: VehicleId,
    query: &PageQuery,
    session: &GameState,
) -> StorefrontResult<Html<String>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let use_case = ViewVehicleUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(id, session).await?;

    let page = ItemDetailsPage {
        vehicle: &output.vehicle,
        specs: templates::specs(&output.vehicle),
        reserved: query.is_reserved(),
        email: query.email(),
        is_winner: output.is_winner,
    };

    Ok(Html(page.render()?))
}

/// GET /stripe_mock.html
pub async fn checkout_mock<R>(
    State(state): State<StorefrontAppState<R>>,
    Query(query): Query<MockQuery>,
    headers: HeaderMap,
) -> StorefrontResult<Html<String>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    mock_page(&state, &query, &headers, MockKind::Checkout).await
}

/// GET /actions_mock.html
pub async fn actions_mock<R>(
    State(state): State<StorefrontAppState<R>>,
    Query(query): Query<MockQuery>,
    headers: HeaderMap,
) -> StorefrontResult<Html<String>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    mock_page(&state, &query, &headers, MockKind::Actions).await
}

async fn mock_page<R>(
    state: &StorefrontAppState<R>,
    query: &MockQuery,
    headers: &HeaderMap,
    kind: MockKind,
) -> StorefrontResult<Html<String>>
where
    R: CatalogRepository + Clone + Send + Sync + 'static,
{
    let id = query
        .vehicle_id()
        .ok_or(StorefrontError::VehicleNotRequested)?;
    let session = read_game_state(headers, &state.config);

    let use_case = ViewVehicleUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(id, &session).await?;

    let page = MockPage {
        vehicle: &output.vehicle,
        kind,
        is_winner: output.is_winner,
    };

    Ok(Html(page.render()?))
}

/// Vehicle id of an `/items/item_{id}.html` path
fn parse_item_page(path: &str) -> Option<VehicleId> {
    let digits = path.strip_prefix("/items/item_")?.strip_suffix(".html")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<i64>().ok().map(VehicleId::new)
}

/// Hand the request to `ServeDir` with the `/items` prefix removed
///
/// `ServeDir` refuses paths that climb out of its root.
async fn serve_item_file(items_dir: &Path, mut request: Request) -> Response {
    let rest = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .and_then(|pq| pq.strip_prefix("/items"))
        .unwrap_or("/")
        .to_string();

    match rest.parse::<Uri>() {
        Ok(uri) => *request.uri_mut() = uri,
        Err(_) => return StatusCode::NOT_FOUND.into_response(),
    }

    match ServeDir::new(items_dir).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_page() {
        assert_eq!(parse_item_page("/items/item_3.html"), Some(VehicleId::new(3)));
        assert_eq!(parse_item_page("/items/item_042.html"), Some(VehicleId::new(42)));

        for path in [
            "/items/item_.html",
            "/items/item_-1.html",
            "/items/item_3.htm",
            "/items/item_3/front.jpg",
            "/items/item_3.html/x",
            "/items/item_abc.html",
            "/items/item_99999999999999999999.html",
            "/assets/item_3.html",
        ] {
            assert_eq!(parse_item_page(path), None, "{path}");
        }
    }
}
