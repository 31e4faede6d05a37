//! Browse Catalog Use Case
//!
//! Homepage visit: load the live catalog and advance the hidden-car game.

use crate::application::config::StorefrontConfig;
use crate::domain::entities::Vehicle;
use crate::domain::game::{self, GameState};
use crate::domain::repository::CatalogRepository;
use crate::error::StorefrontResult;
use kernel::VehicleId;
use rand::Rng;
use std::sync::Arc;

/// Output DTO for browse catalog
#[derive(Debug, Clone)]
pub struct BrowseCatalogOutput {
    pub vehicles: Vec<Vehicle>,
    /// Session state after this visit
    pub session: GameState,
    /// Whether the session cookie needs rewriting
    pub session_changed: bool,
}

/// Browse Catalog Use Case
pub struct BrowseCatalogUseCase<R>
where
    R: CatalogRepository,
{
    catalog_repo: Arc<R>,
    config: Arc<StorefrontConfig>,
}

impl<R> BrowseCatalogUseCase<R>
where
    R: CatalogRepository,
{
    pub fn new(catalog_repo: Arc<R>, config: Arc<StorefrontConfig>) -> Self {
        Self {
            catalog_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        session: GameState,
        now_ms: i64,
    ) -> StorefrontResult<BrowseCatalogOutput> {
        let vehicles = self.catalog_repo.load_all().await?;

        // Thread-local rng is !Send; only touch it after the last await
        Ok(self.play(vehicles, session, now_ms, &mut rand::rng()))
    }

    /// Advance the game for an already loaded catalog
    pub fn play<G>(
        &self,
        vehicles: Vec<Vehicle>,
        session: GameState,
        now_ms: i64,
        rng: &mut G,
    ) -> BrowseCatalogOutput
    where
        G: Rng + ?Sized,
    {
        if !self.config.hidden_car_enabled {
            return BrowseCatalogOutput {
                vehicles,
                session,
                session_changed: false,
            };
        }

        let candidates: Vec<VehicleId> = vehicles.iter().map(|v| v.id).collect();
        let (next, golden) = game::advance(
            session,
            now_ms,
            self.config.debounce_window_ms(),
            &candidates,
            rng,
        );

        let session_changed = next != session;
        if session_changed {
            tracing::debug!(
                golden_vehicle_id = ?golden.map(|id| id.as_i64()),
                candidates = candidates.len(),
                "Hidden car drawn"
            );
        }

        BrowseCatalogOutput {
            vehicles,
            session: next,
            session_changed,
        }
    }
}
