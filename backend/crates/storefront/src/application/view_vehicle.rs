//! View Vehicle Use Case

use crate::application::config::StorefrontConfig;
use crate::domain::entities::Vehicle;
use crate::domain::game::GameState;
use crate::domain::repository::CatalogRepository;
use crate::error::StorefrontResult;
use kernel::VehicleId;
use std::sync::Arc;

/// Output DTO for view vehicle
#[derive(Debug, Clone)]
pub struct ViewVehicleOutput {
    pub vehicle: Vehicle,
    pub is_winner: bool,
}

/// View Vehicle Use Case
///
/// Shared by the detail page and the mock checkout pages. Never changes
/// the session.
pub struct ViewVehicleUseCase<R>
where
    R: CatalogRepository,
{
    catalog_repo: Arc<R>,
    config: Arc<StorefrontConfig>,
}

impl<R> ViewVehicleUseCase<R>
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
        id: VehicleId,
        session: &GameState,
    ) -> StorefrontResult<ViewVehicleOutput> {
        let vehicle = self.catalog_repo.find_by_id(id).await?;
        let is_winner = self.config.hidden_car_enabled && session.is_winner(vehicle.id);

        Ok(ViewVehicleOutput { vehicle, is_winner })
    }
}
