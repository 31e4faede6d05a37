//! Repository Traits
//!
//! Interfaces for catalog access. Implementation is in infrastructure layer.

use crate::domain::entities::Vehicle;
use crate::error::StorefrontResult;
use kernel::VehicleId;

/// Read-only vehicle catalog
#[trait_variant::make(CatalogRepository: Send)]
pub trait LocalCatalogRepository {
    /// Load every vehicle, in file order
    async fn load_all(&self) -> StorefrontResult<Vec<Vehicle>>;

    /// Find one vehicle, `VehicleNotFound` when the id is unknown
    async fn find_by_id(&self, id: VehicleId) -> StorefrontResult<Vehicle>;
}
