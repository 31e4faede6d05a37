//! Request DTOs

use crate::application::submit_reservation::ReservationInput;
use serde::Deserialize;

/// `POST /api/reserve` form body
#[derive(Debug, Default, Deserialize)]
pub struct ReserveForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub item_id: Option<String>,
}

impl From<ReserveForm> for ReservationInput {
    fn from(form: ReserveForm) -> Self {
        ReservationInput {
            email: form.email,
            item_id: form.item_id,
        }
    }
}
