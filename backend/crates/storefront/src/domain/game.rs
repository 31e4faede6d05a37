//! Hidden-car game
//!
//! Each browser session carries one "golden" vehicle. A homepage visit
//! draws a new one unless the previous draw is younger than the debounce
//! window, in which case the earlier pick stands and its timestamp is
//! left untouched.
//!
//! Nothing here knows about cookies or HTTP; the state goes in and comes
//! back out, so the transition can be exercised directly.

use kernel::VehicleId;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Default debounce window between draws
pub const DEBOUNCE_WINDOW_MS: i64 = 5_000;

/// Per-session game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// No draw yet in this session
    #[default]
    NoPick,
    /// A golden vehicle has been drawn
    Picked {
        golden_vehicle_id: VehicleId,
        picked_at_ms: i64,
    },
}

impl GameState {
    pub fn golden_vehicle_id(&self) -> Option<VehicleId> {
        match self {
            GameState::NoPick => None,
            GameState::Picked {
                golden_vehicle_id, ..
            } => Some(*golden_vehicle_id),
        }
    }

    /// Whether `vehicle_id` is this session's golden vehicle. Pure read.
    pub fn is_winner(&self, vehicle_id: VehicleId) -> bool {
        self.golden_vehicle_id() == Some(vehicle_id)
    }

    /// Whether a visit at `now_ms` falls inside the debounce window
    pub fn is_debounced(&self, now_ms: i64, window_ms: i64) -> bool {
        match self {
            GameState::NoPick => false,
            GameState::Picked { picked_at_ms, .. } => now_ms - picked_at_ms < window_ms,
        }
    }
}

/// Apply a homepage visit at `now_ms`
///
/// `candidates` are the ids present in the live catalog; the draw is
/// uniform over them. An empty catalog leaves the state as it was.
///
/// Returns the new state and the golden vehicle the visitor now has.
pub fn advance<R>(
    state: GameState,
    now_ms: i64,
    window_ms: i64,
    candidates: &[VehicleId],
    rng: &mut R,
) -> (GameState, Option<VehicleId>)
where
    R: Rng + ?Sized,
{
    if state.is_debounced(now_ms, window_ms) {
        return (state, state.golden_vehicle_id());
    }

    match candidates.choose(rng) {
        Some(&golden_vehicle_id) => (
            GameState::Picked {
                golden_vehicle_id,
                picked_at_ms: now_ms,
            },
            Some(golden_vehicle_id),
        ),
        None => (state, state.golden_vehicle_id()),
    }
}
