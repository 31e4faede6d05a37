//! Session Cookie Codec
//!
//! The hidden-car state travels in an HMAC-signed browser-session cookie.
//! Payload is compact JSON, `{"g": <vehicle id>, "t": <picked at, ms>}`.
//! Anything that fails verification or parsing reads as `NoPick`.

use crate::application::config::StorefrontConfig;
use crate::domain::game::GameState;
use axum::http::{HeaderMap, HeaderValue};
use kernel::VehicleId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct SessionPayload {
    #[serde(rename = "g")]
    golden_vehicle_id: VehicleId,
    #[serde(rename = "t")]
    picked_at_ms: i64,
}

/// Sign a game state into a cookie value
///
/// `NoPick` has no cookie representation.
pub fn encode(state: &GameState, secret: &[u8; 32]) -> Option<String> {
    let GameState::Picked {
        golden_vehicle_id,
        picked_at_ms,
    } = *state
    else {
        return None;
    };

    let payload = serde_json::to_vec(&SessionPayload {
        golden_vehicle_id,
        picked_at_ms,
    })
    .ok()?;

    Some(platform::crypto::sign_token(secret, &payload))
}

/// Verify and decode a cookie value
pub fn decode(value: &str, secret: &[u8; 32]) -> Option<GameState> {
    let payload = platform::crypto::verify_token(secret, value)?;
    let session: SessionPayload = serde_json::from_slice(&payload).ok()?;

    Some(GameState::Picked {
        golden_vehicle_id: session.golden_vehicle_id,
        picked_at_ms: session.picked_at_ms,
    })
}

/// Read the game state carried by a request
pub fn read_game_state(headers: &HeaderMap, config: &StorefrontConfig) -> GameState {
    let Some(value) = platform::cookie::extract_cookie(headers, &config.session_cookie_name) else {
        return GameState::NoPick;
    };

    decode(&value, &config.session_secret).unwrap_or_else(|| {
        tracing::debug!("Ignoring invalid session cookie");
        GameState::NoPick
    })
}

/// `Set-Cookie` header for a game state, if it has one
pub fn game_state_cookie(state: &GameState, config: &StorefrontConfig) -> Option<HeaderValue> {
    let value = encode(state, &config.session_secret)?;
    platform::cookie::set_cookie_header(&config.session_cookie(), &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn picked(id: i64, at: i64) -> GameState {
        GameState::Picked {
            golden_vehicle_id: VehicleId::new(id),
            picked_at_ms: at,
        }
    }

    fn request_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_signed_state_reads_back() {
        let config = StorefrontConfig::development();
        let state = picked(4, 1_700_000_000_000);

        let value = encode(&state, &config.session_secret).unwrap();
        let headers = request_with_cookie(&format!("other=1; showroom_session={value}"));

        assert_eq!(read_game_state(&headers, &config), state);
    }

    #[test]
    fn test_no_pick_has_no_cookie() {
        let config = StorefrontConfig::development();
        assert!(encode(&GameState::NoPick, &config.session_secret).is_none());
        assert!(game_state_cookie(&GameState::NoPick, &config).is_none());
    }

    #[test]
    fn test_tampered_cookie_is_no_pick() {
        let config = StorefrontConfig::development();
        let value = encode(&picked(4, 0), &config.session_secret).unwrap();

        // Swap in a payload naming another vehicle, keep the old signature
        let (_, signature) = value.split_once('.').unwrap();
        let forged_payload = platform::crypto::to_base64(br#"{"g":7,"t":0}"#);
        let forged = format!("{forged_payload}.{signature}");

        let headers = request_with_cookie(&format!("showroom_session={forged}"));
        assert_eq!(read_game_state(&headers, &config), GameState::NoPick);
    }

    #[test]
    fn test_cookie_from_other_secret_is_no_pick() {
        let config = StorefrontConfig::development();
        let other = StorefrontConfig::development();
        let value = encode(&picked(4, 0), &other.session_secret).unwrap();

        let headers = request_with_cookie(&format!("showroom_session={value}"));
        assert_eq!(read_game_state(&headers, &config), GameState::NoPick);
    }

    #[test]
    fn test_garbage_and_missing_cookie_are_no_pick() {
        let config = StorefrontConfig::development();

        for cookie in ["showroom_session=", "showroom_session=abc", "unrelated=1"] {
            let headers = request_with_cookie(cookie);
            assert_eq!(read_game_state(&headers, &config), GameState::NoPick);
        }
        assert_eq!(read_game_state(&HeaderMap::new(), &config), GameState::NoPick);
    }

    #[test]
    fn test_set_cookie_is_browser_session() {
        let config = StorefrontConfig::development();
        let header = game_state_cookie(&picked(2, 0), &config).unwrap();
        let header = header.to_str().unwrap();

        assert!(header.starts_with("showroom_session="));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("SameSite=Lax"));
        assert!(header.contains("Path=/"));
        assert!(!header.contains("Max-Age"));
    }
}
