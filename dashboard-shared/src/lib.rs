//! Shared data model and core logic for the occupancy dashboard.
//!
//! Everything in this crate is UI-free: wire types, zone geometry, the
//! view-mode state machine, analysis poll gating, the rolling chart model,
//! and the typed HTTP client. The WASM frontend consumes it and the test
//! suite exercises it on the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod alerts;
pub mod analysis;
pub mod api_client;
pub mod chart;
pub mod geometry;
pub mod palette;
pub mod view_state;

pub use alerts::AlertState;
pub use analysis::{FrameOutcome, FrameUpdate, PollGate, POLL_INTERVAL_MS};
pub use api_client::{ApiError, DashboardClient};
pub use chart::PopulationChart;
pub use geometry::PixelPoint;
pub use view_state::{Effect, ModeError, ModeMachine, ViewCommand, ViewMode, ZoneMode};

/// A point in the normalized zone coordinate space.
///
/// Zone geometry is persisted in a resolution-independent 0..=1000 space so
/// it survives canvas resizes and video source changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePoint {
    pub x: i32,
    pub y: i32,
}

impl ZonePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A named rectangular monitoring zone.
///
/// `coordinates` holds exactly four points ordered top-left, top-right,
/// bottom-right, bottom-left. Ids are issued by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub coordinates: Vec<ZonePoint>,
}

/// Per-zone occupancy sample as reported by the analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCount {
    pub name: String,
    pub count: u32,
}

/// One analysis frame response.
///
/// Every field defaults so that a terse terminal payload such as
/// `{"end_of_stream": true}` or a bare error payload deserializes cleanly.
///
/// `zone_data` lands in a `BTreeMap` keyed by zone id, which pins the
/// otherwise unspecified backend object-key order to id order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FramePayload {
    pub current_count: u32,
    pub zone_data: BTreeMap<String, ZoneCount>,
    pub frame_base64: Option<String>,
    pub heatmap_base64: Option<String>,
    pub current_frame: Option<u64>,
    pub total_frames: Option<u64>,
    pub end_of_stream: bool,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Zone collection response. Defaults keep an empty or malformed body from
/// taking the whole dashboard down; it degrades to no zones instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonesResponse {
    pub zones: Vec<Zone>,
}

/// Successful login/register response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub username: String,
}

/// Failure body shape; auth endpoints report `message`, the rest `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiMessage {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ApiMessage {
    /// Best human-readable failure text this body carries, if any.
    pub fn text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terse_terminal_payload_deserializes() {
        let payload: FramePayload = serde_json::from_str(r#"{"end_of_stream": true}"#).unwrap();
        assert!(payload.end_of_stream);
        assert_eq!(payload.current_count, 0);
        assert!(payload.zone_data.is_empty());
        assert!(payload.error.is_none());
    }

    #[test]
    fn frame_payload_zone_data_is_id_ordered() {
        let payload: FramePayload = serde_json::from_str(
            r#"{
                "current_count": 3,
                "zone_data": {
                    "b-zone": {"name": "Lobby", "count": 2},
                    "a-zone": {"name": "Entrance", "count": 1}
                }
            }"#,
        )
        .unwrap();
        let ids: Vec<_> = payload.zone_data.keys().cloned().collect();
        assert_eq!(ids, vec!["a-zone", "b-zone"]);
    }

    #[test]
    fn malformed_zone_listing_degrades_to_empty() {
        let parsed: ZonesResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.zones.is_empty());
    }

    #[test]
    fn api_message_prefers_error_field() {
        let body: ApiMessage =
            serde_json::from_str(r#"{"error": "boom", "message": "ignored"}"#).unwrap();
        assert_eq!(body.text(), Some("boom"));

        let auth: ApiMessage = serde_json::from_str(r#"{"message": "Invalid credentials"}"#).unwrap();
        assert_eq!(auth.text(), Some("Invalid credentials"));
    }
}
