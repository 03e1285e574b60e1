//! Poll gating and frame-payload classification for the analysis loop.
//!
//! The poll schedule is a fixed-delay timer, not self-pacing: a slow frame
//! fetch can overlap the next tick, and stopping never cancels a request
//! already in flight. [`PollGate`] makes the race harmless — every fetch is
//! tagged with the generation current at issue time, and a response whose
//! generation no longer matches is discarded instead of applying stale UI
//! updates.

use std::collections::BTreeMap;

use crate::{FramePayload, Zone, ZoneCount};

/// Fixed delay between frame fetches: two samples per second.
pub const POLL_INTERVAL_MS: u32 = 500;

/// Run/stop gate for the polling loop.
#[derive(Debug, Clone, Default)]
pub struct PollGate {
    running: bool,
    generation: u64,
}

impl PollGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate; returns the generation that tags this run's fetches.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        self.running = true;
        self.generation
    }

    /// Close the gate. Bumps the generation so responses issued before the
    /// stop can never match again.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a response tagged with `generation` may be applied.
    pub fn accepts(&self, generation: u64) -> bool {
        self.running && generation == self.generation
    }
}

/// Renderable portion of a successful frame payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub current_count: u32,
    pub zone_data: BTreeMap<String, ZoneCount>,
    pub frame_base64: Option<String>,
    pub heatmap_base64: Option<String>,
}

/// What a frame response means for the loop.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The video ran out. Terminal, but a success, not a failure.
    Finished,
    /// The backend reported an error; polling halts, no retry.
    Failed(String),
    /// A regular frame to render.
    Update(FrameUpdate),
}

/// Classify a frame payload. `end_of_stream` wins over an `error` field.
pub fn classify(payload: FramePayload) -> FrameOutcome {
    if payload.end_of_stream {
        return FrameOutcome::Finished;
    }
    if let Some(error) = payload.error {
        return FrameOutcome::Failed(error);
    }
    FrameOutcome::Update(FrameUpdate {
        current_count: payload.current_count,
        zone_data: payload.zone_data,
        frame_base64: payload.frame_base64,
        heatmap_base64: payload.heatmap_base64,
    })
}

/// One `(name, count)` row per cached zone, in cache order. A zone missing
/// from `zone_data` shows a count of zero rather than disappearing.
pub fn occupancy_rows(zones: &[Zone], zone_data: &BTreeMap<String, ZoneCount>) -> Vec<(String, u32)> {
    zones
        .iter()
        .map(|zone| {
            let count = zone_data.get(&zone.id).map(|c| c.count).unwrap_or(0);
            (zone.name.clone(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZonePoint;

    fn zone(id: &str, name: &str) -> Zone {
        Zone {
            id: id.to_string(),
            name: name.to_string(),
            coordinates: vec![
                ZonePoint::new(0, 0),
                ZonePoint::new(100, 0),
                ZonePoint::new(100, 100),
                ZonePoint::new(0, 100),
            ],
        }
    }

    #[test]
    fn gate_accepts_only_the_current_generation_while_running() {
        let mut gate = PollGate::new();
        assert!(!gate.is_running());
        assert!(!gate.accepts(0));

        let generation = gate.start();
        assert!(gate.accepts(generation));
        assert!(!gate.accepts(generation - 1));
    }

    #[test]
    fn stop_discards_in_flight_responses_deterministically() {
        let mut gate = PollGate::new();
        let generation = gate.start();
        gate.stop();
        // A late response from the stopped run never applies.
        assert!(!gate.accepts(generation));

        // Even after a restart, the old tag stays dead.
        let restarted = gate.start();
        assert!(!gate.accepts(generation));
        assert!(gate.accepts(restarted));
    }

    #[test]
    fn end_of_stream_outranks_an_error_field() {
        let payload = FramePayload {
            end_of_stream: true,
            error: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(classify(payload), FrameOutcome::Finished);
    }

    #[test]
    fn error_field_is_fatal_for_the_session() {
        let payload = FramePayload {
            error: Some("Analysis not started or session expired".into()),
            ..Default::default()
        };
        match classify(payload) {
            FrameOutcome::Failed(message) => {
                assert_eq!(message, "Analysis not started or session expired")
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn regular_frames_carry_counts_and_images() {
        let mut zone_data = BTreeMap::new();
        zone_data.insert(
            "z1".to_string(),
            ZoneCount {
                name: "Entrance".into(),
                count: 4,
            },
        );
        let payload = FramePayload {
            current_count: 7,
            zone_data,
            frame_base64: Some("abc".into()),
            ..Default::default()
        };
        match classify(payload) {
            FrameOutcome::Update(update) => {
                assert_eq!(update.current_count, 7);
                assert_eq!(update.zone_data["z1"].count, 4);
                assert_eq!(update.frame_base64.as_deref(), Some("abc"));
                assert!(update.heatmap_base64.is_none());
            }
            other => panic!("expected Update, got {other:?}"),
        }
    }

    #[test]
    fn zones_missing_from_frame_data_read_zero() {
        let zones = vec![zone("z1", "Entrance"), zone("z2", "Lobby")];
        let mut zone_data = BTreeMap::new();
        zone_data.insert(
            "z1".to_string(),
            ZoneCount {
                name: "Entrance".into(),
                count: 3,
            },
        );
        assert_eq!(
            occupancy_rows(&zones, &zone_data),
            vec![("Entrance".to_string(), 3), ("Lobby".to_string(), 0)]
        );
    }
}
