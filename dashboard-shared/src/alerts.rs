//! Capacity thresholds and the system-wide alert derivation.

use std::collections::BTreeMap;

use crate::ZoneCount;

/// Fallback capacity for zones without a documented override.
pub const DEFAULT_CAPACITY: u32 = 15;

/// Per-zone capacity, keyed by zone name.
pub fn zone_capacity(name: &str) -> u32 {
    match name {
        "Main Entrance" => 20,
        "Retail Area" => 25,
        _ => DEFAULT_CAPACITY,
    }
}

/// Single system-wide alert status. Only one alert shows at a time; the
/// evaluator does not aggregate multiple violations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Nominal,
    Critical {
        zone: String,
        count: u32,
        capacity: u32,
    },
}

impl AlertState {
    pub fn is_critical(&self) -> bool {
        matches!(self, AlertState::Critical { .. })
    }

    /// Banner text for the alert box.
    pub fn banner_text(&self) -> String {
        match self {
            AlertState::Nominal => "System is nominal. No alerts.".to_string(),
            AlertState::Critical {
                zone,
                count,
                capacity,
            } => format!("CRITICAL: {zone} over capacity! ({count}/{capacity})"),
        }
    }
}

/// First zone whose count strictly exceeds its capacity wins, in zone-id
/// order (the `BTreeMap` makes the otherwise unspecified backend order
/// deterministic).
pub fn evaluate(zone_data: &BTreeMap<String, ZoneCount>) -> AlertState {
    for entry in zone_data.values() {
        let capacity = zone_capacity(&entry.name);
        if entry.count > capacity {
            return AlertState::Critical {
                zone: entry.name.clone(),
                count: entry.count,
                capacity,
            };
        }
    }
    AlertState::Nominal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, &str, u32)]) -> BTreeMap<String, ZoneCount> {
        entries
            .iter()
            .map(|(id, name, count)| {
                (
                    id.to_string(),
                    ZoneCount {
                        name: name.to_string(),
                        count: *count,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn within_capacity_is_nominal_even_at_the_limit() {
        let data = counts(&[
            ("a", "Entrance", 15),
            ("b", "Main Entrance", 20),
            ("c", "Retail Area", 25),
        ]);
        assert_eq!(evaluate(&data), AlertState::Nominal);
    }

    #[test]
    fn one_zone_over_capacity_goes_critical_naming_it() {
        let data = counts(&[("a", "Entrance", 3), ("b", "Lobby", 16)]);
        assert_eq!(
            evaluate(&data),
            AlertState::Critical {
                zone: "Lobby".into(),
                count: 16,
                capacity: 15,
            }
        );
    }

    #[test]
    fn named_overrides_raise_the_threshold() {
        let data = counts(&[("a", "Main Entrance", 18)]);
        assert_eq!(evaluate(&data), AlertState::Nominal);

        let data = counts(&[("a", "Main Entrance", 21)]);
        assert!(evaluate(&data).is_critical());
    }

    #[test]
    fn ties_resolve_in_zone_id_order() {
        // Both over capacity; "a-zone" sorts first so it wins.
        let data = counts(&[("b-zone", "Lobby", 30), ("a-zone", "Entrance", 30)]);
        match evaluate(&data) {
            AlertState::Critical { zone, .. } => assert_eq!(zone, "Entrance"),
            AlertState::Nominal => panic!("expected a critical alert"),
        }
    }

    #[test]
    fn banner_text_reads_like_the_alert_box() {
        assert_eq!(
            AlertState::Nominal.banner_text(),
            "System is nominal. No alerts."
        );
        let critical = AlertState::Critical {
            zone: "Lobby".into(),
            count: 16,
            capacity: 15,
        };
        assert_eq!(
            critical.banner_text(),
            "CRITICAL: Lobby over capacity! (16/15)"
        );
    }
}
