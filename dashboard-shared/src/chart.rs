//! Rolling time-series model behind the population chart.
//!
//! One shared label sequence plus one sample series per zone, each bounded
//! by a drop-oldest-then-append rule. The bound is intentionally soft: a
//! sequence already holding more than [`CHART_WINDOW`] entries sheds its
//! oldest before the append, so length peaks at 21 and settles there. That
//! matches the behavior charts were tuned against; callers must treat 20 as
//! a soft bound, not a hard cap.

use std::collections::{BTreeMap, VecDeque};

use crate::{Zone, ZoneCount};

/// Soft bound on the rolling window; transient length may reach 21.
pub const CHART_WINDOW: usize = 20;

/// One zone's sample series. `color_index` is the zone's position in the
/// cache at reset time and selects its palette slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSeries {
    pub name: String,
    pub color_index: usize,
    pub samples: VecDeque<u32>,
}

/// The rolling per-zone occupancy chart model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationChart {
    labels: VecDeque<String>,
    series: Vec<ZoneSeries>,
}

impl PopulationChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &VecDeque<String> {
        &self.labels
    }

    pub fn series(&self) -> &[ZoneSeries] {
        &self.series
    }

    /// Largest sample currently in any series; drives the y-axis scale.
    pub fn max_sample(&self) -> u32 {
        self.series
            .iter()
            .flat_map(|s| s.samples.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Clear history and rebuild one series per cached zone, keyed by name.
    pub fn reset(&mut self, zones: &[Zone]) {
        self.labels.clear();
        self.series = zones
            .iter()
            .enumerate()
            .map(|(index, zone)| ZoneSeries {
                name: zone.name.clone(),
                color_index: index,
                samples: VecDeque::new(),
            })
            .collect();
    }

    /// Append one tick: a time label plus, per series, the count of its
    /// zone (looked up by name in `zones`, then by id in `zone_data`,
    /// defaulting to 0 when absent).
    pub fn record(
        &mut self,
        zones: &[Zone],
        zone_data: &BTreeMap<String, ZoneCount>,
        label: String,
    ) {
        trim(&mut self.labels);
        self.labels.push_back(label);

        for series in &mut self.series {
            trim(&mut series.samples);
            let count = zones
                .iter()
                .find(|zone| zone.name == series.name)
                .and_then(|zone| zone_data.get(&zone.id))
                .map(|c| c.count)
                .unwrap_or(0);
            series.samples.push_back(count);
        }
    }
}

fn trim<T>(sequence: &mut VecDeque<T>) {
    if sequence.len() > CHART_WINDOW {
        sequence.pop_front();
    }
}

/// `H:MM:SS` label for the x axis; hours unpadded as a clock readout.
pub fn format_time_label(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{hours}:{minutes:02}:{seconds:02}")
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
                ZonePoint::new(10, 0),
                ZonePoint::new(10, 10),
                ZonePoint::new(0, 10),
            ],
        }
    }

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
    fn reset_builds_one_series_per_zone_in_cache_order() {
        let zones = vec![zone("a", "Entrance"), zone("b", "Lobby")];
        let mut chart = PopulationChart::new();
        chart.record(&zones, &BTreeMap::new(), "9:00:00".into());
        chart.reset(&zones);

        assert!(chart.labels().is_empty());
        assert_eq!(chart.series().len(), 2);
        assert_eq!(chart.series()[0].name, "Entrance");
        assert_eq!(chart.series()[0].color_index, 0);
        assert_eq!(chart.series()[1].color_index, 1);
        assert!(chart.series()[1].samples.is_empty());
    }

    #[test]
    fn record_appends_counts_by_zone_name() {
        let zones = vec![zone("a", "Entrance"), zone("b", "Lobby")];
        let mut chart = PopulationChart::new();
        chart.reset(&zones);
        chart.record(
            &zones,
            &counts(&[("a", "Entrance", 5), ("b", "Lobby", 2)]),
            "9:00:00".into(),
        );

        assert_eq!(chart.series()[0].samples, VecDeque::from(vec![5]));
        assert_eq!(chart.series()[1].samples, VecDeque::from(vec![2]));
        assert_eq!(chart.max_sample(), 5);
    }

    #[test]
    fn missing_zone_data_charts_zero() {
        let zones = vec![zone("a", "Entrance"), zone("b", "Lobby")];
        let mut chart = PopulationChart::new();
        chart.reset(&zones);
        chart.record(&zones, &counts(&[("a", "Entrance", 5)]), "9:00:00".into());

        assert_eq!(chart.series()[1].samples, VecDeque::from(vec![0]));
    }

    #[test]
    fn window_peaks_at_twenty_one_and_series_track_labels() {
        let zones = vec![zone("a", "Entrance")];
        let mut chart = PopulationChart::new();
        chart.reset(&zones);

        for tick in 0..60 {
            chart.record(
                &zones,
                &counts(&[("a", "Entrance", tick)]),
                format_time_label(9, 0, tick),
            );
            let labels = chart.labels().len();
            assert!(labels <= CHART_WINDOW + 1, "labels grew to {labels}");
            for series in chart.series() {
                assert_eq!(series.samples.len(), labels);
            }
        }
        assert_eq!(chart.labels().len(), CHART_WINDOW + 1);
        // Oldest samples were shed in order.
        assert_eq!(chart.series()[0].samples.front(), Some(&39));
        assert_eq!(chart.series()[0].samples.back(), Some(&59));
    }

    #[test]
    fn time_labels_zero_pad_minutes_and_seconds_only() {
        assert_eq!(format_time_label(9, 5, 7), "9:05:07");
        assert_eq!(format_time_label(23, 59, 0), "23:59:00");
    }
}
