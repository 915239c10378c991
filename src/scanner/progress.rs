//! Decile progress schedule for long scans.
//!
//! The schedule is keyed by the number of ports still to scan, so lookups
//! use `end - current_port` rather than the count already scanned.

use crate::error::ScanError;
use std::collections::BTreeMap;

/// Smallest range that gets a progress schedule.
pub const MIN_PROGRESS_PORTS: u32 = 100;

/// Mapping from "ports remaining" to a progress label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSchedule {
    labels: BTreeMap<u32, String>,
}

impl ProgressSchedule {
    /// Build the schedule for a scan of `total_ports` ports.
    ///
    /// Returns [`ScanError::InsufficientRange`] below 100 ports. For each
    /// decile `d` in 10..=90 the key is `floor(total * d / 100)`; if two
    /// deciles truncate to the same key the later one wins.
    pub fn build(total_ports: u32) -> Result<Self, ScanError> {
        if total_ports < MIN_PROGRESS_PORTS {
            return Err(ScanError::InsufficientRange { total: total_ports });
        }

        let mut labels = BTreeMap::new();
        for decile in (10..=90u64).step_by(10) {
            let remaining = (u64::from(total_ports) * decile / 100) as u32;
            labels.insert(remaining, format!("Progress: {}%", decile));
        }

        Ok(Self { labels })
    }

    /// Label to emit when `remaining` ports are left, if any.
    pub fn label_for(&self, remaining: u32) -> Option<&str> {
        self.labels.get(&remaining).map(String::as_str)
    }

    /// Number of distinct schedule entries.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Entries in ascending order of ports remaining.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.labels.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_thousand() {
        let schedule = ProgressSchedule::build(1000).unwrap();
        assert_eq!(schedule.len(), 9);
        assert_eq!(schedule.label_for(100), Some("Progress: 10%"));
        assert_eq!(schedule.label_for(500), Some("Progress: 50%"));
        assert_eq!(schedule.label_for(900), Some("Progress: 90%"));
        assert_eq!(schedule.label_for(1000), None);
        assert_eq!(schedule.label_for(0), None);
    }

    #[test]
    fn test_build_insufficient() {
        assert!(matches!(
            ProgressSchedule::build(50),
            Err(ScanError::InsufficientRange { total: 50 })
        ));
        assert!(ProgressSchedule::build(99).is_err());
    }

    #[test]
    fn test_build_threshold() {
        let schedule = ProgressSchedule::build(100).unwrap();
        let entries: Vec<_> = schedule.iter().collect();
        assert_eq!(
            entries,
            vec![
                (10, "Progress: 10%"),
                (20, "Progress: 20%"),
                (30, "Progress: 30%"),
                (40, "Progress: 40%"),
                (50, "Progress: 50%"),
                (60, "Progress: 60%"),
                (70, "Progress: 70%"),
                (80, "Progress: 80%"),
                (90, "Progress: 90%"),
            ]
        );
    }

    #[test]
    fn test_keys_truncate() {
        let schedule = ProgressSchedule::build(105).unwrap();
        // 105 * 10 / 100 = 10.5
        assert_eq!(schedule.label_for(10), Some("Progress: 10%"));
        assert_eq!(schedule.label_for(94), Some("Progress: 90%"));
    }

    #[test]
    fn test_full_port_space() {
        let schedule = ProgressSchedule::build(u32::from(u16::MAX)).unwrap();
        assert_eq!(schedule.len(), 9);
        assert_eq!(schedule.label_for(58981), Some("Progress: 90%"));
    }
}
