//! Data models for hive readings and derived weekly statistics.

use serde::{Deserialize, Serialize};

// ---

/// Overall hive condition as reported by the monitoring station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HiveStatus {
    Healthy,
    Alert,
}

/// Snapshot of the sensor values for one hive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiveReading {
    // ---
    pub id: &'static str,
    pub name: &'static str,
    pub status: HiveStatus,
    pub location: &'static str,
    pub internal_temp: f64,
    pub external_temp: f64,
    pub internal_humidity: f64,
    pub external_humidity: f64,
    pub pesticides_detected: bool,
}

impl HiveReading {
    // ---
    /// True when the hive is flagged or pesticides were picked up.
    pub fn needs_attention(&self) -> bool {
        self.status == HiveStatus::Alert || self.pesticides_detected
    }

    /// Case-insensitive substring match on the hive id or display name.
    pub fn matches_search(&self, needle: &str) -> bool {
        // ---
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.id.to_lowercase().contains(&needle) || self.name.to_lowercase().contains(&needle)
    }
}

/// One synthetic daily sample in a weekly series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySample {
    // ---
    pub day: &'static str,
    pub day_short: &'static str,
    pub internal_temp: f64,
    pub external_temp: f64,
    pub internal_humidity: f64,
    pub external_humidity: f64,
}

/// Min / average / max over one tracked series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Summary for the inside and outside sensors of one quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairStats {
    pub internal: SeriesStats,
    pub external: SeriesStats,
}

/// Seven daily samples for a hive plus their summary statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyStatSeries {
    // ---
    pub hive_id: String,
    pub week_data: Vec<DailySample>,
    pub temp_stats: PairStats,
    pub humidity_stats: PairStats,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn create_test_hive(status: HiveStatus, pesticides_detected: bool) -> HiveReading {
        // ---
        HiveReading {
            id: "T001",
            name: "Colmena Prueba",
            status,
            location: "20.9670° N, 89.5925° W",
            internal_temp: 35.0,
            external_temp: 28.0,
            internal_humidity: 65.0,
            external_humidity: 55.0,
            pesticides_detected,
        }
    }

    #[test]
    fn test_needs_attention() {
        // ---
        assert!(!create_test_hive(HiveStatus::Healthy, false).needs_attention());
        assert!(create_test_hive(HiveStatus::Alert, false).needs_attention());
        assert!(create_test_hive(HiveStatus::Healthy, true).needs_attention());
    }

    #[test]
    fn test_matches_search() {
        // ---
        let hive = create_test_hive(HiveStatus::Healthy, false);
        assert!(hive.matches_search("t00"));
        assert!(hive.matches_search("PRUEBA"));
        assert!(hive.matches_search("  "));
        assert!(!hive.matches_search("A002"));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        // ---
        let json = serde_json::to_value(create_test_hive(HiveStatus::Alert, true)).unwrap();
        assert_eq!(json["status"], "alert");
        assert_eq!(json["pesticides_detected"], true);
        assert_eq!(json["internal_temp"], 35.0);
    }
}
