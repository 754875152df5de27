//! Static hive catalogue served by the API.

use crate::models::{HiveReading, HiveStatus};

// ---

/// Monitored hives, in the order used to seed their weekly series.
static HIVES: [HiveReading; 8] = [
    HiveReading {
        id: "A002",
        name: "Colmena 1",
        status: HiveStatus::Healthy,
        location: "20.9670° N, 89.5925° W",
        internal_temp: 35.8,
        external_temp: 28.4,
        internal_humidity: 68.0,
        external_humidity: 55.0,
        pesticides_detected: false,
    },
    HiveReading {
        id: "A003",
        name: "Colmena 2",
        status: HiveStatus::Healthy,
        location: "19.6570° N, 89.6030° E",
        internal_temp: 34.9,
        external_temp: 27.8,
        internal_humidity: 65.0,
        external_humidity: 52.0,
        pesticides_detected: false,
    },
    HiveReading {
        id: "A004",
        name: "Colmena 3",
        status: HiveStatus::Alert,
        location: "21.9670° N, 92.7045° W",
        internal_temp: 38.2,
        external_temp: 29.1,
        internal_humidity: 72.0,
        external_humidity: 58.0,
        pesticides_detected: true,
    },
    HiveReading {
        id: "A005",
        name: "Colmena 4",
        status: HiveStatus::Healthy,
        location: "30.2370° N, 89.1425° W",
        internal_temp: 36.1,
        external_temp: 28.9,
        internal_humidity: 67.0,
        external_humidity: 54.0,
        pesticides_detected: false,
    },
    HiveReading {
        id: "A006",
        name: "Colmena 5",
        status: HiveStatus::Alert,
        location: "30.2370° N, 89.1425° W",
        internal_temp: 37.5,
        external_temp: 30.2,
        internal_humidity: 70.0,
        external_humidity: 60.0,
        pesticides_detected: true,
    },
    HiveReading {
        id: "A007",
        name: "Colmena 6",
        status: HiveStatus::Healthy,
        location: "30.2370° N, 89.1425° W",
        internal_temp: 35.2,
        external_temp: 27.5,
        internal_humidity: 64.0,
        external_humidity: 51.0,
        pesticides_detected: false,
    },
    HiveReading {
        id: "A008",
        name: "Colmena 7",
        status: HiveStatus::Healthy,
        location: "30.2370° N, 89.1425° W",
        internal_temp: 36.8,
        external_temp: 28.7,
        internal_humidity: 69.0,
        external_humidity: 56.0,
        pesticides_detected: false,
    },
    HiveReading {
        id: "A009",
        name: "Colmena 8",
        status: HiveStatus::Alert,
        location: "30.2370° N, 89.1425° W",
        internal_temp: 39.1,
        external_temp: 31.3,
        internal_humidity: 75.0,
        external_humidity: 62.0,
        pesticides_detected: true,
    },
];

pub fn all_hives() -> &'static [HiveReading] {
    &HIVES
}

/// Look up a hive by its exact id.
pub fn find_hive(id: &str) -> Option<&'static HiveReading> {
    HIVES.iter().find(|h| h.id == id)
}

/// Seed used for a hive's weekly series: its 1-based position in the table.
pub fn seed_for(id: &str) -> Option<i64> {
    HIVES
        .iter()
        .position(|h| h.id == id)
        .map(|pos| pos as i64 + 1)
}
