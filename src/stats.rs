//! Synthetic weekly statistics for a hive.
//!
//! Each hive gets seven daily samples derived from its baseline readings by a
//! fixed trigonometric formula over `(day_index + seed)`. The output depends
//! only on the inputs, so two calls with the same arguments produce
//! bit-identical series. Humidity is not clamped to `[0, 100]`.

use chrono::Weekday;

use crate::hives;
use crate::models::{DailySample, PairStats, SeriesStats, WeeklyStatSeries};

// ---

/// Days in a generated week.
pub const DAYS_PER_WEEK: usize = 7;

/// Spacing between consecutive days on the variation curves.
const DAY_STEP: f64 = 0.7;

/// Baseline readings a weekly series oscillates around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub internal_temp: f64,
    pub external_temp: f64,
    pub internal_humidity: f64,
    pub external_humidity: f64,
}

/// Round to the nearest integer, halves toward positive infinity.
fn round0(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves toward positive infinity.
///
/// Negative ties (`-0.25`) land on `-0.2`, not `-0.3`. Baselines carry one
/// decimal, so generated values never hit that case.
fn round1(value: f64) -> f64 {
    round0(value * 10.0) / 10.0
}

/// Full and abbreviated Spanish label for a weekday.
fn day_labels(day: Weekday) -> (&'static str, &'static str) {
    match day {
        Weekday::Mon => ("Lunes", "Lun"),
        Weekday::Tue => ("Martes", "Mar"),
        Weekday::Wed => ("Miércoles", "Mié"),
        Weekday::Thu => ("Jueves", "Jue"),
        Weekday::Fri => ("Viernes", "Vie"),
        Weekday::Sat => ("Sábado", "Sáb"),
        Weekday::Sun => ("Domingo", "Dom"),
    }
}

/// Build the sample for day `index` (0 = Monday).
fn daily_sample(index: usize, day: Weekday, base: &Baseline, seed: i64) -> DailySample {
    // ---
    let offset = (index as f64 + seed as f64) * DAY_STEP;
    let temp_variation = offset.sin() * 2.0 + (offset * 1.3).cos() * 1.5;
    let humidity_variation = (offset * 0.8).cos() * 8.0 + (offset * 1.1).sin() * 3.0;

    let (label, short) = day_labels(day);

    DailySample {
        day: label,
        day_short: short,
        internal_temp: round1(base.internal_temp + temp_variation),
        external_temp: round1(
            base.external_temp + temp_variation * 1.4 + (offset * 2.0).sin() * 1.2,
        ),
        internal_humidity: round0(base.internal_humidity + humidity_variation),
        external_humidity: round0(
            base.external_humidity + humidity_variation * 0.8 + (offset * 1.5).cos() * 4.0,
        ),
    }
}

fn column(week: &[DailySample], field: fn(&DailySample) -> f64) -> Vec<f64> {
    week.iter().map(field).collect()
}

/// Min, rounded mean and max of a non-empty series.
fn summarize(values: &[f64], round: fn(f64) -> f64) -> SeriesStats {
    // ---
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    SeriesStats {
        min: round(min),
        avg: round(mean),
        max: round(max),
    }
}

/// Generate the weekly series for one hive.
///
/// Samples run Monday through Sunday. Temperatures are rounded to one
/// decimal and humidities to whole percent, both for the samples and for
/// the summary statistics.
pub fn generate(hive_id: &str, base: Baseline, seed: i64) -> WeeklyStatSeries {
    // ---
    let mut day = Weekday::Mon;
    let mut week_data = Vec::with_capacity(DAYS_PER_WEEK);
    for index in 0..DAYS_PER_WEEK {
        week_data.push(daily_sample(index, day, &base, seed));
        day = day.succ();
    }

    let internal_temps = column(&week_data, |d| d.internal_temp);
    let external_temps = column(&week_data, |d| d.external_temp);
    let internal_hums = column(&week_data, |d| d.internal_humidity);
    let external_hums = column(&week_data, |d| d.external_humidity);

    let temp_stats = PairStats {
        internal: summarize(&internal_temps, round1),
        external: summarize(&external_temps, round1),
    };
    let humidity_stats = PairStats {
        internal: summarize(&internal_hums, round0),
        external: summarize(&external_hums, round0),
    };

    tracing::trace!(hive_id, seed, "generated weekly series");

    WeeklyStatSeries {
        hive_id: hive_id.to_string(),
        week_data,
        temp_stats,
        humidity_stats,
    }
}

/// Weekly series for a catalogued hive, seeded by its table position.
pub fn weekly_stats_for(hive_id: &str) -> Option<WeeklyStatSeries> {
    // ---
    let hive = hives::find_hive(hive_id)?;
    let seed = hives::seed_for(hive_id)?;
    let base = Baseline {
        internal_temp: hive.internal_temp,
        external_temp: hive.external_temp,
        internal_humidity: hive.internal_humidity,
        external_humidity: hive.external_humidity,
    };
    Some(generate(hive.id, base, seed))
}

/// Weekly series for every catalogued hive, in table order.
pub fn weekly_stats_for_all() -> Vec<WeeklyStatSeries> {
    hives::all_hives()
        .iter()
        .filter_map(|h| weekly_stats_for(h.id))
        .collect()
}
