//! Derived views over a scored script.
//!
//! Everything here is recomputed from its inputs on each call; nothing is
//! cached.

pub mod aggregate;
pub mod extremes;
pub mod report;
pub mod trend;

pub use aggregate::{
    polarity_counts, score_distribution, stats, CharacterScoreIndex, CharacterStats,
    PolarityCounts, ScoreBucket,
};
pub use extremes::{extremal_line, most_negative, most_positive};
pub use report::{CharacterComparison, ReportSummary, SentimentReport};
pub use trend::{moving_average, window_bounds, AnnotatedPoint, Annotation, Trend};

/// Arithmetic mean, `0.0` for an empty slice.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Round to `places` decimal places from the exact binary value, sending
/// exact ties to the even digit.
///
/// A tie at `places` decimals is a value whose product with `2^(places + 1)`
/// is an odd integer. Scaling by a power of two is exact, so the check is too.
pub fn round_to(value: f64, places: u32) -> f64 {
    let halves = value * f64::from(2u32.pow(places + 1));
    if halves.fract() == 0.0 && halves % 2.0 != 0.0 {
        let factor = 10f64.powi(places as i32);
        return (value * factor).round_ties_even() / factor;
    }
    format!("{value:.prec$}", prec = places as usize)
        .parse()
        .unwrap_or(value)
}
