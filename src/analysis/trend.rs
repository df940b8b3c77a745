//! Centered moving average over per-line scores.
//!
//! The window around index `i` is `[i - w/2, i + w/2 + w%2)`, clipped to the
//! sequence. Even windows are symmetric around `i` (with `i` counted on the
//! right half); odd windows reach one extra element to the right. Windows
//! near either end are simply shorter.

use super::average;
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub fn window_bounds(len: usize, idx: usize, window_size: usize) -> Range<usize> {
    let half = window_size / 2;
    let start = idx.saturating_sub(half).min(len);
    let end = (idx + half + window_size % 2).min(len);
    start..end.max(start)
}

pub fn moving_average(values: &[f64], window_size: usize) -> Vec<f64> {
    (0..values.len())
        .map(|idx| average(&values[window_bounds(values.len(), idx, window_size)]))
        .collect()
}

/// A labelled narrative position on the trend line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub position: usize,
    pub label: String,
}

impl Annotation {
    pub fn new(position: usize, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnotatedPoint {
    pub position: usize,
    pub label: String,
    /// Smoothed value at `position`, absent when past the end of the script.
    pub value: Option<f64>,
}

/// Smoothed story arc of a script.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Trend {
    pub window_size: usize,
    pub values: Vec<f64>,
    pub annotations: Vec<AnnotatedPoint>,
}

impl Trend {
    pub fn compute(scores: &[i64], window_size: usize, annotations: &[Annotation]) -> Self {
        let raw: Vec<f64> = scores.iter().map(|&s| s as f64).collect();
        let values = moving_average(&raw, window_size);
        let annotations = annotations
            .iter()
            .map(|a| AnnotatedPoint {
                position: a.position,
                label: a.label.clone(),
                value: values.get(a.position).copied(),
            })
            .collect();

        Self {
            window_size,
            values,
            annotations,
        }
    }

    /// Position and value of the lowest and highest smoothed points.
    pub fn low_high(&self) -> Option<((usize, f64), (usize, f64))> {
        let mut points = self.values.iter().copied().enumerate();
        let first = points.next()?;
        Some(points.fold((first, first), |(low, high), point| {
            (
                if point.1 < low.1 { point } else { low },
                if point.1 > high.1 { point } else { high },
            )
        }))
    }
}
