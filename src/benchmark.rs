// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device score estimate
//!
//! Fits ordinary least squares with an intercept on a small fixed training
//! set and evaluates it at a query point. Features and targets are centred
//! and the centred system is solved through the SVD pseudo-inverse, which
//! picks the minimum-norm coefficients when the system is underdetermined
//! (three samples, three features plus intercept).

use nalgebra::{DMatrix, DVector};
use serde::Serialize;

use crate::error::{FfsensError, Result};

/// Singular values below this are treated as zero
const SVD_EPSILON: f64 = 1e-9;

/// Feature names in column order
pub const FEATURES: [&str; 3] = ["CPU Strength", "FPS Stability", "Gyro Smoothness"];

/// Factors listed to the user as influencing the score
pub const SCORE_FACTORS: [&str; 4] = [
    "CPU Strength",
    "FPS Stability",
    "Gyro Smoothness",
    "Touch Latency",
];

/// Reference devices: (CPU, FPS, gyro) -> score
pub const TRAINING_SET: [([f64; 3], f64); 3] = [
    ([50.0, 60.0, 70.0], 58.0),
    ([70.0, 80.0, 85.0], 78.0),
    ([90.0, 95.0, 98.0], 96.0),
];

/// Query used when the caller gives no metrics
pub const DEFAULT_QUERY: [f64; 3] = [65.0, 72.0, 78.0];

/// Inclusive range every metric must fall in
pub const METRIC_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Check one metric against [`METRIC_RANGE`].
pub fn check_metric(name: &str, value: f64) -> Result<f64> {
    if !METRIC_RANGE.contains(&value) {
        return Err(FfsensError::InvalidInput(format!(
            "{} must be between {} and {}, got {}",
            name,
            METRIC_RANGE.start(),
            METRIC_RANGE.end(),
            value
        )));
    }
    Ok(value)
}

/// Linear model `y = w . x + b`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<const N: usize> {
    coefficients: [f64; N],
    intercept: f64,
}

impl<const N: usize> LinearModel<N> {
    /// Fit by least squares with intercept.
    pub fn fit(samples: &[([f64; N], f64)]) -> Result<Self> {
        if samples.is_empty() {
            return Err(FfsensError::Benchmark(
                "cannot fit a model without samples".to_string(),
            ));
        }

        let rows = samples.len();
        let x = DMatrix::from_fn(rows, N, |r, c| samples[r].0[c]);
        let y = DVector::from_fn(rows, |r, _| samples[r].1);

        let x_means: Vec<f64> = (0..N).map(|c| x.column(c).mean()).collect();
        let y_mean = y.mean();

        let x_centred = DMatrix::from_fn(rows, N, |r, c| x[(r, c)] - x_means[c]);
        let y_centred = y.map(|v| v - y_mean);

        let solution = x_centred
            .svd(true, true)
            .solve(&y_centred, SVD_EPSILON)
            .map_err(|e| FfsensError::Benchmark(e.to_string()))?;

        let mut coefficients = [0.0; N];
        for (slot, value) in coefficients.iter_mut().zip(solution.iter()) {
            *slot = *value;
        }

        let intercept = y_mean
            - coefficients
                .iter()
                .zip(&x_means)
                .map(|(w, m)| w * m)
                .sum::<f64>();

        tracing::trace!(?coefficients, intercept, "fitted linear model");
        Ok(Self {
            coefficients,
            intercept,
        })
    }

    pub fn coefficients(&self) -> &[f64; N] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn predict(&self, features: &[f64; N]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
    }
}

/// Estimated device score out of 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceScore {
    pub cpu_strength: f64,
    pub fps_stability: f64,
    pub gyro_smoothness: f64,
    /// Raw model output
    pub prediction: f64,
    /// Prediction truncated toward zero
    pub score: i64,
}

/// Fit the reference model and score the given metrics.
pub fn estimate(query: [f64; 3]) -> Result<DeviceScore> {
    for (name, value) in FEATURES.iter().zip(query) {
        check_metric(name, value)?;
    }

    let model = LinearModel::fit(&TRAINING_SET)?;
    let prediction = model.predict(&query);
    let [cpu_strength, fps_stability, gyro_smoothness] = query;

    Ok(DeviceScore {
        cpu_strength,
        fps_stability,
        gyro_smoothness,
        prediction,
        score: prediction as i64,
    })
}

/// The fixed estimate shown in the benchmark view
pub fn default_estimate() -> Result<DeviceScore> {
    estimate(DEFAULT_QUERY)
}
