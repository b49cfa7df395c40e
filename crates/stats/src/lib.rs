//! Statistical helper functions and hydrologic indices for streamflow series.
//!
//! Basic statistics (`mean`, `sd`, `median`, `skewness`) expect finite input;
//! the hydrologic indices (`tqmean`, `rb_index`, `seven_day_low`,
//! `exceed_3x_median`) strip non-finite entries themselves. Degenerate inputs
//! resolve to IEEE NaN (or 0 for counts), never a panic.

/// Returns a copy of `data` with non-finite entries removed.
///
/// Missing observations travel through the pipeline as NaN; this is the
/// single place they are stripped before statistics are taken.
pub fn finite_values(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Arithmetic mean of a slice. Returns NaN if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Maximum of a slice. Returns NaN if empty.
pub fn maximum(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NAN, f64::max)
}

/// Sample variance with N-1 denominator (matching R's `var()`).
/// Returns NaN if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator (matching R's `sd()`).
/// Returns NaN if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Coefficient of variation as a percentage: sd / mean * 100.
///
/// NaN propagates from either term; a zero mean follows IEEE division.
pub fn coeff_var(data: &[f64]) -> f64 {
    sd(data) / mean(data) * 100.0
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// **Expects pre-sorted input** (caller's responsibility). Returns NaN if
/// empty.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Adjusted Fisher-Pearson sample skewness coefficient (G1).
///
/// `G1 = sqrt(n(n-1)) / (n-2) * m3 / m2^(3/2)` with the biased central
/// moments `m2`, `m3`. Returns NaN for fewer than 3 elements or zero
/// variance.
pub fn skewness(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 3 {
        return f64::NAN;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    let m2 = data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / nf;
    let m3 = data
        .iter()
        .map(|&x| (x - mean) * (x - mean) * (x - mean))
        .sum::<f64>()
        / nf;
    if m2 <= 0.0 {
        return f64::NAN;
    }
    let g1 = m3 / m2.powf(1.5);
    (nf * (nf - 1.0)).sqrt() / (nf - 2.0) * g1
}

/// Tqmean: fraction of days whose flow strictly exceeds the mean flow of the
/// same period.
///
/// A duration-based flow-duration index in [0, 1]. Non-finite entries are
/// dropped first; an empty window yields NaN.
pub fn tqmean(values: &[f64]) -> f64 {
    let q = finite_values(values);
    if q.is_empty() {
        return f64::NAN;
    }
    let m = mean(&q);
    q.iter().filter(|&&v| v > m).count() as f64 / q.len() as f64
}

/// Richards-Baker flashiness index: total day-to-day absolute flow change
/// divided by total flow volume.
///
/// Non-finite entries are dropped first and the remaining sequence is
/// treated as contiguous. A zero path length (single observation) yields 0
/// even when the flow sum is 0; an empty window yields NaN.
pub fn rb_index(values: &[f64]) -> f64 {
    let q = finite_values(values);
    if q.is_empty() {
        return f64::NAN;
    }
    let path: f64 = q.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    let total: f64 = q.iter().sum();
    if path == 0.0 && total == 0.0 {
        return 0.0;
    }
    path / total
}

/// 7Q low flow: the minimum 7-day rolling mean.
///
/// Only full 7-wide windows over the null-stripped sequence are candidates.
/// Returns NaN when fewer than 7 values remain.
pub fn seven_day_low(values: &[f64]) -> f64 {
    let q = finite_values(values);
    if q.len() < 7 {
        return f64::NAN;
    }
    q.windows(7)
        .map(|w| w.iter().sum::<f64>() / 7.0)
        .fold(f64::INFINITY, f64::min)
}

/// Number of days with flow strictly greater than `multiple` times the
/// median flow of the same period.
///
/// Non-finite entries are dropped first; an empty window yields 0.
pub fn exceed_median_multiple(values: &[f64], multiple: f64) -> usize {
    let mut q = finite_values(values);
    if q.is_empty() {
        return 0;
    }
    q.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let med = median(&q);
    q.iter().filter(|&&v| v > multiple * med).count()
}

/// Number of days with flow strictly greater than 3x the median flow, a
/// high-flow/flood-pulse indicator.
pub fn exceed_3x_median(values: &[f64]) -> usize {
    exceed_median_multiple(values, 3.0)
}
