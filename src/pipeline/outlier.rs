use crate::model::thresholds::OUTLIER_EPSILON;

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sum = 0f64;
    for &v in values {
        sum += v;
    }
    sum / values.len() as f64
}

/// Standard deviation over N, not N - 1.
pub fn population_std(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut acc = 0f64;
    for &v in values {
        let d = v - mean;
        acc += d * d;
    }
    (acc / values.len() as f64).sqrt()
}

/// Z-score outlier removal. Keeps values with `|v - mean| / (std + eps) <= threshold`,
/// in their original order. Fewer than two samples, or zero spread, pass through untouched.
pub fn remove_outliers(values: &[f64], threshold: f64) -> Vec<f64> {
    if values.len() < 2 {
        return values.to_vec();
    }
    let mu = mean(values);
    let sigma = population_std(values, mu);
    if sigma == 0.0 {
        return values.to_vec();
    }
    let denom = sigma + OUTLIER_EPSILON;
    values
        .iter()
        .copied()
        .filter(|&v| ((v - mu) / denom).abs() <= threshold)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/outlier.rs"]
mod tests;
