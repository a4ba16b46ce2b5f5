//! Pearson product-moment correlation.

use super::descriptive::{is_constant, mean};
use crate::error::{BivarError, Result};

const TEST_NAME: &str = "Pearson correlation";

/// Pearson correlation coefficient of paired observations.
///
/// Fails as degenerate with fewer than two pairs or when either side is
/// constant.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(BivarError::Statistics(format!(
            "paired samples differ in length ({} vs {})",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(BivarError::degenerate(
            TEST_NAME,
            format!("needs at least 2 paired observations, got {}", x.len()),
        ));
    }

    if is_constant(x) || is_constant(y) {
        return Err(BivarError::degenerate(TEST_NAME, "one variable is constant"));
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    Ok((sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0))
}
