//! Descriptive and inferential statistics.

mod anova;
mod contingency;
mod correlation;
mod descriptive;

pub use anova::{one_way, AnovaTest};
pub use contingency::{chi_square_independence, ChiSquareTest, ContingencyTable};
pub use correlation::pearson;
pub use descriptive::{describe, Descriptive};

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
