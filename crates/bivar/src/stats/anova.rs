//! One-way analysis of variance.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use super::descriptive::{is_constant, mean};
use crate::error::{BivarError, Result};

const TEST_NAME: &str = "ANOVA";

/// Result of a one-way ANOVA.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnovaTest {
    pub f_statistic: f64,
    pub p_value: f64,
    pub df_between: usize,
    pub df_within: usize,
}

/// One-way ANOVA across groups of observations.
///
/// Empty groups are ignored. Fails as degenerate with fewer than two
/// non-empty groups, no within-group degrees of freedom, or no
/// within-group variation.
pub fn one_way(groups: &[Vec<f64>]) -> Result<AnovaTest> {
    let groups: Vec<&[f64]> = groups
        .iter()
        .filter(|g| !g.is_empty())
        .map(|g| g.as_slice())
        .collect();

    if groups.len() < 2 {
        return Err(BivarError::degenerate(
            TEST_NAME,
            format!("needs at least 2 non-empty groups, got {}", groups.len()),
        ));
    }

    let n: usize = groups.iter().map(|g| g.len()).sum();
    let k = groups.len();
    if n <= k {
        return Err(BivarError::degenerate(
            TEST_NAME,
            "every group has a single observation",
        ));
    }

    if groups.iter().all(|g| is_constant(g)) {
        return Err(BivarError::degenerate(
            TEST_NAME,
            "values are constant within every group",
        ));
    }

    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / n as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in &groups {
        let group_mean = mean(group);
        ss_between += group.len() as f64 * (group_mean - grand_mean).powi(2);
        ss_within += group.iter().map(|x| (x - group_mean).powi(2)).sum::<f64>();
    }

    let df_between = k - 1;
    let df_within = n - k;
    let f_statistic = (ss_between / df_between as f64) / (ss_within / df_within as f64);

    let distribution = FisherSnedecor::new(df_between as f64, df_within as f64)
        .map_err(|e| BivarError::Statistics(e.to_string()))?;

    Ok(AnovaTest {
        f_statistic,
        p_value: distribution.sf(f_statistic),
        df_between,
        df_within,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_anova() {
        let groups = vec![
            vec![6.0, 8.0, 4.0, 5.0, 3.0, 4.0],
            vec![8.0, 12.0, 9.0, 11.0, 6.0, 8.0],
            vec![13.0, 9.0, 11.0, 8.0, 7.0, 12.0],
        ];
        let result = one_way(&groups).unwrap();
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 15);
        assert!((result.f_statistic - 9.2647).abs() < 1e-3);
        assert!((result.p_value - 0.0024).abs() < 1e-3);
    }

    #[test]
    fn test_equal_group_means_give_zero_f() {
        let result = one_way(&[vec![10.0, 30.0], vec![20.0]]).unwrap();
        assert_eq!(result.f_statistic, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let err = one_way(&[vec![1.0, 2.0], vec![]]).unwrap_err();
        assert!(matches!(err, BivarError::DegenerateStatistic { .. }));
    }

    #[test]
    fn test_inexact_constant_groups_are_degenerate() {
        let err = one_way(&[vec![0.1, 0.1, 0.1], vec![0.7, 0.7, 0.7]]).unwrap_err();
        assert!(matches!(err, BivarError::DegenerateStatistic { .. }));
    }

    #[test]
    fn test_one_varying_group_is_enough() {
        let result = one_way(&[vec![0.1, 0.1, 0.1], vec![0.7, 0.8, 0.9]]).unwrap();
        assert!(result.f_statistic.is_finite());
        assert!(result.f_statistic > 1.0);
    }

    #[test]
    fn test_singleton_groups_are_degenerate() {
        let err = one_way(&[vec![1.0], vec![2.0]]).unwrap_err();
        assert!(matches!(err, BivarError::DegenerateStatistic { .. }));
    }
}
