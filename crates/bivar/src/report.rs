//! Summary report produced for one pair of selected variables.

use serde::{Deserialize, Serialize};

use crate::schema::VariableKind;

/// Descriptive block for one selected variable.
///
/// The numeric fields are present only for quantitative variables and are
/// rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSummary {
    pub name: String,
    pub kind: VariableKind,
    pub mean: Option<f64>,
    pub variance: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl VariableSummary {
    /// A block with every statistic absent.
    pub fn empty(name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mean: None,
            variance: None,
            std_dev: None,
            min: None,
            max: None,
        }
    }
}

/// Chi-square statistic (2 decimals) and p-value (4 decimals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareResult {
    pub statistic: f64,
    pub p_value: f64,
    pub dof: usize,
}

/// ANOVA F-statistic (2 decimals) and p-value (4 decimals).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: f64,
    pub df_between: usize,
    pub df_within: usize,
}

/// The inferential procedure chosen for a pair of variable kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    PearsonCorrelation,
    ChiSquare,
    Anova,
}

impl TestKind {
    /// Select the procedure for two measurement kinds.
    pub fn for_kinds(a: VariableKind, b: VariableKind) -> Self {
        match (a, b) {
            (VariableKind::Quantitative, VariableKind::Quantitative) => TestKind::PearsonCorrelation,
            (VariableKind::Categorical, VariableKind::Categorical) => TestKind::ChiSquare,
            _ => TestKind::Anova,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestKind::PearsonCorrelation => "Pearson Correlation",
            TestKind::ChiSquare => "Chi-Square Test",
            TestKind::Anova => "ANOVA Test",
        }
    }
}

/// Outcome of the single inferential procedure.
///
/// The variant is fixed by the kinds of the two variables; its payload is
/// None when the procedure is undefined for the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "test", content = "result", rename_all = "snake_case")]
pub enum Inference {
    PearsonCorrelation(Option<f64>),
    ChiSquare(Option<ChiSquareResult>),
    Anova(Option<AnovaResult>),
}

impl Inference {
    pub fn kind(&self) -> TestKind {
        match self {
            Inference::PearsonCorrelation(_) => TestKind::PearsonCorrelation,
            Inference::ChiSquare(_) => TestKind::ChiSquare,
            Inference::Anova(_) => TestKind::Anova,
        }
    }

    /// An outcome of the given kind with no result.
    pub fn undefined(kind: TestKind) -> Self {
        match kind {
            TestKind::PearsonCorrelation => Inference::PearsonCorrelation(None),
            TestKind::ChiSquare => Inference::ChiSquare(None),
            TestKind::Anova => Inference::Anova(None),
        }
    }

    pub fn is_defined(&self) -> bool {
        match self {
            Inference::PearsonCorrelation(r) => r.is_some(),
            Inference::ChiSquare(c) => c.is_some(),
            Inference::Anova(a) => a.is_some(),
        }
    }
}

/// Summary statistics for a (var1, var2) selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Number of rows in the loaded table.
    pub sample_count: usize,
    pub var1: VariableSummary,
    pub var2: VariableSummary,
    pub inference: Inference,
    /// Why the inferential result is absent, when it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SummaryReport {
    pub fn pearson_correlation(&self) -> Option<f64> {
        match self.inference {
            Inference::PearsonCorrelation(r) => r,
            _ => None,
        }
    }

    pub fn chi_square(&self) -> Option<ChiSquareResult> {
        match self.inference {
            Inference::ChiSquare(c) => c,
            _ => None,
        }
    }

    pub fn anova(&self) -> Option<AnovaResult> {
        match self.inference {
            Inference::Anova(a) => a,
            _ => None,
        }
    }

    fn per_variable(
        &self,
        metric: &str,
        pick: impl Fn(&VariableSummary) -> Option<f64>,
    ) -> ReportRow {
        ReportRow::PerVariable {
            metric: metric.to_string(),
            var1: format_number(pick(&self.var1)),
            var2: format_number(pick(&self.var2)),
        }
    }

    /// Flatten the report into display rows.
    pub fn table_rows(&self) -> Vec<ReportRow> {
        vec![
            ReportRow::PerVariable {
                metric: "Total Samples".to_string(),
                var1: self.sample_count.to_string(),
                var2: self.sample_count.to_string(),
            },
            self.per_variable("Mean", |v| v.mean),
            self.per_variable("Variance", |v| v.variance),
            self.per_variable("Std Dev", |v| v.std_dev),
            self.per_variable("Min", |v| v.min),
            self.per_variable("Max", |v| v.max),
            ReportRow::PerVariable {
                metric: "Type".to_string(),
                var1: self.var1.kind.to_string(),
                var2: self.var2.kind.to_string(),
            },
            ReportRow::Spanning {
                metric: TestKind::PearsonCorrelation.label().to_string(),
                value: format_number(self.pearson_correlation()),
            },
            ReportRow::Spanning {
                metric: TestKind::ChiSquare.label().to_string(),
                value: self
                    .chi_square()
                    .map(|c| format!("Chi2 = {:.2}, p-value = {:.4}", c.statistic, c.p_value))
                    .unwrap_or_default(),
            },
            ReportRow::Spanning {
                metric: TestKind::Anova.label().to_string(),
                value: self
                    .anova()
                    .map(|a| format!("F-stat = {:.2}, p-value = {:.4}", a.f_statistic, a.p_value))
                    .unwrap_or_default(),
            },
        ]
    }
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ReportRow {
    /// One cell per selected variable.
    PerVariable {
        metric: String,
        var1: String,
        var2: String,
    },
    /// A single cell spanning both variables.
    Spanning { metric: String, value: String },
}

impl ReportRow {
    pub fn metric(&self) -> &str {
        match self {
            ReportRow::PerVariable { metric, .. } | ReportRow::Spanning { metric, .. } => metric,
        }
    }
}

/// Shortest decimal form, keeping one decimal place on whole numbers (`20.0`).
fn format_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}
