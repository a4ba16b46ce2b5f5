//! Integration tests for bivar.

use std::io::Write;
use tempfile::NamedTempFile;

use bivar::{
    BivarError, ChartValue, ColumnType, Dashboard, DashboardConfig, Inference, ParserConfig,
    ReportRow, TestKind, VariableKind,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const WEATHER_1: &str = "Date,City,Temperature,Humidity,Condition\n\
                         2024-01-01,Hanoi,18.5,80,Cloudy\n\
                         2024-01-01,Hue,22.0,85,Rain\n\
                         2024-01-01,Saigon,31.2,70,Sunny\n";

const WEATHER_2: &str = "Date,City,Temperature,Humidity,Condition\n\
                         2024-01-02,Hanoi,17.9,82,Rain\n\
                         2024-01-02,Hue,23.4,,Cloudy\n\
                         2024-01-02,Saigon,32.0,65,Sunny\n";

const WEATHER_3: &str = "Date,City,Temperature,Humidity,Condition\n\
                         2024-01-03,Hanoi,19.1,78,Cloudy\n\
                         2024-01-03,Hue,21.7,88,Rain\n\
                         2024-01-03,Saigon,30.8,68,Sunny\n";

fn weather_dashboard() -> (Dashboard, Vec<NamedTempFile>) {
    let files = vec![
        create_test_file(WEATHER_1),
        create_test_file(WEATHER_2),
        create_test_file(WEATHER_3),
    ];
    let paths: Vec<_> = files.iter().map(|f| f.path().to_path_buf()).collect();
    let dashboard = Dashboard::load(&paths).expect("Load failed");
    (dashboard, files)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_concatenates_sources() {
    let (dashboard, _files) = weather_dashboard();

    assert_eq!(dashboard.store().row_count(), 9);
    assert_eq!(
        dashboard.columns(),
        vec!["Date", "City", "Temperature", "Humidity", "Condition"]
    );
    assert_eq!(dashboard.sources().len(), 3);
    assert!(dashboard.sources().iter().all(|s| s.format == "csv"));
    assert!(dashboard.sources()[0].hash.starts_with("sha256:"));
}

#[test]
fn test_column_kinds() {
    let (dashboard, _files) = weather_dashboard();
    let schema = dashboard.schema();

    let temperature = schema.get_column("Temperature").unwrap();
    assert_eq!(temperature.storage_type, ColumnType::Float);
    assert_eq!(temperature.kind, VariableKind::Quantitative);

    let humidity = schema.get_column("Humidity").unwrap();
    assert_eq!(humidity.storage_type, ColumnType::Integer);
    assert_eq!(humidity.missing_count, 1);

    assert_eq!(schema.get_column("City").unwrap().kind, VariableKind::Categorical);
    assert_eq!(schema.get_column("Date").unwrap().kind, VariableKind::Categorical);
}

#[test]
fn test_schema_mismatch_is_fatal() {
    let first = create_test_file("a,b\n1,2\n");
    let second = create_test_file("a,c\n3,4\n");

    let err = Dashboard::load(&[first.path(), second.path()]).unwrap_err();
    match err {
        BivarError::SchemaMismatch { expected, found, .. } => {
            assert_eq!(expected, vec!["a", "b"]);
            assert_eq!(found, vec!["a", "c"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file() {
    let err = Dashboard::load(&["/nonexistent/weather.csv"]).unwrap_err();
    assert!(matches!(err, BivarError::Io { .. }));
}

#[test]
fn test_header_only_sources() {
    let files: Vec<_> = (0..3).map(|_| create_test_file("x\ty\tz\n")).collect();
    let paths: Vec<_> = files.iter().map(|f| f.path()).collect();

    let dashboard = Dashboard::load(&paths).unwrap();
    assert_eq!(dashboard.columns(), vec!["x", "y", "z"]);
    assert_eq!(dashboard.store().row_count(), 0);
}

#[test]
fn test_explicit_delimiter() {
    let file = create_test_file("city;temp\nHanoi;18\nHue;22\n");
    let config = DashboardConfig {
        parser: ParserConfig {
            delimiter: Some(b';'),
            ..ParserConfig::default()
        },
        ..DashboardConfig::default()
    };

    let dashboard = Dashboard::load_with_config(&[file.path()], config).unwrap();
    assert_eq!(dashboard.columns(), vec!["city", "temp"]);
    assert_eq!(dashboard.sources()[0].format, "csv-semicolon");
}

// =============================================================================
// Statistics selection
// =============================================================================

#[test]
fn test_quantitative_pair() {
    let (dashboard, _files) = weather_dashboard();
    let report = dashboard.summary("Temperature", "Humidity").unwrap();

    assert_eq!(report.inference.kind(), TestKind::PearsonCorrelation);
    let r = report.pearson_correlation().unwrap();
    assert!((-1.0..=1.0).contains(&r));
    assert!(r < 0.0, "warmer cities are drier in this sample");
    assert!(report.var1.mean.is_some());
    assert!(report.var2.variance.unwrap() > 0.0);
}

#[test]
fn test_categorical_pair() {
    let (dashboard, _files) = weather_dashboard();
    let report = dashboard.summary("City", "Condition").unwrap();

    let chi = report.chi_square().unwrap();
    assert_eq!(chi.dof, 4);
    assert!(chi.statistic > 0.0);
    assert!((0.0..=1.0).contains(&chi.p_value));
    assert!(report.pearson_correlation().is_none());
    assert!(report.anova().is_none());
}

#[test]
fn test_mixed_pair() {
    let (dashboard, _files) = weather_dashboard();
    let report = dashboard.summary("City", "Temperature").unwrap();

    let anova = report.anova().unwrap();
    assert_eq!(anova.df_between, 2);
    assert_eq!(anova.df_within, 6);
    assert!(anova.f_statistic > 100.0);
    assert!(anova.p_value < 0.001);
}

#[test]
fn test_unknown_column() {
    let (dashboard, _files) = weather_dashboard();
    let err = dashboard.summary("Wind", "City").unwrap_err();
    assert!(matches!(err, BivarError::InvalidColumn(ref name) if name == "Wind"));
}

#[test]
fn test_single_city_makes_anova_undefined() {
    let file = create_test_file("City,Temperature\nHue,21\nHue,22\nHue,23\n");
    let dashboard = Dashboard::load(&[file.path()]).unwrap();

    let report = dashboard.summary("Temperature", "City").unwrap();
    assert_eq!(report.inference, Inference::Anova(None));
    assert!(report.note.is_some());
    assert_eq!(report.var1.mean, Some(22.0));
    assert_eq!(report.var1.variance, Some(1.0));
}

// =============================================================================
// Dashboard view
// =============================================================================

#[test]
fn test_view_contains_charts_and_table() {
    let (dashboard, _files) = weather_dashboard();
    let view = dashboard.view("Temperature", "City").unwrap();

    assert_eq!(view.histogram_var1.bins.len(), 30);
    assert_eq!(view.histogram_var1.total(), 9);
    assert_eq!(view.histogram_var2.bins.len(), 3);
    assert_eq!(view.scatter.points.len(), 9);
    assert_eq!(view.scatter.points[0].y, ChartValue::Text("Hanoi".to_string()));

    let anova_row = view
        .summary_table
        .iter()
        .find(|row| row.metric() == "ANOVA Test")
        .unwrap();
    match anova_row {
        ReportRow::Spanning { value, .. } => assert!(value.starts_with("F-stat = ")),
        other => panic!("unexpected row: {other:?}"),
    }
}

#[test]
fn test_view_defaults_to_first_columns() {
    let (dashboard, _files) = weather_dashboard();
    let view = dashboard.view_or_default(None, Some("Temperature")).unwrap();
    assert_eq!(view.var1, "Date");
    assert_eq!(view.var2, "Temperature");
}

#[test]
fn test_view_serializes_to_json() {
    let (dashboard, _files) = weather_dashboard();
    let view = dashboard.view("City", "City").unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["report"]["sample_count"], 9);
    assert_eq!(json["report"]["inference"]["test"], "chi_square");
    assert_eq!(json["summary_table"][0]["metric"], "Total Samples");
    assert_eq!(json["scatter"]["points"][0]["x"], "Hanoi");
}
