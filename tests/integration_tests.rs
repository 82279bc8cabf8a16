use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use windrose_runway::analyzers::{ColumnResolver, WindAnalyzer};
use windrose_runway::models::{ColumnAssignment, CompassDirection};
use windrose_runway::readers::{sample_dataset, CsvReader};
use windrose_runway::writers::{ReportWriter, WindReport};
use windrose_runway::AnalysisError;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_sample_dataset_analysis() {
    let analysis = WindAnalyzer::new()
        .analyze_dataset(&sample_dataset())
        .unwrap();

    assert_eq!(analysis.columns, ColumnAssignment::new("direccion", "velocidad"));
    assert_eq!(analysis.observations_used, 16);
    assert_eq!(analysis.records_skipped, 0);

    let histogram = &analysis.histogram;
    assert_eq!(histogram.total(), 16);
    assert_eq!(histogram.counts_for(CompassDirection::N), &[0, 1, 1, 0, 0]);
    assert_eq!(histogram.counts_for(CompassDirection::E), &[0, 0, 1, 1, 0]);
    assert_eq!(histogram.counts_for(CompassDirection::Se), &[0, 1, 0, 0, 1]);
    assert_eq!(histogram.counts_for(CompassDirection::Nw), &[1, 1, 0, 0, 0]);
    assert_eq!(histogram.direction_total(CompassDirection::Nne), 0);

    let runway = analysis.runway.expect("sample data has a prevailing axis");
    assert_eq!(runway.optimal_degrees, 200.0);
    assert_eq!(runway.designation(), "20/02");
}

#[test]
fn test_csv_file_with_spanish_headers() {
    let file = write_csv(
        "Dirección Viento,Velocidad (km/h),Fecha\n\
         W,12,2024-03-01\n\
         270,8,2024-03-01\n\
         invalid,30,2024-03-01\n\
         WNW,,2024-03-01\n\
         w,21 km/h,2024-03-02\n",
    );

    let dataset = CsvReader::new().read_dataset(file.path(), None).unwrap();
    let analysis = WindAnalyzer::new().analyze_dataset(&dataset).unwrap();

    assert_eq!(analysis.columns.direction_field, "Dirección Viento");
    assert_eq!(analysis.columns.speed_field, "Velocidad (km/h)");
    assert_eq!(analysis.total_records, 5);
    assert_eq!(analysis.observations_used, 3);
    assert_eq!(analysis.histogram.total(), 3);
    assert_eq!(analysis.histogram.counts_for(CompassDirection::W), &[0, 1, 1, 0, 1]);

    let runway = analysis.runway.unwrap();
    assert_eq!(runway.runway_number, 36);
    assert_eq!(runway.reciprocal_number, 18);
}

#[test]
fn test_positional_columns_used_without_matching_names() {
    let file = write_csv("a,b\n90,6\n90,11\n");

    let dataset = CsvReader::new().read_dataset(file.path(), None).unwrap();
    let analysis = WindAnalyzer::new().analyze_dataset(&dataset).unwrap();

    assert_eq!(analysis.columns, ColumnAssignment::new("a", "b"));
    assert_eq!(analysis.runway.map(|r| r.designation()), Some("18/36".to_string()));
}

#[test]
fn test_single_column_file_is_rejected() {
    let file = write_csv("onlyone\n5\n");

    let dataset = CsvReader::new().read_dataset(file.path(), None).unwrap();
    let result = WindAnalyzer::new().analyze_dataset(&dataset);

    assert!(matches!(
        result,
        Err(AnalysisError::InsufficientColumns { found: 1 })
    ));
}

#[test]
fn test_header_only_file_has_no_runway() {
    let file = write_csv("direction,speed\n");

    let dataset = CsvReader::new().read_dataset(file.path(), None).unwrap();
    let analysis = WindAnalyzer::new().analyze_dataset(&dataset).unwrap();

    assert_eq!(analysis.total_records, 0);
    assert_eq!(analysis.histogram.total(), 0);
    assert!(analysis.runway.is_none());
}

#[test]
fn test_explicit_columns_override_heuristics() {
    let file = write_csv("dir_raw,gust,wind_dir,vel\nxx,30,E,4\n");

    let dataset = CsvReader::new().read_dataset(file.path(), None).unwrap();
    let resolver = ColumnResolver::new().with_direction_column(Some("wind_dir".to_string()));
    let analysis = WindAnalyzer::with_resolver(resolver)
        .analyze_dataset(&dataset)
        .unwrap();

    assert_eq!(analysis.columns, ColumnAssignment::new("wind_dir", "vel"));
    assert_eq!(analysis.histogram.count(CompassDirection::E, 0), 1);
}

#[test]
fn test_report_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("wind-rose.json");

    let analysis = WindAnalyzer::new()
        .analyze_dataset(&sample_dataset())
        .unwrap();
    let report = WindReport::new("sample data", analysis);

    let writer = ReportWriter::new();
    writer.write_report(&report, &output_path).unwrap();
    assert!(output_path.exists());

    let restored = writer.read_report(&output_path).unwrap();
    assert_eq!(restored.chart.datasets.len(), 5);
    assert_eq!(restored.chart.directions.len(), 16);
    assert_eq!(restored, report);
}
