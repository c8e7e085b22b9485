//! End-to-end scenarios through `service::handle`.

use csv_sort_bench::benchmark::{run_benchmark, TimingUnit};
use csv_sort_bench::column::ColumnRef;
use csv_sort_bench::csv_table::CsvTable;
use csv_sort_bench::extract::{extract, ExtractionPolicy};
use csv_sort_bench::request::Route;
use csv_sort_bench::service::{handle, ServiceSettings, StatusClass};
use csv_sort_bench::SortAlgorithm;
use rand::Rng;
use serde_json::Value;

fn settings() -> ServiceSettings {
    ServiceSettings::default()
}

fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("reply is valid JSON")
}

#[test]
fn scenario_a_named_column_is_extracted_and_sorted() {
    let table = CsvTable::parse("a,b\n1,2\n3,4").unwrap();
    let column = ColumnRef::Name("b".into());
    let position = column.resolve(&table).unwrap();
    let series = extract(&table, position, ExtractionPolicy::Strict, "b").unwrap();
    assert_eq!(series, vec![2.0, 4.0]);

    let report = run_benchmark(&series, TimingUnit::Nanos, true);
    for result in &report.results {
        assert_eq!(result.sorted.as_deref(), Some(&[2.0, 4.0][..]));
    }

    let reply = handle(Route::BenchmarkColumn, "a,b\n1,2\n3,4###b", &settings());
    assert_eq!(reply.status, StatusClass::Success);
    assert_eq!(reply.content_type, "application/json");
    let body = json(&reply.body);
    assert_eq!(body["executionTimes"].as_object().unwrap().len(), 5);
}

#[test]
fn scenario_b_missing_column_lists_available() {
    let reply = handle(Route::BenchmarkColumn, "a,b\n1,2###z", &settings());
    assert_eq!(reply.status, StatusClass::ClientError);

    let body = json(&reply.body);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("'z'"));
    assert!(message.contains("[a, b]"));
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[test]
fn scenario_c_strict_rejects_non_numeric_cell() {
    let reply = handle(Route::BenchmarkColumn, "a,b\n1,2\n3,abc###b", &settings());
    assert_eq!(reply.status, StatusClass::ClientError);
    assert_eq!(json(&reply.body)["error"], "Non-numeric value found: 'abc'");
}

#[test]
fn scenario_d_lenient_short_rows_give_empty_series() {
    let reply = handle(Route::ExtractColumn, "a,b\n1,2\n3,4###5", &settings());
    assert_eq!(reply.status, StatusClass::Success);
    assert_eq!(reply.body, r#"{"column":5,"values":[]}"#);

    let reply = handle(Route::ExtractColumn, "a,b,c\n1,x,3\n4\n5,6###1", &settings());
    assert_eq!(reply.body, r#"{"column":1,"values":[6.0]}"#);
}

#[test]
fn scenario_e_benchmark_on_small_series() {
    let series = vec![5.0, 3.0, 4.0, 1.0, 2.0];
    let report = run_benchmark(&series, TimingUnit::Nanos, true);
    assert_eq!(report.results.len(), 5);
    for result in &report.results {
        assert_eq!(result.sorted.as_deref(), Some(&[1.0, 2.0, 3.0, 4.0, 5.0][..]));
    }

    let reply = handle(Route::SortValues, "all###0###[5,3,4,1,2]", &settings());
    assert_eq!(reply.status, StatusClass::Success);
    let body = json(&reply.body);
    let times = body["executionTimes"].as_object().unwrap();
    // Parsed maps may reorder keys; order is checked on the raw body elsewhere
    let mut names: Vec<&str> = times.keys().map(String::as_str).collect();
    names.sort_unstable();
    let mut expected: Vec<&str> = SortAlgorithm::ALL.iter().map(|a| a.name()).collect();
    expected.sort_unstable();
    assert_eq!(names, expected);
    assert!(times.values().all(|v| v.as_u64().is_some()));

    let min = times.values().filter_map(Value::as_u64).min().unwrap();
    assert_eq!(body["bestTime"].as_u64(), Some(min));
}

#[test]
fn benchmark_body_keeps_declaration_order() {
    let reply = handle(Route::SortValues, "benchmark###0###[3, 1, 2]", &settings());
    let positions: Vec<usize> = SortAlgorithm::ALL
        .iter()
        .map(|a| reply.body.find(a.name()).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let best = reply.body.find("bestAlgorithm").unwrap();
    assert!(positions.iter().all(|&p| p < best));
    assert!(reply.body.ends_with('}'));
    assert!(reply.body.starts_with(r#"{"executionTimes":{"Insertion Sort":"#));
}

#[test]
fn direct_sort_returns_sorted_values() {
    let reply = handle(Route::SortValues, "heap###3###[2.5, -1, bad, 10]", &settings());
    assert_eq!(reply.status, StatusClass::Success);
    let body = json(&reply.body);
    assert_eq!(body["algorithm"], "Heap Sort");
    assert_eq!(body["column"], 3);
    assert_eq!(body["sortedValues"], serde_json::json!([-1.0, 2.5, 10.0]));
    assert!(body["executionTime"].as_u64().is_some());
}

#[test]
fn malformed_requests_are_client_errors() {
    for (route, body) in [
        (Route::BenchmarkColumn, "no separator here"),
        (Route::BenchmarkColumn, "just,a,header###a"),
        (Route::ExtractColumn, "a\n1###first"),
        (Route::SortValues, "bogo###0###[1]"),
    ] {
        let reply = handle(route, body, &settings());
        assert_eq!(reply.status, StatusClass::ClientError, "{body:?}");
        assert!(json(&reply.body)["error"].is_string());
    }
}

#[test]
fn empty_strict_column_is_an_error() {
    let reply = handle(Route::BenchmarkColumn, "a,b\n1\n2###b", &settings());
    assert_eq!(reply.status, StatusClass::ClientError);
    assert_eq!(json(&reply.body)["error"], "No numeric data found in column: b");
}

#[test]
fn all_algorithms_agree_on_random_csv_columns() {
    let mut rng = rand::thread_rng();
    let mut csv = String::from("id,value\n");
    for i in 0..400 {
        csv.push_str(&format!("{},{:.4}\n", i, rng.gen_range(-1000.0..1000.0)));
    }

    let table = CsvTable::parse(&csv).unwrap();
    let position = ColumnRef::Name("VALUE".into()).resolve(&table).unwrap();
    let series = extract(&table, position, ExtractionPolicy::Strict, "VALUE").unwrap();
    assert_eq!(series.len(), 400);

    let report = run_benchmark(&series, TimingUnit::Nanos, true);
    let mut expected = series.clone();
    expected.sort_by(f64::total_cmp);
    for result in &report.results {
        assert_eq!(result.sorted.as_ref(), Some(&expected), "{}", result.algorithm);
    }

    // Sorting sorted input changes nothing
    let again = run_benchmark(&expected, TimingUnit::Nanos, true);
    assert!(again.results.iter().all(|r| r.sorted.as_ref() == Some(&expected)));
}
