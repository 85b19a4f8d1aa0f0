pub mod common;

use std::collections::BTreeSet;

use axum::http::StatusCode;
use serde_json::{json, Value};

use query_engine_translation::translation::query::QueryName;
use tests_common::database::{TornadoDatabase, TornadoEvent};
use tornado_dashboard::error::INTERNAL_ERROR_MESSAGE;

fn endpoint(query_name: QueryName) -> String {
    format!("/api/v1.0/{}", query_name.endpoint())
}

async fn get_rows(client: &axum_test_helper::TestClient, query_name: QueryName) -> Vec<Value> {
    let response = client.get(&endpoint(query_name)).send().await;
    assert_eq!(response.status(), StatusCode::OK, "{query_name}");
    response.json().await
}

#[tokio::test]
async fn summary_sums_one_year_and_state() {
    let database = TornadoDatabase::with_events(&[
        TornadoEvent::new(2011, 4, "AL").casualties(5, 10),
        TornadoEvent::new(2011, 4, "AL").casualties(3, 2),
    ])
    .await
    .unwrap();
    let client = common::client_for(&database).await;

    let response = client.get("/api/v1.0/table").send().await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    // columns come out in their documented order
    similar_asserts::assert_eq!(
        response.text().await,
        r#"[{"year":2011,"state":"AL","total_fatalities":8,"total_injuries":12,"total_tornadoes":2}]"#
    );
}

#[tokio::test]
async fn every_endpoint_returns_its_columns() {
    let database = TornadoDatabase::with_events(&common::sample_events())
        .await
        .unwrap();
    let client = common::client_for(&database).await;

    for (query_name, expected_rows) in [
        (QueryName::SummaryByYearState, 4),
        (QueryName::YearlyTrend, 3),
        (QueryName::StateYearCounts, 4),
        (QueryName::MagnitudeTimeHistogram, 4),
        (QueryName::MagnitudeTimeSeries, 5),
        (QueryName::MagnitudeSizeStats, 4),
        (QueryName::MagnitudeFatalityAvg, 4),
        (QueryName::EventGeolocation, 5),
    ] {
        let rows = get_rows(&client, query_name).await;
        assert_eq!(rows.len(), expected_rows, "{query_name}");

        let expected_columns: BTreeSet<&str> =
            query_name.output_columns().iter().copied().collect();
        for row in &rows {
            let columns: BTreeSet<&str> = row
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect();
            assert_eq!(columns, expected_columns, "{query_name}");
        }
    }
}

#[tokio::test]
async fn yearly_trend_is_ordered_by_year() {
    let database = TornadoDatabase::with_events(&common::sample_events())
        .await
        .unwrap();
    let client = common::client_for(&database).await;

    let rows = get_rows(&client, QueryName::YearlyTrend).await;

    similar_asserts::assert_eq!(
        Value::Array(rows),
        json!([
            { "year": 2010, "tornado_count": 1, "fatalities": 1 },
            { "year": 2011, "tornado_count": 3, "fatalities": 8 },
            { "year": 2012, "tornado_count": 1, "fatalities": null },
        ])
    );
}

#[tokio::test]
async fn magnitude_averages_are_ordered_with_unknown_magnitude_first() {
    let database = TornadoDatabase::with_events(&common::sample_events())
        .await
        .unwrap();
    let client = common::client_for(&database).await;

    let size_stats = get_rows(&client, QueryName::MagnitudeSizeStats).await;
    let fatality_avg = get_rows(&client, QueryName::MagnitudeFatalityAvg).await;

    similar_asserts::assert_eq!(
        Value::Array(size_stats),
        json!([
            { "tornado_magnitude": null, "avg_length": 1.0, "avg_width": 20.0 },
            { "tornado_magnitude": 1, "avg_length": 2.0, "avg_width": 25.0 },
            { "tornado_magnitude": 3, "avg_length": 4.0, "avg_width": 40.0 },
            { "tornado_magnitude": 4, "avg_length": 10.0, "avg_width": 100.0 },
        ])
    );
    similar_asserts::assert_eq!(
        Value::Array(fatality_avg),
        json!([
            { "tornado_magnitude": null, "avg_fatalities": 0.0 },
            { "tornado_magnitude": 1, "avg_fatalities": null },
            { "tornado_magnitude": 3, "avg_fatalities": 2.0 },
            { "tornado_magnitude": 4, "avg_fatalities": 5.0 },
        ])
    );
}

#[tokio::test]
async fn time_series_splits_what_the_histogram_counts_together() {
    let database = TornadoDatabase::with_events(&common::sample_events())
        .await
        .unwrap();
    let client = common::client_for(&database).await;

    let count_of = |rows: &[Value], year: i64, month: i64| -> Vec<i64> {
        let mut counts: Vec<i64> = rows
            .iter()
            .filter(|row| row["year"] == year && row["month"] == month)
            .map(|row| row["tornado_count"].as_i64().unwrap())
            .collect();
        counts.sort_unstable();
        counts
    };

    let histogram = get_rows(&client, QueryName::MagnitudeTimeHistogram).await;
    let series = get_rows(&client, QueryName::MagnitudeTimeSeries).await;

    assert_eq!(count_of(&histogram, 2011, 4), vec![2]);
    assert_eq!(count_of(&series, 2011, 4), vec![1, 1]);
    let unknown: Vec<&Value> = series
        .iter()
        .filter(|row| row["tornado_magnitude"].is_null())
        .collect();
    assert_eq!(
        unknown,
        vec![&json!({ "month": 5, "year": 2011, "tornado_magnitude": null, "tornado_count": 1 })]
    );
}

#[tokio::test]
async fn event_geolocation_projects_every_row() {
    let database = TornadoDatabase::with_events(&[TornadoEvent::new(2011, 4, "AL")
        .magnitude(4)
        .start(33.0, -87.5)])
    .await
    .unwrap();
    let client = common::client_for(&database).await;

    let rows = get_rows(&client, QueryName::EventGeolocation).await;

    similar_asserts::assert_eq!(
        Value::Array(rows),
        json!([{
            "year": 2011,
            "tornado_magnitude": 4,
            "start_latitude": 33.0,
            "start_longitude": -87.5,
            "state": "AL",
        }])
    );
}

#[tokio::test]
async fn repeated_requests_return_the_same_rows() {
    let database = TornadoDatabase::with_events(&common::sample_events())
        .await
        .unwrap();
    let client = common::client_for(&database).await;

    for query_name in enum_iterator::all::<QueryName>() {
        let first = client.get(&endpoint(query_name)).send().await.text().await;
        let second = client.get(&endpoint(query_name)).send().await.text().await;
        assert_eq!(first, second, "{query_name}");
    }
}

#[tokio::test]
async fn empty_table_gives_empty_arrays() {
    let database = TornadoDatabase::empty().await.unwrap();
    let client = common::client_for(&database).await;

    for query_name in enum_iterator::all::<QueryName>() {
        let response = client.get(&endpoint(query_name)).send().await;
        assert_eq!(response.status(), StatusCode::OK, "{query_name}");
        assert_eq!(response.text().await, "[]", "{query_name}");
    }
}

#[tokio::test]
async fn unreachable_database_gives_an_error_object() {
    let client = common::unreachable_client().await;

    for query_name in enum_iterator::all::<QueryName>() {
        let response = client.get(&endpoint(query_name)).send().await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{query_name}"
        );
        let body: Value = response.json().await;
        assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }), "{query_name}");
    }
}

#[tokio::test]
async fn missing_columns_give_an_error_object() {
    // every query needs either the year or the magnitude
    let database = TornadoDatabase::with_table("CREATE TABLE tornado (month INTEGER, state TEXT)")
        .await
        .unwrap();
    let client = common::client_for(&database).await;

    for query_name in enum_iterator::all::<QueryName>() {
        let response = client.get(&endpoint(query_name)).send().await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{query_name}"
        );
        let body: Value = response.json().await;
        // the cause is logged, never sent
        assert_eq!(body, json!({ "message": INTERNAL_ERROR_MESSAGE }), "{query_name}");
    }
}
