use f1_pickem::{ErgastClient, FetchContext, PickemError, RaceDataClient, RaceId};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

const DRIVERS: [(&str, &str); 20] = [
    ("Max", "Verstappen"),
    ("Sergio", "Pérez"),
    ("Charles", "Leclerc"),
    ("Carlos", "Sainz"),
    ("George", "Russell"),
    ("Lewis", "Hamilton"),
    ("Lando", "Norris"),
    ("Esteban", "Ocon"),
    ("Fernando", "Alonso"),
    ("Valtteri", "Bottas"),
    ("Daniel", "Ricciardo"),
    ("Sebastian", "Vettel"),
    ("Kevin", "Magnussen"),
    ("Pierre", "Gasly"),
    ("Lance", "Stroll"),
    ("Mick", "Schumacher"),
    ("Yuki", "Tsunoda"),
    ("Guanyu", "Zhou"),
    ("Alexander", "Albon"),
    ("Nicholas", "Latifi"),
];

fn schedule_body(limit: &str, total: &str, races: Vec<Value>) -> Value {
    json!({
        "MRData": {
            "xmlns": "http://ergast.com/mrd/1.5",
            "series": "f1",
            "url": "http://ergast.com/api/f1/2022.json",
            "limit": limit,
            "offset": "0",
            "total": total,
            "RaceTable": { "season": "2022", "Races": races }
        }
    })
}

fn race_entry(round: &str, name: &str, date: &str, time: &str) -> Value {
    json!({
        "season": "2022",
        "round": round,
        "url": "http://en.wikipedia.org/wiki/2022_Grand_Prix",
        "raceName": name,
        "Circuit": {
            "circuitId": "bahrain",
            "url": "http://en.wikipedia.org/wiki/Bahrain_International_Circuit",
            "circuitName": "Bahrain International Circuit",
            "Location": { "lat": "26.0325", "long": "50.5106", "locality": "Sakhir", "country": "Bahrain" }
        },
        "date": date,
        "time": time,
        "FirstPractice": { "date": "2022-03-18", "time": "12:00:00Z" },
        "Qualifying": { "date": "2022-03-19", "time": "15:00:00Z" }
    })
}

/// Finishing order given as indexes into `DRIVERS`, listed by position.
fn results_body(order: &[usize]) -> Value {
    let results: Vec<Value> = order
        .iter()
        .enumerate()
        .map(|(i, &driver)| {
            let (given, family) = DRIVERS[driver];
            json!({
                "number": (driver + 1).to_string(),
                "position": (i + 1).to_string(),
                "positionText": (i + 1).to_string(),
                "points": "0",
                "Driver": {
                    "driverId": family.to_lowercase(),
                    "givenName": given,
                    "familyName": family,
                    "nationality": "Unknown"
                },
                "Constructor": { "constructorId": "team", "name": "Team", "nationality": "Unknown" },
                "grid": "1",
                "laps": "57",
                "status": "Finished"
            })
        })
        .collect();

    json!({
        "MRData": {
            "limit": "30",
            "offset": "0",
            "total": results.len().to_string(),
            "RaceTable": {
                "season": "2022",
                "round": "1",
                "Races": [{
                    "season": "2022",
                    "round": "1",
                    "raceName": "Bahrain Grand Prix",
                    "date": "2022-03-20",
                    "time": "15:00:00Z",
                    "Results": results
                }]
            }
        }
    })
}

#[tokio::test]
async fn test_get_races_end_to_end() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(schedule_body(
                    "30",
                    "2",
                    vec![
                        race_entry("1", "Bahrain Grand Prix", "2022-03-20", "15:00:00Z"),
                        race_entry("2", "Saudi Arabian Grand Prix", "2022-03-27", "17:00:00Z"),
                    ],
                ));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let races = assert_ok!(client.get_races(&FetchContext::background(), "2022").await);
    api_mock.assert_async().await;

    assert_eq!(races.len(), 2);
    assert_eq!(races[0].race_name, "Bahrain Grand Prix");
    assert_eq!(races[0].race_id, RaceId::new("2022", "1"));
    assert_eq!(races[0].start_time.to_rfc3339(), "2022-03-20T15:00:00+00:00");
    assert_eq!(races[1].race_name, "Saudi Arabian Grand Prix");
    assert_eq!(races[1].race_id, RaceId::new("2022", "2"));
}

#[tokio::test]
async fn test_current_season_alias_uses_entry_season() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/current.json");
            then.status(200).json_body(schedule_body(
                "30",
                "1",
                vec![race_entry("1", "Bahrain Grand Prix", "2022-03-20", "15:00:00Z")],
            ));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let races = assert_ok!(client.get_races(&FetchContext::background(), "current").await);
    api_mock.assert_async().await;

    assert_eq!(races.len(), 1);
    assert_eq!(races[0].season, "2022");
    assert_eq!(races[0].race_id, RaceId::new("2022", "1"));
}

#[tokio::test]
async fn test_get_races_unpublished_schedule_is_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2030.json");
            then.status(200).json_body(schedule_body("30", "0", vec![]));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let races = assert_ok!(client.get_races(&FetchContext::background(), "2030").await);
    assert!(races.is_empty());
}

#[tokio::test]
async fn test_get_races_paginated_schedule_is_rejected() {
    let server = MockServer::start_async().await;
    let races: Vec<Value> = (1..=30)
        .map(|round| race_entry(&round.to_string(), "Grand Prix", "2022-03-20", "15:00:00Z"))
        .collect();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022.json");
            then.status(200).json_body(schedule_body("30", "31", races));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let err = assert_err!(client.get_races(&FetchContext::background(), "2022").await);
    assert!(matches!(
        err,
        PickemError::UnsupportedPagination {
            total: 31,
            limit: 30
        }
    ));
}

#[tokio::test]
async fn test_non_success_status_carries_status_code() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022/1/results.json");
            then.status(503);
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let err = assert_err!(
        client
            .get_race_results(&FetchContext::background(), "2022", "1")
            .await
    );
    api_mock.assert_async().await;

    match err {
        PickemError::Upstream { status, url } => {
            assert_eq!(status, 503);
            assert!(url.ends_with("/api/f1/2022/1/results.json"));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022.json");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022/1/results.json");
            then.status(200).json_body(json!({ "MRData": { "RaceTable": {} } }));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let ctx = FetchContext::background();

    let err = assert_err!(client.get_races(&ctx, "2022").await);
    assert!(matches!(err, PickemError::Decode(_)));

    let err = assert_err!(client.get_race_results(&ctx, "2022", "1").await);
    assert!(matches!(err, PickemError::Decode(_)));
}

#[tokio::test]
async fn test_invalid_utf8_body_is_decode_error() {
    let mut body = br#"{"MRData":{"limit":"30","total":"0","series":""#.to_vec();
    body.push(0xff);
    body.extend_from_slice(br#"","RaceTable":{"Races":[]}}}"#);

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(body);
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let err = assert_err!(client.get_races(&FetchContext::background(), "2022").await);
    assert!(matches!(err, PickemError::Decode(_)));
}

#[tokio::test]
async fn test_get_race_results_end_to_end() {
    let server = MockServer::start_async().await;
    let order: Vec<usize> = (0..20).collect();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022/1/results.json");
            then.status(200).json_body(results_body(&order));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let results = assert_ok!(
        client
            .get_race_results(&FetchContext::background(), "2022", "1")
            .await
    )
    .expect("results are published");

    assert_eq!(results.season, "2022");
    assert_eq!(results.race_number, "1");
    assert_eq!(results.race_date.to_string(), "2022-03-20");
    assert_eq!(results.results.len(), 20);
    assert_eq!(results.results[0], "Max Verstappen");
    assert_eq!(results.results[5], "Lewis Hamilton");
    assert_eq!(results.results[19], "Nicholas Latifi");
}

#[tokio::test]
async fn test_get_race_results_partial_results_rejected() {
    let server = MockServer::start_async().await;
    let order: Vec<usize> = (0..18).collect();
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022/1/results.json");
            then.status(200).json_body(results_body(&order));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let err = assert_err!(
        client
            .get_race_results(&FetchContext::background(), "2022", "1")
            .await
    );
    assert!(matches!(err, PickemError::Validation { .. }));
}

#[tokio::test]
async fn test_get_race_results_before_race_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022/22/results.json");
            then.status(200).json_body(json!({
                "MRData": {
                    "limit": "30",
                    "offset": "0",
                    "total": "0",
                    "RaceTable": { "season": "2022", "round": "22", "Races": [] }
                }
            }));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let results = assert_ok!(
        client
            .get_race_results(&FetchContext::background(), "2022", "22")
            .await
    );
    assert!(results.is_none());
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022.json");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(schedule_body("30", "0", vec![]));
        })
        .await;

    let client = ErgastClient::new(&server.base_url())
        .unwrap()
        .with_default_timeout(Some(Duration::from_millis(100)));

    let started = std::time::Instant::now();
    let err = assert_err!(client.get_races(&FetchContext::background(), "2022").await);
    assert!(matches!(err, PickemError::TimedOut(_)));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_cancelled_request_aborts_promptly() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/f1/2022.json");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(schedule_body("30", "0", vec![]));
        })
        .await;

    let client = ErgastClient::new(&server.base_url()).unwrap();
    let (handle, ctx) = FetchContext::cancellable();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
    });

    let started = std::time::Instant::now();
    let err = assert_err!(client.get_races(&ctx, "2022").await);
    assert!(matches!(err, PickemError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(4));
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_error() {
    // nothing listens on port 9 (discard) in the test environment
    let client = ErgastClient::new("http://127.0.0.1:9").unwrap();
    let err = assert_err!(client.get_races(&FetchContext::background(), "2022").await);
    assert!(matches!(err, PickemError::Transport(_)));
}
