// SPDX-License-Identifier: MPL-2.0
//! REST Countries client, statistics cache and tile downloads against a
//! local mock server.

use chrono::{Duration as ChronoDuration, Utc};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;
use tempfile::tempdir;
use wonder_atlas::error::Error;
use wonder_atlas::map::{download, fetch_tile, TileId, TileRequest, TileStyle};
use wonder_atlas::restcountries::{
    load_statistics, CountryName, CountrySummary, RestCountriesClient, StatsCache,
};

fn client(server: &MockServer) -> RestCountriesClient {
    RestCountriesClient::new(&server.base_url(), Duration::from_secs(5)).expect("valid base url")
}

fn summary(name: &str, population: u64) -> CountrySummary {
    CountrySummary {
        name: CountryName {
            common: name.to_string(),
            official: format!("Republic of {name}"),
        },
        population: Some(population),
        ..CountrySummary::default()
    }
}

#[tokio::test]
async fn fetch_all_parses_summaries() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/all")
                .query_param_exists("fields");
            then.status(200).json_body(json!([
                {
                    "name": {"common": "Peru", "official": "Republic of Peru"},
                    "cca3": "PER",
                    "population": 32971846,
                    "area": 1285216.0,
                    "continents": ["South America"]
                },
                {
                    "name": {"common": "Antarctica", "official": "Antarctica"},
                    "continents": ["Antarctica"]
                }
            ]));
        })
        .await;

    let countries = client(&server).fetch_all().await.expect("statistics");
    mock.assert_async().await;

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name.common, "Peru");
    assert_eq!(countries[0].cca3.as_deref(), Some("PER"));
    assert_eq!(countries[0].population, Some(32_971_846));
    assert_eq!(countries[1].population, None);
}

#[tokio::test]
async fn fetch_by_name_keeps_currency_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/name/Panama")
                .query_param("fullText", "true");
            then.status(200).json_body(json!([{
                "name": {"common": "Panama", "official": "Republic of Panama"},
                "capital": ["Panama City"],
                "region": "Americas",
                "subregion": "Central America",
                "population": 4314768,
                "area": 75417.0,
                "currencies": {
                    "PAB": {"name": "Panamanian balboa", "symbol": "B/."},
                    "USD": {"name": "United States dollar", "symbol": "$"}
                },
                "languages": {"spa": "Spanish"},
                "flag": "🇵🇦"
            }]));
        })
        .await;

    let details = client(&server)
        .fetch_by_name("Panama")
        .await
        .expect("details");

    assert_eq!(details.name.official, "Republic of Panama");
    assert_eq!(details.capital, vec!["Panama City".to_string()]);
    let codes: Vec<&str> = details.currencies.iter().map(|(code, _)| code.as_str()).collect();
    assert_eq!(codes, vec!["PAB", "USD"]);
    assert_eq!(details.currency().map(|c| c.name.as_str()), Some("Panamanian balboa"));
    assert_eq!(details.language(), Some("Spanish"));
}

#[tokio::test]
async fn unknown_country_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/name/Atlantis");
            then.status(404)
                .json_body(json!({"status": 404, "message": "Not Found"}));
        })
        .await;

    let result = client(&server).fetch_by_name("Atlantis").await;
    assert_eq!(result, Err(Error::CountryNotFound("Atlantis".to_string())));
}

#[tokio::test]
async fn empty_match_list_is_not_found() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/name/Atlantis")
                .query_param("fullText", "true");
            then.status(200).json_body(json!([]));
        })
        .await;

    let result = client(&server).fetch_by_name("Atlantis").await;
    mock.assert_async().await;
    assert_eq!(result, Err(Error::CountryNotFound("Atlantis".to_string())));
}

#[tokio::test]
async fn server_errors_carry_the_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/all");
            then.status(503);
        })
        .await;

    let result = client(&server).fetch_all().await;
    assert_eq!(result, Err(Error::Http { status: 503 }));
}

#[tokio::test]
async fn fresh_cache_skips_the_network() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/all");
            then.status(200).json_body(json!([]));
        })
        .await;

    let dir = tempdir().expect("temp dir");
    let cache = StatsCache::in_dir(dir.path(), 24);
    cache
        .write(&[summary("Chile", 19_116_209)], Utc::now())
        .expect("write cache");

    let countries = load_statistics(&client(&server), Some(&cache))
        .await
        .expect("statistics");
    assert_eq!(countries, vec![summary("Chile", 19_116_209)]);
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn stale_cache_is_refreshed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/all");
            then.status(200).json_body(json!([
                {"name": {"common": "Chile", "official": "Republic of Chile"}, "population": 20000000}
            ]));
        })
        .await;

    let dir = tempdir().expect("temp dir");
    let cache = StatsCache::in_dir(dir.path(), 24);
    cache
        .write(&[summary("Chile", 1)], Utc::now() - ChronoDuration::hours(48))
        .expect("write cache");

    let countries = load_statistics(&client(&server), Some(&cache))
        .await
        .expect("statistics");
    assert_eq!(countries[0].population, Some(20_000_000));

    let rewritten = cache.read().expect("cache rewritten");
    assert_eq!(rewritten.countries[0].population, Some(20_000_000));
}

#[tokio::test]
async fn stale_cache_covers_network_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/all");
            then.status(500);
        })
        .await;

    let dir = tempdir().expect("temp dir");
    let cache = StatsCache::in_dir(dir.path(), 24);
    cache
        .write(&[summary("Chile", 1)], Utc::now() - ChronoDuration::hours(48))
        .expect("write cache");

    let countries = load_statistics(&client(&server), Some(&cache))
        .await
        .expect("stale statistics");
    assert_eq!(countries, vec![summary("Chile", 1)]);
}

#[tokio::test]
async fn failure_without_cache_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/all");
            then.status(500);
        })
        .await;

    let result = load_statistics(&client(&server), None).await;
    assert_eq!(result, Err(Error::Http { status: 500 }));
}

#[tokio::test]
async fn tiles_are_stored_on_disk_and_reused() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/2/1/1.png");
            then.status(200).body(vec![1_u8, 2, 3, 4]);
        })
        .await;

    let dir = tempdir().expect("temp dir");
    let request = TileRequest {
        style: TileStyle::Light,
        tile: TileId { z: 2, x: 1, y: 1 },
        url: server.url("/2/1/1.png"),
        disk_path: Some(dir.path().join("tiles").join("tile.png")),
    };
    let http = reqwest::Client::new();

    let first = fetch_tile(http.clone(), request.clone())
        .await
        .expect("downloaded tile");
    let second = fetch_tile(http, request).await.expect("cached tile");

    assert_eq!(first, vec![1, 2, 3, 4]);
    assert_eq!(second, first);
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn failed_download_reports_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/missing.jpg");
            then.status(404);
        })
        .await;

    let result = download(&reqwest::Client::new(), &server.url("/missing.jpg")).await;
    assert_eq!(result, Err(Error::Http { status: 404 }));
}
