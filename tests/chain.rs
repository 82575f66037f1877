use httpmock::prelude::*;
use novaposhta_client::{Chain, ChainArgs, Client, Error, response::first_ref};
use serde_json::json;

const API_KEY: &str = "test";
const PATH: &str = "/v2.0/json/";

fn client(server: &MockServer) -> Client {
    Client::builder(API_KEY)
        .api_endpoint(server.url(PATH))
        .build()
        .unwrap()
}

fn settlement_ref(response: &serde_json::Value) -> novaposhta_client::Result<ChainArgs> {
    let settlement = first_ref(response).ok_or(Error::MissingArgument("Ref".into()))?;
    Ok(ChainArgs::new().with("settlement_ref", settlement))
}

#[tokio::test]
async fn settlement_lookup_feeds_street_search() {
    let server = MockServer::start_async().await;
    let settlements = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body(json!({
                "apiKey": API_KEY,
                "modelName": "Address",
                "calledMethod": "searchSettlements",
                "methodProperties": {"CityName": "Львів", "Limit": "1", "Page": "1"}
            }));
            then.status(200).json_body(json!({
                "success": true,
                "data": [{"Ref": "lviv-ref"}]
            }));
        })
        .await;
    let streets = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body(json!({
                "apiKey": API_KEY,
                "modelName": "Address",
                "calledMethod": "searchSettlementStreets",
                "methodProperties": {
                    "StreetName": "Городоцька",
                    "SettlementRef": "lviv-ref",
                    "Limit": "50"
                }
            }));
            then.status(200)
                .json_body(json!({"success": true, "data": [{"Ref": "street-ref"}]}));
        })
        .await;

    let client = client(&server);
    let client = &client;

    let results = (Chain::new(move |args: ChainArgs| async move {
        client
            .address()
            .search_settlements(args.str("city_name")?, Some(1), None)
            .await
    })
    .arg("city_name", "Львів")
    .prepare_next(settlement_ref)
        | Chain::new(move |args: ChainArgs| async move {
            client
                .address()
                .search_settlement_streets("Городоцька", args.str("settlement_ref")?, None)
                .await
        }))
    .execute()
    .await;

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].next_kwargs,
        Some(ChainArgs::new().with("settlement_ref", "lviv-ref"))
    );
    assert!(results[1].success);
    assert_eq!(results[1].data, Some(json!([{"Ref": "street-ref"}])));
    settlements.assert_async().await;
    streets.assert_async().await;
}

#[tokio::test]
async fn empty_lookup_stops_the_chain() {
    let server = MockServer::start_async().await;
    let lookup = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body_partial(
                r#"{"calledMethod": "searchSettlements"}"#,
            );
            then.status(200).json_body(json!({"success": true, "data": []}));
        })
        .await;
    let streets = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body_partial(
                r#"{"calledMethod": "searchSettlementStreets"}"#,
            );
            then.status(200).json_body(json!({"success": true, "data": []}));
        })
        .await;

    let client = client(&server);
    let client = &client;

    let results = (Chain::new(move |_| client.address().search_settlements("Nowhere", None, None))
        .prepare_next(settlement_ref)
        | Chain::new(move |args: ChainArgs| async move {
            client
                .address()
                .search_settlement_streets("Main", args.str("settlement_ref")?, None)
                .await
        }))
    .execute()
    .await;

    assert_eq!(results.len(), 1);
    assert!(!results[0].success);
    assert_eq!(
        results[0].error.as_deref(),
        Some("missing or invalid argument `Ref`")
    );
    assert_eq!(lookup.hits_async().await, 1);
    assert_eq!(streets.hits_async().await, 0);
}

#[tokio::test]
async fn api_failure_stops_the_chain() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body_partial(
                r#"{"calledMethod": "getAreas"}"#,
            );
            then.status(200).json_body(json!({"success": true, "data": [{"Ref": "area"}]}));
        })
        .await;
    let failing = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body_partial(
                r#"{"calledMethod": "getCounterparties"}"#,
            );
            then.status(200).json_body(json!({
                "success": false,
                "data": [],
                "errors": ["CounterpartyProperty is not specified"]
            }));
        })
        .await;
    let never = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body_partial(
                r#"{"calledMethod": "getCounterpartyContactPersons"}"#,
            );
            then.status(200).json_body(json!({"success": true, "data": []}));
        })
        .await;

    let client = client(&server);
    let client = &client;

    let results = (Chain::new(move |_| client.address().get_areas())
        | Chain::new(move |_| client.counterparty().get_counterparties("", None))
        | Chain::new(move |args: ChainArgs| async move {
            client
                .counterparty()
                .get_counterparty_contact_persons(args.str("counterparty_ref")?, None)
                .await
        }))
    .execute()
    .await;

    assert_eq!(results.len(), 2);
    assert!(!results[1].success);
    assert_eq!(
        results[1].error.as_deref(),
        Some("CounterpartyProperty is not specified")
    );
    assert_eq!(failing.hits_async().await, 1);
    assert_eq!(never.hits_async().await, 0);
}
