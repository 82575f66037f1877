use httpmock::prelude::*;
use novaposhta_client::models::{Address, Common, ScanSheet};
use novaposhta_client::{Client, Error, Properties};
use serde_json::json;

const API_KEY: &str = "test";
const PATH: &str = "/v2.0/json/";

fn client(server: &MockServer, raise_for_errors: bool) -> Client {
    Client::builder(API_KEY)
        .api_endpoint(server.url(PATH))
        .raise_for_errors(raise_for_errors)
        .build()
        .unwrap()
}

#[tokio::test]
async fn send_posts_full_envelope_and_returns_json() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PATH)
                .header("content-type", "application/json")
                .json_body(json!({
                    "apiKey": API_KEY,
                    "modelName": "test",
                    "calledMethod": "test",
                    "methodProperties": {}
                }));
            then.status(200).json_body(json!({"test": "test"}));
        })
        .await;

    let response = client(&server, false)
        .send("test", "test", Properties::new())
        .await
        .unwrap();

    assert_eq!(response, json!({"test": "test"}));
    mock.assert_async().await;
}

#[tokio::test]
async fn absent_arguments_never_reach_the_wire() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body(json!({
                "apiKey": API_KEY,
                "modelName": "Address",
                "calledMethod": "save",
                "methodProperties": {
                    "CounterpartyRef": "cp",
                    "StreetRef": "st",
                    "BuildingNumber": "1",
                    "Flat": "12"
                }
            }));
            then.status(200).json_body(json!({"success": true, "data": []}));
        })
        .await;

    client(&server, false)
        .address()
        .save("cp", "st", "1", "12", None)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn unsuccessful_response_is_returned_when_not_raising() {
    let server = MockServer::start_async().await;
    let body = json!({"success": false, "data": [], "errors": ["API key expired"]});
    let expected = body.clone();
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(body);
        })
        .await;

    let response = client(&server, false)
        .common()
        .get_cargo_types()
        .await
        .unwrap();

    assert_eq!(response, expected);
}

#[tokio::test]
async fn api_key_error_raises_invalid_credentials() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200)
                .json_body(json!({"success": false, "data": [], "errors": ["API key expired"]}));
        })
        .await;

    let err = client(&server, true)
        .common()
        .get_cargo_types()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidApiKey(ref msg) if msg == "API key expired"));
    assert!(err.is_api_error());
}

#[tokio::test]
async fn other_errors_raise_request_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(
                json!({"success": false, "data": [], "errors": ["RecipientCityRef is invalid"]}),
            );
        })
        .await;

    let err = client(&server, true)
        .common()
        .get_time_intervals("bad-ref", None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ApiRequest(ref msg) if msg == "RecipientCityRef is invalid"));
}

#[tokio::test]
async fn mapping_errors_are_not_swallowed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(
                json!({"success": false, "data": [], "errors": {"20000100016": "API key is invalid"}}),
            );
        })
        .await;

    let err = client(&server, true)
        .address()
        .get_areas()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ApiRequest(_)));
}

#[tokio::test]
async fn successful_response_passes_when_raising() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200)
                .json_body(json!({"success": true, "data": [{"Ref": "a"}], "errors": []}));
        })
        .await;

    let response = client(&server, true).address().get_areas().await.unwrap();
    assert_eq!(response["data"][0]["Ref"], "a");
}

#[tokio::test]
async fn non_json_body_is_request_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let err = client(&server, false)
        .address()
        .get_areas()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
}

#[tokio::test]
async fn server_error_status_is_request_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(502);
        })
        .await;

    let err = client(&server, false)
        .address()
        .get_areas()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Request(_)));
}

#[tokio::test]
async fn closed_client_fails_cleanly_and_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(json!({"success": true}));
        })
        .await;

    let client = client(&server, false);
    client.address().get_areas().await.unwrap();

    client.close();
    client.close();

    let err = client.address().get_areas().await.unwrap_err();
    assert!(matches!(err, Error::Closed));
    assert!(client.is_closed());
    assert_eq!(mock.hits_async().await, 1);
}

#[test]
fn new_model_replaces_registration() {
    let client = Client::new(API_KEY).unwrap();
    assert!(client.model::<Address<'_, Client>>().is_none());

    let model: Address<'_, Client> = client.new_model();
    let saved = client.model::<Address<'_, Client>>().unwrap();
    assert_eq!(model, saved);
    assert_eq!(model.to_string(), saved.to_string());

    let reset: Address<'_, Client> = client.new_model();
    assert_ne!(reset, model);
    assert_eq!(client.model::<Address<'_, Client>>(), Some(reset));
}

#[test]
fn accessors_register_models() {
    let client = Client::new(API_KEY).unwrap();

    assert_eq!(client.additional_service().to_string(), "AdditionalService");
    assert_eq!(client.address().to_string(), "Address");
    assert_eq!(client.common().to_string(), "Common");
    assert_eq!(client.contact_person().to_string(), "ContactPerson");
    assert_eq!(client.counterparty().to_string(), "Counterparty");
    assert_eq!(client.internet_document().to_string(), "InternetDocument");
    assert_eq!(client.scan_sheet().to_string(), "ScanSheet");
    assert_eq!(client.tracking_document().to_string(), "TrackingDocument");

    assert!(client.model::<Common<'_, Client>>().is_some());
    assert!(client.model::<ScanSheet<'_, Client>>().is_some());
}
