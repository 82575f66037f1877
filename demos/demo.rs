//! Look up a city, its first warehouse, and the status of a waybill.
//!
//! ```text
//! NOVAPOSHTA_API_KEY=... cargo run --example demo -- 20400048799000
//! ```

use novaposhta_client::models::{TrackedDocument, WarehousesQuery};
use novaposhta_client::response::{ApiResponse, first_ref};
use novaposhta_client::{Chain, ChainArgs, Client, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let api_key = std::env::var("NOVAPOSHTA_API_KEY").unwrap_or_default();
    let waybill = std::env::args().nth(1);

    let client = Client::builder(api_key).raise_for_errors(true).build()?;
    let client_ref = &client;

    let results = (Chain::new(move |args: ChainArgs| async move {
        client_ref
            .address()
            .search_settlements(args.str("city_name")?, Some(1), None)
            .await
    })
    .arg("city_name", "Київ")
    .prepare_next(|response| {
        let city = response["data"][0]["Addresses"][0]["DeliveryCity"]
            .as_str()
            .ok_or(Error::MissingArgument("DeliveryCity".into()))?;
        Ok(ChainArgs::new().with("city_ref", city))
    })
        | Chain::new(move |args: ChainArgs| async move {
            client_ref
                .address()
                .get_warehouses(WarehousesQuery {
                    city_ref: Some(args.str("city_ref")?.to_string()),
                    limit: 1,
                    ..Default::default()
                })
                .await
        })
        .prepare_next(|response| {
            let warehouse = first_ref(response).ok_or(Error::MissingArgument("Ref".into()))?;
            Ok(ChainArgs::new().with("warehouse_ref", warehouse))
        }))
    .execute()
    .await;

    for (step, result) in results.iter().enumerate() {
        match &result.error {
            Some(error) => println!("step {step} failed: {error}"),
            None => println!("step {step}: {}", result.data.clone().unwrap_or_default()),
        }
    }

    if let Some(number) = waybill {
        let status = client
            .tracking_document()
            .get_status_documents(vec![TrackedDocument::new(number)])
            .await?;
        let status = ApiResponse::from_value(status)?;
        for item in status.items() {
            println!("{}: {}", item["Number"], item["Status"]);
        }
    }

    client.close();
    Ok(())
}
