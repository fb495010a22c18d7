use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use tokio::net::TcpListener;

use mobile_bff::domain::{Account, BankDataError};
use mobile_bff::infrastructure::{BankDataServiceTrait, HttpBankDataService};

fn alice() -> Account {
    Account {
        account_number: "001".to_string(),
        owner_name: "Alice".to_string(),
        balance: dec!(150.50),
        is_active: true,
        updated_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
    }
}

async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn client_for(router: Router) -> HttpBankDataService {
    let base_url = spawn_upstream(router).await;
    HttpBankDataService::new(&base_url, Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn list_decodes_upstream_records() {
    let router = Router::new().route("/accounts", get(|| async { Json(vec![alice()]) }));
    let client = client_for(router).await;

    let accounts = client.get_all_accounts().await.unwrap();
    assert_eq!(accounts, vec![alice()]);
}

#[tokio::test]
async fn list_failure_maps_to_upstream_status() {
    let router = Router::new().route(
        "/accounts",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = client_for(router).await;

    let err = client.get_all_accounts().await.unwrap_err();
    assert!(matches!(err, BankDataError::UpstreamStatus(500)));
}

#[tokio::test]
async fn found_record_is_decoded() {
    let router = Router::new().route(
        "/accounts/{account_number}",
        get(|| async { Json(alice()) }),
    );
    let client = client_for(router).await;

    let found = client.get_account("001").await.unwrap();
    assert_eq!(found, Some(alice()));
}

#[tokio::test]
async fn upstream_404_maps_to_none() {
    let router = Router::new().route(
        "/accounts/{account_number}",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let client = client_for(router).await;

    assert_eq!(client.get_account("999").await.unwrap(), None);
}

#[tokio::test]
async fn legacy_null_body_maps_to_none() {
    let router = Router::new().route("/accounts/{account_number}", get(|| async { "null" }));
    let client = client_for(router).await;

    assert_eq!(client.get_account("999").await.unwrap(), None);
}

#[tokio::test]
async fn legacy_empty_body_maps_to_none() {
    let router = Router::new().route(
        "/accounts/{account_number}",
        get(|| async { StatusCode::OK }),
    );
    let client = client_for(router).await;

    assert_eq!(client.get_account("999").await.unwrap(), None);
}

#[tokio::test]
async fn lookup_failure_maps_to_upstream_status() {
    let router = Router::new().route(
        "/accounts/{account_number}",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let client = client_for(router).await;

    let err = client.get_account("001").await.unwrap_err();
    assert!(matches!(err, BankDataError::UpstreamStatus(503)));
}

#[tokio::test]
async fn reserved_characters_stay_inside_one_path_segment() {
    // Echo the received identifier back so the assertion proves the
    // slash and question mark reached the upstream as segment content,
    // not as extra path or a query string.
    let router = Router::new().route(
        "/accounts/{account_number}",
        get(|Path(account_number): Path<String>| async move {
            Json(Account {
                account_number,
                ..alice()
            })
        }),
    );
    let client = client_for(router).await;

    let found = client.get_account("10/20?x=1").await.unwrap().unwrap();
    assert_eq!(found.account_number, "10/20?x=1");
}
