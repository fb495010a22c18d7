use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;

use crate::domain::Account;
use crate::infrastructure::BankDataServiceTrait;

pub type SharedBankData = Arc<dyn BankDataServiceTrait>;

/// Light-weight account view served to the mobile client: account number,
/// owner and balance only. Built fresh per response, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MobileAccount {
    pub account_number: String,
    pub owner_name: String,
    pub balance: Decimal,
}

impl From<Account> for MobileAccount {
    fn from(account: Account) -> Self {
        Self {
            account_number: account.account_number,
            owner_name: account.owner_name,
            balance: account.balance,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn bad_gateway(error: impl std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

pub async fn get_mobile_accounts(
    State(service): State<SharedBankData>,
) -> Result<Json<Vec<MobileAccount>>, (StatusCode, Json<ErrorResponse>)> {
    match service.get_all_accounts().await {
        Ok(accounts) => Ok(Json(
            accounts.into_iter().map(MobileAccount::from).collect(),
        )),
        Err(e) => {
            error!("failed to list accounts: {}", e);
            Err(bad_gateway(e))
        }
    }
}

pub async fn get_mobile_account(
    State(service): State<SharedBankData>,
    Path(account_number): Path<String>,
) -> Result<Json<MobileAccount>, (StatusCode, Json<ErrorResponse>)> {
    match service.get_account(&account_number).await {
        Ok(Some(account)) => Ok(Json(MobileAccount::from(account))),
        // The legacy endpoint answered a missing account with 200 and a null
        // body, indistinguishable from a malformed success. Mapped to an
        // explicit 404 instead.
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Account not found".to_string(),
            }),
        )),
        Err(e) => {
            error!("failed to fetch account {}: {}", account_number, e);
            Err(bad_gateway(e))
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}
