use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::domain::{Account, BankDataError};

/// Read access to the bank data service. The BFF only consumes the two
/// lookup operations; account storage and mutation stay upstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BankDataServiceTrait: Send + Sync {
    /// All accounts, in the order the upstream service returns them.
    async fn get_all_accounts(&self) -> Result<Vec<Account>, BankDataError>;

    /// Single account lookup. `None` means the account does not exist.
    async fn get_account(&self, account_number: &str) -> Result<Option<Account>, BankDataError>;
}

/// Bank data service backed by the upstream HTTP API.
pub struct HttpBankDataService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBankDataService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BankDataServiceTrait for HttpBankDataService {
    async fn get_all_accounts(&self) -> Result<Vec<Account>, BankDataError> {
        let url = format!("{}/accounts", self.base_url);
        debug!("fetching all accounts from {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BankDataError::Connection(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BankDataError::UpstreamStatus(status.as_u16()));
        }
        response
            .json::<Vec<Account>>()
            .await
            .map_err(|e| BankDataError::Decode(e.to_string()))
    }

    async fn get_account(&self, account_number: &str) -> Result<Option<Account>, BankDataError> {
        // Axum hands us the decoded path segment; re-encode so reserved
        // characters in an identifier cannot change the upstream path.
        let url = format!(
            "{}/accounts/{}",
            self.base_url,
            urlencoding::encode(account_number)
        );
        debug!("fetching account from {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BankDataError::Connection(e.to_string()))?;
        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|e| BankDataError::Connection(e.to_string()))?;
                // The legacy upstream answers a missing account with 200 and
                // an empty or null body instead of 404.
                if body.is_empty() || body.as_ref() == b"null" {
                    return Ok(None);
                }
                serde_json::from_slice(&body)
                    .map(Some)
                    .map_err(|e| BankDataError::Decode(e.to_string()))
            }
            status => Err(BankDataError::UpstreamStatus(status.as_u16())),
        }
    }
}
