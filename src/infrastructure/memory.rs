use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use rust_decimal_macros::dec;

use crate::domain::{Account, BankDataError};
use crate::infrastructure::bank_data::BankDataServiceTrait;

/// In-memory bank data store. Serves as the dev-mode fallback when no
/// upstream URL is configured, and as the fixture for integration tests.
#[derive(Default)]
pub struct InMemoryBankDataService {
    accounts: DashMap<String, Account>,
    // Insertion order of account numbers; lookups go through the map.
    order: RwLock<Vec<String>>,
}

impl InMemoryBankDataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small store pre-seeded with demo accounts.
    pub fn with_demo_accounts() -> Self {
        let store = Self::new();
        let now = Utc::now();
        for (number, owner, balance) in [
            ("001", "Alice", dec!(150.50)),
            ("002", "Bob", dec!(2300.00)),
            ("003", "Carol", dec!(75.25)),
        ] {
            store.insert(Account {
                account_number: number.to_string(),
                owner_name: owner.to_string(),
                balance,
                is_active: true,
                updated_at: now,
            });
        }
        store
    }

    pub fn insert(&self, account: Account) {
        let number = account.account_number.clone();
        if self.accounts.insert(number.clone(), account).is_none() {
            self.order
                .write()
                .expect("order lock poisoned")
                .push(number);
        }
    }
}

#[async_trait]
impl BankDataServiceTrait for InMemoryBankDataService {
    async fn get_all_accounts(&self) -> Result<Vec<Account>, BankDataError> {
        let order = self.order.read().expect("order lock poisoned");
        Ok(order
            .iter()
            .filter_map(|number| self.accounts.get(number).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn get_account(&self, account_number: &str) -> Result<Option<Account>, BankDataError> {
        Ok(self
            .accounts
            .get(account_number)
            .map(|entry| entry.value().clone()))
    }
}
