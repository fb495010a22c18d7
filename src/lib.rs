pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod web;

// Re-export commonly used types
pub use config::AppConfig;
pub use domain::{Account, BankDataError};
pub use infrastructure::{BankDataServiceTrait, HttpBankDataService, InMemoryBankDataService};
pub use web::MobileAccount;
