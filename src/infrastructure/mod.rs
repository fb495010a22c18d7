pub mod bank_data;
pub mod logging;
pub mod memory;

pub use bank_data::{BankDataServiceTrait, HttpBankDataService};
pub use logging::{init_logging, LoggingConfig};
pub use memory::InMemoryBankDataService;
