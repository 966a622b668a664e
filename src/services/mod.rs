pub mod entry_service;
pub mod ledger_service;
pub mod overview_service;

pub use ledger_service::Ledger;
