//! Data models for the money-graph backend and the views built from it
//!
//! Wire types (`DbInfo`, `Group`, `Entry`) mirror the backend's JSON. The
//! remaining types are results produced by services for display.

pub mod db_info;
pub mod entry;
pub mod group;
pub mod iban;
pub mod money;
pub mod summary;

pub use db_info::DbInfo;
pub use entry::Entry;
pub use group::{Group, GroupId};
pub use iban::{Iban, IbanError};
pub use money::{Money, ParseMoneyError};
pub use summary::{EntryListResult, GroupSummary, OverviewResult, Summary};
