//! Client for the money-graph personal finance backend
//!
//! [`api`] wraps every HTTP call into an [`api::ApiResponse`], [`services`]
//! turns responses into views (including entry aggregation in
//! [`services::Ledger`]), and [`commands`] renders them for the terminal.

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use api::{ApiError, ApiResponse, FinanceClient, RawOutcome, ReqwestTransport, Transport};
pub use config::{Config, ConfigError};
