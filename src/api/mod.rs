pub mod client;
pub mod models;
pub mod response;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::FinanceClient;
pub use models::{ApiError, ApiRequest, RawOutcome};
pub use response::ApiResponse;
pub use transport::{ReqwestTransport, Transport};
