use crate::api::{FinanceClient, Transport};
use crate::services::overview_service;

pub async fn execute<T: Transport>(client: &FinanceClient<T>) -> Result<String, String> {
    let overview = overview_service::get_overview(client)
        .await
        .map_err(|e| format!("Failed to load database info: {}", e))?;

    Ok(overview_service::create_info_text(&overview))
}
