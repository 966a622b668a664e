use crate::api::{FinanceClient, Transport};
use crate::services::overview_service;

pub async fn execute<T: Transport>(client: &FinanceClient<T>) -> Result<String, String> {
    let overview = overview_service::get_overview(client)
        .await
        .map_err(|e| format!("Failed to load overview: {}", e))?;

    if overview.groups.is_empty() {
        return Ok(format!(
            "{}\n\nNo groups yet",
            overview_service::create_info_text(&overview)
        ));
    }

    let summaries = overview_service::get_group_summaries(client, &overview.groups)
        .await
        .map_err(|e| format!("Failed to load entries: {}", e))?;

    Ok(overview_service::create_overview_table(&overview, &summaries))
}
