use crate::api::{FinanceClient, Transport};
use crate::models::Group;
use crate::services::overview_service;

pub async fn execute<T: Transport>(client: &FinanceClient<T>) -> Result<String, String> {
    let groups: Vec<Group> = client
        .get_groups()
        .await
        .decode()
        .map_err(|e| format!("Failed to load groups: {}", e))?;

    Ok(overview_service::create_groups_table(&groups))
}
