use crate::api::{FinanceClient, Transport};
use crate::services::entry_service;

pub async fn execute<T: Transport>(
    client: &FinanceClient<T>,
    args: &[&str],
) -> Result<String, String> {
    let group_id = match args.first() {
        Some(&"help") | None => {
            return Ok([
                "📄 Entries",
                "Usage: money-graph entries <group id>",
                "Use `money-graph groups` to look up group ids.",
            ]
            .join("\n"))
        }
        Some(id) => *id,
    };

    let result = entry_service::get_entries(client, group_id)
        .await
        .map_err(|e| format!("Failed to load entries: {}", e))?;

    Ok(entry_service::create_entries_table(group_id, &result))
}
