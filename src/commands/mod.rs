pub mod entries;
pub mod groups;
pub mod help;
pub mod info;
pub mod overview;

use tracing::error;

use crate::api::{FinanceClient, Transport};

/// Run one CLI command and return the text to print
///
/// `Err` carries a message ready for the user.
pub async fn handle_command<T: Transport>(
    client: &FinanceClient<T>,
    parts: &[&str],
) -> Result<String, String> {
    let Some((&command, args)) = parts.split_first() else {
        return Ok(help::execute());
    };

    let result = match command {
        "info" => info::execute(client).await,
        "groups" | "ls" => groups::execute(client).await,
        "entries" | "e" => entries::execute(client, args).await,
        "overview" | "ov" => overview::execute(client).await,
        "help" | "-h" | "--help" => Ok(help::execute()),
        _ => Err(format!("Unknown command `{}`\n\n{}", command, help::execute())),
    };

    if let Err(e) = &result {
        error!("Command {} failed: {}", command, e);
    }

    result
}
