use tracing::debug;

use crate::api::{ApiError, FinanceClient, Transport};
use crate::models::{Entry, EntryListResult, Group, GroupId};
use crate::services::ledger_service::Ledger;
use crate::utils::{format_date, truncate, Align, Table};

const PURPOSE_WIDTH: usize = 48;

/// Fetch the entries of one group, de-duplicated and ordered by date
///
/// The group list is fetched alongside to resolve the display name; failing
/// to load it is not an error.
pub async fn get_entries<T: Transport>(
    client: &FinanceClient<T>,
    group_id: &str,
) -> Result<EntryListResult, ApiError> {
    let (groups, entries) = tokio::join!(client.get_groups(), client.get_group_entries(group_id));

    let mut entries: Vec<Entry> = entries.decode()?;
    let requested = GroupId::from(group_id);
    for entry in &mut entries {
        entry.assign_group(&requested);
    }

    let group = match groups.decode::<Vec<Group>>() {
        Ok(groups) => groups.into_iter().find(|g| g.id.as_str() == group_id),
        Err(e) => {
            debug!("Could not resolve name of group {}: {}", group_id, e);
            None
        }
    };

    let received = entries.len();
    let ledger = Ledger::from_entries(entries);
    if ledger.len() < received {
        debug!(
            "Dropped {} duplicate entries in group {}",
            received - ledger.len(),
            group_id
        );
    }

    let summary = ledger.summary();
    Ok(EntryListResult {
        group,
        entries: ledger.into_entries(),
        summary,
    })
}

pub fn create_entries_table(group_id: &str, result: &EntryListResult) -> String {
    let title = match &result.group {
        Some(group) => format!("📄 Entries of {} ({})", group.name, group.id),
        None => format!("📄 Entries of group {}", group_id),
    };

    if result.entries.is_empty() {
        return format!("{}\n\nNo entries", title);
    }

    let mut table =
        Table::new(vec!["Amount", "Other Name", "Date", "Purpose"]).align(0, Align::Right);
    for entry in &result.entries {
        table.add_row(vec![
            entry.amount.to_string(),
            entry.other_name.clone(),
            format_date(&entry.date),
            truncate(&entry.purpose, PURPOSE_WIDTH),
        ]);
    }
    table.set_footer(vec![
        result.summary.balance.to_string(),
        format!("{} entries", result.summary.count),
    ]);

    format!(
        "{}\n\n{}\n\nIncome: {}  Expenses: {}",
        title,
        table.render(),
        result.summary.income,
        result.summary.expenses
    )
}
