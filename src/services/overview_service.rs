use futures::future::join_all;
use tracing::debug;

use crate::api::{ApiError, FinanceClient, Transport};
use crate::models::{DbInfo, Entry, Group, GroupSummary, OverviewResult, Summary};
use crate::services::ledger_service::Ledger;
use crate::utils::{Align, Table};

/// Fetch database info and groups in parallel
pub async fn get_overview<T: Transport>(
    client: &FinanceClient<T>,
) -> Result<OverviewResult, ApiError> {
    let (info, groups) = tokio::join!(client.get_db_info(), client.get_groups());

    let info: DbInfo = info.decode()?;
    let groups: Vec<Group> = groups.decode()?;
    debug!("Database {:?} has {} groups", info.name, groups.len());

    Ok(OverviewResult {
        db_name: info.name,
        groups,
    })
}

/// Fetch the entries of every group and total them per group
pub async fn get_group_summaries<T: Transport>(
    client: &FinanceClient<T>,
    groups: &[Group],
) -> Result<Vec<GroupSummary>, ApiError> {
    let responses = join_all(
        groups
            .iter()
            .map(|group| client.get_group_entries(group.id.as_str())),
    )
    .await;

    let mut ledger = Ledger::new();
    for (group, response) in groups.iter().zip(responses) {
        let entries: Vec<Entry> = response.decode()?;
        for mut entry in entries {
            entry.assign_group(&group.id);
            ledger.insert(entry);
        }
    }

    Ok(ledger.group_summaries(groups))
}

pub fn create_info_text(overview: &OverviewResult) -> String {
    format!(
        "📒 Database: {}\nGroups: {}",
        overview.db_name,
        overview.groups.len()
    )
}

pub fn create_groups_table(groups: &[Group]) -> String {
    if groups.is_empty() {
        return "No groups yet".to_string();
    }

    let mut table = Table::new(vec!["ID", "Name"]);
    for group in groups {
        table.add_row(vec![group.id.as_str(), group.name.as_str()]);
    }
    table.render()
}

pub fn create_overview_table(overview: &OverviewResult, summaries: &[GroupSummary]) -> String {
    let mut table = Table::new(vec!["Group", "Entries", "Income", "Expenses", "Balance"])
        .align(1, Align::Right)
        .align(2, Align::Right)
        .align(3, Align::Right)
        .align(4, Align::Right);

    let mut total = Summary::default();
    for row in summaries {
        let s = row.summary;
        table.add_row(vec![
            row.group.name.clone(),
            s.count.to_string(),
            s.income.to_string(),
            s.expenses.to_string(),
            s.balance.to_string(),
        ]);
        total.count += s.count;
        total.income += s.income;
        total.expenses += s.expenses;
    }
    total.balance = total.income + total.expenses;

    if summaries.len() > 1 {
        table.set_footer(vec![
            "Total".to_string(),
            total.count.to_string(),
            total.income.to_string(),
            total.expenses.to_string(),
            total.balance.to_string(),
        ]);
    }

    let balance_line = if total.balance.is_negative() {
        format!("⚠️ Overall balance is negative: {}", total.balance)
    } else {
        format!("Overall balance: {}", total.balance)
    };

    format!(
        "{}\n\n{}\n\n{}",
        create_info_text(overview),
        table.render(),
        balance_line
    )
}
