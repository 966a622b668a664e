//! Aggregated views over entries

use super::entry::Entry;
use super::group::Group;
use super::money::Money;

/// Totals over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    /// Sum of positive amounts
    pub income: Money,
    /// Sum of negative amounts, never positive
    pub expenses: Money,
    pub balance: Money,
}

impl Summary {
    pub fn of<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut summary = Summary::default();
        for entry in entries {
            summary.count += 1;
            if entry.is_income() {
                summary.income += entry.amount;
            } else {
                summary.expenses += entry.amount;
            }
        }
        summary.balance = summary.income + summary.expenses;
        summary
    }
}

/// Totals for one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub group: Group,
    pub summary: Summary,
}

/// Result of the overview command
#[derive(Debug, Clone)]
pub struct OverviewResult {
    pub db_name: String,
    pub groups: Vec<Group>,
}

/// Result of the entries command
#[derive(Debug, Clone)]
pub struct EntryListResult {
    pub group: Option<Group>,
    pub entries: Vec<Entry>,
    pub summary: Summary,
}
