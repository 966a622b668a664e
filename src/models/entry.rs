//! Entry models

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

use super::group::GroupId;
use super::iban::Iban;
use super::money::Money;

/// One booked transaction
///
/// Field aliases accept the backend's Go field names as well as camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Content hash, used to detect duplicate imports
    #[serde(default, alias = "Hash", deserialize_with = "empty_as_none")]
    pub hash: Option<String>,
    /// Group the entry is booked in. The per-group endpoint may omit it;
    /// services fill it in from the group that was requested.
    #[serde(default, alias = "GroupID")]
    pub group_id: Option<GroupId>,
    #[serde(default, alias = "IBAN", deserialize_with = "empty_as_none")]
    pub iban: Option<Iban>,
    #[serde(alias = "Date")]
    pub date: DateTime<FixedOffset>,
    /// Booking type, e.g. "Lastschrift" or "Gutschrift"
    #[serde(default, rename = "type", alias = "Type")]
    pub kind: String,
    #[serde(default, alias = "Message")]
    pub purpose: String,
    #[serde(alias = "Amount")]
    pub amount: Money,
    #[serde(default, alias = "OtherName")]
    pub other_name: String,
    #[serde(default, alias = "OtherIBAN", deserialize_with = "empty_as_none")]
    pub other_iban: Option<Iban>,
}

impl Entry {
    /// `(year, month)` the entry was booked in, in the booking's own offset
    pub fn month(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Set the group if the backend left it out
    pub fn assign_group(&mut self, group_id: &GroupId) {
        if self.group_id.is_none() {
            self.group_id = Some(group_id.clone());
        }
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()).map(T::from))
}
