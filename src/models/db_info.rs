//! Database info models

use serde::{Deserialize, Serialize};

/// Response of GET /api/dbinfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbInfo {
    #[serde(alias = "Name")]
    pub name: String,
}
