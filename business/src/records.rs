//! User record types shared by the table, the detail view and the cache.
//!
//! The wire format (and the cache slot, which stores the same JSON) uses
//! camelCase keys with a Mongo-style `_id`, so the serde renames here must
//! stay in sync with the hosted endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation status of a user account.
///
/// The wire format carries this as a plain string (`"Active"`, ...); modelling
/// it as an enum makes the status filter an equality check and lets the action
/// transitions be matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    #[default]
    Inactive,
    Pending,
    Blacklisted,
}

impl UserStatus {
    /// All statuses, in the order the filter dropdown offers them.
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Inactive,
        Self::Pending,
        Self::Blacklisted,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Pending => "Pending",
            Self::Blacklisted => "Blacklisted",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guarantor attached to a user record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guarantor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub relationship: String,
}

/// A single user record as served by the users endpoint.
///
/// Only `_id` and `status` are load-bearing; every profile field defaults to
/// empty so a sparse record still renders (the detail view substitutes "N/A").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    /// May be absent in sparse records; the table shows "N/A" then.
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub bvn: Option<u64>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub marital_status: String,
    #[serde(default)]
    pub children: String,
    #[serde(default)]
    pub residence_type: String,
    #[serde(default)]
    pub education_level: String,
    /// Key kept as served by the endpoint (`employmentStats`).
    #[serde(default)]
    pub employment_stats: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub employment_duration: String,
    #[serde(default)]
    pub office_email: String,
    #[serde(default)]
    pub monthly_income: String,
    #[serde(default)]
    pub loan_repayment: String,
    #[serde(default)]
    pub guarantor: Vec<Guarantor>,
}

impl UserRecord {
    /// First and last name joined with a space, as the table renders it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Phone number normalized for display and matching.
    pub fn formatted_phone(&self) -> String {
        format_phone_number(&self.phone_number)
    }

    /// Join date the way the table shows it, e.g. `Apr 30, 2020 10:51 AM`.
    pub fn joined_display(&self) -> String {
        match self.date_joined {
            Some(date) => date.format("%b %d, %Y %I:%M %p").to_string(),
            None => "N/A".to_owned(),
        }
    }
}

/// Normalize a phone number for display and matching.
///
/// Strips whitespace, dashes and parentheses, then rewrites a leading `+234`
/// country code to the local `0` prefix. Anything else passes through
/// untouched, so partial filter input still matches.
pub fn format_phone_number(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    match cleaned.strip_prefix("+234") {
        Some(rest) => format!("0{rest}"),
        None => cleaned,
    }
}
