//! Data backing the user detail view.
//!
//! Only General Details has real content; the other sections are placeholders
//! in the legacy console and stay that way here.

use crate::{Guarantor, UserRecord};
use lendboard_states::State;

/// Find a record by id in the resolved dataset.
pub fn find_user<'a>(records: &'a [UserRecord], id: &str) -> Option<&'a UserRecord> {
    records.iter().find(|record| record.id == id)
}

/// The six tabs of the detail view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailSection {
    #[default]
    GeneralDetails,
    Documents,
    BankDetails,
    Loans,
    Savings,
    AppAndSystem,
}

impl DetailSection {
    pub const ALL: [Self; 6] = [
        Self::GeneralDetails,
        Self::Documents,
        Self::BankDetails,
        Self::Loans,
        Self::Savings,
        Self::AppAndSystem,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::GeneralDetails => "General Details",
            Self::Documents => "Documents",
            Self::BankDetails => "Bank Details",
            Self::Loans => "Loans",
            Self::Savings => "Savings",
            Self::AppAndSystem => "App and System",
        }
    }

    /// Placeholder copy for sections without content, `None` for the one
    /// section that renders real data.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::GeneralDetails => None,
            Self::Documents => Some("Documents information will be displayed here"),
            Self::BankDetails => Some("Bank details will be displayed here"),
            Self::Loans => Some("Loans information will be displayed here"),
            Self::Savings => Some("Savings information will be displayed here"),
            Self::AppAndSystem => Some("App and System information will be displayed here"),
        }
    }
}

/// Which detail tab is selected. Reset when navigating to a record.
#[derive(Debug, Default)]
pub struct DetailState {
    pub section: DetailSection,
}

impl State for DetailState {}

/// One label/value pair in an information grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

impl InfoItem {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_owned()
    } else {
        value.to_owned()
    }
}

/// "Personal Information" grid. Shows the raw (unnormalized) phone number,
/// matching the legacy detail page.
pub fn personal_info_items(user: &UserRecord) -> Vec<InfoItem> {
    vec![
        InfoItem::new("Full Name", user.full_name()),
        InfoItem::new("Phone Number", or_na(&user.phone_number)),
        InfoItem::new("Email Address", or_na(&user.email)),
        InfoItem::new(
            "BVN",
            user.bvn
                .map_or_else(|| "N/A".to_owned(), |bvn| bvn.to_string()),
        ),
        InfoItem::new("Gender", or_na(&user.gender)),
        InfoItem::new("Marital Status", or_na(&user.marital_status)),
        InfoItem::new("Children", or_na(&user.children)),
        InfoItem::new("Type of Residence", or_na(&user.residence_type)),
    ]
}

/// "Education and Employment" grid.
pub fn education_employment_items(user: &UserRecord) -> Vec<InfoItem> {
    vec![
        InfoItem::new("Level of Education", or_na(&user.education_level)),
        InfoItem::new("Employment Status", or_na(&user.employment_stats)),
        InfoItem::new("Sector of Employment", or_na(&user.sector)),
        InfoItem::new("Duration of Employment", or_na(&user.employment_duration)),
        InfoItem::new("Office Email", or_na(&user.office_email)),
        InfoItem::new("Monthly Income", or_na(&user.monthly_income)),
        InfoItem::new("Loan Repayment", or_na(&user.loan_repayment)),
    ]
}

/// "Socials" grid. Handles are synthesized from the name, the way the legacy
/// console faked them.
pub fn socials_items(user: &UserRecord) -> Vec<InfoItem> {
    let first = user.first_name.to_lowercase();
    let first = if first.is_empty() {
        "N/A".to_owned()
    } else {
        first
    };
    let handle = format!("@{first}_{}", user.last_name.to_lowercase());
    vec![
        InfoItem::new("Twitter", handle.clone()),
        InfoItem::new("Facebook", user.full_name()),
        InfoItem::new("Instagram", handle),
    ]
}

/// One "Guarantor" grid; the detail view renders one per guarantor entry.
pub fn guarantor_items(guarantor: &Guarantor) -> Vec<InfoItem> {
    vec![
        InfoItem::new("Full Name", or_na(&guarantor.name)),
        InfoItem::new("Phone Number", or_na(&guarantor.phone_number)),
        InfoItem::new("Email Address", or_na(&guarantor.email)),
        InfoItem::new("Relationship", or_na(&guarantor.relationship)),
    ]
}
