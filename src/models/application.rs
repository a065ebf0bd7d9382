use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;
use uuid::Uuid;

use crate::wizard::ProductType;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Draft,
    Submitted,
    UnderReview,
    DocumentRequest,
    Approved,
    Rejected,
    Disbursed,
    Closed,
}

impl ApplicationStatus {
    /// Tab the dashboard files this status under.
    pub fn tab(&self) -> &'static str {
        match self {
            ApplicationStatus::Draft => "drafts",
            ApplicationStatus::Submitted
            | ApplicationStatus::UnderReview
            | ApplicationStatus::DocumentRequest => "under_review",
            ApplicationStatus::Approved
            | ApplicationStatus::Rejected
            | ApplicationStatus::Disbursed
            | ApplicationStatus::Closed => "reviewed",
        }
    }
}

/// Illustrative dashboard record. Never created or mutated by user action
/// in this prototype; see `sample_applications`.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: String,
    pub application_id: Option<String>,
    pub user_id: Uuid,
    pub product_type: ProductType,
    pub status: ApplicationStatus,
    pub submission_date: Option<DateTime<Utc>>,
    pub current_step: u32,
    pub amount_requested: u64,
    pub amount_approved: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    // Literals below are all valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// The fixed demo rows shown on the dashboard: two drafts, two awaiting
/// review, three already decided.
pub fn sample_applications(user_id: Uuid) -> Vec<ApplicationSummary> {
    vec![
        ApplicationSummary {
            id: "1".to_string(),
            application_id: None,
            user_id,
            product_type: ProductType::BpkbFinancing,
            status: ApplicationStatus::Draft,
            submission_date: None,
            current_step: 2,
            amount_requested: 50_000_000,
            amount_approved: None,
            created_at: day(2025, 1, 20),
            updated_at: day(2025, 1, 22),
        },
        ApplicationSummary {
            id: "2".to_string(),
            application_id: None,
            user_id,
            product_type: ProductType::PropertyFinancing,
            status: ApplicationStatus::Draft,
            submission_date: None,
            current_step: 1,
            amount_requested: 200_000_000,
            amount_approved: None,
            created_at: day(2025, 1, 25),
            updated_at: day(2025, 1, 25),
        },
        ApplicationSummary {
            id: "3".to_string(),
            application_id: Some("#42".to_string()),
            user_id,
            product_type: ProductType::ApInvoiceFinancing,
            status: ApplicationStatus::UnderReview,
            submission_date: Some(day(2025, 1, 15)),
            current_step: 4,
            amount_requested: 750_000_000,
            amount_approved: None,
            created_at: day(2025, 1, 10),
            updated_at: day(2025, 1, 18),
        },
        ApplicationSummary {
            id: "4".to_string(),
            application_id: Some("#41".to_string()),
            user_id,
            product_type: ProductType::ArInvoiceFinancing,
            status: ApplicationStatus::Submitted,
            submission_date: Some(day(2025, 1, 20)),
            current_step: 4,
            amount_requested: 1_000_000_000,
            amount_approved: None,
            created_at: day(2025, 1, 18),
            updated_at: day(2025, 1, 20),
        },
        ApplicationSummary {
            id: "5".to_string(),
            application_id: Some("#38".to_string()),
            user_id,
            product_type: ProductType::BpkbFinancing,
            status: ApplicationStatus::Approved,
            submission_date: Some(day(2024, 12, 10)),
            current_step: 4,
            amount_requested: 30_000_000,
            amount_approved: Some(30_000_000),
            created_at: day(2024, 12, 5),
            updated_at: day(2024, 12, 20),
        },
        ApplicationSummary {
            id: "6".to_string(),
            application_id: Some("#35".to_string()),
            user_id,
            product_type: ProductType::PropertyFinancing,
            status: ApplicationStatus::Rejected,
            submission_date: Some(day(2024, 11, 15)),
            current_step: 4,
            amount_requested: 500_000_000,
            amount_approved: None,
            created_at: day(2024, 11, 10),
            updated_at: day(2024, 11, 25),
        },
        ApplicationSummary {
            id: "7".to_string(),
            application_id: Some("#30".to_string()),
            user_id,
            product_type: ProductType::ApInvoiceFinancing,
            status: ApplicationStatus::Approved,
            submission_date: Some(day(2024, 10, 20)),
            current_step: 4,
            amount_requested: 600_000_000,
            amount_approved: Some(600_000_000),
            created_at: day(2024, 10, 15),
            updated_at: day(2024, 11, 5),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_rows_partition_into_dashboard_tabs() {
        let rows = sample_applications(Uuid::from_u128(1));
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.iter().filter(|a| a.status.tab() == "drafts").count(), 2);
        assert_eq!(rows.iter().filter(|a| a.status.tab() == "under_review").count(), 2);
        assert_eq!(rows.iter().filter(|a| a.status.tab() == "reviewed").count(), 3);
    }
}
