//! Work order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::{FailureCode, WorkOrderPriority, WorkOrderStatus, WorkOrderType};

/// One maintenance task against exactly one asset.
///
/// `asset_id` is a non-owning reference; nothing cascades. Optional fields
/// that were never supplied stay absent (not null) in both storage and JSON,
/// hence the `skip_serializing_if` on every one of them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    /// Generated identifier (`WO-<uuid>`)
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub wo_type: WorkOrderType,
    pub status: WorkOrderStatus,
    pub priority: WorkOrderPriority,
    pub asset_id: String,
    pub date_reported: DateTime<Utc>,
    pub reported_by: String,
    pub problem_description: String,
    pub follow_up_required: bool,
    pub signature_required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_due: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_scheduled_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_actual_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_actual_completion: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope_of_work: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_procedure_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_labor_log: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_parts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts_consumed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_costs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_problem_code: Option<FailureCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_cause_code: Option<FailureCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_remedy_code: Option<FailureCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_readings_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downtime_logged: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_notes: Option<String>,
}

/// Create work order request.
///
/// Every field is optional at the deserialization layer so the service can
/// report all missing required fields by name in one validation error.
/// `Some(false)` on the booleans is a present value and must pass.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkOrder {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub wo_type: Option<WorkOrderType>,
    pub status: Option<WorkOrderStatus>,
    pub priority: Option<WorkOrderPriority>,
    pub asset_id: Option<String>,
    pub date_reported: Option<DateTime<Utc>>,
    pub reported_by: Option<String>,
    pub problem_description: Option<String>,
    pub follow_up_required: Option<bool>,
    pub signature_required: Option<bool>,

    pub location_notes: Option<String>,
    pub date_due: Option<DateTime<Utc>>,
    pub date_scheduled_start: Option<DateTime<Utc>>,
    pub date_actual_start: Option<DateTime<Utc>>,
    pub date_actual_completion: Option<DateTime<Utc>>,
    pub assigned_to: Option<String>,
    pub supervisor: Option<String>,
    pub scope_of_work: Option<String>,
    pub linked_procedure_info: Option<String>,
    pub safety_instructions: Option<String>,
    pub estimated_hours: Option<f64>,
    pub actual_labor_log: Option<String>,
    pub planned_parts: Option<String>,
    pub parts_consumed: Option<String>,
    pub tools_required: Option<String>,
    pub external_costs: Option<f64>,
    pub completion_notes: Option<String>,
    pub failure_problem_code: Option<FailureCode>,
    pub failure_cause_code: Option<FailureCode>,
    pub failure_remedy_code: Option<FailureCode>,
    pub meter_readings_notes: Option<String>,
    pub inspection_results: Option<String>,
    pub downtime_logged: Option<String>,
    pub attachment_notes: Option<String>,
}

impl CreateWorkOrder {
    /// Names of required fields missing from this request, in wire naming.
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.as_deref().map_or(true, str::is_empty) {
            missing.push("title");
        }
        if self.wo_type.is_none() {
            missing.push("type");
        }
        if self.status.is_none() {
            missing.push("status");
        }
        if self.priority.is_none() {
            missing.push("priority");
        }
        if self.asset_id.as_deref().map_or(true, str::is_empty) {
            missing.push("assetId");
        }
        if self.date_reported.is_none() {
            missing.push("dateReported");
        }
        if self.reported_by.as_deref().map_or(true, str::is_empty) {
            missing.push("reportedBy");
        }
        if self.problem_description.as_deref().map_or(true, str::is_empty) {
            missing.push("problemDescription");
        }
        if self.follow_up_required.is_none() {
            missing.push("followUpRequired");
        }
        if self.signature_required.is_none() {
            missing.push("signatureRequired");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateWorkOrder {
        CreateWorkOrder {
            title: Some("Inspect Pump Alpha".into()),
            wo_type: Some(WorkOrderType::Preventive),
            status: Some(WorkOrderStatus::Requested),
            priority: Some(WorkOrderPriority::Medium),
            asset_id: Some("ASSET-001".into()),
            date_reported: Some(Utc::now()),
            reported_by: Some("System Scheduler".into()),
            problem_description: Some("Routine monthly vibration analysis".into()),
            follow_up_required: Some(false),
            signature_required: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn complete_request_has_no_missing_fields() {
        assert!(valid_request().missing_required_fields().is_empty());
    }

    #[test]
    fn explicit_false_boolean_is_not_missing() {
        let req = CreateWorkOrder {
            follow_up_required: Some(false),
            signature_required: Some(false),
            ..valid_request()
        };
        assert!(req.missing_required_fields().is_empty());
    }

    #[test]
    fn absent_boolean_is_reported_by_name() {
        let req = CreateWorkOrder {
            follow_up_required: None,
            ..valid_request()
        };
        assert_eq!(req.missing_required_fields(), vec!["followUpRequired"]);
    }

    #[test]
    fn all_missing_fields_are_named_at_once() {
        let missing = CreateWorkOrder::default().missing_required_fields();
        assert_eq!(missing.len(), 10);
        assert!(missing.contains(&"title"));
        assert!(missing.contains(&"dateReported"));
        assert!(missing.contains(&"signatureRequired"));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let req = CreateWorkOrder {
            title: Some(String::new()),
            ..valid_request()
        };
        assert_eq!(req.missing_required_fields(), vec!["title"]);
    }
}
