//! Work order lifecycle service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::work_order::{CreateWorkOrder, WorkOrder},
    repository::Repository,
};

#[derive(Clone)]
pub struct WorkOrdersService {
    repository: Repository,
}

impl WorkOrdersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all work orders, newest report first
    pub async fn list(&self) -> AppResult<Vec<WorkOrder>> {
        self.repository.work_orders.list().await
    }

    /// Create a new work order.
    ///
    /// All nine required fields plus the two booleans must be present; the
    /// error names every missing field at once. `false` is a present boolean
    /// value and passes. Optional fields the caller did not set are not
    /// persisted at all (sparse write).
    pub async fn create(&self, request: CreateWorkOrder) -> AppResult<WorkOrder> {
        let missing = request.missing_required_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let CreateWorkOrder {
            title: Some(title),
            wo_type: Some(wo_type),
            status: Some(status),
            priority: Some(priority),
            asset_id: Some(asset_id),
            date_reported: Some(date_reported),
            reported_by: Some(reported_by),
            problem_description: Some(problem_description),
            follow_up_required: Some(follow_up_required),
            signature_required: Some(signature_required),
            location_notes,
            date_due,
            date_scheduled_start,
            date_actual_start,
            date_actual_completion,
            assigned_to,
            supervisor,
            scope_of_work,
            linked_procedure_info,
            safety_instructions,
            estimated_hours,
            actual_labor_log,
            planned_parts,
            parts_consumed,
            tools_required,
            external_costs,
            completion_notes,
            failure_problem_code,
            failure_cause_code,
            failure_remedy_code,
            meter_readings_notes,
            inspection_results,
            downtime_logged,
            attachment_notes,
        } = request
        else {
            return Err(AppError::Validation(
                "Missing one or more required fields".to_string(),
            ));
        };

        let wo = WorkOrder {
            id: format!("WO-{}", Uuid::new_v4()),
            title,
            wo_type,
            status,
            priority,
            asset_id,
            date_reported,
            reported_by,
            problem_description,
            follow_up_required,
            signature_required,
            location_notes,
            date_due,
            date_scheduled_start,
            date_actual_start,
            date_actual_completion,
            assigned_to,
            supervisor,
            scope_of_work,
            linked_procedure_info,
            safety_instructions,
            estimated_hours,
            actual_labor_log,
            planned_parts,
            parts_consumed,
            tools_required,
            external_costs,
            completion_notes,
            failure_problem_code,
            failure_cause_code,
            failure_remedy_code,
            meter_readings_notes,
            inspection_results,
            downtime_logged,
            attachment_notes,
        };

        self.repository.work_orders.create(&wo).await
    }
}
