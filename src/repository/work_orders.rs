//! Work orders repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::work_order::WorkOrder};

#[derive(Clone)]
pub struct WorkOrdersRepository {
    pool: Pool<Postgres>,
}

impl WorkOrdersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all work orders, newest report first. The ordering is part of
    /// the API contract.
    pub async fn list(&self) -> AppResult<Vec<WorkOrder>> {
        let rows = sqlx::query_as::<_, WorkOrder>(
            "SELECT * FROM work_orders ORDER BY date_reported DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new work order.
    ///
    /// Optional columns are written only when the caller supplied them, so a
    /// field that was never set stays absent rather than becoming NULL via an
    /// explicit write. The column list is built from an explicit schema of
    /// optionals, never by reflecting over the payload.
    pub async fn create(&self, wo: &WorkOrder) -> AppResult<WorkOrder> {
        let mut columns = vec![
            "id",
            "title",
            "wo_type",
            "status",
            "priority",
            "asset_id",
            "date_reported",
            "reported_by",
            "problem_description",
            "follow_up_required",
            "signature_required",
        ];

        macro_rules! add_column {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    columns.push($name);
                }
            };
        }

        add_column!(wo.location_notes, "location_notes");
        add_column!(wo.date_due, "date_due");
        add_column!(wo.date_scheduled_start, "date_scheduled_start");
        add_column!(wo.date_actual_start, "date_actual_start");
        add_column!(wo.date_actual_completion, "date_actual_completion");
        add_column!(wo.assigned_to, "assigned_to");
        add_column!(wo.supervisor, "supervisor");
        add_column!(wo.scope_of_work, "scope_of_work");
        add_column!(wo.linked_procedure_info, "linked_procedure_info");
        add_column!(wo.safety_instructions, "safety_instructions");
        add_column!(wo.estimated_hours, "estimated_hours");
        add_column!(wo.actual_labor_log, "actual_labor_log");
        add_column!(wo.planned_parts, "planned_parts");
        add_column!(wo.parts_consumed, "parts_consumed");
        add_column!(wo.tools_required, "tools_required");
        add_column!(wo.external_costs, "external_costs");
        add_column!(wo.completion_notes, "completion_notes");
        add_column!(wo.failure_problem_code, "failure_problem_code");
        add_column!(wo.failure_cause_code, "failure_cause_code");
        add_column!(wo.failure_remedy_code, "failure_remedy_code");
        add_column!(wo.meter_readings_notes, "meter_readings_notes");
        add_column!(wo.inspection_results, "inspection_results");
        add_column!(wo.downtime_logged, "downtime_logged");
        add_column!(wo.attachment_notes, "attachment_notes");

        let placeholders = (1..=columns.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO work_orders ({}) VALUES ({}) RETURNING *",
            columns.join(", "),
            placeholders
        );

        let mut builder = sqlx::query_as::<_, WorkOrder>(&query)
            .bind(&wo.id)
            .bind(&wo.title)
            .bind(wo.wo_type)
            .bind(wo.status)
            .bind(wo.priority)
            .bind(&wo.asset_id)
            .bind(wo.date_reported)
            .bind(&wo.reported_by)
            .bind(&wo.problem_description)
            .bind(wo.follow_up_required)
            .bind(wo.signature_required);

        macro_rules! bind_optional {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_optional!(wo.location_notes);
        bind_optional!(wo.date_due);
        bind_optional!(wo.date_scheduled_start);
        bind_optional!(wo.date_actual_start);
        bind_optional!(wo.date_actual_completion);
        bind_optional!(wo.assigned_to);
        bind_optional!(wo.supervisor);
        bind_optional!(wo.scope_of_work);
        bind_optional!(wo.linked_procedure_info);
        bind_optional!(wo.safety_instructions);
        bind_optional!(wo.estimated_hours);
        bind_optional!(wo.actual_labor_log);
        bind_optional!(wo.planned_parts);
        bind_optional!(wo.parts_consumed);
        bind_optional!(wo.tools_required);
        bind_optional!(wo.external_costs);
        bind_optional!(wo.completion_notes);
        bind_optional!(wo.failure_problem_code);
        bind_optional!(wo.failure_cause_code);
        bind_optional!(wo.failure_remedy_code);
        bind_optional!(wo.meter_readings_notes);
        bind_optional!(wo.inspection_results);
        bind_optional!(wo.downtime_logged);
        bind_optional!(wo.attachment_notes);

        let row = builder.fetch_one(&self.pool).await?;
        Ok(row)
    }
}
