//! Placeholder maintenance cost extraction
//!
//! The labor log and parts-consumed fields are free text; these estimators
//! pull numbers out with regexes and fall back to flat placeholders. The
//! result is an approximation for dashboard display, not an accounting
//! figure, and is documented as such in the API.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::work_order::WorkOrder;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\d.]+").unwrap());
static DOLLAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\s*([\d.]+)").unwrap());

/// Labor cost: every number in the labor log is read as hours and priced at
/// the configured rate; with no log, the original estimate is priced instead.
pub fn estimate_labor_cost(wo: &WorkOrder, hourly_rate: f64) -> f64 {
    if let Some(log) = wo.actual_labor_log.as_deref() {
        let total_hours: f64 = NUMBER_RE
            .find_iter(log)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .sum();
        return total_hours * hourly_rate;
    }
    if let Some(estimated) = wo.estimated_hours {
        return estimated * hourly_rate;
    }
    0.0
}

/// Parts cost: dollar amounts found in the parts-consumed text are summed;
/// if none are present, each comma- or newline-separated item is priced at
/// the flat placeholder.
pub fn estimate_parts_cost(wo: &WorkOrder, per_item_cost: f64) -> f64 {
    let Some(parts) = wo.parts_consumed.as_deref() else {
        return 0.0;
    };
    if parts.is_empty() {
        return 0.0;
    }

    let dollar_total: f64 = DOLLAR_RE
        .captures_iter(parts)
        .filter_map(|c| c[1].parse::<f64>().ok())
        .sum();
    if dollar_total > 0.0 {
        return dollar_total;
    }

    let items = parts
        .split(|c| c == ',' || c == '\n')
        .filter(|p| !p.trim().is_empty())
        .count();
    items as f64 * per_item_cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{WorkOrderPriority, WorkOrderStatus, WorkOrderType};
    use chrono::Utc;

    fn wo(labor: Option<&str>, estimated: Option<f64>, parts: Option<&str>) -> WorkOrder {
        WorkOrder {
            id: "WO-test".into(),
            title: "t".into(),
            wo_type: WorkOrderType::Reactive,
            status: WorkOrderStatus::Completed,
            priority: WorkOrderPriority::Low,
            asset_id: "ASSET-001".into(),
            date_reported: Utc::now(),
            reported_by: "tester".into(),
            problem_description: "p".into(),
            follow_up_required: false,
            signature_required: false,
            location_notes: None,
            date_due: None,
            date_scheduled_start: None,
            date_actual_start: None,
            date_actual_completion: None,
            assigned_to: None,
            supervisor: None,
            scope_of_work: None,
            linked_procedure_info: None,
            safety_instructions: None,
            estimated_hours: estimated,
            actual_labor_log: labor.map(String::from),
            planned_parts: None,
            parts_consumed: parts.map(String::from),
            tools_required: None,
            external_costs: None,
            completion_notes: None,
            failure_problem_code: None,
            failure_cause_code: None,
            failure_remedy_code: None,
            meter_readings_notes: None,
            inspection_results: None,
            downtime_logged: None,
            attachment_notes: None,
        }
    }

    #[test]
    fn labor_sums_numbers_in_log() {
        let w = wo(Some("2.5 hrs Monday, 1.5 hrs Tuesday"), Some(99.0), None);
        assert_eq!(estimate_labor_cost(&w, 50.0), 200.0);
    }

    #[test]
    fn labor_falls_back_to_estimate() {
        let w = wo(None, Some(4.0), None);
        assert_eq!(estimate_labor_cost(&w, 50.0), 200.0);
    }

    #[test]
    fn labor_zero_when_nothing_logged() {
        let w = wo(None, None, None);
        assert_eq!(estimate_labor_cost(&w, 50.0), 0.0);
    }

    #[test]
    fn parts_sums_dollar_amounts() {
        let w = wo(None, None, Some("Bearing $ 45.50, Seal kit $12"));
        assert_eq!(estimate_parts_cost(&w, 20.0), 57.5);
    }

    #[test]
    fn parts_falls_back_to_per_item_placeholder() {
        let w = wo(None, None, Some("bearing, seal kit\ngrease"));
        assert_eq!(estimate_parts_cost(&w, 20.0), 60.0);
    }

    #[test]
    fn parts_zero_when_absent_or_empty() {
        assert_eq!(estimate_parts_cost(&wo(None, None, None), 20.0), 0.0);
        assert_eq!(estimate_parts_cost(&wo(None, None, Some("")), 20.0), 0.0);
    }
}
