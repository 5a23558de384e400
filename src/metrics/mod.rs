//! Dashboard KPI reducer
//!
//! A pure, synchronous pass over already-fetched snapshots: no I/O, no
//! clock access. The caller supplies "now" so the windows are testable.

pub mod cost;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    config::KpiConfig,
    models::{
        asset::Asset,
        booking::ToolBooking,
        enums::{AssetStatus, BookingStatus, WorkOrderPriority, WorkOrderStatus, WorkOrderType},
        work_order::WorkOrder,
    },
};

/// One week of the created-vs-completed trend
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub week_starting: NaiveDate,
    pub created: i64,
    pub completed: i64,
}

/// Dashboard KPI document
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_assets: i64,
    pub online_assets: i64,
    pub offline_assets: i64,
    pub maintenance_assets: i64,
    pub offline_unplanned_assets: i64,

    pub open_work_orders: i64,
    pub overdue_work_orders: i64,
    pub critical_open_work_orders: i64,

    /// Percent of preventive work orders due in the trailing window that were
    /// completed. 100 when none were due (vacuously compliant).
    pub pm_compliance: i64,
    /// Percent of completed-in-window work orders that were reactive,
    /// among reactive + preventive. 0 when neither kind completed.
    pub reactive_ratio: i64,
    /// Regex-extracted placeholder estimate, not an accounting figure
    pub estimated_maintenance_cost: f64,

    pub pending_bookings: i64,
    pub bookings_starting_today: i64,

    pub trend: Vec<TrendPoint>,
}

fn start_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// Compute all dashboard KPIs as of `now`.
pub fn compute(
    assets: &[Asset],
    work_orders: &[WorkOrder],
    bookings: &[ToolBooking],
    now: DateTime<Utc>,
    cfg: &KpiConfig,
) -> DashboardKpis {
    let today_start = start_of_day(now);
    let window_start = today_start - Duration::days(cfg.window_days);

    // Asset counts
    let total_assets = assets.len() as i64;
    let offline_assets = assets
        .iter()
        .filter(|a| a.status != AssetStatus::Online)
        .count() as i64;
    let maintenance_assets = assets
        .iter()
        .filter(|a| a.status == AssetStatus::Maintenance)
        .count() as i64;
    let offline_unplanned_assets = assets
        .iter()
        .filter(|a| a.status == AssetStatus::OfflineUnplanned)
        .count() as i64;

    // Work order counts
    let open: Vec<&WorkOrder> = work_orders.iter().filter(|w| w.status.is_open()).collect();
    let overdue = open
        .iter()
        .filter(|w| w.date_due.map_or(false, |due| due < today_start))
        .count() as i64;
    let critical_open = open
        .iter()
        .filter(|w| w.priority == WorkOrderPriority::Critical)
        .count() as i64;

    let completed_in_window: Vec<&WorkOrder> = work_orders
        .iter()
        .filter(|w| {
            w.status.is_closed()
                && w.date_actual_completion
                    .map_or(false, |done| done >= window_start)
        })
        .collect();

    // PM compliance: preventive work due inside the window, completed or not
    let pms_due: Vec<&WorkOrder> = work_orders
        .iter()
        .filter(|w| {
            w.wo_type == WorkOrderType::Preventive
                && w.date_due
                    .map_or(false, |due| due >= window_start && due < today_start)
        })
        .collect();
    let pms_completed = pms_due.iter().filter(|w| w.status.is_closed()).count();
    let pm_compliance = if pms_due.is_empty() {
        // No PMs were due: vacuously compliant, not a divide-by-zero fallback
        100
    } else {
        percent(pms_completed, pms_due.len())
    };

    // Reactive vs preventive share of completed work
    let reactive_completed = completed_in_window
        .iter()
        .filter(|w| w.wo_type == WorkOrderType::Reactive)
        .count();
    let preventive_completed = completed_in_window
        .iter()
        .filter(|w| w.wo_type == WorkOrderType::Preventive)
        .count();
    let completed_types = reactive_completed + preventive_completed;
    let reactive_ratio = if completed_types == 0 {
        0
    } else {
        percent(reactive_completed, completed_types)
    };

    // Cost estimate over completed-in-window work
    let estimated_maintenance_cost: f64 = completed_in_window
        .iter()
        .map(|w| {
            cost::estimate_labor_cost(w, cfg.hourly_rate)
                + cost::estimate_parts_cost(w, cfg.parts_item_cost)
                + w.external_costs.unwrap_or(0.0)
        })
        .sum();

    // Booking counts
    let tomorrow_start = today_start + Duration::days(1);
    let pending_bookings = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .count() as i64;
    let bookings_starting_today = bookings
        .iter()
        .filter(|b| {
            b.status == BookingStatus::Approved
                && b.start_time >= today_start
                && b.start_time < tomorrow_start
        })
        .count() as i64;

    DashboardKpis {
        total_assets,
        online_assets: total_assets - offline_assets,
        offline_assets,
        maintenance_assets,
        offline_unplanned_assets,
        open_work_orders: open.len() as i64,
        overdue_work_orders: overdue,
        critical_open_work_orders: critical_open,
        pm_compliance,
        reactive_ratio,
        estimated_maintenance_cost,
        pending_bookings,
        bookings_starting_today,
        trend: trend(work_orders, today_start, cfg.trend_window_days),
    }
}

fn percent(numerator: usize, denominator: usize) -> i64 {
    (numerator as f64 / denominator as f64 * 100.0).round() as i64
}

/// Weekly created-vs-completed counts over the trend window, oldest first.
/// Weeks are aligned to the start of today: the last point covers the seven
/// days ending tonight.
fn trend(work_orders: &[WorkOrder], today_start: DateTime<Utc>, trend_window_days: i64) -> Vec<TrendPoint> {
    let weeks = trend_window_days / 7;
    let mut points = Vec::with_capacity(weeks as usize + 1);

    for i in (0..=weeks).rev() {
        let week_start = today_start - Duration::days(i * 7);
        let week_end = week_start + Duration::days(7);

        let created = work_orders
            .iter()
            .filter(|w| w.date_reported >= week_start && w.date_reported < week_end)
            .count() as i64;
        let completed = work_orders
            .iter()
            .filter(|w| {
                matches!(w.status, WorkOrderStatus::Completed | WorkOrderStatus::Closed)
                    && w.date_actual_completion
                        .map_or(false, |done| done >= week_start && done < week_end)
            })
            .count() as i64;

        points.push(TrendPoint {
            week_starting: week_start.date_naive(),
            created,
            completed,
        });
    }

    points
}
