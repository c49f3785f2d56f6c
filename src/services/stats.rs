//! Derived statistics for the dashboard stat grid.
//!
//! Works on small, pre-sorted in-memory series: the repository returns time
//! series ascending by (year, month), and this module never re-sorts.

use chrono::NaiveDate;

use crate::api::{ChangeMode, DashboardSummary, DerivedStat};
use crate::db::repository::{FlightRepository, FullRepository, RepositoryResult, TourismRepository};

/// Latest value and period-over-period change of a series.
///
/// Rules:
/// - empty series → `{0, 0}`
/// - single point → `{value, 0}`
/// - otherwise the delta between the last two points, expressed per `mode`
/// - zero previous value under [`ChangeMode::Relative`] → change of 0 rather
///   than a non-finite number reaching the presentation layer
pub fn latest_and_change(values: &[f64], mode: ChangeMode) -> DerivedStat {
    let Some(&latest) = values.last() else {
        return DerivedStat::ZERO;
    };
    if values.len() < 2 {
        return DerivedStat {
            latest,
            percent_change: 0.0,
        };
    }

    let previous = values[values.len() - 2];
    let percent_change = match mode {
        ChangeMode::Relative => {
            if previous == 0.0 {
                0.0
            } else {
                (latest - previous) / previous * 100.0
            }
        }
        ChangeMode::PercentagePoints => latest - previous,
    };

    DerivedStat {
        latest,
        percent_change,
    }
}

/// Assemble the headline metrics for the dashboard stat grid.
///
/// `today` scopes the flight-arrival comparison (today vs yesterday); the
/// monthly series come straight from the repository in presentation order.
pub async fn dashboard_summary(
    repo: &dyn FullRepository,
    today: NaiveDate,
) -> RepositoryResult<DashboardSummary> {
    let visitor_totals: Vec<f64> = repo
        .list_visitor_stats()
        .await?
        .iter()
        .map(|s| s.total() as f64)
        .collect();

    let occupancy_rates: Vec<f64> = repo
        .list_occupancy_rates()
        .await?
        .iter()
        .map(|r| r.rate)
        .collect();

    let spending: Vec<f64> = repo
        .list_tourist_spending()
        .await?
        .iter()
        .map(|s| s.average_spending)
        .collect();

    let yesterday = today.pred_opt().unwrap_or(today);
    let flight_counts = [
        repo.count_arrivals_for_date(yesterday).await? as f64,
        repo.count_arrivals_for_date(today).await? as f64,
    ];

    Ok(DashboardSummary {
        visitors: latest_and_change(&visitor_totals, ChangeMode::Relative),
        occupancy: latest_and_change(&occupancy_rates, ChangeMode::PercentagePoints),
        spending: latest_and_change(&spending, ChangeMode::Relative),
        flights: latest_and_change(&flight_counts, ChangeMode::Relative),
    })
}
