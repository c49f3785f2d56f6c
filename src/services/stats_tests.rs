#[cfg(test)]
mod tests {
    use crate::api::ChangeMode;
    use crate::db::models::{NewFlightArrival, NewOccupancyRate, NewTouristSpending, NewVisitorStat};
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::{FlightRepository, TourismRepository};
    use crate::services::stats::{dashboard_summary, latest_and_change};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_series() {
        let stat = latest_and_change(&[], ChangeMode::Relative);
        assert_eq!(stat.latest, 0.0);
        assert_eq!(stat.percent_change, 0.0);
    }

    #[test]
    fn test_single_point_series() {
        let stat = latest_and_change(&[70.0], ChangeMode::Relative);
        assert_eq!(stat.latest, 70.0);
        assert_eq!(stat.percent_change, 0.0);
    }

    #[test]
    fn test_relative_change() {
        let stat = latest_and_change(&[80.0, 88.0], ChangeMode::Relative);
        assert_eq!(stat.latest, 88.0);
        assert!((stat.percent_change - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_percentage_point_change() {
        let stat = latest_and_change(&[80.0, 88.0], ChangeMode::PercentagePoints);
        assert_eq!(stat.latest, 88.0);
        assert!((stat.percent_change - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_previous_value_guard() {
        let stat = latest_and_change(&[0.0, 55.0], ChangeMode::Relative);
        assert_eq!(stat.latest, 55.0);
        assert_eq!(stat.percent_change, 0.0);
        assert!(stat.percent_change.is_finite());
    }

    #[test]
    fn test_negative_change() {
        let stat = latest_and_change(&[100.0, 80.0], ChangeMode::Relative);
        assert!((stat.percent_change + 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_last_two_points_matter() {
        let long = latest_and_change(&[5.0, 9.0, 80.0, 88.0], ChangeMode::Relative);
        let short = latest_and_change(&[80.0, 88.0], ChangeMode::Relative);
        assert_eq!(long, short);
    }

    #[tokio::test]
    async fn test_dashboard_summary_from_repository() {
        let repo = LocalRepository::new();
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        let yesterday = today.pred_opt().unwrap();

        // Two months of visitors: 100k total then 110k total.
        for (month, domestic, international) in [(3, 60_000, 40_000), (4, 66_000, 44_000)] {
            repo.insert_visitor_stat(NewVisitorStat {
                year: 2024,
                month,
                domestic_count: domestic,
                international_count: international,
            })
            .await
            .unwrap();
        }
        for (month, rate) in [(3, 72.0), (4, 78.5)] {
            repo.insert_occupancy_rate(NewOccupancyRate {
                year: 2024,
                month,
                rate,
            })
            .await
            .unwrap();
        }
        repo.insert_tourist_spending(NewTouristSpending {
            year: 2024,
            month: 4,
            average_spending: 980.0,
        })
        .await
        .unwrap();

        // Two arrivals yesterday, three today.
        for (date, count) in [(yesterday, 2), (today, 3)] {
            for i in 0..count {
                repo.insert_arrival(NewFlightArrival {
                    airline_code: String::new(),
                    airline_name: String::new(),
                    flight_number: format!("MH{}{}", date, i),
                    origin_city: String::new(),
                    scheduled_time: String::new(),
                    estimated_time: String::new(),
                    status: "Scheduled".to_string(),
                    terminal: String::new(),
                    date,
                })
                .await
                .unwrap();
            }
        }

        let summary = dashboard_summary(&repo, today).await.unwrap();

        assert_eq!(summary.visitors.latest, 110_000.0);
        assert!((summary.visitors.percent_change - 10.0).abs() < 1e-9);

        assert_eq!(summary.occupancy.latest, 78.5);
        assert!((summary.occupancy.percent_change - 6.5).abs() < 1e-9);

        // Single spending point: no change yet.
        assert_eq!(summary.spending.latest, 980.0);
        assert_eq!(summary.spending.percent_change, 0.0);

        assert_eq!(summary.flights.latest, 3.0);
        assert!((summary.flights.percent_change - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_dashboard_summary_empty_repository() {
        let repo = LocalRepository::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let summary = dashboard_summary(&repo, today).await.unwrap();
        assert_eq!(summary.visitors.latest, 0.0);
        assert_eq!(summary.occupancy.percent_change, 0.0);
        // Flight counts are always a two-point series; both zero here.
        assert_eq!(summary.flights.latest, 0.0);
        assert_eq!(summary.flights.percent_change, 0.0);
    }
}
