use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{
    attractions, flight_arrivals, occupancy_rates, origin_countries, profiles, tourist_spending,
    visitor_stats,
};
use crate::db::models;

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = visitor_stats)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VisitorStatRow {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub domestic_count: i64,
    pub international_count: i64,
}

impl From<VisitorStatRow> for models::VisitorStat {
    fn from(row: VisitorStatRow) -> Self {
        Self {
            id: row.id,
            year: row.year,
            month: row.month,
            domestic_count: row.domestic_count,
            international_count: row.international_count,
        }
    }
}

impl VisitorStatRow {
    pub fn from_new(id: String, stat: models::NewVisitorStat) -> Self {
        Self {
            id,
            year: stat.year,
            month: stat.month,
            domestic_count: stat.domestic_count,
            international_count: stat.international_count,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = origin_countries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OriginCountryRow {
    pub id: String,
    pub name: String,
    pub visitors: i64,
    pub percentage: f64,
    pub change: String,
    pub year: i32,
}

impl From<OriginCountryRow> for models::OriginCountry {
    fn from(row: OriginCountryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            visitors: row.visitors,
            percentage: row.percentage,
            change: row.change,
            year: row.year,
        }
    }
}

impl OriginCountryRow {
    pub fn from_new(id: String, country: models::NewOriginCountry) -> Self {
        Self {
            id,
            name: country.name,
            visitors: country.visitors,
            percentage: country.percentage,
            change: country.change,
            year: country.year,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = occupancy_rates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OccupancyRateRow {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub rate: f64,
}

impl From<OccupancyRateRow> for models::OccupancyRate {
    fn from(row: OccupancyRateRow) -> Self {
        Self {
            id: row.id,
            year: row.year,
            month: row.month,
            rate: row.rate,
        }
    }
}

impl OccupancyRateRow {
    pub fn from_new(id: String, rate: models::NewOccupancyRate) -> Self {
        Self {
            id,
            year: rate.year,
            month: rate.month,
            rate: rate.rate,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = tourist_spending)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TouristSpendingRow {
    pub id: String,
    pub year: i32,
    pub month: i32,
    pub average_spending: f64,
}

impl From<TouristSpendingRow> for models::TouristSpending {
    fn from(row: TouristSpendingRow) -> Self {
        Self {
            id: row.id,
            year: row.year,
            month: row.month,
            average_spending: row.average_spending,
        }
    }
}

impl TouristSpendingRow {
    pub fn from_new(id: String, spending: models::NewTouristSpending) -> Self {
        Self {
            id,
            year: spending.year,
            month: spending.month,
            average_spending: spending.average_spending,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = attractions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
// Updates clearing description/image_url must write NULL, not skip the column
#[diesel(treat_none_as_null = true)]
pub struct AttractionRow {
    pub id: String,
    pub name: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub visitor_count: i64,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<AttractionRow> for models::Attraction {
    fn from(row: AttractionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            location: row.location,
            latitude: row.latitude,
            longitude: row.longitude,
            visitor_count: row.visitor_count,
            description: row.description,
            image_url: row.image_url,
        }
    }
}

impl AttractionRow {
    pub fn from_new(id: String, attraction: models::NewAttraction) -> Self {
        Self {
            id,
            name: attraction.name,
            location: attraction.location,
            latitude: attraction.latitude,
            longitude: attraction.longitude,
            visitor_count: attraction.visitor_count,
            description: attraction.description,
            image_url: attraction.image_url,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = flight_arrivals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FlightArrivalRow {
    pub id: String,
    pub airline_code: String,
    pub airline_name: String,
    pub flight_number: String,
    pub origin_city: String,
    pub scheduled_time: String,
    pub estimated_time: String,
    pub status: String,
    pub terminal: String,
    pub date: NaiveDate,
}

impl From<FlightArrivalRow> for models::FlightArrival {
    fn from(row: FlightArrivalRow) -> Self {
        Self {
            id: row.id,
            airline_code: row.airline_code,
            airline_name: row.airline_name,
            flight_number: row.flight_number,
            origin_city: row.origin_city,
            scheduled_time: row.scheduled_time,
            estimated_time: row.estimated_time,
            status: row.status,
            terminal: row.terminal,
            date: row.date,
        }
    }
}

impl From<models::FlightArrival> for FlightArrivalRow {
    fn from(arrival: models::FlightArrival) -> Self {
        Self {
            id: arrival.id,
            airline_code: arrival.airline_code,
            airline_name: arrival.airline_name,
            flight_number: arrival.flight_number,
            origin_city: arrival.origin_city,
            scheduled_time: arrival.scheduled_time,
            estimated_time: arrival.estimated_time,
            status: arrival.status,
            terminal: arrival.terminal,
            date: arrival.date,
        }
    }
}

impl FlightArrivalRow {
    pub fn from_new(id: String, arrival: models::NewFlightArrival) -> Self {
        Self {
            id,
            airline_code: arrival.airline_code,
            airline_name: arrival.airline_name,
            flight_number: arrival.flight_number,
            origin_city: arrival.origin_city,
            scheduled_time: arrival.scheduled_time,
            estimated_time: arrival.estimated_time,
            status: arrival.status,
            terminal: arrival.terminal,
            date: arrival.date,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    pub id: String,
    pub full_name: String,
    pub role: String,
}

impl From<ProfileRow> for models::Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            full_name: row.full_name,
            role: row.role,
        }
    }
}

impl From<models::Profile> for ProfileRow {
    fn from(profile: models::Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name,
            role: profile.role,
        }
    }
}
