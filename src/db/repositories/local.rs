//! In-memory repository implementation for unit testing and local development.
//!
//! Data lives in a single `RwLock`-guarded store; every read clones out and
//! sorts into presentation order, matching the ordering contract of the
//! repository traits. Nothing persists across process restarts.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use crate::db::models::{
    Attraction, FlightArrival, NewAttraction, NewFlightArrival, NewOccupancyRate,
    NewOriginCountry, NewTouristSpending, NewVisitorStat, OccupancyRate, OriginCountry, Profile,
    TouristSpending, VisitorStat,
};
use crate::db::repository::{
    ErrorContext, FlightRepository, FullRepository, ProfileRepository, RepositoryError,
    RepositoryResult, TourismRepository,
};

#[derive(Default)]
struct Store {
    visitor_stats: Vec<VisitorStat>,
    origin_countries: Vec<OriginCountry>,
    occupancy_rates: Vec<OccupancyRate>,
    tourist_spending: Vec<TouristSpending>,
    attractions: Vec<Attraction>,
    flight_arrivals: Vec<FlightArrival>,
    profiles: HashMap<String, Profile>,
}

/// In-memory repository.
pub struct LocalRepository {
    store: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store::default()),
        }
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }

    fn not_found(entity: &str, id: &str) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("{} {} not found", entity, id),
            ErrorContext::default()
                .with_entity(entity)
                .with_entity_id(id),
        )
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TourismRepository for LocalRepository {
    async fn list_visitor_stats(&self) -> RepositoryResult<Vec<VisitorStat>> {
        let mut rows = self.store.read().visitor_stats.clone();
        rows.sort_by_key(|r| (r.year, r.month));
        Ok(rows)
    }

    async fn insert_visitor_stat(&self, stat: NewVisitorStat) -> RepositoryResult<VisitorStat> {
        let row = VisitorStat {
            id: Self::next_id(),
            year: stat.year,
            month: stat.month,
            domestic_count: stat.domestic_count,
            international_count: stat.international_count,
        };
        self.store.write().visitor_stats.push(row.clone());
        Ok(row)
    }

    async fn update_visitor_stat(
        &self,
        id: &str,
        stat: NewVisitorStat,
    ) -> RepositoryResult<VisitorStat> {
        let mut store = self.store.write();
        let row = store
            .visitor_stats
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found("visitor_stat", id))?;
        row.year = stat.year;
        row.month = stat.month;
        row.domestic_count = stat.domestic_count;
        row.international_count = stat.international_count;
        Ok(row.clone())
    }

    async fn delete_visitor_stat(&self, id: &str) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let before = store.visitor_stats.len();
        store.visitor_stats.retain(|r| r.id != id);
        if store.visitor_stats.len() == before {
            return Err(Self::not_found("visitor_stat", id));
        }
        Ok(())
    }

    async fn list_origin_countries(&self) -> RepositoryResult<Vec<OriginCountry>> {
        let mut rows = self.store.read().origin_countries.clone();
        rows.sort_by(|a, b| b.visitors.cmp(&a.visitors));
        Ok(rows)
    }

    async fn insert_origin_country(
        &self,
        country: NewOriginCountry,
    ) -> RepositoryResult<OriginCountry> {
        let row = OriginCountry {
            id: Self::next_id(),
            name: country.name,
            visitors: country.visitors,
            percentage: country.percentage,
            change: country.change,
            year: country.year,
        };
        self.store.write().origin_countries.push(row.clone());
        Ok(row)
    }

    async fn update_origin_country(
        &self,
        id: &str,
        country: NewOriginCountry,
    ) -> RepositoryResult<OriginCountry> {
        let mut store = self.store.write();
        let row = store
            .origin_countries
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found("origin_country", id))?;
        row.name = country.name;
        row.visitors = country.visitors;
        row.percentage = country.percentage;
        row.change = country.change;
        row.year = country.year;
        Ok(row.clone())
    }

    async fn delete_origin_country(&self, id: &str) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let before = store.origin_countries.len();
        store.origin_countries.retain(|r| r.id != id);
        if store.origin_countries.len() == before {
            return Err(Self::not_found("origin_country", id));
        }
        Ok(())
    }

    async fn list_occupancy_rates(&self) -> RepositoryResult<Vec<OccupancyRate>> {
        let mut rows = self.store.read().occupancy_rates.clone();
        rows.sort_by_key(|r| (r.year, r.month));
        Ok(rows)
    }

    async fn insert_occupancy_rate(
        &self,
        rate: NewOccupancyRate,
    ) -> RepositoryResult<OccupancyRate> {
        let row = OccupancyRate {
            id: Self::next_id(),
            year: rate.year,
            month: rate.month,
            rate: rate.rate,
        };
        self.store.write().occupancy_rates.push(row.clone());
        Ok(row)
    }

    async fn update_occupancy_rate(
        &self,
        id: &str,
        rate: NewOccupancyRate,
    ) -> RepositoryResult<OccupancyRate> {
        let mut store = self.store.write();
        let row = store
            .occupancy_rates
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found("occupancy_rate", id))?;
        row.year = rate.year;
        row.month = rate.month;
        row.rate = rate.rate;
        Ok(row.clone())
    }

    async fn delete_occupancy_rate(&self, id: &str) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let before = store.occupancy_rates.len();
        store.occupancy_rates.retain(|r| r.id != id);
        if store.occupancy_rates.len() == before {
            return Err(Self::not_found("occupancy_rate", id));
        }
        Ok(())
    }

    async fn list_tourist_spending(&self) -> RepositoryResult<Vec<TouristSpending>> {
        let mut rows = self.store.read().tourist_spending.clone();
        rows.sort_by_key(|r| (r.year, r.month));
        Ok(rows)
    }

    async fn insert_tourist_spending(
        &self,
        spending: NewTouristSpending,
    ) -> RepositoryResult<TouristSpending> {
        let row = TouristSpending {
            id: Self::next_id(),
            year: spending.year,
            month: spending.month,
            average_spending: spending.average_spending,
        };
        self.store.write().tourist_spending.push(row.clone());
        Ok(row)
    }

    async fn update_tourist_spending(
        &self,
        id: &str,
        spending: NewTouristSpending,
    ) -> RepositoryResult<TouristSpending> {
        let mut store = self.store.write();
        let row = store
            .tourist_spending
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found("tourist_spending", id))?;
        row.year = spending.year;
        row.month = spending.month;
        row.average_spending = spending.average_spending;
        Ok(row.clone())
    }

    async fn delete_tourist_spending(&self, id: &str) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let before = store.tourist_spending.len();
        store.tourist_spending.retain(|r| r.id != id);
        if store.tourist_spending.len() == before {
            return Err(Self::not_found("tourist_spending", id));
        }
        Ok(())
    }

    async fn list_attractions(&self) -> RepositoryResult<Vec<Attraction>> {
        let mut rows = self.store.read().attractions.clone();
        rows.sort_by(|a, b| b.visitor_count.cmp(&a.visitor_count));
        Ok(rows)
    }

    async fn insert_attraction(&self, attraction: NewAttraction) -> RepositoryResult<Attraction> {
        let row = Attraction {
            id: Self::next_id(),
            name: attraction.name,
            location: attraction.location,
            latitude: attraction.latitude,
            longitude: attraction.longitude,
            visitor_count: attraction.visitor_count,
            description: attraction.description,
            image_url: attraction.image_url,
        };
        self.store.write().attractions.push(row.clone());
        Ok(row)
    }

    async fn update_attraction(
        &self,
        id: &str,
        attraction: NewAttraction,
    ) -> RepositoryResult<Attraction> {
        let mut store = self.store.write();
        let row = store
            .attractions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found("attraction", id))?;
        row.name = attraction.name;
        row.location = attraction.location;
        row.latitude = attraction.latitude;
        row.longitude = attraction.longitude;
        row.visitor_count = attraction.visitor_count;
        row.description = attraction.description;
        row.image_url = attraction.image_url;
        Ok(row.clone())
    }

    async fn delete_attraction(&self, id: &str) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let before = store.attractions.len();
        store.attractions.retain(|r| r.id != id);
        if store.attractions.len() == before {
            return Err(Self::not_found("attraction", id));
        }
        Ok(())
    }
}

#[async_trait]
impl FlightRepository for LocalRepository {
    async fn list_arrivals_for_date(
        &self,
        date: NaiveDate,
    ) -> RepositoryResult<Vec<FlightArrival>> {
        let mut rows: Vec<FlightArrival> = self
            .store
            .read()
            .flight_arrivals
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.scheduled_time.cmp(&b.scheduled_time));
        Ok(rows)
    }

    async fn list_all_arrivals(&self) -> RepositoryResult<Vec<FlightArrival>> {
        let mut rows = self.store.read().flight_arrivals.clone();
        rows.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| a.scheduled_time.cmp(&b.scheduled_time))
        });
        Ok(rows)
    }

    async fn count_arrivals_for_date(&self, date: NaiveDate) -> RepositoryResult<usize> {
        Ok(self
            .store
            .read()
            .flight_arrivals
            .iter()
            .filter(|r| r.date == date)
            .count())
    }

    async fn delete_arrivals_for_date(&self, date: NaiveDate) -> RepositoryResult<usize> {
        let mut store = self.store.write();
        let before = store.flight_arrivals.len();
        store.flight_arrivals.retain(|r| r.date != date);
        Ok(before - store.flight_arrivals.len())
    }

    async fn insert_arrivals(&self, arrivals: &[FlightArrival]) -> RepositoryResult<usize> {
        let mut store = self.store.write();
        store.flight_arrivals.extend_from_slice(arrivals);
        Ok(arrivals.len())
    }

    async fn insert_arrival(&self, arrival: NewFlightArrival) -> RepositoryResult<FlightArrival> {
        let row = FlightArrival {
            id: Self::next_id(),
            airline_code: arrival.airline_code,
            airline_name: arrival.airline_name,
            flight_number: arrival.flight_number,
            origin_city: arrival.origin_city,
            scheduled_time: arrival.scheduled_time,
            estimated_time: arrival.estimated_time,
            status: arrival.status,
            terminal: arrival.terminal,
            date: arrival.date,
        };
        self.store.write().flight_arrivals.push(row.clone());
        Ok(row)
    }

    async fn update_arrival(
        &self,
        id: &str,
        arrival: NewFlightArrival,
    ) -> RepositoryResult<FlightArrival> {
        let mut store = self.store.write();
        let row = store
            .flight_arrivals
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Self::not_found("flight_arrival", id))?;
        row.airline_code = arrival.airline_code;
        row.airline_name = arrival.airline_name;
        row.flight_number = arrival.flight_number;
        row.origin_city = arrival.origin_city;
        row.scheduled_time = arrival.scheduled_time;
        row.estimated_time = arrival.estimated_time;
        row.status = arrival.status;
        row.terminal = arrival.terminal;
        row.date = arrival.date;
        Ok(row.clone())
    }

    async fn delete_arrival(&self, id: &str) -> RepositoryResult<()> {
        let mut store = self.store.write();
        let before = store.flight_arrivals.len();
        store.flight_arrivals.retain(|r| r.id != id);
        if store.flight_arrivals.len() == before {
            return Err(Self::not_found("flight_arrival", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for LocalRepository {
    async fn get_profile(&self, user_id: &str) -> RepositoryResult<Option<Profile>> {
        Ok(self.store.read().profiles.get(user_id).cloned())
    }

    async fn upsert_profile(&self, profile: Profile) -> RepositoryResult<Profile> {
        self.store
            .write()
            .profiles
            .insert(profile.id.clone(), profile.clone());
        Ok(profile)
    }
}

#[async_trait]
impl FullRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        // A lock round trip is the closest thing to connectivity here.
        let _ = self.store.read().flight_arrivals.len();
        Ok(true)
    }
}
