//! # LTI Rust Backend
//!
//! Backend for the Langkawi Tourism Insights (LTI) dashboard.
//!
//! This crate serves the chart data behind the React frontend (visitor
//! statistics, origin countries, occupancy rates, tourist spending,
//! attractions, flight arrivals), exposes admin CRUD over the underlying
//! tables, and ingests live flight-arrival data from a third-party API whose
//! response shape is not contractually fixed.
//!
//! ## Features
//!
//! - **Flight ingestion**: shape probing and alias-driven normalization of
//!   untyped flight-API documents
//! - **Derived statistics**: latest value and period-over-period change for
//!   the dashboard stat grid
//! - **Sync orchestration**: serialized replace-by-day refresh of the
//!   flight_arrivals table
//! - **Role gating**: admin endpoints guarded by the profiles table
//! - **HTTP API**: RESTful endpoints for frontend integration (Axum)
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data types exposed through the REST API
//! - [`db`]: Database operations, repository pattern, and persistence layer
//! - [`flightdata`]: Flight API client, shape prober, field normalizer
//! - [`services`]: Derived statistics and sync orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;

pub mod flightdata;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
