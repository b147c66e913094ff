//! Core types and backend client for the weather trends dashboard.
//!
//! This crate provides:
//! - `summary` / `trend`: the JSON payloads served by the weather backend
//! - `series`: the mapping from a yearly summary onto two twelve-point chart series
//! - `page`: the dashboard's fetch lifecycle
//! - `config`: endpoint paths and native client settings
//! - `decode`: status + body classification shared by the browser and native clients
//! - `client`: a `reqwest` client for native consumers (feature `api`)

pub mod config;
pub mod decode;
pub mod error;
pub mod page;
pub mod series;
pub mod summary;
pub mod trend;

#[cfg(feature = "api")]
pub mod client;
