//! Momentum screener: technical indicator engine and rule-based stock screening.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod models;
pub mod services;
pub mod strategies;
