//! Core library for the AI maturity assessment service: catalogs, the
//! scoring engine, rule-based product/use-case matching, and the
//! recommendation composer exposed through an axum router.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
