//! Core library for ClubCompass, a campus club recommendation service.
//!
//! The crate hosts the quiz domain model, the static scoring table, the
//! recommendation engine, and the assessment service the API binary wires
//! together. Storage and club lookup sit behind traits so every flow can be
//! exercised against in-memory implementations.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
