//! Meetup Core - Scheduled event lifecycle
//!
//! This crate derives the lifecycle status of scheduled meetups from the
//! clock, carries their lobby state, and aggregates attendance responses
//! from the event and confirm stores it is wired to.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
