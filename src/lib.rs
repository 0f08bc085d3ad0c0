//! Einhorn railway riding log.
//!
//! The schema lives in the `entity` and `migration` crates; this crate provides the
//! repositories ([`data`]) and services ([`service`]) that record trips, train rides and
//! ridden line segments, and keep the derived trip dates and kilo totals up to date.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
