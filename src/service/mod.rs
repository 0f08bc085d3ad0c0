//! Service layer.
//!
//! Services validate input, translate missing records into [`crate::error::Error`] values and
//! coordinate the repositories. Every write that touches train logs or segment logs runs in a
//! single transaction together with the recomputation of the cached values derived from them.

pub mod cache;
pub mod profile;
pub mod timetable;
pub mod trip;
