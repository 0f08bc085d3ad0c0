//! Test utilities for the Einhorn workspace.
//!
//! Tests create an in-memory SQLite database through [`TestSetup`], usually via the
//! [`test_setup_with_tables!`] or [`test_setup_with_einhorn_tables!`] macros, and then insert
//! the records they need with the fixture accessors (`test.user()`, `test.traindb()`,
//! `test.timetable()`, `test.trip()`).

pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_einhorn_tables, test_setup_with_tables, TestError,
        TestSetup,
    };
}
