//! An interactive console tool for recording course grades and credits.
//!
//! Courses are kept in memory for the duration of one session. For every course
//! the best grade reported so far and the most recently reported credit value
//! are remembered, and the record can summarize itself as a count, a credit
//! total, a mean grade and a grade distribution.
//!
//! The main entry point is [`App`], which shows a numbered menu and dispatches
//! what the user types to a set of pluggable command factories. The public
//! modules [`command`] and [`io_adapters`] expose the traits needed to add
//! commands or to drive the application from something other than a terminal.

pub mod app;
pub mod command;
pub mod course;
pub mod error;
pub mod io_adapters;
mod menu;
pub mod record;
pub mod session;
pub mod stats;

/// Just a convenient re-export of the interactive application.
///
/// See [`App`] for the high-level API and examples.
pub use app::App;
pub use course::CourseEntry;
pub use record::CourseRecord;
pub use stats::Statistics;
