//! Counts the relevant occupancy squares of sliding pieces on an 8x8 board and finds the
//! origin that needs the most blocker configurations, which is what sizes magic attack tables.

pub mod blockers;
pub mod board;
pub mod error;
pub mod ray;
pub mod report;
pub mod types;
