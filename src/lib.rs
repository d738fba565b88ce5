//! Records license-registration events into a Google Sheets spreadsheet,
//! one sheet tab per product and one row per event.

pub mod cli;
pub mod common;
pub mod recorder;
pub mod sheets;
