//! Data loading: parse the results table into typed records.
//!
//! This module handles the first stage of the pipeline - turning the
//! tab-delimited results file into an in-memory, read-only store. It provides:
//!
//! - **Records**: the fixed-schema [`ResultRecord`] and its [`Medal`]
//! - **Normalization**: [`team_prefix`] and [`display_name`] for the `Team` column
//! - **Store**: [`RecordStore`], built once by the loader and shared by every query
//!
//! ## Example
//!
//! ```rust,ignore
//! use olympicslib::data::RecordStore;
//!
//! let store = RecordStore::load("athlete_events.tsv")?;
//! println!("{} records", store.len());
//! ```

pub mod record;
pub mod store;

pub use record::{display_name, team_prefix, FieldValue, Medal, ResultRecord};
pub use store::{RecordStore, REQUIRED_COLUMNS};
