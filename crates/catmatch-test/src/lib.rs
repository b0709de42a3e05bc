//! Shared test fixtures for catmatch crates.
//!
//! - [`taxonomy`] - category trees, including the automotive mock taxonomy
//! - [`schema`] - attribute schemas for leaf categories
//! - [`payloads`] - raw JSON payloads in the marketplace's formats
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! catmatch-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use catmatch_test::taxonomy::automotive_taxonomy;
//! use catmatch_test::schema::kitesurf_schema;
//! ```

pub mod payloads;
pub mod schema;
pub mod taxonomy;

pub use schema::{kitesurf_schema, labelled_schema};
pub use taxonomy::{automotive_taxonomy, bmw_taxonomy, sports_taxonomy};
