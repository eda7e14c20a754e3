//! Axis Mundi Engine library.
//!
//! Loads and stores actor records, runs derivation, and assembles sheets.
//!
//! ## Structure
//!
//! - `use_cases/` - Derivation, sheet assembly, and skill seeding
//! - `infrastructure/` - Configuration, ports, and the JSON file adapters
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
