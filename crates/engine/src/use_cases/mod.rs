//! Use cases - User story orchestration.
//!
//! Each module loads actors through the repository port, runs the domain
//! rules over them, and hands back (or stores) the result.

pub mod derive;
pub mod sheet;
pub mod skills;

pub use derive::{DeriveError, DeriveUseCases};
pub use sheet::{SheetBuilder, SheetContext, SheetError, SheetUseCases};
pub use skills::{SeedResult, SkillError, SkillUseCases};
