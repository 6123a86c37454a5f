//! # pkilint-regions — Region Lookup Boundary
//!
//! Answers one question for lints: is province `P` a region of country `C`?
//!
//! - **Check** (`check.rs`): the three-outcome [`RegionCheck`] and the
//!   [`RegionLookup`] trait every knowledge base implements.
//!
//! - **Table** (`table.rs`): [`RegionTable`], a knowledge base loaded from a
//!   YAML document and validated at load time.
//!
//! ## Outcomes
//!
//! ```text
//! Valid          province is a confirmed region of the country
//! UnknownRegion  no match, but the country's region list is not authoritative
//! InvalidRegion  no match, and the country's region list is authoritative
//! ```
//!
//! Anything else a backing store might produce is a [`RegionError`], never
//! a guessed outcome.

pub mod check;
pub mod error;
pub mod table;

pub use check::{RegionCheck, RegionLookup};
pub use error::{RegionError, RegionResult};
pub use table::{CountryRegions, Region, RegionTable};
