//! Release analysis - version calculation and changelog grouping over a
//! parsed change set

pub mod calculator;
pub mod changelog;

pub use calculator::{decide_bump, next_version};
pub use changelog::{ChangelogEntry, ChangelogGroup};
