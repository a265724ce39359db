//! Domain Policies
//!
//! Fixed game rules. Pure functions over plain values.

mod accusation_policy;

pub use accusation_policy::{names_match, verdict_for, ACCUSATION_THRESHOLD};
