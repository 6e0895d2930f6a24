//! VCS module - Tracked-file enumeration
//!
//! The subprocess call to git lives behind this narrow interface so the
//! header logic stays pure and unit-testable without a repository checkout.

pub mod git;
