//! Flows module - Multi-step run drivers
//!
//! A flow combines the lower modules (vcs enumeration, header application,
//! report rendering) with user interaction into a complete run.

pub mod stamp;
