//! Extension registration lifecycle contracts.
//!
//! # Responsibility
//! - Declare exposed behaviors and the fixed registration lifecycle.
//! - Enforce discovery eligibility and the alias ordering policy.
//!
//! # Invariants
//! - `register` runs in fixed order: discovery, manual hook, alias hook,
//!   pending alias resolution.
//! - Pending aliases are resolved exactly once per `register` call, with
//!   existence verification enabled.

pub mod callable;
pub mod discovery;
pub mod registration;
