//! Repository layer: identity allocation and list/item storage.
//!
//! # Responsibility
//! - Hold the live set of lists and hand out fresh ids.
//! - Perform structural mutations only; uniqueness checks live in services.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`ListNotFound`, `ItemNotFound`)
//!   instead of panicking on missing records.

pub mod list_repo;
