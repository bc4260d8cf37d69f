//! Inventory domain module.
//!
//! This crate contains the inventory transformation rules, implemented purely
//! as deterministic domain logic (no IO, no printing, no storage).

pub mod inventory;
pub mod item;

pub use inventory::Inventory;
pub use item::Item;
