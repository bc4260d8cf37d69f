//! Presentation layer: audits an inventory and renders the result as text.
//!
//! The domain crates stay print-free; everything console-shaped lives here.

pub mod audit;
pub mod demo;
pub mod error;
pub mod render;

pub use audit::{audit, AuditReport, AuditSection};
pub use error::ReportError;
pub use render::render;
