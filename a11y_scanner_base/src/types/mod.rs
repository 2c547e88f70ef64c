//! # Scan Result Data Model
//!
//! Typed representation of the accessibility engine's structured result.
//! Validation happens once, at the engine boundary, when the raw engine
//! value is deserialized into these types; everything downstream
//! (summarizing, rendering, gating) can rely on the shape.

pub mod category;
pub mod error;
pub mod result;
pub mod summary;

pub use category::{RuleCategory, UnsupportedCategory};
pub use error::ResultParseError;
pub use result::{Node, Rule, ScanResult};
pub use summary::Summary;
