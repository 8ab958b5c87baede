//! Clipboard domain models.
mod ignore_policy;
mod representation;
mod type_category;
pub mod type_order;

pub use ignore_policy::{IgnorePolicy, IgnoreReason};
pub use representation::{Representation, RepresentationSet, RepresentationSetError};
pub use type_category::{TypeCategory, PIPELINE_MARKER_TYPE};
pub use type_order::{compare_types, sort_types, sorted_types};
