//! Canonical column types and per-dialect type registries

mod canonical;
pub mod descriptor;
mod registry;

pub use canonical::CanonicalType;
pub use descriptor::{SurrogateCondition, SurrogateRule, TypeAttribute, TypeDescriptor};
pub use registry::{ParsedType, TypeRegistry};
