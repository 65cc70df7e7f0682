//! Lint rules

pub mod jsx_required_attributes;

// Re-export rule structs
pub use jsx_required_attributes::{
    JsxRequiredAttributes, RequiredAttributeOptions, RequiredAttributesConfig,
};
