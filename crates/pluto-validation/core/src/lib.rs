//! Pluto Validation Core
//!
//! Declarative form validation: fields carry `pluto-*` attributes, the engine
//! checks their values against the declared rules and returns a per-field map
//! of error messages. Nothing here touches a real DOM; the browser bindings
//! implement the [`FormElement`], [`FieldElement`] and [`ErrorSurface`] traits
//! over `web-sys`, and the tests implement them over an in-memory document.
//!
//! ```
//! use pluto_validation_core::{DataType, FieldDescriptor, ValidationEngine};
//!
//! let engine = ValidationEngine::default();
//! let age = FieldDescriptor::new("age", "17")
//!     .with_data_type(DataType::Integer)
//!     .with_min(18.0);
//!
//! let result = engine.validate_form(&[age]);
//! assert!(!result.is_valid);
//! assert_eq!(
//!     result.get_error("age").map(String::as_str),
//!     Some("The minimum value required is: 18")
//! );
//! ```

pub mod binder;
pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod email;
pub mod engine;
pub mod error;
pub mod identity;
pub mod numeric;
pub mod render;
pub mod result;

pub use binder::{
    is_validated_form, FieldElement, FormBinder, FormElement, SubmitDecision, FORM_SELECTOR,
};
pub use catalog::{Rule, RuleCatalog};
pub use config::{PlutoConfig, DEFAULT_ERROR_CLASSES};
pub use descriptor::{override_rule, AttributeSource, DataType, FieldDescriptor};
pub use email::is_valid_email;
pub use engine::ValidationEngine;
pub use error::{PlutoError, Result};
pub use identity::{resolve_identity, IdGenerator, Identified, IdentityScope, SequentialIds};
pub use numeric::{
    compare_integer, parse_decimal, parse_integer, validate_max, validate_min, Bounded,
};
pub use render::{display_selector, render_errors, ErrorSurface};
pub use result::{ErrorMap, ValidationResult};

#[cfg(feature = "random-ids")]
pub use identity::RandomIds;
