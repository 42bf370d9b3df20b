// File: src/binder.rs
// Purpose: Submit-time orchestration: identities, descriptors, validation, rendering

use tracing::debug;

use crate::descriptor::{AttributeSource, FieldDescriptor};
use crate::engine::ValidationEngine;
use crate::error::Result;
use crate::identity::{resolve_identity, IdGenerator, Identified, IdentityScope};
use crate::render::{render_errors, ErrorSurface};
use crate::result::ValidationResult;

/// Marker attribute on forms that opt into validation
pub const VALIDATE_ATTRIBUTE: &str = "pluto-validate";

/// Selector for every form that opts into validation
pub const FORM_SELECTOR: &str = "form[pluto-validate]";

/// An input element as seen by the binder
pub trait FieldElement: IdentityScope + AttributeSource {
    /// The current value as typed by the user
    fn value(&self) -> String;
}

/// A form element as seen by the binder
pub trait FormElement: Identified + AttributeSource {
    type Field: FieldElement;

    /// Inputs in document order
    fn fields(&self) -> Vec<Self::Field>;
}

/// Whether the form carries the `pluto-validate` marker
pub fn is_validated_form<F: AttributeSource + ?Sized>(form: &F) -> bool {
    form.attribute(VALIDATE_ATTRIBUTE).is_some()
}

/// What the host should do with the submit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the submission go through
    Proceed,
    /// Cancel the submission (`preventDefault`)
    Suppress,
}

impl SubmitDecision {
    pub fn from_result(result: &ValidationResult) -> Self {
        if result.is_valid {
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Suppress
        }
    }
}

/// Ties the engine to a document: one call per submit attempt
///
/// The binder owns the id generator, the only state that changes between
/// passes. Error maps never outlive the call that produced them.
#[derive(Debug, Clone)]
pub struct FormBinder<G> {
    engine: ValidationEngine,
    ids: G,
}

impl<G: IdGenerator> FormBinder<G> {
    pub fn new(engine: ValidationEngine, ids: G) -> Self {
        Self { engine, ids }
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// Snapshot every input of the form, assigning ids where missing
    pub fn describe<F: FormElement>(&mut self, form: &F) -> Result<Vec<FieldDescriptor>> {
        form.fields()
            .iter()
            .map(|field| {
                let identity = resolve_identity(field, &mut self.ids)?;
                Ok(FieldDescriptor::from_attributes(identity, field.value(), field))
            })
            .collect()
    }

    /// Validate the form's current values without touching the page
    pub fn validate<F: FormElement>(&mut self, form: &F) -> Result<ValidationResult> {
        let fields = self.describe(form)?;
        Ok(self.engine.validate_form(&fields))
    }

    /// Full submit handling: validate, render errors on failure, decide
    pub fn check<F, S>(&mut self, form: &F, surface: &S) -> Result<SubmitDecision>
    where
        F: FormElement,
        S: ErrorSurface + ?Sized,
    {
        let result = self.validate(form)?;

        if !result.is_valid {
            let rendered = render_errors(&result.errors, self.engine.error_classes(), surface);
            debug!(form = ?form.id(), rendered, "submission suppressed");
        }

        Ok(SubmitDecision::from_result(&result))
    }
}
