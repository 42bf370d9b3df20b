//! The validation engine
//!
//! The engine is immutable once built. Every call to
//! [`ValidationEngine::validate_form`] starts from an empty [`ErrorMap`] and
//! hands it back inside the [`ValidationResult`], so one engine can validate
//! any number of forms, in any interleaving.

use tracing::{debug, trace};

use crate::catalog::{Rule, RuleCatalog, BOUND_PLACEHOLDER};
use crate::config::PlutoConfig;
use crate::descriptor::{DataType, FieldDescriptor};
use crate::email::is_valid_email;
use crate::numeric::{parse_decimal, parse_integer, Bounded};
use crate::result::{ErrorMap, ValidationResult};

#[derive(Debug, Clone)]
pub struct ValidationEngine {
    catalog: RuleCatalog,
    error_classes: Vec<String>,
}

impl ValidationEngine {
    pub fn new(catalog: RuleCatalog, error_classes: Vec<String>) -> Self {
        Self {
            catalog,
            error_classes,
        }
    }

    pub fn with_config(config: &PlutoConfig) -> Self {
        Self::new(config.catalog(), config.error_classes())
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Classes the renderer adds to invalid fields
    pub fn error_classes(&self) -> &[String] {
        &self.error_classes
    }

    /// Validate every field, in order, without stopping at the first failure
    pub fn validate_form(&self, fields: &[FieldDescriptor]) -> ValidationResult {
        let mut errors = ErrorMap::new();
        let mut is_valid = true;

        for field in fields {
            if !self.validate_field(field, &mut errors) {
                is_valid = false;
            }
        }

        debug!(
            fields = fields.len(),
            invalid = errors.len(),
            is_valid,
            "validated form"
        );

        if is_valid {
            ValidationResult::success()
        } else {
            ValidationResult::failure(errors)
        }
    }

    /// Validate one field, appending a message for every rule it breaks
    ///
    /// An empty value is only checked against `required`; the type rules
    /// apply to whatever the user actually typed.
    pub fn validate_field(&self, field: &FieldDescriptor, errors: &mut ErrorMap) -> bool {
        let mut is_valid = true;

        if field.required && field.value.is_empty() {
            self.report(field, Rule::Required, None, errors);
            is_valid = false;
        }

        if field.value.is_empty() {
            return is_valid;
        }

        let type_valid = match field.data_type {
            DataType::None => true,
            DataType::Integer => self.check_integer(field, errors),
            DataType::Decimal => self.check_decimal(field, errors),
            DataType::Email => self.check_email(field, errors),
        };

        is_valid && type_valid
    }

    fn check_integer(&self, field: &FieldDescriptor, errors: &mut ErrorMap) -> bool {
        match parse_integer(&field.value) {
            Some(value) => self.check_bounds(field, value, errors),
            None => {
                self.report(field, Rule::Int, None, errors);
                false
            }
        }
    }

    fn check_decimal(&self, field: &FieldDescriptor, errors: &mut ErrorMap) -> bool {
        match parse_decimal(&field.value) {
            Some(value) => self.check_bounds(field, value, errors),
            None => {
                self.report(field, Rule::Double, None, errors);
                false
            }
        }
    }

    fn check_email(&self, field: &FieldDescriptor, errors: &mut ErrorMap) -> bool {
        if is_valid_email(&field.value) {
            return true;
        }
        self.report(field, Rule::Email, None, errors);
        false
    }

    // min and max are independent: both run, both may report.
    fn check_bounds<V: Bounded>(
        &self,
        field: &FieldDescriptor,
        value: V,
        errors: &mut ErrorMap,
    ) -> bool {
        let mut is_valid = true;

        if let Some(min) = field.min_value {
            if !value.at_least(min) {
                self.report(field, Rule::Min, Some(min), errors);
                is_valid = false;
            }
        }

        if let Some(max) = field.max_value {
            if !value.at_most(max) {
                self.report(field, Rule::Max, Some(max), errors);
                is_valid = false;
            }
        }

        is_valid
    }

    /// Message for `rule` on `field`
    ///
    /// A `pluto-<rule>-error` override wins and is used verbatim. Otherwise the
    /// catalog entry is used; unknown rules resolve to an empty string.
    pub fn message_for(&self, field: &FieldDescriptor, rule: &str) -> String {
        if let Some(custom) = field.custom_message(rule) {
            return custom.to_string();
        }
        self.catalog.get(rule).unwrap_or_default().to_string()
    }

    fn report(
        &self,
        field: &FieldDescriptor,
        rule: Rule,
        bound: Option<f64>,
        errors: &mut ErrorMap,
    ) {
        let message = match (field.custom_message(rule.name()), bound) {
            (Some(custom), _) => custom.to_string(),
            (None, Some(bound)) => self
                .message_for(field, rule.name())
                .replace(BOUND_PLACEHOLDER, &bound.to_string()),
            (None, None) => self.message_for(field, rule.name()),
        };

        trace!(field = %field.identity, %rule, value = %field.value, "rule failed");
        errors.push(&field.identity, message);
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_config(&PlutoConfig::default())
    }
}
