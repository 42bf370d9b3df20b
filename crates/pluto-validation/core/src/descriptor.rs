//! Field descriptors
//!
//! A [`FieldDescriptor`] is a snapshot of one input's validation rules and its
//! current value, read from the `pluto-*` attributes. Descriptors are built
//! fresh for every validation pass.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

pub const REQUIRED_ATTRIBUTE: &str = "pluto-required";
pub const DATA_TYPE_ATTRIBUTE: &str = "pluto-data-type";
pub const MIN_VALUE_ATTRIBUTE: &str = "pluto-min-value";
pub const MAX_VALUE_ATTRIBUTE: &str = "pluto-max-value";

/// Read access to an element's attributes
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;

    /// Names of every attribute present on the element
    fn attribute_names(&self) -> Vec<String>;
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }

    fn attribute_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl AttributeSource for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }

    fn attribute_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

/// Rule name of a `pluto-<rule>-error` attribute
pub fn override_rule(attribute: &str) -> Option<&str> {
    attribute
        .strip_prefix("pluto-")?
        .strip_suffix("-error")
        .filter(|rule| !rule.is_empty())
}

/// Type constraint declared through `pluto-data-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    #[default]
    None,
    Integer,
    Decimal,
    Email,
}

impl DataType {
    /// Parse a `pluto-data-type` tag; unknown tags carry no type rule
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "int" => DataType::Integer,
            "double" => DataType::Decimal,
            "email" => DataType::Email,
            _ => DataType::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDescriptor {
    pub identity: String,
    pub value: String,
    pub required: bool,
    pub data_type: DataType,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    /// Per-rule message overrides keyed by rule name
    pub custom_messages: HashMap<String, String>,
}

impl FieldDescriptor {
    pub fn new(identity: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Read a descriptor from an element's attributes
    ///
    /// A bound that is not a finite number is ignored, the field simply has no
    /// such bound.
    pub fn from_attributes<A: AttributeSource + ?Sized>(
        identity: impl Into<String>,
        value: impl Into<String>,
        attrs: &A,
    ) -> Self {
        let identity = identity.into();

        let required = attrs.attribute(REQUIRED_ATTRIBUTE).as_deref() == Some("true");
        let data_type = attrs
            .attribute(DATA_TYPE_ATTRIBUTE)
            .map(|tag| DataType::from_tag(&tag))
            .unwrap_or_default();
        let min_value = parse_bound(&identity, MIN_VALUE_ATTRIBUTE, attrs);
        let max_value = parse_bound(&identity, MAX_VALUE_ATTRIBUTE, attrs);

        // any rule name, so overrides for rules outside the catalog still resolve
        let custom_messages = attrs
            .attribute_names()
            .iter()
            .filter_map(|name| {
                let rule = override_rule(name)?;
                let text = attrs.attribute(name)?;
                Some((rule.to_string(), text))
            })
            .collect();

        Self {
            identity,
            value: value.into(),
            required,
            data_type,
            min_value,
            max_value,
            custom_messages,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub fn with_message(mut self, rule: impl Into<String>, text: impl Into<String>) -> Self {
        self.custom_messages.insert(rule.into(), text.into());
        self
    }

    pub fn custom_message(&self, rule: &str) -> Option<&str> {
        self.custom_messages.get(rule).map(String::as_str)
    }
}

fn parse_bound<A>(identity: &str, name: &str, attrs: &A) -> Option<f64>
where
    A: AttributeSource + ?Sized,
{
    let raw = attrs.attribute(name)?;

    match raw.trim().parse::<f64>() {
        Ok(bound) if bound.is_finite() => Some(bound),
        _ => {
            warn!(field = identity, attribute = name, value = %raw, "ignoring non-numeric bound");
            None
        }
    }
}
