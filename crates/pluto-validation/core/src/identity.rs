//! Element identity
//!
//! The error map, the descriptors and the renderer are joined on element ids.
//! Fields without an id get one generated under their form's id, and the form
//! gets one first if it has none. Once written to the element an id is never
//! replaced.
//!
//! Uniqueness is best-effort. [`RandomIds`] uses short random suffixes, so two
//! generated ids can in principle collide. [`SequentialIds`] never repeats
//! within one generator, but two generators sharing a namespace hand out the
//! same ids, and neither checks the document for ids already in use. Give each
//! generator its own namespace when several bind forms on one page.

use crate::error::{PlutoError, Result};

/// An element that carries an id attribute
///
/// Setters take `&self`: DOM handles mutate the document they point into.
pub trait Identified {
    /// The current id; empty ids count as missing
    fn id(&self) -> Option<String>;
    fn set_id(&self, id: &str);
}

/// A field element that may sit inside a form
pub trait IdentityScope: Identified {
    type Form: Identified;

    /// The enclosing form, if any
    fn form(&self) -> Option<Self::Form>;
}

pub trait IdGenerator {
    fn form_id(&mut self) -> String;
    fn field_id(&mut self, form_id: &str) -> String;
}

/// `<namespace>-form-<n>` and `<form id>-input-<n>`
#[derive(Debug, Clone)]
pub struct SequentialIds {
    namespace: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            next: 1,
        }
    }

    fn bump(&mut self) -> u64 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("pluto")
    }
}

impl IdGenerator for SequentialIds {
    fn form_id(&mut self) -> String {
        let n = self.bump();
        format!("{}-form-{}", self.namespace, n)
    }

    fn field_id(&mut self, form_id: &str) -> String {
        let n = self.bump();
        format!("{}-input-{}", form_id, n)
    }
}

/// `<namespace>-form-XXXXXX` and `<form id>-input-XXXXXX` with random alphanumerics
#[cfg(feature = "random-ids")]
#[derive(Debug, Clone)]
pub struct RandomIds {
    namespace: String,
    length: usize,
}

#[cfg(feature = "random-ids")]
impl RandomIds {
    pub fn new(namespace: impl Into<String>, length: usize) -> Self {
        Self {
            namespace: namespace.into(),
            length,
        }
    }

    fn suffix(&self) -> String {
        use rand::Rng;

        rand::rng()
            .sample_iter(&rand::distr::Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

#[cfg(feature = "random-ids")]
impl Default for RandomIds {
    fn default() -> Self {
        Self::new("pluto", 6)
    }
}

#[cfg(feature = "random-ids")]
impl IdGenerator for RandomIds {
    fn form_id(&mut self) -> String {
        format!("{}-form-{}", self.namespace, self.suffix())
    }

    fn field_id(&mut self, form_id: &str) -> String {
        format!("{}-input-{}", form_id, self.suffix())
    }
}

/// Return the field's id, generating and assigning one if it has none
///
/// Fails with [`PlutoError::MissingParentForm`] when a generated id is needed
/// but the field sits outside any form.
pub fn resolve_identity<F, G>(field: &F, ids: &mut G) -> Result<String>
where
    F: IdentityScope + ?Sized,
    G: IdGenerator + ?Sized,
{
    if let Some(id) = field.id() {
        return Ok(id);
    }

    let form = field.form().ok_or(PlutoError::MissingParentForm)?;
    let form_id = match form.id() {
        Some(id) => id,
        None => {
            let id = ids.form_id();
            form.set_id(&id);
            id
        }
    };

    let id = ids.field_id(&form_id);
    field.set_id(&id);
    Ok(id)
}
