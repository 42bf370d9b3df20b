//! In-memory document used by the integration tests
//!
//! Elements live in one arena; handles are (document, index) pairs, so they
//! can be cloned freely and still mutate the same element, like DOM handles.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pluto_validation_core::{
    AttributeSource, ErrorSurface, FieldElement, FormElement, Identified, IdentityScope,
};

#[derive(Debug, Default)]
struct Element {
    tag: &'static str,
    attrs: HashMap<String, String>,
    value: String,
    classes: Vec<String>,
    text: String,
    form: Option<usize>,
}

#[derive(Debug, Default)]
pub struct Document {
    elements: RefCell<Vec<Element>>,
}

#[derive(Debug, Clone)]
pub struct FormRef {
    doc: Rc<Document>,
    index: usize,
}

#[derive(Debug, Clone)]
pub struct InputRef {
    doc: Rc<Document>,
    index: usize,
}

fn to_attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Document {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn push(&self, element: Element) -> usize {
        let mut elements = self.elements.borrow_mut();
        elements.push(element);
        elements.len() - 1
    }

    pub fn form(self: &Rc<Self>, attrs: &[(&str, &str)]) -> FormRef {
        let index = self.push(Element {
            tag: "form",
            attrs: to_attrs(attrs),
            ..Element::default()
        });
        FormRef {
            doc: Rc::clone(self),
            index,
        }
    }

    pub fn input(
        self: &Rc<Self>,
        form: Option<&FormRef>,
        attrs: &[(&str, &str)],
        value: &str,
    ) -> InputRef {
        let index = self.push(Element {
            tag: "input",
            attrs: to_attrs(attrs),
            value: value.to_string(),
            form: form.map(|f| f.index),
            ..Element::default()
        });
        InputRef {
            doc: Rc::clone(self),
            index,
        }
    }

    /// A `<span pluto-input="#<field_id>">` region
    pub fn display(self: &Rc<Self>, field_id: &str) {
        let target = format!("#{}", field_id);
        self.push(Element {
            tag: "span",
            attrs: to_attrs(&[("pluto-input", target.as_str())]),
            ..Element::default()
        });
    }

    pub fn display_text(&self, field_id: &str) -> Option<String> {
        let target = format!("#{}", field_id);
        self.elements
            .borrow()
            .iter()
            .find(|e| e.attrs.get("pluto-input") == Some(&target))
            .map(|e| e.text.clone())
    }

    fn find_by_id(&self, id: &str) -> Option<usize> {
        self.elements
            .borrow()
            .iter()
            .position(|e| e.attrs.get("id").map(String::as_str) == Some(id))
    }

    fn attr(&self, index: usize, name: &str) -> Option<String> {
        self.elements.borrow()[index].attrs.get(name).cloned()
    }

    fn attr_names(&self, index: usize) -> Vec<String> {
        self.elements.borrow()[index].attrs.keys().cloned().collect()
    }

    fn set_attr(&self, index: usize, name: &str, value: &str) {
        self.elements.borrow_mut()[index]
            .attrs
            .insert(name.to_string(), value.to_string());
    }
}

impl ErrorSurface for Document {
    fn add_classes(&self, field_id: &str, classes: &[String]) -> bool {
        match self.find_by_id(field_id) {
            Some(index) => {
                let mut elements = self.elements.borrow_mut();
                let element = &mut elements[index];
                for class in classes {
                    if !element.classes.contains(class) {
                        element.classes.push(class.clone());
                    }
                }
                true
            }
            None => false,
        }
    }

    fn set_display_text(&self, field_id: &str, text: &str) -> bool {
        let target = format!("#{}", field_id);
        let mut elements = self.elements.borrow_mut();
        match elements
            .iter_mut()
            .find(|e| e.attrs.get("pluto-input") == Some(&target))
        {
            Some(element) => {
                element.text = text.to_string();
                true
            }
            None => false,
        }
    }
}

impl FormRef {
    pub fn document(&self) -> &Rc<Document> {
        &self.doc
    }
}

impl Identified for FormRef {
    fn id(&self) -> Option<String> {
        self.doc.attr(self.index, "id").filter(|id| !id.is_empty())
    }

    fn set_id(&self, id: &str) {
        self.doc.set_attr(self.index, "id", id)
    }
}

impl AttributeSource for FormRef {
    fn attribute(&self, name: &str) -> Option<String> {
        self.doc.attr(self.index, name)
    }

    fn attribute_names(&self) -> Vec<String> {
        self.doc.attr_names(self.index)
    }
}

impl FormElement for FormRef {
    type Field = InputRef;

    fn fields(&self) -> Vec<InputRef> {
        self.doc
            .elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.tag == "input" && e.form == Some(self.index))
            .map(|(index, _)| InputRef {
                doc: Rc::clone(&self.doc),
                index,
            })
            .collect()
    }
}

impl InputRef {
    pub fn set_value(&self, value: &str) {
        self.doc.elements.borrow_mut()[self.index].value = value.to_string();
    }

    pub fn classes(&self) -> Vec<String> {
        self.doc.elements.borrow()[self.index].classes.clone()
    }
}

impl Identified for InputRef {
    fn id(&self) -> Option<String> {
        self.doc.attr(self.index, "id").filter(|id| !id.is_empty())
    }

    fn set_id(&self, id: &str) {
        self.doc.set_attr(self.index, "id", id)
    }
}

impl IdentityScope for InputRef {
    type Form = FormRef;

    fn form(&self) -> Option<FormRef> {
        let form = self.doc.elements.borrow()[self.index].form?;
        Some(FormRef {
            doc: Rc::clone(&self.doc),
            index: form,
        })
    }
}

impl AttributeSource for InputRef {
    fn attribute(&self, name: &str) -> Option<String> {
        self.doc.attr(self.index, name)
    }

    fn attribute_names(&self) -> Vec<String> {
        self.doc.attr_names(self.index)
    }
}

impl FieldElement for InputRef {
    fn value(&self) -> String {
        self.doc.elements.borrow()[self.index].value.clone()
    }
}
