//! `web-sys` implementations of the core element traits

use pluto_validation_core::render::display_selector;
use pluto_validation_core::{
    AttributeSource, ErrorSurface, FieldElement, FormElement, Identified, IdentityScope,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

fn non_empty(id: String) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

fn attribute_names(element: &Element) -> Vec<String> {
    let attributes = element.attributes();

    (0..attributes.length())
        .filter_map(|i| attributes.item(i))
        .map(|attr| attr.name())
        .collect()
}

#[derive(Debug, Clone)]
pub struct DomForm(pub HtmlFormElement);

#[derive(Debug, Clone)]
pub struct DomField(pub HtmlInputElement);

/// Renders into a live document
#[derive(Debug, Clone)]
pub struct DomSurface(pub Document);

impl Identified for DomForm {
    fn id(&self) -> Option<String> {
        non_empty(self.0.id())
    }

    fn set_id(&self, id: &str) {
        self.0.set_id(id);
    }
}

impl AttributeSource for DomForm {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn attribute_names(&self) -> Vec<String> {
        attribute_names(&self.0)
    }
}

impl FormElement for DomForm {
    type Field = DomField;

    fn fields(&self) -> Vec<DomField> {
        let inputs = self.0.get_elements_by_tag_name("input");

        (0..inputs.length())
            .filter_map(|i| inputs.item(i))
            .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(DomField)
            .collect()
    }
}

impl Identified for DomField {
    fn id(&self) -> Option<String> {
        non_empty(self.0.id())
    }

    fn set_id(&self, id: &str) {
        self.0.set_id(id);
    }
}

impl IdentityScope for DomField {
    type Form = DomForm;

    fn form(&self) -> Option<DomForm> {
        self.0.form().map(DomForm)
    }
}

impl AttributeSource for DomField {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn attribute_names(&self) -> Vec<String> {
        attribute_names(&self.0)
    }
}

impl FieldElement for DomField {
    fn value(&self) -> String {
        self.0.value()
    }
}

impl ErrorSurface for DomSurface {
    fn add_classes(&self, field_id: &str, classes: &[String]) -> bool {
        let Some(element) = self.0.get_element_by_id(field_id) else {
            return false;
        };

        let list = element.class_list();
        classes.iter().all(|class| list.add_1(class).is_ok())
    }

    fn set_display_text(&self, field_id: &str, text: &str) -> bool {
        let Ok(Some(element)) = self.0.query_selector(&display_selector(field_id)) else {
            return false;
        };

        match element.dyn_into::<HtmlElement>() {
            Ok(html) => html.set_inner_text(text),
            Err(element) => element.set_text_content(Some(text)),
        }
        true
    }
}
