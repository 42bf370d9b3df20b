//! Pluto Validation WASM
//!
//! Browser bindings for the Pluto validation engine. Constructing a `Pluto`
//! finds every `form[pluto-validate]` in the document and intercepts its
//! submit events; invalid submissions are cancelled and their errors rendered
//! next to the offending inputs.
//!
//! ```javascript
//! const pluto = new Pluto({
//!     errorMessages: { required: 'Required', int: 'Numbers only' },
//!     errorClasses: ['is-invalid'],
//! });
//! ```

mod dom;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pluto_validation_core as pluto;
use pluto_validation_core::{
    FormBinder, PlutoConfig, SequentialIds, SubmitDecision, ValidationEngine, FORM_SELECTOR,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlFormElement};

pub use dom::{DomField, DomForm, DomSurface};

type SharedBinder = Rc<RefCell<FormBinder<SequentialIds>>>;

thread_local! {
    static INSTANCES: Cell<u32> = const { Cell::new(0) };
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js(err: pluto::PlutoError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Id namespace for a new `Pluto`
///
/// An explicit `idNamespace` is used as given. Without one, the first instance
/// gets `pluto` and later ones `pluto-2`, `pluto-3`, ... so their generated ids
/// stay apart.
fn instance_namespace(config: &PlutoConfig) -> String {
    let n = INSTANCES.with(|count| {
        count.set(count.get() + 1);
        count.get()
    });

    match (&config.id_namespace, n) {
        (Some(namespace), _) => namespace.clone(),
        (None, 1) => config.id_namespace().to_string(),
        (None, n) => format!("{}-{}", config.id_namespace(), n),
    }
}

fn current_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("Pluto needs a window with a document"))
}

/// Form validator bound to the current document
#[wasm_bindgen]
pub struct Pluto {
    binder: SharedBinder,
    surface: DomSurface,
    forms: Vec<HtmlFormElement>,
}

#[wasm_bindgen]
impl Pluto {
    /// Parse the configuration and attach submit listeners to every marked form
    ///
    /// `conf` may be omitted; missing keys fall back to the built-in messages
    /// and classes.
    #[wasm_bindgen(constructor)]
    pub fn new(conf: JsValue) -> Result<Pluto, JsValue> {
        let config: PlutoConfig = if conf.is_undefined() || conf.is_null() {
            PlutoConfig::default()
        } else {
            serde_wasm_bindgen::from_value(conf)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };

        let engine = ValidationEngine::with_config(&config);
        let ids = SequentialIds::new(instance_namespace(&config));
        let binder = Rc::new(RefCell::new(FormBinder::new(engine, ids)));
        let surface = DomSurface(current_document()?);

        let mut pluto = Pluto {
            binder,
            surface,
            forms: Vec::new(),
        };
        pluto.bind_forms()?;
        Ok(pluto)
    }

    /// Number of forms with a submit listener attached
    #[wasm_bindgen(getter, js_name = formCount)]
    pub fn form_count(&self) -> usize {
        self.forms.len()
    }

    /// Validate a form on demand, rendering errors if it is invalid
    #[wasm_bindgen(js_name = validateForm)]
    pub fn validate_form(&self, form: HtmlFormElement) -> Result<bool, JsValue> {
        let decision = self
            .binder
            .borrow_mut()
            .check(&DomForm(form), &self.surface)
            .map_err(to_js)?;

        Ok(decision == SubmitDecision::Proceed)
    }

    /// Validate a form without rendering; returns `{ isValid, errors }`
    #[wasm_bindgen(js_name = checkForm)]
    pub fn check_form(&self, form: HtmlFormElement) -> Result<JsValue, JsValue> {
        let result = self
            .binder
            .borrow_mut()
            .validate(&DomForm(form))
            .map_err(to_js)?;

        // Plain objects rather than JS `Map`s for the error map
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        Ok(result.serialize(&serializer)?)
    }
}

impl Pluto {
    fn bind_forms(&mut self) -> Result<(), JsValue> {
        let found = self.surface.0.query_selector_all(FORM_SELECTOR)?;

        for i in 0..found.length() {
            let Some(form) = found
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlFormElement>().ok())
            else {
                continue;
            };

            let listener = submit_listener(Rc::clone(&self.binder), self.surface.clone());
            form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())?;
            // The listener lives as long as the page
            listener.forget();

            self.forms.push(form);
        }

        Ok(())
    }
}

fn submit_listener(binder: SharedBinder, surface: DomSurface) -> Closure<dyn FnMut(Event)> {
    Closure::new(move |event: Event| {
        let Some(form) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };

        match binder.borrow_mut().check(&DomForm(form), &surface) {
            Ok(SubmitDecision::Proceed) => {}
            Ok(SubmitDecision::Suppress) => event.prevent_default(),
            Err(err) => {
                // never submit a form that could not be checked
                event.prevent_default();
                console::error_1(&to_js(err));
            }
        }
    })
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    pluto::is_valid_email(email)
}

/// Quick integer validation
#[wasm_bindgen(js_name = isValidInteger)]
pub fn is_valid_integer_js(value: &str) -> bool {
    pluto::parse_integer(value).is_some()
}

/// Quick decimal validation
#[wasm_bindgen(js_name = isValidDecimal)]
pub fn is_valid_decimal_js(value: &str) -> bool {
    pluto::parse_decimal(value).is_some()
}
