//! Submit handling against an in-memory document

mod support;

use pluto_validation_core::{
    is_validated_form, resolve_identity, FormBinder, Identified, IdGenerator, PlutoError,
    SequentialIds, SubmitDecision, ValidationEngine, FORM_SELECTOR,
};
use pretty_assertions::assert_eq;
use support::Document;

fn binder() -> FormBinder<SequentialIds> {
    FormBinder::new(ValidationEngine::default(), SequentialIds::default())
}

#[test]
fn test_valid_form_proceeds_without_rendering() {
    let doc = Document::new();
    let form = doc.form(&[("pluto-validate", "")]);
    let email = doc.input(
        Some(&form),
        &[("id", "email"), ("pluto-required", "true"), ("pluto-data-type", "email")],
        "ada@example.com",
    );
    doc.display("email");

    let decision = binder().check(&form, &*doc).unwrap();

    assert_eq!(decision, SubmitDecision::Proceed);
    assert!(email.classes().is_empty());
    assert_eq!(doc.display_text("email").as_deref(), Some(""));
}

#[test]
fn test_invalid_form_is_suppressed_and_rendered() {
    let doc = Document::new();
    let form = doc.form(&[("pluto-validate", "")]);
    let qty = doc.input(
        Some(&form),
        &[
            ("id", "qty"),
            ("pluto-data-type", "int"),
            ("pluto-min-value", "10"),
            ("pluto-max-value", "5"),
        ],
        "7",
    );
    let name = doc.input(Some(&form), &[("id", "name"), ("pluto-required", "true")], "");
    doc.display("qty");
    doc.display("name");

    let decision = binder().check(&form, &*doc).unwrap();

    assert_eq!(decision, SubmitDecision::Suppress);
    assert_eq!(qty.classes(), vec!["has-error", "is-invalid", "pluto-error"]);
    assert_eq!(name.classes(), vec!["has-error", "is-invalid", "pluto-error"]);
    assert_eq!(
        doc.display_text("qty").as_deref(),
        Some("The minimum value required is: 10\nThe maximum value allowed is: 5")
    );
    assert_eq!(doc.display_text("name").as_deref(), Some("This field is required"));
}

#[test]
fn test_custom_error_attribute_is_rendered() {
    let doc = Document::new();
    let form = doc.form(&[("pluto-validate", "")]);
    doc.input(
        Some(&form),
        &[
            ("id", "age"),
            ("pluto-data-type", "int"),
            ("pluto-int-error", "Age must be a whole number"),
        ],
        "twelve",
    );
    doc.display("age");

    binder().check(&form, &*doc).unwrap();

    assert_eq!(doc.display_text("age").as_deref(), Some("Age must be a whole number"));
}

#[test]
fn test_override_for_rule_outside_catalog_is_read() {
    let doc = Document::new();
    let form = doc.form(&[("pluto-validate", "")]);
    doc.input(
        Some(&form),
        &[("id", "zip"), ("pluto-zipcode-error", "Five digits please")],
        "123",
    );

    let mut binder = binder();
    let fields = binder.describe(&form).unwrap();

    assert_eq!(
        binder.engine().message_for(&fields[0], "zipcode"),
        "Five digits please"
    );
    assert_eq!(binder.engine().message_for(&fields[0], "phone"), "Please insert a valid phone");
}

#[test]
fn test_binders_with_distinct_namespaces_do_not_collide() {
    let doc = Document::new();
    let first = doc.form(&[("pluto-validate", "")]);
    let second = doc.form(&[("pluto-validate", "")]);
    let a = doc.input(Some(&first), &[], "");
    let b = doc.input(Some(&second), &[], "");

    let mut left = FormBinder::new(ValidationEngine::default(), SequentialIds::new("pluto"));
    let mut right = FormBinder::new(ValidationEngine::default(), SequentialIds::new("pluto-2"));
    left.validate(&first).unwrap();
    right.validate(&second).unwrap();

    assert_eq!(a.id().as_deref(), Some("pluto-form-1-input-2"));
    assert_eq!(b.id().as_deref(), Some("pluto-2-form-1-input-2"));

    // the same namespace twice would hand out the same ids
    let mut again = SequentialIds::new("pluto");
    assert_eq!(again.form_id(), first.id().unwrap());
}

#[test]
fn test_missing_ids_are_generated_once() {
    let doc = Document::new();
    let form = doc.form(&[("pluto-validate", "")]);
    let first = doc.input(Some(&form), &[("pluto-required", "true")], "");
    let second = doc.input(Some(&form), &[("id", "kept")], "x");

    let mut binder = binder();
    let result = binder.validate(&form).unwrap();

    assert_eq!(form.id().as_deref(), Some("pluto-form-1"));
    assert_eq!(first.id().as_deref(), Some("pluto-form-1-input-2"));
    assert_eq!(second.id().as_deref(), Some("kept"));
    assert!(result.errors.contains("pluto-form-1-input-2"));

    // second pass reuses the ids written on the first
    let again = binder.validate(&form).unwrap();
    assert_eq!(first.id().as_deref(), Some("pluto-form-1-input-2"));
    assert_eq!(again, result);
}

#[test]
fn test_corrected_values_pass_on_resubmit() {
    let doc = Document::new();
    let form = doc.form(&[("pluto-validate", "")]);
    let zip = doc.input(Some(&form), &[("id", "zip"), ("pluto-data-type", "int")], "abc");

    let mut binder = binder();
    assert_eq!(binder.check(&form, &*doc).unwrap(), SubmitDecision::Suppress);

    zip.set_value("12345");
    assert_eq!(binder.check(&form, &*doc).unwrap(), SubmitDecision::Proceed);
}

#[test]
fn test_malformed_bound_is_ignored() {
    let doc = Document::new();
    let form = doc.form(&[("pluto-validate", "")]);
    doc.input(
        Some(&form),
        &[("id", "n"), ("pluto-data-type", "int"), ("pluto-min-value", "lots")],
        "1",
    );

    let result = binder().validate(&form).unwrap();
    assert!(result.is_valid);
}

#[test]
fn test_orphan_input_without_id_is_rejected() {
    let doc = Document::new();
    let orphan = doc.input(None, &[], "");

    let mut ids = SequentialIds::default();
    let err = resolve_identity(&orphan, &mut ids).unwrap_err();

    assert!(matches!(err, PlutoError::MissingParentForm));
}

#[test]
fn test_only_marked_forms_are_validated() {
    let doc = Document::new();
    let marked = doc.form(&[("pluto-validate", "")]);
    let plain = doc.form(&[("action", "/search")]);

    assert!(is_validated_form(&marked));
    assert!(!is_validated_form(&plain));
    assert_eq!(FORM_SELECTOR, "form[pluto-validate]");
}
