use super::*;

#[test]
fn ids_are_derived_from_name() {
    assert_eq!(input_id("email"), "field-email");
    assert_eq!(error_id("confirm_password"), "field-confirm_password-error");
}

#[test]
fn error_state_adds_modifier_class() {
    assert_eq!(input_class(false), "form-field__input");
    assert!(input_class(true).ends_with("form-field__input--error"));
}
