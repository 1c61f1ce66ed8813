use super::*;
use crate::dom::MemoryElement;
use crate::widgets::test_support::fixture;

#[test]
fn email_shape() {
    assert!(is_email("ada@example.com"));
    assert!(is_email("a@b.c"));
    assert!(!is_email("ada@example"));
    assert!(!is_email("ada@.com"));
    assert!(!is_email("ada@example."));
    assert!(!is_email("@example.com"));
    assert!(!is_email("a b@example.com"));
    assert!(!is_email("a@b@example.com"));
}

#[test]
fn password_complexity() {
    assert!(is_complex("Str0ng!pw"));
    assert!(is_complex("Str0ng_pw"));
    assert!(!is_complex("Sh0rt!"));
    assert!(!is_complex("alllower1!"));
    assert!(!is_complex("NoDigits!!"));
    assert!(!is_complex("NoSymbol12"));
}

#[test]
fn absent_fields_are_not_checked() {
    let verdict = check(&Fields { password: Some("Str0ng!pw".into()), ..Fields::default() });
    assert!(verdict.valid());
}

fn input(name: &str, value: &str) -> MemoryElement {
    MemoryElement::new("input").with_attr("data-user-form-target", name).with_value(value)
}

#[test]
fn user_form_gates_submit() {
    let fx = fixture();
    let email = input("email", "ada@example");
    let password = input("password", "Str0ng!pw");
    let confirm = input("confirmPassword", "Str0ng!pw");
    let current = input("currentPassword", "");
    let email_warning = MemoryElement::new("p").with_attr("data-user-form-target", "emailWarning");
    let current_warning = MemoryElement::new("p").with_attr("data-user-form-target", "currentPasswordWarning");
    let submit = MemoryElement::new("button").with_attr("data-user-form-target", "submitButton");
    let form = MemoryElement::new("form")
        .with_child(input("username", "ada"))
        .with_child(email.clone())
        .with_child(password)
        .with_child(confirm)
        .with_child(current.clone())
        .with_child(email_warning.clone())
        .with_child(current_warning.clone())
        .with_child(submit.clone());

    let mut widget = attach(fx.mount(&form, USER_NAME), &fx.env).expect("attach");
    widget.connect();
    assert!(submit.is_disabled());
    assert!(submit.has_class("bg-red-500"));
    assert!(!email_warning.has_class("hidden"));
    assert!(!current_warning.has_class("hidden"));

    email.set_value("ada@example.com");
    current.set_value("old-secret");
    assert_eq!(widget.input_action(), Some("validate"));
    widget.handle("validate", &email);

    assert!(!submit.is_disabled());
    assert!(submit.has_class("bg-green-600"));
    assert!(!submit.has_class("hover:bg-red-600"));
    assert!(email_warning.has_class("hidden"));
    assert!(current_warning.has_class("hidden"));
}

#[test]
fn signup_form_shows_mismatch() {
    let fx = fixture();
    let t = |name: &str, value: &str| {
        MemoryElement::new("input").with_attr("data-signup-form-target", name).with_value(value)
    };
    let mismatch = MemoryElement::new("p").with_attr("data-signup-form-target", "mismatchWarning").with_class("hidden");
    let form = MemoryElement::new("form")
        .with_child(t("email", "ada@example.com"))
        .with_child(t("password", "Str0ng!pw"))
        .with_child(t("confirmPassword", "Str0ng!px"))
        .with_child(mismatch.clone());

    let mut widget = attach(fx.mount(&form, SIGNUP_NAME), &fx.env).expect("attach");
    widget.connect();
    assert!(!mismatch.has_class("hidden"));
    assert_eq!(widget.debounce_ms("validate"), Some(150));
}

#[test]
fn reset_and_bootstrap_forms_share_the_rules() {
    let fx = fixture();
    for name in [RESET_NAME, BOOTSTRAP_NAME] {
        let t = |target: &str, value: &str| {
            MemoryElement::new("input").with_attr(&format!("data-{name}-target"), target).with_value(value)
        };
        let password = t("password", "weak");
        let complexity = MemoryElement::new("p").with_attr(&format!("data-{name}-target"), "complexityWarning");
        let submit = MemoryElement::new("button").with_attr(&format!("data-{name}-target"), "submitButton");
        let form = MemoryElement::new("form")
            .with_child(t("username", "admin"))
            .with_child(t("email", "admin@example.org"))
            .with_child(password.clone())
            .with_child(t("confirmPassword", "Str0ng!pw"))
            .with_child(complexity.clone())
            .with_child(submit.clone());

        let mut widget = attach(fx.mount(&form, name), &fx.env).expect("attach");
        widget.connect();
        assert!(submit.is_disabled(), "{name}");
        assert!(!complexity.has_class("hidden"), "{name}");

        password.set_value("Str0ng!pw");
        widget.handle("validate", &password);
        assert!(!submit.is_disabled(), "{name}");
        assert!(complexity.has_class("hidden"), "{name}");
    }
}
