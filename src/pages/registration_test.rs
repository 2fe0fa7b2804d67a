use super::*;

#[test]
fn validate_registration_input_accepts_a_complete_form() {
    let payload = validate_registration_input(" olena ", " olena@example.com ", "secret").unwrap();
    assert_eq!(payload.username, "olena");
    assert_eq!(payload.email, "olena@example.com");
    assert_eq!(payload.password, "secret");
}

#[test]
fn validate_registration_input_requires_every_field() {
    assert!(validate_registration_input("", "a@b.com", "secret").is_err());
    assert!(validate_registration_input("olena", "", "secret").is_err());
    assert!(validate_registration_input("olena", "a@b.com", "").is_err());
}

#[test]
fn validate_registration_input_rejects_a_bad_email() {
    assert_eq!(
        validate_registration_input("olena", "not-an-email", "secret"),
        Err("Вкажіть коректну електронну адресу.")
    );
}
