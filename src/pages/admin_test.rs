use super::*;

#[test]
fn parse_price_accepts_positive_numbers() {
    assert_eq!(parse_price("1200"), Some(1200.0));
    assert_eq!(parse_price(" 450.50 "), Some(450.5));
}

#[test]
fn parse_price_rejects_garbage_and_non_positive_values() {
    assert_eq!(parse_price(""), None);
    assert_eq!(parse_price("abc"), None);
    assert_eq!(parse_price("0"), None);
    assert_eq!(parse_price("-5"), None);
    assert_eq!(parse_price("NaN"), None);
    assert_eq!(parse_price("inf"), None);
}

#[test]
fn validate_new_asset_builds_a_trimmed_payload() {
    let payload = validate_new_asset(" Генератор ", " Обладнання ", " дизельний ", "450").unwrap();
    assert_eq!(payload.name, "Генератор");
    assert_eq!(payload.kind, "Обладнання");
    assert_eq!(payload.description, "дизельний");
    assert_eq!(payload.price_per_day, 450.0);
}

#[test]
fn validate_new_asset_allows_an_empty_description() {
    let payload = validate_new_asset("Генератор", "Обладнання", "", "450").unwrap();
    assert_eq!(payload.description, "");
}

#[test]
fn validate_new_asset_requires_name_kind_and_price() {
    assert_eq!(
        validate_new_asset("", "Обладнання", "", "450"),
        Err("Вкажіть назву та тип об'єкта.")
    );
    assert_eq!(
        validate_new_asset("Генератор", "", "", "450"),
        Err("Вкажіть назву та тип об'єкта.")
    );
    assert_eq!(
        validate_new_asset("Генератор", "Обладнання", "", "дорого"),
        Err("Вкажіть коректну ціну за день.")
    );
}
