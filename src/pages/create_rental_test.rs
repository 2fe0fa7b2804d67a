use super::*;

#[test]
fn accepts_a_well_formed_period() {
    assert_eq!(validate_rental_dates("2025-03-10", "2025-03-12"), Ok(()));
}

#[test]
fn rejects_malformed_dates() {
    let err = Err("Вкажіть дати у форматі РРРР-ММ-ДД.");
    assert_eq!(validate_rental_dates("", "2025-03-12"), err);
    assert_eq!(validate_rental_dates("2025-3-10", "2025-03-12"), err);
    assert_eq!(validate_rental_dates("10.03.2025", "12.03.2025"), err);
    assert_eq!(validate_rental_dates("2025-13-01", "2025-13-02"), err);
    assert_eq!(validate_rental_dates("2025-00-10", "2025-01-10"), err);
}

#[test]
fn rejects_an_end_date_not_after_the_start() {
    let err = Err("Дата завершення має бути пізнішою за дату початку.");
    assert_eq!(validate_rental_dates("2025-03-12", "2025-03-10"), err);
    assert_eq!(validate_rental_dates("2025-03-10", "2025-03-10"), err);
}

#[test]
fn iso_ordering_crosses_month_and_year_boundaries() {
    assert_eq!(validate_rental_dates("2025-03-31", "2025-04-01"), Ok(()));
    assert_eq!(validate_rental_dates("2025-12-31", "2026-01-01"), Ok(()));
}
