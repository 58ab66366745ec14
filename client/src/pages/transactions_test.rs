use super::*;

#[test]
fn validate_new_transaction_accepts_currency_formatting() {
    let tx = validate_new_transaction(" $1,250.75 ", " Book fund ").expect("valid");
    assert!((tx.amount - 1250.75).abs() < f64::EPSILON);
    assert_eq!(tx.description, "Book fund");
}

#[test]
fn validate_new_transaction_rejects_garbage() {
    assert_eq!(validate_new_transaction("", "x"), Err("Enter an amount."));
    assert_eq!(validate_new_transaction("ten", "x"), Err("Enter an amount."));
}

#[test]
fn validate_new_transaction_rejects_non_positive_amounts() {
    assert_eq!(validate_new_transaction("0", "x"), Err("Amount must be greater than zero."));
    assert_eq!(validate_new_transaction("-5", "x"), Err("Amount must be greater than zero."));
}
