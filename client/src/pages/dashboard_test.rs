use super::*;

fn transaction(id: &str, amount: f64) -> Transaction {
    Transaction { id: id.to_owned(), amount, description: None, status: None, date: None, user_id: None }
}

#[test]
fn count_label_dashes_while_loading_or_failed() {
    let mut state = ListState::<Transaction>::default();
    state.begin_load();
    assert_eq!(count_label(&state), EMPTY_CELL);

    state.loading = false;
    state.error = Some("boom".to_owned());
    assert_eq!(count_label(&state), EMPTY_CELL);
}

#[test]
fn count_label_counts_loaded_rows() {
    let mut state = ListState::<Transaction>::default();
    state.finish_load(Ok(vec![transaction("1", 5.0), transaction("2", 7.5)]));
    assert_eq!(count_label(&state), "2");
}

#[test]
fn donation_total_sums_amounts() {
    assert!((donation_total(&[transaction("1", 10.25), transaction("2", 4.75)]) - 15.0).abs() < f64::EPSILON);
    assert!(donation_total(&[]).abs() < f64::EPSILON);
}
