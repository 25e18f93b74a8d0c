use approx::assert_relative_eq;
use serp_deck::core::Delta;

#[test]
fn missing_or_zero_baseline_has_no_comparison() {
    assert_eq!(Delta::between(None, Some(100.0)), Delta::NoComparison);
    assert_eq!(Delta::between(Some(100.0), None), Delta::NoComparison);
    assert_eq!(Delta::between(Some(100.0), Some(0.0)), Delta::NoComparison);
    assert_eq!(Delta::between(None, None), Delta::NoComparison);
}

#[test]
fn ten_percent_up_and_down() {
    let up = Delta::between(Some(110.0), Some(100.0));
    assert_relative_eq!(up.magnitude_percent().expect("up"), 10.0, epsilon = 1e-9);
    assert_eq!(up.is_increase(), Some(true));
    assert_eq!(up.label().as_deref(), Some("+10.0%"));

    let down = Delta::between(Some(90.0), Some(100.0));
    assert_relative_eq!(down.magnitude_percent().expect("down"), 10.0, epsilon = 1e-9);
    assert_eq!(down.is_increase(), Some(false));
    assert_eq!(down.label().as_deref(), Some("-10.0%"));
    assert_relative_eq!(down.signed_percent().expect("signed"), -10.0, epsilon = 1e-9);
}

#[test]
fn zero_current_is_a_real_value() {
    let delta = Delta::between(Some(0.0), Some(50.0));
    assert!(delta.is_comparable());
    assert_relative_eq!(delta.magnitude_percent().expect("delta"), 100.0);
    assert_eq!(delta.is_increase(), Some(false));
}

#[test]
fn no_comparison_has_no_label() {
    assert_eq!(Delta::NoComparison.label(), None);
    assert_eq!(Delta::NoComparison.signed_percent(), None);
    assert!(!Delta::NoComparison.is_comparable());
}

#[test]
fn negative_baseline_keeps_the_signed_formula() {
    // (-50 - -100) / -100 * 100 = -50
    let delta = Delta::between(Some(-50.0), Some(-100.0));
    assert_eq!(delta.is_increase(), Some(false));
    assert_relative_eq!(delta.magnitude_percent().expect("delta"), 50.0);
}
