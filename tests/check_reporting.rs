//! Integration tests exercising the public check/reporting API end to end.

use proptest::prelude::*;
use spotcheck::{check, run_test, skip_check, skip_test, Check, Outcome, SkipCheck};
use std::cell::Cell;
use std::rc::Rc;

fn add(args: &mut (i32, i32)) -> i32 {
    args.0 + args.1
}

fn passthrough(list: &mut Rc<Vec<i32>>) -> Rc<Vec<i32>> {
    Rc::clone(list)
}

#[test]
fn add_check_passes_and_invokes_once() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let outcome = Check::new("add", "add", move |args: &mut (i32, i32)| {
        counter.set(counter.get() + 1);
        args.0 + args.1
    })
    .when_called_with((4, 4))
    .returns(&8);

    assert!(outcome.is_pass());
    assert_eq!(calls.get(), 1);
}

#[test]
fn add_check_reports_mismatch_without_panicking() {
    let outcome = check!(add, "add").when_called_with((4, 4)).returns(&9);
    assert!(outcome.is_fail());
}

#[test]
fn equal_value_in_a_fresh_allocation_is_not_the_same_object() {
    let bound = Rc::new(vec![1, 2, 3]);
    let lookalike = Rc::new(vec![1, 2, 3]);

    let outcome = check!(passthrough, "identity")
        .when_called_with(Rc::clone(&bound))
        .is_same_as(&lookalike);

    assert!(outcome.is_fail());
}

#[test]
fn skip_check_never_invokes_through_any_assertion() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let skip = SkipCheck::new("add", "add", move |args: &mut (i32, i32)| {
        counter.set(counter.get() + 1);
        args.0 + args.1
    })
    .when_called_with((4, 4));

    assert!(skip.returns(&8).is_skip());
    assert!(skip.is_type::<i32>().is_skip());
    assert!(skip.is_same_as(&8).is_skip());
    assert!(skip.is_not_same_as(&8).is_skip());
    assert!(skip.mutates_input("args").is_skip());
    assert_eq!(calls.get(), 0);
}

#[test]
fn skip_check_macro_reports_skipped_outcome() {
    let outcome = skip_check!(add, "add").when_called_with((4, 4)).returns(&8);
    assert_eq!(outcome, Outcome::Skipped);
}

#[test]
fn wrapped_passing_body_reports_pass() {
    let wrapped = run_test("passing_body", || {
        check!(add, "add").when_called_with((2, 3)).returns(&5);
    });
    assert_eq!(wrapped(), Outcome::Passed);
}

#[test]
#[should_panic(expected = "left == right")]
fn wrapped_failing_body_propagates_the_panic() {
    let wrapped = run_test("failing_body", || {
        assert_eq!(add(&mut (2, 2)), 5);
    });
    wrapped();
}

#[test]
fn skipped_body_never_runs() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);

    let wrapped = skip_test("disabled_body", move || {
        counter.set(counter.get() + 1);
    });

    assert_eq!(wrapped(), Outcome::Skipped);
    assert_eq!(runs.get(), 0);
}

proptest! {
    /// `returns` passes exactly when value equality holds.
    #[test]
    fn returns_tracks_value_equality(
        a in -1000i32..1000,
        b in -1000i32..1000,
        expected in -2000i32..2000,
    ) {
        let outcome = check!(add, "add").when_called_with((a, b)).returns(&expected);
        prop_assert_eq!(outcome.is_pass(), a + b == expected);
    }

    /// Exactly one of the identity assertions passes for any captured value.
    #[test]
    fn identity_assertions_are_exact_inverses(values in proptest::collection::vec(any::<i32>(), 0..8)) {
        let bound = Rc::new(values);

        let mut aliased = check!(passthrough, "identity")
            .when_called_with(Rc::clone(&bound));
        prop_assert!(aliased.is_same_as(&bound).is_pass());
        prop_assert!(aliased.is_not_same_as(&bound).is_fail());

        fn copy(list: &mut Rc<Vec<i32>>) -> Rc<Vec<i32>> {
            Rc::new(list.to_vec())
        }
        let mut fresh = check!(copy, "identity")
            .when_called_with(Rc::clone(&bound));
        prop_assert!(fresh.is_same_as(&bound).is_fail());
        prop_assert!(fresh.is_not_same_as(&bound).is_pass());
    }
}
