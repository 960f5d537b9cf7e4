//! Function-level wrappers for whole test bodies.
//!
//! [`run_test`] and [`skip_test`] wrap a test body in a reporting shell:
//! the wrapped function prints a pass, fail, or skip banner when called.
//! A failing body's panic is always rethrown, so an outer harness (or the
//! process exit status) still sees the failure.

use std::panic::{self, AssertUnwindSafe};

use crate::output::{self, Outcome};

/// Wrap a test body with pass/fail reporting.
///
/// Calling the returned closure runs `body`. On a normal return it prints
/// `{name}(): Test passed ✅` and yields [`Outcome::Passed`]. If the body
/// panics (a failed `assert!`, or anything else), it prints
/// `{name}(): Test failed ❌, see error message below:` and rethrows the
/// original panic payload unchanged — the wrapper never swallows a failure.
///
/// # Example
///
/// ```rust
/// use spotcheck::run_test;
///
/// fn my_test() {
///     assert_eq!(2 + 2, 4);
/// }
///
/// let wrapped = run_test("my_test", my_test);
/// wrapped();
/// ```
pub fn run_test<F>(name: &str, body: F) -> impl FnOnce() -> Outcome
where
    F: FnOnce(),
{
    let name = name.to_string();
    move || {
        // The payload is rethrown, so unwind safety of the body's captures
        // is not a concern here.
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(()) => {
                println!(
                    "{}",
                    output::banner(Outcome::Passed, &name, "Test passed ✅")
                );
                Outcome::Passed
            }
            Err(payload) => {
                println!(
                    "{}",
                    output::banner(
                        Outcome::Failed,
                        &name,
                        "Test failed ❌, see error message below:"
                    )
                );
                panic::resume_unwind(payload);
            }
        }
    }
}

/// Wrap a test body so it never runs.
///
/// Calling the returned closure prints `{name}(): Test skipped 🔇` and
/// returns [`Outcome::Skipped`]; the original body (and any side effects it
/// would have) is never executed.
pub fn skip_test<F>(name: &str, _body: F) -> impl FnOnce() -> Outcome
where
    F: FnOnce(),
{
    let name = name.to_string();
    move || {
        println!(
            "{}",
            output::banner(Outcome::Skipped, &name, "Test skipped 🔇")
        );
        Outcome::Skipped
    }
}

/// Wrap a test function with [`run_test`], using its source text as the
/// reported name.
///
/// # Example
///
/// ```rust
/// fn my_test() {
///     assert!(true);
/// }
///
/// let wrapped = spotcheck::run_test!(my_test);
/// wrapped();
/// ```
#[macro_export]
macro_rules! run_test {
    ($func:expr) => {
        $crate::run_test(stringify!($func), $func)
    };
}

/// Wrap a test function with [`skip_test`], using its source text as the
/// reported name.
#[macro_export]
macro_rules! skip_test {
    ($func:expr) => {
        $crate::skip_test(stringify!($func), $func)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_run_test_runs_the_body_once() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let wrapped = run_test("counting_test", move || {
            counter.set(counter.get() + 1);
        });

        assert_eq!(wrapped(), Outcome::Passed);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    #[should_panic(expected = "left == right")]
    fn test_run_test_rethrows_assertion_failure() {
        let wrapped = run_test("failing_test", || {
            assert_eq!(2 + 2, 5);
        });
        wrapped();
    }

    #[test]
    #[should_panic(expected = "kaboom")]
    fn test_run_test_rethrows_arbitrary_panic() {
        let wrapped = run_test("exploding_test", || panic!("kaboom"));
        wrapped();
    }

    #[test]
    fn test_skip_test_never_runs_the_body() {
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let wrapped = skip_test("skipped_test", move || {
            counter.set(counter.get() + 1);
            panic!("should never execute");
        });

        assert_eq!(wrapped(), Outcome::Skipped);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_run_test_macro_captures_the_name() {
        fn named_test() {}

        let wrapped = run_test!(named_test);
        assert_eq!(wrapped(), Outcome::Passed);
    }

    #[test]
    fn test_skip_test_macro_captures_the_name() {
        fn named_test() {
            panic!("should never execute");
        }

        let wrapped = skip_test!(named_test);
        assert_eq!(wrapped(), Outcome::Skipped);
    }
}
