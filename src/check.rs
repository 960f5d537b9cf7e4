//! The core check object: bind a function, invoke it once, assert, report.

use std::any::Any;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::identity::SameObject;
use crate::output::{self, Outcome};

/// A single inline check against one function under test.
///
/// A `Check` binds a function, an identifying name, a human-readable title,
/// and optional call arguments. The first assertion method invokes the
/// function exactly once and caches the return value; every further
/// assertion on the same `Check` reuses the cached value. Each assertion
/// prints one color-coded line and returns an [`Outcome`] — a mismatch never
/// panics, only a panic from the function under test propagates (after a
/// diagnostic banner).
///
/// # Example
///
/// ```rust
/// use spotcheck::check;
///
/// fn add(args: &mut (i32, i32)) -> i32 {
///     args.0 + args.1
/// }
///
/// let outcome = check!(add, "adds two numbers")
///     .when_called_with((4, 4))
///     .returns(&8);
/// assert!(outcome.is_pass());
/// ```
pub struct Check<A, R> {
    func: Box<dyn FnMut(&mut A) -> R>,
    name: String,
    title: String,
    args: A,
    /// Arguments serialized immediately before the single invocation.
    snapshot: Option<serde_json::Value>,
    /// Memoized return value; `Some` once the function has been invoked.
    return_value: Option<R>,
}

impl<A: Default, R> Check<A, R> {
    /// Create a check with default (empty) arguments.
    ///
    /// `name` identifies the function under test in every printed line;
    /// closures have no runtime name, so it is supplied by the caller. The
    /// [`check!`](crate::check!) macro stringifies the function expression
    /// to fill it in.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        func: impl FnMut(&mut A) -> R + 'static,
    ) -> Self {
        Self {
            func: Box::new(func),
            name: name.into(),
            title: title.into(),
            args: A::default(),
            snapshot: None,
            return_value: None,
        }
    }
}

impl<A, R> Check<A, R> {
    pub(crate) fn from_parts(
        name: String,
        title: String,
        func: Box<dyn FnMut(&mut A) -> R>,
        args: A,
    ) -> Self {
        Self {
            func,
            name,
            title,
            args,
            snapshot: None,
            return_value: None,
        }
    }

    /// Bind the arguments the function will be called with.
    ///
    /// Returns `self` for fluent chaining. Calling it again overwrites the
    /// previous binding (last write wins).
    pub fn when_called_with(mut self, args: A) -> Self {
        self.args = args;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn args(&self) -> &A {
        &self.args
    }

    /// The cached return value, available once an assertion has run.
    pub fn return_value(&self) -> Option<&R> {
        self.return_value.as_ref()
    }

    fn captured(&self) -> &R {
        self.return_value.as_ref().unwrap()
    }

    fn report(&self, outcome: Outcome, message: &str) -> Outcome {
        println!(
            "{}",
            output::check_line(outcome, &self.name, &self.title, message)
        );
        outcome
    }
}

impl<A: Serialize, R> Check<A, R> {
    /// Invoke the function under test at most once, caching the result.
    ///
    /// The bound arguments are serialized right before the call; the stored
    /// snapshot is what [`mutates_input`](Self::mutates_input) later compares
    /// against. A panic from the function is reported with a diagnostic
    /// banner and then rethrown unchanged.
    fn ensure_invoked(&mut self) {
        if self.return_value.is_some() {
            return;
        }

        self.snapshot = serde_json::to_value(&self.args).ok();

        // The panic payload is rethrown below, so a partially mutated
        // check is never observed afterwards.
        let result = panic::catch_unwind(AssertUnwindSafe(|| (self.func)(&mut self.args)));
        match result {
            Ok(value) => self.return_value = Some(value),
            Err(payload) => {
                println!(
                    "{}",
                    output::invocation_failure_line(&self.name, &self.title)
                );
                panic::resume_unwind(payload);
            }
        }
    }

    /// Assert the return value is the *same underlying object* as `expected`.
    ///
    /// Identity, not value equality: see [`SameObject`].
    pub fn is_same_as(&mut self, expected: &R) -> Outcome
    where
        R: SameObject,
    {
        self.ensure_invoked();
        if self.captured().same_object(expected) {
            self.report(Outcome::Passed, "Test passed, same object returned")
        } else {
            self.report(
                Outcome::Failed,
                "Test failed, return value should be the same object",
            )
        }
    }

    /// Assert the return value is NOT the same underlying object as
    /// `expected`.
    ///
    /// Useful for verifying a non-mutating function handed back a fresh
    /// object rather than its input.
    pub fn is_not_same_as(&mut self, expected: &R) -> Outcome
    where
        R: SameObject,
    {
        self.ensure_invoked();
        if self.captured().same_object(expected) {
            self.report(
                Outcome::Failed,
                "Test failed, return value should be a new object",
            )
        } else {
            self.report(Outcome::Passed, "Test passed, new object returned")
        }
    }

    /// Assert the return value's exact runtime type is `T`.
    pub fn is_type<T: Any>(&mut self) -> Outcome
    where
        R: Any,
    {
        self.ensure_invoked();
        let value: &dyn Any = self.captured();
        if value.is::<T>() {
            self.report(Outcome::Passed, "Test passed, correct data type returned")
        } else {
            let message = format!(
                "Return value should be of type {}",
                std::any::type_name::<T>()
            );
            self.report(Outcome::Failed, &message)
        }
    }

    /// Assert the return value equals `expected` (value equality).
    pub fn returns(&mut self, expected: &R) -> Outcome
    where
        R: PartialEq + Debug,
    {
        self.ensure_invoked();
        if self.captured() == expected {
            self.report(Outcome::Passed, "Test passed")
        } else {
            let message = format!(
                "expected '{:?}', but received '{:?}'",
                expected,
                self.captured()
            );
            self.report(Outcome::Failed, &message)
        }
    }

    /// Assert the bound arguments were mutated by the invocation.
    ///
    /// Mutation is detected by serializing the arguments immediately before
    /// the single invocation and comparing that snapshot against their
    /// serialized state now. `label` names the mutated object in the
    /// printed line.
    pub fn mutates_input(&mut self, label: &str) -> Outcome {
        self.ensure_invoked();
        let after = serde_json::to_value(&self.args).ok();
        let mutated = match (&self.snapshot, &after) {
            (Some(before), Some(after)) => before != after,
            _ => false,
        };
        if mutated {
            let message = format!("Test passed, {label} successfully mutated");
            self.report(Outcome::Passed, &message)
        } else {
            let message = format!("Test failed, {label} has not been mutated");
            self.report(Outcome::Failed, &message)
        }
    }
}

/// Construct a [`Check`], using the function expression's source text as its
/// reported name.
///
/// # Example
///
/// ```rust
/// use spotcheck::check;
///
/// fn double(n: &mut i32) -> i32 {
///     *n * 2
/// }
///
/// check!(double, "doubles its input")
///     .when_called_with(21)
///     .returns(&42);
/// ```
#[macro_export]
macro_rules! check {
    ($func:expr, $title:expr) => {
        $crate::Check::new(stringify!($func), $title, $func)
    };
}
