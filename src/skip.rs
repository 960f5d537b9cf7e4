//! A check variant that never invokes the function under test.

use std::any::Any;

use crate::check::Check;
use crate::output::{self, Outcome};

/// A [`Check`] stand-in whose assertions are all no-ops.
///
/// `SkipCheck` has the same construction and assertion surface as `Check`,
/// but every assertion method prints a `skipping test...` line instead of
/// invoking the function. Swapping `check!` for `skip_check!` disables a
/// check while keeping its declaration visible, which is the point: a
/// skipped check shows up in the output, a deleted one silently disappears.
///
/// # Example
///
/// ```rust
/// use spotcheck::skip_check;
///
/// fn add(args: &mut (i32, i32)) -> i32 {
///     args.0 + args.1
/// }
///
/// let outcome = skip_check!(add, "adds two numbers")
///     .when_called_with((4, 4))
///     .returns(&8);
/// assert!(outcome.is_skip());
/// ```
pub struct SkipCheck<A, R> {
    func: Box<dyn FnMut(&mut A) -> R>,
    name: String,
    title: String,
    args: A,
}

impl<A: Default, R> SkipCheck<A, R> {
    /// Create a skipped check with default (empty) arguments.
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
        }
    }
}

impl<A, R> SkipCheck<A, R> {
    /// Bind call arguments, fluently. The binding is kept so the check can
    /// be re-enabled later, but it never triggers an invocation here.
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

    /// Re-enable this check, carrying over the function, title, and bound
    /// arguments.
    pub fn into_check(self) -> Check<A, R> {
        Check::from_parts(self.name, self.title, self.func, self.args)
    }

    fn skip(&self) -> Outcome {
        println!(
            "{}",
            output::check_line(
                Outcome::Skipped,
                &self.name,
                &self.title,
                "skipping test..."
            )
        );
        Outcome::Skipped
    }

    pub fn is_same_as(&self, _expected: &R) -> Outcome {
        self.skip()
    }

    pub fn is_not_same_as(&self, _expected: &R) -> Outcome {
        self.skip()
    }

    pub fn is_type<T: Any>(&self) -> Outcome {
        self.skip()
    }

    pub fn returns(&self, _expected: &R) -> Outcome {
        self.skip()
    }

    pub fn mutates_input(&self, _label: &str) -> Outcome {
        self.skip()
    }
}

/// Construct a [`SkipCheck`], using the function expression's source text as
/// its reported name.
#[macro_export]
macro_rules! skip_check {
    ($func:expr, $title:expr) => {
        $crate::SkipCheck::new(stringify!($func), $title, $func)
    };
}
