//! # spotcheck
//!
//! Inline example-based checks with color-coded pass/fail/skip reporting.
//!
//! A [`Check`] binds a function under test, a title, and optional call
//! arguments, invokes the function exactly once, and asserts one property of
//! the return value — equality, exact type, object identity, or mutation of
//! the input. Every assertion prints a single formatted console line and
//! returns an [`Outcome`]; mismatches never panic, only a panic from the
//! function under test propagates.
//!
//! ## Quick Start
//!
//! ```rust
//! use spotcheck::check;
//!
//! fn add(args: &mut (i32, i32)) -> i32 {
//!     args.0 + args.1
//! }
//!
//! check!(add, "adds two numbers")
//!     .when_called_with((4, 4))
//!     .returns(&8);
//! ```
//!
//! ## Skipping a check
//!
//! Swap `check!` for `skip_check!` to disable a check without deleting it;
//! the function is never invoked and a `skipping test...` line is printed
//! instead:
//!
//! ```rust
//! use spotcheck::skip_check;
//!
//! fn add(args: &mut (i32, i32)) -> i32 {
//!     args.0 + args.1
//! }
//!
//! skip_check!(add, "adds two numbers")
//!     .when_called_with((4, 4))
//!     .returns(&8);
//! ```
//!
//! ## Wrapping whole test bodies
//!
//! ```rust
//! use spotcheck::run_test;
//!
//! fn my_test() {
//!     assert_eq!(2 + 2, 4);
//! }
//!
//! let wrapped = run_test("my_test", my_test);
//! wrapped();
//! ```

pub mod check;
pub mod harness;
pub mod identity;
pub mod output;
pub mod skip;

// Core types
pub use check::Check;
pub use skip::SkipCheck;

// Test-body wrappers
pub use harness::{run_test, skip_test};

// Object identity for is_same_as / is_not_same_as
pub use identity::SameObject;

// Output formatting
pub use output::{
    format_err_msg, Outcome, BOLD_GREEN, BOLD_RED, BOLD_YELLOW, DEFAULT, NORMAL_GREEN, NORMAL_RED,
    NORMAL_YELLOW,
};
