//! Object identity for return-value checks.

use std::rc::Rc;
use std::sync::Arc;

/// Pointer identity, as distinct from value equality.
///
/// [`Check::is_same_as`](crate::Check::is_same_as) and
/// [`Check::is_not_same_as`](crate::Check::is_not_same_as) ask *which object*
/// a function returned, not what it contains. That question only makes sense
/// for handle types that can share an underlying allocation, so the trait is
/// implemented for `Rc`, `Arc`, and plain references. Two equal values held
/// by separate allocations are never the same object.
///
/// # Example
///
/// ```rust
/// use spotcheck::SameObject;
/// use std::rc::Rc;
///
/// let original = Rc::new(vec![1, 2, 3]);
/// let alias = Rc::clone(&original);
/// let fresh = Rc::new(vec![1, 2, 3]);
///
/// assert!(original.same_object(&alias));
/// assert!(!original.same_object(&fresh));
/// ```
pub trait SameObject {
    /// True when `self` and `other` are the same underlying object.
    fn same_object(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameObject for Rc<T> {
    fn same_object(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameObject for Arc<T> {
    fn same_object(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameObject for &T {
    fn same_object(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}
