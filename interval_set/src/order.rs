use crate::nothing_between::NothingBetween;
use std::cmp::Ordering;
use std::rc::Rc;

/// The total order used to compare the elements of a range.
///
/// Every interval and every set carries its order.  Two ranges can only be
/// combined when their orders are the same ([`Order::same_order`]); this is
/// checked at run time since two closures of the same type might still
/// order elements differently.
pub trait Order<E>: Clone {
    fn compare(&self, left: &E, right: &E) -> Ordering;

    /// True if no element lies strictly between `lower` and `upper`
    /// (only called with lower < upper).  Dense orders never have adjacent
    /// elements.
    fn nothing_between(&self, _lower: &E, _upper: &E) -> bool {
        false
    }

    /// The value immediately after `value`.  Always None for a dense
    /// order, and for the largest value of a discrete one.
    fn successor(&self, _value: &E) -> Option<E> {
        None
    }

    /// The value immediately before `value`.  Always None for a dense
    /// order, and for the smallest value of a discrete one.
    fn predecessor(&self, _value: &E) -> Option<E> {
        None
    }

    /// True if no value is less than `value`.  A dense order is unbounded.
    fn is_minimum(&self, _value: &E) -> bool {
        false
    }

    /// True if no value is greater than `value`.
    fn is_maximum(&self, _value: &E) -> bool {
        false
    }

    /// Whether self and other denote the same ordering function.
    fn same_order(&self, other: &Self) -> bool;
}

/// The natural order of the type, considered dense: there is always room
/// for another value between two distinct ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<E: Ord> Order<E> for Natural {
    fn compare(&self, left: &E, right: &E) -> Ordering {
        left.cmp(right)
    }

    fn same_order(&self, _other: &Self) -> bool {
        true
    }
}

/// The natural order of a discrete type.  Intervals which leave no value
/// out between them are connected, e.g. `[1,4]` and `[5,9]` for integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Discrete;

impl<E: Ord + NothingBetween> Order<E> for Discrete {
    fn compare(&self, left: &E, right: &E) -> Ordering {
        left.cmp(right)
    }

    fn nothing_between(&self, lower: &E, upper: &E) -> bool {
        lower.nothing_between(upper)
    }

    fn successor(&self, value: &E) -> Option<E> {
        value.successor()
    }

    fn predecessor(&self, value: &E) -> Option<E> {
        value.predecessor()
    }

    fn is_minimum(&self, value: &E) -> bool {
        value.predecessor().is_none()
    }

    fn is_maximum(&self, value: &E) -> bool {
        value.successor().is_none()
    }

    fn same_order(&self, _other: &Self) -> bool {
        true
    }
}

/// A caller-supplied comparison function.
///
/// Clones share the function, and only clones are considered the same
/// order:
/// ```
///     use interval_set::{Bound, Interval, OrderFn};
///     let reversed = OrderFn::new(|a: &i32, b: &i32| b.cmp(a));
///     let intv = Interval::with_bounds(
///         reversed.clone(),
///         Bound::Included(10),
///         Bound::Included(0),
///     );
///     assert!(intv.contains(&5));
///     assert!(!intv.contains(&11));
/// ```
pub struct OrderFn<E> {
    cmp: Rc<dyn Fn(&E, &E) -> Ordering>,
}

impl<E> OrderFn<E> {
    pub fn new<F>(cmp: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
    {
        Self { cmp: Rc::new(cmp) }
    }
}

impl<E> Clone for OrderFn<E> {
    fn clone(&self) -> Self {
        Self {
            cmp: Rc::clone(&self.cmp),
        }
    }
}

impl<E> ::core::fmt::Debug for OrderFn<E> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "OrderFn({:p})", Rc::as_ptr(&self.cmp))
    }
}

impl<E> Order<E> for OrderFn<E> {
    fn compare(&self, left: &E, right: &E) -> Ordering {
        (self.cmp)(left, right)
    }

    fn same_order(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cmp, &other.cmp)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_natural() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&"b", &"a"), Ordering::Greater);
        assert!(!Order::<i32>::nothing_between(&Natural, &1, &2));
        assert!(Order::<i32>::same_order(&Natural, &Natural));
    }

    #[test]
    fn test_discrete() {
        assert_eq!(Discrete.compare(&1, &2), Ordering::Less);
        assert!(Order::<i32>::nothing_between(&Discrete, &1, &2));
        assert!(!Order::<i32>::nothing_between(&Discrete, &1, &3));
        assert_eq!(Discrete.successor(&1_i32), Some(2));
        assert_eq!(Discrete.predecessor(&1_i32), Some(0));
        assert!(Discrete.is_maximum(&u8::MAX));
        assert!(Discrete.is_minimum(&u8::MIN));
        assert!(!Discrete.is_minimum(&1_u8));
        assert!(!Order::<u8>::is_maximum(&Natural, &u8::MAX));
        assert_eq!(Order::<i32>::successor(&Natural, &1), None);
    }

    #[test]
    fn test_order_fn() {
        let rev = OrderFn::new(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert!(rev.same_order(&rev.clone()));

        let rev2 = OrderFn::new(|a: &i32, b: &i32| b.cmp(a));
        assert!(!rev.same_order(&rev2));
    }
}
