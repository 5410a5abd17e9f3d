//! This crate provides sets of values described as unions of disjoint
//! intervals.
//!
//! An [`Interval`] includes all values between two bounds.  Each bound is
//! either closed, open or missing (infinite):
//!
//!  |Interval|Constructor                       |Description
//!  |--------|----------------------------------|--------------
//!  | `[A,B]`|[`Interval::new_closed_closed`]   |left-closed, right-closed
//!  | `[A,B)`|[`Interval::new_closed_open`]     |left-closed, right-open
//!  | `(A,B)`|[`Interval::new_open_open`]       |left-open, right-open
//!  | `(A,B]`|[`Interval::new_open_closed`]     |left-open, right-closed
//!  | `(,B]` |[`Interval::new_unbounded_closed`]|left-unbounded, right-closed
//!  | `(,B)` |[`Interval::new_unbounded_open`]  |left-unbounded, right-open
//!  | `[A,)` |[`Interval::new_closed_unbounded`]|left-closed, right-unbounded
//!  | `(A,)` |[`Interval::new_open_unbounded`]  |left-open, right-unbounded
//!  | `(,)`  |[`Interval::doubly_unbounded`]    |doubly unbounded
//!  | `[A,A]`|[`Interval::new_single`]          |a single value
//!  | `O`    |[`Interval::empty`]               |empty
//!
//! A [`DisjointIntervalSet`] stores any number of values as the smallest
//! list of intervals.  Intervals that touch or overlap are merged:
//!
//! ```text
//!      [---A---)
//!              [----B----]
//!          (---C---)         [-D-]
//!
//!      [-----------------]   [-D-]    A U B U C
//!      [---)           [-]   [-D-]    minus [4,15)
//! ```
//!
//! Values are compared with an [`Order`], which every interval and set
//! carries.  [`Natural`] uses `Ord` and considers there is always room for
//! another value between two distinct ones.  [`Discrete`] knows about
//! adjacent values (see [`NothingBetween`]), so that `[1,4]` and `[5,9]` are
//! merged for integers.  [`OrderFn`] wraps any comparison function.  Two
//! ranges can only be combined when they use the same order, otherwise
//! [`Error::IncompatibleOrdering`] is returned.
//!
//! Both intervals and sets implement [`RangeQuery`], so that generic code
//! can query either.  Sets also implement [`RangeMutate`].
//!
//! ```
//!    use interval_set::{DisjointIntervalSet, Interval, RangeQuery};
//!    let mut set = DisjointIntervalSet::new();
//!    set.union(Interval::new_closed_closed(0, 10)).unwrap();
//!    set.remove(&5);
//!    assert_eq!(set.to_string(), "[0,5)U(5,10]");
//!    assert!(set.intersects_range(&Interval::new_open_open(4, 6)).unwrap());
//! ```

mod bounds;
mod disjoint_set;
mod errors;
mod intervals;
mod iterators;
mod nothing_between;
mod order;
mod parse;
mod range;

pub use crate::bounds::Bound;
pub use crate::disjoint_set::DisjointIntervalSet;
pub use crate::errors::{Error, Extremum, Result};
pub use crate::intervals::Interval;
pub use crate::iterators::{IntervalCursor, Intervals};
pub use crate::nothing_between::NothingBetween;
pub use crate::order::{Discrete, Natural, Order, OrderFn};
pub use crate::range::{RangeMutate, RangeQuery};
