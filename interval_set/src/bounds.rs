use crate::order::Order;
use std::cmp::Ordering;

/// One side of an interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound<E> {
    /// Minus infinity for a lower bound, plus infinity for an upper bound
    Unbounded,
    Included(E),
    Excluded(E),
}

impl<E> Bound<E> {
    /// The value of the bound, None if unbounded
    pub fn value(&self) -> Option<&E> {
        match self {
            Bound::Unbounded => None,
            Bound::Included(v) | Bound::Excluded(v) => Some(v),
        }
    }

    pub fn is_included(&self) -> bool {
        matches!(self, Bound::Included(_))
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Bound::Unbounded)
    }

    /// Converts from `Bound<E>` to `Bound<&E>`
    pub fn as_ref(&self) -> Bound<&E> {
        match self {
            Bound::Unbounded => Bound::Unbounded,
            Bound::Included(v) => Bound::Included(v),
            Bound::Excluded(v) => Bound::Excluded(v),
        }
    }

    /// The same value, with inclusion flipped.  Used to turn the lower
    /// bound of a removed interval into the upper bound of what remains
    /// below it (and conversely).
    pub(crate) fn flipped(self) -> Self {
        match self {
            Bound::Unbounded => Bound::Unbounded,
            Bound::Included(v) => Bound::Excluded(v),
            Bound::Excluded(v) => Bound::Included(v),
        }
    }

    /// Where this bound cuts the ordered line when used as a lower bound
    pub(crate) fn as_lower(&self) -> Cut<'_, E> {
        match self {
            Bound::Unbounded => Cut::Below,
            Bound::Included(v) => Cut::LeftOf(v),
            Bound::Excluded(v) => Cut::RightOf(v),
        }
    }

    /// Where this bound cuts the ordered line when used as an upper bound
    pub(crate) fn as_upper(&self) -> Cut<'_, E> {
        match self {
            Bound::Unbounded => Cut::Above,
            Bound::Included(v) => Cut::RightOf(v),
            Bound::Excluded(v) => Cut::LeftOf(v),
        }
    }
}

/// A position between elements of the ordered line.
///
/// `LeftOf(v)` is a conceptual point halfway between v and its predecessor,
/// `RightOf(v)` halfway between v and its successor.  Both a closed lower
/// bound `[v` and an open upper bound `v)` sit at `LeftOf(v)`, so comparing
/// cuts handles all combinations of inclusion uniformly.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Cut<'a, E> {
    Below,
    LeftOf(&'a E),
    RightOf(&'a E),
    Above,
}

impl<E> Cut<'_, E> {
    /// Compare two cuts.  With a discrete order, `RightOf(a)` and
    /// `LeftOf(b)` are the same cut when nothing lies between a and b.
    /// Likewise `LeftOf(min)` is `Below`, and `RightOf(max)` is `Above`.
    pub(crate) fn cmp<O: Order<E>>(&self, other: &Self, order: &O) -> Ordering {
        match (self, other) {
            (Cut::Below, Cut::Below) | (Cut::Above, Cut::Above) => {
                Ordering::Equal
            }
            (Cut::Below, Cut::LeftOf(v)) if order.is_minimum(v) => {
                Ordering::Equal
            }
            (Cut::LeftOf(v), Cut::Below) if order.is_minimum(v) => {
                Ordering::Equal
            }
            (Cut::RightOf(v), Cut::Above) if order.is_maximum(v) => {
                Ordering::Equal
            }
            (Cut::Above, Cut::RightOf(v)) if order.is_maximum(v) => {
                Ordering::Equal
            }
            (Cut::Below, _) | (_, Cut::Above) => Ordering::Less,
            (_, Cut::Below) | (Cut::Above, _) => Ordering::Greater,
            (Cut::LeftOf(a), Cut::LeftOf(b))
            | (Cut::RightOf(a), Cut::RightOf(b)) => order.compare(a, b),
            (Cut::LeftOf(a), Cut::RightOf(b)) => right_of_vs_left_of(order, b, a).reverse(),
            (Cut::RightOf(a), Cut::LeftOf(b)) => right_of_vs_left_of(order, a, b),
        }
    }

    /// True if the cut lies before the value
    pub(crate) fn before<O: Order<E>>(&self, value: &E, order: &O) -> bool {
        match self {
            Cut::Below => true,
            Cut::Above => false,
            Cut::LeftOf(v) => order.compare(v, value) != Ordering::Greater,
            Cut::RightOf(v) => order.compare(v, value) == Ordering::Less,
        }
    }

    /// True if the cut lies after the value
    pub(crate) fn after<O: Order<E>>(&self, value: &E, order: &O) -> bool {
        match self {
            Cut::Below => false,
            Cut::Above => true,
            Cut::LeftOf(v) => order.compare(value, v) == Ordering::Less,
            Cut::RightOf(v) => order.compare(value, v) != Ordering::Greater,
        }
    }
}

/// Compare `RightOf(a)` with `LeftOf(b)`
fn right_of_vs_left_of<E, O: Order<E>>(order: &O, a: &E, b: &E) -> Ordering {
    match order.compare(a, b) {
        Ordering::Less => {
            if order.nothing_between(a, b) {
                Ordering::Equal
            } else {
                Ordering::Less
            }
        }
        Ordering::Equal | Ordering::Greater => Ordering::Greater,
    }
}
