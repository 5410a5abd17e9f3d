use crate::bounds::{Bound, Cut};
use crate::disjoint_set::DisjointIntervalSet;
use crate::errors::{Error, Extremum, Result};
use crate::order::{Natural, Order};
use crate::range::RangeQuery;
use std::cmp::Ordering;

/// The value of an interval with a single element: one of its bounds, or
/// a neighbour of an excluded bound.
enum Single<'a, E> {
    Bound(&'a E),
    Adjacent(E),
}

#[derive(Clone)]
enum Extent<E> {
    Empty,
    Span { lower: Bound<E>, upper: Bound<E> },
}

/// An interval of values, compared with the order `O`.
///
/// An interval is an immutable value: operations always build a new
/// interval.  Construction normalizes the bounds, so that any interval
/// which cannot contain a value (`[5,3]`, `[3,3)`, or `(3,4)` with a
/// [`crate::Discrete`] order) is represented as the empty interval.
#[derive(Clone)]
pub struct Interval<E, O = Natural> {
    order: O,
    extent: Extent<E>,
}

impl<E: Ord> Interval<E> {
    /// Construct a left-closed, right-open intervals (`[A,B)`)
    pub fn new_closed_open(lower: E, upper: E) -> Self {
        Self::with_bounds(Natural, Bound::Included(lower), Bound::Excluded(upper))
    }

    /// Construct a left-closed, right-closed intervals (`[A,B]`)
    pub fn new_closed_closed(lower: E, upper: E) -> Self {
        Self::with_bounds(Natural, Bound::Included(lower), Bound::Included(upper))
    }

    /// Construct a left-open, right-open intervals (`(A,B)`)
    pub fn new_open_open(lower: E, upper: E) -> Self {
        Self::with_bounds(Natural, Bound::Excluded(lower), Bound::Excluded(upper))
    }

    /// Construct a left-open, right-closed intervals (`(A,B]`)
    pub fn new_open_closed(lower: E, upper: E) -> Self {
        Self::with_bounds(Natural, Bound::Excluded(lower), Bound::Included(upper))
    }

    /// Construct a left-unbounded, right-closed intervals (`(,B]`)
    pub fn new_unbounded_closed(upper: E) -> Self {
        Self::with_bounds(Natural, Bound::Unbounded, Bound::Included(upper))
    }

    /// Construct a left-unbounded, right-open intervals (`(,B)`)
    pub fn new_unbounded_open(upper: E) -> Self {
        Self::with_bounds(Natural, Bound::Unbounded, Bound::Excluded(upper))
    }

    /// Construct a left-closed, right-unbounded intervals (`[A,)`)
    pub fn new_closed_unbounded(lower: E) -> Self {
        Self::with_bounds(Natural, Bound::Included(lower), Bound::Unbounded)
    }

    /// Construct a left-open, right-unbounded intervals (`(A,)`)
    pub fn new_open_unbounded(lower: E) -> Self {
        Self::with_bounds(Natural, Bound::Excluded(lower), Bound::Unbounded)
    }

    /// Construct a doubly unbounded intervals (`(,)`) that contains all
    /// possible values.
    pub fn doubly_unbounded() -> Self {
        Self::with_bounds(Natural, Bound::Unbounded, Bound::Unbounded)
    }

    /// Returns an empty interval.
    pub fn empty() -> Self {
        Self::empty_with(Natural)
    }

    /// Returns an interval that contains a single value (`[value,value]`)
    pub fn new_single(value: E) -> Self
    where
        E: Clone,
    {
        Self::single_with(Natural, value)
    }
}

impl<E, O: Order<E>> Interval<E, O> {
    /// Build an interval from its two bounds, ordered with `order`.
    /// If no value can lie between the bounds, the result is empty.
    pub fn with_bounds(order: O, lower: Bound<E>, upper: Bound<E>) -> Self {
        let is_empty = lower.as_lower().cmp(&upper.as_upper(), &order)
            != Ordering::Less;
        Self {
            extent: if is_empty {
                Extent::Empty
            } else {
                Extent::Span { lower, upper }
            },
            order,
        }
    }

    /// Build an interval from optional extrema and inclusion flags.
    /// An extremum can only be included if it exists.
    pub fn from_parts(
        order: O,
        infimum: Option<E>,
        infimum_included: bool,
        supremum: Option<E>,
        supremum_included: bool,
    ) -> Result<Self> {
        let lower = match (infimum, infimum_included) {
            (None, true) => {
                return Err(Error::IllegalConfiguration(
                    "infimum is included but does not exist".into(),
                ))
            }
            (None, false) => Bound::Unbounded,
            (Some(v), true) => Bound::Included(v),
            (Some(v), false) => Bound::Excluded(v),
        };
        let upper = match (supremum, supremum_included) {
            (None, true) => {
                return Err(Error::IllegalConfiguration(
                    "supremum is included but does not exist".into(),
                ))
            }
            (None, false) => Bound::Unbounded,
            (Some(v), true) => Bound::Included(v),
            (Some(v), false) => Bound::Excluded(v),
        };
        Ok(Self::with_bounds(order, lower, upper))
    }

    /// The empty interval for the given order
    pub fn empty_with(order: O) -> Self {
        Self {
            order,
            extent: Extent::Empty,
        }
    }

    /// The interval `[value,value]` for the given order
    pub fn single_with(order: O, value: E) -> Self
    where
        E: Clone,
    {
        Self::with_bounds(order, Bound::Included(value.clone()), Bound::Included(value))
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// The lower bound, or None for an empty interval
    pub fn lower(&self) -> Option<Bound<&E>> {
        match &self.extent {
            Extent::Empty => None,
            Extent::Span { lower, .. } => Some(lower.as_ref()),
        }
    }

    /// The upper bound, or None for an empty interval
    pub fn upper(&self) -> Option<Bound<&E>> {
        match &self.extent {
            Extent::Empty => None,
            Extent::Span { upper, .. } => Some(upper.as_ref()),
        }
    }

    /// True if the interval contains no element.
    pub fn is_empty(&self) -> bool {
        matches!(self.extent, Extent::Empty)
    }

    /// True if self contains exactly one value.  This is `[A,A]`, but
    /// with a [`crate::Discrete`] order also `[1,2)` or `(0,2)` for
    /// integers.
    pub fn is_set(&self) -> bool {
        self.single().is_some()
    }

    /// The only value of the interval, if it has exactly one
    fn single(&self) -> Option<Single<'_, E>> {
        let Extent::Span { lower, upper } = &self.extent else {
            return None;
        };
        let only = |value: &E| {
            lower.as_lower().cmp(&Cut::LeftOf(value), &self.order)
                == Ordering::Equal
                && Cut::RightOf(value).cmp(&upper.as_upper(), &self.order)
                    == Ordering::Equal
        };
        match (lower, upper) {
            (Bound::Included(v), _) | (_, Bound::Included(v)) if only(v) => {
                Some(Single::Bound(v))
            }
            (Bound::Excluded(v), _) => self
                .order
                .successor(v)
                .filter(|next| only(next))
                .map(Single::Adjacent),
            (_, Bound::Excluded(v)) => self
                .order
                .predecessor(v)
                .filter(|prev| only(prev))
                .map(Single::Adjacent),
            _ => None,
        }
    }

    /// Whether value is contained in the interval
    pub fn contains(&self, value: &E) -> bool {
        match &self.extent {
            Extent::Empty => false,
            Extent::Span { lower, upper } => {
                lower.as_lower().before(value, &self.order)
                    && upper.as_upper().after(value, &self.order)
            }
        }
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).
    pub fn contains_interval(&self, other: &Self) -> Result<bool> {
        self.check_order(other)?;
        Ok(match (&self.extent, &other.extent) {
            (_, Extent::Empty) => true,
            (Extent::Empty, Extent::Span { .. }) => false,
            (
                Extent::Span { lower, upper },
                Extent::Span {
                    lower: olower,
                    upper: oupper,
                },
            ) => {
                lower.as_lower().cmp(&olower.as_lower(), &self.order)
                    != Ordering::Greater
                    && oupper.as_upper().cmp(&upper.as_upper(), &self.order)
                        != Ordering::Greater
            }
        })
    }

    /// Whether value touches or lies in the interval, i.e. whether adding
    /// value to the interval leaves no gap.
    /// ```
    ///    use interval_set::Interval;
    ///    assert!(Interval::new_closed_open(0, 5).connected_to(&5));
    ///    assert!(!Interval::new_closed_open(0, 5).connected_to(&6));
    /// ```
    pub fn connected_to(&self, value: &E) -> bool {
        match &self.extent {
            Extent::Empty => true,
            Extent::Span { lower, upper } => {
                lower.as_lower().cmp(&Cut::RightOf(value), &self.order)
                    != Ordering::Greater
                    && Cut::LeftOf(value).cmp(&upper.as_upper(), &self.order)
                        != Ordering::Greater
            }
        }
    }

    /// Whether the two intervals touch or overlap, so that their union is
    /// a single interval.  `[0,5)` and `[5,10]` are connected, `(0,5)` and
    /// `(5,10)` are not.
    /// An empty interval is connected to everything.
    pub fn connected(&self, other: &Self) -> Result<bool> {
        self.check_order(other)?;
        Ok(self.contiguous(other))
    }

    /// Whether the two intervals have at least one element in common
    pub fn intersects(&self, other: &Self) -> Result<bool> {
        self.check_order(other)?;
        Ok(self.overlaps(other))
    }

    /// Whether the interval has a lower bound
    pub fn has_infimum(&self) -> bool {
        self.lower().is_some_and(|b| !b.is_unbounded())
    }

    pub fn infimum(&self) -> Result<&E> {
        self.lower()
            .and_then(|b| b.value().copied())
            .ok_or(Error::NoSuchExtremum(Extremum::Infimum))
    }

    pub fn is_infimum_included(&self) -> Result<bool> {
        match self.lower() {
            None | Some(Bound::Unbounded) => {
                Err(Error::NoSuchExtremum(Extremum::Infimum))
            }
            Some(b) => Ok(b.is_included()),
        }
    }

    /// Whether the interval has an upper bound
    pub fn has_supremum(&self) -> bool {
        self.upper().is_some_and(|b| !b.is_unbounded())
    }

    pub fn supremum(&self) -> Result<&E> {
        self.upper()
            .and_then(|b| b.value().copied())
            .ok_or(Error::NoSuchExtremum(Extremum::Supremum))
    }

    pub fn is_supremum_included(&self) -> Result<bool> {
        match self.upper() {
            None | Some(Bound::Unbounded) => {
                Err(Error::NoSuchExtremum(Extremum::Supremum))
            }
            Some(b) => Ok(b.is_included()),
        }
    }

    /// Whether value is less than (<=) every value in self.
    /// Returns true if self is empty.
    /// ```txt
    ///      [------]
    ///      X           => lower bound (but not a strict lower bound)
    /// ```
    pub fn is_lower_bound(&self, value: &E) -> bool {
        match &self.extent {
            Extent::Empty => true,
            Extent::Span { lower, .. } => lower.value().is_some_and(|inf| {
                self.order.compare(inf, value) != Ordering::Less
            }),
        }
    }

    /// Whether value is greater than (>=) every value in self.
    /// Returns true if self is empty.
    pub fn is_upper_bound(&self, value: &E) -> bool {
        match &self.extent {
            Extent::Empty => true,
            Extent::Span { upper, .. } => upper.value().is_some_and(|sup| {
                self.order.compare(sup, value) != Ordering::Greater
            }),
        }
    }

    /// Whether value is strictly less than (<) every value in self.
    /// Returns true if self is empty.
    /// ```txt
    ///    . (------]
    ///    X           => strict lower bound
    ///      X         => also a strict lower bound, since excluded
    /// ```
    pub fn is_strict_lower_bound(&self, value: &E) -> bool {
        match &self.extent {
            Extent::Empty => true,
            Extent::Span { lower, .. } => lower.as_lower().after(value, &self.order),
        }
    }

    /// Whether value is strictly greater than (>) every value in self.
    /// Returns true if self is empty.
    pub fn is_strict_upper_bound(&self, value: &E) -> bool {
        match &self.extent {
            Extent::Empty => true,
            Extent::Span { upper, .. } => upper.as_upper().before(value, &self.order),
        }
    }

    /// Whether the two intervals contain the same set of values
    pub fn equivalent(&self, other: &Self) -> bool {
        if !self.order.same_order(&other.order) {
            return false;
        }
        match (&self.extent, &other.extent) {
            (Extent::Empty, Extent::Empty) => true,
            (Extent::Empty, Extent::Span { .. })
            | (Extent::Span { .. }, Extent::Empty) => false,
            (
                Extent::Span { lower, upper },
                Extent::Span {
                    lower: olower,
                    upper: oupper,
                },
            ) => {
                lower.as_lower().cmp(&olower.as_lower(), &self.order)
                    == Ordering::Equal
                    && upper.as_upper().cmp(&oupper.as_upper(), &self.order)
                        == Ordering::Equal
            }
        }
    }

    pub(crate) fn check_order(&self, other: &Self) -> Result<()> {
        if self.order.same_order(&other.order) {
            Ok(())
        } else {
            Err(Error::IncompatibleOrdering)
        }
    }

    /// Whether the intervals touch or overlap.  Both orders must be the same.
    pub(crate) fn contiguous(&self, other: &Self) -> bool {
        match (&self.extent, &other.extent) {
            (Extent::Empty, _) | (_, Extent::Empty) => true,
            (
                Extent::Span { lower, upper },
                Extent::Span {
                    lower: olower,
                    upper: oupper,
                },
            ) => {
                lower.as_lower().cmp(&oupper.as_upper(), &self.order)
                    != Ordering::Greater
                    && olower.as_lower().cmp(&upper.as_upper(), &self.order)
                        != Ordering::Greater
            }
        }
    }

    /// Whether the intervals share an element.  Both orders must be the
    /// same.
    pub(crate) fn overlaps(&self, other: &Self) -> bool {
        match (&self.extent, &other.extent) {
            (Extent::Empty, _) | (_, Extent::Empty) => false,
            (
                Extent::Span { lower, upper },
                Extent::Span {
                    lower: olower,
                    upper: oupper,
                },
            ) => {
                lower.as_lower().cmp(&oupper.as_upper(), &self.order)
                    == Ordering::Less
                    && olower.as_lower().cmp(&upper.as_upper(), &self.order)
                        == Ordering::Less
            }
        }
    }

    /// Whether every value in self is strictly less than every value in
    /// other.  False if either interval is empty.
    pub(crate) fn ends_before(&self, other: &Self) -> bool {
        match (&self.extent, &other.extent) {
            (Extent::Span { upper, .. }, Extent::Span { lower, .. }) => {
                upper.as_upper().cmp(&lower.as_lower(), &self.order)
                    != Ordering::Greater
            }
            (Extent::Empty, _) | (_, Extent::Empty) => false,
        }
    }
}

impl<E: Clone, O: Order<E>> Interval<E, O> {
    /// The values shared by both intervals.  On a tie, a bound is only
    /// included if it is included in both intervals.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        self.check_order(other)?;
        Ok(self.intersection_of(other))
    }

    /// The union of two connected intervals.  On a tie, a bound is
    /// included if it is included in either interval.
    pub fn connected_union(&self, other: &Self) -> Result<Self> {
        self.check_order(other)?;
        if !self.contiguous(other) {
            return Err(Error::NotConnected(
                "a gap remains between the two intervals".into(),
            ));
        }
        Ok(self.hull(other))
    }

    /// Returns the convex hull of the two intervals, i.e. the smallest
    /// interval that contains the values of both intervals.
    pub fn convex_hull(&self, other: &Self) -> Result<Self> {
        self.check_order(other)?;
        Ok(self.hull(other))
    }

    /// The values of the interval, when there is at most one
    pub fn to_set(&self) -> Result<Vec<E>> {
        match self.single() {
            Some(Single::Bound(v)) => Ok(vec![v.clone()]),
            Some(Single::Adjacent(v)) => Ok(vec![v]),
            None if self.is_empty() => Ok(Vec::new()),
            None => Err(Error::UnsupportedOperation(
                "interval contains more than one value".into(),
            )),
        }
    }

    pub(crate) fn intersection_of(&self, other: &Self) -> Self {
        match (&self.extent, &other.extent) {
            (Extent::Empty, _) | (_, Extent::Empty) => {
                Self::empty_with(self.order.clone())
            }
            (
                Extent::Span { lower, upper },
                Extent::Span {
                    lower: olower,
                    upper: oupper,
                },
            ) => {
                let lower = match lower.as_lower().cmp(&olower.as_lower(), &self.order) {
                    Ordering::Less => olower,
                    Ordering::Equal | Ordering::Greater => lower,
                };
                let upper = match upper.as_upper().cmp(&oupper.as_upper(), &self.order) {
                    Ordering::Greater => oupper,
                    Ordering::Less | Ordering::Equal => upper,
                };
                Self::with_bounds(self.order.clone(), lower.clone(), upper.clone())
            }
        }
    }

    pub(crate) fn hull(&self, other: &Self) -> Self {
        match (&self.extent, &other.extent) {
            (Extent::Empty, _) => other.clone(),
            (_, Extent::Empty) => self.clone(),
            (
                Extent::Span { lower, upper },
                Extent::Span {
                    lower: olower,
                    upper: oupper,
                },
            ) => {
                let lower = match lower.as_lower().cmp(&olower.as_lower(), &self.order) {
                    Ordering::Greater => olower,
                    Ordering::Less | Ordering::Equal => lower,
                };
                let upper = match upper.as_upper().cmp(&oupper.as_upper(), &self.order) {
                    Ordering::Less => oupper,
                    Ordering::Equal | Ordering::Greater => upper,
                };
                Self::with_bounds(self.order.clone(), lower.clone(), upper.clone())
            }
        }
    }

    /// The parts of self strictly below and strictly above other.
    /// ```txt
    ///    [--------self--------]
    ///          (--other--]
    ///    [-----]         (----]
    /// ```
    pub(crate) fn split_around(&self, other: &Self) -> (Self, Self) {
        let (lower, upper) = match &other.extent {
            Extent::Empty => {
                return (self.clone(), Self::empty_with(self.order.clone()))
            }
            Extent::Span { lower, upper } => (lower, upper),
        };
        let below = match lower {
            Bound::Unbounded => Self::empty_with(self.order.clone()),
            b => self.intersection_of(&Self::with_bounds(
                self.order.clone(),
                Bound::Unbounded,
                b.clone().flipped(),
            )),
        };
        let above = match upper {
            Bound::Unbounded => Self::empty_with(self.order.clone()),
            b => self.intersection_of(&Self::with_bounds(
                self.order.clone(),
                b.clone().flipped(),
                Bound::Unbounded,
            )),
        };
        (below, above)
    }

    /// The parts of self strictly below and strictly above value
    pub(crate) fn split_at(&self, value: &E) -> (Self, Self) {
        self.split_around(&Self::single_with(self.order.clone(), value.clone()))
    }
}

impl<E: Clone, O: Order<E>> RangeQuery<E> for Interval<E, O> {
    type Order = O;

    fn order(&self) -> &O {
        &self.order
    }
    fn is_empty(&self) -> bool {
        Interval::is_empty(self)
    }
    fn is_set(&self) -> bool {
        Interval::is_set(self)
    }
    fn to_set(&self) -> Result<Vec<E>> {
        Interval::to_set(self)
    }
    fn contains(&self, value: &E) -> bool {
        Interval::contains(self, value)
    }
    fn intersects_interval(&self, interval: &Interval<E, O>) -> Result<bool> {
        self.intersects(interval)
    }
    fn has_infimum(&self) -> bool {
        Interval::has_infimum(self)
    }
    fn infimum(&self) -> Result<&E> {
        Interval::infimum(self)
    }
    fn is_infimum_included(&self) -> Result<bool> {
        Interval::is_infimum_included(self)
    }
    fn has_supremum(&self) -> bool {
        Interval::has_supremum(self)
    }
    fn supremum(&self) -> Result<&E> {
        Interval::supremum(self)
    }
    fn is_supremum_included(&self) -> Result<bool> {
        Interval::is_supremum_included(self)
    }
    fn is_lower_bound(&self, value: &E) -> bool {
        Interval::is_lower_bound(self, value)
    }
    fn is_upper_bound(&self, value: &E) -> bool {
        Interval::is_upper_bound(self, value)
    }
    fn is_strict_lower_bound(&self, value: &E) -> bool {
        Interval::is_strict_lower_bound(self, value)
    }
    fn is_strict_upper_bound(&self, value: &E) -> bool {
        Interval::is_strict_upper_bound(self, value)
    }
    fn to_interval_set(&self) -> DisjointIntervalSet<E, O> {
        let mut set = DisjointIntervalSet::with_order(self.order.clone());
        set.insert(self.clone());
        set
    }
}

impl<E, O: Default> Default for Interval<E, O> {
    /// Returns an empty interval
    fn default() -> Self {
        Self {
            order: O::default(),
            extent: Extent::Empty,
        }
    }
}

impl<E, O: Order<E>> PartialEq for Interval<E, O> {
    /// True if the two intervals contain the same values (though they might
    /// have different bounds).
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl<E: ::core::fmt::Debug, O> ::core::fmt::Debug for Interval<E, O> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match &self.extent {
            Extent::Empty => write!(f, "O"),
            Extent::Span { lower, upper } => {
                match lower {
                    Bound::Unbounded => write!(f, "(")?,
                    Bound::Included(p) => write!(f, "[{:?}", p)?,
                    Bound::Excluded(p) => write!(f, "({:?}", p)?,
                }
                match upper {
                    Bound::Unbounded => write!(f, ",)"),
                    Bound::Included(p) => write!(f, ",{:?}]", p),
                    Bound::Excluded(p) => write!(f, ",{:?})", p),
                }
            }
        }
    }
}

impl<E: ::core::fmt::Display, O> ::core::fmt::Display for Interval<E, O> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match &self.extent {
            Extent::Empty => write!(f, "O"),
            Extent::Span { lower, upper } => {
                match lower {
                    Bound::Unbounded => write!(f, "(")?,
                    Bound::Included(p) => write!(f, "[{}", p)?,
                    Bound::Excluded(p) => write!(f, "({}", p)?,
                }
                match upper {
                    Bound::Unbounded => write!(f, ",)"),
                    Bound::Included(p) => write!(f, ",{}]", p),
                    Bound::Excluded(p) => write!(f, ",{})", p),
                }
            }
        }
    }
}
