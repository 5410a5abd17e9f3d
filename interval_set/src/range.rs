use crate::disjoint_set::DisjointIntervalSet;
use crate::errors::Result;
use crate::intervals::Interval;
use crate::order::Order;

/// Read-only queries shared by a single [`Interval`] and a
/// [`DisjointIntervalSet`], so that generic code can handle both the same
/// way.
pub trait RangeQuery<E> {
    type Order: Order<E>;

    fn order(&self) -> &Self::Order;

    fn is_empty(&self) -> bool;

    /// Whether the range is made of single values.  For an interval, this
    /// means `[A,A]`; a set is a set when all its intervals are.
    fn is_set(&self) -> bool;

    /// The values of the range, in ascending order.  Fails unless the
    /// range is empty or [`RangeQuery::is_set`].
    fn to_set(&self) -> Result<Vec<E>>;

    fn contains(&self, value: &E) -> bool;

    fn intersects_interval(
        &self,
        interval: &Interval<E, Self::Order>,
    ) -> Result<bool>;

    /// Whether the two ranges share at least one value
    fn intersects_range<R>(&self, other: &R) -> Result<bool>
    where
        R: RangeQuery<E, Order = Self::Order>,
        Self: Sized,
    {
        self.to_interval_set()
            .intersects_set(&other.to_interval_set())
    }

    fn has_infimum(&self) -> bool;
    fn infimum(&self) -> Result<&E>;
    fn is_infimum_included(&self) -> Result<bool>;

    fn has_supremum(&self) -> bool;
    fn supremum(&self) -> Result<&E>;
    fn is_supremum_included(&self) -> Result<bool>;

    /// Whether value is less than or equal to every value of the range.
    /// Always true for an empty range.
    fn is_lower_bound(&self, value: &E) -> bool;
    fn is_upper_bound(&self, value: &E) -> bool;
    fn is_strict_lower_bound(&self, value: &E) -> bool;
    fn is_strict_upper_bound(&self, value: &E) -> bool;

    /// The same values, as a set of disjoint intervals
    fn to_interval_set(&self) -> DisjointIntervalSet<E, Self::Order>;
}

/// Ranges that can be modified in place.
pub trait RangeMutate<E>: RangeQuery<E> {
    /// Add a single value
    fn add(&mut self, value: E);

    /// Remove a single value
    fn remove(&mut self, value: &E);

    /// Add all values of the interval
    fn union(&mut self, interval: Interval<E, Self::Order>) -> Result<()>;

    /// Remove all values of the interval
    fn remove_interval(
        &mut self,
        interval: &Interval<E, Self::Order>,
    ) -> Result<()>;

    fn clear(&mut self);

    /// Add all values of another range
    fn union_range<R>(&mut self, other: &R) -> Result<()>
    where
        R: RangeQuery<E, Order = Self::Order>,
        Self: Sized,
    {
        for interval in other.to_interval_set() {
            self.union(interval)?;
        }
        Ok(())
    }

    fn union_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Remove all values of another range
    fn remove_range<R>(&mut self, other: &R) -> Result<()>
    where
        R: RangeQuery<E, Order = Self::Order>,
        Self: Sized,
    {
        for interval in other.to_interval_set() {
            self.remove_interval(&interval)?;
        }
        Ok(())
    }

    fn remove_values<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
        Self: Sized,
    {
        for value in values {
            self.remove(value);
        }
    }
}
