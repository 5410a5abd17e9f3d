use crate::errors::{Error, Extremum, Result};
use crate::intervals::Interval;
use crate::iterators::{IntervalCursor, Intervals};
use crate::order::{Natural, Order};
use crate::range::{RangeMutate, RangeQuery};
use itertools::Itertools;
use log::{debug, trace, warn};

/// Index of a node in the arena
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Clone)]
pub(crate) struct Node<E, O> {
    pub(crate) value: Interval<E, O>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

/// Where a node hangs in the tree: the root, or the left or right child of
/// its parent.  Nodes have no parent pointer, so code that restructures
/// the tree carries links around instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// A set of values, stored as the minimal list of disjoint intervals.
///
/// The intervals are kept in a binary search tree ordered by position.  No
/// two intervals in the tree are connected: any operation that would make
/// two of them touch or overlap merges them into a single node.
///
/// ```
///    use interval_set::{DisjointIntervalSet, Interval};
///    let mut set = DisjointIntervalSet::new();
///    set.union(Interval::new_closed_open(0, 5)).unwrap();
///    set.union(Interval::new_open_closed(5, 10)).unwrap();
///    assert_eq!(set.to_string(), "[0,5)U(5,10]");
///    set.add(5);
///    assert_eq!(set.to_string(), "[0,10]");
///    set.remove_interval(&Interval::new_open_open(3, 7)).unwrap();
///    assert_eq!(set.to_string(), "[0,3]U[7,10]");
/// ```
///
/// The tree is not balanced, so operations are linear in the worst case.
#[derive(Clone)]
pub struct DisjointIntervalSet<E, O = Natural> {
    order: O,
    root: Option<NodeId>,

    //  Nodes are never moved, so that a NodeId remains valid until the node
    //  is released.  Released slots are recycled through `free`.
    nodes: Vec<Node<E, O>>,
    free: Vec<NodeId>,
    len: usize,
}

impl<E: Ord> DisjointIntervalSet<E> {
    /// An empty set, using the natural order of the values
    pub fn new() -> Self {
        Self::with_order(Natural)
    }
}

impl<E, O> DisjointIntervalSet<E, O> {
    /// An empty set, using the given order
    pub fn with_order(order: O) -> Self {
        Self {
            order,
            root: None,
            nodes: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Number of disjoint intervals in the set
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Remove all values. Allocated nodes are dropped.
    pub fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
        self.free.clear();
        self.len = 0;
        debug!("clear: 0 intervals");
    }

    /// Iterate over the intervals, in ascending order
    pub fn iter(&self) -> Intervals<'_, E, O> {
        Intervals::new(self)
    }

    /// Iterate over the intervals, in ascending order, with the ability to
    /// remove the last interval returned.
    pub fn cursor(&mut self) -> IntervalCursor<'_, E, O> {
        IntervalCursor::new(self)
    }

    /// The lowest interval
    pub fn first(&self) -> Option<&Interval<E, O>> {
        let mut current = self.root?;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        Some(&self.node(current).value)
    }

    /// The highest interval
    pub fn last(&self) -> Option<&Interval<E, O>> {
        let mut current = self.root?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Some(&self.node(current).value)
    }

    pub(crate) fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// All nodes, sorted by position
    fn in_order(&self) -> Vec<NodeId> {
        let mut result = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            result.push(id);
            current = self.node(id).right;
        }
        result
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<E, O> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<E, O> {
        &mut self.nodes[id.0]
    }

    /// The node attached at link
    fn child(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Left(parent) => self.node(parent).left,
            Link::Right(parent) => self.node(parent).right,
        }
    }

    fn set_child(&mut self, link: Link, child: Option<NodeId>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.node_mut(parent).left = child,
            Link::Right(parent) => self.node_mut(parent).right = child,
        }
    }

    fn alloc(&mut self, value: Interval<E, O>) -> NodeId {
        self.len += 1;
        let node = Node {
            value,
            left: None,
            right: None,
        };
        match self.free.pop() {
            Some(id) => {
                *self.node_mut(id) = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Detach the rightmost node of the subtree at link, and return it.
    /// Its left subtree takes its place.
    fn detach_rightmost(&mut self, mut link: Link) -> Option<NodeId> {
        let mut current = self.child(link)?;
        while let Some(right) = self.node(current).right {
            link = Link::Right(current);
            current = right;
        }
        let left = self.node(current).left;
        self.set_child(link, left);
        self.node_mut(current).left = None;
        Some(current)
    }

    /// Detach the leftmost node of the subtree at link, and return it.
    /// Its right subtree takes its place.
    fn detach_leftmost(&mut self, mut link: Link) -> Option<NodeId> {
        let mut current = self.child(link)?;
        while let Some(left) = self.node(current).left {
            link = Link::Left(current);
            current = left;
        }
        let right = self.node(current).right;
        self.set_child(link, right);
        self.node_mut(current).right = None;
        Some(current)
    }
}

impl<E, O: Order<E>> DisjointIntervalSet<E, O> {
    /// Whether value belongs to one of the intervals
    pub fn contains(&self, value: &E) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.value.contains(value) {
                return true;
            }
            current = if node.value.is_lower_bound(value) {
                node.left
            } else {
                node.right
            };
        }
        false
    }

    /// Whether the set shares at least one value with interval
    pub fn intersects(&self, interval: &Interval<E, O>) -> Result<bool> {
        self.check_order(interval)?;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.value.overlaps(interval) {
                return Ok(true);
            }
            current = if interval.ends_before(&node.value) {
                node.left
            } else if node.value.ends_before(interval) {
                node.right
            } else {
                //  only when interval is empty
                None
            };
        }
        Ok(false)
    }

    /// Whether the two sets share at least one value.
    /// The sorted intervals of both sets are walked side by side.
    pub fn intersects_set(&self, other: &Self) -> Result<bool> {
        if !self.order.same_order(&other.order) {
            return Err(Error::IncompatibleOrdering);
        }
        let mut mine = self.iter();
        let mut theirs = other.iter();
        let mut a = mine.next();
        let mut b = theirs.next();
        while let (Some(x), Some(y)) = (a, b) {
            if x.overlaps(y) {
                return Ok(true);
            }
            if x.ends_before(y) {
                a = mine.next();
            } else {
                b = theirs.next();
            }
        }
        Ok(false)
    }

    pub fn has_infimum(&self) -> bool {
        self.first().is_some_and(|i| i.has_infimum())
    }

    pub fn infimum(&self) -> Result<&E> {
        self.first()
            .ok_or(Error::NoSuchExtremum(Extremum::Infimum))?
            .infimum()
    }

    pub fn is_infimum_included(&self) -> Result<bool> {
        self.first()
            .ok_or(Error::NoSuchExtremum(Extremum::Infimum))?
            .is_infimum_included()
    }

    pub fn has_supremum(&self) -> bool {
        self.last().is_some_and(|i| i.has_supremum())
    }

    pub fn supremum(&self) -> Result<&E> {
        self.last()
            .ok_or(Error::NoSuchExtremum(Extremum::Supremum))?
            .supremum()
    }

    pub fn is_supremum_included(&self) -> Result<bool> {
        self.last()
            .ok_or(Error::NoSuchExtremum(Extremum::Supremum))?
            .is_supremum_included()
    }

    /// Whether value is less than or equal to every value in the set.
    /// True for an empty set.
    pub fn is_lower_bound(&self, value: &E) -> bool {
        self.first().map_or(true, |i| i.is_lower_bound(value))
    }

    pub fn is_upper_bound(&self, value: &E) -> bool {
        self.last().map_or(true, |i| i.is_upper_bound(value))
    }

    pub fn is_strict_lower_bound(&self, value: &E) -> bool {
        self.first().map_or(true, |i| i.is_strict_lower_bound(value))
    }

    pub fn is_strict_upper_bound(&self, value: &E) -> bool {
        self.last().map_or(true, |i| i.is_strict_upper_bound(value))
    }

    /// True if every interval in the set is a single value (which includes
    /// the empty set).
    pub fn is_set(&self) -> bool {
        self.iter().all(|i| i.is_set())
    }

    /// Remove all values of interval from the set.
    ///
    /// Intervals fully covered are unlinked from the tree, an interval that
    /// overlaps one end of the removed interval is truncated, and an
    /// interval strictly containing it is split in two.
    pub fn remove_interval(&mut self, interval: &Interval<E, O>) -> Result<()>
    where
        E: Clone,
    {
        self.check_order(interval)?;
        if interval.is_empty() {
            return Ok(());
        }

        //  Positions in the tree that remain to be examined
        let mut pending = vec![Link::Root];
        while let Some(link) = pending.pop() {
            let Some(id) = self.child(link) else {
                continue;
            };
            let value = &self.node(id).value;
            if interval.ends_before(value) {
                pending.push(Link::Left(id));
                continue;
            }
            if value.ends_before(interval) {
                pending.push(Link::Right(id));
                continue;
            }

            let (below, above) = value.split_around(interval);
            match (below.is_empty(), above.is_empty()) {
                (true, true) => {
                    trace!("remove_interval: unlink node {:?}", id);
                    self.unlink(link, id);

                    //  another node now sits at the same position
                    pending.push(link);
                }
                (false, true) => {
                    trace!("remove_interval: truncate upper part of {:?}", id);
                    self.node_mut(id).value = below;
                    pending.push(Link::Right(id));
                }
                (true, false) => {
                    trace!("remove_interval: truncate lower part of {:?}", id);
                    self.node_mut(id).value = above;
                    pending.push(Link::Left(id));
                }
                (false, false) => {
                    //  interval was strictly inside this node, nothing else
                    //  can intersect it.
                    self.split(id, below, above);
                }
            }
        }
        debug!("remove_interval: {} intervals left", self.len);
        Ok(())
    }

    fn check_order(&self, interval: &Interval<E, O>) -> Result<()> {
        if self.order.same_order(interval.order()) {
            Ok(())
        } else {
            Err(Error::IncompatibleOrdering)
        }
    }

    /// Replace the interval of a node with two disjoint intervals.  The
    /// upper one becomes the right child, and adopts the former right
    /// subtree.
    fn split(&mut self, id: NodeId, below: Interval<E, O>, above: Interval<E, O>) {
        trace!("split node {:?}", id);
        let right = self.node(id).right;
        let new = self.alloc(above);
        self.node_mut(new).right = right;
        let node = self.node_mut(id);
        node.value = below;
        node.right = Some(new);
    }

    /// Take a node out of the tree, given the link it hangs from.
    /// When it has two children, its successor is promoted to its place.
    /// Returns the node now at link, and the removed interval.
    pub(crate) fn unlink(
        &mut self,
        link: Link,
        id: NodeId,
    ) -> (Option<NodeId>, Interval<E, O>) {
        let Node { left, right, .. } = *self.node(id);
        let replacement = match (left, right) {
            (None, r) => r,
            (l, None) => l,
            (Some(l), Some(r)) => {
                let successor = self.detach_leftmost(Link::Right(id));
                if let Some(s) = successor {
                    //  when the successor was the right child itself, the
                    //  detach already moved its right subtree in place
                    let right = self.node(id).right;
                    let node = self.node_mut(s);
                    node.left = Some(l);
                    node.right = right;
                }
                successor.or(Some(r))
            }
        };
        self.set_child(link, replacement);
        (replacement, self.release(id))
    }

    /// Return the slot of a node to the free list
    fn release(&mut self, id: NodeId) -> Interval<E, O> {
        self.len -= 1;
        self.free.push(id);
        let order = self.order.clone();
        let node = self.node_mut(id);
        node.left = None;
        node.right = None;
        std::mem::replace(&mut node.value, Interval::empty_with(order))
    }
}

impl<E: Clone, O: Order<E>> DisjointIntervalSet<E, O> {
    /// Add all values of interval to the set.
    ///
    /// The first node on the search path connected to interval absorbs it,
    /// then absorbs its neighbours as long as they are connected too.
    pub fn union(&mut self, interval: Interval<E, O>) -> Result<()> {
        self.check_order(&interval)?;
        self.insert(interval);
        debug!("union: {} intervals", self.len);
        Ok(())
    }

    /// Add a single value to the set
    pub fn add(&mut self, value: E) {
        let single = Interval::single_with(self.order.clone(), value);
        self.insert(single);
        debug!("add: {} intervals", self.len);
    }

    /// Remove a single value from the set.
    /// When the value is a bound of an interval, that bound is excluded,
    /// otherwise the interval is split in two around the value.
    pub fn remove(&mut self, value: &E) {
        let mut link = Link::Root;
        while let Some(id) = self.child(link) {
            let node = self.node(id);
            if node.value.contains(value) {
                let (below, above) = node.value.split_at(value);
                match (below.is_empty(), above.is_empty()) {
                    (true, true) => {
                        trace!("remove: unlink node {:?}", id);
                        self.unlink(link, id);
                    }
                    (false, true) => self.node_mut(id).value = below,
                    (true, false) => self.node_mut(id).value = above,
                    (false, false) => self.split(id, below, above),
                }
                break;
            }
            link = if node.value.is_lower_bound(value) {
                Link::Left(id)
            } else {
                Link::Right(id)
            };
        }
        debug!("remove: {} intervals", self.len);
    }

    /// The values, when the set only contains single values
    pub fn to_set(&self) -> Result<Vec<E>> {
        if !self.is_set() {
            return Err(Error::UnsupportedOperation(
                "set contains intervals with more than one value".into(),
            ));
        }
        self.iter().map(Interval::to_set).flatten_ok().collect()
    }

    /// Union of an interval known to use the same order
    pub(crate) fn insert(&mut self, interval: Interval<E, O>) {
        if interval.is_empty() {
            return;
        }
        let mut link = Link::Root;
        loop {
            let Some(id) = self.child(link) else {
                trace!("insert: new leaf");
                let new = self.alloc(interval);
                self.set_child(link, Some(new));
                return;
            };
            let value = &self.node(id).value;
            if value.contiguous(&interval) {
                let merged = value.hull(&interval);
                self.node_mut(id).value = merged;
                self.absorb_neighbours(id);
                return;
            }
            link = if interval.ends_before(value) {
                Link::Left(id)
            } else {
                Link::Right(id)
            };
        }
    }

    /// After a node has grown, merge into it the nearest nodes it is now
    /// connected with.  Ancestors never need merging: the node was the
    /// first connected one on the search path.
    fn absorb_neighbours(&mut self, id: NodeId) {
        loop {
            //  the predecessor is the rightmost node of the left subtree
            let Some(pred) = self.peek_rightmost(self.node(id).left) else {
                break;
            };
            if !self.node(pred).value.contiguous(&self.node(id).value) {
                break;
            }
            trace!("absorb predecessor {:?} into {:?}", pred, id);
            self.detach_rightmost(Link::Left(id));
            let absorbed = self.release(pred);
            let merged = self.node(id).value.hull(&absorbed);
            self.node_mut(id).value = merged;
        }
        loop {
            let Some(succ) = self.peek_leftmost(self.node(id).right) else {
                break;
            };
            if !self.node(succ).value.contiguous(&self.node(id).value) {
                break;
            }
            trace!("absorb successor {:?} into {:?}", succ, id);
            self.detach_leftmost(Link::Right(id));
            let absorbed = self.release(succ);
            let merged = self.node(id).value.hull(&absorbed);
            self.node_mut(id).value = merged;
        }
    }

    fn peek_rightmost(&self, subtree: Option<NodeId>) -> Option<NodeId> {
        let mut current = subtree?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Some(current)
    }

    fn peek_leftmost(&self, subtree: Option<NodeId>) -> Option<NodeId> {
        let mut current = subtree?;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        Some(current)
    }
}

impl<E: Ord> Default for DisjointIntervalSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone, O: Order<E>> RangeQuery<E> for DisjointIntervalSet<E, O> {
    type Order = O;

    fn order(&self) -> &O {
        &self.order
    }
    fn is_empty(&self) -> bool {
        DisjointIntervalSet::is_empty(self)
    }
    fn is_set(&self) -> bool {
        DisjointIntervalSet::is_set(self)
    }
    fn to_set(&self) -> Result<Vec<E>> {
        DisjointIntervalSet::to_set(self)
    }
    fn contains(&self, value: &E) -> bool {
        DisjointIntervalSet::contains(self, value)
    }
    fn intersects_interval(&self, interval: &Interval<E, O>) -> Result<bool> {
        self.intersects(interval)
    }
    fn has_infimum(&self) -> bool {
        DisjointIntervalSet::has_infimum(self)
    }
    fn infimum(&self) -> Result<&E> {
        DisjointIntervalSet::infimum(self)
    }
    fn is_infimum_included(&self) -> Result<bool> {
        DisjointIntervalSet::is_infimum_included(self)
    }
    fn has_supremum(&self) -> bool {
        DisjointIntervalSet::has_supremum(self)
    }
    fn supremum(&self) -> Result<&E> {
        DisjointIntervalSet::supremum(self)
    }
    fn is_supremum_included(&self) -> Result<bool> {
        DisjointIntervalSet::is_supremum_included(self)
    }
    fn is_lower_bound(&self, value: &E) -> bool {
        DisjointIntervalSet::is_lower_bound(self, value)
    }
    fn is_upper_bound(&self, value: &E) -> bool {
        DisjointIntervalSet::is_upper_bound(self, value)
    }
    fn is_strict_lower_bound(&self, value: &E) -> bool {
        DisjointIntervalSet::is_strict_lower_bound(self, value)
    }
    fn is_strict_upper_bound(&self, value: &E) -> bool {
        DisjointIntervalSet::is_strict_upper_bound(self, value)
    }
    fn to_interval_set(&self) -> DisjointIntervalSet<E, O> {
        self.clone()
    }
}

impl<E: Clone, O: Order<E>> RangeMutate<E> for DisjointIntervalSet<E, O> {
    fn add(&mut self, value: E) {
        DisjointIntervalSet::add(self, value)
    }
    fn remove(&mut self, value: &E) {
        DisjointIntervalSet::remove(self, value)
    }
    fn union(&mut self, interval: Interval<E, O>) -> Result<()> {
        DisjointIntervalSet::union(self, interval)
    }
    fn remove_interval(&mut self, interval: &Interval<E, O>) -> Result<()> {
        DisjointIntervalSet::remove_interval(self, interval)
    }
    fn clear(&mut self) {
        DisjointIntervalSet::clear(self)
    }
}

impl<E, O: Order<E>> PartialEq for DisjointIntervalSet<E, O> {
    /// Two sets are equal when they hold the same values.  Since intervals
    /// are maximal, this is the same as holding equivalent intervals.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<E: Clone, O: Order<E> + Default> FromIterator<Interval<E, O>>
    for DisjointIntervalSet<E, O>
{
    /// Intervals using another instance of the order are skipped, see
    /// [`Extend`].
    fn from_iter<I: IntoIterator<Item = Interval<E, O>>>(iter: I) -> Self {
        let mut set = Self::with_order(O::default());
        set.extend(iter);
        set
    }
}

impl<E: Clone, O: Order<E>> Extend<Interval<E, O>> for DisjointIntervalSet<E, O> {
    /// Intervals that do not use the order of the set cannot be merged,
    /// and are skipped with a warning.  Use [`DisjointIntervalSet::union`]
    /// to get an error instead.
    fn extend<I: IntoIterator<Item = Interval<E, O>>>(&mut self, iter: I) {
        for interval in iter {
            if self.check_order(&interval).is_err() {
                warn!("extend: skipped interval with another order");
                continue;
            }
            self.insert(interval);
        }
        debug!("extend: {} intervals", self.len);
    }
}

impl<E, O: Order<E>> IntoIterator for DisjointIntervalSet<E, O> {
    type Item = Interval<E, O>;
    type IntoIter = std::vec::IntoIter<Interval<E, O>>;

    /// The intervals in ascending order
    fn into_iter(mut self) -> Self::IntoIter {
        let ids = self.in_order();
        let mut result = Vec::with_capacity(ids.len());
        for id in ids {
            let empty = Interval::empty_with(self.order.clone());
            result.push(std::mem::replace(&mut self.node_mut(id).value, empty));
        }
        result.into_iter()
    }
}

impl<'a, E, O> IntoIterator for &'a DisjointIntervalSet<E, O> {
    type Item = &'a Interval<E, O>;
    type IntoIter = Intervals<'a, E, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: ::core::fmt::Debug, O> ::core::fmt::Debug for DisjointIntervalSet<E, O> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            write!(f, "O")
        } else {
            write!(f, "{:?}", self.iter().format("U"))
        }
    }
}

impl<E: ::core::fmt::Display, O> ::core::fmt::Display for DisjointIntervalSet<E, O> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            write!(f, "O")
        } else {
            write!(f, "{}", self.iter().format("U"))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bounds::Bound;
    use crate::order::{Discrete, OrderFn};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::BTreeSet;

    fn set_of(intervals: &[Interval<i32>]) -> DisjointIntervalSet<i32> {
        let mut set = DisjointIntervalSet::new();
        for i in intervals {
            set.union(i.clone()).unwrap();
        }
        set
    }

    /// No two intervals are connected, and they are sorted
    fn assert_disjoint<E: Clone + ::core::fmt::Debug, O: Order<E>>(
        set: &DisjointIntervalSet<E, O>,
    ) {
        let intervals: Vec<_> = set.iter().collect();
        assert_eq!(intervals.len(), set.len(), "{set:?}");
        for (a, b) in intervals.iter().tuple_windows() {
            assert!(a.ends_before(b), "{a:?} before {b:?} in {set:?}");
            assert!(!a.contiguous(b), "{a:?} connected to {b:?} in {set:?}");
        }
        for i in &intervals {
            assert!(!i.is_empty());
        }
    }

    #[test]
    fn test_union() {
        //  [0,10] contains its bounds
        let set = set_of(&[Interval::new_closed_closed(0, 10)]);
        assert_eq!(set.to_string(), "[0,10]");
        assert!(set.contains(&5));
        assert!(set.contains(&10));
        assert!(set.contains(&0));
        assert!(!set.contains(&11));
        assert!(!set.contains(&-1));

        let mut set = set_of(&[
            Interval::new_closed_closed(20, 30),
            Interval::new_closed_closed(0, 5),
            Interval::new_closed_closed(40, 50),
            Interval::new_closed_closed(10, 15),
        ]);
        assert_disjoint(&set);
        assert_eq!(set.len(), 4);
        assert_eq!(set.to_string(), "[0,5]U[10,15]U[20,30]U[40,50]");

        //  bridging merges all neighbours
        set.union(Interval::new_closed_open(3, 40)).unwrap();
        assert_disjoint(&set);
        assert_eq!(set.to_string(), "[0,50]");
        assert_eq!(set.len(), 1);

        set.union(Interval::new_unbounded_open(-5)).unwrap();
        assert_eq!(set.to_string(), "(,-5)U[0,50]");
        set.union(Interval::new_closed_closed(-5, 0)).unwrap();
        assert_eq!(set.to_string(), "(,50]");
        set.union(Interval::new_open_unbounded(50)).unwrap();
        assert_eq!(set.to_string(), "(,)");
        assert!(set.contains(&i32::MIN));

        set.union(Interval::empty()).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_union_merges_gap() {
        let mut set = set_of(&[
            Interval::new_closed_open(0, 5),
            Interval::new_open_closed(5, 10),
        ]);
        assert_eq!(set.len(), 2);
        assert!(!set.contains(&5));
        set.add(5);
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_string(), "[0,10]");

        let mut set = set_of(&[
            Interval::new_closed_open(0, 5),
            Interval::new_open_closed(5, 10),
        ]);
        set.union(Interval::new_single(5)).unwrap();
        assert_eq!(set.to_string(), "[0,10]");
    }

    #[test]
    fn test_union_idempotent() {
        let intervals = [
            Interval::new_closed_open(3, 8),
            Interval::new_open_open(10, 12),
            Interval::new_single(9),
        ];
        let mut once = DisjointIntervalSet::new();
        let mut twice = DisjointIntervalSet::new();
        for i in &intervals {
            once.union(i.clone()).unwrap();
            twice.union(i.clone()).unwrap();
            twice.union(i.clone()).unwrap();
        }
        assert_eq!(once, twice);
        assert_eq!(once.to_string(), "[3,8)U[9,9]U(10,12)");
    }

    #[test]
    fn test_add_discrete() {
        //  with integers, adjacent values merge
        let mut set = DisjointIntervalSet::with_order(Discrete);
        for v in [1, 3, 5, 2, 4] {
            set.add(v);
        }
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_string(), "[1,5]");

        let mut dense = DisjointIntervalSet::new();
        for v in [1, 3, 5, 2, 4] {
            dense.add(v);
        }
        assert_eq!(dense.len(), 5);
        assert!(dense.is_set());
        assert_eq!(dense.to_set(), Ok(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_remove_value() {
        let mut set = set_of(&[Interval::new_closed_closed(0, 10)]);
        set.remove(&0);
        assert_eq!(set.to_string(), "(0,10]");
        set.remove(&10);
        assert_eq!(set.to_string(), "(0,10)");
        set.remove(&5);
        assert_eq!(set.to_string(), "(0,5)U(5,10)");
        assert_eq!(set.len(), 2);
        set.remove(&20);
        set.remove(&5);
        assert_eq!(set.len(), 2);
        assert_disjoint(&set);

        let mut set = set_of(&[Interval::new_single(3)]);
        set.remove(&3);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.to_string(), "O");
    }

    #[test]
    fn test_add_remove_inverse() {
        let mut set = set_of(&[
            Interval::new_closed_closed(0, 3),
            Interval::new_closed_closed(7, 10),
        ]);
        let before = set.clone();
        set.add(5);
        assert!(set.contains(&5));
        set.remove(&5);
        assert!(!set.contains(&5));
        assert_eq!(set, before);
    }

    #[test]
    fn test_remove_interval() {
        let mut set = set_of(&[Interval::new_closed_closed(0, 10)]);
        set.remove_interval(&Interval::new_open_open(3, 7)).unwrap();
        assert_eq!(set.to_string(), "[0,3]U[7,10]");
        assert_eq!(set.len(), 2);

        let mut set = set_of(&[
            Interval::new_closed_closed(0, 5),
            Interval::new_closed_closed(10, 15),
            Interval::new_closed_closed(20, 25),
            Interval::new_closed_closed(30, 35),
        ]);
        set.remove_interval(&Interval::new_closed_open(3, 30)).unwrap();
        assert_disjoint(&set);
        assert_eq!(set.to_string(), "[0,3)U[30,35]");

        set.remove_interval(&Interval::new_unbounded_closed(1)).unwrap();
        assert_eq!(set.to_string(), "(1,3)U[30,35]");

        set.remove_interval(&Interval::new_open_unbounded(32)).unwrap();
        assert_eq!(set.to_string(), "(1,3)U[30,32]");

        set.remove_interval(&Interval::new_closed_closed(100, 200)).unwrap();
        set.remove_interval(&Interval::empty()).unwrap();
        assert_eq!(set.to_string(), "(1,3)U[30,32]");

        set.remove_interval(&Interval::doubly_unbounded()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_union_round_trip() {
        let mut set = set_of(&[
            Interval::new_closed_closed(0, 10),
            Interval::new_closed_closed(20, 30),
        ]);
        let before = set.clone();
        let removed = Interval::new_closed_closed(2, 5);
        set.remove_interval(&removed).unwrap();
        for v in 2..=5 {
            assert!(!set.contains(&v));
        }
        set.union(removed).unwrap();
        assert_eq!(set, before);
    }

    #[test]
    fn test_intersects() {
        let set = set_of(&[Interval::new_closed_closed(0, 5)]);
        assert!(set.intersects(&Interval::new_closed_closed(5, 10)).unwrap());
        assert!(!set.intersects(&Interval::new_open_closed(5, 10)).unwrap());
        assert!(!set.intersects(&Interval::empty()).unwrap());

        let set = set_of(&[
            Interval::new_closed_closed(0, 5),
            Interval::new_closed_closed(10, 15),
            Interval::new_closed_closed(20, 25),
        ]);
        assert!(set.intersects(&Interval::new_open_open(15, 30)).unwrap());
        assert!(!set.intersects(&Interval::new_open_open(15, 20)).unwrap());
        assert!(set.intersects(&Interval::new_unbounded_open(1)).unwrap());
        assert!(!set.intersects(&Interval::new_unbounded_open(0)).unwrap());
    }

    #[test]
    fn test_intersects_set() {
        let left = set_of(&[Interval::new_closed_closed(0, 5)]);
        let right = set_of(&[Interval::new_closed_closed(5, 10)]);
        assert_eq!(left.intersects_set(&right), Ok(true));
        assert_eq!(right.intersects_set(&left), Ok(true));

        let right = set_of(&[
            Interval::new_open_open(5, 10),
            Interval::new_closed_closed(20, 30),
            Interval::new_unbounded_open(0),
        ]);
        assert_eq!(left.intersects_set(&right), Ok(false));

        let left = set_of(&[
            Interval::new_closed_closed(0, 5),
            Interval::new_closed_closed(12, 13),
            Interval::new_closed_closed(25, 26),
        ]);
        assert_eq!(left.intersects_set(&right), Ok(true));
        assert_eq!(
            left.intersects_set(&DisjointIntervalSet::new()),
            Ok(false)
        );
    }

    #[test]
    fn test_extrema() {
        let set = set_of(&[
            Interval::new_open_closed(0, 5),
            Interval::new_closed_open(10, 15),
        ]);
        assert!(set.has_infimum());
        assert_eq!(set.infimum(), Ok(&0));
        assert_eq!(set.is_infimum_included(), Ok(false));
        assert_eq!(set.supremum(), Ok(&15));
        assert_eq!(set.is_supremum_included(), Ok(false));
        assert!(set.is_lower_bound(&0));
        assert!(set.is_strict_lower_bound(&0));
        assert!(!set.is_lower_bound(&1));
        assert!(set.is_upper_bound(&15));
        assert!(set.is_strict_upper_bound(&15));
        assert!(!set.is_upper_bound(&14));

        let set = set_of(&[Interval::new_unbounded_closed(3)]);
        assert!(!set.has_infimum());
        assert_eq!(set.infimum(), Err(Error::NoSuchExtremum(Extremum::Infimum)));

        let empty = DisjointIntervalSet::<i32>::new();
        assert_eq!(
            empty.supremum(),
            Err(Error::NoSuchExtremum(Extremum::Supremum))
        );
        assert!(empty.is_lower_bound(&0));
        assert!(empty.is_strict_upper_bound(&0));
    }

    #[test]
    fn test_to_set() {
        let set = set_of(&[Interval::new_single(4), Interval::new_single(1)]);
        assert!(set.is_set());
        assert_eq!(set.to_set(), Ok(vec![1, 4]));

        let set = set_of(&[Interval::new_closed_closed(1, 2)]);
        assert!(!set.is_set());
        assert!(matches!(set.to_set(), Err(Error::UnsupportedOperation(_))));

        let empty = DisjointIntervalSet::<i32>::new();
        assert!(empty.is_set());
        assert_eq!(empty.to_set(), Ok(vec![]));
    }

    #[test]
    fn test_clear() {
        let mut set = set_of(&[
            Interval::new_closed_closed(0, 5),
            Interval::new_closed_closed(10, 15),
        ]);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(&3));
        set.add(3);
        assert_eq!(set.to_string(), "[3,3]");
    }

    #[test]
    fn test_incompatible_orders() {
        let rev = OrderFn::new(|a: &i32, b: &i32| b.cmp(a));
        let other = OrderFn::new(|a: &i32, b: &i32| b.cmp(a));
        let mut set = DisjointIntervalSet::with_order(rev.clone());
        set.union(Interval::with_bounds(
            rev.clone(),
            Bound::Included(10),
            Bound::Included(5),
        ))
        .unwrap();
        set.add(1);
        assert_eq!(set.to_string(), "[10,5]U[1,1]");

        let foreign =
            Interval::with_bounds(other, Bound::Included(10), Bound::Included(0));
        assert_eq!(set.union(foreign.clone()), Err(Error::IncompatibleOrdering));
        assert_eq!(
            set.remove_interval(&foreign),
            Err(Error::IncompatibleOrdering)
        );
        assert_eq!(set.intersects(&foreign), Err(Error::IncompatibleOrdering));
        assert_eq!(set.len(), 2);

        let other_set = DisjointIntervalSet::with_order(OrderFn::new(
            |a: &i32, b: &i32| a.cmp(b),
        ));
        assert_eq!(
            set.intersects_set(&other_set),
            Err(Error::IncompatibleOrdering)
        );
    }

    #[test]
    fn test_extend_other_order() {
        let rev = OrderFn::new(|a: &i32, b: &i32| b.cmp(a));
        let other = OrderFn::new(|a: &i32, b: &i32| b.cmp(a));
        let mut set = DisjointIntervalSet::with_order(rev.clone());
        set.extend([
            Interval::with_bounds(other, Bound::Included(10), Bound::Included(0)),
            Interval::with_bounds(rev, Bound::Included(20), Bound::Included(15)),
        ]);
        assert_eq!(set.len(), 1);
        assert!(!set.contains(&5));
        assert!(set.contains(&17));
        assert_eq!(set.to_string(), "[20,15]");
    }

    #[test]
    fn test_to_set_discrete() {
        let mut set = DisjointIntervalSet::with_order(Discrete);
        set.add(1);
        set.add(2);
        set.remove(&2);
        assert_eq!(set.to_string(), "[1,2)");
        assert!(set.is_set());
        assert_eq!(set.to_set(), Ok(vec![1]));

        set.union(Interval::with_bounds(
            Discrete,
            Bound::Excluded(4),
            Bound::Excluded(6),
        ))
        .unwrap();
        assert!(set.is_set());
        assert_eq!(set.to_set(), Ok(vec![1, 5]));

        set.add(8);
        assert!(set.is_set());
        set.add(9);
        assert!(!set.is_set());
        assert!(matches!(set.to_set(), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn test_collect() {
        let set: DisjointIntervalSet<i32> = [
            Interval::new_closed_closed(5, 6),
            Interval::new_closed_closed(0, 1),
            Interval::new_closed_closed(1, 5),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.to_string(), "[0,6]");

        let intervals: Vec<_> = set_of(&[
            Interval::new_closed_closed(8, 9),
            Interval::new_closed_closed(0, 1),
        ])
        .into_iter()
        .collect();
        assert_eq!(
            intervals,
            vec![
                Interval::new_closed_closed(0, 1),
                Interval::new_closed_closed(8, 9)
            ]
        );
    }

    #[test]
    fn test_debug() {
        let set = set_of(&[
            Interval::new_closed_closed(0, 1),
            Interval::new_open_unbounded(3),
        ]);
        assert_eq!(format!("{set:?}"), "[0,1]U(3,)");
        assert_eq!(format!("{:?}", DisjointIntervalSet::<i32>::new()), "O");
    }

    /// A random interval within a small domain, so that operations often
    /// overlap
    fn random_interval(rng: &mut StdRng) -> Interval<i64, Discrete> {
        let lower = rng.gen_range(0..40);
        let upper = lower + rng.gen_range(0..8);
        let lower = if rng.gen_bool(0.5) {
            Bound::Included(lower)
        } else {
            Bound::Excluded(lower)
        };
        let upper = if rng.gen_bool(0.5) {
            Bound::Included(upper)
        } else {
            Bound::Excluded(upper)
        };
        Interval::with_bounds(Discrete, lower, upper)
    }

    #[test]
    fn test_random_against_model() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let mut set = DisjointIntervalSet::with_order(Discrete);
            let mut model = BTreeSet::new();

            for _ in 0..60 {
                match rng.gen_range(0..4) {
                    0 => {
                        let intv = random_interval(&mut rng);
                        model.extend((-1..50).filter(|v| intv.contains(v)));
                        set.union(intv).unwrap();
                    }
                    1 => {
                        let intv = random_interval(&mut rng);
                        for v in (-1..50).filter(|v| intv.contains(v)) {
                            model.remove(&v);
                        }
                        set.remove_interval(&intv).unwrap();
                    }
                    2 => {
                        let v = rng.gen_range(0..48);
                        model.insert(v);
                        set.add(v);
                    }
                    _ => {
                        let v = rng.gen_range(0..48);
                        model.remove(&v);
                        set.remove(&v);
                    }
                }

                assert_disjoint(&set);
                for v in -1..50 {
                    assert_eq!(
                        set.contains(&v),
                        model.contains(&v),
                        "value {v} in {set:?}"
                    );
                    assert_eq!(
                        set.contains(&v),
                        set.iter().any(|i| i.contains(&v)),
                        "value {v} in {set:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_random_dense() {
        //  with a dense order, touching intervals must still merge
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut set = DisjointIntervalSet::new();
            for _ in 0..30 {
                let lower = rng.gen_range(0..30);
                let upper = lower + rng.gen_range(0..6);
                let intv = match rng.gen_range(0..4) {
                    0 => Interval::new_closed_closed(lower, upper),
                    1 => Interval::new_closed_open(lower, upper),
                    2 => Interval::new_open_closed(lower, upper),
                    _ => Interval::new_open_open(lower, upper),
                };
                if rng.gen_bool(0.7) {
                    set.union(intv).unwrap();
                } else {
                    set.remove_interval(&intv).unwrap();
                }
                assert_disjoint(&set);
            }
        }
    }
}
