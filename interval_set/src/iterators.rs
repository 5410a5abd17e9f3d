use crate::disjoint_set::{DisjointIntervalSet, Link, NodeId};
use crate::errors::{Error, Result};
use crate::intervals::Interval;
use crate::order::Order;
use log::trace;

/// Iterates over the intervals of a set, in ascending order.
///
/// The stack holds the ancestors of the next node whose left subtree has
/// not been fully returned yet.
pub struct Intervals<'a, E, O> {
    set: &'a DisjointIntervalSet<E, O>,
    stack: Vec<NodeId>,
}

impl<'a, E, O> Intervals<'a, E, O> {
    pub(crate) fn new(set: &'a DisjointIntervalSet<E, O>) -> Self {
        let mut iter = Self {
            set,
            stack: Vec::new(),
        };
        iter.push_left_spine(set.root());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.set.node(id).left;
        }
    }
}

impl<'a, E, O> Iterator for Intervals<'a, E, O> {
    type Item = &'a Interval<E, O>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let set = self.set;
        let node = set.node(id);
        self.push_left_spine(node.right);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            usize::from(!self.stack.is_empty()),
            Some(self.set.len()),
        )
    }
}

/// The last node returned by a cursor
struct Yielded {
    node: NodeId,
    link: Link,

    //  size of the stack just after the node was popped
    depth: usize,
}

/// Iterates over the intervals of a set, in ascending order, and lets the
/// caller remove the interval that was just returned.
///
/// ```
///    use interval_set::{DisjointIntervalSet, Interval};
///    let mut set = DisjointIntervalSet::new();
///    for v in [1, 3, 5] {
///        set.add(v);
///    }
///    let mut cursor = set.cursor();
///    while let Some(interval) = cursor.next() {
///        if interval.contains(&3) {
///            cursor.remove().unwrap();
///        }
///    }
///    assert_eq!(set.to_string(), "[1,1]U[5,5]");
/// ```
pub struct IntervalCursor<'a, E, O> {
    set: &'a mut DisjointIntervalSet<E, O>,

    //  Each node is stored with the link it hangs from, so that it can be
    //  unlinked without a parent pointer.
    stack: Vec<(NodeId, Link)>,
    last: Option<Yielded>,
}

impl<'a, E, O> IntervalCursor<'a, E, O> {
    pub(crate) fn new(set: &'a mut DisjointIntervalSet<E, O>) -> Self {
        let root = set.root();
        let mut cursor = Self {
            set,
            stack: Vec::new(),
            last: None,
        };
        cursor.push_left_spine(root, Link::Root);
        cursor
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>, mut link: Link) {
        while let Some(id) = current {
            self.stack.push((id, link));
            link = Link::Left(id);
            current = self.set.node(id).left;
        }
    }

    /// Move to the next interval, and return a reference to it
    pub fn next_ref(&mut self) -> Option<&Interval<E, O>> {
        let Some((id, link)) = self.stack.pop() else {
            self.last = None;
            return None;
        };
        let depth = self.stack.len();
        let right = self.set.node(id).right;
        self.push_left_spine(right, Link::Right(id));
        self.last = Some(Yielded {
            node: id,
            link,
            depth,
        });
        Some(&self.set.node(id).value)
    }
}

impl<E, O: Order<E>> IntervalCursor<'_, E, O> {
    /// Remove from the set the interval returned by the last call to
    /// `next`, and return it.  Iteration then resumes with the interval
    /// that followed it.
    pub fn remove(&mut self) -> Result<Interval<E, O>> {
        let Some(Yielded { node, link, depth }) = self.last.take() else {
            return Err(Error::IllegalState(
                "remove() must follow a call to next()",
            ));
        };

        //  forget the right subtree, it will move
        self.stack.truncate(depth);
        let had_left = self.set.node(node).left.is_some();
        let had_right = self.set.node(node).right.is_some();
        let (replacement, removed) = self.set.unlink(link, node);
        trace!("cursor: removed node {:?}", node);

        if had_right {
            if had_left {
                //  The successor took the place of the node.  Its own left
                //  subtree is the node's, already returned.
                if let Some(successor) = replacement {
                    self.stack.push((successor, link));
                }
            } else {
                self.push_left_spine(replacement, link);
            }
        }
        Ok(removed)
    }
}

impl<E: Clone, O: Clone> Iterator for IntervalCursor<'_, E, O> {
    type Item = Interval<E, O>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_ref().cloned()
    }
}
