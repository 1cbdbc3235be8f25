//! A sorted set backed by an unbalanced Binary Search Tree. Nodes live in a flat arena and refer
//! to their children and parent by index, so no node is ever owned by more than one slot and
//! walking upwards during iteration is a single lookup.
//!
//! # Examples
//!
//! ```
//! use bst_set::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Values are unique so inserting it again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::SetError;

/// Index of a node in the arena of a `Tree`.
type NodeId = usize;

/// Which child slot of a node a link lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Not an ownership link - the parent owns this node through its `left` or `right`.
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A set of unique, ordered values stored in a Binary Search Tree. The tree does not rebalance
/// itself so inserting values in sorted order degrades it to a linked list.
#[derive(Clone)]
pub struct Tree<T> {
    /// Arena of nodes. Removed nodes leave a `None` behind which is reused by later inserts.
    nodes: Vec<Option<Node<T>>>,
    /// Vacant slots in `nodes`.
    free: Vec<NodeId>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of values in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the set has no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the set.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value)
            .map_or(false, |id| self.node(id).value.cmp(value) == Ordering::Equal)
    }

    /// Adds `value` to the set. Returns whether the value was newly inserted; inserting a value
    /// that is already present leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let Some(closest) = self.find(&value) else {
            let id = self.alloc(Node::new(value, None));
            self.root = Some(id);
            self.len += 1;
            trace!(node = id, "inserted root");
            return true;
        };

        let side = match value.cmp(&self.node(closest).value) {
            Ordering::Equal => return false,
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        let id = self.alloc(Node::new(value, Some(closest)));
        let slot = self.node_mut(closest).child_mut(side);
        // `find` stops at a node only when the next step would leave the tree.
        debug_assert!(slot.is_none());
        *slot = Some(id);
        self.len += 1;
        trace!(node = id, parent = closest, ?side, len = self.len, "inserted");

        if cfg!(debug_assertions) {
            let parent = self.node(closest);
            if let Some(left) = parent.left {
                assert!(self.node(left).value < parent.value);
            }
            if let Some(right) = parent.right {
                assert!(self.node(right).value > parent.value);
            }
        }

        true
    }

    /// Removes `value` from the set. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &8]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes `value` from the set and returns the stored value, if it was present.
    ///
    /// A node with two children is replaced by its in-order successor: the leftmost node of its
    /// right subtree.
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let id = self.find(value)?;
        if self.node(id).value.cmp(value) != Ordering::Equal {
            return None;
        }

        let node = self.node(id);
        match (node.left, node.right) {
            (None, None) => {
                trace!(node = id, "removing leaf");
                self.replace(id, None);
            }
            (Some(child), None) | (None, Some(child)) => {
                trace!(node = id, child, "splicing single child");
                self.replace(id, Some(child));
            }
            (Some(left), Some(right)) => {
                let successor = match self.node(right).left {
                    // The right child is the successor. It is hoisted into place as is.
                    None => right,
                    Some(first) => {
                        let successor = self.leftmost(first);
                        // The successor has no left child so its right subtree takes its place.
                        let orphan = self.node(successor).right;
                        self.replace(successor, orphan);
                        self.link(successor, Side::Right, Some(right));
                        successor
                    }
                };
                trace!(node = id, successor, "replacing with successor");
                self.link(successor, Side::Left, Some(left));
                self.replace(id, Some(successor));
            }
        }

        self.len -= 1;
        Some(self.release(id))
    }

    /// The smallest value in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::error::SetError;
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.first(), Err(SetError::Empty));
    ///
    /// tree.extend([4, 2, 9]);
    /// assert_eq!(tree.first(), Ok(&2));
    /// ```
    pub fn first(&self) -> Result<&T, SetError> {
        let root = self.root.ok_or(SetError::Empty)?;
        Ok(&self.node(self.leftmost(root)).value)
    }

    /// The largest value in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::error::SetError;
    /// use bst_set::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.last(), Err(SetError::Empty));
    ///
    /// tree.extend([4, 2, 9]);
    /// assert_eq!(tree.last(), Ok(&9));
    /// ```
    pub fn last(&self) -> Result<&T, SetError> {
        let mut current = self.root.ok_or(SetError::Empty)?;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        Ok(&self.node(current).value)
    }

    /// An iterator visiting the values in increasing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_set::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, [1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.root.map(|root| self.leftmost(root)),
            remaining: self.len,
        }
    }

    /// The values in `from..to`. Range views aren't provided by this tree.
    pub fn sub_set(&self, _from: &T, _to: &T) -> Result<Tree<T>, SetError> {
        debug!("rejecting sub_set range view");
        Err(SetError::Unsupported("sub_set"))
    }

    /// The values in `..to`. Range views aren't provided by this tree.
    pub fn head_set(&self, _to: &T) -> Result<Tree<T>, SetError> {
        debug!("rejecting head_set range view");
        Err(SetError::Unsupported("head_set"))
    }

    /// The values in `from..`. Range views aren't provided by this tree.
    pub fn tail_set(&self, _from: &T) -> Result<Tree<T>, SetError> {
        debug!("rejecting tail_set range view");
        Err(SetError::Unsupported("tail_set"))
    }

    /// Verifies that every value in a node's left subtree is smaller than the node's value and
    /// every value in its right subtree is larger, that child and parent links agree, and that
    /// the number of reachable nodes matches [`Tree::len`].
    ///
    /// This walks the whole tree and is meant for tests.
    pub fn check_invariant(&self) -> bool
    where
        T: Ord,
    {
        match self.root {
            None => self.len == 0,
            Some(root) => {
                self.node(root).parent.is_none()
                    && self.check_subtree(root, None, None) == Some(self.len)
            }
        }
    }

    /// Returns the number of nodes in the subtree rooted at `id`, or `None` if the subtree breaks
    /// the ordering given by the exclusive bounds.
    fn check_subtree(&self, id: NodeId, lower: Option<&T>, upper: Option<&T>) -> Option<usize>
    where
        T: Ord,
    {
        let node = self.node(id);
        if lower.map_or(false, |lower| node.value <= *lower)
            || upper.map_or(false, |upper| node.value >= *upper)
        {
            return None;
        }

        let mut count = 1;
        if let Some(left) = node.left {
            if self.node(left).parent != Some(id) {
                return None;
            }
            count += self.check_subtree(left, lower, Some(&node.value))?;
        }
        if let Some(right) = node.right {
            if self.node(right).parent != Some(id) {
                return None;
            }
            count += self.check_subtree(right, Some(&node.value), upper)?;
        }
        Some(count)
    }

    /// Descends from the root towards `value`. Returns the node holding `value` or, if it is
    /// absent, the node it would be attached to. Only returns `None` for an empty tree.
    fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut current = self.root?;
        loop {
            let node = self.node(current);
            let next = match value.cmp(&node.value) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// The node following `id` in order.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right {
            return Some(self.leftmost(right));
        }

        // Climb until we arrive at a parent from its left side.
        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(p) = parent {
            if self.node(p).left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent;
        }
        None
    }

    /// Puts `child` in the `side` slot of `parent` and points `child` back at `parent`.
    fn link(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        *self.node_mut(parent).child_mut(side) = child;
        if let Some(child) = child {
            self.node_mut(child).parent = Some(parent);
        }
    }

    /// Puts `with` wherever `id` is linked from: its parent's child slot or the root.
    fn replace(&mut self, id: NodeId, with: Option<NodeId>) {
        match self.node(id).parent {
            Some(parent) => {
                let side = if self.node(parent).left == Some(id) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.link(parent, side, with);
            }
            None => {
                self.root = with;
                if let Some(with) = with {
                    self.node_mut(with).parent = None;
                }
            }
        }
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Some(node);
                id
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    /// Vacates the slot of a node that is no longer linked into the tree.
    fn release(&mut self, id: NodeId) -> T {
        let node = self.nodes[id].take().expect("Releasing a vacant slot");
        if self.len == 0 {
            self.clear();
        } else {
            self.free.push(id);
        }
        node.value
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes[id].as_ref().expect("Links only point at occupied slots")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes[id].as_mut().expect("Links only point at occupied slots")
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the values of a [`Tree`], created by [`Tree::iter`]. Borrowing the
/// tree keeps it from being modified while the iterator is alive.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
    remaining: usize,
}

/// Manual implementation of `Clone` so we don't require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let id = self.next?;
        self.next = tree.successor(id);
        self.remaining -= 1;
        Some(&tree.node(id).value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
