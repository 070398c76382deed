//! An owned, unbalanced BST holding a set of values. Each node owns its children through
//! `Option<Box<_>>` slots and every mutation rewires those slots by handing a subtree down the
//! recursion and storing whatever subtree comes back up.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&5));
//!
//! for value in [5, 3, 7, 2, 4, 6, 8] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.inorder_vals(), vec![2, 3, 4, 5, 6, 7, 8]);
//!
//! // Inserting a value twice is a no-op.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 7);
//!
//! // Deleting a node with two children promotes its in-order successor.
//! assert!(tree.delete(&7));
//! assert_eq!(tree.inorder_vals(), vec![2, 3, 4, 5, 6, 8]);
//! assert!(!tree.search(&7));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{InvariantError, Result};
use crate::util::Change;

/// An owned slot for a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single stored value and the two subtrees hanging off it.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree with set semantics. This can be used for inserting, searching for and
/// deleting values, and for walking them in ascending order.
///
/// The tree is never rebalanced, so inserting values in sorted order produces a tree whose height
/// equals its length.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Dropping the boxes recursively would use one stack frame per level of a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts `value` into the tree. Returns `true` if the value was added and `false` if an
    /// equal value was already present, in which case the tree is left untouched and `value` is
    /// dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, change) = insert(self.root.take(), value);
        self.root = root;
        if change.applied() {
            self.len += 1;
        }
        change.applied()
    }

    /// Whether the tree holds a value equal to `value`. This walks down from the root without
    /// recursing so it takes `O(height)` time and constant stack space.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
    ///
    /// assert!(tree.search(&6));
    /// assert!(!tree.search(&10));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Alias of [`Tree::search`] matching the standard collections.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search(value)
    }

    /// Deletes the value equal to `value` from the tree. Returns `true` if a value was removed and
    /// `false` if the tree never held it.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value in
    /// its right subtree) and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 7, 6, 8].into_iter().collect();
    ///
    /// assert!(tree.delete(&7));
    /// assert!(!tree.delete(&99));
    ///
    /// // 8 took 7's place with 6 still hanging to its left.
    /// assert_eq!(tree.preorder(), vec![&5, &3, &8, &6]);
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let (root, change) = delete(self.root.take(), value);
        self.root = root;
        if change.applied() {
            self.len -= 1;
            trace!(len = self.len, "deleted value");
        }
        change.applied()
    }

    /// All stored values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder_vals(), vec![1, 2, 3]);
    /// assert!(Tree::<i32>::new().inorder_vals().is_empty());
    /// ```
    pub fn inorder_vals(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &find_min(root).value)
    }

    /// The largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(|root| &find_max(root).value)
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a single node a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        height
    }

    /// Checks that the in-order walk is strictly increasing and that the number of reachable
    /// nodes matches [`Tree::len`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree: Tree<_> = (0..10).rev().collect();
    /// tree.delete(&4);
    ///
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()>
    where
        T: Ord,
    {
        let mut actual = 0;
        let mut previous: Option<&T> = None;
        for value in self.iter() {
            if previous.is_some_and(|previous| previous >= value) {
                debug!(position = actual, "in-order walk is out of order");
                return Err(InvariantError::OutOfOrder { position: actual });
            }
            previous = Some(value);
            actual += 1;
        }

        if actual != self.len {
            debug!(expected = self.len, actual, "tree length is out of sync");
            return Err(InvariantError::LengthMismatch {
                expected: self.len,
                actual,
            });
        }
        Ok(())
    }
}

/// Copies node by node, so the clone has exactly the same shape.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Node, right, left reversed is post-order, so both children are built before their
        // parent needs them.
        let mut order: Vec<&Node<T>> = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        // The most recently built subtree is on top, so a node's right copy comes off before
        // its left copy.
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in order.into_iter().rev() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
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

/// Two trees are equal when they hold the same values, whatever their shapes.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

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

/// Returns `link` with `value` inserted somewhere below it.
fn insert<T>(link: Link<T>, value: T) -> (Link<T>, Change)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (Some(Node::new_boxed(value)), Change::Applied);
    };

    let change = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, change) = insert(node.left.take(), value);
            node.left = left;
            change
        }
        Ordering::Equal => Change::Unchanged,
        Ordering::Greater => {
            let (right, change) = insert(node.right.take(), value);
            node.right = right;
            change
        }
    };
    (Some(node), change)
}

/// Returns `link` without the node holding `value`.
fn delete<T>(link: Link<T>, value: &T) -> (Link<T>, Change)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (None, Change::Unchanged);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, change) = delete(node.left.take(), value);
            node.left = left;
            (Some(node), change)
        }
        Ordering::Equal => (remove_node(node), Change::Applied),
        Ordering::Greater => {
            let (right, change) = delete(node.right.take(), value);
            node.right = right;
            (Some(node), change)
        }
    }
}

/// Releases `node` and returns whatever should take its place.
fn remove_node<T>(mut node: Box<Node<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        (None, right) => {
            trace!(promoted = right.is_some(), "replacing node with its right child");
            right
        }
        (left @ Some(_), None) => {
            trace!("replacing node with its left child");
            left
        }
        (left @ Some(_), Some(right)) => {
            // The successor is the leftmost node on the right, so it never has a left child and
            // unlinking it only ever promotes its right child.
            let (right, successor) = take_min(right);
            trace!("substituting in-order successor");
            node.value = successor.value;
            node.left = left;
            node.right = right;
            Some(node)
        }
    }
}

/// Walks left from `node` until there is no left child.
fn find_min<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    node
}

fn find_max<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    node
}

/// Unlinks the leftmost node of the subtree rooted at `node`. Returns the remaining subtree and
/// the detached node, whose children have already been re-homed.
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(node), min)
        }
    }
}
