//! Walks over a [`Tree`]. The in-order walk is exposed as iterators (ascending order) while the
//! shape-revealing walks (pre-order, post-order and level-order) collect references into vectors.
//!
//! None of the walks recurse: each keeps its own stack or frontier so that a degenerate tree of any
//! height can be visited.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! //       5
//! //     /   \
//! //    3     7
//! //   / \   / \
//! //  2   4 6   8
//! let tree: Tree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7, 8]);
//! assert_eq!(tree.preorder(), vec![&5, &3, &2, &4, &7, &6, &8]);
//! assert_eq!(tree.postorder(), vec![&2, &4, &3, &6, &8, &7, &5]);
//! assert_eq!(
//!     tree.level_order(),
//!     vec![vec![&5], vec![&3, &7], vec![&2, &4, &6, &8]]
//! );
//! ```

use std::iter::FusedIterator;

use crate::tree::{Link, Node, Tree};

impl<T> Tree<T> {
    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Values in pre-order: each node before its left subtree, then its right subtree. Inserting
    /// this sequence into an empty tree rebuilds the same shape.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            // Right goes on first so left comes off first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        values
    }

    /// Values in post-order: both subtrees, left then right, before the node itself.
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        // Node, right, left is the mirror image of post-order.
        while let Some(node) = stack.pop() {
            values.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        values.reverse();
        values
    }

    /// Values grouped by depth, left to right within each level. The root is alone in the first
    /// group.
    pub fn level_order(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut frontier: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while !frontier.is_empty() {
            levels.push(frontier.iter().map(|&node| &node.value).collect());
            frontier = frontier
                .iter()
                .flat_map(|&node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        levels
    }
}

/// A borrowing iterator over a [`Tree`]'s values in ascending order. Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value hasn't been yielded yet but whose left subtree is already on the stack.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Manual implementation of `Clone` so `T` doesn't need to be `Clone` to clone the iterator.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over a [`Tree`]'s values in ascending order. Created by
/// [`Tree::into_iter`][IntoIterator::into_iter].
pub struct IntoIter<T> {
    /// Nodes already detached from their left child, waiting to give up their value.
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining = self.remaining.saturating_sub(1);
        let Node { value, .. } = *node;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    // Draining keeps the un-yielded right subtrees from being dropped recursively.
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.take());
        iter
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
