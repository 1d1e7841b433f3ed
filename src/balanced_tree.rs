use core::fmt;
use core::iter::FromIterator;
use std::cmp::Ordering;
use log::debug;
use crate::avl_node::{Iter, Link, Node};
use crate::error::Error;
use crate::order::{Comparator, NaturalOrder, Predicates, TotalOrder};
use crate::rotation::RotationRule;
use crate::traversal::Traversal;




/**
 * A self-balancing binary search tree, ordered by a strategy `O` which is
 * fixed for the lifetime of the tree. Lookups, insertions and removals take
 * logarithmic time. Values are read out through one of four traversal orders
 * into caller-provided buffers, or through a by-reference in-order iterator.
 *
 * The tree stores values for which the order's `is_lesser` fails on the
 * greater side of a node, so inserting a value equal to one already present
 * stores a second copy.
 */
pub struct BalancedOrderedTree<T, O = NaturalOrder> {
    root: Link<T>,
    order: O,
    rule: RotationRule,
}




// ============================================================================
impl<T, L, G> BalancedOrderedTree<T, Predicates<L, G>>
where
    L: Fn(&T, &T) -> bool,
    G: Fn(&T, &T) -> bool,
{
    /**
     * Create an empty tree ordered by the two given predicates, which must
     * together define a strict total order over `T`.
     */
    pub fn new(is_lesser: L, is_greater: G) -> Self {
        Self::with_order(Predicates::new(is_lesser, is_greater))
    }
}




// ============================================================================
impl<T, F> BalancedOrderedTree<T, Comparator<F>>
where
    F: Fn(&T, &T) -> Ordering,
{
    /**
     * Create an empty tree ordered by a three-way comparison function.
     */
    pub fn with_comparator(compare: F) -> Self {
        Self::with_order(Comparator::new(compare))
    }
}




// ============================================================================
impl<T: Ord> BalancedOrderedTree<T, NaturalOrder> {

    pub fn natural() -> Self {
        Self::with_order(NaturalOrder)
    }
}




// ============================================================================
impl<T, O: TotalOrder<T>> BalancedOrderedTree<T, O> {

    pub fn with_order(order: O) -> Self {
        Self { root: None, order, rule: RotationRule::default() }
    }

    /**
     * Use the given rule to choose between single and double rotations. This
     * is meant to be called on an empty tree; the shape of values already
     * inserted is not revisited.
     */
    pub fn with_rotation_rule(mut self, rule: RotationRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn rotation_rule(&self) -> RotationRule {
        self.rule
    }

    pub fn insert(&mut self, value: T) {
        Node::insert(&mut self.root, value, &self.order, self.rule)
    }

    /**
     * Remove one value equal to the given one. Return true if such a value
     * was present.
     */
    pub fn remove(&mut self, value: &T) -> bool {
        Node::remove(&mut self.root, value, &self.order, self.rule)
    }

    pub fn find(&self, value: &T) -> bool {
        Node::find(&self.root, value, &self.order)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value)
    }
}




// ============================================================================
impl<T, O> BalancedOrderedTree<T, O> {

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.len())
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    /**
     * Return the number of nodes on the longest path from the root down to a
     * leaf, zero for an empty tree.
     */
    pub fn height(&self) -> usize {
        Node::height(&self.root)
    }

    /**
     * Return true if the heights of the two sub-trees of every node differ by
     * at most one. This always holds under `RotationRule::Height`.
     */
    pub fn is_balanced(&self) -> bool {
        self.root.as_ref().map_or(true, |root| root.is_balanced())
    }

    /**
     * Drop every value, children before their parents.
     */
    pub fn clear(&mut self) {
        if self.root.is_some() {
            debug!("clearing tree of height {}", self.height());
        }
        Node::clear(&mut self.root)
    }

    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.root)
    }

    /**
     * Copy every value into the leading entries of `out`, in the given
     * traversal order. Return the number of entries written, or an error if
     * `out` cannot hold every value in the tree.
     */
    pub fn copy_into(&self, traversal: Traversal, out: &mut [T]) -> Result<usize, Error>
    where
        T: Clone,
    {
        let required = self.size();

        if out.len() < required {
            return Err(Error::BufferTooSmall { required, provided: out.len() })
        }
        let mut n = 0;

        Node::walk(&self.root, traversal, &mut |value: &T| {
            out[n] = value.clone();
            n += 1;
        });
        Ok(n)
    }

    /**
     * Return a vector of every value, in the given traversal order.
     */
    pub fn to_vec(&self, traversal: Traversal) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.size());
        Node::walk(&self.root, traversal, &mut |value: &T| values.push(value.clone()));
        values
    }

    /**
     * Copy the values in ascending order into `out`, which must have room for
     * at least `size()` values.
     */
    pub fn to_array_inorder(&self, out: &mut [T]) where T: Clone {
        self.export(Traversal::InOrder, out)
    }

    /**
     * Copy the values into `out`, each node before its sub-trees.
     */
    pub fn to_array_preorder(&self, out: &mut [T]) where T: Clone {
        self.export(Traversal::PreOrder, out)
    }

    /**
     * Copy the values into `out`, each node after its sub-trees.
     */
    pub fn to_array_postorder(&self, out: &mut [T]) where T: Clone {
        self.export(Traversal::PostOrder, out)
    }

    /**
     * Copy the values in descending order into `out`.
     */
    pub fn to_array_in_reverse_order(&self, out: &mut [T]) where T: Clone {
        self.export(Traversal::ReverseOrder, out)
    }

    fn export(&self, traversal: Traversal, out: &mut [T]) where T: Clone {
        if let Err(e) = self.copy_into(traversal, out) {
            panic!("{}", e)
        }
    }

    #[cfg(test)]
    fn validate(&self) where O: TotalOrder<T> {
        if let Some(root) = &self.root {
            root.validate_heights();
            root.validate_order(&self.order);
        }
    }
}




// ============================================================================
impl<T: Ord> Default for BalancedOrderedTree<T, NaturalOrder> {
    fn default() -> Self {
        Self::natural()
    }
}




/**
 * A copy is built by inserting the source's values, in postorder, into a new
 * tree with the same order and rotation rule. The two trees share no nodes.
 */
impl<T: Clone, O: TotalOrder<T> + Clone> Clone for BalancedOrderedTree<T, O> {
    fn clone(&self) -> Self {
        let mut tree = Self::with_order(self.order.clone()).with_rotation_rule(self.rule);
        tree.insert_all(&self.root);
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.order = source.order.clone();
        self.rule = source.rule;
        self.insert_all(&source.root);
    }
}

impl<T: Clone, O: TotalOrder<T>> BalancedOrderedTree<T, O> {
    fn insert_all(&mut self, source: &Link<T>) {
        debug!("copying tree of height {}", Node::height(source));
        Node::walk(source, Traversal::PostOrder, &mut |value: &T| self.insert(value.clone()));
    }
}




// ============================================================================
impl<T, O> Drop for BalancedOrderedTree<T, O> {
    fn drop(&mut self) {
        Node::clear(&mut self.root)
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BalancedOrderedTree<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, O: TotalOrder<T>> Extend<T> for BalancedOrderedTree<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value)
        }
    }
}

impl<T: Ord> FromIterator<T> for BalancedOrderedTree<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::natural();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, O> IntoIterator for &'a BalancedOrderedTree<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(&self.root)
    }
}
