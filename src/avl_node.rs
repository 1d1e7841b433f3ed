use log::trace;
use crate::order::TotalOrder;
use crate::rotation::RotationRule;
use crate::traversal::Traversal;




/**
 * A node in a height-balanced binary search tree. Nodes have no parent
 * pointer: every restructuring function takes the owning slot, and leaves
 * the new root of the sub-tree in that slot.
 */
pub(crate) struct Node<T> {
    value: T,
    height: usize,
    l: Option<Box<Node<T>>>,
    r: Option<Box<Node<T>>>,
}

/// An owning child slot, or the root slot of a tree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;




// ============================================================================
impl<T> Node<T> {




    /**
     * Create a leaf node with the given value.
     */
    fn new(value: T) -> Self {
        Self { value, height: 1, l: None, r: None }
    }




    /**
     * Return the number of nodes contained in this sub-tree (including self).
     */
    pub(crate) fn len(&self) -> usize {
        self.l.as_ref().map_or(0, |l| l.len()) +
        self.r.as_ref().map_or(0, |r| r.len()) + 1
    }




    /**
     * Return the cached height of a maybe-node. An absent sub-tree has height
     * zero and a leaf has height one.
     */
    pub(crate) fn height(node: &Link<T>) -> usize {
        node.as_ref().map_or(0, |n| n.height)
    }




    /**
     * Return true if the given value exists in this sub-tree.
     */
    pub(crate) fn find<O: TotalOrder<T>>(node: &Link<T>, value: &T, order: &O) -> bool {
        match node {
            None => false,
            Some(n) => {
                if order.is_lesser(value, &n.value) {
                    Self::find(&n.l, value, order)
                } else if order.is_greater(value, &n.value) {
                    Self::find(&n.r, value, order)
                } else {
                    true
                }
            }
        }
    }




    /**
     * Insert a node with the given value into this sub-tree, and rebalance
     * every node on the path back up. Values which are not lesser than a
     * node's value go to its greater side, so a value equal to one already
     * present is stored again rather than rejected.
     */
    pub(crate) fn insert<O: TotalOrder<T>>(node: &mut Link<T>, value: T, order: &O, rule: RotationRule) {
        if let Some(n) = node {
            if order.is_lesser(&value, &n.value) {
                Self::insert(&mut n.l, value, order, rule)
            } else {
                Self::insert(&mut n.r, value, order, rule)
            }
        } else {
            *node = Some(Box::new(Self::new(value)));
            return;
        }
        Self::rebalance(node, rule)
    }




    /**
     * Remove one node with the given value from this sub-tree. Return true if
     * a node was found and removed. A node with two children takes the value
     * of the least node in its greater sub-tree, and that node is removed in
     * its place.
     */
    pub(crate) fn remove<O: TotalOrder<T>>(node: &mut Link<T>, value: &T, order: &O, rule: RotationRule) -> bool {
        let removed = if let Some(n) = node {
            if order.is_lesser(value, &n.value) {
                Self::remove(&mut n.l, value, order, rule)
            } else if order.is_greater(value, &n.value) {
                Self::remove(&mut n.r, value, order, rule)
            } else {
                match (n.l.take(), n.r.take()) {
                    (None, None) => {
                        *node = None
                    }
                    (Some(l), None) => {
                        *node = Some(l)
                    }
                    (None, Some(r)) => {
                        *node = Some(r)
                    }
                    (Some(l), Some(r)) => {
                        let (new_r, min) = r.take_lmost(rule);
                        n.value = min;
                        n.l = Some(l);
                        n.r = new_r;
                    }
                }
                true
            }
        } else {
            false
        };

        if removed {
            Self::rebalance(node, rule)
        }
        removed
    }




    /**
     * Return this sub-tree, but with the left-most descendant node removed.
     * Also return the value of that node. The removed node's greater child
     * takes its place, and the nodes above it are rebalanced.
     */
    fn take_lmost(mut self: Box<Self>, rule: RotationRule) -> (Link<T>, T) {
        if let Some(l) = self.l.take() {
            let (new_l, value) = l.take_lmost(rule);
            self.l = new_l;
            let mut node = Some(self);
            Self::rebalance(&mut node, rule);
            (node, value)
        } else {
            let Node { value, r, .. } = *self;
            (r, value)
        }
    }




    /**
     * Refresh the cached height of the node in this slot, and rotate it if its
     * sub-trees differ in height by more than one. The rotation rule decides
     * between the single and the double rotation.
     */
    pub(crate) fn rebalance(node: &mut Link<T>, rule: RotationRule) {
        let n = match node.as_mut() {
            Some(n) => n,
            None => return,
        };
        n.update_height();

        let balance = Self::height(&n.l) as isize - Self::height(&n.r) as isize;

        if balance < -1 {
            let (inner, outer) = n.r.as_ref().map_or((0, 0), |c| (Self::height(&c.l), Self::height(&c.r)));

            if rule.rotates_inner_first(inner, outer) {
                Self::rotate_right(&mut n.r);
            }
            Self::rotate_left(node);
        } else if balance > 1 {
            let (inner, outer) = n.l.as_ref().map_or((0, 0), |c| (Self::height(&c.r), Self::height(&c.l)));

            if rule.rotates_inner_first(inner, outer) {
                Self::rotate_left(&mut n.l);
            }
            Self::rotate_right(node);
        }
    }




    /**
     * Promote the greater child of the node in this slot.
     *
     * ```text
     *   a            c
     *    \          / \
     *     c   ->   a   d
     *    / \        \
     *   b   d        b
     * ```
     */
    fn rotate_left(node: &mut Link<T>) {
        let mut a = node.take().expect("rotation of an empty sub-tree");
        let mut c = a.r.take().expect("left rotation requires a greater child");
        a.r = c.l.take();
        a.update_height();
        c.l = Some(a);
        c.update_height();
        *node = Some(c);
        trace!("rotated left to height {}", Self::height(node));
    }




    /**
     * Promote the lesser child of the node in this slot.
     *
     * ```text
     *       z        x
     *      /        / \
     *     x   ->   w   z
     *    / \          /
     *   w   y        y
     * ```
     */
    fn rotate_right(node: &mut Link<T>) {
        let mut z = node.take().expect("rotation of an empty sub-tree");
        let mut x = z.l.take().expect("right rotation requires a lesser child");
        z.l = x.r.take();
        z.update_height();
        x.r = Some(z);
        x.update_height();
        *node = Some(x);
        trace!("rotated right to height {}", Self::height(node));
    }




    fn update_height(&mut self) {
        self.height = Self::local_height(&self.l, &self.r)
    }




    /**
     * Determine the height of a node from the two maybe-nodes below it. The
     * result is correct as long as the two children have correctly cached
     * heights.
     */
    fn local_height(l: &Link<T>, r: &Link<T>) -> usize {
        Self::height(l).max(Self::height(r)) + 1
    }




    /**
     * Visit every value in this sub-tree, in the given order.
     */
    pub(crate) fn walk<F: FnMut(&T)>(node: &Link<T>, traversal: Traversal, visit: &mut F) {
        if let Some(n) = node {
            match traversal {
                Traversal::InOrder => {
                    Self::walk(&n.l, traversal, visit);
                    visit(&n.value);
                    Self::walk(&n.r, traversal, visit);
                }
                Traversal::PreOrder => {
                    visit(&n.value);
                    Self::walk(&n.l, traversal, visit);
                    Self::walk(&n.r, traversal, visit);
                }
                Traversal::PostOrder => {
                    Self::walk(&n.l, traversal, visit);
                    Self::walk(&n.r, traversal, visit);
                    visit(&n.value);
                }
                Traversal::ReverseOrder => {
                    Self::walk(&n.r, traversal, visit);
                    visit(&n.value);
                    Self::walk(&n.l, traversal, visit);
                }
            }
        }
    }




    /**
     * Drop every node in this sub-tree, children before their parent, and
     * leave the slot empty.
     */
    pub(crate) fn clear(node: &mut Link<T>) {
        if let Some(mut n) = node.take() {
            Self::clear(&mut n.l);
            Self::clear(&mut n.r);
        }
    }




    /**
     * Return a list of node references forming a path from this node to its
     * leftmost node. This function is to facilitate non-consuming in-order
     * traversal.
     */
    fn lmost_path(&self) -> Vec<&Self> {
        let mut path = vec![self];

        while let Some(l) = path.last().and_then(|b| b.l.as_ref()) {
            path.push(l)
        }
        path
    }




    /**
     * Return the height of this sub-tree by walking it, ignoring the cached
     * heights.
     */
    pub(crate) fn compute_height(&self) -> usize {
        self.l.as_ref().map_or(0, |l| l.compute_height()).max(
        self.r.as_ref().map_or(0, |r| r.compute_height())) + 1
    }




    /**
     * Return true if, at every node of this sub-tree, the walked heights of
     * the two children differ by at most one.
     */
    pub(crate) fn is_balanced(&self) -> bool {
        let l = self.l.as_ref().map_or(0, |l| l.compute_height());
        let r = self.r.as_ref().map_or(0, |r| r.compute_height());

        (l as isize - r as isize).abs() <= 1 &&
        self.l.as_ref().map_or(true, |l| l.is_balanced()) &&
        self.r.as_ref().map_or(true, |r| r.is_balanced())
    }




    /**
     * Panic unless every node is caching the walked height of its sub-tree.
     * This function is for testing purposes.
     */
    #[cfg(test)]
    pub(crate) fn validate_heights(&self) {
        if self.height != self.compute_height() {
            panic!("cached height out of sync with sub-tree");
        }
        if let Some(l) = &self.l {
            l.validate_heights()
        }
        if let Some(r) = &self.r {
            r.validate_heights()
        }
    }




    /**
     * Panic unless no value in the lesser sub-tree is greater than this node's
     * value, and no value in the greater sub-tree is lesser. Equal values may
     * sit on either side. This function is for testing purposes.
     */
    #[cfg(test)]
    pub(crate) fn validate_order<O: TotalOrder<T>>(&self, order: &O) {
        if let Some(l) = &self.l {
            if Iter::from_node(l).any(|v| order.is_greater(v, &self.value)) {
                panic!("unordered node")
            }
            l.validate_order(order)
        }
        if let Some(r) = &self.r {
            if Iter::from_node(r).any(|v| order.is_lesser(v, &self.value)) {
                panic!("unordered node")
            }
            r.validate_order(order)
        }
    }
}




/**
 * By-reference iterator that traverses an entire sub-tree in-order.
 */
pub struct Iter<'a, T> {
    nodes: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(node: &'a Link<T>) -> Self {
        Self {
            nodes: node.as_ref().map_or(Vec::new(), |node| node.lmost_path())
        }
    }

    #[cfg(test)]
    fn from_node(node: &'a Node<T>) -> Self {
        Self { nodes: node.lmost_path() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {

        /*
         * Pop the last node on the stack (A). If A has a greater child (B)
         * then push B, followed by the path to its minimum node. Yield the
         * value of A.
         */

        let a = self.nodes.pop()?;

        if let Some(b) = &a.r {
            self.nodes.extend(b.lmost_path())
        }
        Some(&a.value)
    }
}
