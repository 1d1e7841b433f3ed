use std::cmp::Ordering;




/**
 * A strict total order over `T`, expressed as a pair of predicates. Two
 * values for which neither predicate holds are considered equal.
 */
pub trait TotalOrder<T: ?Sized> {
    fn is_lesser(&self, a: &T, b: &T) -> bool;
    fn is_greater(&self, a: &T, b: &T) -> bool;
}




/**
 * Order given by two caller-supplied closures.
 */
#[derive(Clone, Copy)]
pub struct Predicates<L, G> {
    is_lesser: L,
    is_greater: G,
}

impl<L, G> Predicates<L, G> {
    pub fn new(is_lesser: L, is_greater: G) -> Self {
        Self { is_lesser, is_greater }
    }
}

impl<T: ?Sized, L, G> TotalOrder<T> for Predicates<L, G>
where
    L: Fn(&T, &T) -> bool,
    G: Fn(&T, &T) -> bool,
{
    fn is_lesser(&self, a: &T, b: &T) -> bool {
        (self.is_lesser)(a, b)
    }

    fn is_greater(&self, a: &T, b: &T) -> bool {
        (self.is_greater)(a, b)
    }
}




/**
 * Order given by a single three-way comparison function.
 */
#[derive(Clone, Copy)]
pub struct Comparator<F> {
    compare: F,
}

impl<F> Comparator<F> {
    pub fn new(compare: F) -> Self {
        Self { compare }
    }
}

impl<T: ?Sized, F> TotalOrder<T> for Comparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn is_lesser(&self, a: &T, b: &T) -> bool {
        (self.compare)(a, b) == Ordering::Less
    }

    fn is_greater(&self, a: &T, b: &T) -> bool {
        (self.compare)(a, b) == Ordering::Greater
    }
}




/**
 * The order of `T: Ord`.
 */
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> TotalOrder<T> for NaturalOrder {
    fn is_lesser(&self, a: &T, b: &T) -> bool {
        a < b
    }

    fn is_greater(&self, a: &T, b: &T) -> bool {
        a > b
    }
}
