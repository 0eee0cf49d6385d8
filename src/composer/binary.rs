use std::fmt;
use std::marker::PhantomData;

use crate::MapperOps;
use crate::mapper::Mapper;
use crate::operator::{BinaryOperator, Operator};

/// A mapper applying a binary operator to the results of two mappers.
///
/// Both operands receive the same argument tuple. The left operand is
/// always evaluated first; it receives a clone of the tuple and the right
/// operand receives the original, which is why `Args` must be `Clone`.
/// Tuples of owned values and of shared references are; tuples holding a
/// `&mut` are not.
///
/// # Examples
///
/// ```rust
/// use argmap::prelude::*;
///
/// assert_eq!((_1 + 5).call((10,)), 15);
/// assert_eq!((_1 * _2).call((3, 4)), 12);
/// assert!(_1.less(_2).call((2, 3)));
/// ```
#[derive(MapperOps)]
pub struct Binary<Op, L, R> {
    left: L,
    right: R,
    operator: PhantomData<fn() -> Op>,
}

impl<Op, L, R> Binary<Op, L, R> {
    /// Creates a composer applying `Op` to the results of `left` and `right`.
    #[inline]
    pub const fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            operator: PhantomData,
        }
    }

    /// Returns the left operand mapper.
    #[inline]
    pub const fn left(&self) -> &L {
        &self.left
    }

    /// Returns the right operand mapper.
    #[inline]
    pub const fn right(&self) -> &R {
        &self.right
    }

    /// Consumes the composer, returning both operand mappers.
    #[inline]
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<Op, L, R, Args> Mapper<Args> for Binary<Op, L, R>
where
    Args: Clone,
    L: Mapper<Args>,
    R: Mapper<Args>,
    Op: BinaryOperator<L::Output, R::Output>,
{
    type Output = Op::Output;

    #[inline]
    fn call(&self, args: Args) -> Op::Output {
        let left = self.left.call(args.clone());
        let right = self.right.call(args);
        Op::apply(left, right)
    }
}

impl<Op, L: Clone, R: Clone> Clone for Binary<Op, L, R> {
    fn clone(&self) -> Self {
        Self::new(self.left.clone(), self.right.clone())
    }
}

impl<Op, L: Copy, R: Copy> Copy for Binary<Op, L, R> {}

impl<Op: Operator, L: fmt::Debug, R: fmt::Debug> fmt::Debug for Binary<Op, L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Binary")
            .field("operator", &Op::SYMBOL)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<Op: Operator, L: fmt::Display, R: fmt::Display> fmt::Display for Binary<Op, L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({} {} {})", self.left, Op::SYMBOL, self.right)
    }
}
