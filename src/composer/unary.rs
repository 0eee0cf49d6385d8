use std::fmt;
use std::marker::PhantomData;

use crate::MapperOps;
use crate::mapper::Mapper;
use crate::operator::{Operator, UnaryOperator};

/// A mapper applying a unary operator to the result of another mapper.
///
/// Built by `-mapper`, `!mapper` and [`MapperExt::logical_not`].
///
/// # Examples
///
/// ```rust
/// use argmap::{Mapper, _1};
///
/// assert_eq!((-_1).call((7,)), -7);
/// assert_eq!((!_1).call((true,)), false);
/// assert_eq!((!_1).call((0b1010_u8,)), 0b1111_0101);
/// ```
///
/// [`MapperExt::logical_not`]: crate::MapperExt::logical_not
#[derive(MapperOps)]
pub struct Unary<Op, M> {
    operand: M,
    operator: PhantomData<fn() -> Op>,
}

impl<Op, M> Unary<Op, M> {
    /// Creates a composer applying `Op` to the result of `operand`.
    #[inline]
    pub const fn new(operand: M) -> Self {
        Self {
            operand,
            operator: PhantomData,
        }
    }

    /// Returns the operand mapper.
    #[inline]
    pub const fn operand(&self) -> &M {
        &self.operand
    }

    /// Consumes the composer, returning the operand mapper.
    #[inline]
    pub fn into_operand(self) -> M {
        self.operand
    }
}

impl<Op, M, Args> Mapper<Args> for Unary<Op, M>
where
    M: Mapper<Args>,
    Op: UnaryOperator<M::Output>,
{
    type Output = Op::Output;

    #[inline]
    fn call(&self, args: Args) -> Op::Output {
        Op::apply(self.operand.call(args))
    }
}

impl<Op, M: Clone> Clone for Unary<Op, M> {
    fn clone(&self) -> Self {
        Self::new(self.operand.clone())
    }
}

impl<Op, M: Copy> Copy for Unary<Op, M> {}

impl<Op: Operator, M: fmt::Debug> fmt::Debug for Unary<Op, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Unary")
            .field("operator", &Op::SYMBOL)
            .field("operand", &self.operand)
            .finish()
    }
}

impl<Op: Operator, M: fmt::Display> fmt::Display for Unary<Op, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand = self.operand.to_string();
        // `--_1` or `-!_1` would read as a different operator.
        if operand.starts_with(['-', '!']) {
            write!(formatter, "{}({operand})", Op::SYMBOL)
        } else {
            write!(formatter, "{}{operand}", Op::SYMBOL)
        }
    }
}
