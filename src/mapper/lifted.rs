//! Lifting arbitrary callables into the operator algebra.

use std::fmt;

use super::Mapper;
use crate::MapperOps;

/// A callable made composable.
///
/// Closures are mappers already, but they are not [`Composable`]: operators
/// are not defined for them. Lifting one adds the operator set so it can be
/// an operand in an expression next to selectors and constants.
///
/// [`Composable`]: crate::Composable
#[derive(Clone, Copy, MapperOps)]
pub struct Lifted<F> {
    function: F,
}

impl<F> Lifted<F> {
    /// Wraps `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Consumes the wrapper, returning the callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F: Mapper<Args>, Args> Mapper<Args> for Lifted<F> {
    type Output = F::Output;

    #[inline]
    fn call(&self, args: Args) -> F::Output {
        self.function.call(args)
    }
}

impl<F> fmt::Debug for Lifted<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lifted").finish_non_exhaustive()
    }
}

impl<F> fmt::Display for Lifted<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<fn>")
    }
}

/// Makes a callable composable with mapper operators.
///
/// # Examples
///
/// ```rust
/// use argmap::{Mapper, lift, _2};
///
/// let squared = lift(|value: i32, _: i32| value * value);
/// let mapper = squared + _2;
///
/// assert_eq!(mapper.call((3, 4)), 13);
/// ```
#[inline]
pub const fn lift<F>(function: F) -> Lifted<F> {
    Lifted::new(function)
}
