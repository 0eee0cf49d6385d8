//! Positional argument selection.
//!
//! [`Arg<N>`] returns the `N`-th element (zero based) of the argument tuple.
//! Selection is plain tuple indexing through the [`Nth`] trait, implemented
//! for every tuple of up to 20 elements and every index below its length.
//! An index that is out of range has no impl, so the selector is simply not a
//! mapper for that tuple and the call is rejected at compile time.

use std::fmt;

use super::Mapper;
use crate::MapperOps;

/// Positional access into an argument tuple.
///
/// `Nth<N>` is implemented for a tuple when it has more than `N` elements.
/// The element is moved out as-is, so references stay references.
///
/// # Examples
///
/// ```rust
/// use argmap::Nth;
///
/// let second = Nth::<1>::into_nth(("first", 2, 3.0));
/// assert_eq!(second, 2);
/// ```
pub trait Nth<const N: usize> {
    /// The type of the element at index `N`.
    type Output;

    /// Moves the element at index `N` out of the tuple.
    fn into_nth(self) -> Self::Output;
}

macro_rules! impl_nth {
    ($elements:tt; $($index:tt => $selected:ident),+ $(,)?) => {
        $( impl_nth!(@select $elements $index $selected); )+
    };
    (@select ($($element:ident),+) $index:tt $selected:ident) => {
        impl<$($element),+> Nth<$index> for ($($element,)+) {
            type Output = $selected;

            #[inline]
            fn into_nth(self) -> $selected {
                self.$index
            }
        }
    };
}

impl_nth!((A0); 0 => A0);
impl_nth!((A0, A1); 0 => A0, 1 => A1);
impl_nth!((A0, A1, A2); 0 => A0, 1 => A1, 2 => A2);
impl_nth!((A0, A1, A2, A3); 0 => A0, 1 => A1, 2 => A2, 3 => A3);
impl_nth!((A0, A1, A2, A3, A4); 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4);
impl_nth!((A0, A1, A2, A3, A4, A5); 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12, 13 => A13
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12, 13 => A13, 14 => A14
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12, 13 => A13, 14 => A14, 15 => A15
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12, 13 => A13, 14 => A14, 15 => A15, 16 => A16
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12, 13 => A13, 14 => A14, 15 => A15, 16 => A16, 17 => A17
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12, 13 => A13, 14 => A14, 15 => A15, 16 => A16, 17 => A17,
    18 => A18
);
impl_nth!(
    (A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13, A14, A15, A16, A17, A18, A19);
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8, 9 => A9,
    10 => A10, 11 => A11, 12 => A12, 13 => A13, 14 => A14, 15 => A15, 16 => A16, 17 => A17,
    18 => A18, 19 => A19
);

/// Selects one argument of a call by position.
///
/// `Arg<N>` is a mapper for every argument tuple with more than `N` elements
/// and returns element `N` unchanged: an argument passed by value comes back
/// by value, a `&T` or `&mut T` comes back as the same reference. Positions
/// are zero based here; the named instances [`_1`](crate::_1) through
/// [`_20`](crate::_20) are one based.
///
/// # Examples
///
/// ```rust
/// use argmap::{Arg, Mapper};
///
/// let third = Arg::<2>;
/// assert_eq!(third.call(('a', 'b', 'c', 'd')), 'c');
/// ```
///
/// Mutation through a selected reference reaches the caller's value:
///
/// ```rust
/// use argmap::{Mapper, _1};
///
/// let mut counter = 1;
/// *_1.call((&mut counter, "unused")) += 1;
/// assert_eq!(counter, 2);
/// ```
///
/// Selecting past the end of the argument list does not compile:
///
/// ```compile_fail
/// use argmap::{Arg, Mapper};
///
/// Arg::<2>.call((1, 2));
/// ```
#[derive(Clone, Copy, Debug, Default, MapperOps)]
pub struct Arg<const N: usize>;

impl<const N: usize> Arg<N> {
    /// The zero based position this selector picks.
    pub const INDEX: usize = N;

    /// Creates the selector.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<const N: usize, Args: Nth<N>> Mapper<Args> for Arg<N> {
    type Output = Args::Output;

    #[inline]
    fn call(&self, args: Args) -> Args::Output {
        args.into_nth()
    }
}

impl<const N: usize> fmt::Display for Arg<N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "_{}", N + 1)
    }
}

/// Creates the selector for the zero based position `N`.
///
/// Useful in generic code where the position is a const parameter.
///
/// # Examples
///
/// ```rust
/// use argmap::{Mapper, arg};
///
/// fn pick<const N: usize>() -> argmap::Arg<N> {
///     arg::<N>()
/// }
///
/// assert_eq!(pick::<1>().call((10, 20, 30)), 20);
/// ```
#[inline]
#[must_use]
pub const fn arg<const N: usize>() -> Arg<N> {
    Arg
}
