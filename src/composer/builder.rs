use paste::paste;

use super::{Binary, Unary};
use crate::mapper::{Composable, IntoMapper, Mapper};
use crate::operator::{
    Equal, Greater, GreaterEqual, Less, LessEqual, LogicalAnd, LogicalNot, LogicalOr, NotEqual,
};

macro_rules! comparison_builders {
    ($($(#[$meta:meta])* $method:ident => $tag:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            fn $method<R: IntoMapper>(self, rhs: R) -> Binary<$tag, Self, R::Mapper> {
                Binary::new(self, rhs.into_mapper())
            }
        )+
    };
}

macro_rules! closure_adapters {
    ($($arity:literal => ($($argument:ident : $value:ident),+)),+ $(,)?) => {
        paste! {
            $(
                /// Turns the mapper into a closure taking the call arguments as
                /// separate parameters, for APIs that expect an `Fn`.
                #[inline]
                fn [<into_fn $arity>]<$($argument),+>(
                    self,
                ) -> impl Fn($($argument),+) -> <Self as Mapper<($($argument,)+)>>::Output
                where
                    Self: Mapper<($($argument,)+)>,
                {
                    move |$($value),+| self.call(($($value,)+))
                }
            )+
        }
    };
}

/// Named builders for composable mappers.
///
/// Rust's comparison operators must return `bool` and `&&` / `||` cannot be
/// overloaded at all, so those operators are built through methods. Each
/// method builds the same kind of composer an operator would, wrapping the
/// right-hand side by the usual rule.
///
/// Implemented for every [`Composable`] type.
///
/// # Examples
///
/// ```rust
/// use argmap::prelude::*;
///
/// let between = _1.greater(_2).and(_1.less(_3));
///
/// assert!(between.call((5, 1, 10)));
/// assert!(!between.call((0, 1, 10)));
///
/// let evens: Vec<i32> = (1..=6).filter(|n| (_1 % 2).equal(0).call((*n,))).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub trait MapperExt: Composable + Sized {
    comparison_builders! {
        /// Builds `self < rhs`.
        less => Less,
        /// Builds `self <= rhs`.
        less_equal => LessEqual,
        /// Builds `self > rhs`.
        greater => Greater,
        /// Builds `self >= rhs`.
        greater_equal => GreaterEqual,
        /// Builds `self == rhs`.
        equal => Equal,
        /// Builds `self != rhs`.
        not_equal => NotEqual,
        /// Builds `self && rhs`. Both sides are evaluated.
        and => LogicalAnd,
        /// Builds `self || rhs`. Both sides are evaluated.
        or => LogicalOr,
    }

    /// Builds the logical negation of `self`.
    ///
    /// Unlike `!self`, which applies [`std::ops::Not`] and so complements
    /// integers bitwise, this requires a `bool` (or `&bool`) result.
    #[inline]
    fn logical_not(self) -> Unary<LogicalNot, Self> {
        Unary::new(self)
    }

    closure_adapters! {
        1 => (A: a),
        2 => (A: a, B: b),
        3 => (A: a, B: b, C: c),
        4 => (A: a, B: b, C: c, D: d),
    }

    /// Wraps the mapper so each invocation emits a `tracing` event.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use argmap::prelude::*;
    ///
    /// let mapper = (_1 + 1).traced("increment");
    /// assert_eq!(mapper.call((1,)), 2);
    /// ```
    #[cfg(feature = "tracing")]
    #[inline]
    fn traced(self, label: &'static str) -> crate::Traced<Self> {
        crate::Traced::new(label, self)
    }
}

impl<M: Composable> MapperExt for M {}
