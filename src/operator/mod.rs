//! Operator tags applied by composers.
//!
//! Each operator is a zero-sized tag type. A composer carries its tag as a
//! type parameter and applies it to the results of its operands:
//!
//! - [`UnaryOperator<T>`]: applied by [`Unary`](crate::Unary)
//! - [`BinaryOperator<L, R>`]: applied by [`Binary`](crate::Binary)
//!
//! Every tag mirrors the native operator of the same meaning. Nothing is
//! checked or saturated: integer division truncates, overflow and division
//! by zero behave exactly as they do for the native operator.
//!
//! | Tag | Native | Built by |
//! |---|---|---|
//! | [`Plus`] | `l + r` | `m + r` |
//! | [`Minus`] | `l - r` | `m - r` |
//! | [`Times`] | `l * r` | `m * r` |
//! | [`Divide`] | `l / r` | `m / r` |
//! | [`Modulo`] | `l % r` | `m % r` |
//! | [`Negate`] | `-v` | `-m` |
//! | [`Less`] | `l < r` | `m.less(r)` |
//! | [`LessEqual`] | `l <= r` | `m.less_equal(r)` |
//! | [`Greater`] | `l > r` | `m.greater(r)` |
//! | [`GreaterEqual`] | `l >= r` | `m.greater_equal(r)` |
//! | [`Equal`] | `l == r` | `m.equal(r)` |
//! | [`NotEqual`] | `l != r` | `m.not_equal(r)` |
//! | [`LogicalAnd`] | `l && r` | `m.and(r)` |
//! | [`LogicalOr`] | `l \|\| r` | `m.or(r)` |
//! | [`LogicalNot`] | `!v` on `bool` | `m.logical_not()` |
//! | [`BitwiseAnd`] | `l & r` | `m & r` |
//! | [`BitwiseOr`] | `l \| r` | `m \| r` |
//! | [`BitwiseXor`] | `l ^ r` | `m ^ r` |
//! | [`Complement`] | `!v` | `!m` |
//!
//! [`LogicalAnd`] and [`LogicalOr`] do not short-circuit: both operands are
//! evaluated before the tag is applied. The logical tags accept `bool` and
//! references to it, so predicates over `&bool` arguments compose too.

use std::borrow::Borrow;
use std::ops;

/// Common data of every operator tag.
pub trait Operator {
    /// The operator as written in source, used when displaying expressions.
    const SYMBOL: &'static str;
}

/// An operator applied to one operand.
pub trait UnaryOperator<T>: Operator {
    /// The result type.
    type Output;

    /// Applies the operator.
    fn apply(operand: T) -> Self::Output;
}

/// An operator applied to two operands, left first.
pub trait BinaryOperator<L, R>: Operator {
    /// The result type.
    type Output;

    /// Applies the operator.
    fn apply(left: L, right: R) -> Self::Output;
}

macro_rules! operator_tags {
    ($($(#[$meta:meta])* $tag:ident => $symbol:literal;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $tag;

            impl Operator for $tag {
                const SYMBOL: &'static str = $symbol;
            }
        )+
    };
}

operator_tags! {
    /// Addition.
    Plus => "+";
    /// Subtraction.
    Minus => "-";
    /// Multiplication.
    Times => "*";
    /// Division.
    Divide => "/";
    /// Remainder.
    Modulo => "%";
    /// Arithmetic negation.
    Negate => "-";
    /// `<`.
    Less => "<";
    /// `<=`.
    LessEqual => "<=";
    /// `>`.
    Greater => ">";
    /// `>=`.
    GreaterEqual => ">=";
    /// `==`.
    Equal => "==";
    /// `!=`.
    NotEqual => "!=";
    /// Logical conjunction of two evaluated operands.
    LogicalAnd => "&&";
    /// Logical disjunction of two evaluated operands.
    LogicalOr => "||";
    /// Logical negation, always producing `bool`.
    LogicalNot => "!";
    /// Bitwise and.
    BitwiseAnd => "&";
    /// Bitwise or.
    BitwiseOr => "|";
    /// Bitwise exclusive or.
    BitwiseXor => "^";
    /// The `!` operator: bitwise complement on integers, negation on `bool`.
    Complement => "!";
}

macro_rules! arithmetic_operators {
    ($($tag:ident => $trait_name:ident :: $method:ident),+ $(,)?) => {
        $(
            impl<L: ops::$trait_name<R>, R> BinaryOperator<L, R> for $tag {
                type Output = L::Output;

                #[inline]
                fn apply(left: L, right: R) -> L::Output {
                    ops::$trait_name::$method(left, right)
                }
            }
        )+
    };
}

arithmetic_operators! {
    Plus => Add::add,
    Minus => Sub::sub,
    Times => Mul::mul,
    Divide => Div::div,
    Modulo => Rem::rem,
    BitwiseAnd => BitAnd::bitand,
    BitwiseOr => BitOr::bitor,
    BitwiseXor => BitXor::bitxor,
}

macro_rules! comparison_operators {
    ($($tag:ident => $trait_name:ident :: $method:ident),+ $(,)?) => {
        $(
            impl<L: $trait_name<R>, R> BinaryOperator<L, R> for $tag {
                type Output = bool;

                #[inline]
                fn apply(left: L, right: R) -> bool {
                    $trait_name::$method(&left, &right)
                }
            }
        )+
    };
}

comparison_operators! {
    Less => PartialOrd::lt,
    LessEqual => PartialOrd::le,
    Greater => PartialOrd::gt,
    GreaterEqual => PartialOrd::ge,
    Equal => PartialEq::eq,
    NotEqual => PartialEq::ne,
}

impl<L: Borrow<bool>, R: Borrow<bool>> BinaryOperator<L, R> for LogicalAnd {
    type Output = bool;

    #[inline]
    fn apply(left: L, right: R) -> bool {
        *left.borrow() && *right.borrow()
    }
}

impl<L: Borrow<bool>, R: Borrow<bool>> BinaryOperator<L, R> for LogicalOr {
    type Output = bool;

    #[inline]
    fn apply(left: L, right: R) -> bool {
        *left.borrow() || *right.borrow()
    }
}

impl<T: Borrow<bool>> UnaryOperator<T> for LogicalNot {
    type Output = bool;

    #[inline]
    fn apply(operand: T) -> bool {
        !*operand.borrow()
    }
}

impl<T: ops::Neg> UnaryOperator<T> for Negate {
    type Output = T::Output;

    #[inline]
    fn apply(operand: T) -> T::Output {
        -operand
    }
}

impl<T: ops::Not> UnaryOperator<T> for Complement {
    type Output = T::Output;

    #[inline]
    fn apply(operand: T) -> T::Output {
        !operand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(<Plus as BinaryOperator<i32, i32>>::apply(7, 2), 9)]
    #[case(<Minus as BinaryOperator<i32, i32>>::apply(7, 2), 5)]
    #[case(<Times as BinaryOperator<i32, i32>>::apply(7, 2), 14)]
    #[case(<Divide as BinaryOperator<i32, i32>>::apply(7, 2), 3)]
    #[case(<Modulo as BinaryOperator<i32, i32>>::apply(7, 2), 1)]
    #[case(<BitwiseAnd as BinaryOperator<i32, i32>>::apply(0b1100, 0b1010), 0b1000)]
    #[case(<BitwiseOr as BinaryOperator<i32, i32>>::apply(0b1100, 0b1010), 0b1110)]
    #[case(<BitwiseXor as BinaryOperator<i32, i32>>::apply(0b1100, 0b1010), 0b0110)]
    fn integer_operators_mirror_native_ones(#[case] result: i32, #[case] expected: i32) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case(<Less as BinaryOperator<i32, i32>>::apply(1, 2), true)]
    #[case(<LessEqual as BinaryOperator<i32, i32>>::apply(2, 2), true)]
    #[case(<Greater as BinaryOperator<i32, i32>>::apply(1, 2), false)]
    #[case(<GreaterEqual as BinaryOperator<i32, i32>>::apply(1, 2), false)]
    #[case(<Equal as BinaryOperator<i32, i32>>::apply(3, 3), true)]
    #[case(<NotEqual as BinaryOperator<i32, i32>>::apply(3, 3), false)]
    #[case(<LogicalAnd as BinaryOperator<bool, bool>>::apply(true, false), false)]
    #[case(<LogicalOr as BinaryOperator<bool, bool>>::apply(true, false), true)]
    fn boolean_operators_mirror_native_ones(#[case] result: bool, #[case] expected: bool) {
        assert_eq!(result, expected);
    }

    #[rstest]
    fn unary_operators_mirror_native_ones() {
        assert_eq!(<Negate as UnaryOperator<i32>>::apply(7), -7);
        assert_eq!(<Complement as UnaryOperator<u8>>::apply(0b0000_1111), 0b1111_0000);
        assert!(!<Complement as UnaryOperator<bool>>::apply(true));
        assert!(<LogicalNot as UnaryOperator<bool>>::apply(false));
    }

    #[rstest]
    fn logical_operators_accept_borrowed_booleans() {
        let (yes, no) = (true, false);
        assert!(!<LogicalAnd as BinaryOperator<&bool, &bool>>::apply(&yes, &no));
        assert!(<LogicalOr as BinaryOperator<&bool, bool>>::apply(&no, true));
        assert!(<LogicalNot as UnaryOperator<&bool>>::apply(&no));
    }

    #[rstest]
    fn comparisons_accept_mixed_operand_types() {
        let text = String::from("abc");
        assert!(<Equal as BinaryOperator<String, &str>>::apply(text, "abc"));
    }

    #[rstest]
    fn comparisons_of_incomparable_floats_are_false() {
        assert!(!<Less as BinaryOperator<f64, f64>>::apply(f64::NAN, 1.0));
        assert!(<NotEqual as BinaryOperator<f64, f64>>::apply(f64::NAN, f64::NAN));
    }

    #[rstest]
    fn integer_division_truncates_toward_zero() {
        assert_eq!(<Divide as BinaryOperator<i32, i32>>::apply(-7, 2), -3);
        assert_eq!(<Modulo as BinaryOperator<i32, i32>>::apply(-7, 2), -1);
    }

    #[rstest]
    fn symbols_match_source_operators() {
        assert_eq!(Plus::SYMBOL, "+");
        assert_eq!(LessEqual::SYMBOL, "<=");
        assert_eq!(LogicalOr::SYMBOL, "||");
        assert_eq!(Complement::SYMBOL, "!");
    }
}
