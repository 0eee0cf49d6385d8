//! Integration tests for operator composition.
//!
//! Every operator on a mapper builds a composer instead of evaluating; the
//! composer evaluates its operands with the call arguments and applies the
//! native operator to their results.

use argmap::prelude::*;
use argmap::operator::{Plus, Times};
use argmap::{Arg, Binary, Unary, Value};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};

// Both operands of a binary composer see the argument tuple, so it must be
// `Clone`: shared references pass, `&mut` does not.
assert_impl_all!(Binary<Plus, Arg<0>, Value<i32>>: Mapper<(&'static i32,)>);
assert_not_impl_any!(Binary<Plus, Arg<0>, Value<i32>>: Mapper<(&'static mut i32,)>);
assert_impl_all!(Arg<0>: Mapper<(&'static mut i32,)>);

mod arithmetic {
    use super::*;

    #[rstest]
    fn selector_plus_constant() {
        assert_eq!((_1 + 5).call((10,)), 15);
    }

    #[rstest]
    fn selector_times_selector() {
        assert_eq!((_1 * _2).call((3, 4)), 12);
    }

    #[rstest]
    #[case(7, 2, 9, 5, 14, 3, 1)]
    #[case(-7, 2, -5, -9, -14, -3, -1)]
    #[case(10, 5, 15, 5, 50, 2, 0)]
    fn operators_match_native_integer_arithmetic(
        #[case] left: i32,
        #[case] right: i32,
        #[case] sum: i32,
        #[case] difference: i32,
        #[case] product: i32,
        #[case] quotient: i32,
        #[case] remainder: i32,
    ) {
        let args = (left, right);
        assert_eq!((_1 + _2).call(args), sum);
        assert_eq!((_1 - _2).call(args), difference);
        assert_eq!((_1 * _2).call(args), product);
        assert_eq!((_1 / _2).call(args), quotient);
        assert_eq!((_1 % _2).call(args), remainder);
    }

    #[rstest]
    fn floating_point_arithmetic() {
        let mapper = _1 * 0.5_f64 + _2;
        assert!((mapper.call((3.0, 0.25)) - 1.75).abs() < f64::EPSILON);
    }

    #[rstest]
    #[should_panic(expected = "attempt to divide by zero")]
    fn division_by_zero_behaves_like_the_native_operator() {
        let _ = (_1 / _2).call((1, 0));
    }

    #[rstest]
    fn string_concatenation_uses_the_native_add() {
        let mapper = _1 + "!";
        assert_eq!(mapper.call((String::from("hello"),)), "hello!");
    }

    #[rstest]
    fn arguments_passed_by_reference() {
        let left = 6;
        let right = 7;
        assert_eq!((_1 * _2).call((&left, &right)), 42);
    }

    #[rstest]
    fn precedence_follows_rust_operators() {
        let mapper = _2 * val(3) + _1;
        assert_eq!(mapper.call((1, 4)), 13);

        let grouped = _2 * (val(3) + _1);
        assert_eq!(grouped.call((1, 4)), 16);
    }

    #[rstest]
    fn composition_builds_a_tree_instead_of_a_number() {
        let mapper: Binary<Plus, Binary<Times, Arg<1>, Value<i32>>, Arg<0>> = _2 * 3 + _1;
        assert_eq!(mapper.left().right().get(), &3);
    }
}

mod plain_left_operands {
    use super::*;

    #[rstest]
    fn constant_on_the_left_is_wrapped() {
        assert_eq!((100_i32 - _1).call((1,)), 99);
        assert_eq!((2_u64 * _1).call((21_u64,)), 42);
        assert_eq!((1.0_f64 / _1).call((4.0,)), 0.25);
    }

    #[rstest]
    fn constant_on_the_left_keeps_operand_order() {
        assert_eq!((10_i32 % _1).call((4,)), 2);
        assert_eq!((0b1100_u8 ^ _1).call((0b1010_u8,)), 0b0110);
    }
}

mod bitwise {
    use super::*;

    #[rstest]
    fn binary_bitwise_operators() {
        let args = (0b1100_u8, 0b1010_u8);
        assert_eq!((_1 & _2).call(args), 0b1000);
        assert_eq!((_1 | _2).call(args), 0b1110);
        assert_eq!((_1 ^ _2).call(args), 0b0110);
    }

    #[rstest]
    fn bitwise_operators_on_booleans() {
        assert!((_1 | _2).call((false, true)));
        assert!(!(_1 & _2).call((false, true)));
        assert!((_1 ^ _2).call((false, true)));
    }

    #[rstest]
    fn complement_of_an_integer() {
        assert_eq!((!_1).call((0_u16,)), u16::MAX);
        assert_eq!((!_1).call((0_i32,)), -1);
    }
}

mod unary {
    use super::*;

    #[rstest]
    fn negation() {
        assert_eq!((-_1).call((7,)), -7);
        assert_eq!((-(_1 - _2)).call((1, 3)), 2);
    }

    #[rstest]
    fn not_of_a_boolean() {
        assert!(!(!_1).call((true,)));
        assert!((!_1).call((false,)));
    }

    #[rstest]
    fn logical_not_builder() {
        assert!(_1.less(3).logical_not().call((5,)));
    }

    #[rstest]
    fn unary_of_a_composer_is_a_unary_composer() {
        let mapper: Unary<_, Binary<_, Arg<0>, Value<i32>>> = -(_1 + 1);
        assert_eq!(mapper.call((1,)), -2);
    }
}

mod comparison_and_logic {
    use super::*;

    #[rstest]
    fn less_than_between_selectors() {
        assert!(_1.less(_2).call((2, 3)));
        assert!(!_1.less(_2).call((3, 2)));
    }

    #[rstest]
    fn comparison_with_constants() {
        let adult = _2.greater_equal(18);
        assert!(adult.call(("alice", 30)));
        assert!(!adult.call(("bob", 12)));
    }

    #[rstest]
    fn equality_of_computed_results() {
        let divides = (_1 % _2).equal(0);
        assert!(divides.call((12, 4)));
        assert!(divides.not_equal(true).call((12, 5)));
    }

    #[rstest]
    fn logical_combinations() {
        let inside = _1.greater(_2).and(_1.less(_3));
        let outside = _1.less_equal(_2).or(_1.greater_equal(_3));

        for value in -2..12 {
            let args = (value, 0, 10);
            assert_eq!(inside.call(args), value > 0 && value < 10);
            assert_eq!(outside.call(args), !inside.call(args));
        }
    }
}

mod reuse {
    use super::*;

    #[rstest]
    fn a_mapper_can_be_called_many_times() {
        let mapper = _1 * _1;
        let squares: Vec<i32> = (1..=4).map(|n| mapper.call((n,))).collect();
        assert_eq!(squares, vec![1, 4, 9, 16]);
    }

    #[rstest]
    fn composers_copy_their_operands() {
        let base = _1 + 1;
        let doubled = base * 2;
        let tripled = base * 3;

        assert_eq!(doubled.call((1,)), 4);
        assert_eq!(tripled.call((1,)), 6);
        assert_eq!(base.call((1,)), 2);
    }

    #[rstest]
    fn non_copy_operands_are_cloned_when_reused() {
        let expected = val(String::from("yes"));
        let first = _1.equal(expected.clone());
        let second = _2.equal(expected);

        let args = (String::from("yes"), String::from("no"));
        assert!(first.call(args.clone()));
        assert!(!second.call(args));
    }
}
