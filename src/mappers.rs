//! The named vocabulary: `_1` through `_20`.
//!
//! Each constant selects one argument of a call, counting from one. Together
//! with [`val`](crate::val) these are the only symbols expression code is
//! expected to name; everything else is reached through operators.
//!
//! # Examples
//!
//! ```rust
//! use argmap::prelude::*;
//!
//! let mapper = _2 * val(3) + _1;
//! assert_eq!(mapper.call((1, 4)), 13);
//! ```

use crate::mapper::Arg;

macro_rules! named_arguments {
    ($($name:ident => $index:literal),+ $(,)?) => {
        $(
            #[doc = concat!("Selects the argument at zero based position ", stringify!($index), ".")]
            pub const $name: Arg<$index> = Arg;
        )+
    };
}

named_arguments! {
    _1 => 0,
    _2 => 1,
    _3 => 2,
    _4 => 3,
    _5 => 4,
    _6 => 5,
    _7 => 6,
    _8 => 7,
    _9 => 8,
    _10 => 9,
    _11 => 10,
    _12 => 11,
    _13 => 12,
    _14 => 13,
    _15 => 14,
    _16 => 15,
    _17 => 16,
    _18 => 17,
    _19 => 18,
    _20 => 19,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::Mapper;
    use rstest::rstest;

    #[rstest]
    fn names_count_from_one() {
        let args = ("first", "second", "third");
        assert_eq!(_1.call(args), "first");
        assert_eq!(_2.call(args), "second");
        assert_eq!(_3.call(args), "third");
    }

    #[rstest]
    fn twentieth_name_selects_the_last_supported_position() {
        let args = (
            1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
        );
        assert_eq!(_10.call(args), 10);
        assert_eq!(_20.call(args), 20);
    }

    #[rstest]
    fn names_display_as_written() {
        assert_eq!(_1.to_string(), "_1");
        assert_eq!(_20.to_string(), "_20");
    }
}
