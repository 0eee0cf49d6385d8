//! Composers: mappers built from other mappers and an operator.
//!
//! Composers are what operators on mappers return. Nothing is evaluated when
//! a composer is built; the operands are stored by value and evaluated each
//! time the composer is called.
//!
//! - [`Unary`]: `Op(operand(args))`
//! - [`Binary`]: `Op(left(args), right(args))`, left evaluated first
//! - [`MapperExt`]: named builders for operators Rust cannot overload into an
//!   expression tree (comparisons, `&&`, `||`), plus closure adapters
//!
//! # Examples
//!
//! ```rust
//! use argmap::prelude::*;
//!
//! // Builds Binary<Plus, Binary<Times, Arg<1>, Value<i32>>, Arg<0>>.
//! let mapper = _2 * 3 + _1;
//!
//! assert_eq!(mapper.call((1, 4)), 13);
//! assert_eq!(mapper.to_string(), "((_2 * 3) + _1)");
//! ```

mod binary;
mod builder;
mod unary;

pub use binary::Binary;
pub use builder::MapperExt;
pub use unary::Unary;
