//! # argmap
//!
//! Composable argument mappers: small callable values that select, wrap and
//! combine the arguments of a call, resolved entirely at compile time.
//!
//! ## Overview
//!
//! Stream combinators usually take a transformation callable. For simple
//! transformations like "the second argument plus a constant" a closure is
//! more ceremony than the transformation itself. This crate lets such
//! transformations be written as expressions:
//!
//! - **Selectors**: [`_1`] through [`_20`] return the n-th argument of a call
//! - **Values**: [`val`] wraps a constant so it ignores the call arguments
//! - **Operators**: `+ - * / % & | ^`, unary `-` and `!` build composers
//! - **Named builders**: [`MapperExt`] covers comparison and logical operators,
//!   which Rust cannot overload into an expression tree
//!
//! Every expression is a [`Mapper`]; invoking it with an argument tuple
//! evaluates the tree. Nothing is evaluated when the expression is built.
//!
//! ## Feature Flags
//!
//! - `tracing`: [`Traced`] mappers that emit a `tracing` event per invocation
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use argmap::prelude::*;
//!
//! let mapper = _2 * 3 + _1;
//! assert_eq!(mapper.call((1, 4)), 13);
//!
//! let in_range = _1.greater_equal(0).and(_1.less(10));
//! assert!(in_range.call((7,)));
//! assert!(!in_range.call((12,)));
//! ```
//!
//! Misuse is rejected by the compiler. Selecting an argument the call does
//! not have is not a runtime error:
//!
//! ```compile_fail
//! use argmap::prelude::*;
//!
//! let third = _3;
//! third.call((1, 2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// The derive emits `::argmap::` paths; this lets the crate derive for itself.
extern crate self as argmap;

/// Prelude module for convenient imports.
///
/// Re-exports the named selectors, the value factory and the traits needed
/// to build and invoke mappers.
///
/// # Usage
///
/// ```rust
/// use argmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::mappers::*;

    pub use crate::composer::MapperExt;
    pub use crate::mapper::{Composable, IntoMapper, Mapper, arg, lift, val};

    pub use argmap_derive::MapperOps;
}

pub mod composer;
pub mod mapper;
pub mod mappers;
pub mod operator;

#[cfg(feature = "tracing")]
mod traced;

pub use argmap_derive::MapperOps;

pub use composer::{Binary, MapperExt, Unary};
pub use mapper::{
    Arg, Composable, IntoMapper, Lifted, Mapper, Nth, Value, arg, is_mapper, lift, val,
};
pub use mappers::*;

#[cfg(feature = "tracing")]
pub use traced::Traced;
