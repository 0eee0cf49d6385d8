//! Derive macro for argmap mapper composition.
//!
//! This crate provides the procedural macro that turns a type into a
//! participant of the argmap operator algebra.
//!
//! # Available Derive Macros
//!
//! - [`MapperOps`]: Marks a type as `Composable` and generates the operator
//!   overload set for it
//!
//! # Example
//!
//! ```rust,ignore
//! use argmap::{Mapper, MapperOps, _1};
//!
//! #[derive(Clone, Copy, MapperOps)]
//! struct Square;
//!
//! impl<A: Copy + std::ops::Mul<Output = A>> Mapper<(A,)> for Square {
//!     type Output = A;
//!
//!     fn call(&self, (value,): (A,)) -> A {
//!         value * value
//!     }
//! }
//!
//! // Square now composes with selectors and constants.
//! let mapper = Square + _1 + 1;
//! assert_eq!(mapper.call((3,)), 13);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod mapper_ops;

use proc_macro::TokenStream;

/// Derive macro that makes a type composable with argmap operators.
///
/// The deriving type is expected to implement `argmap::Mapper<Args>` for the
/// argument tuples it supports. The derive itself does not look at the
/// fields; it only stamps the capability marker and the operator overloads.
///
/// # Generated Code
///
/// For a type `T`, generates:
///
/// ```rust,ignore
/// impl argmap::Composable for T {}
///
/// // For Add, Sub, Mul, Div, Rem, BitAnd, BitOr and BitXor:
/// impl<Rhs: argmap::IntoMapper> core::ops::Add<Rhs> for T {
///     type Output = argmap::Binary<argmap::operator::Plus, T, Rhs::Mapper>;
///     ...
/// }
///
/// // For every primitive number type and bool, so `5 + T` composes too:
/// impl core::ops::Add<T> for i32 {
///     type Output = argmap::Binary<argmap::operator::Plus, argmap::Value<i32>, T>;
///     ...
/// }
///
/// impl core::ops::Neg for T { type Output = argmap::Unary<argmap::operator::Negate, T>; ... }
/// impl core::ops::Not for T { type Output = argmap::Unary<argmap::operator::Complement, T>; ... }
/// ```
///
/// # Requirements
///
/// - The type must be a struct or an enum (unions are rejected)
/// - The generic parameter name `__ArgmapRhs` is reserved
///
/// # Generics
///
/// Generic parameters and where clauses are carried over to every
/// generated impl, including const generics:
///
/// ```rust,ignore
/// #[derive(Clone, Copy, MapperOps)]
/// struct Scaled<const FACTOR: i64>;
/// ```
#[proc_macro_derive(MapperOps)]
pub fn derive_mapper_ops(input: TokenStream) -> TokenStream {
    mapper_ops::derive_mapper_ops_impl(input)
}
