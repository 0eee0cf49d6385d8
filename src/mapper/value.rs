//! Constant mappers.

use std::fmt;

use super::Mapper;
use crate::MapperOps;

/// A mapper that ignores its arguments and returns a stored value.
///
/// The value is moved in once at construction and never changes; each call
/// returns a clone of it. This is how constants take part in the operator
/// algebra: `_1 + 5` wraps the `5` in a `Value`.
///
/// # Examples
///
/// ```rust
/// use argmap::{Mapper, val};
///
/// let greeting = val(String::from("hello"));
///
/// assert_eq!(greeting.call(()), "hello");
/// assert_eq!(greeting.call((1, 2, 3)), "hello");
/// ```
#[derive(Clone, Copy, Debug, Default, MapperOps)]
pub struct Value<T> {
    value: T,
}

impl<T> Value<T> {
    /// Creates a mapper that always returns `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Consumes the mapper, returning the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, Args> Mapper<Args> for Value<T> {
    type Output = T;

    #[inline]
    fn call(&self, _args: Args) -> T {
        self.value.clone()
    }
}

impl<T: fmt::Debug> fmt::Display for Value<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?}", self.value)
    }
}

/// Wraps any value into a constant mapper.
///
/// Plain numbers, `bool`, `char` and strings are wrapped automatically when
/// they appear next to a mapper in an operator. Other types, such as user
/// structs, go through `val`.
///
/// # Examples
///
/// ```rust
/// use argmap::{Mapper, val, _1};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Meters(f64);
///
/// impl std::ops::Add for Meters {
///     type Output = Meters;
///     fn add(self, other: Meters) -> Meters {
///         Meters(self.0 + other.0)
///     }
/// }
///
/// let shifted = _1 + val(Meters(1.5));
/// assert_eq!(shifted.call((Meters(2.0),)), Meters(3.5));
/// ```
#[inline]
pub const fn val<T>(value: T) -> Value<T> {
    Value::new(value)
}
