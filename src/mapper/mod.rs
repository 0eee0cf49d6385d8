//! The mapper capability and the wrapping rule.
//!
//! A mapper is anything invocable with an argument tuple that returns a
//! value derived from it. This module defines:
//!
//! - [`Mapper`]: The invocation contract
//! - [`Composable`]: The capability marker for types that take part in the
//!   operator algebra
//! - [`IntoMapper`]: The wrapping rule, turning plain values into [`Value`]
//!   mappers and leaving mappers untouched
//!
//! and the leaf mappers: [`Arg`] (positional selection), [`Value`] (constants)
//! and [`Lifted`] (arbitrary callables).
//!
//! # Laws
//!
//! - **Selection**: `Arg::<N>.call((a0, .., ak)) == aN` for `k >= N`
//! - **Constant**: `val(v).call(args) == v` for every `args`, including `()`
//! - **Wrapping idempotence**: `m.into_mapper()` behaves like `m` for every
//!   composable `m`

mod lifted;
mod selector;
mod value;

pub use lifted::{Lifted, lift};
pub use selector::{Arg, Nth, arg};
pub use value::{Value, val};

/// A callable that maps an argument tuple to a value.
///
/// `Args` is the whole argument list of a call as a tuple: `()` for no
/// arguments, `(A,)` for one, `(A, B)` for two and so on. The tuple is taken
/// by value so by-value arguments stay movable and `&T` / `&mut T` arguments
/// can be handed back as the same references.
///
/// Implementations are expected to be deterministic and free of side effects.
///
/// # Closures
///
/// Every `Fn` closure of up to six arguments is a mapper for the tuple of its
/// argument types, so code bounded on `Mapper` accepts plain closures too:
///
/// ```rust
/// use argmap::{Mapper, _2};
///
/// fn apply<M: Mapper<(i32, i32), Output = i32>>(mapper: &M) -> i32 {
///     mapper.call((3, 4))
/// }
///
/// assert_eq!(apply(&_2), 4);
/// assert_eq!(apply(&|first: i32, second: i32| first * second), 12);
/// ```
pub trait Mapper<Args> {
    /// The type produced by the mapper.
    type Output;

    /// Invokes the mapper with the given argument tuple.
    fn call(&self, args: Args) -> Self::Output;
}

/// Capability marker for types that participate in mapper composition.
///
/// Types carrying this marker are used as-is by the wrapping rule and get
/// the operator overload set. Implement it through
/// [`#[derive(MapperOps)]`](crate::MapperOps) rather than by hand; the derive
/// also generates the operators.
pub trait Composable {}

/// The wrapping rule: converts an operand into a mapper.
///
/// Composable types convert to themselves. Plain values (numbers, `bool`,
/// `char`, strings and `()`, and shared references to them) convert to a
/// [`Value`] holding them. Other values are wrapped explicitly with [`val`].
///
/// # Examples
///
/// ```rust
/// use argmap::{IntoMapper, Mapper, _1};
///
/// let constant = 5_i32.into_mapper();
/// assert_eq!(constant.call(("ignored",)), 5);
///
/// let selector = _1.into_mapper();
/// assert_eq!(selector.call(("picked",)), "picked");
/// ```
pub trait IntoMapper {
    /// Whether the type is already a mapper.
    const IS_MAPPER: bool;

    /// The mapper the operand turns into.
    type Mapper;

    /// Converts the operand into its mapper.
    fn into_mapper(self) -> Self::Mapper;
}

impl<T: Composable> IntoMapper for T {
    const IS_MAPPER: bool = true;

    type Mapper = Self;

    #[inline]
    fn into_mapper(self) -> Self {
        self
    }
}

macro_rules! impl_into_mapper_for_values {
    ($($value:ty),+ $(,)?) => {
        $(
            impl IntoMapper for $value {
                const IS_MAPPER: bool = false;

                type Mapper = Value<Self>;

                #[inline]
                fn into_mapper(self) -> Value<Self> {
                    Value::new(self)
                }
            }

            impl<'a> IntoMapper for &'a $value {
                const IS_MAPPER: bool = false;

                type Mapper = Value<Self>;

                #[inline]
                fn into_mapper(self) -> Value<Self> {
                    Value::new(self)
                }
            }
        )+
    };
}

impl_into_mapper_for_values!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
    (),
);

impl<'a> IntoMapper for &'a str {
    const IS_MAPPER: bool = false;

    type Mapper = Value<&'a str>;

    #[inline]
    fn into_mapper(self) -> Value<&'a str> {
        Value::new(self)
    }
}

/// Returns whether `T` is a mapper, as opposed to a plain value.
///
/// # Examples
///
/// ```rust
/// use argmap::{Arg, Value, is_mapper};
///
/// assert!(is_mapper::<Arg<0>>());
/// assert!(is_mapper::<Value<String>>());
/// assert!(!is_mapper::<i32>());
/// assert!(!is_mapper::<&str>());
/// ```
#[must_use]
pub const fn is_mapper<T: IntoMapper>() -> bool {
    T::IS_MAPPER
}

macro_rules! impl_mapper_for_fn {
    ($($argument:ident),*) => {
        impl<Function, Out, $($argument),*> Mapper<($($argument,)*)> for Function
        where
            Function: Fn($($argument),*) -> Out,
        {
            type Output = Out;

            #[inline]
            #[allow(non_snake_case)]
            fn call(&self, ($($argument,)*): ($($argument,)*)) -> Out {
                self($($argument),*)
            }
        }
    };
}

impl_mapper_for_fn!();
impl_mapper_for_fn!(A);
impl_mapper_for_fn!(A, B);
impl_mapper_for_fn!(A, B, C);
impl_mapper_for_fn!(A, B, C, D);
impl_mapper_for_fn!(A, B, C, D, E);
impl_mapper_for_fn!(A, B, C, D, E, F);
