//! Mappers that report their invocations through `tracing`.

use std::fmt;

use crate::MapperOps;
use crate::mapper::Mapper;

/// A mapper that emits a `tracing` event every time it is called.
///
/// The wrapped mapper is evaluated unchanged; the event carries the label
/// given at construction, at `TRACE` level under the `argmap` target. Useful
/// for seeing which parts of an expression a stream actually evaluates.
///
/// Built with [`MapperExt::traced`](crate::MapperExt::traced).
#[derive(Clone, Copy, Debug, MapperOps)]
pub struct Traced<M> {
    label: &'static str,
    inner: M,
}

impl<M> Traced<M> {
    /// Wraps `inner`, reporting calls under `label`.
    #[inline]
    pub const fn new(label: &'static str, inner: M) -> Self {
        Self { label, inner }
    }

    /// Returns the label events are reported under.
    #[inline]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Consumes the wrapper, returning the traced mapper.
    #[inline]
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: Mapper<Args>, Args> Mapper<Args> for Traced<M> {
    type Output = M::Output;

    #[inline]
    fn call(&self, args: Args) -> M::Output {
        tracing::trace!(target: "argmap", mapper = self.label, "evaluating mapper");
        self.inner.call(args)
    }
}

impl<M: fmt::Display> fmt::Display for Traced<M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, formatter)
    }
}
