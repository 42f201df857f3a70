//! Consuming builders.

/// A builder that produces one immutable DSL value.
///
/// `build` takes the builder by value, so a builder can produce at most one
/// object. Calling it twice does not compile:
///
/// ```compile_fail
/// use search_dsl_core::ObjectBuilder;
///
/// #[derive(Default)]
/// struct CountBuilder {
///     count: Option<u32>,
/// }
///
/// impl ObjectBuilder for CountBuilder {
///     type Output = u32;
///
///     fn build(self) -> search_dsl_core::Result<u32> {
///         Ok(self.count.unwrap_or_default())
///     }
/// }
///
/// let builder = CountBuilder::default();
/// let first = builder.build();
/// let second = builder.build();
/// ```
pub trait ObjectBuilder: Sized {
    type Output;

    /// Validate required fields and produce the value.
    fn build(self) -> crate::Result<Self::Output>;
}
