use std::sync::Arc;

/// A plain-valued twin of a low-level object.
///
/// Conversion is total: every low object has exactly one high form, and
/// building it never fails (nested schemas stay behind proxies). The high
/// object keeps its low object for diagnostics such as source positions.
pub trait HighModel: Sized {
    type Low;

    fn from_low(low: Arc<Self::Low>) -> Self;

    /// The low object this was built from. Nested high objects point at the
    /// very nested low objects their parent's low object holds.
    fn low(&self) -> &Self::Low;
}
