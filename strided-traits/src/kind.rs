//! Error classification shared by the workspace error enums.

/// Broad class of a failed call.
///
/// Mirrors the split between malformed arguments (wrong enum strings,
/// malformed tables), arguments outside their numeric domain (zero strides,
/// short buffers) and lookups that found no kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Argument has the wrong shape or names an unknown variant.
    Type,
    /// Argument is well-formed but outside the permitted numeric domain.
    Range,
    /// No kernel is registered for the resolved data type.
    Dispatch,
}
