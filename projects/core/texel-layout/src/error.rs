use crate::FormatId;
use thiserror::Error;

/// Result type for layout calculations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Errors produced while computing the memory layout of an image.
///
/// Classifying a format never fails; only pitch and size calculations return these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A planar format requires an even height, but an odd one was supplied.
    ///
    /// Affects [`FormatId::NV12`], [`FormatId::Opaque420`], [`FormatId::P010`],
    /// [`FormatId::P016`] and [`FormatId::V208`].
    #[error("Format {format} requires an even height, got {height}")]
    InvalidHeight {
        /// The planar format being laid out.
        format: FormatId,
        /// The offending height.
        height: i64,
    },

    /// The format has no defined row pitch ([`FormatId::Y410`], [`FormatId::Y416`]), so the size
    /// of its data cannot be determined.
    #[error("Format {0} has no defined memory layout")]
    UnsupportedLayout(FormatId),

    /// The format has no element size, so no image can be stored in it.
    #[error("Format {0} cannot be used to size an image")]
    UnsupportedFormat(FormatId),

    /// The size of the image does not fit in an `i64`.
    #[error("Size of the {0} image overflows")]
    Overflow(FormatId),
}
