use texel_layout::{FormatId, LayoutError};
use thiserror::Error;

/// Result type for DDS header parsing.
pub type DdsResult<T> = Result<T, DdsError>;

/// Reasons a DDS header could not be turned into an image description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DdsError {
    #[error("Data does not start with the 'DDS ' magic")]
    NotADds,

    #[error("DDS data is too short: {required} bytes required, got {actual}")]
    TooShort { required: usize, actual: usize },

    #[error("Invalid DDS header size {0}, expected 124")]
    InvalidHeaderSize(u32),

    #[error("Invalid DDS pixel format size {0}, expected 32")]
    InvalidPixelFormatSize(u32),

    #[error("DX10 header has an array size of 0")]
    InvalidArraySize,

    /// The DX10 header names a code that is not a known format, or names `DXGI_FORMAT_UNKNOWN`.
    #[error("DX10 header names unknown DXGI format {0}")]
    UnknownDxgiFormat(u32),

    /// No entry of the legacy conversion table matches the pixel format,
    /// or the match needs expansion and expansion was disallowed.
    #[error(
        "Unsupported legacy pixel format (flags {flags:#x}, fourcc {fourcc:#010x}, {bit_count} bpp)"
    )]
    UnsupportedLegacyFormat {
        flags: u32,
        fourcc: u32,
        bit_count: u32,
    },

    #[error("Invalid DX10 resource dimension {0}")]
    InvalidResourceDimension(u32),

    /// A DX10 3D texture is missing the volume flag in the main header.
    #[error("3D texture header is missing the volume flag")]
    MissingVolumeFlag,

    /// Legacy cube maps must store all six faces.
    #[error("Cube map does not contain all six faces")]
    IncompleteCubeMap,

    #[error("Block compressed format {format} needs dimensions divisible by 4, got {width}x{height}")]
    UnalignedCompressedDimensions {
        format: FormatId,
        width: u32,
        height: u32,
    },

    /// The header declares more mip levels than a full chain of the image has.
    #[error("DDS header declares {mip_count} mip levels, a full chain has {max}")]
    InvalidMipCount { mip_count: u32, max: u32 },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
