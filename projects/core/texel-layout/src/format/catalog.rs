//! Raw per-format attribute tables.
//!
//! Every function here is total over [`FormatId`]: formats that a table does not list fall back to
//! `0`, `false` or [`FormatId::Unknown`]. Prefer [`crate::classify`], which returns all of these
//! precomputed in a single [`FormatInfo`](crate::FormatInfo).

use super::FormatId;
use super::FormatId::*;

/// Total number of bits used by a single texel.
///
/// Block compressed formats report the size of a whole 4x4 block.
pub const fn bit_depth(id: FormatId) -> u32 {
    match id {
        R32G32B32A32_Typeless | R32G32B32A32_Float | R32G32B32A32_UInt | R32G32B32A32_SInt
        | BC2_Typeless | BC2_UNorm | BC2_UNorm_SRgb | BC3_Typeless | BC3_UNorm | BC3_UNorm_SRgb
        | BC5_Typeless | BC5_UNorm | BC5_SNorm | BC6H_Typeless | BC6H_Uf16 | BC6H_Sf16
        | BC7_Typeless | BC7_UNorm | BC7_UNorm_SRgb => 128,

        R32G32B32_Typeless | R32G32B32_Float | R32G32B32_UInt | R32G32B32_SInt => 96,

        BC1_Typeless | BC1_UNorm | BC1_UNorm_SRgb | BC4_Typeless | BC4_UNorm | BC4_SNorm
        | R32G32_Typeless | R32G32_Float | R32G32_UInt | R32G32_SInt | R32G8X24_Typeless
        | D32_Float_S8X24_UInt | R32_Float_X8X24_Typeless | X32_Typeless_G8X24_UInt
        | R16G16B16A16_Typeless | R16G16B16A16_Float | R16G16B16A16_UNorm | R16G16B16A16_UInt
        | R16G16B16A16_SNorm | R16G16B16A16_SInt => 64,

        R32_Typeless | D32_Float | R32_Float | R32_UInt | R32_SInt | R24G8_Typeless
        | D24_UNorm_S8_UInt | R24_UNorm_X8_Typeless | X24_Typeless_G8_UInt | R16G16_Typeless
        | R16G16_Float | R16G16_UNorm | R16G16_UInt | R16G16_SNorm | R16G16_SInt
        | R10G10B10A2_Typeless | R10G10B10A2_UNorm | R10G10B10A2_UInt
        | R10G10B10_Xr_Bias_A2_UNorm | R11G11B10_Float | R8G8B8A8_Typeless | R8G8B8A8_UNorm
        | R8G8B8A8_UNorm_SRgb | R8G8B8A8_UInt | R8G8B8A8_SNorm | R8G8B8A8_SInt
        | B8G8R8A8_UNorm | B8G8R8A8_Typeless | B8G8R8A8_UNorm_SRgb | B8G8R8X8_UNorm
        | B8G8R8X8_Typeless | B8G8R8X8_UNorm_SRgb | R8G8_B8G8_UNorm | G8R8_G8B8_UNorm | Y410
        | Y416 | AYUV | R9G9B9E5_SharedExp => 32,

        R16_Typeless | R16_Float | D16_UNorm | R16_UNorm | R16_UInt | R16_SNorm | R16_SInt
        | R8G8_Typeless | R8G8_UNorm | R8G8_UInt | R8G8_SNorm | R8G8_SInt | B5G5R5A1_UNorm
        | B5G6R5_UNorm | B4G4R4A4_UNorm | A8P8 | P010 | P016 | Y210 | Y216 | YUY2 | NV11 | NV12
        | Opaque420 | P208 | V208 | V408 => 16,

        R8_Typeless | R8_UNorm | R8_UInt | R8_SNorm | R8_SInt | A8_UNorm | AI44 | IA44 | P8
        | R1_UNorm => 8,

        _ => 0,
    }
}

/// Number of distinct channels stored per texel.
///
/// Block compressed, YUV and planar formats report `0`.
pub const fn component_count(id: FormatId) -> u32 {
    match id {
        R32G32B32A32_Typeless | R32G32B32A32_Float | R32G32B32A32_UInt | R32G32B32A32_SInt
        | R16G16B16A16_Typeless | R16G16B16A16_Float | R16G16B16A16_UNorm | R16G16B16A16_UInt
        | R16G16B16A16_SNorm | R16G16B16A16_SInt | R10G10B10A2_Typeless | R10G10B10A2_UNorm
        | R10G10B10A2_UInt | R10G10B10_Xr_Bias_A2_UNorm | R8G8_B8G8_UNorm | G8R8_G8B8_UNorm
        | R8G8B8A8_Typeless | R8G8B8A8_UNorm | R8G8B8A8_UNorm_SRgb | R8G8B8A8_UInt
        | R8G8B8A8_SNorm | R8G8B8A8_SInt | B8G8R8A8_UNorm | B8G8R8A8_Typeless
        | B8G8R8A8_UNorm_SRgb | B5G5R5A1_UNorm | B4G4R4A4_UNorm => 4,

        B8G8R8X8_UNorm | B8G8R8X8_Typeless | B8G8R8X8_UNorm_SRgb | B5G6R5_UNorm
        | R32G32B32_Typeless | R32G32B32_Float | R32G32B32_UInt | R32G32B32_SInt
        | R11G11B10_Float | R9G9B9E5_SharedExp => 3,

        R32G32_Typeless | R32G32_Float | R32G32_UInt | R32G32_SInt | R32G8X24_Typeless
        | R16G16_Typeless | R16G16_Float | R16G16_UNorm | R16G16_UInt | R16G16_SNorm
        | R16G16_SInt | R24G8_Typeless | R8G8_Typeless | R8G8_UNorm | R8G8_UInt | R8G8_SNorm
        | R8G8_SInt | A8P8 | AI44 | IA44 | D24_UNorm_S8_UInt | D32_Float_S8X24_UInt => 2,

        R32_Float_X8X24_Typeless | X32_Typeless_G8X24_UInt | R32_Typeless | D32_Float
        | R32_Float | R32_UInt | R32_SInt | R24_UNorm_X8_Typeless | X24_Typeless_G8_UInt
        | R16_Typeless | R16_Float | D16_UNorm | R16_UNorm | R16_UInt | R16_SNorm | R16_SInt
        | R8_Typeless | R8_UNorm | R8_UInt | R8_SNorm | R8_SInt | A8_UNorm | P8 | R1_UNorm => 1,

        _ => 0,
    }
}

/// The typeless family a format belongs to.
///
/// Typed formats map to the typeless head of their family, typeless heads map to themselves.
/// Formats without a family map to [`FormatId::Unknown`].
pub const fn group(id: FormatId) -> FormatId {
    match id {
        B8G8R8A8_Typeless | B8G8R8A8_UNorm | B8G8R8A8_UNorm_SRgb => B8G8R8A8_Typeless,
        B8G8R8X8_Typeless | B8G8R8X8_UNorm | B8G8R8X8_UNorm_SRgb => B8G8R8X8_Typeless,
        BC1_Typeless | BC1_UNorm | BC1_UNorm_SRgb => BC1_Typeless,
        BC2_Typeless | BC2_UNorm | BC2_UNorm_SRgb => BC2_Typeless,
        BC3_Typeless | BC3_UNorm | BC3_UNorm_SRgb => BC3_Typeless,
        BC4_Typeless | BC4_UNorm | BC4_SNorm => BC4_Typeless,
        BC5_Typeless | BC5_UNorm | BC5_SNorm => BC5_Typeless,
        BC6H_Typeless | BC6H_Uf16 | BC6H_Sf16 => BC6H_Typeless,
        BC7_Typeless | BC7_UNorm | BC7_UNorm_SRgb => BC7_Typeless,
        R10G10B10A2_Typeless | R10G10B10A2_UNorm | R10G10B10A2_UInt => R10G10B10A2_Typeless,
        R16_Typeless | R16_Float | R16_UNorm | R16_UInt | R16_SNorm | R16_SInt => R16_Typeless,
        R16G16_Typeless | R16G16_Float | R16G16_UNorm | R16G16_UInt | R16G16_SNorm
        | R16G16_SInt => R16G16_Typeless,
        R16G16B16A16_Typeless | R16G16B16A16_Float | R16G16B16A16_UNorm | R16G16B16A16_UInt
        | R16G16B16A16_SNorm | R16G16B16A16_SInt => R16G16B16A16_Typeless,
        R32_Typeless | R32_Float | R32_UInt | R32_SInt => R32_Typeless,
        R32G32_Typeless | R32G32_Float | R32G32_UInt | R32G32_SInt => R32G32_Typeless,
        R32G32B32_Typeless | R32G32B32_Float | R32G32B32_UInt | R32G32B32_SInt => {
            R32G32B32_Typeless
        }
        R32G32B32A32_Typeless | R32G32B32A32_Float | R32G32B32A32_UInt | R32G32B32A32_SInt => {
            R32G32B32A32_Typeless
        }
        R8_Typeless | R8_UNorm | R8_UInt | R8_SNorm | R8_SInt => R8_Typeless,
        R8G8_Typeless | R8G8_UNorm | R8G8_UInt | R8G8_SNorm | R8G8_SInt => R8G8_Typeless,
        R8G8B8A8_Typeless | R8G8B8A8_UNorm | R8G8B8A8_UNorm_SRgb | R8G8B8A8_UInt
        | R8G8B8A8_SNorm | R8G8B8A8_SInt => R8G8B8A8_Typeless,
        B4G4R4A4_UNorm => B4G4R4A4_UNorm,
        _ => Unknown,
    }
}

/// Whether the format fixes only the bit layout of its channels.
///
/// This is the raw table; [`FormatInfo`](crate::FormatInfo) additionally reports
/// [`FormatId::Unknown`] as typeless.
pub const fn is_typeless(id: FormatId) -> bool {
    matches!(
        id,
        R32G32B32A32_Typeless
            | R32G32B32_Typeless
            | R32G32_Typeless
            | R32G8X24_Typeless
            | R32_Float_X8X24_Typeless
            | X32_Typeless_G8X24_UInt
            | R16G16B16A16_Typeless
            | R32_Typeless
            | R24G8_Typeless
            | R24_UNorm_X8_Typeless
            | R16G16_Typeless
            | R10G10B10A2_Typeless
            | R8G8B8A8_Typeless
            | B8G8R8A8_Typeless
            | B8G8R8X8_Typeless
            | R16_Typeless
            | R8G8_Typeless
            | R8_Typeless
            | BC1_Typeless
            | BC2_Typeless
            | BC3_Typeless
            | BC4_Typeless
            | BC5_Typeless
            | BC6H_Typeless
            | BC7_Typeless
    )
}

/// Block compressed (BC1 through BC7) formats, laid out in 4x4 blocks.
pub const fn is_compressed(id: FormatId) -> bool {
    matches!(
        id,
        BC1_Typeless
            | BC1_UNorm
            | BC1_UNorm_SRgb
            | BC2_Typeless
            | BC2_UNorm
            | BC2_UNorm_SRgb
            | BC3_Typeless
            | BC3_UNorm
            | BC3_UNorm_SRgb
            | BC4_Typeless
            | BC4_UNorm
            | BC4_SNorm
            | BC5_Typeless
            | BC5_UNorm
            | BC5_SNorm
            | BC6H_Typeless
            | BC6H_Uf16
            | BC6H_Sf16
            | BC7_Typeless
            | BC7_UNorm
            | BC7_UNorm_SRgb
    )
}

/// Block compressed formats that store a 4x4 block in 8 bytes rather than 16.
pub const fn is_half_block(id: FormatId) -> bool {
    matches!(
        id,
        BC1_Typeless | BC1_UNorm | BC1_UNorm_SRgb | BC4_Typeless | BC4_UNorm | BC4_SNorm
    )
}

/// Video formats that store luma and chroma in separate planes.
pub const fn is_planar(id: FormatId) -> bool {
    matches!(
        id,
        NV12 | P010 | P016 | Opaque420 | NV11 | P208 | V208 | V408
    )
}

/// Formats where horizontally adjacent texels share chroma samples.
pub const fn is_packed(id: FormatId) -> bool {
    matches!(
        id,
        R8G8_B8G8_UNorm | G8R8_G8B8_UNorm | YUY2 | Y210 | Y216 | Y410 | Y416
    )
}

/// Formats whose color channels are sRGB encoded.
pub const fn is_srgb(id: FormatId) -> bool {
    matches!(
        id,
        R8G8B8A8_UNorm_SRgb
            | B8G8R8A8_UNorm_SRgb
            | B8G8R8X8_UNorm_SRgb
            | BC1_UNorm_SRgb
            | BC2_UNorm_SRgb
            | BC3_UNorm_SRgb
            | BC7_UNorm_SRgb
    )
}

/// Formats that store an alpha channel. Palettized [`FormatId::A8P8`] is not one of them.
pub const fn has_alpha(id: FormatId) -> bool {
    matches!(
        id,
        R32G32B32A32_Typeless
            | R32G32B32A32_Float
            | R32G32B32A32_UInt
            | R32G32B32A32_SInt
            | R16G16B16A16_Typeless
            | R16G16B16A16_Float
            | R16G16B16A16_UNorm
            | R16G16B16A16_UInt
            | R16G16B16A16_SNorm
            | R16G16B16A16_SInt
            | R10G10B10A2_Typeless
            | R10G10B10A2_UNorm
            | R10G10B10A2_UInt
            | R10G10B10_Xr_Bias_A2_UNorm
            | R8G8B8A8_Typeless
            | R8G8B8A8_UNorm
            | R8G8B8A8_UNorm_SRgb
            | R8G8B8A8_UInt
            | R8G8B8A8_SNorm
            | R8G8B8A8_SInt
            | BC1_Typeless
            | BC1_UNorm
            | BC1_UNorm_SRgb
            | BC2_Typeless
            | BC2_UNorm
            | BC2_UNorm_SRgb
            | BC3_Typeless
            | BC3_UNorm
            | BC3_UNorm_SRgb
            | BC7_Typeless
            | BC7_UNorm
            | BC7_UNorm_SRgb
            | B8G8R8A8_UNorm
            | B8G8R8A8_Typeless
            | B8G8R8A8_UNorm_SRgb
            | B5G5R5A1_UNorm
            | B4G4R4A4_UNorm
            | A8_UNorm
    )
}

/// Returns `(has_depth, has_stencil)`.
pub const fn depth_stencil_state(id: FormatId) -> (bool, bool) {
    match id {
        D24_UNorm_S8_UInt | D32_Float_S8X24_UInt => (true, true),
        D32_Float | D16_UNorm => (true, false),
        _ => (false, false),
    }
}

/// Formats whose texels index a palette.
pub const fn is_palettized(id: FormatId) -> bool {
    matches!(id, P8 | A8P8)
}
