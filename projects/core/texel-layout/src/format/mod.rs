//! Format identifiers and their structural attributes.
//!
//! [`FormatId`] is the closed set of texel formats understood by this crate, using the same
//! numeric codes as `DXGI_FORMAT`. The [`catalog`] module holds the raw attribute tables.

pub mod catalog;

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// Prefix accepted (and ignored) when parsing a format from its name.
const DXGI_PREFIX: &str = "DXGI_FORMAT_";

macro_rules! format_ids {
    ($( $(#[$meta:meta])* $name:ident = $code:literal, )*) => {
        /// Identifies a texel format.
        ///
        /// The discriminant of each variant is its `DXGI_FORMAT` code. Codes are sparse: everything
        /// from `0` to `115` is defined, followed by the three planar video formats at `130..=132`.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AllValues)]
        #[repr(u32)]
        pub enum FormatId {
            $( $(#[$meta])* $name = $code, )*
        }

        impl FormatId {
            /// Converts a raw `DXGI_FORMAT` code into a [`FormatId`].
            ///
            /// # Return
            ///
            /// `None` if the code does not name a known format.
            pub const fn from_raw(code: u32) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$name), )*
                    _ => None,
                }
            }

            /// The name of the format, as written in this crate (e.g. `R8G8B8A8_UNorm_SRgb`).
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$name => stringify!($name), )*
                }
            }
        }
    };
}

format_ids! {
    /// Format is not known. This is a valid value, not an error state.
    Unknown = 0,
    R32G32B32A32_Typeless = 1,
    R32G32B32A32_Float = 2,
    R32G32B32A32_UInt = 3,
    R32G32B32A32_SInt = 4,
    R32G32B32_Typeless = 5,
    R32G32B32_Float = 6,
    R32G32B32_UInt = 7,
    R32G32B32_SInt = 8,
    R16G16B16A16_Typeless = 9,
    R16G16B16A16_Float = 10,
    R16G16B16A16_UNorm = 11,
    R16G16B16A16_UInt = 12,
    R16G16B16A16_SNorm = 13,
    R16G16B16A16_SInt = 14,
    R32G32_Typeless = 15,
    R32G32_Float = 16,
    R32G32_UInt = 17,
    R32G32_SInt = 18,
    R32G8X24_Typeless = 19,
    D32_Float_S8X24_UInt = 20,
    R32_Float_X8X24_Typeless = 21,
    X32_Typeless_G8X24_UInt = 22,
    R10G10B10A2_Typeless = 23,
    R10G10B10A2_UNorm = 24,
    R10G10B10A2_UInt = 25,
    R11G11B10_Float = 26,
    R8G8B8A8_Typeless = 27,
    R8G8B8A8_UNorm = 28,
    R8G8B8A8_UNorm_SRgb = 29,
    R8G8B8A8_UInt = 30,
    R8G8B8A8_SNorm = 31,
    R8G8B8A8_SInt = 32,
    R16G16_Typeless = 33,
    R16G16_Float = 34,
    R16G16_UNorm = 35,
    R16G16_UInt = 36,
    R16G16_SNorm = 37,
    R16G16_SInt = 38,
    R32_Typeless = 39,
    D32_Float = 40,
    R32_Float = 41,
    R32_UInt = 42,
    R32_SInt = 43,
    R24G8_Typeless = 44,
    D24_UNorm_S8_UInt = 45,
    R24_UNorm_X8_Typeless = 46,
    X24_Typeless_G8_UInt = 47,
    R8G8_Typeless = 48,
    R8G8_UNorm = 49,
    R8G8_UInt = 50,
    R8G8_SNorm = 51,
    R8G8_SInt = 52,
    R16_Typeless = 53,
    R16_Float = 54,
    D16_UNorm = 55,
    R16_UNorm = 56,
    R16_UInt = 57,
    R16_SNorm = 58,
    R16_SInt = 59,
    R8_Typeless = 60,
    R8_UNorm = 61,
    R8_UInt = 62,
    R8_SNorm = 63,
    R8_SInt = 64,
    A8_UNorm = 65,
    /// 1 bit per texel, single channel.
    R1_UNorm = 66,
    /// Three 9 bit mantissas sharing a 5 bit exponent.
    R9G9B9E5_SharedExp = 67,
    /// Packed RGB analogue of UYVY. Two texels share one red and one blue sample.
    R8G8_B8G8_UNorm = 68,
    /// Packed RGB analogue of YUY2. Two texels share one red and one blue sample.
    G8R8_G8B8_UNorm = 69,
    /// a.k.a. DXT1
    BC1_Typeless = 70,
    BC1_UNorm = 71,
    BC1_UNorm_SRgb = 72,
    /// a.k.a. DXT2/3
    BC2_Typeless = 73,
    BC2_UNorm = 74,
    BC2_UNorm_SRgb = 75,
    /// a.k.a. DXT4/5
    BC3_Typeless = 76,
    BC3_UNorm = 77,
    BC3_UNorm_SRgb = 78,
    /// a.k.a. ATI1
    BC4_Typeless = 79,
    BC4_UNorm = 80,
    BC4_SNorm = 81,
    /// a.k.a. ATI2
    BC5_Typeless = 82,
    BC5_UNorm = 83,
    BC5_SNorm = 84,
    B5G6R5_UNorm = 85,
    B5G5R5A1_UNorm = 86,
    B8G8R8A8_UNorm = 87,
    B8G8R8X8_UNorm = 88,
    R10G10B10_Xr_Bias_A2_UNorm = 89,
    B8G8R8A8_Typeless = 90,
    B8G8R8A8_UNorm_SRgb = 91,
    B8G8R8X8_Typeless = 92,
    B8G8R8X8_UNorm_SRgb = 93,
    BC6H_Typeless = 94,
    BC6H_Uf16 = 95,
    BC6H_Sf16 = 96,
    BC7_Typeless = 97,
    BC7_UNorm = 98,
    BC7_UNorm_SRgb = 99,
    AYUV = 100,
    Y410 = 101,
    Y416 = 102,
    /// 4:2:0 planar, 8 bits per channel. Luma plane followed by interleaved chroma.
    NV12 = 103,
    /// 4:2:0 planar, 10 bits per channel stored in 16 bit words.
    P010 = 104,
    /// 4:2:0 planar, 16 bits per channel.
    P016 = 105,
    /// Opaque 4:2:0 layout, sized like [`FormatId::NV12`]. Named `420_OPAQUE` in DXGI.
    Opaque420 = 106,
    YUY2 = 107,
    Y210 = 108,
    Y216 = 109,
    /// 4:1:1 planar.
    NV11 = 110,
    AI44 = 111,
    IA44 = 112,
    /// 8 bit palette index.
    P8 = 113,
    /// 8 bit palette index with 8 bits of alpha.
    A8P8 = 114,
    B4G4R4A4_UNorm = 115,
    /// 4:2:2 planar.
    P208 = 130,
    /// 4:4:0 planar.
    V208 = 131,
    /// 4:4:4 planar.
    V408 = 132,
}

impl FormatId {
    /// Number of known formats.
    pub const COUNT: usize = Self::all_values().len();

    /// Last code of the contiguous low range.
    const LAST_CONTIGUOUS_CODE: u32 = 115;
    /// Distance between the end of the contiguous range and the first planar video code.
    const SPARSE_GAP: u32 = 14;

    /// The raw `DXGI_FORMAT` code of this format.
    #[inline(always)]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Dense ordinal of this format, in `0..FormatId::COUNT`.
    ///
    /// Unlike [`FormatId::code`], this has no holes, so it can index a table with one entry per
    /// format.
    #[inline(always)]
    pub const fn index(self) -> usize {
        let code = self.code();
        if code <= Self::LAST_CONTIGUOUS_CODE {
            code as usize
        } else {
            (code - Self::SPARSE_GAP) as usize
        }
    }

    /// Inverse of [`FormatId::index`].
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }

        Some(Self::all_values()[index])
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<FormatId> for u32 {
    #[inline(always)]
    fn from(value: FormatId) -> Self {
        value.code()
    }
}

/// A raw format code did not match any [`FormatId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown DXGI format code: {0}")]
pub struct UnknownFormatCode(pub u32);

impl TryFrom<u32> for FormatId {
    type Error = UnknownFormatCode;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_raw(value).ok_or(UnknownFormatCode(value))
    }
}

/// A string did not name any [`FormatId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unrecognised format name")]
pub struct ParseFormatError;

impl FromStr for FormatId {
    type Err = ParseFormatError;

    /// Parses a format from its name.
    ///
    /// Matching ignores ASCII case and accepts an optional `DXGI_FORMAT_` prefix, so both
    /// `r8g8b8a8_unorm_srgb` and `DXGI_FORMAT_R8G8B8A8_UNORM_SRGB` resolve to
    /// [`FormatId::R8G8B8A8_UNorm_SRgb`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let name = match s.get(..DXGI_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(DXGI_PREFIX) => &s[DXGI_PREFIX.len()..],
            _ => s,
        };

        if name.eq_ignore_ascii_case("420_OPAQUE") {
            return Ok(Self::Opaque420);
        }

        Self::all_values()
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
            .ok_or(ParseFormatError)
    }
}
