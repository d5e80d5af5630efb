//! Pre-DX10 DDS files describe their pixels with a `DDS_PIXELFORMAT` (flags, FOURCC, bit count
//! and channel masks) rather than a `DXGI_FORMAT`. This module maps those descriptions onto a
//! [`FormatId`], along with the [`ConversionFlags`] a reader must apply when the stored layout
//! differs from the format's own (for example 24 bit RGB, which is expanded to `R8G8B8A8`).

use super::constants::*;
use bitflags::bitflags;
use endian_writer::{EndianReader, LittleEndianReader};
use texel_layout::{FormatId, PitchFlags};

bitflags! {
    /// Options that control how legacy (pre-DX10) headers are interpreted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DdsLegacyFlags: u32 {
        /// Rows of the stored data are padded to 4 bytes.
        const LEGACY_DWORD = 0x1;
        /// Refuse formats that would need expanding to a wider format.
        const NO_LEGACY_EXPANSION = 0x2;
        /// Do not swap red and blue for `R10G10B10A2` data written by D3DX.
        const NO_R10B10G10A2_FIX = 0x4;
        /// Read BGR(A/X) 32 bit data as RGBA, swizzling on load.
        const FORCE_RGB = 0x8;
        /// Expand 16 bit `B5G6R5`/`B5G5R5A1` data to 32 bit RGBA.
        const NO_16BPP = 0x10;
    }
}

bitflags! {
    /// Transformations a reader must apply to the stored data to obtain the reported format.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConversionFlags: u32 {
        /// Stored data is narrower than the reported format.
        const EXPAND = 0x1;
        /// Alpha must be set to opaque.
        const NO_ALPHA = 0x2;
        /// Red and blue are swapped.
        const SWIZZLE = 0x4;
        /// Texels are palette indices.
        const PALETTE = 0x8;
        const RGB888 = 0x10;
        const RGB565 = 0x20;
        const RGB5551 = 0x40;
        const RGB4444 = 0x80;
        const A4L4 = 0x100;
        const RGB332 = 0x200;
        const RGB8332 = 0x400;
        const A8P8 = 0x800;
        /// The file has a DX10 header.
        const DX10 = 0x10000;
    }
}

/// The `DDS_PIXELFORMAT` structure of a DDS header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DdsPixelFormat {
    pub flags: u32,
    pub fourcc: u32,
    pub bit_count: u32,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
}

impl DdsPixelFormat {
    pub(crate) const fn fourcc(fourcc: u32) -> Self {
        let mut format = Self::masks(DDPF_FOURCC, 0, 0, 0, 0, 0);
        format.fourcc = fourcc;
        format
    }

    pub(crate) const fn masks(
        flags: u32,
        bit_count: u32,
        r: u32,
        g: u32,
        b: u32,
        a: u32,
    ) -> Self {
        Self {
            flags,
            fourcc: 0,
            bit_count,
            red_mask: r,
            green_mask: g,
            blue_mask: b,
            alpha_mask: a,
        }
    }

    /// Reads the pixel format out of a DDS header.
    ///
    /// # Safety
    ///
    /// `data` must hold at least [`DDS_HEADER_SIZE`] bytes.
    pub(crate) unsafe fn read(data: &[u8]) -> Self {
        let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
        unsafe {
            Self {
                flags: reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize),
                fourcc: reader.read_u32_at(FOURCC_OFFSET as isize),
                bit_count: reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
                red_mask: reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
                green_mask: reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
                blue_mask: reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
                alpha_mask: reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
            }
        }
    }

    fn matches(&self, entry: &DdsPixelFormat) -> bool {
        if self.flags & entry.flags == 0 {
            return false;
        }

        if entry.flags & DDPF_FOURCC != 0 {
            return self.fourcc == entry.fourcc;
        }

        if entry.flags & DDPF_PALETTEINDEXED8 != 0 {
            return self.bit_count == entry.bit_count;
        }

        self.bit_count == entry.bit_count
            && self.red_mask == entry.red_mask
            && self.green_mask == entry.green_mask
            && self.blue_mask == entry.blue_mask
            && self.alpha_mask == entry.alpha_mask
    }
}

struct LegacyMapping {
    format: FormatId,
    conversion: ConversionFlags,
    pixel_format: DdsPixelFormat,
}

const fn map(
    format: FormatId,
    conversion: ConversionFlags,
    pixel_format: DdsPixelFormat,
) -> LegacyMapping {
    LegacyMapping {
        format,
        conversion,
        pixel_format,
    }
}

mod table {
    use super::*;
    use DdsPixelFormat as Pf;
    use FormatId::*;

    const NONE: ConversionFlags = ConversionFlags::empty();
    const E: u32 = ConversionFlags::EXPAND.bits();
    const NA: u32 = ConversionFlags::NO_ALPHA.bits();

    const fn conv(bits: u32) -> ConversionFlags {
        ConversionFlags::from_bits_truncate(bits)
    }

    // Searched in order; the first match wins.
    #[rustfmt::skip]
    pub(super) static LEGACY_MAPPINGS: &[LegacyMapping] = &[
        map(BC1_UNorm, NONE, Pf::fourcc(FOURCC_DXT1)),
        map(BC2_UNorm, NONE, Pf::fourcc(FOURCC_DXT3)),
        map(BC3_UNorm, NONE, Pf::fourcc(FOURCC_DXT5)),
        map(BC2_UNorm, NONE, Pf::fourcc(FOURCC_DXT2)),
        map(BC3_UNorm, NONE, Pf::fourcc(FOURCC_DXT4)),
        map(BC4_UNorm, NONE, Pf::fourcc(FOURCC_BC4U)),
        map(BC4_SNorm, NONE, Pf::fourcc(FOURCC_BC4S)),
        map(BC5_UNorm, NONE, Pf::fourcc(FOURCC_BC5U)),
        map(BC5_SNorm, NONE, Pf::fourcc(FOURCC_BC5S)),
        map(BC4_UNorm, NONE, Pf::fourcc(FOURCC_ATI1)),
        map(BC5_UNorm, NONE, Pf::fourcc(FOURCC_ATI2)),
        map(R8G8_B8G8_UNorm, NONE, Pf::fourcc(FOURCC_RGBG)),
        map(G8R8_G8B8_UNorm, NONE, Pf::fourcc(FOURCC_GRGB)),
        map(B8G8R8A8_UNorm, NONE, Pf::masks(DDPF_RGBA, 32, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0xff00_0000)),
        map(B8G8R8X8_UNorm, NONE, Pf::masks(DDPF_RGB, 32, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0)),
        map(R8G8B8A8_UNorm, NONE, Pf::masks(DDPF_RGBA, 32, 0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000)),
        map(R8G8B8A8_UNorm, conv(NA), Pf::masks(DDPF_RGB, 32, 0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0)),
        map(R16G16_UNorm, NONE, Pf::masks(DDPF_RGB, 32, 0x0000_ffff, 0xffff_0000, 0, 0)),
        map(R10G10B10A2_UNorm, conv(ConversionFlags::SWIZZLE.bits()), Pf::masks(DDPF_RGB, 32, 0x0000_03ff, 0x000f_fc00, 0x3ff0_0000, 0xc000_0000)),
        map(R10G10B10A2_UNorm, NONE, Pf::masks(DDPF_RGB, 32, 0x3ff0_0000, 0x000f_fc00, 0x0000_03ff, 0xc000_0000)),
        map(R8G8B8A8_UNorm, conv(E | NA | ConversionFlags::RGB888.bits()), Pf::masks(DDPF_RGB, 24, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0)),
        map(B5G6R5_UNorm, conv(ConversionFlags::RGB565.bits()), Pf::masks(DDPF_RGB, 16, 0xf800, 0x07e0, 0x001f, 0)),
        map(B5G5R5A1_UNorm, conv(ConversionFlags::RGB5551.bits()), Pf::masks(DDPF_RGBA, 16, 0x7c00, 0x03e0, 0x001f, 0x8000)),
        map(B5G5R5A1_UNorm, conv(ConversionFlags::RGB5551.bits() | NA), Pf::masks(DDPF_RGB, 16, 0x7c00, 0x03e0, 0x001f, 0)),
        map(R8G8B8A8_UNorm, conv(E | ConversionFlags::RGB8332.bits()), Pf::masks(DDPF_RGB, 16, 0x00e0, 0x001c, 0x0003, 0xff00)),
        map(B5G6R5_UNorm, conv(E | ConversionFlags::RGB332.bits()), Pf::masks(DDPF_RGB, 8, 0xe0, 0x1c, 0x03, 0)),
        map(R8_UNorm, NONE, Pf::masks(DDPF_LUMINANCE, 8, 0xff, 0, 0, 0)),
        map(R16_UNorm, NONE, Pf::masks(DDPF_LUMINANCE, 16, 0xffff, 0, 0, 0)),
        map(R8G8_UNorm, NONE, Pf::masks(DDPF_LUMINANCE_ALPHA, 16, 0x00ff, 0, 0, 0xff00)),
        map(A8_UNorm, NONE, Pf::masks(DDPF_ALPHA, 8, 0, 0, 0, 0xff)),
        map(R16G16B16A16_UNorm, NONE, Pf::fourcc(D3DFMT_A16B16G16R16)),
        map(R16G16B16A16_SNorm, NONE, Pf::fourcc(D3DFMT_Q16W16V16U16)),
        map(R16_Float, NONE, Pf::fourcc(D3DFMT_R16F)),
        map(R16G16_Float, NONE, Pf::fourcc(D3DFMT_G16R16F)),
        map(R16G16B16A16_Float, NONE, Pf::fourcc(D3DFMT_A16B16G16R16F)),
        map(R32_Float, NONE, Pf::fourcc(D3DFMT_R32F)),
        map(R32G32_Float, NONE, Pf::fourcc(D3DFMT_G32R32F)),
        map(R32G32B32A32_Float, NONE, Pf::fourcc(D3DFMT_A32B32G32R32F)),
        map(R32_Float, NONE, Pf::masks(DDPF_RGB, 32, 0xffff_ffff, 0, 0, 0)),
        map(R8G8B8A8_UNorm, conv(E | ConversionFlags::PALETTE.bits() | ConversionFlags::A8P8.bits()), Pf::masks(DDPF_PALETTEINDEXED8, 16, 0, 0, 0, 0)),
        map(R8G8B8A8_UNorm, conv(E | ConversionFlags::PALETTE.bits()), Pf::masks(DDPF_PALETTEINDEXED8, 8, 0, 0, 0, 0)),
        map(R8G8B8A8_UNorm, conv(E | ConversionFlags::RGB4444.bits()), Pf::masks(DDPF_RGBA, 16, 0x0f00, 0x00f0, 0x000f, 0xf000)),
        map(R8G8B8A8_UNorm, conv(E | NA | ConversionFlags::RGB4444.bits()), Pf::masks(DDPF_RGB, 16, 0x0f00, 0x00f0, 0x000f, 0)),
        map(R8G8B8A8_UNorm, conv(E | ConversionFlags::A4L4.bits()), Pf::masks(DDPF_LUMINANCE, 8, 0x0f, 0, 0, 0xf0)),
    ];
}

/// Finds the format a legacy pixel format is read as.
///
/// # Return
///
/// `None` if no table entry matches, or if the match needs expanding and
/// [`DdsLegacyFlags::NO_LEGACY_EXPANSION`] is set.
pub fn find_legacy_format(
    pixel_format: &DdsPixelFormat,
    flags: DdsLegacyFlags,
) -> Option<(FormatId, ConversionFlags)> {
    let mapping = table::LEGACY_MAPPINGS
        .iter()
        .find(|mapping| pixel_format.matches(&mapping.pixel_format))?;

    let mut conversion = mapping.conversion;
    if conversion.contains(ConversionFlags::EXPAND)
        && flags.contains(DdsLegacyFlags::NO_LEGACY_EXPANSION)
    {
        return None;
    }

    if mapping.format == FormatId::R10G10B10A2_UNorm
        && flags.contains(DdsLegacyFlags::NO_R10B10G10A2_FIX)
    {
        conversion.toggle(ConversionFlags::SWIZZLE);
    }

    Some((mapping.format, conversion))
}

/// Rewrites BGR(A/X) formats to their RGBA counterparts, as requested by
/// [`DdsLegacyFlags::FORCE_RGB`].
pub(crate) fn force_rgb(format: FormatId, conversion: &mut ConversionFlags) -> FormatId {
    use FormatId::*;
    let (format, added) = match format {
        B8G8R8A8_UNorm => (R8G8B8A8_UNorm, ConversionFlags::SWIZZLE),
        B8G8R8X8_UNorm => (R8G8B8A8_UNorm, ConversionFlags::SWIZZLE | ConversionFlags::NO_ALPHA),
        B8G8R8A8_Typeless => (R8G8B8A8_Typeless, ConversionFlags::SWIZZLE),
        B8G8R8A8_UNorm_SRgb => (R8G8B8A8_UNorm_SRgb, ConversionFlags::SWIZZLE),
        B8G8R8X8_Typeless => (R8G8B8A8_Typeless, ConversionFlags::SWIZZLE | ConversionFlags::NO_ALPHA),
        B8G8R8X8_UNorm_SRgb => (
            R8G8B8A8_UNorm_SRgb,
            ConversionFlags::SWIZZLE | ConversionFlags::NO_ALPHA,
        ),
        other => (other, ConversionFlags::empty()),
    };
    *conversion |= added;
    format
}

/// Expands 16 bit formats to `R8G8B8A8`, as requested by [`DdsLegacyFlags::NO_16BPP`].
pub(crate) fn expand_16bpp(format: FormatId, conversion: &mut ConversionFlags) -> FormatId {
    match format {
        FormatId::B5G6R5_UNorm => {
            *conversion |= ConversionFlags::EXPAND | ConversionFlags::NO_ALPHA | ConversionFlags::RGB565;
            FormatId::R8G8B8A8_UNorm
        }
        FormatId::B5G5R5A1_UNorm => {
            *conversion |= ConversionFlags::EXPAND | ConversionFlags::RGB5551;
            FormatId::R8G8B8A8_UNorm
        }
        other => other,
    }
}

/// Pitch flags describing the layout of the data as stored in the file.
///
/// Expanded formats are narrower on disk than the format they are read as, so the stored
/// bit depth is forced through the `BPP*` overrides.
pub fn source_pitch_flags(flags: DdsLegacyFlags, conversion: ConversionFlags) -> PitchFlags {
    let mut pitch_flags = PitchFlags::empty();
    if flags.contains(DdsLegacyFlags::LEGACY_DWORD) {
        pitch_flags |= PitchFlags::LEGACY_DWORD;
    }

    if !conversion.contains(ConversionFlags::EXPAND) {
        return pitch_flags;
    }

    if conversion.contains(ConversionFlags::RGB888) {
        pitch_flags |= PitchFlags::BPP24;
    } else if conversion.intersects(
        ConversionFlags::RGB565
            | ConversionFlags::RGB5551
            | ConversionFlags::RGB4444
            | ConversionFlags::RGB8332
            | ConversionFlags::A8P8,
    ) {
        pitch_flags |= PitchFlags::BPP16;
    } else if conversion
        .intersects(ConversionFlags::A4L4 | ConversionFlags::RGB332 | ConversionFlags::PALETTE)
    {
        pitch_flags |= PitchFlags::BPP8;
    }

    pitch_flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const EXPAND: ConversionFlags = ConversionFlags::EXPAND;

    fn rgb(bit_count: u32, r: u32, g: u32, b: u32, a: u32) -> DdsPixelFormat {
        DdsPixelFormat::masks(DDPF_RGB, bit_count, r, g, b, a)
    }

    #[rstest]
    #[case::dxt1(FOURCC_DXT1, FormatId::BC1_UNorm)]
    #[case::dxt2(FOURCC_DXT2, FormatId::BC2_UNorm)]
    #[case::dxt5(FOURCC_DXT5, FormatId::BC3_UNorm)]
    #[case::ati2(FOURCC_ATI2, FormatId::BC5_UNorm)]
    #[case::bc5s(FOURCC_BC5S, FormatId::BC5_SNorm)]
    #[case::r16f(D3DFMT_R16F, FormatId::R16_Float)]
    #[case::rgba32f(D3DFMT_A32B32G32R32F, FormatId::R32G32B32A32_Float)]
    fn fourcc_maps_directly(#[case] fourcc: u32, #[case] expected: FormatId) {
        let found = find_legacy_format(&DdsPixelFormat::fourcc(fourcc), DdsLegacyFlags::empty());
        assert_eq!(found, Some((expected, ConversionFlags::empty())));
    }

    #[test]
    fn unknown_fourcc_is_unsupported() {
        let pf = DdsPixelFormat::fourcc(make_fourcc(b"ABCD"));
        assert_eq!(find_legacy_format(&pf, DdsLegacyFlags::empty()), None);
    }

    #[test]
    fn bgra_masks_map_to_bgra() {
        let mut pf = rgb(32, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0xff00_0000);
        pf.flags = DDPF_RGBA;
        assert_eq!(
            find_legacy_format(&pf, DdsLegacyFlags::empty()),
            Some((FormatId::B8G8R8A8_UNorm, ConversionFlags::empty()))
        );
    }

    #[test]
    fn rgb888_expands_to_rgba() {
        let pf = rgb(24, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0);
        let (format, conversion) = find_legacy_format(&pf, DdsLegacyFlags::empty()).unwrap();
        assert_eq!(format, FormatId::R8G8B8A8_UNorm);
        assert_eq!(
            conversion,
            ConversionFlags::EXPAND | ConversionFlags::NO_ALPHA | ConversionFlags::RGB888
        );
    }

    #[test]
    fn expansion_can_be_refused() {
        let pf = rgb(24, 0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0);
        assert_eq!(
            find_legacy_format(&pf, DdsLegacyFlags::NO_LEGACY_EXPANSION),
            None
        );
    }

    #[rstest]
    #[case::d3dx_order(0x0000_03ff, 0x3ff0_0000, DdsLegacyFlags::empty(), true)]
    #[case::d3dx_order_unfixed(0x0000_03ff, 0x3ff0_0000, DdsLegacyFlags::NO_R10B10G10A2_FIX, false)]
    #[case::true_order(0x3ff0_0000, 0x0000_03ff, DdsLegacyFlags::empty(), false)]
    #[case::true_order_unfixed(0x3ff0_0000, 0x0000_03ff, DdsLegacyFlags::NO_R10B10G10A2_FIX, true)]
    fn r10g10b10a2_swizzle(
        #[case] red: u32,
        #[case] blue: u32,
        #[case] flags: DdsLegacyFlags,
        #[case] swizzled: bool,
    ) {
        let pf = rgb(32, red, 0x000f_fc00, blue, 0xc000_0000);
        let (format, conversion) = find_legacy_format(&pf, flags).unwrap();
        assert_eq!(format, FormatId::R10G10B10A2_UNorm);
        assert_eq!(conversion.contains(ConversionFlags::SWIZZLE), swizzled);
    }

    #[test]
    fn palette_matches_on_bit_count_only() {
        let pf = DdsPixelFormat::masks(DDPF_PALETTEINDEXED8, 8, 0x1234, 0, 0, 0);
        let (format, conversion) = find_legacy_format(&pf, DdsLegacyFlags::empty()).unwrap();
        assert_eq!(format, FormatId::R8G8B8A8_UNorm);
        assert!(conversion.contains(ConversionFlags::PALETTE));
        assert!(!conversion.contains(ConversionFlags::A8P8));
    }

    #[test]
    fn luminance_and_a4l4_are_told_apart_by_masks() {
        let l8 = DdsPixelFormat::masks(DDPF_LUMINANCE, 8, 0xff, 0, 0, 0);
        let a4l4 = DdsPixelFormat::masks(DDPF_LUMINANCE, 8, 0x0f, 0, 0, 0xf0);
        assert_eq!(
            find_legacy_format(&l8, DdsLegacyFlags::empty()).map(|x| x.0),
            Some(FormatId::R8_UNorm)
        );
        let (format, conversion) = find_legacy_format(&a4l4, DdsLegacyFlags::empty()).unwrap();
        assert_eq!(format, FormatId::R8G8B8A8_UNorm);
        assert!(conversion.contains(ConversionFlags::A4L4));
    }

    #[test]
    fn disjoint_flags_never_match() {
        // Right masks, but flagged as alpha rather than RGB.
        let mut pf = rgb(16, 0xf800, 0x07e0, 0x001f, 0);
        pf.flags = DDPF_ALPHA;
        assert_eq!(find_legacy_format(&pf, DdsLegacyFlags::empty()), None);
    }

    #[rstest]
    #[case::bgra(FormatId::B8G8R8A8_UNorm, FormatId::R8G8B8A8_UNorm, ConversionFlags::SWIZZLE)]
    #[case::bgrx(
        FormatId::B8G8R8X8_UNorm,
        FormatId::R8G8B8A8_UNorm,
        ConversionFlags::SWIZZLE.union(ConversionFlags::NO_ALPHA)
    )]
    #[case::bgrx_srgb(
        FormatId::B8G8R8X8_UNorm_SRgb,
        FormatId::R8G8B8A8_UNorm_SRgb,
        ConversionFlags::SWIZZLE.union(ConversionFlags::NO_ALPHA)
    )]
    #[case::untouched(FormatId::BC1_UNorm, FormatId::BC1_UNorm, ConversionFlags::empty())]
    fn force_rgb_rewrites_bgr(
        #[case] format: FormatId,
        #[case] expected: FormatId,
        #[case] added: ConversionFlags,
    ) {
        let mut conversion = ConversionFlags::empty();
        assert_eq!(force_rgb(format, &mut conversion), expected);
        assert_eq!(conversion, added);
    }

    #[test]
    fn no_16bpp_expands_565() {
        let mut conversion = ConversionFlags::RGB565;
        assert_eq!(
            expand_16bpp(FormatId::B5G6R5_UNorm, &mut conversion),
            FormatId::R8G8B8A8_UNorm
        );
        assert!(conversion.contains(ConversionFlags::EXPAND | ConversionFlags::NO_ALPHA));
        assert_eq!(
            source_pitch_flags(DdsLegacyFlags::empty(), conversion),
            PitchFlags::BPP16
        );
    }

    #[rstest]
    #[case::none(ConversionFlags::empty(), PitchFlags::empty())]
    #[case::rgb888(EXPAND.union(ConversionFlags::RGB888), PitchFlags::BPP24)]
    #[case::rgb8332(EXPAND.union(ConversionFlags::RGB8332), PitchFlags::BPP16)]
    #[case::a8p8(
        EXPAND.union(ConversionFlags::PALETTE).union(ConversionFlags::A8P8),
        PitchFlags::BPP16
    )]
    #[case::palette(EXPAND.union(ConversionFlags::PALETTE), PitchFlags::BPP8)]
    #[case::rgb332(EXPAND.union(ConversionFlags::RGB332), PitchFlags::BPP8)]
    // Unexpanded 565 data keeps its own bit depth.
    #[case::rgb565_native(ConversionFlags::RGB565, PitchFlags::empty())]
    fn source_pitch_flags_follow_stored_depth(
        #[case] conversion: ConversionFlags,
        #[case] expected: PitchFlags,
    ) {
        assert_eq!(source_pitch_flags(DdsLegacyFlags::empty(), conversion), expected);
        assert_eq!(
            source_pitch_flags(DdsLegacyFlags::LEGACY_DWORD, conversion),
            expected | PitchFlags::LEGACY_DWORD
        );
    }
}
