//! Per-format attribute records.
//!
//! A [`FormatInfo`] is computed for every [`FormatId`] at compile time and stored in a static table;
//! [`classify`] hands out references into it.

use crate::format::catalog;
use crate::pitch::{pitch_for, PitchFlags, PitchLayout};
use crate::scanlines::scanlines;
use crate::{FormatId, LayoutResult};

/// Structural attributes of a single texel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatInfo {
    id: FormatId,
    bit_depth: u32,
    component_count: u32,
    size_in_bytes: u32,
    group: FormatId,
    is_typeless: bool,
    is_compressed: bool,
    is_planar: bool,
    is_packed: bool,
    is_palettized: bool,
    is_srgb: bool,
    has_alpha: bool,
    has_depth: bool,
    has_stencil: bool,
}

/// One record per [`FormatId`], indexed by [`FormatId::index`].
static FORMAT_INFO: [FormatInfo; FormatId::COUNT] = {
    let mut table = [FormatInfo::UNCLASSIFIED; FormatId::COUNT];
    let formats = FormatId::all_values();
    let mut index = 0;
    while index < formats.len() {
        let info = FormatInfo::new(formats[index]);
        table[info.id.index()] = info;
        index += 1;
    }
    table
};

/// Returns the attributes of the given format.
///
/// This never fails: [`FormatId::Unknown`] is a valid input and yields an all-default record.
#[inline]
pub fn classify(id: FormatId) -> &'static FormatInfo {
    &FORMAT_INFO[id.index()]
}

impl FormatInfo {
    /// Record for a format that has not been through classification.
    ///
    /// Reports `is_typeless == true` while every other flag is `false`. Only
    /// [`FormatId::Unknown`] ends up with this record.
    const UNCLASSIFIED: Self = Self {
        id: FormatId::Unknown,
        bit_depth: 0,
        component_count: 0,
        size_in_bytes: 0,
        group: FormatId::Unknown,
        is_typeless: true,
        is_compressed: false,
        is_planar: false,
        is_packed: false,
        is_palettized: false,
        is_srgb: false,
        has_alpha: false,
        has_depth: false,
        has_stencil: false,
    };

    /// Builds the record for a format from the raw attribute tables.
    ///
    /// Prefer [`classify`], which returns a precomputed instance.
    pub const fn new(id: FormatId) -> Self {
        if matches!(id, FormatId::Unknown) {
            return Self::UNCLASSIFIED;
        }

        let bit_depth = catalog::bit_depth(id);
        let (has_depth, has_stencil) = catalog::depth_stencil_state(id);

        Self {
            id,
            bit_depth,
            component_count: catalog::component_count(id),
            size_in_bytes: size_in_bytes_for_depth(bit_depth),
            group: catalog::group(id),
            is_typeless: catalog::is_typeless(id),
            is_compressed: catalog::is_compressed(id),
            is_planar: catalog::is_planar(id),
            is_packed: catalog::is_packed(id),
            is_palettized: catalog::is_palettized(id),
            is_srgb: catalog::is_srgb(id),
            has_alpha: catalog::has_alpha(id),
            has_depth,
            has_stencil,
        }
    }

    /// The format this record describes.
    #[inline(always)]
    pub const fn id(&self) -> FormatId {
        self.id
    }

    /// Total bits per texel (per 4x4 block for compressed formats).
    #[inline(always)]
    pub const fn bit_depth(&self) -> u32 {
        self.bit_depth
    }

    /// Number of channels per texel; `0` for block compressed, YUV and planar formats.
    #[inline(always)]
    pub const fn component_count(&self) -> u32 {
        self.component_count
    }

    /// Bytes per element, rounded up so that sub-byte formats report `1`.
    ///
    /// `0` if and only if [`FormatInfo::bit_depth`] is `0`.
    #[inline(always)]
    pub const fn size_in_bytes(&self) -> u32 {
        self.size_in_bytes
    }

    /// Typeless family head, or [`FormatId::Unknown`] for formats without a family.
    #[inline(always)]
    pub const fn group(&self) -> FormatId {
        self.group
    }

    /// [`FormatId::Unknown`] reports `true` here while every other flag is `false`. This is
    /// likely accidental; avoid relying on it.
    #[inline(always)]
    pub const fn is_typeless(&self) -> bool {
        self.is_typeless
    }

    /// See [`catalog::is_compressed`].
    #[inline(always)]
    pub const fn is_compressed(&self) -> bool {
        self.is_compressed
    }

    /// See [`catalog::is_planar`].
    #[inline(always)]
    pub const fn is_planar(&self) -> bool {
        self.is_planar
    }

    /// See [`catalog::is_packed`].
    #[inline(always)]
    pub const fn is_packed(&self) -> bool {
        self.is_packed
    }

    /// `true` for [`FormatId::P8`] and [`FormatId::A8P8`].
    #[inline(always)]
    pub const fn is_palettized(&self) -> bool {
        self.is_palettized
    }

    /// See [`catalog::is_srgb`].
    #[inline(always)]
    pub const fn is_srgb(&self) -> bool {
        self.is_srgb
    }

    /// See [`catalog::has_alpha`].
    #[inline(always)]
    pub const fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Whether the format has a depth component.
    #[inline(always)]
    pub const fn has_depth(&self) -> bool {
        self.has_depth
    }

    /// Whether the format has a stencil component.
    #[inline(always)]
    pub const fn has_stencil(&self) -> bool {
        self.has_stencil
    }

    /// Shorthand for [`pitch_for`].
    #[inline]
    pub fn pitch_for(&self, width: i64, height: i64, flags: PitchFlags) -> LayoutResult<PitchLayout> {
        pitch_for(self, width, height, flags)
    }

    /// Shorthand for [`scanlines`].
    #[inline]
    pub fn scanlines(&self, height: i64) -> i64 {
        scanlines(self, height)
    }
}

const fn size_in_bytes_for_depth(bit_depth: u32) -> u32 {
    match bit_depth {
        0 => 0,
        1..=7 => 1,
        _ => bit_depth / 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn classify_is_total_and_indexed_by_format() {
        for &id in FormatId::all_values() {
            let info = classify(id);
            assert_eq!(info.id(), id);
            assert_eq!(*info, FormatInfo::new(id));
        }
    }

    #[test]
    fn classify_returns_same_record_on_repeat() {
        let first = classify(FormatId::BC7_UNorm) as *const FormatInfo;
        let second = classify(FormatId::BC7_UNorm) as *const FormatInfo;
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_is_typeless_but_otherwise_empty() {
        let info = classify(FormatId::Unknown);
        assert_eq!(info.bit_depth(), 0);
        assert_eq!(info.component_count(), 0);
        assert_eq!(info.size_in_bytes(), 0);
        assert_eq!(info.group(), FormatId::Unknown);
        assert!(info.is_typeless());
        assert!(!info.is_compressed());
        assert!(!info.is_planar());
        assert!(!info.is_packed());
        assert!(!info.is_palettized());
        assert!(!info.is_srgb());
        assert!(!info.has_alpha());
        assert!(!info.has_depth());
        assert!(!info.has_stencil());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(7, 1)]
    #[case(8, 1)]
    #[case(16, 2)]
    #[case(96, 12)]
    #[case(128, 16)]
    fn size_in_bytes_rounds_sub_byte_depths_up(#[case] bit_depth: u32, #[case] expected: u32) {
        assert_eq!(size_in_bytes_for_depth(bit_depth), expected);
    }

    #[test]
    fn size_in_bytes_is_zero_only_without_bit_depth() {
        for &id in FormatId::all_values() {
            let info = classify(id);
            assert_eq!(info.size_in_bytes() == 0, info.bit_depth() == 0, "{id}");
        }
    }

    #[test]
    fn group_is_closed() {
        for &id in FormatId::all_values() {
            let group = classify(id).group();
            assert_eq!(classify(group).group(), group, "{id}");
        }
    }

    #[test]
    fn depth_formats_report_depth_and_stencil() {
        let info = classify(FormatId::D24_UNorm_S8_UInt);
        assert!(info.has_depth());
        assert!(info.has_stencil());

        let info = classify(FormatId::D16_UNorm);
        assert!(info.has_depth());
        assert!(!info.has_stencil());
    }
}
