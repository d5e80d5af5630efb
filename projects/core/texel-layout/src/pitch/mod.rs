//! Row and slice pitch calculation.
//!
//! [`pitch_for`] picks exactly one of four layouts, checked in this order:
//!
//! 1. [`compressed`]: 4x4 block compressed formats.
//! 2. [`packed`]: formats where neighbouring texels share samples.
//! 3. [`planar`]: video formats with separate luma and chroma planes.
//! 4. [`linear`]: everything else, honouring the [`PitchFlags`] alignment policy.

pub mod compressed;
pub mod linear;
pub mod packed;
pub mod planar;

use crate::{FormatInfo, LayoutError, LayoutResult};
use bitflags::bitflags;

bitflags! {
    /// Legacy alignment and bit depth overrides used when computing a pitch.
    ///
    /// Only one alignment applies; when several are set the precedence is
    /// [`LEGACY_DWORD`](Self::LEGACY_DWORD), [`ALIGN_4K`](Self::ALIGN_4K),
    /// [`ALIGN_64_BYTE`](Self::ALIGN_64_BYTE), [`ALIGN_32_BYTE`](Self::ALIGN_32_BYTE),
    /// [`ALIGN_16_BYTE`](Self::ALIGN_16_BYTE). Flags only affect linear formats.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PitchFlags: u32 {
        /// Rows are padded to a multiple of 4 bytes, as older DDS writers assumed.
        const LEGACY_DWORD = 0x1;
        const ALIGN_16_BYTE = 0x2;
        const ALIGN_32_BYTE = 0x4;
        const ALIGN_64_BYTE = 0x8;
        const ALIGN_4K = 0x200;
        /// Treat the format as 24 bits per texel.
        const BPP24 = 0x10000;
        /// Treat the format as 16 bits per texel.
        const BPP16 = 0x20000;
        /// Treat the format as 8 bits per texel.
        const BPP8 = 0x40000;
    }
}

/// Byte layout of a single 2D image slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct PitchLayout {
    /// Bytes in one row of texels (or one row of blocks, for compressed formats).
    pub row_pitch: i64,
    /// Bytes in the whole slice.
    pub slice_pitch: i64,
    /// Horizontal block count. Always `0` for formats that are not block compressed.
    pub block_count_x: i64,
    /// Vertical block count. Always `0` for formats that are not block compressed.
    pub block_count_y: i64,
}

impl PitchLayout {
    /// A layout with no blocks.
    #[inline(always)]
    pub const fn new(row_pitch: i64, slice_pitch: i64) -> Self {
        Self {
            row_pitch,
            slice_pitch,
            block_count_x: 0,
            block_count_y: 0,
        }
    }
}

/// Computes the row pitch, slice pitch and block counts of an image slice.
///
/// # Parameters
///
/// - `info`: The format of the image, see [`crate::classify`].
/// - `width`, `height`: Dimensions of the image in texels.
/// - `flags`: Alignment policy for linear formats.
///
/// # Errors
///
/// [`LayoutError::InvalidHeight`](crate::LayoutError::InvalidHeight) if a planar format that
/// needs an even height is given an odd one, or
/// [`LayoutError::Overflow`](crate::LayoutError::Overflow) if the slice does not fit in an `i64`.
///
/// # Remarks
///
/// [`FormatId::Y410`](crate::FormatId::Y410) and [`FormatId::Y416`](crate::FormatId::Y416) have
/// no defined layout; they produce an all zero [`PitchLayout`] and a warning is logged.
pub fn pitch_for(
    info: &FormatInfo,
    width: i64,
    height: i64,
    flags: PitchFlags,
) -> LayoutResult<PitchLayout> {
    let layout = if info.is_compressed() {
        compressed::pitch(info.id(), width, height)
    } else if info.is_packed() {
        packed::pitch(info.id(), width, height)
    } else if info.is_planar() {
        return planar::pitch(info.id(), width, height);
    } else {
        linear::pitch(info.bit_depth(), width, height, flags)
    };

    layout.ok_or(LayoutError::Overflow(info.id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use crate::{classify, FormatId};

    #[test]
    fn r8g8b8a8_4x4_without_flags() {
        let info = classify(FormatId::R8G8B8A8_UNorm);
        assert_eq!(info.bit_depth(), 32);
        assert_eq!(info.component_count(), 4);

        let layout = pitch_for(info, 4, 4, PitchFlags::empty()).unwrap();
        assert_eq!(layout, PitchLayout::new(16, 64));
    }

    #[test]
    fn bc1_17x9_rounds_up_to_whole_blocks() {
        let layout = pitch_for(classify(FormatId::BC1_UNorm), 17, 9, PitchFlags::empty()).unwrap();
        assert_eq!(layout.block_count_x, 5);
        assert_eq!(layout.block_count_y, 3);
        assert_eq!(layout.row_pitch, 40);
        assert_eq!(layout.slice_pitch, 120);
    }

    #[test]
    fn nv12_odd_height_is_rejected() {
        let result = pitch_for(classify(FormatId::NV12), 10, 11, PitchFlags::empty());
        assert_eq!(
            result,
            Err(LayoutError::InvalidHeight {
                format: FormatId::NV12,
                height: 11
            })
        );
    }

    #[test]
    fn nv12_even_height() {
        let layout = pitch_for(classify(FormatId::NV12), 10, 10, PitchFlags::empty()).unwrap();
        assert_eq!(layout, PitchLayout::new(10, 150));
    }

    #[rstest]
    #[case(FormatId::BC7_UNorm)]
    #[case(FormatId::YUY2)]
    #[case(FormatId::P208)]
    fn alignment_flags_do_not_affect_non_linear_formats(#[case] id: FormatId) {
        let info = classify(id);
        let plain = pitch_for(info, 30, 8, PitchFlags::empty()).unwrap();
        let aligned = pitch_for(info, 30, 8, PitchFlags::all()).unwrap();
        assert_eq!(plain, aligned);
    }

    #[test]
    fn unknown_has_zero_linear_pitch() {
        let layout = pitch_for(classify(FormatId::Unknown), 64, 64, PitchFlags::empty()).unwrap();
        assert_eq!(layout, PitchLayout::default());
    }

    #[rstest]
    #[case(FormatId::R32G32B32A32_Float)]
    #[case(FormatId::BC7_UNorm)]
    #[case(FormatId::YUY2)]
    #[case(FormatId::NV12)]
    fn overflowing_slices_are_reported(#[case] id: FormatId) {
        let size = u32::MAX as i64 * 2;
        assert_eq!(
            pitch_for(classify(id), size, size, PitchFlags::empty()),
            Err(LayoutError::Overflow(id))
        );
    }

    #[test]
    fn flags_keep_their_bit_values() {
        assert_eq!(PitchFlags::LEGACY_DWORD.bits(), 0x1);
        assert_eq!(PitchFlags::ALIGN_16_BYTE.bits(), 0x2);
        assert_eq!(PitchFlags::ALIGN_32_BYTE.bits(), 0x4);
        assert_eq!(PitchFlags::ALIGN_64_BYTE.bits(), 0x8);
        assert_eq!(PitchFlags::ALIGN_4K.bits(), 0x200);
        assert_eq!(PitchFlags::BPP24.bits(), 0x10000);
        assert_eq!(PitchFlags::BPP16.bits(), 0x20000);
        assert_eq!(PitchFlags::BPP8.bits(), 0x40000);
    }
}
