//! Layout of 4x4 block compressed formats (BC1 through BC7).

use super::PitchLayout;
use crate::format::catalog;
use crate::FormatId;

/// Bytes in one BC1 or BC4 block.
pub const HALF_BLOCK_SIZE: i64 = 8;
/// Bytes in one BC2, BC3, BC5, BC6H or BC7 block.
pub const FULL_BLOCK_SIZE: i64 = 16;
/// Width and height of a block, in texels.
pub const BLOCK_DIMENSION: i64 = 4;

/// Size of a single 4x4 block of the given compressed format, in bytes.
#[inline]
pub const fn bytes_per_block(id: FormatId) -> i64 {
    if catalog::is_half_block(id) {
        HALF_BLOCK_SIZE
    } else {
        FULL_BLOCK_SIZE
    }
}

/// Number of blocks needed to cover `texels` texels along one axis.
///
/// Non-positive dimensions need no blocks.
#[inline(always)]
pub const fn block_count(texels: i64) -> i64 {
    if texels > 0 {
        texels / BLOCK_DIMENSION + (texels % BLOCK_DIMENSION != 0) as i64
    } else {
        0
    }
}

/// Layout of a block compressed image.
///
/// Partial blocks at the right and bottom edges are stored whole.
/// Returns [`None`] if the slice does not fit in an `i64`.
pub fn pitch(id: FormatId, width: i64, height: i64) -> Option<PitchLayout> {
    let blocks_wide = block_count(width);
    let blocks_high = block_count(height);
    let row_pitch = blocks_wide.checked_mul(bytes_per_block(id))?;

    Some(PitchLayout {
        row_pitch,
        slice_pitch: row_pitch.checked_mul(blocks_high)?,
        block_count_x: blocks_wide,
        block_count_y: blocks_high,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(FormatId::BC1_Typeless, 8)]
    #[case(FormatId::BC1_UNorm_SRgb, 8)]
    #[case(FormatId::BC4_SNorm, 8)]
    #[case(FormatId::BC2_UNorm, 16)]
    #[case(FormatId::BC3_UNorm, 16)]
    #[case(FormatId::BC5_UNorm, 16)]
    #[case(FormatId::BC6H_Uf16, 16)]
    #[case(FormatId::BC7_UNorm_SRgb, 16)]
    fn block_size_per_family(#[case] id: FormatId, #[case] expected: i64) {
        assert_eq!(bytes_per_block(id), expected);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(4, 1)]
    #[case(5, 2)]
    #[case(16, 4)]
    #[case(17, 5)]
    #[case(0, 0)]
    #[case(-3, 0)]
    #[case(i64::MAX, i64::MAX / 4 + 1)]
    fn block_count_rounds_up(#[case] texels: i64, #[case] expected: i64) {
        assert_eq!(block_count(texels), expected);
    }

    #[rstest]
    #[case(0, 16)]
    #[case(16, 0)]
    #[case(0, 0)]
    fn zero_dimension_yields_empty_layout(#[case] width: i64, #[case] height: i64) {
        let layout = pitch(FormatId::BC3_UNorm, width, height).unwrap();
        assert_eq!(layout.slice_pitch, 0);
        if width == 0 {
            assert_eq!(layout.block_count_x, 0);
            assert_eq!(layout.row_pitch, 0);
        }
        if height == 0 {
            assert_eq!(layout.block_count_y, 0);
        }
    }

    #[test]
    fn bc7_256x128() {
        let layout = pitch(FormatId::BC7_UNorm, 256, 128).unwrap();
        assert_eq!(layout.block_count_x, 64);
        assert_eq!(layout.block_count_y, 32);
        assert_eq!(layout.row_pitch, 1024);
        assert_eq!(layout.slice_pitch, 32768);
    }

    #[test]
    fn oversized_slice_does_not_fit() {
        assert_eq!(pitch(FormatId::BC7_UNorm, i64::MAX, 4), None);
        assert_eq!(pitch(FormatId::BC1_UNorm, 1 << 32, 1 << 32), None);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        const COMPRESSED: [FormatId; 4] = [
            FormatId::BC1_UNorm,
            FormatId::BC4_UNorm,
            FormatId::BC3_UNorm,
            FormatId::BC7_UNorm,
        ];

        proptest! {
            #[test]
            fn block_counts_recoverable_from_pitches(
                format in 0..COMPRESSED.len(),
                width in 1i64..16384,
                height in 1i64..16384,
            ) {
                let id = COMPRESSED[format];
                let layout = pitch(id, width, height).unwrap();

                prop_assert_eq!(layout.row_pitch / bytes_per_block(id), (width + 3) / 4);
                prop_assert_eq!(layout.slice_pitch / layout.row_pitch, (height + 3) / 4);
                prop_assert_eq!(layout.block_count_x, (width + 3) / 4);
                prop_assert_eq!(layout.block_count_y, (height + 3) / 4);
            }
        }
    }
}
