//! Layout of packed formats, where pairs of horizontally adjacent texels share chroma samples.

use super::PitchLayout;
use crate::FormatId;

/// Layout of a packed image.
///
/// Rows hold `ceil(width / 2)` texel pairs. Pairs are 4 bytes for 8 bit formats and 16 bytes for
/// the 10 and 16 bit [`FormatId::Y210`] and [`FormatId::Y216`].
///
/// [`FormatId::Y410`] and [`FormatId::Y416`] have no defined layout and return
/// [`PitchLayout::default`]. Returns [`None`] if the slice does not fit in an `i64`.
pub fn pitch(id: FormatId, width: i64, height: i64) -> Option<PitchLayout> {
    let pair_bytes = match id {
        FormatId::R8G8_B8G8_UNorm | FormatId::G8R8_G8B8_UNorm | FormatId::YUY2 => 4,
        FormatId::Y210 | FormatId::Y216 => 16,
        _ => {
            tracing::warn!(
                format = %id,
                width,
                height,
                "Packed format has no defined pitch, reporting an empty layout"
            );
            return Some(PitchLayout::default());
        }
    };

    let row_pitch = (width.checked_add(1)? >> 1).checked_mul(pair_bytes)?;
    Some(PitchLayout::new(row_pitch, row_pitch.checked_mul(height)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(FormatId::R8G8_B8G8_UNorm, 6, 2, 12, 24)]
    #[case(FormatId::G8R8_G8B8_UNorm, 7, 3, 16, 48)]
    #[case(FormatId::YUY2, 1920, 1080, 3840, 4_147_200)]
    #[case(FormatId::Y210, 5, 2, 48, 96)]
    #[case(FormatId::Y216, 64, 1, 512, 512)]
    fn packed_pairs(
        #[case] id: FormatId,
        #[case] width: i64,
        #[case] height: i64,
        #[case] row_pitch: i64,
        #[case] slice_pitch: i64,
    ) {
        assert_eq!(
            pitch(id, width, height),
            Some(PitchLayout::new(row_pitch, slice_pitch))
        );
    }

    #[rstest]
    #[case(FormatId::Y410)]
    #[case(FormatId::Y416)]
    fn undefined_layouts_are_empty(#[case] id: FormatId) {
        assert_eq!(pitch(id, 128, 128), Some(PitchLayout::default()));
    }

    #[rstest]
    #[case::row(FormatId::Y216, i64::MAX)]
    #[case::slice(FormatId::YUY2, u32::MAX as i64 * 4)]
    fn oversized_images_do_not_fit(#[case] id: FormatId, #[case] size: i64) {
        assert_eq!(pitch(id, size, size), None);
    }
}
