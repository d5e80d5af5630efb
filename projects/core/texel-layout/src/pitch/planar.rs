//! Layout of planar video formats.
//!
//! The luma plane is always `height` rows of `row_pitch` bytes; the formats differ in how many
//! extra rows the chroma plane(s) take up.

use super::PitchLayout;
use crate::{FormatId, LayoutError, LayoutResult};

/// Layout of a planar image.
///
/// # Errors
///
/// - [`LayoutError::InvalidHeight`] for an odd `height` with [`FormatId::NV12`],
///   [`FormatId::Opaque420`], [`FormatId::P010`], [`FormatId::P016`] or [`FormatId::V208`].
/// - [`LayoutError::Overflow`] if the slice does not fit in an `i64`.
pub fn pitch(id: FormatId, width: i64, height: i64) -> LayoutResult<PitchLayout> {
    if needs_even_height(id) && height % 2 != 0 {
        return Err(LayoutError::InvalidHeight { format: id, height });
    }

    let (row_pitch, slice_pitch) =
        plane_sizes(id, width, height).ok_or(LayoutError::Overflow(id))?;
    Ok(PitchLayout::new(row_pitch, slice_pitch))
}

/// Formats whose chroma plane halves the height.
#[inline]
const fn needs_even_height(id: FormatId) -> bool {
    matches!(
        id,
        FormatId::NV12 | FormatId::Opaque420 | FormatId::P010 | FormatId::P016 | FormatId::V208
    )
}

/// `ceil(value / 2)`
#[inline(always)]
fn half_up(value: i64) -> Option<i64> {
    Some(value.checked_add(1)? >> 1)
}

fn plane_sizes(id: FormatId, width: i64, height: i64) -> Option<(i64, i64)> {
    let sizes = match id {
        FormatId::NV12 | FormatId::Opaque420 => {
            let row = half_up(width)?.checked_mul(2)?;
            (row, row.checked_mul(height.checked_add(half_up(height)?)?)?)
        }
        FormatId::P010 | FormatId::P016 => {
            let row = half_up(width)?.checked_mul(4)?;
            (row, row.checked_mul(height.checked_add(half_up(height)?)?)?)
        }
        FormatId::NV11 => {
            let row = (width.checked_add(3)? >> 2).checked_mul(4)?;
            (row, row.checked_mul(height)?.checked_mul(2)?)
        }
        FormatId::P208 => {
            let row = half_up(width)?.checked_mul(2)?;
            (row, row.checked_mul(height.checked_mul(2)?)?)
        }
        FormatId::V208 => {
            let chroma_rows = half_up(height)?.checked_mul(2)?;
            (width, width.checked_mul(height.checked_add(chroma_rows)?)?)
        }
        FormatId::V408 => {
            let chroma_rows = (height >> 1).checked_mul(4)?;
            (width, width.checked_mul(height.checked_add(chroma_rows)?)?)
        }
        _ => (0, 0),
    };

    Some(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(FormatId::NV12, 10, 10, 10, 150)]
    #[case(FormatId::Opaque420, 11, 4, 12, 72)]
    #[case(FormatId::P010, 10, 10, 20, 300)]
    #[case(FormatId::P016, 3, 2, 8, 24)]
    #[case(FormatId::NV11, 10, 5, 12, 120)]
    #[case(FormatId::NV11, 8, 3, 8, 48)]
    #[case(FormatId::P208, 9, 3, 10, 60)]
    #[case(FormatId::V208, 7, 4, 7, 56)]
    #[case(FormatId::V408, 8, 5, 8, 104)]
    #[case(FormatId::V408, 8, 4, 8, 96)]
    fn planar_layouts(
        #[case] id: FormatId,
        #[case] width: i64,
        #[case] height: i64,
        #[case] row_pitch: i64,
        #[case] slice_pitch: i64,
    ) {
        assert_eq!(
            pitch(id, width, height),
            Ok(PitchLayout::new(row_pitch, slice_pitch))
        );
    }

    #[rstest]
    #[case(FormatId::NV12)]
    #[case(FormatId::Opaque420)]
    #[case(FormatId::P010)]
    #[case(FormatId::P016)]
    #[case(FormatId::V208)]
    fn odd_height_rejected(#[case] id: FormatId) {
        assert_eq!(
            pitch(id, 16, 7),
            Err(LayoutError::InvalidHeight {
                format: id,
                height: 7
            })
        );
    }

    #[rstest]
    #[case(FormatId::NV11)]
    #[case(FormatId::P208)]
    #[case(FormatId::V408)]
    fn odd_height_accepted(#[case] id: FormatId) {
        assert!(pitch(id, 16, 7).is_ok());
    }

    #[rstest]
    #[case(FormatId::NV12)]
    #[case(FormatId::P016)]
    #[case(FormatId::NV11)]
    #[case(FormatId::P208)]
    #[case(FormatId::V208)]
    #[case(FormatId::V408)]
    fn oversized_images_overflow(#[case] id: FormatId) {
        let size = u32::MAX as i64 * 2;
        assert_eq!(pitch(id, size, size), Err(LayoutError::Overflow(id)));
        assert_eq!(pitch(id, i64::MAX, 2), Err(LayoutError::Overflow(id)));
    }
}
