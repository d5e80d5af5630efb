use crate::pitch::compressed::block_count;
use crate::{FormatId, FormatInfo};

/// Minimum number of block rows reported for a compressed image.
const MIN_COMPRESSED_SCANLINES: i64 = 4;

/// Number of addressable rows in an image of the given height.
///
/// For compressed formats this counts rows of 4x4 blocks (never fewer than 4); planar formats
/// include the rows occupied by their chroma planes. Counts saturate at `i64::MAX`.
pub fn scanlines(info: &FormatInfo, height: i64) -> i64 {
    if info.is_compressed() {
        return block_count(height).max(MIN_COMPRESSED_SCANLINES);
    }

    match info.id() {
        FormatId::NV11 => height.saturating_mul(2),
        FormatId::NV12 | FormatId::P010 | FormatId::P016 | FormatId::Opaque420 => {
            height.saturating_add((height >> 1) + (height & 1))
        }
        _ => height,
    }
}
