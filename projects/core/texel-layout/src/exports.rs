//! C API for format classification and pitch calculation.
//!
//! Formats are passed as raw `DXGI_FORMAT` codes. Unknown codes behave like
//! `DXGI_FORMAT_UNKNOWN` (`0`).
//!
//! # Available Functions
//!
//! - [`texel_layout_bit_depth`] - Bits per texel of a format
//! - [`texel_layout_is_compressed`] - Whether a format is block compressed
//! - [`texel_layout_pitch`] - Row/slice pitch of an image slice
//! - [`texel_layout_scanlines`] - Number of addressable rows of an image

use crate::{classify, FormatId, LayoutError, PitchFlags, PitchLayout};

/// Result codes returned by [`texel_layout_pitch`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexelLayoutResult {
    Success = 0,
    /// A planar format was given an odd height.
    InvalidHeight = 1,
    /// The output pointer was null.
    NullOutputPointer = 2,
    /// The format cannot be laid out.
    Unsupported = 3,
    /// The slice size does not fit in an `i64`.
    Overflow = 4,
}

#[inline]
fn format_from_code(format: u32) -> FormatId {
    FormatId::from_raw(format).unwrap_or(FormatId::Unknown)
}

/// Returns the total bits per texel of the given format, or `0` if unknown.
#[unsafe(no_mangle)]
pub extern "C" fn texel_layout_bit_depth(format: u32) -> u32 {
    classify(format_from_code(format)).bit_depth()
}

/// Returns `true` if the given format is block compressed.
#[unsafe(no_mangle)]
pub extern "C" fn texel_layout_is_compressed(format: u32) -> bool {
    classify(format_from_code(format)).is_compressed()
}

/// Computes the layout of a single image slice.
///
/// Unknown bits in `flags` are ignored. Formats without a defined layout
/// ([`FormatId::Y410`], [`FormatId::Y416`]) succeed with an all zero layout.
///
/// # Safety
///
/// - `out_layout` must be null or valid for writing a [`PitchLayout`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn texel_layout_pitch(
    format: u32,
    width: i64,
    height: i64,
    flags: u32,
    out_layout: *mut PitchLayout,
) -> TexelLayoutResult {
    if out_layout.is_null() {
        return TexelLayoutResult::NullOutputPointer;
    }

    let flags = PitchFlags::from_bits_truncate(flags);
    match classify(format_from_code(format)).pitch_for(width, height, flags) {
        Ok(layout) => {
            unsafe { out_layout.write(layout) };
            TexelLayoutResult::Success
        }
        Err(LayoutError::InvalidHeight { .. }) => TexelLayoutResult::InvalidHeight,
        Err(LayoutError::UnsupportedLayout(_) | LayoutError::UnsupportedFormat(_)) => {
            TexelLayoutResult::Unsupported
        }
        Err(LayoutError::Overflow(_)) => TexelLayoutResult::Overflow,
    }
}

/// Returns the number of addressable rows in an image of the given format and height.
#[unsafe(no_mangle)]
pub extern "C" fn texel_layout_scanlines(format: u32, height: i64) -> i64 {
    classify(format_from_code(format)).scanlines(height)
}
