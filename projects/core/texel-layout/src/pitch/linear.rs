//! Layout of ordinary (non compressed, non packed, non planar) formats.

use super::{PitchFlags, PitchLayout};

/// Effective bits per texel once the `BPP*` overrides in `flags` are applied.
///
/// Precedence is [`PitchFlags::BPP24`], [`PitchFlags::BPP16`], [`PitchFlags::BPP8`].
#[inline]
pub fn effective_bit_depth(bit_depth: u32, flags: PitchFlags) -> i64 {
    if flags.contains(PitchFlags::BPP24) {
        24
    } else if flags.contains(PitchFlags::BPP16) {
        16
    } else if flags.contains(PitchFlags::BPP8) {
        8
    } else {
        bit_depth as i64
    }
}

/// Row pitch of `width` texels at `bits_per_texel`, padded according to `flags`.
///
/// Returns [`None`] if the row does not fit in an `i64`.
#[inline]
pub fn row_pitch(width: i64, bits_per_texel: i64, flags: PitchFlags) -> Option<i64> {
    // (bits per padding unit, bytes per padding unit)
    let (unit_bits, unit_bytes) = if flags.contains(PitchFlags::LEGACY_DWORD) {
        (32, 4)
    } else if flags.contains(PitchFlags::ALIGN_4K) {
        (32768, 4096)
    } else if flags.contains(PitchFlags::ALIGN_64_BYTE) {
        (512, 64)
    } else if flags.contains(PitchFlags::ALIGN_32_BYTE) {
        (256, 32)
    } else if flags.contains(PitchFlags::ALIGN_16_BYTE) {
        (128, 16)
    } else {
        (8, 1)
    };

    let bits = width.checked_mul(bits_per_texel)?;
    (bits.checked_add(unit_bits - 1)? / unit_bits).checked_mul(unit_bytes)
}

/// Layout of a linear image with `height` rows.
///
/// Returns [`None`] if the slice does not fit in an `i64`.
pub fn pitch(
    bit_depth: u32,
    width: i64,
    height: i64,
    flags: PitchFlags,
) -> Option<PitchLayout> {
    let bpp = effective_bit_depth(bit_depth, flags);
    let row_pitch = row_pitch(width, bpp, flags)?;
    Some(PitchLayout::new(row_pitch, row_pitch.checked_mul(height)?))
}
