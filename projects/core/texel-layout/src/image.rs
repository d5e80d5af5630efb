//! Sizing of whole images: mip chains, texture arrays, cube maps and volumes.

use crate::pitch::PitchFlags;
use crate::{classify, FormatId, LayoutError, LayoutResult};
use core::fmt;
use core::str::FromStr;

/// Dimensionality of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageType {
    Image1D,
    #[default]
    Image2D,
    /// A volume. `depth_or_array_count` is the depth of the first mip level.
    Image3D,
    /// Six 2D faces per cube. `depth_or_array_count` counts faces, not cubes.
    ImageCube,
}

impl ImageType {
    /// Whether successive mip levels halve the height.
    #[inline]
    pub const fn halves_height(self) -> bool {
        !matches!(self, ImageType::Image1D)
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageType::Image1D => "1d",
            ImageType::Image2D => "2d",
            ImageType::Image3D => "3d",
            ImageType::ImageCube => "cube",
        })
    }
}

impl FromStr for ImageType {
    type Err = ParseImageTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            x if x.eq_ignore_ascii_case("1d") => Ok(ImageType::Image1D),
            x if x.eq_ignore_ascii_case("2d") => Ok(ImageType::Image2D),
            x if x.eq_ignore_ascii_case("3d") => Ok(ImageType::Image3D),
            x if x.eq_ignore_ascii_case("cube") => Ok(ImageType::ImageCube),
            _ => Err(ParseImageTypeError),
        }
    }
}

/// A string did not name an [`ImageType`]. Valid names are `1d`, `2d`, `3d` and `cube`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid image type. Valid types are: 1d, 2d, 3d, cube")]
pub struct ParseImageTypeError;

/// Dimensions of a single mip level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MipLevel {
    pub width: u32,
    pub height: u32,
    /// Depth slices at this level. Always `1` for anything but [`ImageType::Image3D`].
    pub depth: u32,
}

/// Describes the shape and format of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDescriptor {
    pub format: FormatId,
    pub image_type: ImageType,
    pub width: u32,
    pub height: u32,
    /// Depth for [`ImageType::Image3D`], array size (in faces for cubes) otherwise.
    pub depth_or_array_count: u32,
    pub mip_count: u32,
}

impl ImageDescriptor {
    pub const fn new_1d(format: FormatId, width: u32) -> Self {
        Self {
            format,
            image_type: ImageType::Image1D,
            width,
            height: 1,
            depth_or_array_count: 1,
            mip_count: 1,
        }
    }

    pub const fn new_2d(format: FormatId, width: u32, height: u32) -> Self {
        Self {
            format,
            image_type: ImageType::Image2D,
            width,
            height,
            depth_or_array_count: 1,
            mip_count: 1,
        }
    }

    pub const fn new_3d(format: FormatId, width: u32, height: u32, depth: u32) -> Self {
        Self {
            format,
            image_type: ImageType::Image3D,
            width,
            height,
            depth_or_array_count: depth,
            mip_count: 1,
        }
    }

    /// A single cube: six square faces of `size` x `size` texels.
    pub const fn new_cube(format: FormatId, size: u32) -> Self {
        Self {
            format,
            image_type: ImageType::ImageCube,
            width: size,
            height: size,
            depth_or_array_count: 6,
            mip_count: 1,
        }
    }

    #[inline]
    pub const fn with_mip_count(mut self, mip_count: u32) -> Self {
        self.mip_count = mip_count;
        self
    }

    /// Sets the array size. For cube maps this is the number of faces.
    #[inline]
    pub const fn with_array_count(mut self, count: u32) -> Self {
        self.depth_or_array_count = count;
        self
    }

    /// Dimensions of the given mip level, with every dimension at least `1`.
    pub fn mip_level(&self, level: u32) -> MipLevel {
        let shift = |value: u32| value.max(1).checked_shr(level).unwrap_or(0).max(1);

        MipLevel {
            width: shift(self.width),
            height: if self.image_type.halves_height() {
                shift(self.height)
            } else {
                self.height.max(1)
            },
            depth: match self.image_type {
                ImageType::Image3D => shift(self.depth_or_array_count),
                _ => 1,
            },
        }
    }

    /// Total size in bytes of every mip level of every slice.
    ///
    /// Width, height, depth or array count and mip count are each treated as at least `1`.
    /// Volumes halve their height along with width and depth at each level, as Direct3D does,
    /// rather than keeping the height of the first level.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::UnsupportedFormat`] if the format has no element size (i.e.
    ///   [`FormatId::Unknown`]).
    /// - [`LayoutError::UnsupportedLayout`] for formats with no defined pitch.
    /// - [`LayoutError::InvalidHeight`] if a mip level of a planar format has an odd height.
    /// - [`LayoutError::Overflow`] if the total does not fit in an `i64`.
    pub fn size_in_bytes(&self, flags: PitchFlags) -> LayoutResult<i64> {
        let info = classify(self.format);
        if info.size_in_bytes() == 0 {
            return Err(LayoutError::UnsupportedFormat(self.format));
        }

        let overflow = LayoutError::Overflow(self.format);
        let mut width = self.width.max(1);
        let mut height = self.height.max(1);
        let mut slices = self.depth_or_array_count.max(1);
        let mut remaining = self.mip_count.max(1);
        let mut total = 0_i64;

        while remaining > 0 {
            let layout = info.pitch_for(width as i64, height as i64, flags)?;
            if layout.slice_pitch == 0 {
                return Err(LayoutError::UnsupportedLayout(self.format));
            }

            let level = layout.slice_pitch.checked_mul(slices as i64).ok_or(overflow)?;

            let next_width = (width >> 1).max(1);
            let next_height = if self.image_type.halves_height() {
                (height >> 1).max(1)
            } else {
                height
            };
            let next_slices = match self.image_type {
                ImageType::Image3D => (slices >> 1).max(1),
                _ => slices,
            };

            // Once the level stops shrinking, every remaining level has the same size.
            let repeats = if (next_width, next_height, next_slices) == (width, height, slices) {
                remaining
            } else {
                1
            };

            total = level
                .checked_mul(repeats as i64)
                .and_then(|bytes| total.checked_add(bytes))
                .ok_or(overflow)?;

            remaining -= repeats;
            width = next_width;
            height = next_height;
            slices = next_slices;
        }

        Ok(total)
    }

    /// Total number of depth slices over the whole mip chain; see [`depth_slice_count`].
    ///
    /// For anything but [`ImageType::Image3D`] this is the array size.
    pub fn depth_slice_count(&self) -> u32 {
        match self.image_type {
            ImageType::Image3D => depth_slice_count(self.depth_or_array_count, self.mip_count),
            _ => self.depth_or_array_count,
        }
    }
}

/// Number of mip levels in a full chain, down to and including `1x1x1`.
pub fn max_mip_count(width: u32, height: u32, depth: u32) -> u32 {
    let mut width = width.max(1);
    let mut height = height.max(1);
    let mut depth = depth.max(1);
    let mut count = 1;

    while width > 1 || height > 1 || depth > 1 {
        width = (width >> 1).max(1);
        height = (height >> 1).max(1);
        depth = (depth >> 1).max(1);
        count += 1;
    }

    count
}

/// Total depth slices stored by a volume with `max_slices` slices at the top level and
/// `mip_count` levels.
///
/// Fewer than two mip levels returns `max_slices` unchanged. The count saturates at `u32::MAX`.
pub fn depth_slice_count(max_slices: u32, mip_count: u32) -> u32 {
    if mip_count < 2 {
        return max_slices;
    }

    let mut depth = max_slices;
    let mut remaining = mip_count;
    let mut total = 0_u32;
    while remaining > 0 && depth > 1 {
        total = total.saturating_add(depth);
        depth >>= 1;
        remaining -= 1;
    }

    total.saturating_add(depth.saturating_mul(remaining))
}
