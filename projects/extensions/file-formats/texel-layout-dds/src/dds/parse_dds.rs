use super::legacy::{expand_16bpp, find_legacy_format, force_rgb, source_pitch_flags};
use super::{constants::*, likely_dds, ConversionFlags, DdsLegacyFlags, DdsPixelFormat};
use crate::{DdsError, DdsResult};
use endian_writer::{EndianReader, LittleEndianReader};
use texel_layout::{
    classify, max_mip_count, FormatId, ImageDescriptor, ImageType, LayoutError, PitchFlags,
};

/// The information of the DDS file supplied to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    /// The image as it is presented after loading; for expanded legacy formats this is
    /// the wider format the data is converted to.
    pub image: ImageDescriptor,
    /// The raw pixel format from the header.
    pub pixel_format: DdsPixelFormat,
    pub conversion: ConversionFlags,
    /// Flags to pass to pitch calculations to get the layout of the data as stored.
    pub pitch_flags: PitchFlags,
    /// Offset of the first byte of pixel data.
    pub data_offset: usize,
}

impl DdsInfo {
    /// Number of bytes of pixel data stored after [`DdsInfo::data_offset`], covering every
    /// array element and mip level.
    pub fn data_length(&self) -> DdsResult<usize> {
        let size = self.image.size_in_bytes(self.pitch_flags)?;
        usize::try_from(size).map_err(|_| self.overflow())
    }

    /// Returns the stored pixel data of the file `data` this info was parsed from.
    pub fn pixel_data<'a>(&self, data: &'a [u8]) -> DdsResult<&'a [u8]> {
        let end = self
            .data_offset
            .checked_add(self.data_length()?)
            .ok_or_else(|| self.overflow())?;
        ensure_length(data, end)?;
        Ok(&data[self.data_offset..end])
    }

    #[inline]
    fn overflow(&self) -> DdsError {
        DdsError::Layout(LayoutError::Overflow(self.image.format))
    }
}

#[inline]
fn ensure_length(data: &[u8], required: usize) -> DdsResult<()> {
    if data.len() < required {
        return Err(DdsError::TooShort {
            required,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Parses the header of a DDS file into a description of the image it contains.
///
/// # Return
///
/// [`DdsError::NotADds`] if the data does not start with the DDS magic,
/// or another [`DdsError`] if the header is malformed or uses a format that cannot be read.
///
/// Otherwise, a [`DdsInfo`] with the image description and the offset of the pixel data.
///
/// # Notes
///
/// For DX10 headers the format is read straight from the `DXGI_FORMAT` field.
/// Legacy headers are matched against a table of known pixel formats, and
/// `flags` controls how that matching is done.
#[inline]
pub fn parse_dds(data: &[u8], flags: DdsLegacyFlags) -> DdsResult<DdsInfo> {
    if !likely_dds(data) {
        if data.len() >= 4 && data[..4] == DDS_MAGIC.to_le_bytes() {
            return Err(DdsError::TooShort {
                required: DDS_HEADER_SIZE,
                actual: data.len(),
            });
        }
        return Err(DdsError::NotADds);
    }

    parse_dds_ignore_magic(data, flags)
}

/// Parses a DDS header without validating the magic.
///
/// # Return
///
/// Same as [`parse_dds`], minus [`DdsError::NotADds`].
pub fn parse_dds_ignore_magic(data: &[u8], flags: DdsLegacyFlags) -> DdsResult<DdsInfo> {
    ensure_length(data, DDS_HEADER_SIZE)?;

    // SAFETY: We checked data.len() >= DDS_HEADER_SIZE, every field read below lies within it.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let header_size = unsafe { reader.read_u32_at(DDS_SIZE_OFFSET as isize) };
    if header_size != DDS_HEADER_STRUCT_SIZE {
        return Err(DdsError::InvalidHeaderSize(header_size));
    }

    let pixel_format_size = unsafe { reader.read_u32_at(DDS_PIXELFORMAT_OFFSET as isize) };
    if pixel_format_size != DDS_PIXELFORMAT_STRUCT_SIZE {
        return Err(DdsError::InvalidPixelFormatSize(pixel_format_size));
    }

    let header_flags = unsafe { reader.read_u32_at(DDS_FLAGS_OFFSET as isize) };
    let mut height = unsafe { reader.read_u32_at(DDS_HEIGHT_OFFSET as isize) };
    let width = unsafe { reader.read_u32_at(DDS_WIDTH_OFFSET as isize) };
    let depth = unsafe { reader.read_u32_at(DDS_DEPTH_OFFSET as isize) };
    let mip_count = unsafe { reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize) }.max(1);
    let caps2 = unsafe { reader.read_u32_at(DDS_CAPS2_OFFSET as isize) };
    let pixel_format = unsafe { DdsPixelFormat::read(data) };

    let is_dx10 = pixel_format.flags & DDPF_FOURCC != 0 && pixel_format.fourcc == FOURCC_DX10;
    let header = if is_dx10 {
        ensure_length(data, DDS_HEADER_SIZE + DX10_HEADER_SIZE)?;

        // SAFETY: We checked data.len() >= DDS_HEADER_SIZE + DX10_HEADER_SIZE (148).
        let dxgi_format = unsafe { reader.read_u32_at(DX10_FORMAT_OFFSET as isize) };
        let dimension = unsafe { reader.read_u32_at(DX10_RESOURCE_DIMENSION_OFFSET as isize) };
        let misc_flags = unsafe { reader.read_u32_at(DX10_MISC_FLAG_OFFSET as isize) };
        let array_size = unsafe { reader.read_u32_at(DX10_ARRAY_SIZE_OFFSET as isize) };

        if array_size == 0 {
            return Err(DdsError::InvalidArraySize);
        }

        let format = FormatId::from_raw(dxgi_format)
            .filter(|&format| format != FormatId::Unknown)
            .ok_or(DdsError::UnknownDxgiFormat(dxgi_format))?;

        let (image_type, count) = match dimension {
            DDS_DIMENSION_TEXTURE1D => {
                height = 1;
                (ImageType::Image1D, array_size)
            }
            DDS_DIMENSION_TEXTURE2D if misc_flags & DDS_RESOURCE_MISC_TEXTURECUBE != 0 => {
                (ImageType::ImageCube, array_size.saturating_mul(6))
            }
            DDS_DIMENSION_TEXTURE2D => (ImageType::Image2D, array_size),
            DDS_DIMENSION_TEXTURE3D => {
                if header_flags & DDSD_DEPTH == 0 {
                    return Err(DdsError::MissingVolumeFlag);
                }
                (ImageType::Image3D, depth.max(1))
            }
            other => return Err(DdsError::InvalidResourceDimension(other)),
        };

        (
            format,
            ConversionFlags::DX10,
            image_type,
            count,
            DDS_HEADER_SIZE + DX10_HEADER_SIZE,
        )
    } else {
        let (format, conversion) = find_legacy_format(&pixel_format, flags).ok_or(
            DdsError::UnsupportedLegacyFormat {
                flags: pixel_format.flags,
                fourcc: pixel_format.fourcc,
                bit_count: pixel_format.bit_count,
            },
        )?;

        let (image_type, count) = if header_flags & DDSD_DEPTH != 0 {
            (ImageType::Image3D, depth.max(1))
        } else if caps2 & DDSCAPS2_CUBEMAP != 0 {
            if caps2 & DDSCAPS2_CUBEMAP_ALLFACES != DDSCAPS2_CUBEMAP_ALLFACES {
                return Err(DdsError::IncompleteCubeMap);
            }
            (ImageType::ImageCube, 6)
        } else {
            (ImageType::Image2D, 1)
        };

        (format, conversion, image_type, count, DDS_HEADER_SIZE)
    };
    let (mut format, mut conversion, image_type, depth_or_array_count, mut data_offset) = header;

    if classify(format).is_compressed() && (width % 4 != 0 || height % 4 != 0) {
        return Err(DdsError::UnalignedCompressedDimensions {
            format,
            width,
            height,
        });
    }

    let max_mips = match image_type {
        ImageType::Image3D => max_mip_count(width, height, depth_or_array_count),
        _ => max_mip_count(width, height, 1),
    };
    if mip_count > max_mips {
        return Err(DdsError::InvalidMipCount {
            mip_count,
            max: max_mips,
        });
    }

    if flags.contains(DdsLegacyFlags::FORCE_RGB) {
        format = force_rgb(format, &mut conversion);
    }

    if flags.contains(DdsLegacyFlags::NO_16BPP) {
        format = expand_16bpp(format, &mut conversion);
    }

    if conversion.contains(ConversionFlags::PALETTE) {
        data_offset += DDS_PALETTE_SIZE;
        ensure_length(data, data_offset)?;
    }

    let image = ImageDescriptor {
        format,
        image_type,
        width,
        height,
        depth_or_array_count,
        mip_count,
    };

    tracing::debug!(
        format = %format,
        image_type = %image_type,
        width,
        height,
        depth_or_array_count,
        mip_count,
        conversion = conversion.bits(),
        "Parsed DDS header"
    );

    Ok(DdsInfo {
        image,
        pixel_format,
        conversion,
        pitch_flags: source_pitch_flags(flags, conversion),
        data_offset,
    })
}
