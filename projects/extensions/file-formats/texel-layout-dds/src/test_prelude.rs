//! Common test imports and utilities for DDS tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;

// Re-export commonly used alloc types for tests
pub use alloc::{format, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::dds::constants::*;
use crate::dds::DdsPixelFormat;
use endian_writer::{EndianReader, EndianWriter, LittleEndianReader, LittleEndianWriter};

/// Total size of DDS header + DX10 header (used in tests)
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

/// Writes a little endian `u32` at `offset`.
pub fn write_u32(data: &mut [u8], offset: usize, value: u32) {
    assert!(offset + 4 <= data.len());
    unsafe {
        let mut writer = LittleEndianWriter::new(data.as_mut_ptr());
        writer.write_u32_at(value, offset as isize);
    }
}

/// Reads a little endian `u32` at `offset`.
pub fn read_u32(data: &[u8], offset: usize) -> u32 {
    assert!(offset + 4 <= data.len());
    unsafe {
        let mut reader = LittleEndianReader::new(data.as_ptr());
        reader.read_u32_at(offset as isize)
    }
}

/// Helper function to create a basic DDS header with common fields
fn create_dds_header_base(data: &mut [u8], width: u32, height: u32, mipmap_count: u32) {
    write_u32(data, 0, DDS_MAGIC);
    write_u32(data, DDS_SIZE_OFFSET, DDS_HEADER_STRUCT_SIZE);

    let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
    if mipmap_count > 1 {
        flags |= DDSD_MIPMAPCOUNT;
        write_u32(data, DDS_MIPMAP_COUNT_OFFSET, mipmap_count);
    }
    write_u32(data, DDS_FLAGS_OFFSET, flags);
    write_u32(data, DDS_HEIGHT_OFFSET, height);
    write_u32(data, DDS_WIDTH_OFFSET, width);
    write_u32(data, DDS_PIXELFORMAT_OFFSET, DDS_PIXELFORMAT_STRUCT_SIZE);
}

fn write_pixel_format(data: &mut [u8], pixel_format: &DdsPixelFormat) {
    write_u32(data, DDS_PIXELFORMAT_FLAGS_OFFSET, pixel_format.flags);
    write_u32(data, FOURCC_OFFSET, pixel_format.fourcc);
    write_u32(data, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET, pixel_format.bit_count);
    write_u32(data, DDS_PIXELFORMAT_RBITMASK_OFFSET, pixel_format.red_mask);
    write_u32(data, DDS_PIXELFORMAT_GBITMASK_OFFSET, pixel_format.green_mask);
    write_u32(data, DDS_PIXELFORMAT_BBITMASK_OFFSET, pixel_format.blue_mask);
    write_u32(data, DDS_PIXELFORMAT_ABITMASK_OFFSET, pixel_format.alpha_mask);
}

/// Creates a header-only legacy DDS file with the given pixel format.
///
/// Block compressed formats get enough zeroed pixel data for the top mip level appended.
pub fn create_legacy_dds(
    pixel_format: &DdsPixelFormat,
    width: u32,
    height: u32,
    mipmap_count: u32,
) -> Vec<u8> {
    let payload = if pixel_format.flags & DDPF_FOURCC != 0 {
        (width as usize).div_ceil(4) * (height as usize).div_ceil(4) * 16
    } else {
        0
    };

    let mut data = vec![0u8; DDS_HEADER_SIZE + payload];
    create_dds_header_base(&mut data, width, height, mipmap_count);
    write_pixel_format(&mut data, pixel_format);
    data
}

/// Creates a header-only DDS file with a DX10 extension header.
pub fn create_dx10_dds(
    dxgi_format: u32,
    dimension: u32,
    misc_flags: u32,
    array_size: u32,
    width: u32,
    height: u32,
    mipmap_count: u32,
) -> Vec<u8> {
    let mut data = vec![0u8; DDS_DX10_TOTAL_HEADER_SIZE];
    create_dds_header_base(&mut data, width, height, mipmap_count);
    write_pixel_format(&mut data, &DdsPixelFormat::fourcc(FOURCC_DX10));
    write_u32(&mut data, DX10_FORMAT_OFFSET, dxgi_format);
    write_u32(&mut data, DX10_RESOURCE_DIMENSION_OFFSET, dimension);
    write_u32(&mut data, DX10_MISC_FLAG_OFFSET, misc_flags);
    write_u32(&mut data, DX10_ARRAY_SIZE_OFFSET, array_size);
    data
}
