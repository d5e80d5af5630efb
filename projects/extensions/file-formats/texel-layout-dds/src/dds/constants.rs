//! DDS format constants and definitions
#![allow(dead_code)]

/// Magic header for DDS files
pub(crate) const DDS_MAGIC: u32 = 0x44445320_u32.to_be();

// Size of the regular DDS header, including the magic
pub(crate) const DDS_HEADER_SIZE: usize = 0x80;
pub(crate) const DX10_HEADER_SIZE: usize = 20;

/// Value of `dwSize` in a valid header (the header without the magic).
pub(crate) const DDS_HEADER_STRUCT_SIZE: u32 = 124;
/// Value of `ddspf.dwSize` in a valid header.
pub(crate) const DDS_PIXELFORMAT_STRUCT_SIZE: u32 = 32;

/// Bytes of palette data (256 ARGB entries) following the header of palettized files.
pub(crate) const DDS_PALETTE_SIZE: usize = 256 * 4;

// DDS header field offsets
pub(crate) const DDS_SIZE_OFFSET: usize = 0x04;
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;
pub(crate) const DDS_CAPS2_OFFSET: usize = 0x70;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
/// Offset of the FOURCC header used in DX9 and below.
pub(crate) const FOURCC_OFFSET: usize = 0x54;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

// DX10 header field offsets
pub(crate) const DX10_FORMAT_OFFSET: usize = 0x80;
pub(crate) const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x84;
pub(crate) const DX10_MISC_FLAG_OFFSET: usize = 0x88;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x8C;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PITCH: u32 = 0x8;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;
pub(crate) const DDSD_DEPTH: u32 = 0x800000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_ALPHA: u32 = 0x2;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_PALETTEINDEXED8: u32 = 0x20;
pub(crate) const DDPF_RGB: u32 = 0x40;
pub(crate) const DDPF_RGBA: u32 = DDPF_RGB | DDPF_ALPHAPIXELS;
pub(crate) const DDPF_YUV: u32 = 0x200;
pub(crate) const DDPF_LUMINANCE: u32 = 0x20000;
pub(crate) const DDPF_LUMINANCE_ALPHA: u32 = DDPF_LUMINANCE | DDPF_ALPHAPIXELS;

// DDS caps2 flags
pub(crate) const DDSCAPS2_CUBEMAP: u32 = 0x200;
/// Cube map flag plus all six face flags.
pub(crate) const DDSCAPS2_CUBEMAP_ALLFACES: u32 = 0xFE00;
pub(crate) const DDSCAPS2_VOLUME: u32 = 0x200000;

// DX10 header values
pub(crate) const DDS_DIMENSION_TEXTURE1D: u32 = 2;
pub(crate) const DDS_DIMENSION_TEXTURE2D: u32 = 3;
pub(crate) const DDS_DIMENSION_TEXTURE3D: u32 = 4;
pub(crate) const DDS_RESOURCE_MISC_TEXTURECUBE: u32 = 0x4;

/// Builds a FOURCC code as stored (little endian) in the header.
pub(crate) const fn make_fourcc(code: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*code)
}

pub(crate) const FOURCC_DXT1: u32 = make_fourcc(b"DXT1");
pub(crate) const FOURCC_DXT2: u32 = make_fourcc(b"DXT2");
pub(crate) const FOURCC_DXT3: u32 = make_fourcc(b"DXT3");
pub(crate) const FOURCC_DXT4: u32 = make_fourcc(b"DXT4");
pub(crate) const FOURCC_DXT5: u32 = make_fourcc(b"DXT5");
pub(crate) const FOURCC_BC4U: u32 = make_fourcc(b"BC4U");
pub(crate) const FOURCC_BC4S: u32 = make_fourcc(b"BC4S");
pub(crate) const FOURCC_BC5U: u32 = make_fourcc(b"BC5U");
pub(crate) const FOURCC_BC5S: u32 = make_fourcc(b"BC5S");
pub(crate) const FOURCC_ATI1: u32 = make_fourcc(b"ATI1");
pub(crate) const FOURCC_ATI2: u32 = make_fourcc(b"ATI2");
pub(crate) const FOURCC_RGBG: u32 = make_fourcc(b"RGBG");
pub(crate) const FOURCC_GRGB: u32 = make_fourcc(b"GRGB");
pub(crate) const FOURCC_DX10: u32 = make_fourcc(b"DX10");

// D3DFMT values stored directly in the FOURCC field
pub(crate) const D3DFMT_A16B16G16R16: u32 = 36;
pub(crate) const D3DFMT_Q16W16V16U16: u32 = 110;
pub(crate) const D3DFMT_R16F: u32 = 111;
pub(crate) const D3DFMT_G16R16F: u32 = 112;
pub(crate) const D3DFMT_A16B16G16R16F: u32 = 113;
pub(crate) const D3DFMT_R32F: u32 = 114;
pub(crate) const D3DFMT_G32R32F: u32 = 115;
pub(crate) const D3DFMT_A32B32G32R32F: u32 = 116;
