use crate::error::CliError;
use argh::FromArgs;
use bytesize::ByteSize;
use std::io::Write;
use texel_layout::{classify, max_mip_count, FormatId, ImageDescriptor, ImageType, PitchFlags};

#[derive(FromArgs, Debug)]
/// Compute the size of a whole image, including mip levels and array slices
#[argh(subcommand, name = "size")]
pub struct SizeCmd {
    /// format name or numeric code
    #[argh(positional, from_str_fn(crate::util::parse_format))]
    pub format: FormatId,

    /// width in texels
    #[argh(option)]
    pub width: u32,

    /// height in texels [default: 1]
    #[argh(option, default = "1")]
    pub height: u32,

    /// depth in texels, for 3d images [default: 1]
    #[argh(option, default = "1")]
    pub depth: u32,

    /// number of array elements; cubes count whole cubes [default: 1]
    #[argh(option, default = "1")]
    pub array: u32,

    /// number of mip levels, 0 for a full chain [default: 1]
    #[argh(option, default = "1")]
    pub mips: u32,

    /// image type (1d, 2d, 3d, cube) [default: 2d]
    #[argh(option, default = "ImageType::Image2D")]
    pub image_type: ImageType,

    /// comma separated pitch flags [default: none]
    #[argh(option, from_str_fn(crate::util::parse_pitch_flags), default = "PitchFlags::empty()")]
    pub flags: PitchFlags,
}

impl SizeCmd {
    fn descriptor(&self) -> ImageDescriptor {
        let image = match self.image_type {
            ImageType::Image1D => {
                ImageDescriptor::new_1d(self.format, self.width).with_array_count(self.array)
            }
            ImageType::Image2D => ImageDescriptor::new_2d(self.format, self.width, self.height)
                .with_array_count(self.array),
            ImageType::Image3D => {
                ImageDescriptor::new_3d(self.format, self.width, self.height, self.depth)
            }
            ImageType::ImageCube => ImageDescriptor::new_cube(self.format, self.width)
                .with_array_count(self.array.saturating_mul(6)),
        };

        let mips = match self.mips {
            0 => {
                let depth = match self.image_type {
                    ImageType::Image3D => image.depth_or_array_count,
                    _ => 1,
                };
                max_mip_count(image.width, image.height, depth)
            }
            mips => mips,
        };
        image.with_mip_count(mips)
    }
}

pub fn handle_size_command(cmd: SizeCmd, out: &mut impl Write) -> Result<(), CliError> {
    let image = cmd.descriptor();
    let info = classify(image.format);
    let total = image.size_in_bytes(cmd.flags)?;

    writeln!(
        out,
        "{} {} {}x{}, {} mip level(s), {} {}",
        image.format,
        image.image_type,
        image.width,
        image.height,
        image.mip_count,
        image.depth_or_array_count,
        match image.image_type {
            ImageType::Image3D => "slice(s)",
            ImageType::ImageCube => "face(s)",
            _ => "array element(s)",
        }
    )?;
    writeln!(
        out,
        "{:>5}  {:>15}  {:>10}  {:>12}  {:>12}",
        "level", "dimensions", "row pitch", "slice pitch", "bytes"
    )?;

    for level in 0..image.mip_count {
        let mip = image.mip_level(level);
        let layout = info.pitch_for(mip.width as i64, mip.height as i64, cmd.flags)?;
        let slices = match image.image_type {
            ImageType::Image3D => mip.depth,
            _ => image.depth_or_array_count,
        };

        writeln!(
            out,
            "{:>5}  {:>15}  {:>10}  {:>12}  {:>12}",
            level,
            format!("{}x{}x{}", mip.width, mip.height, mip.depth),
            layout.row_pitch,
            layout.slice_pitch,
            layout.slice_pitch * slices as i64
        )?;
    }

    writeln!(out, "total: {} bytes ({})", total, ByteSize::b(total as u64))?;
    Ok(())
}
