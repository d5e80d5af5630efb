use crate::error::CliError;
use crate::util::*;
use argh::FromArgs;
use bytesize::ByteSize;
use std::io::Write;
use std::path::{Path, PathBuf};
use texel_layout_dds::{likely_dds, parse_dds, DdsInfo, DdsLegacyFlags};

#[derive(FromArgs, Debug)]
/// Read the header of a DDS file, or of every DDS file in a directory
#[argh(subcommand, name = "dds")]
pub struct DdsCmd {
    /// path to a DDS file or a directory to scan recursively
    #[argh(positional)]
    pub path: PathBuf,

    /// stored rows are padded to 4 bytes
    #[argh(switch)]
    pub legacy_dword: bool,

    /// reject legacy formats that need expanding
    #[argh(switch)]
    pub no_legacy_expansion: bool,

    /// do not swap red and blue of legacy R10G10B10A2 data
    #[argh(switch)]
    pub no_r10b10g10a2_fix: bool,

    /// read BGR(A/X) data as RGBA
    #[argh(switch)]
    pub force_rgb: bool,

    /// expand 16 bit B5G6R5 and B5G5R5A1 data to R8G8B8A8
    #[argh(switch)]
    pub no_16bpp: bool,
}

impl DdsCmd {
    fn legacy_flags(&self) -> DdsLegacyFlags {
        let mut flags = DdsLegacyFlags::empty();
        flags.set(DdsLegacyFlags::LEGACY_DWORD, self.legacy_dword);
        flags.set(DdsLegacyFlags::NO_LEGACY_EXPANSION, self.no_legacy_expansion);
        flags.set(DdsLegacyFlags::NO_R10B10G10A2_FIX, self.no_r10b10g10a2_fix);
        flags.set(DdsLegacyFlags::FORCE_RGB, self.force_rgb);
        flags.set(DdsLegacyFlags::NO_16BPP, self.no_16bpp);
        flags
    }
}

pub fn handle_dds_command(cmd: DdsCmd, out: &mut impl Write) -> Result<(), CliError> {
    let flags = cmd.legacy_flags();
    if !cmd.path.is_dir() {
        return with_file(&cmd.path, |data| {
            let info = parse_dds(data, flags)?;
            write_details(&info, data.len(), out)
        });
    }

    let mut entries = Vec::new();
    find_all_files(&cmd.path, &mut entries)?;
    entries.sort();

    let mut parsed = 0;
    for path in &entries {
        let result = with_file(path, |data| {
            if !likely_dds(data) {
                return Ok(false);
            }

            let info = parse_dds(data, flags)?;
            write_summary(path.strip_prefix(&cmd.path).unwrap_or(path), &info, out)?;
            Ok(true)
        });

        match result {
            Ok(true) => parsed += 1,
            Ok(false) => {}
            Err(e) => tracing::warn!(path = %path.display(), "{e}"),
        }
    }

    writeln!(out, "{parsed} DDS file(s) read out of {} file(s)", entries.len())?;
    Ok(())
}

/// Maps the file at `path` and passes its contents to `f`.
fn with_file<T>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let handle = open_read_handle(path)?;
    let size = get_file_size(&handle)? as usize;
    if size == 0 {
        return f(&[]);
    }

    let mapping = open_readonly_mmap(&handle, size)?;
    f(mapping.as_slice())
}

fn write_details(info: &DdsInfo, file_size: usize, out: &mut impl Write) -> Result<(), CliError> {
    let image = &info.image;
    writeln!(out, "format:          {} ({})", image.format, image.format.code())?;
    writeln!(out, "image type:      {}", image.image_type)?;
    writeln!(out, "dimensions:      {}x{}", image.width, image.height)?;
    writeln!(out, "depth/array:     {}", image.depth_or_array_count)?;
    writeln!(out, "mip levels:      {}", image.mip_count)?;
    writeln!(out, "conversion:      {:?}", info.conversion)?;
    writeln!(out, "pitch flags:     {:?}", info.pitch_flags)?;
    writeln!(out, "data offset:     {}", info.data_offset)?;

    match info.data_length() {
        Ok(length) => {
            writeln!(
                out,
                "data length:     {} ({})",
                length,
                ByteSize::b(length as u64)
            )?;
            let available = file_size.saturating_sub(info.data_offset);
            if available < length {
                writeln!(out, "warning:         file is {} bytes short", length - available)?;
            } else if available > length {
                writeln!(out, "trailing bytes:  {}", available - length)?;
            }
        }
        Err(e) => writeln!(out, "data length:     unknown ({e})")?,
    }
    Ok(())
}

fn write_summary(path: &Path, info: &DdsInfo, out: &mut impl Write) -> Result<(), CliError> {
    let image = &info.image;
    let length = info
        .data_length()
        .map(|length| ByteSize::b(length as u64).to_string())
        .unwrap_or_else(|_| "?".to_string());

    writeln!(
        out,
        "{}: {} {} {}x{} x{} mips={} data={}",
        path.display(),
        image.format,
        image.image_type,
        image.width,
        image.height,
        image.depth_or_array_count,
        image.mip_count,
        length
    )?;
    Ok(())
}
