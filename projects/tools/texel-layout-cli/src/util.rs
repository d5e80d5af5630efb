use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::path::*;
use texel_layout::{FormatId, PitchFlags};

/// Parses a format given either by name (`BC1_UNorm`, `DXGI_FORMAT_BC1_UNORM`) or by its
/// numeric `DXGI_FORMAT` code.
pub fn parse_format(value: &str) -> Result<FormatId, String> {
    let value = value.trim();
    if let Ok(code) = value.parse::<u32>() {
        return FormatId::try_from(code).map_err(|e| e.to_string());
    }

    value
        .parse::<FormatId>()
        .map_err(|_| format!("Unknown format: {value}. Use `list` to see valid formats"))
}

/// Parses a comma separated list of pitch flags, e.g. `legacy-dword,bpp24`.
pub fn parse_pitch_flags(value: &str) -> Result<PitchFlags, String> {
    let mut flags = PitchFlags::empty();
    for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        flags |= match name.to_lowercase().as_str() {
            "none" => PitchFlags::empty(),
            "legacy-dword" => PitchFlags::LEGACY_DWORD,
            "align16" => PitchFlags::ALIGN_16_BYTE,
            "align32" => PitchFlags::ALIGN_32_BYTE,
            "align64" => PitchFlags::ALIGN_64_BYTE,
            "align4k" => PitchFlags::ALIGN_4K,
            "bpp24" => PitchFlags::BPP24,
            "bpp16" => PitchFlags::BPP16,
            "bpp8" => PitchFlags::BPP8,
            _ => {
                return Err(format!(
                    "Invalid pitch flag: {name}. Valid flags are: none, legacy-dword, align16, \
                     align32, align64, align4k, bpp24, bpp16, bpp8"
                ))
            }
        };
    }
    Ok(flags)
}

/// Recursively visits directories and collects entries.
///
/// Directories or entries that cannot be read are skipped.
pub fn find_all_files(dir: &Path, entries: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(path);
        }
    }
    Ok(())
}

/// Opens a file in read-only mode and returns a handle.
#[inline(always)]
pub fn open_read_handle(path: &Path) -> Result<ReadOnlyFileHandle, CliError> {
    ReadOnlyFileHandle::open(&*path.to_string_lossy())
        .map_err(|e| CliError::MmapError(e.to_string()))
}

/// Creates a read-only memory mapping of the first `len` bytes of the file.
#[inline(always)]
pub fn open_readonly_mmap(
    handle: &ReadOnlyFileHandle,
    len: usize,
) -> Result<ReadOnlyMmap<'_>, CliError> {
    ReadOnlyMmap::new(handle, 0, len).map_err(|e| CliError::MmapError(e.to_string()))
}

/// Retrieves the size of the file for a given handle.
#[inline(always)]
pub fn get_file_size(handle: &ReadOnlyFileHandle) -> Result<i64, CliError> {
    handle
        .size()
        .map_err(|e| CliError::MmapError(e.to_string()))
}
