use crate::error::CliError;
use argh::FromArgs;
use std::io::Write;
use texel_layout::{classify, FormatId, PitchFlags};

#[derive(FromArgs, Debug)]
/// Compute the row and slice pitch of a single image slice
#[argh(subcommand, name = "pitch")]
pub struct PitchCmd {
    /// format name or numeric code
    #[argh(positional, from_str_fn(crate::util::parse_format))]
    pub format: FormatId,

    /// width in texels
    #[argh(option)]
    pub width: i64,

    /// height in texels
    #[argh(option)]
    pub height: i64,

    /// comma separated pitch flags (legacy-dword, align16, align32, align64, align4k, bpp24,
    /// bpp16, bpp8) [default: none]
    #[argh(option, from_str_fn(crate::util::parse_pitch_flags), default = "PitchFlags::empty()")]
    pub flags: PitchFlags,
}

pub fn handle_pitch_command(cmd: PitchCmd, out: &mut impl Write) -> Result<(), CliError> {
    let info = classify(cmd.format);
    let layout = info.pitch_for(cmd.width, cmd.height, cmd.flags)?;

    writeln!(out, "{} {}x{}", cmd.format, cmd.width, cmd.height)?;
    writeln!(out, "  row pitch:    {}", layout.row_pitch)?;
    writeln!(out, "  slice pitch:  {}", layout.slice_pitch)?;
    if info.is_compressed() {
        writeln!(
            out,
            "  blocks:       {}x{}",
            layout.block_count_x, layout.block_count_y
        )?;
    }
    writeln!(out, "  scanlines:    {}", info.scanlines(cmd.height))?;
    Ok(())
}
