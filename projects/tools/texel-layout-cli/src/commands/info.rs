use crate::error::CliError;
use argh::FromArgs;
use std::io::Write;
use texel_layout::{classify, FormatId};

#[derive(FromArgs, Debug)]
/// Print the classification of a format
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// format name (e.g. BC1_UNorm, DXGI_FORMAT_R8G8B8A8_UNORM) or numeric code
    #[argh(positional, from_str_fn(crate::util::parse_format))]
    pub format: FormatId,
}

pub fn handle_info_command(cmd: InfoCmd, out: &mut impl Write) -> Result<(), CliError> {
    write_info(cmd.format, out)
}

pub(crate) fn write_info(format: FormatId, out: &mut impl Write) -> Result<(), CliError> {
    let info = classify(format);
    let kind = if info.is_compressed() {
        "block compressed"
    } else if info.is_planar() {
        "planar"
    } else if info.is_packed() {
        "packed"
    } else {
        "linear"
    };

    writeln!(out, "{} ({})", format, format.code())?;
    writeln!(out, "  group:           {}", info.group())?;
    writeln!(out, "  layout:          {kind}")?;
    writeln!(out, "  bit depth:       {}", info.bit_depth())?;
    writeln!(out, "  components:      {}", info.component_count())?;
    writeln!(out, "  size in bytes:   {}", info.size_in_bytes())?;
    writeln!(out, "  typeless:        {}", info.is_typeless())?;
    writeln!(out, "  srgb:            {}", info.is_srgb())?;
    writeln!(out, "  alpha:           {}", info.has_alpha())?;
    writeln!(out, "  depth:           {}", info.has_depth())?;
    writeln!(out, "  stencil:         {}", info.has_stencil())?;
    writeln!(out, "  palettized:      {}", info.is_palettized())?;
    Ok(())
}
