use crate::error::CliError;
use argh::FromArgs;
use std::io::Write;
use texel_layout::{classify, FormatId, FormatInfo};

#[derive(FromArgs, Debug)]
/// List known formats
#[argh(subcommand, name = "list")]
pub struct ListCmd {
    /// only block compressed formats
    #[argh(switch)]
    pub compressed: bool,

    /// only planar formats
    #[argh(switch)]
    pub planar: bool,

    /// only packed formats
    #[argh(switch)]
    pub packed: bool,

    /// only typeless formats
    #[argh(switch)]
    pub typeless: bool,
}

impl ListCmd {
    /// A format is listed if it matches any requested category, or if none was requested.
    fn accepts(&self, info: &FormatInfo) -> bool {
        let any_filter = self.compressed || self.planar || self.packed || self.typeless;
        !any_filter
            || (self.compressed && info.is_compressed())
            || (self.planar && info.is_planar())
            || (self.packed && info.is_packed())
            || (self.typeless && info.is_typeless())
    }
}

pub fn handle_list_command(cmd: ListCmd, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{:>5}  {:<28} {:>5}  group", "code", "name", "bits")?;
    for &id in FormatId::all_values() {
        let info = classify(id);
        if !cmd.accepts(info) {
            continue;
        }

        writeln!(
            out,
            "{:>5}  {:<28} {:>5}  {}",
            id.code(),
            id.name(),
            info.bit_depth(),
            info.group().name()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cmd: ListCmd) -> Vec<String> {
        let mut out = Vec::new();
        handle_list_command(cmd, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .skip(1)
            .map(|line| line.to_string())
            .collect()
    }

    fn filter() -> ListCmd {
        ListCmd {
            compressed: false,
            planar: false,
            packed: false,
            typeless: false,
        }
    }

    #[test]
    fn lists_everything_without_filters() {
        assert_eq!(run(filter()).len(), FormatId::COUNT);
    }

    #[test]
    fn lists_only_planar_formats() {
        let lines = run(ListCmd {
            planar: true,
            ..filter()
        });
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().any(|line| line.contains("NV12")));
        assert!(lines.iter().all(|line| !line.contains("BC1_UNorm")));
    }

    #[test]
    fn filters_combine_as_union() {
        let compressed = run(ListCmd {
            compressed: true,
            ..filter()
        });
        let packed = run(ListCmd {
            packed: true,
            ..filter()
        });
        let both = run(ListCmd {
            compressed: true,
            packed: true,
            ..filter()
        });
        assert_eq!(both.len(), compressed.len() + packed.len());
    }
}
