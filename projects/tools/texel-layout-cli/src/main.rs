#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Inspect texel formats, image sizes and DDS headers
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Info(commands::info::InfoCmd),
    Pitch(commands::pitch::PitchCmd),
    List(commands::list::ListCmd),
    Size(commands::size::SizeCmd),
    Dds(commands::dds::DdsCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    // Diagnostics go to stderr, controlled by RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli: TopLevel = argh::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Info(cmd) => commands::info::handle_info_command(cmd, &mut out)?,
        Commands::Pitch(cmd) => commands::pitch::handle_pitch_command(cmd, &mut out)?,
        Commands::List(cmd) => commands::list::handle_list_command(cmd, &mut out)?,
        Commands::Size(cmd) => commands::size::handle_size_command(cmd, &mut out)?,
        Commands::Dds(cmd) => commands::dds::handle_dds_command(cmd, &mut out)?,
    }

    Ok(())
}
