use std::io;
use texel_layout::LayoutError;
use texel_layout_dds::DdsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Dds(#[from] DdsError),
    #[error("Memory mapping error: {0}")]
    MmapError(String),
}
