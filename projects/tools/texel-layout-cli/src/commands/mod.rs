pub mod dds;
pub mod info;
pub mod list;
pub mod pitch;
pub mod size;
