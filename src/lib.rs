pub mod aws_config;
pub mod cli;
pub mod directory;
pub mod drs;
pub mod error;
pub mod tags;
pub mod templates;

pub use drs::{DrsClient, LaunchConfiguration, ServerPage, ServerRecord, SourceServerApi, TagSet};
pub use error::Error;
pub use tags::TagIndex;
