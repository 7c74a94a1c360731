pub mod output;

pub use output::{create_writer, OutputFormat, ReportWriter};

use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
