//! Report generation: root check, output file, header, walk.

use std::fs::File;
use std::io::BufWriter;

use crate::error::{EstructuraError, Result};
use crate::output::{ReportConfig, TextFormatter};
use crate::tree::{TreeWalker, WalkSummary};

/// Write the outline of `config.root` into `config.output`.
///
/// The root is checked once up front; when it is missing the output file is
/// never created. Every other failure aborts the run as soon as it happens.
pub fn generate_report(config: &ReportConfig) -> Result<WalkSummary> {
    if !config.root.exists() {
        return Err(EstructuraError::RootNotFound {
            path: config.root.clone(),
        });
    }

    let file = File::create(&config.output).map_err(|source| EstructuraError::CreateOutput {
        path: config.output.clone(),
        source,
    })?;
    let mut formatter = TextFormatter::new(config.walker.indent.clone(), BufWriter::new(file));
    formatter.write_header(&config.title)?;

    let walker = TreeWalker::new(config.walker.clone());
    walker.walk(&config.root, &mut formatter)
}
