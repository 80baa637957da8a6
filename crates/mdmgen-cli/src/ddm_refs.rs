//! The `ddm-refs` subcommand: declaration reference table

use crate::config::Config;
use crate::output::write_output;
use anyhow::{Context, Result};
use mdmgen_codegen::render_go;
use mdmgen_codegen::{ReferenceMap, references_file};
use mdmgen_schema::SchemaDocument;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Command-line settings that override the `[refs]` table.
#[derive(Debug, Default)]
pub struct DdmRefsArgs {
    pub dir: PathBuf,
    pub output: String,
    pub config: Option<PathBuf>,
    pub package: Option<String>,
    pub name: Option<String>,
}

pub fn run(args: DdmRefsArgs) -> Result<ReferenceMap> {
    let config = Config::load(args.config.as_deref())?;
    let package = args.package.unwrap_or(config.refs.package);
    let name = args.name.unwrap_or(config.refs.name);

    if !args.dir.is_dir() {
        anyhow::bail!("Schema directory not found: {:?}", args.dir);
    }

    let mut refs = scan_directory(&args.dir)?;
    refs.add_builtin_references();

    let code = render_go(&references_file(&package, &name, &refs))
        .context("Failed to render declaration references")?;
    write_output(&args.output, &code)?;

    Ok(refs)
}

/// Collect references from every `.yaml` file below `dir`, visiting files in
/// name order.
pub fn scan_directory(dir: &Path) -> Result<ReferenceMap> {
    let mut refs = ReferenceMap::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {dir:?}"))?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "yaml") {
            continue;
        }

        match SchemaDocument::from_file(path) {
            Ok(doc) => {
                if refs.add_document(&doc) {
                    tracing::info!(path = %path.display(), "recorded declaration references");
                }
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "skipping schema: {err}");
            }
        }
    }

    Ok(refs)
}
