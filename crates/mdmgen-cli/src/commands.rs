//! The `commands` subcommand: MDM command schemas to Go types

use crate::config::Config;
use crate::output::write_output;
use anyhow::{Context, Result};
use mdmgen_codegen::{Generator, GeneratorOptions};
use mdmgen_schema::SchemaDocument;
use std::path::{Path, PathBuf};

/// Command-line settings that override the `[generator]` table.
#[derive(Debug, Default)]
pub struct CommandsArgs {
    pub inputs: Vec<PathBuf>,
    pub output: String,
    pub config: Option<PathBuf>,
    pub package: Option<String>,
    pub no_responses: bool,
    pub no_shared: bool,
    pub string_maps: bool,
    pub describe_fields: bool,
}

impl CommandsArgs {
    /// Apply the flags on top of the configured options.
    pub fn options(&self, mut options: GeneratorOptions) -> GeneratorOptions {
        if let Some(package) = &self.package {
            options.package = package.clone();
        }
        if self.no_responses {
            options.responses = false;
        }
        if self.no_shared {
            options.shared = false;
        }
        if self.string_maps {
            options.string_maps = true;
        }
        if self.describe_fields {
            options.describe_fields = true;
        }
        options
    }
}

/// Outcome of a batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub generated: usize,
    pub skipped: usize,
}

pub fn run(args: CommandsArgs) -> Result<BatchSummary> {
    let config = Config::load(args.config.as_deref())?;
    let options = args.options(config.generator);
    tracing::debug!(?options, "generator options");

    let mut generator = Generator::new(options);
    let mut summary = BatchSummary::default();

    for input in &args.inputs {
        match add_input(&mut generator, input) {
            Ok(request_type) => {
                tracing::info!(path = %input.display(), %request_type, "generated command");
                summary.generated += 1;
            }
            Err(err) => {
                tracing::error!(path = %input.display(), "skipping input: {err:#}");
                summary.skipped += 1;
            }
        }
    }

    let code = generator
        .render()
        .context("Failed to render generated commands")?;
    write_output(&args.output, &code)?;

    if summary.skipped > 0 {
        tracing::warn!(
            generated = summary.generated,
            skipped = summary.skipped,
            "some inputs were skipped"
        );
    }
    Ok(summary)
}

fn add_input(generator: &mut Generator, path: &Path) -> Result<String> {
    let doc = SchemaDocument::from_file(path)?;
    generator.add_document_from(path.display().to_string(), &doc)?;
    Ok(doc.request_type()?.to_string())
}
