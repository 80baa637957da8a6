//! Batch generation facade.

use crate::envelope::{synthesize_command, synthesize_response, synthesize_shared};
use crate::error::{CodegenError, CodegenResult};
use crate::ir::GoFile;
use crate::mapper::TypeMapper;
use crate::options::GeneratorOptions;
use crate::render::{render_go, validate_decls};
use mdmgen_schema::SchemaDocument;
use tracing::{debug, info};

/// Header comment of files written by the `commands` subcommand.
pub const COMMANDS_HEADER: &str = "Code generated by \"mdmgen commands\"; DO NOT EDIT.";

/// Accumulates command and response types from a sequence of schema
/// documents into a single Go file.
///
/// # Example
///
/// ```
/// use mdmgen_codegen::{Generator, GeneratorOptions};
/// use mdmgen_schema::SchemaDocument;
///
/// let doc = SchemaDocument::from_yaml_str(
///     "payload:\n  requesttype: Bar\npayloadkeys:\n  - key: Foo\n    type: <string>\n",
/// )?;
///
/// let mut generator = Generator::new(GeneratorOptions::default());
/// generator.add_document(&doc)?;
/// let code = generator.render()?;
///
/// assert!(code.contains("const BarRequestType = \"Bar\""));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Generator {
    options: GeneratorOptions,
    mapper: TypeMapper,
    file: GoFile,
    documents: usize,
    /// Index of the first declaration of each added document, with its
    /// label when one was given.
    sources: Vec<(usize, Option<String>)>,
}

impl Generator {
    /// Start a new output file, emitting the shared envelope types when
    /// enabled.
    pub fn new(options: GeneratorOptions) -> Self {
        let mapper = TypeMapper::from_options(&options);
        let mut file = GoFile::new(options.package.clone()).with_header(COMMANDS_HEADER);

        if options.shared {
            synthesize_shared(&mapper, &mut file);
        }

        Self {
            options,
            mapper,
            file,
            documents: 0,
            sources: Vec::new(),
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Number of documents added so far.
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Add one command schema.
    ///
    /// Fails without touching the output when the document has no request
    /// type.
    pub fn add_document(&mut self, doc: &SchemaDocument) -> CodegenResult<()> {
        self.add(None, doc)
    }

    /// Add one command schema read from `source`.
    ///
    /// Validation errors in [`render`](Self::render) caused by this
    /// document's declarations name `source`.
    pub fn add_document_from(
        &mut self,
        source: impl Into<String>,
        doc: &SchemaDocument,
    ) -> CodegenResult<()> {
        self.add(Some(source.into()), doc)
    }

    fn add(&mut self, source: Option<String>, doc: &SchemaDocument) -> CodegenResult<()> {
        let request_type = doc.request_type()?;

        self.sources.push((self.file.decls.len(), source));

        synthesize_command(&self.mapper, &doc.payload_keys, request_type, &mut self.file);
        if self.options.responses {
            synthesize_response(&self.mapper, &doc.response_keys, request_type, &mut self.file);
        }

        self.documents += 1;
        debug!(
            request_type,
            declarations = self.file.decls.len(),
            "added command schema"
        );
        Ok(())
    }

    /// The accumulated output document.
    pub fn file(&self) -> &GoFile {
        &self.file
    }

    /// Consume the generator and return the output document.
    pub fn finish(self) -> GoFile {
        self.file
    }

    /// Label of the document that produced the declaration at `index`.
    ///
    /// `None` for the shared types and for documents added without a label.
    pub fn source_of(&self, index: usize) -> Option<&str> {
        self.sources
            .iter()
            .rev()
            .find(|(start, _)| *start <= index)
            .and_then(|(_, source)| source.as_deref())
    }

    /// Validate and render the output document.
    ///
    /// A validation error is wrapped in [`CodegenError::InDocument`] when the
    /// offending declaration came from a labelled document.
    pub fn render(&self) -> CodegenResult<String> {
        info!(
            documents = self.documents,
            declarations = self.file.decls.len(),
            "rendering Go source"
        );
        if let Err((index, error)) = validate_decls(&self.file) {
            return Err(match self.source_of(index) {
                Some(document) => CodegenError::InDocument {
                    document: document.to_string(),
                    error: Box::new(error),
                },
                None => error,
            });
        }
        render_go(&self.file)
    }
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
