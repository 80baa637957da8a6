#![allow(non_snake_case)]

use super::*;
use crate::error::CodegenError;
use mdmgen_schema::{Key, SchemaError, TypeTag};

fn command(request_type: &str, keys: Vec<Key>) -> SchemaDocument {
    let mut doc = SchemaDocument::default();
    doc.payload.request_type = Some(request_type.to_string());
    doc.payload_keys = keys;
    doc
}

fn bare_options() -> GeneratorOptions {
    GeneratorOptions {
        shared: false,
        responses: false,
        ..GeneratorOptions::default()
    }
}

fn decl_names(generator: &Generator) -> Vec<String> {
    generator
        .file()
        .decls
        .iter()
        .map(|d| d.name().to_string())
        .collect()
}

#[test]
fn Generator___new_with_defaults___emits_shared_types_and_header() {
    let generator = Generator::new(GeneratorOptions::default());

    assert_eq!(
        decl_names(&generator),
        ["GenericCommandPayload", "GenericCommand", "GenericResponse"]
    );
    assert_eq!(generator.file().header.as_deref(), Some(COMMANDS_HEADER));
    assert_eq!(generator.file().package, "main");
}

#[test]
fn Generator___shared_disabled___starts_empty() {
    let generator = Generator::new(bare_options());

    assert!(generator.file().decls.is_empty());
    assert_eq!(generator.document_count(), 0);
}

#[test]
fn Generator___add_document___emits_command_and_response() {
    let mut generator = Generator::new(GeneratorOptions {
        shared: false,
        ..GeneratorOptions::default()
    });

    generator
        .add_document(&command("Bar", vec![Key::new("Foo", TypeTag::String).required()]))
        .unwrap();

    assert_eq!(
        decl_names(&generator),
        [
            "BarRequestType",
            "BarPayload",
            "BarCommand",
            "NewBarCommand",
            "BarResponse"
        ]
    );
    assert_eq!(generator.document_count(), 1);
}

#[test]
fn Generator___responses_disabled___no_response_struct() {
    let mut generator = Generator::new(bare_options());

    generator.add_document(&command("Bar", vec![])).unwrap();

    assert!(generator.file().find_struct("BarResponse").is_none());
}

#[test]
fn Generator___response_keys___mapped_into_response() {
    let mut doc = command("Bar", vec![]);
    doc.response_keys = vec![Key::new("Result", TypeTag::Integer).optional()];
    let mut generator = Generator::new(GeneratorOptions::default());

    generator.add_document(&doc).unwrap();

    let response = generator.file().find_struct("BarResponse").unwrap();
    assert_eq!(response.field_names(), ["Result", "CommandUUID", "Status"]);
}

#[test]
fn Generator___missing_request_type___error_and_no_output() {
    let mut generator = Generator::new(bare_options());
    let mut declaration = SchemaDocument::default();
    declaration.payload.declaration_type = Some("com.apple.configuration.passcode.settings".into());
    declaration.payload_keys = vec![Key::new("MinimumLength", TypeTag::Integer)];

    let err = generator.add_document(&declaration).unwrap_err();

    assert!(matches!(
        err,
        CodegenError::Schema(SchemaError::MissingField { .. })
    ));
    assert!(generator.file().decls.is_empty());
    assert_eq!(generator.document_count(), 0);
}

#[test]
fn Generator___documents_in_order___declarations_follow_input_order() {
    let mut generator = Generator::new(bare_options());

    generator.add_document(&command("Second", vec![])).unwrap();
    generator.add_document(&command("First", vec![])).unwrap();

    let names = decl_names(&generator);
    assert_eq!(names[0], "SecondRequestType");
    assert_eq!(names[4], "FirstRequestType");
}

#[test]
fn Generator___same_request_type_twice___render_fails() {
    let mut generator = Generator::new(bare_options());
    generator.add_document(&command("Bar", vec![])).unwrap();
    generator.add_document(&command("Bar", vec![])).unwrap();

    let err = generator.render().unwrap_err();

    assert!(matches!(err, CodegenError::DuplicateDeclaration { name } if name == "BarRequestType"));
}

#[test]
fn Generator___collision_in_labelled_document___error_names_later_document() {
    let settings = || vec![Key::dictionary("Settings", vec![])];
    let mut generator = Generator::new(bare_options());
    generator
        .add_document_from("a.yaml", &command("A", settings()))
        .unwrap();
    generator
        .add_document_from("b.yaml", &command("B", settings()))
        .unwrap();

    let err = generator.render().unwrap_err();

    match err {
        CodegenError::InDocument { document, error } => {
            assert_eq!(document, "b.yaml");
            assert!(
                matches!(*error, CodegenError::DuplicateDeclaration { ref name } if name == "Settings")
            );
        }
        other => panic!("expected InDocument, got {other:?}"),
    }
}

#[test]
fn Generator___source_of___maps_declaration_index_to_document() {
    let mut generator = Generator::new(GeneratorOptions {
        responses: false,
        ..GeneratorOptions::default()
    });
    let shared = generator.file().decls.len();
    generator
        .add_document_from("first.yaml", &command("First", vec![]))
        .unwrap();
    generator.add_document(&command("Second", vec![])).unwrap();

    assert_eq!(generator.source_of(0), None);
    assert_eq!(generator.source_of(shared), Some("first.yaml"));
    assert_eq!(generator.source_of(shared + 3), Some("first.yaml"));
    assert_eq!(generator.source_of(shared + 4), None);
}

#[test]
fn Generator___custom_package___used_in_package_clause() {
    let mut generator = Generator::new(bare_options().with_package("mdmcommands"));
    generator.add_document(&command("Bar", vec![])).unwrap();

    let code = generator.render().unwrap();

    assert!(code.contains("\npackage mdmcommands\n"));
}

#[test]
fn Generator___string_maps_option___passed_to_mapper() {
    let apps = Key::dictionary(
        "Apps",
        vec![Key::dictionary("ANY", vec![Key::new("Version", TypeTag::String)])],
    );
    let mut generator = Generator::new(GeneratorOptions {
        string_maps: true,
        ..bare_options()
    });

    generator.add_document(&command("Bar", vec![apps])).unwrap();

    let field = generator.file().find_struct("BarPayload").unwrap().field("Apps").unwrap();
    assert_eq!(field.ty.to_string(), "map[string]Apps");
}

#[test]
fn Generator___finish___returns_accumulated_file() {
    let mut generator = Generator::new(bare_options());
    generator.add_document(&command("Bar", vec![])).unwrap();

    let file = generator.finish();

    assert_eq!(file.decls.len(), 4);
}
