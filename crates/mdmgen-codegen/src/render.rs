//! Go source rendering.
//!
//! [`render_go`] turns a finished [`GoFile`] into source text. The file is
//! validated first, so a document that would not compile (an empty or
//! non-ASCII identifier, two structs with the same name, two fields that
//! normalize to the same Go name) is reported as an error instead of being
//! written out.
//!
//! Layout follows `gofmt`: tab indentation, struct fields aligned in columns
//! with spaces, one blank line between declarations.

use crate::error::{CodegenError, CodegenResult};
use crate::ir::{Decl, Expr, FuncDecl, GoFile, StructDecl};
use crate::naming::is_go_identifier;
use std::collections::HashSet;

/// Validate and render a Go source file.
pub fn render_go(file: &GoFile) -> CodegenResult<String> {
    validate(file)?;

    let mut code = String::new();

    if let Some(header) = &file.header {
        for line in header.lines() {
            push_comment_line(&mut code, line, 0);
        }
        code.push('\n');
    }

    code.push_str(&format!("package {}\n", file.package));

    match file.imports.len() {
        0 => {}
        1 => {
            for import in &file.imports {
                code.push_str(&format!("\nimport {}\n", go_quote(import)));
            }
        }
        _ => {
            code.push_str("\nimport (\n");
            for import in &file.imports {
                code.push_str(&format!("\t{}\n", go_quote(import)));
            }
            code.push_str(")\n");
        }
    }

    for decl in &file.decls {
        code.push('\n');
        render_decl(&mut code, decl);
    }

    Ok(code)
}

/// Check every identifier the file declares.
pub fn validate(file: &GoFile) -> CodegenResult<()> {
    check_identifier(&file.package, || "package clause".to_string())?;
    validate_decls(file).map_err(|(_, err)| err)
}

/// Check the declarations, reporting the index of the first one at fault.
///
/// For a repeated name that is the later of the two declarations.
pub(crate) fn validate_decls(file: &GoFile) -> Result<(), (usize, CodegenError)> {
    let mut declared = HashSet::new();
    for (index, decl) in file.decls.iter().enumerate() {
        check_decl(decl, &mut declared).map_err(|err| (index, err))?;
    }
    Ok(())
}

fn check_decl<'a>(decl: &'a Decl, declared: &mut HashSet<&'a str>) -> CodegenResult<()> {
    let name = decl.name();
    check_identifier(name, || "top-level declaration".to_string())?;
    if !declared.insert(name) {
        return Err(CodegenError::DuplicateDeclaration {
            name: name.to_string(),
        });
    }

    if let Decl::Struct(s) = decl {
        let mut fields = HashSet::new();
        for field in &s.fields {
            check_identifier(&field.name, || format!("field of struct {}", s.name))?;
            if !fields.insert(field.name.as_str()) {
                return Err(CodegenError::DuplicateField {
                    ty: s.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    Ok(())
}

fn check_identifier(name: &str, context: impl FnOnce() -> String) -> CodegenResult<()> {
    if is_go_identifier(name) {
        Ok(())
    } else {
        Err(CodegenError::InvalidIdentifier {
            name: name.to_string(),
            context: context(),
        })
    }
}

fn render_decl(code: &mut String, decl: &Decl) {
    match decl {
        Decl::Const { name, value } => {
            code.push_str(&format!("const {} = {}\n", name, go_quote(value)));
        }
        Decl::Struct(s) => render_struct(code, s),
        Decl::Func(f) => render_func(code, f),
        Decl::Var { name, doc, value } => {
            for line in doc {
                push_comment_line(code, line, 0);
            }
            code.push_str(&format!("var {} = ", name));
            render_expr(code, value, 0);
            code.push('\n');
        }
    }
}

fn render_struct(code: &mut String, decl: &StructDecl) {
    if decl.fields.is_empty() {
        code.push_str(&format!("type {} struct{{}}\n", decl.name));
        return;
    }

    // name, type, tag, comment
    let rows: Vec<[String; 4]> = decl
        .fields
        .iter()
        .map(|field| {
            [
                field.name.clone(),
                field.ty.to_string(),
                field.tag.as_deref().map(struct_tag).unwrap_or_default(),
                field
                    .comment
                    .as_deref()
                    .map(|c| format!("// {}", single_line(c)))
                    .unwrap_or_default(),
            ]
        })
        .collect();

    let mut widths = [0usize; 3];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    code.push_str(&format!("type {} struct {{\n", decl.name));
    for [name, ty, tag, comment] in &rows {
        // A comment on an untagged field takes the tag column.
        let mut cells = vec![pad(name, widths[0]), pad(ty, widths[1])];
        if !tag.is_empty() {
            cells.push(pad(tag, widths[2]));
        }
        if !comment.is_empty() {
            cells.push(comment.clone());
        }
        code.push('\t');
        code.push_str(cells.join(" ").trim_end());
        code.push('\n');
    }
    code.push_str("}\n");
}

fn render_func(code: &mut String, func: &FuncDecl) {
    for line in &func.doc {
        push_comment_line(code, line, 0);
    }
    code.push_str(&format!("func {}() {} {{\n", func.name, func.returns));
    code.push_str("\treturn ");
    render_expr(code, &func.body, 1);
    code.push_str("\n}\n");
}

fn render_expr(code: &mut String, expr: &Expr, indent: usize) {
    match expr {
        Expr::Ident(name) => code.push_str(name),
        Expr::Str(value) => code.push_str(&go_quote(value)),
        Expr::AddressOf(inner) => {
            code.push('&');
            render_expr(code, inner, indent);
        }
        Expr::Struct { ty, fields } => {
            code.push_str(ty);
            render_block(code, fields.iter(), indent, |code, (name, value)| {
                code.push_str(name);
                code.push_str(": ");
                render_expr(code, value, indent + 1);
            });
        }
        Expr::List {
            elems,
            multiline: false,
        } => {
            code.push('{');
            for (i, elem) in elems.iter().enumerate() {
                if i > 0 {
                    code.push_str(", ");
                }
                render_expr(code, elem, indent);
            }
            code.push('}');
        }
        Expr::List {
            elems,
            multiline: true,
        } => {
            render_block(code, elems.iter(), indent, |code, elem| {
                render_expr(code, elem, indent + 1);
            });
        }
        Expr::Map { ty, entries } => {
            code.push_str(&ty.to_string());
            render_block(code, entries.iter(), indent, |code, (key, value)| {
                render_expr(code, key, indent + 1);
                code.push_str(": ");
                render_expr(code, value, indent + 1);
            });
        }
    }
}

/// Render `{}` or a braced block with one comma-terminated item per line.
fn render_block<T>(
    code: &mut String,
    items: impl ExactSizeIterator<Item = T>,
    indent: usize,
    mut render_item: impl FnMut(&mut String, T),
) {
    if items.len() == 0 {
        code.push_str("{}");
        return;
    }

    code.push_str("{\n");
    for item in items {
        push_indent(code, indent + 1);
        render_item(code, item);
        code.push_str(",\n");
    }
    push_indent(code, indent);
    code.push('}');
}

fn pad(cell: &str, width: usize) -> String {
    format!("{cell:<width$}")
}

fn push_indent(code: &mut String, indent: usize) {
    code.extend(std::iter::repeat_n('\t', indent));
}

fn push_comment_line(code: &mut String, text: &str, indent: usize) {
    push_indent(code, indent);
    let text = single_line(text);
    if text.is_empty() {
        code.push_str("//\n");
    } else {
        code.push_str(&format!("// {}\n", text));
    }
}

/// Collapse all whitespace runs, including newlines, to single spaces.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render a `plist` struct tag. Falls back to an interpreted string literal
/// when the tag contains a backquote.
fn struct_tag(value: &str) -> String {
    let tag = format!("plist:{}", go_quote(value));
    if tag.contains('`') {
        go_quote(&tag)
    } else {
        format!("`{}`", tag)
    }
}

/// Quote `s` as a Go interpreted string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                quoted.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
