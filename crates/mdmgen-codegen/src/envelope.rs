//! Command and response envelopes.
//!
//! A schema only lists the request-specific keys. On the wire every command is
//! wrapped in an envelope carrying `RequestType` and a `CommandUUID`, and every
//! response carries `CommandUUID` and `Status`. The functions here add those
//! synthetic keys and map the wrapped tree through a [`TypeMapper`].

use crate::go_types::GoType;
use crate::ir::{Decl, Expr, FuncDecl, GoFile};
use crate::mapper::TypeMapper;
use crate::naming::normalize_field_name;
use mdmgen_schema::{Key, TypeTag};
use tracing::debug;

/// Field name the command payload is stored under in the outer envelope.
pub const COMMAND_FIELD: &str = "Command";

fn request_type_key(description: impl Into<String>) -> Key {
    Key::new("RequestType", TypeTag::String)
        .required()
        .with_description(description)
        .with_content()
}

fn network_tether_key() -> Key {
    Key::new("RequestRequiresNetworkTether", TypeTag::Boolean).optional()
}

fn command_uuid_key() -> Key {
    Key::new("CommandUUID", TypeTag::String).required()
}

fn status_key() -> Key {
    Key::new("Status", TypeTag::String).required()
}

/// Name of the constant holding a command's request type.
pub fn request_type_const(request_type: &str) -> String {
    format!("{}RequestType", normalize_field_name(request_type))
}

/// Emit the request type constant, the `<name>Payload` and `<name>Command`
/// structs, and the `New<Name>Command` constructor.
pub fn synthesize_command(mapper: &TypeMapper, keys: &[Key], name: &str, out: &mut GoFile) {
    let const_name = request_type_const(name);
    out.push(Decl::Const {
        name: const_name.clone(),
        value: name.to_string(),
    });

    let mut payload_keys = keys.to_vec();
    payload_keys.push(request_type_key(format!("must be set to \"{name}\"")));
    payload_keys.push(network_tether_key());

    let payload = Key::dictionary(format!("{name}Payload"), payload_keys)
        .required()
        .with_name_override(COMMAND_FIELD);
    let command = Key::dictionary(format!("{name}Command"), vec![payload, command_uuid_key()]);
    mapper.map_key(&command, None, out);

    let type_name = normalize_field_name(&command.name);
    let payload_type = normalize_field_name(&format!("{name}Payload"));
    let func_name = format!("New{type_name}");
    debug!(request_type = name, constructor = %func_name, "synthesized command");

    out.push(Decl::Func(FuncDecl {
        doc: vec![format!(
            "{func_name} creates a new \"{name}\" Apple MDM command."
        )],
        name: func_name,
        returns: GoType::pointer(GoType::named(type_name.clone())),
        body: Expr::AddressOf(Box::new(Expr::Struct {
            ty: type_name,
            fields: vec![(
                COMMAND_FIELD.to_string(),
                Expr::Struct {
                    ty: payload_type,
                    fields: vec![("RequestType".to_string(), Expr::Ident(const_name))],
                },
            )],
        })),
    }));
}

/// Emit the `<name>Response` struct: the response keys plus `CommandUUID`
/// and `Status`.
pub fn synthesize_response(mapper: &TypeMapper, keys: &[Key], name: &str, out: &mut GoFile) {
    let mut response_keys = keys.to_vec();
    response_keys.push(command_uuid_key());
    response_keys.push(status_key());

    let response = Key::dictionary(format!("{name}Response"), response_keys);
    mapper.map_key(&response, None, out);
    debug!(request_type = name, "synthesized response");
}

/// Emit `GenericCommandPayload`, `GenericCommand` and `GenericResponse`.
///
/// These decode the envelope of any command or response before its request
/// type is known.
pub fn synthesize_shared(mapper: &TypeMapper, out: &mut GoFile) {
    let payload = Key::dictionary(
        "GenericCommandPayload",
        vec![request_type_key(""), network_tether_key()],
    )
    .required()
    .with_name_override(COMMAND_FIELD);
    let command = Key::dictionary("GenericCommand", vec![payload, command_uuid_key()]);
    mapper.map_key(&command, None, out);

    let response = Key::dictionary("GenericResponse", vec![command_uuid_key(), status_key()]);
    mapper.map_key(&response, None, out);
}
