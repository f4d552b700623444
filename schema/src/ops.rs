//! The declared operation surface.
//!
//! Operation and parameter names are the wire surface of the original
//! schema; dispatch validates incoming requests against these tables
//! before any store access happens.

/// Whether an operation reads or writes the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Query,
    Mutation,
}

/// Declared scalar type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Int,
    Float,
}

impl Scalar {
    /// The schema name of this scalar, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::String => "String",
            Scalar::Int => "Int",
            Scalar::Float => "Float",
        }
    }
}

/// A declared parameter. All parameters are optional; presence is the
/// only thing the mutation layer checks.
#[derive(Debug, Clone, Copy)]
pub struct ParamDef {
    pub name: &'static str,
    pub scalar: Scalar,
}

const fn param(name: &'static str, scalar: Scalar) -> ParamDef {
    ParamDef { name, scalar }
}

/// A declared operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationDef {
    pub name: &'static str,
    pub kind: OpKind,
    pub params: &'static [ParamDef],
}

const fn query(name: &'static str, params: &'static [ParamDef]) -> OperationDef {
    OperationDef {
        name,
        kind: OpKind::Query,
        params,
    }
}

const fn mutation(name: &'static str, params: &'static [ParamDef]) -> OperationDef {
    OperationDef {
        name,
        kind: OpKind::Mutation,
        params,
    }
}

/// Every operation the gateway dispatches.
pub const OPERATIONS: [OperationDef; 16] = [
    query("Pokemons", &[]),
    query(
        "Pokemon",
        &[param("id", Scalar::String), param("name", Scalar::String)],
    ),
    query("Types", &[]),
    query("Attacks", &[]),
    query("Attack", &[param("type", Scalar::String)]),
    query("PokemonByType", &[param("name", Scalar::String)]),
    query("PokemonByAttack", &[param("name", Scalar::String)]),
    mutation(
        "addPokemon",
        &[
            param("id", Scalar::String),
            param("name", Scalar::String),
            param("classification", Scalar::String),
        ],
    ),
    mutation(
        "addAttack",
        &[
            param("fastOrSpecial", Scalar::String),
            param("name", Scalar::String),
            param("type", Scalar::String),
            param("damage", Scalar::Int),
        ],
    ),
    mutation("addType", &[param("name", Scalar::String)]),
    mutation(
        "editPokemon",
        &[
            param("name", Scalar::String),
            param("editField", Scalar::String),
            param("editValue", Scalar::String),
        ],
    ),
    mutation(
        "editType",
        &[param("name", Scalar::String), param("newName", Scalar::String)],
    ),
    mutation(
        "editAttack",
        &[
            param("fastOrSpecial", Scalar::String),
            param("name", Scalar::String),
            param("editField", Scalar::String),
            param("editValue", Scalar::String),
        ],
    ),
    mutation("deletePokemon", &[param("name", Scalar::String)]),
    mutation("deleteType", &[param("name", Scalar::String)]),
    mutation(
        "deleteAttack",
        &[param("fastOrSpecial", Scalar::String), param("name", Scalar::String)],
    ),
];

/// Look up a declared operation by name.
pub fn operation(name: &str) -> Option<&'static OperationDef> {
    OPERATIONS.iter().find(|op| op.name == name)
}
