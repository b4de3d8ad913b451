//! vectl-schema
//!
//! The field definition language compiler. One `name:type[:token]*` string
//! per field goes in; a validated `FieldSpec` batch comes out, projected
//! into the collection schema and index plan the server client consumes.
//! See `parse` and `plan`.

pub mod grammar;
pub mod parse;
pub mod plan;

pub use parse::{parse_field, parse_fields};
pub use plan::{build_index_plan, build_schema, CollectionSchema, FieldDescriptor, IndexDescriptor};
