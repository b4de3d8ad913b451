//! Projections from a validated field batch into the two artifacts the
//! server client consumes: the collection schema descriptor and the
//! per-vector-field index plan. Both are pure and total; field order is
//! always preserved.

use serde::Serialize;
use std::collections::BTreeMap;
use vectl_core::types::{DataType, FieldSpec, MetricType};

pub const AUTO_INDEX: &str = "AUTOINDEX";

fn is_false(v: &bool) -> bool {
    !*v
}

/// One field entry of the collection-creation request.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub data_type: DataType,
    pub is_primary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<DataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,
    #[serde(flatten)]
    pub extra_params: BTreeMap<String, serde_json::Value>,
}

/// Collection-creation descriptor. `auto_id` is derived: true iff the
/// primary field carries `auto`.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionSchema {
    pub fields: Vec<FieldDescriptor>,
    pub auto_id: bool,
    pub enable_dynamic_field: bool,
}

/// Project a validated batch into the collection schema descriptor.
/// Field order is input order; nothing is dropped or renamed.
pub fn build_schema(specs: &[FieldSpec], enable_dynamic: bool) -> CollectionSchema {
    let mut auto_id = false;
    let fields = specs
        .iter()
        .map(|spec| {
            if spec.is_primary && spec.auto_id {
                auto_id = true;
            }
            FieldDescriptor {
                name: spec.name.clone(),
                data_type: spec.data_type,
                is_primary: spec.is_primary,
                max_length: spec.max_length,
                dim: spec.dim,
                element_type: spec.element_type,
                max_capacity: spec.max_capacity,
                nullable: spec.nullable,
                extra_params: spec.extra_params.clone(),
            }
        })
        .collect();

    CollectionSchema {
        fields,
        auto_id,
        enable_dynamic_field: enable_dynamic,
    }
}

/// One index-creation entry for a vector field.
#[derive(Debug, Clone, Serialize)]
pub struct IndexDescriptor {
    pub field_name: String,
    pub index_type: &'static str,
    pub metric_type: MetricType,
}

/// Project a validated batch into the index plan: one AUTOINDEX entry per
/// vector or sparse-vector field, in input order. The COSINE fallback
/// covers specs built outside the parser; parsed specs always have a
/// resolved metric.
pub fn build_index_plan(specs: &[FieldSpec]) -> Vec<IndexDescriptor> {
    specs
        .iter()
        .filter(|spec| spec.data_type.is_vector())
        .map(|spec| IndexDescriptor {
            field_name: spec.name.clone(),
            index_type: AUTO_INDEX,
            metric_type: spec.metric_type.unwrap_or(MetricType::Cosine),
        })
        .collect()
}
