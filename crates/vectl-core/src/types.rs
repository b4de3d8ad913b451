//! Domain types for the field definition language.
//!
//! `DataType` and `MetricType` are closed sets matching the remote
//! service's collection contract. Name lookup is case-insensitive and
//! pure; the sorted name lists back the parser's error messages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field data types accepted by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    VarChar,
    Json,
    Array,
    FloatVector,
    BinaryVector,
    Float16Vector,
    BFloat16Vector,
    SparseVector,
}

/// Every name the grammar accepts, sorted for error messages.
/// Includes the `string` and `sparse_float_vector` aliases.
pub const TYPE_NAMES: [&str; 17] = [
    "array",
    "bfloat16_vector",
    "binary_vector",
    "bool",
    "double",
    "float",
    "float16_vector",
    "float_vector",
    "int16",
    "int32",
    "int64",
    "int8",
    "json",
    "sparse_float_vector",
    "sparse_vector",
    "string",
    "varchar",
];

impl DataType {
    /// Case-insensitive lookup from a grammar type name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bool" => Some(Self::Bool),
            "int8" => Some(Self::Int8),
            "int16" => Some(Self::Int16),
            "int32" => Some(Self::Int32),
            "int64" => Some(Self::Int64),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "varchar" | "string" => Some(Self::VarChar),
            "json" => Some(Self::Json),
            "array" => Some(Self::Array),
            "float_vector" => Some(Self::FloatVector),
            "binary_vector" => Some(Self::BinaryVector),
            "float16_vector" => Some(Self::Float16Vector),
            "bfloat16_vector" => Some(Self::BFloat16Vector),
            "sparse_vector" | "sparse_float_vector" => Some(Self::SparseVector),
            _ => None,
        }
    }

    /// Canonical grammar name (aliases resolve to one spelling).
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::VarChar => "varchar",
            Self::Json => "json",
            Self::Array => "array",
            Self::FloatVector => "float_vector",
            Self::BinaryVector => "binary_vector",
            Self::Float16Vector => "float16_vector",
            Self::BFloat16Vector => "bfloat16_vector",
            Self::SparseVector => "sparse_vector",
        }
    }

    /// Fixed-dimension vector types that require an explicit `dim`.
    pub fn is_dense_vector(self) -> bool {
        matches!(
            self,
            Self::FloatVector | Self::BinaryVector | Self::Float16Vector | Self::BFloat16Vector
        )
    }

    /// Dense or sparse vector; the only types that take a metric.
    pub fn is_vector(self) -> bool {
        self.is_dense_vector() || self == Self::SparseVector
    }
}

/// Distance/similarity functions for vector fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricType {
    #[serde(rename = "COSINE")]
    Cosine,
    #[serde(rename = "L2")]
    L2,
    #[serde(rename = "IP")]
    Ip,
    #[serde(rename = "HAMMING")]
    Hamming,
    #[serde(rename = "JACCARD")]
    Jaccard,
}

pub const METRIC_NAMES: [&str; 5] = ["COSINE", "HAMMING", "IP", "JACCARD", "L2"];

impl MetricType {
    /// Case-insensitive lookup from a grammar metric name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "COSINE" => Some(Self::Cosine),
            "L2" => Some(Self::L2),
            "IP" => Some(Self::Ip),
            "HAMMING" => Some(Self::Hamming),
            "JACCARD" => Some(Self::Jaccard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cosine => "COSINE",
            Self::L2 => "L2",
            Self::Ip => "IP",
            Self::Hamming => "HAMMING",
            Self::Jaccard => "JACCARD",
        }
    }
}

/// One parsed field definition.
///
/// Built once by the parser, immutable afterwards; the schema and
/// index-plan builders consume it without mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub data_type: DataType,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub auto_id: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<MetricType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_type: Option<DataType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_params: BTreeMap<String, serde_json::Value>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            is_primary: false,
            auto_id: false,
            nullable: false,
            max_length: None,
            dim: None,
            metric_type: None,
            element_type: None,
            max_capacity: None,
            extra_params: BTreeMap::new(),
        }
    }
}

impl fmt::Display for FieldSpec {
    /// Canonical field-definition string. Re-parsing the output yields
    /// an equivalent spec, with all defaults resolved.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.data_type.name())?;
        if let Some(len) = self.max_length {
            write!(f, ":{len}")?;
        }
        if let Some(dim) = self.dim {
            write!(f, ":{dim}")?;
        }
        if let Some(elem) = self.element_type {
            write!(f, ":{}", elem.name())?;
        }
        if let Some(cap) = self.max_capacity {
            write!(f, ":{cap}")?;
        }
        if self.is_primary {
            write!(f, ":pk")?;
        }
        if self.auto_id {
            write!(f, ":auto")?;
        }
        if self.nullable {
            write!(f, ":nullable")?;
        }
        if let Some(metric) = self.metric_type {
            write!(f, ":{}", metric.as_str())?;
        }
        Ok(())
    }
}
