//! Static grammar reference shown by `vectl schema grammar`.

/// Help text for the field definition syntax.
pub fn field_help() -> &'static str {
    "\
Field definition syntax: name:type[:param][:modifier...]

Types:
  Scalar:     int8, int16, int32, int64, float, double, bool
  String:     varchar:max_len (e.g., varchar:256); 'string' is an alias
  JSON:       json
  Array:      array:elem_type:max_cap (e.g., array:int64:100)
  Vector:     float_vector:dim, binary_vector:dim,
              float16_vector:dim, bfloat16_vector:dim, sparse_vector

Modifiers:
  pk            Primary key
  auto          Auto-generate ID (requires pk)
  nullable      Allow null values
  COSINE/L2/IP/HAMMING/JACCARD
                Metric type for vector fields

Defaults:
  varchar max_len 65535, array max_cap 4096,
  COSINE for dense vectors, IP for sparse vectors

Examples:
  id:int64:pk:auto              Auto-increment primary key
  title:varchar:512             String field, max 512 chars
  embedding:float_vector:768    768-dim vector with COSINE (default)
  vec:float_vector:128:L2       128-dim vector with L2 metric
  tags:array:varchar:100        Array of strings, max 100 elements
"
}
