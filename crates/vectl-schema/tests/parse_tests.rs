use vectl_core::types::{DataType, MetricType};
use vectl_schema::{parse_field, parse_fields};

#[test]
fn primary_key_with_auto_id() {
    let spec = parse_field("id:int64:pk:auto").expect("parse");
    assert_eq!(spec.name, "id");
    assert_eq!(spec.data_type, DataType::Int64);
    assert!(spec.is_primary);
    assert!(spec.auto_id);
    assert!(!spec.nullable);
}

#[test]
fn dense_vector_gets_cosine_by_default() {
    let spec = parse_field("embedding:float_vector:768").expect("parse");
    assert_eq!(spec.data_type, DataType::FloatVector);
    assert_eq!(spec.dim, Some(768));
    assert_eq!(spec.metric_type, Some(MetricType::Cosine));
}

#[test]
fn explicit_metric_wins() {
    let spec = parse_field("vec:float_vector:128:L2").expect("parse");
    assert_eq!(spec.dim, Some(128));
    assert_eq!(spec.metric_type, Some(MetricType::L2));
}

#[test]
fn metric_name_is_case_insensitive() {
    let spec = parse_field("vec:float_vector:128:l2").expect("parse");
    assert_eq!(spec.metric_type, Some(MetricType::L2));
}

#[test]
fn sparse_vector_defaults_to_ip_and_takes_no_dim() {
    let spec = parse_field("sparse:sparse_vector").expect("parse");
    assert_eq!(spec.data_type, DataType::SparseVector);
    assert_eq!(spec.dim, None);
    assert_eq!(spec.metric_type, Some(MetricType::Ip));

    let alias = parse_field("sparse:sparse_float_vector").expect("parse");
    assert_eq!(alias.data_type, DataType::SparseVector);
}

#[test]
fn array_with_capacity() {
    let spec = parse_field("tags:array:varchar:100").expect("parse");
    assert_eq!(spec.data_type, DataType::Array);
    assert_eq!(spec.element_type, Some(DataType::VarChar));
    assert_eq!(spec.max_capacity, Some(100));
}

#[test]
fn array_capacity_defaults_to_4096() {
    let spec = parse_field("scores:array:int64").expect("parse");
    assert_eq!(spec.element_type, Some(DataType::Int64));
    assert_eq!(spec.max_capacity, Some(4096));
}

#[test]
fn array_requires_element_type() {
    let err = parse_field("tags:array").expect_err("must fail");
    assert!(err.to_string().contains("requires element type"));

    let err = parse_field("tags:array:nonsense").expect_err("must fail");
    assert!(err.to_string().contains("Unknown array element type 'nonsense'"));
}

#[test]
fn varchar_length_defaults_to_65535() {
    let spec = parse_field("title:varchar").expect("parse");
    assert_eq!(spec.max_length, Some(65535));

    let spec = parse_field("title:varchar:512").expect("parse");
    assert_eq!(spec.max_length, Some(512));
}

#[test]
fn string_is_a_varchar_alias() {
    let spec = parse_field("title:string:256").expect("parse");
    assert_eq!(spec.data_type, DataType::VarChar);
    assert_eq!(spec.max_length, Some(256));
}

#[test]
fn vector_without_dimension_fails() {
    let err = parse_field("x:float_vector").expect_err("must fail");
    let msg = err.to_string();
    assert!(msg.contains("requires dimension"));
    assert!(msg.contains("x:float_vector:768"), "message names the expected shape: {msg}");
}

#[test]
fn vector_with_non_numeric_dimension_fails() {
    let err = parse_field("x:float_vector:big").expect_err("must fail");
    assert!(err.to_string().contains("requires dimension"));
}

#[test]
fn non_ascii_digits_are_not_a_dimension() {
    // Arabic-Indic digits; a locale-aware digit check would accept these.
    let err = parse_field("x:float_vector:٧٦٨").expect_err("must fail");
    assert!(err.to_string().contains("requires dimension"));
}

#[test]
fn auto_without_pk_fails() {
    let err = parse_field("x:int64:auto").expect_err("must fail");
    assert!(err.to_string().contains("'auto' modifier requires 'pk'"));
}

#[test]
fn metric_on_non_vector_field_fails() {
    let err = parse_field("x:int64:cosine").expect_err("must fail");
    assert!(err.to_string().contains("only be used with vector fields"));
}

#[test]
fn unknown_type_lists_alternatives() {
    let err = parse_field("x:int128").expect_err("must fail");
    let msg = err.to_string();
    assert!(msg.contains("Unknown type 'int128'"));
    assert!(msg.contains("float_vector"));
    assert!(msg.contains("string"));
}

#[test]
fn unknown_modifier_lists_alternatives() {
    let err = parse_field("x:int64:primary").expect_err("must fail");
    let msg = err.to_string();
    assert!(msg.contains("Unknown modifier 'primary'"));
    assert!(msg.contains("pk, auto, nullable"));
    assert!(msg.contains("COSINE"));
}

#[test]
fn too_few_tokens_fails_with_expected_shape() {
    let err = parse_field("lonely").expect_err("must fail");
    assert!(err.to_string().contains("Expected 'name:type[:params...]'"));
}

#[test]
fn empty_name_fails() {
    let err = parse_field(":int64").expect_err("must fail");
    assert!(err.to_string().contains("name cannot be empty"));
}

#[test]
fn tokens_are_trimmed_and_type_case_insensitive() {
    let spec = parse_field(" id : INT64 : PK ").expect("parse");
    assert_eq!(spec.name, "id");
    assert_eq!(spec.data_type, DataType::Int64);
    assert!(spec.is_primary);
}

#[test]
fn nullable_modifier() {
    let spec = parse_field("content:varchar:100:nullable").expect("parse");
    assert!(spec.nullable);
    assert_eq!(spec.max_length, Some(100));
}

#[test]
fn oversized_numeric_token_fails() {
    let err = parse_field("x:float_vector:99999999999999999999").expect_err("must fail");
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn batch_requires_exactly_one_primary_key() {
    let err = parse_fields(&["a:int64", "b:int64"]).expect_err("must fail");
    assert!(err.to_string().contains("primary key"));

    let err = parse_fields(&["a:int64:pk", "b:int64:pk"]).expect_err("must fail");
    assert!(err.to_string().contains("Only one field"));

    let specs = parse_fields(&["a:int64:pk", "b:float_vector:4"]).expect("parse");
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].name, "a");
    assert_eq!(specs[1].name, "b");
}

#[test]
fn batch_short_circuits_on_first_bad_field() {
    let err = parse_fields(&["a:int64:pk", "b:float_vector", "c:bogus"]).expect_err("must fail");
    // The vector error comes first; the unknown type is never reached.
    assert!(err.to_string().contains("requires dimension"));
}

#[test]
fn duplicate_field_names_are_not_rejected() {
    // Known gap, kept on purpose: uniqueness is the server's problem.
    let specs = parse_fields(&["a:int64:pk", "a:int64"]).expect("parse");
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].name, specs[1].name);
}
