use polyfill_kit as pfk;
use serde_json::json;

#[test]
fn test_builtin_strings() {
    assert_eq!(pfk::call("to_title", &[json!("report")]).unwrap(), json!("Report"));
    assert_eq!(pfk::call("zpad", &[json!(5), json!(3)]).unwrap(), json!("005"));
    assert_eq!(pfk::call("is_defined", &[json!("")]).unwrap(), json!(false));
    assert_eq!(pfk::call("portable", &[json!("a\\b")]).unwrap(), json!("a/b"));
}

#[test]
fn test_builtin_arrays() {
    assert_eq!(pfk::call("make_array", &[json!("x")]).unwrap(), json!(["x"]));
    assert_eq!(pfk::call("unique", &[json!([1, 1, 2, 2, 3])]).unwrap(), json!([1, 2, 3]));
    assert_eq!(pfk::call("remove", &[json!([1, 2, 3]), json!([2])]).unwrap(), json!([1, 3]));
    assert_eq!(pfk::call("append", &[json!([1]), json!([2])]).unwrap(), json!([1, 2]));
    assert_eq!(pfk::call("rotate", &[json!([1, 2, 3]), json!(2)]).unwrap(), json!([3, 1, 2]));
    assert_eq!(
        pfk::call("to_map", &[json!([{"k": "a"}, {"k": "b"}]), json!("k"), json!(true)]).unwrap(),
        json!({"a": 0, "b": 1})
    );
    assert_eq!(
        pfk::call("key_fields", &[json!({"x": {"id": 1}, "y": {"id": 2}}), json!("id")]).unwrap(),
        json!([1, 2])
    );
}

#[test]
fn test_builtin_numbers() {
    assert_eq!(pfk::call("currency", &[json!(1.125)]).unwrap(), json!(1.13));
    assert_eq!(pfk::call("money", &[json!(3), json!(1)]).unwrap(), json!("3.0"));
    assert_eq!(pfk::call("round", &[json!(0.30000000000000004)]).unwrap(), json!(0.3));
}

#[test]
fn test_builtin_serialize() {
    assert_eq!(pfk::call("serialize", &[json!({"a": 1})]).unwrap(), json!(r#"{"a":1}"#));
    assert_eq!(pfk::call("dump", &[json!(1), json!([])]).unwrap(), json!("1 []"));
}
