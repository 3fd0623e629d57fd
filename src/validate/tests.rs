#[cfg(test)]
use super::*;

#[test]
fn test_ensure_values() {
    assert_eq!(validate_ensure(&"present".into()), Ok(Ensure::Present));
    assert_eq!(validate_ensure(&"ABSENT".into()), Ok(Ensure::Absent));

    let err = validate_ensure(&"foo".into()).unwrap_err();
    assert!(matches!(err, Icinga2Error::InvalidEnumValue { ref field, .. } if field == "ensure"));
    assert_eq!(
        err.to_string(),
        "foo isn't supported. Valid values are 'present' and 'absent'."
    );
}

#[test]
fn test_ensure_rejects_non_strings() {
    assert!(matches!(
        validate_ensure(&Value::Bool(true)),
        Err(Icinga2Error::InvalidEnumValue { .. })
    ));
}

#[test]
fn test_absolute_paths() {
    for path in ["/bar/baz", "/etc/icinga2/conf.d/hosts.conf", "C:/bar/baz", "c:\\bar\\baz", "\\\\server\\share\\x.conf"] {
        assert!(validate_absolute_path(path).is_ok(), "{} should be absolute", path);
    }
}

#[test]
fn test_relative_paths_fail() {
    for path in ["bar/baz", "./bar", "C:bar", "", "\\bar"] {
        let err = validate_absolute_path(path).unwrap_err();
        assert_eq!(err, Icinga2Error::InvalidPath { path: path.to_string() });
    }
    assert_eq!(
        validate_absolute_path("bar/baz").unwrap_err().to_string(),
        "\"bar/baz\" is not an absolute path."
    );
}

#[test]
fn test_boolean_values() {
    assert_eq!(validate_boolean(&Value::Bool(true), "template"), Ok(true));
    assert_eq!(validate_boolean(&"false".into(), "template"), Ok(false));

    for bad in [Value::from("foo"), Value::Number(1.0), Value::Array(vec![])] {
        let err = validate_boolean(&bad, "template").unwrap_err();
        assert!(matches!(err, Icinga2Error::TypeMismatch { .. }));
    }
    let msg = validate_boolean(&"foo".into(), "template").unwrap_err().to_string();
    assert!(msg.starts_with("\"foo\" is not a boolean."));
}

#[test]
fn test_apply_target() {
    assert_eq!(validate_apply_target(&"Host".into(), "Service"), Ok(ApplyTarget::Host));
    assert_eq!(validate_apply_target(&"Service".into(), "foo"), Ok(ApplyTarget::Service));

    let err = validate_apply_target(&"foo".into(), "foo").unwrap_err();
    assert!(err.to_string().starts_with("foo isn't supported"));
}

#[test]
fn test_apply_target_must_differ_from_object_type() {
    let err = validate_apply_target(&"Service".into(), "Service").unwrap_err();
    assert!(matches!(err, Icinga2Error::ConflictingValues { .. }));
    assert!(err.to_string().contains("must be different"));
}

#[test]
fn test_apply_boolean() {
    assert_eq!(validate_apply(&Value::Bool(true)), Ok(Apply::Enabled));
    assert_eq!(validate_apply(&Value::Bool(false)), Ok(Apply::Disabled));
}

#[test]
fn test_apply_for_expressions() {
    let apply = validate_apply(&"foo in host.vars.bar".into()).unwrap();
    let Apply::For(apply_for) = apply else {
        panic!("expected apply for");
    };
    assert_eq!(apply_for.key, "foo");
    assert_eq!(apply_for.value, None);
    assert_eq!(apply_for.collection, "host.vars.bar");
    assert_eq!(apply_for.to_string(), "foo in host.vars.bar");

    let Ok(Apply::For(apply_for)) = validate_apply(&"foo => config in host.vars.bar".into()) else {
        panic!("expected apply for");
    };
    assert_eq!(apply_for.bindings().collect::<Vec<_>>(), vec!["foo", "config"]);
    assert_eq!(apply_for.to_string(), "foo => config in host.vars.bar");
}

#[test]
fn test_apply_rejects_bad_expressions() {
    for bad in ["foo", "in host.vars", "foo in", "1foo in x", "foo =>  in x"] {
        let err = validate_apply(&bad.into()).unwrap_err();
        assert!(matches!(err, Icinga2Error::PatternMismatch { .. }), "{}", bad);
    }
    let msg = validate_apply(&"foo".into()).unwrap_err().to_string();
    assert!(msg.starts_with("\"foo\" does not match"));
}

#[test]
fn test_arrays() {
    let items = Value::Array(vec!["bar".into(), "baz".into()]);
    assert_eq!(validate_array(&items, "import").unwrap().len(), 2);
    assert_eq!(
        validate_string_array(&items, "import").unwrap(),
        vec!["bar", "baz"]
    );

    for field in ["import", "assign", "ignore"] {
        let err = validate_array(&"foo".into(), field).unwrap_err();
        assert!(err.to_string().starts_with("\"foo\" is not an Array."));
    }
}

#[test]
fn test_string_array_rejects_nested_items() {
    let items = Value::Array(vec!["bar".into(), Value::Array(vec![])]);
    assert!(matches!(
        validate_string_array(&items, "import"),
        Err(Icinga2Error::TypeMismatch { .. })
    ));
}
