// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

#[cfg(test)]
use pretty_assertions::assert_eq;
use hocon_render::{
    error::Error,
    formatter::render,
    input::{from_json, load_json_file},
    options::RenderOptions,
    value::{Origin, ValueKind},
};
use serde_json::json;

#[test]
fn test_from_json_attaches_origin_everywhere() -> Result<(), Error> {
    let origin = Origin::new("service.json").with_line(1);
    let document = from_json(&json!({"a": {"b": [1, "two"]}}), &origin)?;
    assert_eq!(document.origin, origin);
    let ValueKind::Object(members) = &document.kind else {
        panic!("Expected an object, got {document:?}");
    };
    let a = &members["a"];
    assert_eq!(a.origin, origin);
    let ValueKind::Object(a_members) = &a.kind else {
        panic!("Expected an object, got {a:?}");
    };
    let ValueKind::List(elements) = &a_members["b"].kind else {
        panic!("Expected a list");
    };
    assert_eq!(elements.len(), 2);
    assert!(elements.iter().all(|element| element.origin == origin));
    Ok(())
}

#[test]
fn test_from_json_numbers() -> Result<(), Error> {
    let origin = Origin::default();
    assert!(matches!(from_json(&json!(42), &origin)?.kind, ValueKind::Int(42)));
    assert!(matches!(
        from_json(&json!(-1), &origin)?.kind,
        ValueKind::Int(-1)
    ));
    assert!(matches!(
        from_json(&json!(2.5), &origin)?.kind,
        ValueKind::Double(_)
    ));
    Ok(())
}

#[test]
fn test_from_json_large_unsigned_becomes_double() -> Result<(), Error> {
    let document = from_json(&json!({"big": u64::MAX}), &Origin::default())?;
    assert_eq!(
        render(&document, &RenderOptions::concise())?,
        r#"{"big":1.8446744073709552e19}"#
    );
    Ok(())
}

#[test]
fn test_load_json_file_missing() {
    let path = Path::new("target/tests/does-not-exist.json");
    assert!(matches!(
        load_json_file(path),
        Err(Error::InputFileDoesNotExist(_))
    ));
}

#[test]
fn test_load_json_file_invalid() {
    let path = Path::new("target/tests/input/invalid.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "{\"a\": ").unwrap();
    assert!(matches!(load_json_file(path), Err(Error::InvalidJson(_, _))));
}

#[test]
fn test_load_json_file_origin_comments() -> Result<(), Error> {
    let path = Path::new("target/tests/input/origin.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, r#"{"port": 8080}"#).unwrap();
    let document = load_json_file(path)?;
    let options = RenderOptions::defaults().set_json(false);
    assert_eq!(
        render(&document, &options)?,
        format!("# {}\nport=8080\n", path.display())
    );
    Ok(())
}
