use prop_sandbox_cursor::{format_cursor, get, parse_cursor, set, update, Cursor, CursorError, PathStep};
use proptest::prelude::*;
use serde_json::{json, Value};

#[test]
fn update_fixture_instance_field() {
    let fixtures = json!({"instances": [{"a": 1}]});
    let cursor: Cursor = vec!["instances".into(), 0usize.into(), "a".into()];
    let next = update(&fixtures, &cursor, json!(2)).unwrap();
    assert_eq!(next, json!({"instances": [{"a": 2}]}));
    // The source document is untouched.
    assert_eq!(fixtures, json!({"instances": [{"a": 1}]}));
}

#[test]
fn update_leaves_siblings_alone() {
    let doc = json!({
        "instances": [{"a": 1, "b": [true, false]}, {"a": 5}],
        "meta": "x"
    });
    let next = update(&doc, &["instances".into(), 0usize.into(), "b".into(), 1usize.into()], json!(true))
        .unwrap();
    assert_eq!(
        next,
        json!({
            "instances": [{"a": 1, "b": [true, true]}, {"a": 5}],
            "meta": "x"
        })
    );
}

#[test]
fn update_inserts_new_object_key() {
    let doc = json!({"instances": [{}]});
    let next = update(&doc, &["instances".into(), 0usize.into(), "fresh".into()], json!("v")).unwrap();
    assert_eq!(next, json!({"instances": [{"fresh": "v"}]}));
}

#[test]
fn key_step_on_array_must_be_index() {
    let mut doc = json!([1, 2]);
    assert_eq!(
        set(&mut doc, &["x".into()], json!(0)),
        Err(CursorError::InvalidIndex {
            step: "x".to_string()
        })
    );
}

#[test]
fn pointer_format_parse_matrix() {
    for pointer in ["", "/", "/foo", "/foo/0", "/a~0b/c~1d", "/arr/10/x"] {
        let cursor = parse_cursor(pointer).unwrap();
        assert_eq!(format_cursor(&cursor), pointer);
    }
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 1..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

// Picks an existing path by walking the tree with the given choices.
fn existing_path(doc: &Value, choices: &[usize]) -> Cursor {
    let mut cursor = Vec::new();
    let mut node = doc;
    for choice in choices {
        let next = match node {
            Value::Array(arr) if !arr.is_empty() => {
                let i = choice % arr.len();
                cursor.push(PathStep::Index(i));
                &arr[i]
            }
            Value::Object(map) if !map.is_empty() => {
                let (k, v) = map.iter().nth(choice % map.len()).unwrap();
                cursor.push(PathStep::Key(k.clone()));
                v
            }
            _ => break,
        };
        node = next;
    }
    cursor
}

proptest! {
    #[test]
    fn update_then_get_returns_new_value(
        doc in tree(),
        choices in prop::collection::vec(any::<usize>(), 0..4),
        value in leaf(),
    ) {
        let cursor = existing_path(&doc, &choices);
        let next = update(&doc, &cursor, value.clone()).unwrap();
        prop_assert_eq!(get(&next, &cursor), Some(&value));
    }

    #[test]
    fn update_preserves_parent_siblings(
        doc in tree(),
        choices in prop::collection::vec(any::<usize>(), 1..4),
        value in leaf(),
    ) {
        let cursor = existing_path(&doc, &choices);
        prop_assume!(!cursor.is_empty());
        let next = update(&doc, &cursor, value).unwrap();
        let (last, init) = cursor.split_last().unwrap();
        let before = get(&doc, init).unwrap();
        let after = get(&next, init).unwrap();
        match (before, after) {
            (Value::Array(a), Value::Array(b)) => {
                prop_assert_eq!(a.len(), b.len());
                for (i, (x, y)) in a.iter().zip(b).enumerate() {
                    if Some(i) != last.as_index() {
                        prop_assert_eq!(x, y);
                    }
                }
            }
            (Value::Object(a), Value::Object(b)) => {
                prop_assert_eq!(a.len(), b.len());
                for (k, v) in a {
                    if *k != last.as_key() {
                        prop_assert_eq!(Some(v), b.get(k));
                    }
                }
            }
            _ => prop_assert!(false, "container changed type"),
        }
    }
}
