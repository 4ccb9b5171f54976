use indexmap::IndexMap;
use prop_sandbox_cursor::PathStep;

use super::{child_path, GenerateConfig};
use crate::descriptor::{PropKind, TypeDescriptor};
use crate::value::{Callback, PropValue};

/// Minimal representative value for `descriptor` at `path`.
///
/// Optional props generate `null`. Required props generate the smallest
/// value of their kind: `""`, `0`, `false`, `[]`, `{}`, a one-element list
/// for `arrayOf`, the first literal of `oneOf`, the first alternative of
/// `oneOfType`, a no-op callable for `func`, and every declared field for
/// `shape`. Opaque and `instanceOf` descriptors always generate `null`.
/// An override in `config` for `path` wins over all of the above.
///
/// The output depends only on the arguments.
pub fn generate_value_for_type(
    descriptor: &TypeDescriptor,
    path: &[PathStep],
    config: &GenerateConfig,
) -> PropValue {
    if let Some(value) = config.override_at(path) {
        return value.clone();
    }
    let TypeDescriptor::Typed(t) = descriptor else {
        return PropValue::Null;
    };
    if !t.required {
        return PropValue::Null;
    }
    match &t.kind {
        PropKind::String | PropKind::Node | PropKind::Element | PropKind::Any => {
            PropValue::String(String::new())
        }
        PropKind::Number => PropValue::from(0),
        PropKind::Bool => PropValue::Bool(false),
        PropKind::Array => PropValue::Array(Vec::new()),
        PropKind::Object | PropKind::ObjectOf(_) => PropValue::Object(IndexMap::new()),
        PropKind::ArrayOf(item) => PropValue::Array(vec![generate_value_for_type(
            item,
            &child_path(path, 0usize),
            config,
        )]),
        PropKind::OneOf(values) => values.first().cloned().unwrap_or_default(),
        PropKind::OneOfType(alternatives) => alternatives
            .first()
            .map(|alternative| generate_value_for_type(alternative, path, config))
            .unwrap_or_default(),
        PropKind::Func => PropValue::Func(Callback::noop()),
        PropKind::Shape(fields) => PropValue::Object(
            fields
                .iter()
                .map(|(key, field)| {
                    let value = generate_value_for_type(field, &child_path(path, key.as_str()), config);
                    (key.clone(), value)
                })
                .collect(),
        ),
        PropKind::InstanceOf(_) => PropValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::T;
    use serde_json::json;

    fn gen(descriptor: &TypeDescriptor) -> PropValue {
        generate_value_for_type(descriptor, &[], &GenerateConfig::default())
    }

    #[test]
    fn scalar_pairs() {
        for (descriptor, minimal) in [
            (T.string(), json!("")),
            (T.node(), json!("")),
            (T.element(), json!("")),
            (T.any(), json!("")),
            (T.number(), json!(0)),
            (T.bool(), json!(false)),
            (T.array(), json!([])),
            (T.object(), json!({})),
        ] {
            assert_eq!(gen(&descriptor), PropValue::Null);
            assert_eq!(gen(&descriptor.required()), PropValue::from(minimal));
        }
    }

    #[test]
    fn empty_one_of_is_null() {
        assert_eq!(gen(&T.one_of(Vec::<PropValue>::new()).required()), PropValue::Null);
        assert_eq!(gen(&T.one_of_type([]).required()), PropValue::Null);
    }

    #[test]
    fn override_applies_at_nested_path() {
        let d = T
            .shape([("items", T.array_of(T.string().required()).required())])
            .required();
        let config = GenerateConfig::default()
            .with_override(vec!["items".into(), 0usize.into()], "first");
        assert_eq!(
            generate_value_for_type(&d, &[], &config),
            PropValue::from(json!({"items": ["first"]}))
        );
    }

    #[test]
    fn override_beats_optionality() {
        let config = GenerateConfig::default().with_override(vec![], 5);
        assert_eq!(
            generate_value_for_type(&T.number(), &[], &config),
            PropValue::from(5)
        );
    }

    #[test]
    fn instance_of_is_null() {
        let d = T.instance_of(crate::ClassRef::new("Date")).required();
        assert_eq!(gen(&d), PropValue::Null);
    }
}
