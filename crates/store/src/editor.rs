//! Choosing a field editor for a prop.

use indexmap::IndexMap;
use prop_sandbox_types::{PropKind, PropValue, TypeDescriptor};

/// How a field editor should present a prop of a given type.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorStrategy {
    /// Free text input. Also used for nodes and elements.
    Text,
    Checkbox,
    Number,
    /// Pick one of the listed literals.
    Select(Vec<PropValue>),
    /// Editable list; every item uses the inner strategy.
    List(Box<EditorStrategy>),
    /// One sub-editor per declared field.
    Fields(IndexMap<String, EditorStrategy>),
    /// Read-only JSON rendering for everything else.
    Json,
    /// The inner editor plus a control that sets the prop to `null`.
    Nullable(Box<EditorStrategy>),
}

impl EditorStrategy {
    pub fn for_descriptor(descriptor: &TypeDescriptor) -> Self {
        let editor = match descriptor {
            TypeDescriptor::Typed(t) => match &t.kind {
                PropKind::String | PropKind::Node | PropKind::Element => Self::Text,
                PropKind::Bool => Self::Checkbox,
                PropKind::Number => Self::Number,
                PropKind::OneOf(options) => Self::Select(options.clone()),
                PropKind::ArrayOf(item) => Self::List(Box::new(Self::for_descriptor(item))),
                PropKind::Shape(fields) => Self::Fields(
                    fields
                        .iter()
                        .map(|(name, field)| (name.clone(), Self::for_descriptor(field)))
                        .collect(),
                ),
                _ => Self::Json,
            },
            TypeDescriptor::Opaque(_) => Self::Json,
        };
        if descriptor.is_required() {
            editor
        } else {
            Self::Nullable(Box::new(editor))
        }
    }

    /// Strategy with any `Nullable` wrapper removed.
    pub fn base(&self) -> &Self {
        match self {
            Self::Nullable(inner) => inner,
            other => other,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prop_sandbox_types::{Validator, T};

    #[test]
    fn scalar_editors() {
        assert_eq!(EditorStrategy::for_descriptor(&T.string().required()), EditorStrategy::Text);
        assert_eq!(EditorStrategy::for_descriptor(&T.node().required()), EditorStrategy::Text);
        assert_eq!(
            EditorStrategy::for_descriptor(&T.bool().required()),
            EditorStrategy::Checkbox
        );
        assert_eq!(
            EditorStrategy::for_descriptor(&T.func().required()),
            EditorStrategy::Json
        );
    }

    #[test]
    fn optional_props_are_nullable() {
        let editor = EditorStrategy::for_descriptor(&T.number());
        assert!(editor.is_nullable());
        assert_eq!(editor.base(), &EditorStrategy::Number);
    }

    #[test]
    fn opaque_falls_back_to_nullable_json() {
        let descriptor = T.opaque(Validator::custom(|_, _, _| Ok(())));
        assert_eq!(
            EditorStrategy::for_descriptor(&descriptor),
            EditorStrategy::Nullable(Box::new(EditorStrategy::Json))
        );
    }

    #[test]
    fn nested_editors_follow_the_tree() {
        let descriptor = T
            .shape([
                ("mode", T.one_of(["a", "b"]).required()),
                ("tags", T.array_of(T.string().required())),
            ])
            .required();
        let EditorStrategy::Fields(fields) = EditorStrategy::for_descriptor(&descriptor) else {
            panic!("expected fields");
        };
        assert_eq!(
            fields["mode"],
            EditorStrategy::Select(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            fields["tags"],
            EditorStrategy::Nullable(Box::new(EditorStrategy::List(Box::new(
                EditorStrategy::Text
            ))))
        );
    }
}
