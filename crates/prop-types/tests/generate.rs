//! Default and random value generation across the descriptor kinds.

use prop_sandbox_types::{
    generate_random_value_for_type, generate_value_for_type, value_satisfies_descriptor, ClassRef,
    GenerateConfig, PropValue, RandomGenerator, RandomOptions, TypeDescriptor, Validator, T,
};
use serde_json::json;

fn default_json(descriptor: &TypeDescriptor) -> serde_json::Value {
    generate_value_for_type(descriptor, &[], &GenerateConfig::default()).to_json()
}

#[test]
fn required_scalars_generate_minimal_values() {
    assert_eq!(default_json(&T.string().required()), json!(""));
    assert_eq!(default_json(&T.number().required()), json!(0));
    assert_eq!(default_json(&T.bool().required()), json!(false));
    assert_eq!(default_json(&T.array().required()), json!([]));
    assert_eq!(default_json(&T.object().required()), json!({}));
}

#[test]
fn optional_props_generate_null() {
    for descriptor in [T.string(), T.number(), T.func(), T.array_of(T.number().required())] {
        assert_eq!(default_json(&descriptor), json!(null));
    }
}

#[test]
fn array_of_required_number_is_single_zero() {
    let descriptor = T.array_of(T.number().required()).required();
    assert_eq!(default_json(&descriptor), json!([0]));
}

#[test]
fn shape_fills_every_declared_field() {
    let descriptor = T
        .shape([
            ("nullable", T.string()),
            ("s", T.string().required()),
            ("n", T.number().required()),
        ])
        .required();
    assert_eq!(
        default_json(&descriptor),
        json!({"nullable": null, "s": "", "n": 0})
    );
}

#[test]
fn one_of_picks_first_literal() {
    assert_eq!(default_json(&T.one_of([3, 7]).required()), json!(3));
    let empty: [PropValue; 0] = [];
    assert_eq!(default_json(&T.one_of(empty).required()), json!(null));
}

#[test]
fn one_of_type_uses_first_alternative() {
    let descriptor = T.one_of_type([T.bool().required(), T.string()]).required();
    assert_eq!(default_json(&descriptor), json!(false));
}

#[test]
fn required_func_is_callable() {
    let value = generate_value_for_type(&T.func().required(), &[], &GenerateConfig::default());
    match value {
        PropValue::Func(f) => assert_eq!(f.call(&[PropValue::from(1)]), PropValue::Null),
        other => panic!("expected a function, got {other:?}"),
    }
}

#[test]
fn instance_of_and_opaque_are_null() {
    let class = ClassRef::new("Date");
    assert_eq!(default_json(&T.instance_of(class).required()), json!(null));
    let opaque = T.opaque(Validator::custom(|_, _, _| Ok(())));
    assert_eq!(default_json(&opaque), json!(null));
}

#[test]
fn overrides_apply_at_nested_paths() {
    let descriptor = T
        .shape([("list", T.array_of(T.string().required()).required())])
        .required();
    let config = GenerateConfig::default()
        .with_override(vec!["list".into(), 0usize.into()], "hello");
    let value = generate_value_for_type(&descriptor, &[], &config);
    assert_eq!(value.to_json(), json!({"list": ["hello"]}));
}

#[test]
fn default_generation_is_deterministic() {
    let descriptor = T
        .shape([("a", T.one_of_type([T.number().required()]).required())])
        .required();
    let first = default_json(&descriptor);
    for _ in 0..10 {
        assert_eq!(default_json(&descriptor), first);
    }
}

fn every_kind() -> Vec<TypeDescriptor> {
    let scalars = [
        T.array(),
        T.bool(),
        T.func(),
        T.number(),
        T.object(),
        T.string(),
        T.any(),
        T.element(),
        T.node(),
    ];
    let mut all = Vec::new();
    for s in scalars {
        all.push(s.clone());
        all.push(s.required());
    }
    all.push(T.shape([("a", T.number().required()), ("b", T.string())]).required());
    all.push(T.array_of(T.bool().required()).required());
    all.push(T.object_of(T.string().required()).required());
    all.push(T.one_of(["x", "y", "z"]).required());
    all.push(T.one_of_type([T.number().required(), T.string().required()]).required());
    all.push(
        T.shape([(
            "nested",
            T.array_of(T.shape([("deep", T.one_of([1, 2]).required())]).required())
                .required(),
        )])
        .required(),
    );
    all
}

#[test]
fn defaults_satisfy_required_descriptors() {
    for descriptor in every_kind() {
        let value = generate_value_for_type(&descriptor, &[], &GenerateConfig::default());
        assert!(
            value_satisfies_descriptor(&value, &descriptor),
            "{value} does not satisfy {descriptor:?}"
        );
    }
}

#[test]
fn random_values_satisfy_their_descriptor() {
    let mut generator = RandomGenerator::seeded(7, RandomOptions::default());
    for _ in 0..100 {
        for descriptor in every_kind() {
            let value = generator.generate(&descriptor, &[]);
            assert!(
                value_satisfies_descriptor(&value, &descriptor),
                "{value} does not satisfy {descriptor:?}"
            );
            if descriptor.is_required() {
                assert!(!value.is_null(), "required {descriptor:?} generated null");
            }
        }
    }
}

#[test]
fn thread_local_random_values_satisfy_their_descriptor() {
    for _ in 0..100 {
        for descriptor in every_kind() {
            let value = generate_random_value_for_type(&descriptor, &[]);
            assert!(
                value_satisfies_descriptor(&value, &descriptor),
                "{value} does not satisfy {descriptor:?}"
            );
        }
    }
}

#[test]
fn required_one_of_type_never_generates_null() {
    let descriptor = T.one_of_type([T.number()]).required();
    let mut generator = RandomGenerator::seeded(3, RandomOptions::default());
    for _ in 0..200 {
        assert!(!generator.generate(&descriptor, &[]).is_null());
    }
}
