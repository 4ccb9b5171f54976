//! Random value generator for prop descriptors.

use indexmap::IndexMap;
use prop_sandbox_cursor::PathStep;
use prop_sandbox_random::{
    float, int, random_string, word, RandomJson, RandomJsonOptions, RootNode, SeededRng, Token,
};
use rand::Rng;

use super::child_path;
use crate::descriptor::{PropKind, TypeDescriptor};
use crate::value::{Callback, PropValue};

/// Tags random `element` props are rendered as.
const MARKUP_TAGS: [&str; 4] = ["div", "span", "p", "b"];

/// Bounds for [`RandomGenerator`].
#[derive(Debug, Clone)]
pub struct RandomOptions {
    /// Upper bound on list lengths and map sizes.
    pub max_items: usize,
    /// Probability that an optional prop is generated as `null`.
    pub null_odds: f64,
    /// Range numbers are drawn from.
    pub number_range: (i64, i64),
    /// Upper bound on generated word length.
    pub max_string_len: usize,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            max_items: 3,
            null_odds: 0.25,
            number_range: (-1000, 1000),
            max_string_len: 8,
        }
    }
}

/// Generates random values that satisfy a descriptor.
///
/// The random source is injected; use [`RandomGenerator::seeded`] for
/// reproducible sequences.
pub struct RandomGenerator<R> {
    rng: R,
    opts: RandomOptions,
}

impl RandomGenerator<SeededRng> {
    pub fn seeded(seed: u64, opts: RandomOptions) -> Self {
        Self::new(prop_sandbox_random::seeded(seed), opts)
    }
}

impl<R: Rng> RandomGenerator<R> {
    pub fn new(rng: R, opts: RandomOptions) -> Self {
        Self { rng, opts }
    }

    /// Random value for `descriptor` at `path`. Opaque and `instanceOf`
    /// descriptors generate `null`.
    pub fn generate(&mut self, descriptor: &TypeDescriptor, path: &[PathStep]) -> PropValue {
        self.generate_node(descriptor, path, false)
    }

    /// `present` skips the optional-null draw; set for the chosen
    /// alternative of a `oneOfType` that already decided to be present.
    fn generate_node(
        &mut self,
        descriptor: &TypeDescriptor,
        path: &[PathStep],
        present: bool,
    ) -> PropValue {
        let TypeDescriptor::Typed(t) = descriptor else {
            return PropValue::Null;
        };
        if !t.required && !present && self.rng.gen_bool(self.null_odds()) {
            return PropValue::Null;
        }
        match &t.kind {
            PropKind::String | PropKind::Node => self.gen_word(),
            PropKind::Element => self.gen_markup(),
            PropKind::Any => match self.rng.gen_range(0..3) {
                0 => self.gen_word(),
                1 => self.gen_number(),
                _ => PropValue::Bool(self.rng.gen_bool(0.5)),
            },
            PropKind::Number => self.gen_number(),
            PropKind::Bool => PropValue::Bool(self.rng.gen_bool(0.5)),
            PropKind::Array => self.gen_json(RootNode::Array),
            PropKind::Object => self.gen_json(RootNode::Object),
            PropKind::Func => PropValue::Func(Callback::noop()),
            PropKind::ArrayOf(item) => {
                let len = self.gen_len();
                PropValue::Array(
                    (0..len)
                        .map(|i| self.generate(item, &child_path(path, i)))
                        .collect(),
                )
            }
            PropKind::ObjectOf(value) => {
                let len = self.gen_len();
                let mut map = IndexMap::with_capacity(len);
                for _ in 0..len {
                    let key = word(&mut self.rng, self.opts.max_string_len);
                    let entry = self.generate(value, &child_path(path, key.as_str()));
                    map.insert(key, entry);
                }
                PropValue::Object(map)
            }
            PropKind::Shape(fields) => PropValue::Object(
                fields
                    .iter()
                    .map(|(key, field)| {
                        let value = self.generate(field, &child_path(path, key.as_str()));
                        (key.clone(), value)
                    })
                    .collect(),
            ),
            PropKind::OneOf(values) => {
                if values.is_empty() {
                    return PropValue::Null;
                }
                values[self.rng.gen_range(0..values.len())].clone()
            }
            PropKind::OneOfType(alternatives) => {
                if alternatives.is_empty() {
                    return PropValue::Null;
                }
                let pick = self.rng.gen_range(0..alternatives.len());
                self.generate_node(&alternatives[pick], path, true)
            }
            PropKind::InstanceOf(_) => PropValue::Null,
        }
    }

    fn null_odds(&self) -> f64 {
        if self.opts.null_odds.is_nan() {
            0.0
        } else {
            self.opts.null_odds.clamp(0.0, 1.0)
        }
    }

    fn gen_len(&mut self) -> usize {
        self.rng.gen_range(0..=self.opts.max_items)
    }

    fn gen_word(&mut self) -> PropValue {
        PropValue::String(word(&mut self.rng, self.opts.max_string_len))
    }

    fn gen_markup(&mut self) -> PropValue {
        let text = Token::word(1, self.opts.max_string_len.max(1));
        let markup = Token::pick(
            MARKUP_TAGS
                .iter()
                .map(|tag| {
                    Token::list(vec![
                        Token::literal(format!("<{tag}>")),
                        text.clone(),
                        Token::literal(format!("</{tag}>")),
                    ])
                })
                .collect(),
        );
        PropValue::String(random_string(&mut self.rng, &markup))
    }

    fn gen_number(&mut self) -> PropValue {
        let (lo, hi) = self.opts.number_range;
        if self.rng.gen_bool(0.5) {
            PropValue::from(int(&mut self.rng, lo, hi))
        } else {
            let n = float(&mut self.rng, lo as f64, hi as f64);
            PropValue::from((n * 100.0).round() / 100.0)
        }
    }

    fn gen_json(&mut self, root_node: RootNode) -> PropValue {
        let node_count = self.gen_len();
        RandomJson::generate(
            &mut self.rng,
            RandomJsonOptions {
                root_node,
                node_count,
                ..Default::default()
            },
        )
        .into()
    }
}

/// Random value for `descriptor` drawn from the thread-local source.
pub fn generate_random_value_for_type(descriptor: &TypeDescriptor, path: &[PathStep]) -> PropValue {
    RandomGenerator::new(rand::thread_rng(), RandomOptions::default()).generate(descriptor, path)
}
