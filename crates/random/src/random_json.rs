use rand::Rng;
use serde_json::{Map, Value};

use crate::string::{random_string, Token};

/// Type of JSON node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// Relative weights for each node type.
#[derive(Debug, Clone)]
pub struct NodeOdds {
    pub null: u32,
    pub boolean: u32,
    pub number: u32,
    pub string: u32,
    pub array: u32,
    pub object: u32,
}

impl Default for NodeOdds {
    fn default() -> Self {
        Self {
            null: 1,
            boolean: 2,
            number: 6,
            string: 8,
            array: 1,
            object: 1,
        }
    }
}

impl NodeOdds {
    fn total(&self) -> u32 {
        self.null + self.boolean + self.number + self.string + self.array + self.object
    }
}

/// Root node type for generated JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootNode {
    #[default]
    Object,
    Array,
}

/// Options for random JSON generation.
#[derive(Debug, Clone)]
pub struct RandomJsonOptions {
    pub root_node: RootNode,
    /// Number of nodes inserted below the root.
    pub node_count: usize,
    pub odds: NodeOdds,
    /// Grammar for string leaves and object keys.
    pub strings: Token,
}

impl Default for RandomJsonOptions {
    fn default() -> Self {
        Self {
            root_node: RootNode::Object,
            node_count: 4,
            odds: NodeOdds::default(),
            strings: Token::word(1, 8),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSeg {
    Key(String),
    Index(usize),
}

/// Grows a random JSON tree by inserting `node_count` nodes into randomly
/// chosen containers.
pub struct RandomJson<'r, R: Rng + ?Sized> {
    rng: &'r mut R,
    opts: RandomJsonOptions,
    root: Value,
    containers: Vec<Vec<PathSeg>>,
}

impl<'r, R: Rng + ?Sized> RandomJson<'r, R> {
    /// Generate a random JSON value.
    pub fn generate(rng: &'r mut R, opts: RandomJsonOptions) -> Value {
        let root = match opts.root_node {
            RootNode::Object => Value::Object(Map::new()),
            RootNode::Array => Value::Array(Vec::new()),
        };
        let mut gen = Self {
            rng,
            opts,
            root,
            containers: vec![Vec::new()],
        };
        for _ in 0..gen.opts.node_count {
            gen.add_node();
        }
        gen.root
    }

    fn add_node(&mut self) {
        let container_idx = self.rng.gen_range(0..self.containers.len());
        let container_path = self.containers[container_idx].clone();
        let node_type = self.pick_node_type();
        let node = self.leaf(node_type);
        let key = random_string(self.rng, &self.opts.strings);
        let index_roll: usize = self.rng.gen();

        let Some(container) = get_mut_by_path(&mut self.root, &container_path) else {
            return;
        };
        let seg = match container {
            Value::Array(arr) => {
                let index = index_roll % (arr.len() + 1);
                arr.insert(index, node);
                shift_indices(&mut self.containers, &container_path, index);
                PathSeg::Index(index)
            }
            Value::Object(map) => {
                map.insert(key.clone(), node);
                PathSeg::Key(key)
            }
            _ => return,
        };
        if matches!(node_type, NodeType::Array | NodeType::Object) {
            let mut path = container_path;
            path.push(seg);
            self.containers.push(path);
        }
    }

    fn leaf(&mut self, node_type: NodeType) -> Value {
        match node_type {
            NodeType::Null => Value::Null,
            NodeType::Boolean => Value::Bool(self.rng.gen_bool(0.5)),
            NodeType::Number => Value::Number(self.rng.gen_range(-1000i64..=1000).into()),
            NodeType::String => Value::String(random_string(self.rng, &self.opts.strings)),
            NodeType::Array => Value::Array(Vec::new()),
            NodeType::Object => Value::Object(Map::new()),
        }
    }

    fn pick_node_type(&mut self) -> NodeType {
        let odds = &self.opts.odds;
        let total = odds.total();
        if total == 0 {
            return NodeType::Null;
        }
        let mut roll = self.rng.gen_range(0..total);
        for (weight, node_type) in [
            (odds.null, NodeType::Null),
            (odds.boolean, NodeType::Boolean),
            (odds.number, NodeType::Number),
            (odds.string, NodeType::String),
            (odds.array, NodeType::Array),
        ] {
            if roll < weight {
                return node_type;
            }
            roll -= weight;
        }
        NodeType::Object
    }
}

// Container paths recorded below an array shift right when an element is
// inserted at or before their index.
fn shift_indices(containers: &mut [Vec<PathSeg>], base: &[PathSeg], inserted: usize) {
    for path in containers {
        if path.len() <= base.len() || !path.starts_with(base) {
            continue;
        }
        if let Some(PathSeg::Index(idx)) = path.get_mut(base.len()) {
            if *idx >= inserted {
                *idx += 1;
            }
        }
    }
}

fn get_mut_by_path<'a>(value: &'a mut Value, path: &[PathSeg]) -> Option<&'a mut Value> {
    let Some((head, rest)) = path.split_first() else {
        return Some(value);
    };
    match (head, value) {
        (PathSeg::Index(i), Value::Array(arr)) => {
            arr.get_mut(*i).and_then(|next| get_mut_by_path(next, rest))
        }
        (PathSeg::Key(key), Value::Object(map)) => {
            map.get_mut(key).and_then(|next| get_mut_by_path(next, rest))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_nodes(value: &Value) -> usize {
        match value {
            Value::Array(arr) => arr.iter().map(|v| 1 + count_nodes(v)).sum(),
            Value::Object(map) => map.values().map(|v| 1 + count_nodes(v)).sum(),
            _ => 0,
        }
    }

    #[test]
    fn array_root_holds_every_inserted_node() {
        let value = RandomJson::generate(
            &mut rand::thread_rng(),
            RandomJsonOptions {
                root_node: RootNode::Array,
                node_count: 10,
                odds: NodeOdds {
                    object: 0,
                    ..Default::default()
                },
                ..Default::default()
            },
        );
        assert_eq!(count_nodes(&value), 10);
    }

    #[test]
    fn only_booleans_when_odds_force_them() {
        let value = RandomJson::generate(
            &mut rand::thread_rng(),
            RandomJsonOptions {
                root_node: RootNode::Array,
                node_count: 8,
                odds: NodeOdds {
                    null: 0,
                    boolean: 1,
                    number: 0,
                    string: 0,
                    array: 0,
                    object: 0,
                },
                ..Default::default()
            },
        );
        let arr = value.as_array().expect("array root");
        assert_eq!(arr.len(), 8);
        assert!(arr.iter().all(Value::is_boolean));
    }

    #[test]
    fn zero_nodes_yields_empty_object() {
        let value = RandomJson::generate(
            &mut rand::thread_rng(),
            RandomJsonOptions {
                node_count: 0,
                ..Default::default()
            },
        );
        assert_eq!(value, Value::Object(Map::new()));
    }
}
