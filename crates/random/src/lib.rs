//! Random primitives used by the prop value generators.
//!
//! Every generator takes the random source as an argument (`&mut R where
//! R: Rng + ?Sized`) so callers that need reproducible output can pass a
//! seeded source from [`seeded`] instead of `rand::thread_rng()`.
//!
//! Modules:
//! - `number.rs` - bounded integers and floats
//! - `string.rs` - token grammar for short readable strings
//! - `random_json.rs` - arbitrary JSON trees with weighted node types
//! - `util.rs` - seeded sources

pub mod number;
pub mod random_json;
pub mod string;
pub mod util;

pub use number::{float, int};
pub use random_json::{NodeOdds, NodeType, RandomJson, RandomJsonOptions, RootNode};
pub use string::{random_string, word, Token};
pub use util::{seeded, SeededRng};
