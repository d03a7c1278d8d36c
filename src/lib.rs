pub mod pair;
pub mod longest;
pub mod eq;
pub mod macros;

pub use pair::{pairs, zip, Pairs, Zipped};
