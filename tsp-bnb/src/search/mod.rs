//! Branch-and-bound search tree management.

mod engine;
mod frontier;
mod node;

pub use engine::{Incumbent, SearchEngine};
pub use frontier::Frontier;
pub use node::{subtours_from_assignment, Edge, Node, Subtour};
