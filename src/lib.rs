//! rstree: random binary trees and the classic traversal zoo.
//!
//! The tree lives in a bounded [`arena::TreeArena`]; generation is
//! breadth-first over the cell-based [`cell::Queue`]; the traversal
//! family (level order, recursive and iterative depth-first, Morris with
//! O(1) auxiliary space, views, spiral orders, mirror) lives in
//! [`traverse`]. Traversals return value sequences; rendering is the
//! CLI's concern.

pub mod arena;
pub mod cell;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod generator;
pub mod render;
pub mod traverse;
