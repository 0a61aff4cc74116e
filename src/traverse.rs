//! Traversal algorithms over an arena-based binary tree.
//!
//! Every pass returns the visited value sequence instead of printing, so
//! output is testable; grouped variants return one `Vec` per rendered
//! line. All passes are independent and composable against the same tree.
//! Only [`mirror`] changes the permanent shape; the Morris passes mutate
//! right links transiently but restore them before returning.

use std::collections::BTreeMap;

use generational_arena::Index;
use tracing::instrument;

use crate::arena::TreeArena;
use crate::cell::{Queue, Stack};

fn right_of(tree: &TreeArena, idx: Index) -> Option<Index> {
    tree.get_node(idx).and_then(|n| n.right)
}

fn set_right(tree: &mut TreeArena, idx: Index, right: Option<Index>) {
    if let Some(node) = tree.get_node_mut(idx) {
        node.right = right;
    }
}

/// Level order visitation grouped by the depth recorded on each node.
#[instrument(level = "debug", skip(tree))]
pub fn level_order(tree: &TreeArena) -> Vec<Vec<u32>> {
    let mut lines: Vec<Vec<u32>> = Vec::new();
    let mut queue = Queue::new();
    if let Some(root) = tree.root() {
        queue.push(root);
    }
    while let Some(idx) = queue.pop() {
        if let Some(node) = tree.get_node(idx) {
            if node.depth == lines.len() {
                lines.push(Vec::new());
            }
            if let Some(line) = lines.last_mut() {
                line.push(node.value);
            }
            if let Some(l) = node.left {
                queue.push(l);
            }
            if let Some(r) = node.right {
                queue.push(r);
            }
        }
    }
    lines
}

/// Level order grouped by probing the queue length at each level boundary
/// instead of reading recorded depths. Output is identical to
/// [`level_order`].
#[instrument(level = "debug", skip(tree))]
pub fn level_order_qlen(tree: &TreeArena) -> Vec<Vec<u32>> {
    let mut lines = Vec::new();
    let mut queue = Queue::new();
    if let Some(root) = tree.root() {
        queue.push(root);
    }
    while !queue.is_empty() {
        let qlen = queue.len();
        let mut line = Vec::with_capacity(qlen);
        for _ in 0..qlen {
            if let Some(idx) = queue.pop() {
                if let Some(node) = tree.get_node(idx) {
                    line.push(node.value);
                    if let Some(l) = node.left {
                        queue.push(l);
                    }
                    if let Some(r) = node.right {
                        queue.push(r);
                    }
                }
            }
        }
        lines.push(line);
    }
    lines
}

/// Recursive pre-order: visit, left, right.
#[instrument(level = "debug", skip(tree))]
pub fn pre_order(tree: &TreeArena) -> Vec<u32> {
    fn walk(tree: &TreeArena, idx: Option<Index>, visits: &mut Vec<u32>) {
        if let Some(idx) = idx {
            if let Some(node) = tree.get_node(idx) {
                visits.push(node.value);
                walk(tree, node.left, visits);
                walk(tree, node.right, visits);
            }
        }
    }
    let mut visits = Vec::with_capacity(tree.len());
    walk(tree, tree.root(), &mut visits);
    visits
}

/// Recursive in-order: left, visit, right.
#[instrument(level = "debug", skip(tree))]
pub fn in_order(tree: &TreeArena) -> Vec<u32> {
    fn walk(tree: &TreeArena, idx: Option<Index>, visits: &mut Vec<u32>) {
        if let Some(idx) = idx {
            if let Some(node) = tree.get_node(idx) {
                walk(tree, node.left, visits);
                visits.push(node.value);
                walk(tree, node.right, visits);
            }
        }
    }
    let mut visits = Vec::with_capacity(tree.len());
    walk(tree, tree.root(), &mut visits);
    visits
}

/// Iterative pre-order using the cell stack; right child pushed before
/// left so the left subtree pops first.
#[instrument(level = "debug", skip(tree))]
pub fn pre_order_iterative(tree: &TreeArena) -> Vec<u32> {
    let mut visits = Vec::with_capacity(tree.len());
    let mut stack = Stack::new();
    if let Some(root) = tree.root() {
        stack.push(root);
    }
    while let Some(idx) = stack.pop() {
        if let Some(node) = tree.get_node(idx) {
            visits.push(node.value);
            if let Some(r) = node.right {
                stack.push(r);
            }
            if let Some(l) = node.left {
                stack.push(l);
            }
        }
    }
    visits
}

/// Walks `right` links from `start` until reaching a node whose right link
/// is absent or already threads back to `stop`.
fn rightmost_below(tree: &TreeArena, start: Index, stop: Index) -> Index {
    let mut idx = start;
    loop {
        match right_of(tree, idx) {
            Some(next) if next != stop => idx = next,
            _ => return idx,
        }
    }
}

/// Morris pre-order: O(1) auxiliary space via temporary right-threading.
///
/// For a node with a left child, the rightmost node of the left subtree is
/// threaded back to it; the node is visited when the thread is created.
/// Every thread is removed once the left subtree is exhausted, so the tree
/// is isomorphic to its pre-pass shape when this returns.
#[instrument(level = "debug", skip(tree))]
pub fn morris_pre_order(tree: &mut TreeArena) -> Vec<u32> {
    let mut visits = Vec::with_capacity(tree.len());
    let mut cur = tree.root();
    while let Some(n) = cur {
        let left = tree.get_node(n).and_then(|node| node.left);
        match left {
            None => {
                if let Some(node) = tree.get_node(n) {
                    visits.push(node.value);
                }
                cur = right_of(tree, n);
            }
            Some(l) => {
                let r = rightmost_below(tree, l, n);
                if right_of(tree, r).is_none() {
                    if let Some(node) = tree.get_node(n) {
                        visits.push(node.value);
                    }
                    set_right(tree, r, Some(n));
                    cur = Some(l);
                } else {
                    // Thread points back at n: left subtree exhausted
                    set_right(tree, r, None);
                    cur = right_of(tree, n);
                }
            }
        }
    }
    visits
}

/// Morris in-order: same threading as [`morris_pre_order`], but the node
/// is visited when its thread is removed.
#[instrument(level = "debug", skip(tree))]
pub fn morris_in_order(tree: &mut TreeArena) -> Vec<u32> {
    let mut visits = Vec::with_capacity(tree.len());
    let mut cur = tree.root();
    while let Some(n) = cur {
        let left = tree.get_node(n).and_then(|node| node.left);
        match left {
            None => {
                if let Some(node) = tree.get_node(n) {
                    visits.push(node.value);
                }
                cur = right_of(tree, n);
            }
            Some(l) => {
                let r = rightmost_below(tree, l, n);
                if right_of(tree, r).is_none() {
                    set_right(tree, r, Some(n));
                    cur = Some(l);
                } else {
                    set_right(tree, r, None);
                    if let Some(node) = tree.get_node(n) {
                        visits.push(node.value);
                    }
                    cur = right_of(tree, n);
                }
            }
        }
    }
    visits
}

/// Leftmost node of each level, top to bottom.
#[instrument(level = "debug", skip(tree))]
pub fn left_view(tree: &TreeArena) -> Vec<u32> {
    let mut view = Vec::new();
    let mut queue = Queue::new();
    if let Some(root) = tree.root() {
        queue.push(root);
    }
    while let Some(idx) = queue.pop() {
        if let Some(node) = tree.get_node(idx) {
            // BFS reaches each depth leftmost-first
            if node.depth == view.len() {
                view.push(node.value);
            }
            if let Some(l) = node.left {
                queue.push(l);
            }
            if let Some(r) = node.right {
                queue.push(r);
            }
        }
    }
    view
}

/// Top view: the nodes visible when the tree is projected onto a single
/// horizontal line.
///
/// A breadth-first pass assigns each node its horizontal offset (root 0,
/// left child parent − 1, right child parent + 1). A node becomes visible
/// only when its offset sets a new leftmost or rightmost extreme, which in
/// breadth-first order means the first node encountered at each distinct
/// offset wins. Values are returned left to right by offset.
#[instrument(level = "debug", skip(tree))]
pub fn top_view(tree: &mut TreeArena) -> Vec<u32> {
    let mut visible: BTreeMap<i32, u32> = BTreeMap::new();
    let mut queue = Queue::new();
    if let Some(root) = tree.root() {
        if let Some(node) = tree.get_node_mut(root) {
            node.offset = 0;
        }
        queue.push(root);
    }
    while let Some(idx) = queue.pop() {
        let (value, offset, left, right) = match tree.get_node(idx) {
            Some(n) => (n.value, n.offset, n.left, n.right),
            None => continue,
        };
        visible.entry(offset).or_insert(value);
        if let Some(l) = left {
            if let Some(node) = tree.get_node_mut(l) {
                node.offset = offset - 1;
            }
            queue.push(l);
        }
        if let Some(r) = right {
            if let Some(node) = tree.get_node_mut(r) {
                node.offset = offset + 1;
            }
            queue.push(r);
        }
    }
    visible.into_values().collect()
}

/// Zigzag level order: level order with every odd level rendered right to
/// left. Lines are grouped by recorded depth; only the per-level value
/// sets are contractual, not exact break placement.
#[instrument(level = "debug", skip(tree))]
pub fn zigzag(tree: &TreeArena) -> Vec<Vec<u32>> {
    let mut lines = level_order(tree);
    for (depth, line) in lines.iter_mut().enumerate() {
        if depth % 2 == 1 {
            line.reverse();
        }
    }
    lines
}

/// Line accumulator reproducing the original `2^depth` visit counter:
/// breaks fall after visit 1, 3, 7, 15, ... which matches level
/// boundaries exactly for complete levels.
struct CounterLines {
    lines: Vec<Vec<u32>>,
    nvisit: u32,
    boundary: u32,
}

impl CounterLines {
    fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
            nvisit: 2,
            boundary: 2,
        }
    }

    fn visit(&mut self, value: u32) {
        if let Some(line) = self.lines.last_mut() {
            line.push(value);
        }
        if self.nvisit % self.boundary == 0 {
            self.boundary <<= 1;
            self.lines.push(Vec::new());
        }
        self.nvisit += 1;
    }

    fn into_lines(mut self) -> Vec<Vec<u32>> {
        while self.lines.last().is_some_and(|line| line.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

/// Spiral order: two stacks alternate as source and destination, so scan
/// direction flips each level without consulting recorded depth. The
/// first level below the root runs right to left.
#[instrument(level = "debug", skip(tree))]
pub fn spiral(tree: &TreeArena) -> Vec<Vec<u32>> {
    spiral_walk(tree, false)
}

/// Spiral order with the opposite starting direction: the first level
/// below the root runs left to right.
#[instrument(level = "debug", skip(tree))]
pub fn rspiral(tree: &TreeArena) -> Vec<Vec<u32>> {
    spiral_walk(tree, true)
}

fn spiral_walk(tree: &TreeArena, reversed: bool) -> Vec<Vec<u32>> {
    let mut lines = CounterLines::new();
    let mut ltr = Stack::new();
    let mut rtl = Stack::new();

    if let Some(root) = tree.root() {
        if reversed {
            rtl.push(root);
        } else {
            ltr.push(root);
        }
    }

    loop {
        let mut progressed = false;
        while let Some(idx) = ltr.pop() {
            progressed = true;
            if let Some(node) = tree.get_node(idx) {
                lines.visit(node.value);
                if let Some(l) = node.left {
                    rtl.push(l);
                }
                if let Some(r) = node.right {
                    rtl.push(r);
                }
            }
        }
        while let Some(idx) = rtl.pop() {
            progressed = true;
            if let Some(node) = tree.get_node(idx) {
                lines.visit(node.value);
                if let Some(r) = node.right {
                    ltr.push(r);
                }
                if let Some(l) = node.left {
                    ltr.push(l);
                }
            }
        }
        if !progressed {
            break;
        }
    }
    lines.into_lines()
}

/// Swaps every node's left and right links, bottom-up. Applying it twice
/// restores the original shape.
#[instrument(level = "debug", skip(tree))]
pub fn mirror(tree: &mut TreeArena) {
    fn walk(tree: &mut TreeArena, idx: Option<Index>) {
        if let Some(idx) = idx {
            let (left, right) = match tree.get_node(idx) {
                Some(node) => (node.left, node.right),
                None => return,
            };
            walk(tree, left);
            walk(tree, right);
            if let Some(node) = tree.get_node_mut(idx) {
                node.left = right;
                node.right = left;
            }
        }
    }
    walk(tree, tree.root());
}
