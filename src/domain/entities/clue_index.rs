//! Clue index - a binary search tree of collected clues
//!
//! Ordering is case-insensitive over ASCII: "Key" and "key" are the same
//! clue, and the first casing inserted is the one kept.
//! Insertion walks down iteratively; listing and teardown use explicit
//! stacks, so no operation depends on the call-stack depth.

use std::cmp::Ordering;

/// Compare two clues byte by byte after ASCII lower-casing.
pub fn compare_clues(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

#[derive(Debug)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Ordered set of clue strings
#[derive(Debug, Default)]
pub struct ClueIndex {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue.
    ///
    /// Returns `false` when the text is empty or an equal clue (ignoring
    /// ASCII case) is already stored.
    pub fn insert(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match compare_clues(text, &node.text) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(ClueNode::new(text)));
        self.len += 1;
        true
    }

    /// Stored text for `text`, matched case-insensitively.
    pub fn get(&self, text: &str) -> Option<&str> {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            node = match compare_clues(text, &current.text) {
                Ordering::Less => current.left.as_deref(),
                Ordering::Greater => current.right.as_deref(),
                Ordering::Equal => return Some(&current.text),
            };
        }
        None
    }

    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate clues in ascending case-insensitive order.
    ///
    /// Every call starts a fresh traversal.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn list_in_order(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Height of the tree (0 when empty)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&ClueNode, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|node| (node, 1)));
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Tear the tree down, returning how many nodes were released.
    pub fn release(mut self) -> usize {
        release_nodes(self.root.take())
    }
}

fn release_nodes(root: Option<Box<ClueNode>>) -> usize {
    let mut released = 0;
    let mut stack: Vec<Box<ClueNode>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        released += 1;
    }
    released
}

impl Drop for ClueIndex {
    fn drop(&mut self) {
        release_nodes(self.root.take());
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a str> for ClueIndex {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut index = ClueIndex::new();
        for text in iter {
            index.insert(text);
        }
        index
    }
}

/// In-order traversal driven by an explicit stack
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.text)
    }
}
