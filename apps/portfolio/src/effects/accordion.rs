use std::collections::BTreeSet;

/// Items expanded when nothing else is configured: the two most recent roles.
pub const DEFAULT_EXPANDED: [usize; 2] = [0, 1];

/// Expand/collapse state for a list of `len` items. Any number may be open at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    expanded: BTreeSet<usize>,
}

impl Accordion {
    /// Out-of-range entries in `initially_expanded` are ignored.
    pub fn new(len: usize, initially_expanded: &[usize]) -> Self {
        Self {
            len,
            expanded: initially_expanded.iter().copied().filter(|&i| i < len).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// Flips one item. Returns its new state, or `None` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        if self.expanded.remove(&index) {
            Some(false)
        } else {
            self.expanded.insert(index);
            Some(true)
        }
    }

    pub fn expanded(&self) -> impl Iterator<Item = usize> + '_ {
        self.expanded.iter().copied()
    }
}
