/// A non-empty, fixed list of items with a wrapping cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicSequence<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> CyclicSequence<T> {
    /// Returns `None` when `items` is empty.
    pub fn new(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, index: 0 })
    }

    pub fn current(&self) -> &T {
        &self.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }

    pub fn retreat(&mut self) {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
    }
}
