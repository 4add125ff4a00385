/// Expandable section list where at most one item is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// `len` items with the first one open.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: if len > 0 { Some(0) } else { None },
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Header click: closes `index` if it is open, otherwise opens it and
    /// closes the rest. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    /// Start over for a new item list (new content was installed).
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }
}
