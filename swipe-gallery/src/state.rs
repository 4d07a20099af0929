/// Index of the slide currently shown.
///
/// Always satisfies `0 <= current < len`; a gallery without slides has no
/// index at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideIndex {
    current: usize,
    len: usize,
}

impl SlideIndex {
    /// Returns `None` for an empty gallery
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Jump to `index`. Out-of-range requests are ignored.
    pub fn set(&mut self, index: usize) -> bool {
        if index >= self.len {
            log::debug!("Ignoring slide index {} (len {})", index, self.len);
            return false;
        }
        self.current = index;
        true
    }

    /// Move one slide forward, stopping at the last one
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move one slide back, stopping at the first one
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }
}
