//! Array-backed binary min-heap used as the Dijkstra priority queue.
//!
//! Slot `i` has children `2i + 1` and `2i + 2`; every parent's priority is no
//! greater than its children's. The heap supports neither decrease-key nor
//! arbitrary removal, so callers that need to lower a priority push a fresh
//! entry and skip the outdated one when it surfaces.

/// Binary min-heap ordered by a priority `P`, carrying a payload `T`.
///
/// Ties between equal priorities pop in an unspecified order.
///
/// # Examples
/// ```
/// use classics_core::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push(5.0, 'c');
/// heap.push(1.0, 'a');
/// heap.push(3.0, 'b');
/// assert_eq!(heap.pop(), Some((1.0, 'a')));
/// assert_eq!(heap.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<P, T> {
    entries: Vec<(P, T)>,
}

impl<P, T> Default for MinHeap<P, T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<P: PartialOrd, T> MinHeap<P, T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap able to hold `capacity` entries without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Number of entries currently held.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` when no entries remain.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Returns the minimum entry without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.entries.first().map(|(priority, payload)| (priority, payload))
    }

    /// Inserts `payload` with the given `priority`.
    pub fn push(&mut self, priority: P, payload: T) {
        self.entries.push((priority, payload));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority, or `None`
    /// when the heap is empty.
    pub fn pop(&mut self) -> Option<(P, T)> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let top = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].0 <= self.entries[index].0 {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;
            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}
