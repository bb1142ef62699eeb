use std::fmt;
use std::num::NonZeroUsize;

/// Append-only series that optionally overwrites its oldest entry once full.
#[derive(Clone)]
pub struct CircularBuffer<T> {
    buffer: Vec<T>,
    write_pos: usize,
    capacity: Option<NonZeroUsize>,
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> CircularBuffer<T> {
    pub fn unbounded() -> Self {
        Self {
            buffer: Vec::new(),
            write_pos: 0,
            capacity: None,
        }
    }

    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity.get()),
            write_pos: 0,
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|capacity| self.buffer.len() == capacity.get())
    }

    pub fn push(&mut self, item: T) {
        match self.capacity {
            Some(capacity) if self.is_full() => {
                self.buffer[self.write_pos] = item;
                self.write_pos = (self.write_pos + 1) % capacity.get();
            }
            Some(capacity) => {
                self.buffer.push(item);
                self.write_pos = self.buffer.len() % capacity.get();
            }
            None => self.buffer.push(item),
        }
    }

    /// Index of the oldest entry.
    fn head(&self) -> usize {
        if self.is_full() {
            self.write_pos
        } else {
            0
        }
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let head = self.head();
        self.buffer[head..].iter().chain(&self.buffer[..head])
    }

    pub fn last(&self) -> Option<&T> {
        if self.buffer.is_empty() {
            return None;
        }
        let len = self.buffer.len();
        self.buffer.get((self.head() + len - 1) % len)
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
