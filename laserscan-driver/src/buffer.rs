use crate::constants::N_SLOTS;
use laserscan_data::Reading;

/// Fixed-capacity circular store of readings with FIFO eviction.
///
/// One physical slot is always kept vacant so that `head == tail` means
/// the buffer is empty and a full buffer never aliases that state.
#[derive(Clone, Debug)]
pub(crate) struct ReadingBuffer {
    slots: Vec<Option<Reading>>,
    head: usize,
    tail: usize,
}

impl ReadingBuffer {
    pub(crate) fn new() -> ReadingBuffer {
        ReadingBuffer {
            slots: (0..N_SLOTS).map(|_| None).collect(),
            head: 0,
            tail: 0,
        }
    }

    fn increment(index: usize) -> usize {
        (index + 1) % N_SLOTS
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    pub(crate) fn len(&self) -> usize {
        (self.tail + N_SLOTS - self.head) % N_SLOTS
    }

    /// Inserts `reading` at `tail`. When the buffer already holds the
    /// maximum number of readings, the oldest one is dropped first.
    pub(crate) fn admit(&mut self, reading: Reading) {
        if Self::increment(self.tail) == self.head {
            log::debug!("scan history full, dropping the oldest reading");
            self.slots[self.head] = None;
            self.head = Self::increment(self.head);
        }
        self.slots[self.tail] = Some(reading);
        self.tail = Self::increment(self.tail);
    }

    /// Removes and returns the oldest reading, or `None` when empty.
    /// The vacated slot is cleared before `head` advances.
    pub(crate) fn pop_oldest(&mut self) -> Option<Reading> {
        if self.is_empty() {
            return None;
        }
        let reading = self.slots[self.head].take();
        self.head = Self::increment(self.head);
        reading
    }

    /// Borrows the most recently admitted reading.
    pub(crate) fn newest(&self) -> Option<&Reading> {
        if self.is_empty() {
            return None;
        }
        let last = (self.tail + N_SLOTS - 1) % N_SLOTS;
        self.slots[last].as_ref()
    }

    /// Evicts readings until the buffer is empty. A no-op when it
    /// already is.
    pub(crate) fn clear(&mut self) {
        while self.pop_oldest().is_some() {}
    }

    /// Moves the whole store out, leaving this buffer empty and
    /// immediately reusable.
    pub(crate) fn take(&mut self) -> ReadingBuffer {
        std::mem::replace(self, ReadingBuffer::new())
    }

    /// Readings in admission order, oldest first.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Reading> + '_ {
        let head = self.head;
        (0..self.len()).filter_map(move |offset| self.slots[(head + offset) % N_SLOTS].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BUFFER_CAPACITY;

    fn reading(value: f64) -> Reading {
        Reading {
            ranges: vec![value; 4],
        }
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = ReadingBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert!(buffer.newest().is_none());
    }

    #[test]
    fn test_admit_and_newest() {
        let mut buffer = ReadingBuffer::new();
        buffer.admit(reading(1.));
        buffer.admit(reading(2.));
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.newest().unwrap().ranges, vec![2.; 4]);
    }

    #[test]
    fn test_pop_oldest_is_fifo() {
        let mut buffer = ReadingBuffer::new();
        for value in 0..5 {
            buffer.admit(reading(value as f64));
        }
        for value in 0..5 {
            let popped = buffer.pop_oldest().unwrap();
            assert_eq!(popped.ranges, vec![value as f64; 4]);
        }
        assert!(buffer.is_empty());
        assert!(buffer.pop_oldest().is_none());
    }

    #[test]
    fn test_admit_beyond_capacity_drops_oldest() {
        let mut buffer = ReadingBuffer::new();
        for value in 0..(BUFFER_CAPACITY + 4) {
            buffer.admit(reading(value as f64));
        }
        assert_eq!(buffer.len(), BUFFER_CAPACITY);

        // The four oldest readings are gone.
        let retained: Vec<f64> = buffer.iter().map(|r| r.ranges[0]).collect();
        let expected: Vec<f64> = (4..BUFFER_CAPACITY + 4).map(|v| v as f64).collect();
        assert_eq!(retained, expected);
    }

    #[test]
    fn test_wrap_around_preserves_order() {
        let mut buffer = ReadingBuffer::new();
        // Drive head and tail through index zero several times.
        for value in 0..(3 * N_SLOTS) {
            buffer.admit(reading(value as f64));
            if value % 2 == 0 {
                buffer.pop_oldest();
            }
        }
        let mut previous = f64::MIN;
        for r in buffer.iter() {
            assert!(r.ranges[0] > previous);
            previous = r.ranges[0];
        }
        assert_eq!(buffer.newest().unwrap().ranges[0], (3 * N_SLOTS - 1) as f64);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut buffer = ReadingBuffer::new();
        buffer.clear();
        assert!(buffer.is_empty());

        buffer.admit(reading(7.));
        buffer.clear();
        assert!(buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_take_leaves_buffer_reusable() {
        let mut buffer = ReadingBuffer::new();
        buffer.admit(reading(1.));
        buffer.admit(reading(2.));

        let taken = buffer.take();
        assert_eq!(taken.len(), 2);
        assert!(buffer.is_empty());

        buffer.admit(reading(3.));
        assert_eq!(buffer.newest().unwrap().ranges, vec![3.; 4]);
    }
}
