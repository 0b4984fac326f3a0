/// Recorded particle movement (from_row, from_col, to_row, to_col)
pub type ParticleMove = (u32, u32, u32, u32);

/// Reusable per-tick move log. Allocated once, cleared every tick;
/// grows by doubling if a tick records more moves than expected.
pub struct MoveBuffer {
    data: Vec<ParticleMove>,
    overflow_count: usize,
}

impl MoveBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            overflow_count: 0,
        }
    }

    #[inline(always)]
    pub fn push(&mut self, m: ParticleMove) {
        if self.data.len() == self.data.capacity() {
            self.overflow_count += 1;
        }
        self.data.push(m);
    }

    /// Reset length - memory stays allocated
    #[inline(always)]
    pub fn clear(&mut self) {
        self.data.clear();
        self.overflow_count = 0;
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[ParticleMove] {
        &self.data
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// How many pushes this tick found the buffer full and forced a regrow
    #[inline(always)]
    pub fn overflow_count(&self) -> usize {
        self.overflow_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_past_initial_capacity_and_counts_overflow() {
        let mut buf = MoveBuffer::new(2);
        let cap = buf.capacity();
        for i in 0..(cap as u32 + 3) {
            buf.push((i, 0, i + 1, 0));
        }
        assert_eq!(buf.len(), cap + 3);
        assert!(buf.overflow_count() >= 1);
        assert_eq!(buf.as_slice()[0], (0, 0, 1, 0));

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.overflow_count(), 0);
        assert!(buf.capacity() >= cap + 3);
    }
}
