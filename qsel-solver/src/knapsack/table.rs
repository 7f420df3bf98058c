use super::Item;

/// Full `(n + 1) x (capacity + 1)` table of best values, stored row-major.
/// Row `i` holds the optimum using only the first `i` items.
pub(crate) struct DpTable {
    width: usize,
    cells: Vec<u64>,
}

impl DpTable {
    pub(crate) fn build<I, P>(items: &[Item<I, P>], capacity: u32) -> Self {
        let width = capacity as usize + 1;
        let mut cells = vec![0u64; (items.len() + 1) * width];

        for (i, item) in items.iter().enumerate() {
            let weight = item.weight as usize;
            let value = item.value as u64;
            let (done, rest) = cells.split_at_mut((i + 1) * width);
            let prev = &done[i * width..];
            let row = &mut rest[..width];
            for w in 0..width {
                row[w] = if weight > w {
                    prev[w]
                } else {
                    prev[w].max(prev[w - weight] + value)
                };
            }
        }

        Self { width, cells }
    }

    pub(crate) fn get(&self, i: usize, w: usize) -> u64 {
        self.cells[i * self.width + w]
    }

    pub(crate) fn num_rows(&self) -> usize {
        self.cells.len() / self.width
    }
}
