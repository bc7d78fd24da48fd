//! `SquareMatrix`: a dense `n x n` matrix with contiguous row-major storage.
//!
//! Backs the adjacency-matrix graph. Rows are exposed as slices so scans over
//! the whole matrix stay cache friendly and never go through per-cell bounds
//! checks.

use std::slice;

/// A dense square matrix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    order: usize,
}

impl<T> SquareMatrix<T> {
    /// Creates an `order x order` matrix filled with `T::default()`.
    pub fn new(order: usize) -> Self
    where
        T: Default + Clone,
    {
        Self {
            data: vec![T::default(); order * order],
            order,
        }
    }

    /// Creates a matrix from nested rows.
    ///
    /// Returns `None` unless every row has exactly `rows.len()` cells.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let order = rows.len();
        if rows.iter().any(|row| row.len() != order) {
            return None;
        }
        let mut data = Vec::with_capacity(order * order);
        for row in rows {
            data.extend(row);
        }
        Some(Self { data, order })
    }

    /// Number of rows (equal to the number of columns).
    #[inline(always)]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns true if the matrix has no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.order && col < self.order {
            self.data.get(row * self.order + col)
        } else {
            None
        }
    }

    /// Writes `value` into both `(a, b)` and `(b, a)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn set_symmetric(&mut self, a: usize, b: usize, value: T)
    where
        T: Clone,
    {
        assert!(a < self.order && b < self.order, "cell ({a}, {b}) out of bounds for order {}", self.order);
        self.data[a * self.order + b] = value.clone();
        self.data[b * self.order + a] = value;
    }

    /// Returns row `row` as a slice, or `None` if out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.order {
            let start = row * self.order;
            Some(&self.data[start..start + self.order])
        } else {
            None
        }
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> slice::ChunksExact<'_, T> {
        // `chunks_exact` rejects a zero chunk size; an empty matrix has no data to chunk anyway.
        self.data.chunks_exact(self.order.max(1))
    }

    /// Iterates over every cell as `(row, col, &value)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (r, c, v)))
    }

    /// Copies the matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.rows().map(<[T]>::to_vec).collect()
    }
}
