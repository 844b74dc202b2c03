//! # Dense matrix
//!
//! Row-major matrix stored in a single buffer. Rows can be appended cheaply: the buffer grows by
//! doubling, so that adding cutting planes one by one doesn't reallocate on every row.
use std::ops::{Index, IndexMut, Neg};

use index_utils::remove_indices;

/// Dense matrix with explicit dimensions.
///
/// Indices start at `0`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a matrix from rows of equal length.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row values, every row should have `nr_columns` elements.
    /// * `nr_columns`: Number of columns, needed when there are no rows.
    pub fn from_rows(rows: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let nr_rows = rows.len();
        let mut data = Vec::with_capacity(nr_rows * nr_columns);
        for row in rows {
            data.extend(row);
        }

        Self { data, nr_rows, nr_columns }
    }

    /// Append a row at the bottom of the matrix.
    pub fn push_row(&mut self, row: Vec<F>) {
        debug_assert_eq!(row.len(), self.nr_columns);

        self.data.extend(row);
        self.nr_rows += 1;
    }

    /// Reserve space for `additional` more rows.
    pub fn reserve_rows(&mut self, additional: usize) {
        self.data.reserve(additional * self.nr_columns);
    }

    /// Remove a single column, shifting all columns to the right of it one place to the left.
    pub fn remove_column(&mut self, j: usize) {
        debug_assert!(j < self.nr_columns);

        let indices = (0..self.nr_rows).map(|i| i * self.nr_columns + j).collect::<Vec<_>>();
        remove_indices(&mut self.data, &indices);
        self.nr_columns -= 1;
    }

    /// Values of row `i`.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Mutable values of row `i`.
    pub fn row_mut(&mut self, i: usize) -> &mut [F] {
        debug_assert!(i < self.nr_rows);

        &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Iterate over the values of column `j`, from top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = &F> + '_ {
        debug_assert!(j < self.nr_columns);

        self.data.iter().skip(j).step_by(self.nr_columns.max(1)).take(self.nr_rows)
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Clone> DenseMatrix<F> {
    /// Add a column at the right of the matrix, with the same value in every row.
    pub fn push_constant_column(&mut self, value: F) {
        let nr_columns = self.nr_columns;
        let mut data = Vec::with_capacity(self.nr_rows * (nr_columns + 1));
        for row in self.data.chunks(nr_columns.max(1)).take(self.nr_rows) {
            data.extend_from_slice(row);
            data.push(value.clone());
        }
        if nr_columns == 0 {
            data = (0..self.nr_rows).map(|_| value.clone()).collect();
        }

        self.data = data;
        self.nr_columns += 1;
    }
}

impl<F: Clone + Neg<Output = F>> DenseMatrix<F> {
    /// The negated transpose `-A^T`, as needed for the dual of a dictionary.
    pub fn negative_transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.nr_columns {
            data.extend(self.column(j).map(|value| -value.clone()));
        }

        Self {
            data,
            nr_rows: self.nr_columns,
            nr_columns: self.nr_rows,
        }
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i * self.nr_columns + j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &mut self.data[i * self.nr_columns + j]
    }
}
