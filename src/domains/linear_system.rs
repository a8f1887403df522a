//! Dense matrices over a field, with reduction to reduced row-echelon form.

use std::fmt::{Display, Write};
use std::ops::{Index, IndexMut};
use std::slice::Chunks;

use smallvec::SmallVec;

use super::Field;

/// A dense, row-major matrix holding a linear system to be reduced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matrix<F: Field> {
    shape: (u32, u32),
    data: SmallVec<[F::Element; 25]>,
    field: F,
}

impl<F: Field> Matrix<F> {
    /// Create a zero matrix with the given shape.
    pub fn new(rows: u32, cols: u32, field: F) -> Matrix<F> {
        Matrix {
            shape: (rows, cols),
            data: (0..rows as usize * cols as usize)
                .map(|_| field.zero())
                .collect(),
            field,
        }
    }

    /// Build a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics when the rows do not all have the same length.
    pub fn from_rows(rows: Vec<Vec<F::Element>>, field: F) -> Matrix<F> {
        let height = rows.len() as u32;
        let width = rows.first().map(|r| r.len()).unwrap_or(0) as u32;
        assert!(
            rows.iter().all(|r| r.len() as u32 == width),
            "rows must have equal lengths"
        );

        Matrix {
            shape: (height, width),
            data: rows.into_iter().flatten().collect(),
            field,
        }
    }

    /// Build a matrix from its columns.
    pub fn from_columns(columns: Vec<Vec<F::Element>>, field: F) -> Matrix<F> {
        Matrix::from_rows(columns, field).transpose()
    }

    pub fn rows(&self) -> usize {
        self.shape.0 as usize
    }

    pub fn cols(&self) -> usize {
        self.shape.1 as usize
    }

    pub fn row_iter(&self) -> Chunks<'_, F::Element> {
        self.data.chunks(self.shape.1 as usize)
    }

    /// The entries of column `c`, top to bottom.
    pub fn column(&self, c: u32) -> Vec<F::Element> {
        (0..self.shape.0).map(|r| self[(r, c)].clone()).collect()
    }

    pub fn transpose(&self) -> Matrix<F> {
        let mut t = Matrix::new(self.shape.1, self.shape.0, self.field.clone());
        for r in 0..self.shape.0 {
            for c in 0..self.shape.1 {
                t[(c, r)] = self[(r, c)].clone();
            }
        }
        t
    }

    /// The number of rows with at least one nonzero entry.
    pub fn rank_lower_bound(&self) -> usize {
        self.row_iter()
            .filter(|row| row.iter().any(|e| !F::is_zero(e)))
            .count()
    }

    /// Transform the matrix into reduced row-echelon form.
    ///
    /// Pivots are selected greedily per column, preferring an entry that is
    /// exactly 1 so that the elimination introduces no new fractions. The
    /// eliminated rows are then ordered by their number of leading zeros
    /// (zero rows sort last) and scaled so every leading entry is 1.
    ///
    /// Reduction cannot fail: rows that vanish stay as zero rows.
    pub fn reduced(&self) -> Matrix<F> {
        let h = self.rows();
        let w = self.cols();
        let mut rows: Vec<Vec<F::Element>> = self.row_iter().map(|r| r.to_vec()).collect();

        let mut usable = vec![true; h];
        for c in 0..w {
            let mut pivot = None;
            for r in 0..h {
                if usable[r] && !F::is_zero(&rows[r][c]) {
                    if self.field.is_one(&rows[r][c]) {
                        pivot = Some(r);
                        break;
                    }
                    if pivot.is_none() {
                        pivot = Some(r);
                    }
                }
            }

            let Some(p) = pivot else { continue };
            usable[p] = false;

            let pivot_row = rows[p].clone();
            for r in 0..h {
                if r == p || F::is_zero(&rows[r][c]) {
                    continue;
                }
                // row <- row * pivot[c] - pivot_row * row[c], cancelling column c exactly
                let e = rows[r][c].clone();
                for l in 0..w {
                    rows[r][l] = self.field.sub(
                        &self.field.mul(&rows[r][l], &pivot_row[c]),
                        &self.field.mul(&pivot_row[l], &e),
                    );
                }
            }
        }

        rows.sort_by_key(|row| row.iter().take_while(|e| F::is_zero(e)).count());

        for row in &mut rows {
            if let Some(lead) = row.iter().find(|e| !F::is_zero(e)).cloned() {
                for e in row.iter_mut() {
                    self.field.div_assign(e, &lead);
                }
            }
        }

        Matrix::from_rows(rows, self.field.clone())
    }
}

impl<F: Field> Index<(u32, u32)> for Matrix<F> {
    type Output = F::Element;

    fn index(&self, index: (u32, u32)) -> &Self::Output {
        &self.data[(index.0 * self.shape.1 + index.1) as usize]
    }
}

impl<F: Field> IndexMut<(u32, u32)> for Matrix<F> {
    fn index_mut(&mut self, index: (u32, u32)) -> &mut F::Element {
        &mut self.data[(index.0 * self.shape.1 + index.1) as usize]
    }
}

impl<F: Field> Display for Matrix<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('{')?;
        for (ri, r) in self.row_iter().enumerate() {
            f.write_char('{')?;
            for (ci, c) in r.iter().enumerate() {
                c.fmt(f)?;
                if ci + 1 < self.cols() {
                    f.write_char(',')?;
                }
            }
            f.write_char('}')?;
            if ri + 1 < self.rows() {
                f.write_char(',')?;
            }
        }
        f.write_char('}')
    }
}
