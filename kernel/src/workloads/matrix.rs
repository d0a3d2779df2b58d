//! Matrix kernel: naive dense `i64` matrix product and checksum.
//!
//! `A[i][j] = i + j`, `B[i][j] = i - j`, `C = A·B` by the textbook
//! i-j-k triple loop over row-major storage. The checksum is the sum of
//! every element of `C`. Multiplication and accumulation wrap on overflow
//! so results stay comparable with fixed-width implementations.

/// Square row-major matrix of `i64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    cells: Vec<i64>,
}

impl Matrix {
    /// Build a `size × size` matrix from a cell function `f(row, col)`.
    #[must_use]
    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> i64) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                cells.push(f(i, j));
            }
        }
        Self { size, cells }
    }

    /// `A[i][j] = i + j`.
    #[must_use]
    pub fn sum_indexed(size: usize) -> Self {
        Self::from_fn(size, |i, j| index_value(i) + index_value(j))
    }

    /// `B[i][j] = i - j`.
    #[must_use]
    pub fn difference_indexed(size: usize) -> Self {
        Self::from_fn(size, |i, j| index_value(i) - index_value(j))
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.cells[row * self.size + col]
    }

    /// Naive product `self · rhs`.
    ///
    /// # Panics
    ///
    /// Panics if the operands differ in size.
    #[must_use]
    pub fn multiply(&self, rhs: &Self) -> Self {
        assert_eq!(self.size, rhs.size, "matrix sizes differ");
        let n = self.size;
        let a = &self.cells;
        let b = &rhs.cells;
        let mut cells = vec![0i64; n * n];
        for i in 0..n {
            for j in 0..n {
                let mut sum: i64 = 0;
                for k in 0..n {
                    sum = sum.wrapping_add(a[i * n + k].wrapping_mul(b[k * n + j]));
                }
                cells[i * n + j] = sum;
            }
        }
        Self { size: n, cells }
    }

    /// Wrapping sum of every cell.
    #[must_use]
    pub fn checksum(&self) -> i64 {
        self.cells.iter().fold(0i64, |acc, &v| acc.wrapping_add(v))
    }
}

// Indices are bounded by the matrix size, far below i64::MAX.
#[allow(clippy::cast_possible_wrap)]
fn index_value(i: usize) -> i64 {
    i as i64
}

/// Initialize A and B, multiply, and return the checksum of the product.
#[must_use]
pub fn run(size: usize) -> i64 {
    let a = Matrix::sum_indexed(size);
    let b = Matrix::difference_indexed(size);
    let c = a.multiply(&b);
    let checksum = c.checksum();
    tracing::debug!(size, checksum, "matrix product reduced");
    checksum
}
