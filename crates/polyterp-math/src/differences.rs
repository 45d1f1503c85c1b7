//! Forward finite-difference tables.

use crate::table::SampleTable;

/// Triangular table of forward differences.
///
/// Column 0 holds the y values. Column `k` holds the `n - k` differences
/// `Δᵏyᵢ = Δᵏ⁻¹yᵢ₊₁ - Δᵏ⁻¹yᵢ`; its bottom `k` cells have no value, which
/// [`DifferenceTable::get`] reports as `None` rather than zero.
///
/// ```text
///  i │  y    Δy    Δ²y   Δ³y
/// ───┼──────────────────────
///  0 │  y0   Δy0   Δ²y0  Δ³y0
///  1 │  y1   Δy1   Δ²y1   -
///  2 │  y2   Δy2    -     -
///  3 │  y3    -     -     -
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    columns: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Builds the difference table of a sample table in O(n²).
    pub fn build(table: &SampleTable) -> Self {
        let n = table.len();
        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(n);
        columns.push(table.ys().to_vec());

        for order in 1..n {
            let prev = &columns[order - 1];
            let next: Vec<f64> = prev.windows(2).map(|w| w[1] - w[0]).collect();
            columns.push(next);
        }

        log::trace!("built {n}x{n} finite difference table");
        Self { columns }
    }

    /// Number of rows, equal to the number of columns.
    pub fn order(&self) -> usize {
        self.columns.len()
    }

    /// Defined values of column `k` (the `n - k` differences of order `k`).
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.order()`.
    pub fn column(&self, k: usize) -> &[f64] {
        &self.columns[k]
    }

    /// `Δᵏyᵢ` at `row` in column `col`, or `None` for absent cells.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.columns.get(col).and_then(|c| c.get(row)).copied()
    }

    /// All cells of one row, absent cells included as `None`.
    pub fn row(&self, row: usize) -> Vec<Option<f64>> {
        (0..self.order()).map(|col| self.get(row, col)).collect()
    }

    /// Number of absent cells in column `k`.
    pub fn absent_in_column(&self, k: usize) -> usize {
        self.order() - self.columns.get(k).map_or(0, Vec::len)
    }

    /// Bottom-most defined difference of order `k`, `Δᵏyₙ₋₁₋ₖ`.
    pub(crate) fn last_defined(&self, k: usize) -> f64 {
        let col = &self.columns[k];
        col[col.len() - 1]
    }
}
