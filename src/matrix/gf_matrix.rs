// src/matrix/gf_matrix.rs

use crate::gf::GfNum;

/// A dense matrix over GF(p), used to compute the rank of the Berlekamp
/// matrix by row reduction.
pub struct GfMatrix {
    rows: Vec<Vec<GfNum>>,
}

impl GfMatrix {
    /// Builds a matrix from rows of equal length over a single field.
    pub fn from_rows(rows: Vec<Vec<GfNum>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));
        debug_assert!(rows
            .iter()
            .flatten()
            .all(|c| rows[0].first().map_or(true, |f| c.base() == f.base())));
        GfMatrix { rows }
    }

    /// The rank, by reduction to row-echelon form.
    ///
    /// For each column, a pivot is searched at or below the current row;
    /// when found it is swapped up and every row below has its leading
    /// entry eliminated with `scale = m[j][k] / m[i][k]`.
    pub fn rank(mut self) -> usize {
        let nrows = self.rows.len();
        let ncols = match self.rows.first() {
            None => return 0,
            Some(row) => row.len(),
        };

        let mut i = 0;
        for k in 0..ncols {
            if i >= nrows {
                break;
            }
            let pivot = (i..nrows).find(|&r| !self.rows[r][k].is_zero());
            let pivot = match pivot {
                None => continue,
                Some(p) => p,
            };
            self.rows.swap(i, pivot);
            for j in i + 1..nrows {
                if self.rows[j][k].is_zero() {
                    continue;
                }
                let scale = &self.rows[j][k] / &self.rows[i][k];
                for l in k..ncols {
                    let delta = &self.rows[i][l] * &scale;
                    self.rows[j][l] -= &delta;
                }
            }
            i += 1;
        }
        i
    }
}
