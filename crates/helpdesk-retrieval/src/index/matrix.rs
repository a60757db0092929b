//! Row-aligned sparse document matrix.

use rayon::prelude::*;

use crate::vectorizer::SparseVector;

/// One L2-normalized sparse row per corpus record, aligned by ordinal.
#[derive(Debug, Clone, Default)]
pub struct DocumentMatrix {
    rows: Vec<SparseVector>,
    columns: usize,
}

impl DocumentMatrix {
    pub fn new(rows: Vec<SparseVector>, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn row(&self, index: usize) -> Option<&SparseVector> {
        self.rows.get(index)
    }

    /// Dot product of `query` with every row, in row order.
    pub fn scores(&self, query: &SparseVector) -> Vec<f64> {
        if query.is_zero() {
            return vec![0.0; self.rows.len()];
        }
        self.rows.par_iter().map(|row| row.dot(query)).collect()
    }
}

/// Index and value of the maximum; the first index wins ties.
pub fn argmax_first(scores: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_prefers_first_on_ties() {
        assert_eq!(argmax_first(&[0.2, 0.7, 0.7, 0.1]), Some((1, 0.7)));
        assert_eq!(argmax_first(&[0.0, 0.0]), Some((0, 0.0)));
        assert_eq!(argmax_first(&[]), None);
    }

    #[test]
    fn zero_query_scores_zero_everywhere() {
        let m = DocumentMatrix::new(
            vec![
                SparseVector::from_pairs(vec![(0, 1.0)]),
                SparseVector::from_pairs(vec![(1, 1.0)]),
            ],
            2,
        );
        assert_eq!(m.scores(&SparseVector::default()), vec![0.0, 0.0]);
        assert_eq!(
            m.scores(&SparseVector::from_pairs(vec![(1, 1.0)])),
            vec![0.0, 1.0]
        );
    }
}
