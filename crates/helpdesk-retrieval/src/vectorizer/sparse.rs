//! Sparse vectors as sorted (feature index, weight) pairs.

/// A sparse vector with entries sorted by strictly increasing feature index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from unordered pairs. Duplicate indices are summed, zero weights dropped.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|&(i, _)| i);
        let mut entries: Vec<(usize, f64)> = Vec::with_capacity(pairs.len());
        for (i, w) in pairs {
            match entries.last_mut() {
                Some((last, acc)) if *last == i => *acc += w,
                _ => entries.push((i, w)),
            }
        }
        entries.retain(|&(_, w)| w != 0.0);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 norm. The zero vector stays zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::EPSILON {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    /// Dot product by merging the two sorted index lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_and_merges() {
        let v = SparseVector::from_pairs(vec![(3, 1.0), (1, 2.0), (3, 0.5), (2, 0.0)]);
        assert_eq!(v.entries(), &[(1, 2.0), (3, 1.5)]);
    }

    #[test]
    fn normalized_vector_has_unit_norm() {
        let mut v = SparseVector::from_pairs(vec![(0, 3.0), (7, 4.0)]);
        v.l2_normalize();
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.entries()[0].1 - 0.6).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_stays_zero() {
        let mut v = SparseVector::default();
        v.l2_normalize();
        assert!(v.is_zero());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn dot_only_counts_shared_indices() {
        let a = SparseVector::from_pairs(vec![(0, 1.0), (2, 2.0), (5, 3.0)]);
        let b = SparseVector::from_pairs(vec![(2, 4.0), (4, 1.0), (5, 1.0)]);
        assert_eq!(a.dot(&b), 11.0);
        assert_eq!(a.dot(&SparseVector::default()), 0.0);
    }
}
