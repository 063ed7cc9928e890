//! instance loader and conflict graph for the Disjunctively Constrained
//! Knapsack Problem.
//!
//! an [`Instance`] is immutable after load: it is shared by reference by
//! every constructor and local searcher for the rest of a run.

use std::fs;
use std::path::{Path, PathBuf};

use bit_set::BitSet;

use crate::error::DckpError;

/// item index, 0-based internally. the external file format is 1-based
/// and is converted on read.
pub type ItemId = usize;

/// a single instance of the Disjunctively Constrained Knapsack Problem.
#[derive(Debug)]
pub struct Instance {
    n_items: usize,
    capacity: i64,
    profits: Vec<i64>,
    weights: Vec<i64>,
    /// raw conflict pairs as read from the file (out-of-range pairs and
    /// self-loops already discarded). used only for `conflict_density`.
    conflicts: Vec<(ItemId, ItemId)>,
    /// adj[i]: sorted, de-duplicated list of items conflicting with i.
    adj: Vec<Vec<ItemId>>,
    /// optional dense adjacency matrix, populated on demand for O(1)
    /// conflict queries on small-to-medium instances.
    adj_matrix: Option<Vec<BitSet>>,
}

impl Instance {
    /// number of items in the catalogue.
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// capacity of the knapsack.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// profit of item `i`.
    pub fn profit(&self, i: ItemId) -> i64 {
        self.profits[i]
    }

    /// weight of item `i`.
    pub fn weight(&self, i: ItemId) -> i64 {
        self.weights[i]
    }

    /// profits of all items, in item order.
    pub fn profits(&self) -> &[i64] {
        &self.profits
    }

    /// weights of all items, in item order.
    pub fn weights(&self) -> &[i64] {
        &self.weights
    }

    /// raw conflict edge list (as parsed, de-duplicated only by
    /// dropping out-of-range indices and self-loops).
    pub fn conflicts(&self) -> &[(ItemId, ItemId)] {
        &self.conflicts
    }

    /// items conflicting with `i`, sorted ascending.
    pub fn adj(&self, i: ItemId) -> &[ItemId] {
        &self.adj[i]
    }

    /// number of items conflicting with `i`.
    pub fn conflict_degree(&self, i: ItemId) -> usize {
        self.adj[i].len()
    }

    /// true iff `i` and `j` share a conflict edge. O(1) once
    /// [`Instance::populate_adj_matrix`] has been called, otherwise a
    /// binary search in the smaller of the two adjacency lists (O(log d)).
    pub fn has_conflict(&self, i: ItemId, j: ItemId) -> bool {
        if i == j {
            return false;
        }
        if let Some(matrix) = &self.adj_matrix {
            return matrix[i].contains(j);
        }
        let (probe, needle) = if self.adj[i].len() <= self.adj[j].len() {
            (&self.adj[i], j)
        } else {
            (&self.adj[j], i)
        };
        probe.binary_search(&needle).is_ok()
    }

    /// percentage density of the conflict graph:
    /// `100 * |conflicts| / (n*(n-1)/2)`.
    pub fn conflict_density(&self) -> f64 {
        let n = self.n_items as f64;
        if n < 2.0 {
            return 0.0;
        }
        let max_pairs = n * (n - 1.0) / 2.0;
        100.0 * self.conflicts.len() as f64 / max_pairs
    }

    /// populates a dense bitset adjacency matrix, trading memory for an
    /// O(1) [`Instance::has_conflict`] query. Optional: instances are
    /// usable without ever calling this.
    pub fn populate_adj_matrix(&mut self) {
        let mut matrix = vec![BitSet::with_capacity(self.n_items); self.n_items];
        for (i, neighbors) in self.adj.iter().enumerate() {
            for &j in neighbors {
                matrix[i].insert(j);
            }
        }
        self.adj_matrix = Some(matrix);
    }

    /// builds an instance directly from parsed data. mainly useful for
    /// tests and for constructing fixtures in-line.
    pub fn new(
        capacity: i64,
        profits: Vec<i64>,
        weights: Vec<i64>,
        raw_conflicts: Vec<(ItemId, ItemId)>,
    ) -> Self {
        let n_items = profits.len();
        assert_eq!(weights.len(), n_items, "profits/weights length mismatch");
        let conflicts: Vec<(ItemId, ItemId)> = raw_conflicts
            .into_iter()
            .filter(|&(u, v)| u != v && u < n_items && v < n_items)
            .collect();
        let mut adj = vec![Vec::new(); n_items];
        for &(u, v) in &conflicts {
            adj[u].push(v);
            adj[v].push(u);
        }
        for neighbors in &mut adj {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Self {
            n_items,
            capacity,
            profits,
            weights,
            conflicts,
            adj,
            adj_matrix: None,
        }
    }

    /// reads an instance from a whitespace-tokenised text file.
    ///
    /// format: `n_items capacity n_conflicts`, then `n_items` profits,
    /// then `n_items` weights, then conflict-edge pairs (1-based) read
    /// until end of file regardless of the declared `n_conflicts`.
    /// out-of-range conflict indices are dropped, not fatal.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DckpError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DckpError::InstanceIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&raw, path.to_path_buf())
    }

    /// parses an instance from its in-memory textual representation.
    /// split out from [`Instance::from_file`] so tests can exercise the
    /// parser without touching the filesystem.
    pub fn from_str(text: &str, origin: PathBuf) -> Result<Self, DckpError> {
        let mut tokens = text.split_ascii_whitespace();
        let mut next_int = |what: &str| -> Result<i64, DckpError> {
            tokens
                .next()
                .ok_or_else(|| DckpError::MalformedHeader {
                    path: origin.clone(),
                    reason: format!("expected {what}, found end of input"),
                })?
                .parse::<i64>()
                .map_err(|_| DckpError::MalformedHeader {
                    path: origin.clone(),
                    reason: format!("expected integer {what}"),
                })
        };

        let n_items = next_int("n_items")?;
        let capacity = next_int("capacity")?;
        let _n_conflicts = next_int("n_conflicts")?;

        if n_items <= 0 || capacity <= 0 {
            return Err(DckpError::InvalidDimensions { path: origin });
        }
        let n_items = n_items as usize;

        let mut profits = Vec::with_capacity(n_items);
        for idx in 0..n_items {
            profits.push(next_int(&format!("profit[{idx}]"))?);
        }
        let mut weights = Vec::with_capacity(n_items);
        for idx in 0..n_items {
            weights.push(next_int(&format!("weight[{idx}]"))?);
        }

        // conflict pairs: read until EOF, tolerate a trailing unmatched
        // token by simply stopping there. out-of-range indices are
        // dropped silently rather than treated as fatal.
        let mut raw_conflicts = Vec::new();
        loop {
            let u = match tokens.next() {
                None => break,
                Some(tok) => match tok.parse::<i64>() {
                    Ok(v) => v,
                    Err(_) => break,
                },
            };
            let v = match tokens.next() {
                None => break,
                Some(tok) => match tok.parse::<i64>() {
                    Ok(v) => v,
                    Err(_) => break,
                },
            };
            // external format is 1-based; convert to 0-based. out of
            // range or non-positive indices are silently discarded.
            if u >= 1 && v >= 1 {
                let (u0, v0) = ((u - 1) as usize, (v - 1) as usize);
                if u0 < n_items && v0 < n_items {
                    raw_conflicts.push((u0, v0));
                }
            }
        }

        Ok(Self::new(capacity, profits, weights, raw_conflicts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> Instance {
        // n=3, capacity=5, profits [4,3,3], weights [3,2,2], conflict (1,2) 0-based
        Instance::new(5, vec![4, 3, 3], vec![3, 2, 2], vec![(1, 2)])
    }

    #[test]
    fn test_basic_fields() {
        let inst = tiny();
        assert_eq!(inst.n_items(), 3);
        assert_eq!(inst.capacity(), 5);
        assert_eq!(inst.profit(0), 4);
        assert_eq!(inst.weight(2), 2);
    }

    #[test]
    fn test_conflict_graph_symmetric() {
        let inst = tiny();
        assert!(inst.has_conflict(1, 2));
        assert!(inst.has_conflict(2, 1));
        assert!(!inst.has_conflict(0, 1));
        assert_eq!(inst.conflict_degree(1), 1);
        assert_eq!(inst.conflict_degree(0), 0);
    }

    #[test]
    fn test_adj_matrix_matches_list_based_query() {
        let mut inst = tiny();
        assert!(inst.has_conflict(1, 2));
        inst.populate_adj_matrix();
        assert!(inst.has_conflict(1, 2));
        assert!(!inst.has_conflict(0, 2));
    }

    #[test]
    fn test_conflict_density_stable_across_calls() {
        let inst = tiny();
        let d1 = inst.conflict_density();
        let d2 = inst.conflict_density();
        assert_eq!(d1, d2);
        // 1 conflict out of C(3,2)=3 possible pairs -> 100/3
        assert!((d1 - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_conflicts_silently_dropped() {
        // item indices only go 0..3; a pair touching index 5 must be dropped.
        let inst = Instance::new(5, vec![4, 3, 3], vec![3, 2, 2], vec![(1, 2), (2, 5)]);
        assert_eq!(inst.conflicts().len(), 1);
        assert_eq!(inst.conflict_degree(2), 1);
    }

    #[test]
    fn test_from_str_parses_header_and_conflicts() {
        let text = "3 5 1\n4 3 3\n3 2 2\n2 3\n";
        let inst = Instance::from_str(text, PathBuf::from("mem")).unwrap();
        assert_eq!(inst.n_items(), 3);
        assert_eq!(inst.capacity(), 5);
        assert!(inst.has_conflict(1, 2));
    }

    #[test]
    fn test_from_str_tolerates_extra_tail_tokens() {
        // declared n_conflicts is 5 but only one pair follows: parsing
        // must stop at EOF, not fail.
        let text = "3 5 5\n4 3 3\n3 2 2\n2 3\n";
        let inst = Instance::from_str(text, PathBuf::from("mem")).unwrap();
        assert_eq!(inst.conflicts().len(), 1);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let text = "0 5 0\n";
        let err = Instance::from_str(text, PathBuf::from("mem")).unwrap_err();
        assert!(matches!(err, DckpError::InvalidDimensions { .. }));

        let text = "3 0 0\n4 3 3\n3 2 2\n";
        let err = Instance::from_str(text, PathBuf::from("mem")).unwrap_err();
        assert!(matches!(err, DckpError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_malformed_header_rejected() {
        let text = "not_a_number 5 0\n";
        let err = Instance::from_str(text, PathBuf::from("mem")).unwrap_err();
        assert!(matches!(err, DckpError::MalformedHeader { .. }));
    }
}
