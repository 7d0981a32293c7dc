//! Scoring candidate paths against a reference shortest path.
//!
//! A score is the ratio of node counts, `reference / candidate * 100`. It
//! says nothing about whether the candidate follows real edges or shares
//! endpoints with the reference; it only rewards short candidates.

use crate::algorithm::Path;
use crate::data_structures::Leaderboard;
use crate::{Error, Result};

/// Scores a candidate path against a reference path of `reference_len` nodes.
///
/// Candidates no longer than the reference score at least 100.
pub fn score_path(reference_len: usize, candidate: &[usize]) -> Result<f64> {
    if candidate.is_empty() {
        return Err(Error::InvalidCandidate("candidate path is empty".to_string()));
    }
    Ok(reference_len as f64 / candidate.len() as f64 * 100.0)
}

/// Renders a score with six significant digits and no trailing zeros,
/// so `500.0 / 6.0` prints as `83.3333` and `50.0` as `50`.
pub fn format_score(score: f64) -> String {
    if score == 0.0 || !score.is_finite() {
        return score.to_string();
    }

    let magnitude = score.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let rendered = format!("{:.*}", decimals, score);

    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered
    }
}

/// Returns true if both paths visit exactly the same nodes in the same order
pub fn compare_paths(a: &[usize], b: &[usize]) -> bool {
    a == b
}

/// A scoring session bound to one reference path.
///
/// Each session owns its reference, so independent sessions can score
/// against different optima without interfering.
#[derive(Debug, Clone)]
pub struct PathScorer {
    reference: Path,
    vertex_count: usize,
}

impl PathScorer {
    /// Creates a session scoring against `reference` in a graph of `vertex_count` nodes
    pub fn new(reference: Path, vertex_count: usize) -> Self {
        PathScorer {
            reference,
            vertex_count,
        }
    }

    pub fn reference(&self) -> &Path {
        &self.reference
    }

    /// Node count of the reference path
    pub fn reference_len(&self) -> usize {
        self.reference.len()
    }

    /// Scores one candidate.
    ///
    /// Fails with `InvalidCandidate` if the candidate is empty or names a
    /// node outside the graph.
    pub fn score(&self, candidate: &[usize]) -> Result<f64> {
        if let Some(node) = candidate.iter().find(|&&node| node >= self.vertex_count) {
            log::warn!("candidate references node {} outside 0..{}", node, self.vertex_count);
            return Err(Error::InvalidCandidate(format!(
                "node {} is outside 0..{}",
                node, self.vertex_count
            )));
        }
        score_path(self.reference_len(), candidate)
    }

    /// Returns true if the candidate is the reference path itself
    pub fn is_optimal(&self, candidate: &[usize]) -> bool {
        compare_paths(&self.reference, candidate)
    }

    /// Scores every candidate and returns `(candidate index, score)` pairs,
    /// highest score first. One invalid candidate fails the whole batch.
    pub fn rank_entries<C>(&self, candidates: &[C]) -> Result<Vec<(usize, f64)>>
    where
        C: AsRef<[usize]>,
    {
        let mut board = Leaderboard::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            board.push(index, self.score(candidate.as_ref())?);
        }
        log::debug!(
            "ranked {} candidates against a reference of {} nodes",
            board.len(),
            self.reference_len()
        );
        Ok(board.drain_descending())
    }

    /// Scores every candidate and returns the scores, highest first
    pub fn rank<C>(&self, candidates: &[C]) -> Result<Vec<f64>>
    where
        C: AsRef<[usize]>,
    {
        Ok(self
            .rank_entries(candidates)?
            .into_iter()
            .map(|(_, score)| score)
            .collect())
    }
}
