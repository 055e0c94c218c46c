//! Extractive sentence selection.

use super::graph::{Graph, PageRank};
use super::stopwords::StopwordFilter;
use super::tokens;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Pick the most central lines of `text` whose combined length best
/// approximates `target_words`, returned in document order joined by `\n`.
pub(super) fn summarize(
    text: &str,
    target_words: usize,
    ranker: &PageRank,
    stopwords: &StopwordFilter,
) -> String {
    let sentences: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let candidates: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| {
            tokens::words(s)
                .into_iter()
                .filter(|w| stopwords.is_candidate(w))
                .collect()
        })
        .collect();
    let sets: Vec<FxHashSet<&str>> = candidates
        .iter()
        .map(|c| c.iter().map(String::as_str).collect())
        .collect();

    let mut graph = Graph::with_nodes(sentences.len());
    for i in 0..sentences.len() {
        for j in (i + 1)..sentences.len() {
            graph.add_edge(i, j, similarity(&candidates[i], &candidates[j], &sets[i], &sets[j]));
        }
    }

    let result = ranker.run(&graph);
    let mut ranked: Vec<usize> = (0..sentences.len())
        .filter(|&i| !graph.is_isolated(i))
        .collect();
    ranked.sort_by(|&a, &b| {
        result.scores[b]
            .total_cmp(&result.scores[a])
            .then(a.cmp(&b))
    });

    let mut selected = Vec::new();
    let mut word_count = 0usize;
    for index in ranked {
        let length = sentences[index].split_whitespace().count();
        // Stop as soon as adding the sentence moves us further from the target.
        if target_words.abs_diff(word_count + length) > target_words.abs_diff(word_count) {
            break;
        }
        selected.push(index);
        word_count += length;
    }
    selected.sort_unstable();

    debug!(
        sentences = sentences.len(),
        selected = selected.len(),
        word_count,
        iterations = result.iterations,
        converged = result.converged,
        "Ranked sentences"
    );
    selected
        .into_iter()
        .map(|i| sentences[i])
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shared words normalised by the log lengths of both sentences.
fn similarity(a: &[String], b: &[String], a_set: &FxHashSet<&str>, b_set: &FxHashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a_set.intersection(b_set).count() as f64;
    let norm = (a.len() as f64).log10() + (b.len() as f64).log10();
    if norm == 0.0 { 0.0 } else { common / norm }
}
