//! Keyword and keyphrase extraction from a word co-occurrence graph.

use super::graph::{Graph, PageRank};
use super::stopwords::StopwordFilter;
use super::tokens;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Rank candidate words by co-occurrence within `window` tokens, keep the top
/// `ratio` of them and merge neighbours in the text into phrases.
///
/// Phrases come back best first, each listed once.
pub(super) fn extract(
    text: &str,
    ratio: f64,
    window: usize,
    ranker: &PageRank,
    stopwords: &StopwordFilter,
) -> Vec<String> {
    let words = tokens::words(text);

    let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
    let mut graph = Graph::default();
    let node_of: Vec<Option<usize>> = words
        .iter()
        .map(|w| {
            stopwords
                .is_candidate(w)
                .then(|| *ids.entry(w.as_str()).or_insert_with(|| graph.add_node()))
        })
        .collect();

    for i in 0..words.len() {
        let Some(a) = node_of[i] else { continue };
        for b in node_of.iter().take((i + window).min(words.len())).skip(i + 1).flatten() {
            graph.add_edge(a, *b, 1.0);
        }
    }

    let result = ranker.run(&graph);
    let connected: Vec<usize> = (0..graph.num_nodes())
        .filter(|&n| !graph.is_isolated(n))
        .sorted_by(|&a, &b| result.scores[b].total_cmp(&result.scores[a]).then(a.cmp(&b)))
        .collect();
    if connected.is_empty() {
        return Vec::new();
    }
    let keep = ((connected.len() as f64 * ratio) as usize).max(1);
    let kept: Vec<bool> = {
        let mut kept = vec![false; graph.num_nodes()];
        connected.iter().take(keep).for_each(|&n| kept[n] = true);
        kept
    };

    // Runs of kept words in the original token stream become phrases.
    let mut phrases: Vec<(String, f64)> = Vec::new();
    let mut run: Vec<usize> = Vec::new();
    for (i, node) in node_of.iter().enumerate() {
        match node {
            Some(n) if kept[*n] => run.push(i),
            _ => flush(&mut run, &mut phrases, &words, &node_of, &result.scores),
        }
    }
    flush(&mut run, &mut phrases, &words, &node_of, &result.scores);

    debug!(
        nodes = graph.num_nodes(),
        kept = keep,
        phrases = phrases.len(),
        converged = result.converged,
        "Ranked keywords"
    );
    phrases
        .into_iter()
        .unique_by(|(phrase, _)| phrase.clone())
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .map(|(phrase, _)| phrase)
        .collect()
}

fn flush(
    run: &mut Vec<usize>,
    phrases: &mut Vec<(String, f64)>,
    words: &[String],
    node_of: &[Option<usize>],
    scores: &[f64],
) {
    if run.is_empty() {
        return;
    }
    let phrase = run.iter().map(|&i| words[i].as_str()).join(" ");
    let score = run
        .iter()
        .filter_map(|&i| node_of[i])
        .map(|n| scores[n])
        .sum::<f64>()
        / run.len() as f64;
    phrases.push((phrase, score));
    run.clear();
}
