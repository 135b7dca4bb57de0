//! Weighted-field fuzzy index over a record snapshot.
//!
//! Built once per snapshot, never per keystroke: construction walks every
//! record's weighted fields and keeps their lowercased tokens. Queries rank
//! records by a normalized 0-1 distance, lower is better, and discard
//! records whose best field distance exceeds [`DISTANCE_THRESHOLD`].

use strsim::jaro_winkler;

use crate::listing::Searchable;

/// Matches with a best per-field distance above this value are considered
/// too dissimilar to be relevant. 0.4 on the normalized 0-1 scale.
pub const DISTANCE_THRESHOLD: f64 = 0.4;

struct IndexedField {
    weight: f64,
    tokens: Vec<String>,
}

/// Fuzzy-search index over one immutable record snapshot.
///
/// Positions returned by [`SearchIndex::query`] refer to the snapshot the
/// index was built from; rebuilding is wholesale, there is no incremental
/// update path for single-record edits.
pub struct SearchIndex {
    docs: Vec<Vec<IndexedField>>,
}

impl SearchIndex {
    /// Walks every record once and stores lowercased tokens per field.
    pub fn build<T: Searchable>(records: &[T]) -> Self {
        let docs = records
            .iter()
            .map(|record| {
                record
                    .fields()
                    .into_iter()
                    .map(|field| IndexedField {
                        weight: field.weight,
                        tokens: tokenize(field.text),
                    })
                    .collect()
            })
            .collect();
        Self { docs }
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Returns record positions ordered most-relevant first.
    ///
    /// An empty or whitespace-only query short-circuits to all records in
    /// their original order with no ranking applied. Ties in the ranked
    /// case break by original snapshot order.
    pub fn query(&self, q: &str) -> Vec<usize> {
        if q.trim().is_empty() {
            return (0..self.docs.len()).collect();
        }

        let query_tokens = tokenize(q);
        let mut ranked: Vec<(usize, f64)> = self
            .docs
            .iter()
            .enumerate()
            .filter_map(|(pos, fields)| {
                let mut best_raw = f64::INFINITY;
                let mut best_weighted = f64::INFINITY;
                for field in fields {
                    let distance = field_distance(&query_tokens, &field.tokens);
                    best_raw = best_raw.min(distance);
                    // A perfect match would erase the weight (0^w == 0 for
                    // any w), so raise it to epsilon before weighting.
                    best_weighted =
                        best_weighted.min(distance.max(f64::EPSILON).powf(field.weight));
                }
                (best_raw <= DISTANCE_THRESHOLD).then_some((pos, best_weighted))
            })
            .collect();

        // sort_by is stable, so equal scores keep snapshot order.
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.into_iter().map(|(pos, _)| pos).collect()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| t.to_lowercase())
        .collect()
}

/// Average over query tokens of the best per-token distance to the field.
fn field_distance(query_tokens: &[String], field_tokens: &[String]) -> f64 {
    if query_tokens.is_empty() || field_tokens.is_empty() {
        return 1.0;
    }
    let total: f64 = query_tokens
        .iter()
        .map(|qt| {
            field_tokens
                .iter()
                .map(|ft| token_distance(qt, ft))
                .fold(1.0_f64, f64::min)
        })
        .sum();
    total / query_tokens.len() as f64
}

fn token_distance(query: &str, field: &str) -> f64 {
    if field.contains(query) {
        0.0
    } else {
        1.0 - jaro_winkler(query, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::WeightedField;

    struct Doc {
        title: &'static str,
        body: &'static str,
    }

    impl Searchable for Doc {
        fn fields(&self) -> Vec<WeightedField<'_>> {
            vec![
                WeightedField::new(2.0, self.title),
                WeightedField::new(1.0, self.body),
            ]
        }

        fn categories(&self) -> Vec<&str> {
            vec![]
        }
    }

    fn sample() -> Vec<Doc> {
        vec![
            Doc {
                title: "7 Ways AI Chatbots Are Transforming Customer Service",
                body: "support costs and satisfaction",
            },
            Doc {
                title: "The Complete Guide to Training Your AI Chatbot",
                body: "intents and entities",
            },
            Doc {
                title: "Measuring Chatbot ROI: Key Metrics",
                body: "conversion and retention",
            },
            Doc {
                title: "Integrating Your Chatbot with CRM Systems",
                body: "customer insights",
            },
            Doc {
                title: "Quarterly Gardening Tips",
                body: "soil and seeds",
            },
        ]
    }

    #[test]
    fn empty_query_returns_original_order() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        assert_eq!(index.query(""), vec![0, 1, 2, 3, 4]);
        assert_eq!(index.query("   \t "), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn ranked_query_puts_best_match_first() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        let hits = index.query("chatbot roi");
        assert_eq!(hits.first(), Some(&2));
        assert!(!hits.contains(&4), "unrelated record must be discarded");
    }

    #[test]
    fn typo_still_matches() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        let hits = index.query("chatbto");
        assert!(!hits.is_empty());
        assert!(!hits.contains(&4));
    }

    #[test]
    fn punctuation_only_query_does_not_panic() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        let _ = index.query("!!! ???");
        let _ = index.query(&"x".repeat(10_000));
    }

    #[test]
    fn query_is_deterministic() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        assert_eq!(index.query("chatbot"), index.query("chatbot"));
    }

    #[test]
    fn higher_weighted_field_ranks_first() {
        let docs = vec![
            Doc {
                title: "release notes",
                body: "roadmap",
            },
            Doc {
                title: "roadmap",
                body: "release notes",
            },
        ];
        let index = SearchIndex::build(&docs);
        // Equal-quality match, but doc 1 matches in the title (weight 2.0).
        assert_eq!(index.query("roadmap"), vec![1, 0]);
    }

    #[test]
    fn ties_keep_snapshot_order() {
        let docs = vec![
            Doc {
                title: "pricing update",
                body: "",
            },
            Doc {
                title: "pricing update",
                body: "",
            },
        ];
        let index = SearchIndex::build(&docs);
        assert_eq!(index.query("pricing"), vec![0, 1]);
    }
}
