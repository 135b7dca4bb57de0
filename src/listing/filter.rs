//! Search-then-tag composition over one record snapshot.

use crate::listing::search::SearchIndex;
use crate::listing::{ALL_TAG, Searchable};

/// Narrows a snapshot by free text, then by a categorical tag, returning
/// references in relevance order.
///
/// Tag filtering runs on the search-ranked output, so a tag narrows
/// relevance-ranked results instead of re-ranking a pre-filtered set. Empty
/// output is an ordinary value, never an error; the caller renders the
/// empty state with a reset affordance.
pub fn filter_records<'a, T: Searchable>(
    index: &SearchIndex,
    records: &'a [T],
    q: &str,
    tag: &str,
) -> Vec<&'a T> {
    debug_assert_eq!(index.len(), records.len());

    let ranked = index.query(q);
    let matches_tag = |record: &T| tag == ALL_TAG || record.categories().contains(&tag);

    ranked
        .into_iter()
        .filter_map(|pos| records.get(pos))
        .filter(|record| matches_tag(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::WeightedField;

    struct Doc {
        title: &'static str,
        category: &'static str,
        tags: Vec<&'static str>,
    }

    impl Searchable for Doc {
        fn fields(&self) -> Vec<WeightedField<'_>> {
            vec![WeightedField::new(2.0, self.title)]
        }

        fn categories(&self) -> Vec<&str> {
            let mut values = vec![self.category];
            values.extend(self.tags.iter().copied());
            values
        }
    }

    fn sample() -> Vec<Doc> {
        vec![
            Doc {
                title: "Transforming Customer Service",
                category: "Customer Service",
                tags: vec!["AI Chatbots", "ROI"],
            },
            Doc {
                title: "Training Your AI Chatbot",
                category: "AI Training",
                tags: vec!["NLP"],
            },
            Doc {
                title: "Measuring Chatbot ROI",
                category: "Analytics",
                tags: vec!["ROI", "Metrics"],
            },
        ]
    }

    #[test]
    fn empty_query_and_all_tag_is_identity() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        let out = filter_records(&index, &docs, "", ALL_TAG);
        assert_eq!(out.len(), docs.len());
        for (kept, original) in out.iter().zip(docs.iter()) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn tag_matches_category_or_tag_list() {
        let docs = sample();
        let index = SearchIndex::build(&docs);

        let by_category = filter_records(&index, &docs, "", "Analytics");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].title, "Measuring Chatbot ROI");

        let by_tag = filter_records(&index, &docs, "", "ROI");
        assert_eq!(by_tag.len(), 2);
    }

    #[test]
    fn tag_filter_narrows_ranked_output() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        let all = filter_records(&index, &docs, "chatbot", ALL_TAG);
        let narrowed = filter_records(&index, &docs, "chatbot", "Analytics");
        // Subset of the unfiltered search, in the same relative order.
        assert!(narrowed.len() <= all.len());
        for record in &narrowed {
            assert_eq!(record.category, "Analytics");
            assert!(all.iter().any(|r| std::ptr::eq(*r, *record)));
        }
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        assert!(filter_records(&index, &docs, "", "Gardening").is_empty());
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let docs = sample();
        let index = SearchIndex::build(&docs);
        let a: Vec<_> = filter_records(&index, &docs, "chatbot", "ROI")
            .iter()
            .map(|d| d.title)
            .collect();
        let b: Vec<_> = filter_records(&index, &docs, "chatbot", "ROI")
            .iter()
            .map(|d| d.title)
            .collect();
        assert_eq!(a, b);
    }
}
