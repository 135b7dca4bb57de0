//! End-to-end checks of the listing pipeline: search, tag filter,
//! pagination and sorting over realistic records.

use chatai_site::listing::{
    ALL_TAG, QueryState, SearchIndex, Searchable, SortDirection, WeightedField, filter_records,
    sort_records,
};
use chatai_site::pagination::{Paginated, page_bounds};

#[derive(Clone, Debug, PartialEq)]
struct Article {
    title: String,
    excerpt: String,
    category: String,
    tags: Vec<String>,
}

impl Article {
    fn new(title: &str, excerpt: &str, category: &str, tags: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Searchable for Article {
    fn fields(&self) -> Vec<WeightedField<'_>> {
        let mut fields = vec![
            WeightedField::new(2.0, &self.title),
            WeightedField::new(1.5, &self.excerpt),
            WeightedField::new(1.0, &self.category),
        ];
        fields.extend(self.tags.iter().map(|t| WeightedField::new(1.0, t)));
        fields
    }

    fn categories(&self) -> Vec<&str> {
        let mut values = vec![self.category.as_str()];
        values.extend(self.tags.iter().map(String::as_str));
        values
    }
}

fn articles() -> Vec<Article> {
    vec![
        Article::new(
            "7 Ways AI Chatbots Are Transforming Customer Service",
            "How leading businesses improve satisfaction and reduce support costs.",
            "Customer Service",
            &["AI Chatbots", "Business Automation"],
        ),
        Article::new(
            "The Complete Guide to Training Your AI Chatbot",
            "Train your chatbot to understand queries and answer accurately.",
            "AI Training",
            &["Training", "NLP"],
        ),
        Article::new(
            "Measuring Chatbot ROI: Key Metrics",
            "The right metrics to track and how to calculate true ROI.",
            "Analytics",
            &["ROI", "Metrics"],
        ),
        Article::new(
            "How to Choose the Right Chatbot Platform",
            "A comparison of the top platforms for your business needs.",
            "Technology",
            &["Platforms"],
        ),
        Article::new(
            "Integrating Your Chatbot with CRM Systems",
            "Connect your assistant with popular CRM platforms.",
            "Integration",
            &["CRM"],
        ),
    ]
}

#[test]
fn empty_query_and_all_tag_is_identity() {
    let records = articles();
    let index = SearchIndex::build(&records);

    let out = filter_records(&index, &records, "", ALL_TAG);
    assert_eq!(out.len(), records.len());
    for (kept, original) in out.iter().zip(records.iter()) {
        assert!(std::ptr::eq(*kept, original));
    }
}

#[test]
fn filtering_is_deterministic() {
    let records = articles();
    let index = SearchIndex::build(&records);

    let titles = |q: &str, tag: &str| -> Vec<String> {
        filter_records(&index, &records, q, tag)
            .iter()
            .map(|a| a.title.clone())
            .collect()
    };

    for _ in 0..3 {
        assert_eq!(titles("chatbot", "Analytics"), titles("chatbot", "Analytics"));
        assert_eq!(titles("roi metrics", ALL_TAG), titles("roi metrics", ALL_TAG));
    }
}

#[test]
fn tag_filter_yields_a_subset_of_the_unfiltered_search() {
    let records = articles();
    let index = SearchIndex::build(&records);

    let unfiltered = filter_records(&index, &records, "chatbot", ALL_TAG);
    let narrowed = filter_records(&index, &records, "chatbot", "Analytics");

    for record in &narrowed {
        assert!(
            record.category == "Analytics" || record.tags.iter().any(|t| t == "Analytics"),
            "{} escaped the tag filter",
            record.title
        );
        assert!(unfiltered.iter().any(|r| std::ptr::eq(*r, *record)));
    }
}

#[test]
fn concatenated_pages_reconstruct_the_filtered_sequence() {
    let records = articles();
    let index = SearchIndex::build(&records);
    let filtered = filter_records(&index, &records, "", ALL_TAG);

    for page_size in 1..=4 {
        let (_, total_pages, _) = page_bounds(filtered.len(), page_size, 1);
        let mut rebuilt: Vec<&Article> = Vec::new();
        for page in 1..=total_pages {
            let (_, _, range) = page_bounds(filtered.len(), page_size, page);
            rebuilt.extend_from_slice(&filtered[range]);
        }
        assert_eq!(rebuilt.len(), filtered.len(), "page_size={page_size}");
        for (a, b) in rebuilt.iter().zip(filtered.iter()) {
            assert!(std::ptr::eq(*a, *b));
        }
    }
}

#[test]
fn six_titled_records_paginate_and_clamp() {
    // Six records titled A..F, two per page: page 1 is [A, B], page 3 is
    // [E, F], and page 4 clamps to page 3's content.
    let titles = ["A", "B", "C", "D", "E", "F"];
    let records: Vec<Article> = titles
        .iter()
        .map(|t| Article::new(t, "", "General", &[]))
        .collect();

    let page = |n: usize| -> Vec<String> {
        Paginated::from_filtered(records.clone(), 2, n)
            .items
            .into_iter()
            .map(|a| a.title)
            .collect()
    };

    assert_eq!(page(1), vec!["A", "B"]);
    assert_eq!(page(3), vec!["E", "F"]);
    assert_eq!(page(4), page(3));
}

#[test]
fn chatbot_roi_query_ranks_the_roi_post_first() {
    let records = articles();
    let index = SearchIndex::build(&records);

    let hits = filter_records(&index, &records, "chatbot roi", ALL_TAG);
    assert_eq!(
        hits.first().map(|a| a.title.as_str()),
        Some("Measuring Chatbot ROI: Key Metrics")
    );
}

#[test]
fn changing_filters_resets_the_page() {
    let state = QueryState::default().with_page(3);
    assert_eq!(state.clone().with_query("chatbot").page, 1);
    assert_eq!(state.with_tag("Analytics").page, 1);
}

#[test]
fn equal_sort_keys_preserve_input_order() {
    struct Row {
        name: &'static str,
        date: &'static str,
    }
    let rows = [
        Row {
            name: "A",
            date: "2025-01-01",
        },
        Row {
            name: "B",
            date: "2025-01-01",
        },
    ];
    let mut refs: Vec<&Row> = rows.iter().collect();
    sort_records(&mut refs, |r| r.date, SortDirection::Asc);
    let names: Vec<&str> = refs.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn hostile_queries_never_panic() {
    let records = articles();
    let index = SearchIndex::build(&records);

    for q in ["", "   ", "!!!@@@###", "💥💥💥", &"word ".repeat(2_000)] {
        let _ = filter_records(&index, &records, q, ALL_TAG);
    }
}
