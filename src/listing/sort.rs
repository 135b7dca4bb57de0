//! Stable single-field sorting for the admin tables.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for SortDirection {
    fn from(s: &str) -> Self {
        match s {
            "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Orders the slice by the extracted key. `sort_by` is stable, and the
/// descending case only reverses the key comparison, so records with equal
/// keys keep their relative input order in both directions.
pub fn sort_records<T: ?Sized, K: Ord>(
    records: &mut [&T],
    key: impl Fn(&T) -> K,
    direction: SortDirection,
) {
    match direction {
        SortDirection::Asc => records.sort_by(|a, b| key(a).cmp(&key(b))),
        SortDirection::Desc => records.sort_by(|a, b| key(b).cmp(&key(a))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        date: &'static str,
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let rows = [
            Row {
                name: "B",
                date: "2025-02-01",
            },
            Row {
                name: "A",
                date: "2025-01-01",
            },
        ];
        let mut refs: Vec<&Row> = rows.iter().collect();
        sort_records(&mut refs, |r| r.name, SortDirection::Asc);
        assert_eq!(refs[0].name, "A");
        sort_records(&mut refs, |r| r.name, SortDirection::Desc);
        assert_eq!(refs[0].name, "B");
    }

    #[test]
    fn equal_keys_keep_input_order() {
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
        assert_eq!(refs[0].name, "A");
        assert_eq!(refs[1].name, "B");

        sort_records(&mut refs, |r| r.date, SortDirection::Desc);
        assert_eq!(refs[0].name, "A");
        assert_eq!(refs[1].name, "B");
    }

    #[test]
    fn direction_round_trips_through_strings() {
        assert_eq!(SortDirection::from("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from("asc"), SortDirection::Asc);
        assert_eq!(SortDirection::from("anything"), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }
}
