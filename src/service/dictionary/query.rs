//! Generic filter, sort, and pagination applied uniformly to every alias.

use std::cmp::Ordering;

use crate::model::{
    api::{BrowseDto, CollectionDto},
    dictionary::{value_string, AliasRow},
};

/// One page of a filtered and ordered row set, carrying both count forms so
/// endpoints can answer with either response shape.
pub struct Page {
    pub items: Vec<AliasRow>,
    pub total: u64,
    pub remaining_records: u64,
    pub has_next: bool,
}

impl Page {
    /// The `{hasNext, remainingRecords, items}` response shape.
    pub fn into_browse(self) -> BrowseDto {
        BrowseDto {
            has_next: self.has_next,
            remaining_records: self.remaining_records,
            items: self.items,
        }
    }

    /// The `{hasNext, total, items}` response shape.
    pub fn into_collection(self) -> CollectionDto {
        CollectionDto {
            has_next: self.has_next,
            total: self.total,
            items: self.items,
        }
    }
}

/// Case-insensitive substring match against the string form of every column
/// value. An empty or whitespace-only filter keeps all rows.
pub fn apply_filter(rows: Vec<AliasRow>, filter: &str) -> Vec<AliasRow> {
    let needle = filter.trim().to_lowercase();

    if needle.is_empty() {
        return rows;
    }

    rows.into_iter()
        .filter(|row| {
            row.values()
                .any(|value| value_string(Some(value)).to_lowercase().contains(&needle))
        })
        .collect()
}

struct OrderKey {
    field: String,
    descending: bool,
}

/// Parses a whitespace-or-comma-delimited order spec. A bare name sorts
/// ascending; a leading `-` or a trailing `DESC` token flips the preceding
/// field to descending (both conventions are in use across endpoints).
fn parse_order_spec(spec: &str) -> Vec<OrderKey> {
    let mut keys: Vec<OrderKey> = Vec::new();

    for token in spec
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
    {
        if token.eq_ignore_ascii_case("DESC") {
            if let Some(last) = keys.last_mut() {
                last.descending = true;
            }
            continue;
        }

        let (field, descending) = match token.strip_prefix('-') {
            Some(stripped) => (stripped, true),
            None => (token, false),
        };

        if field.is_empty() {
            continue;
        }

        keys.push(OrderKey {
            field: field.to_string(),
            descending,
        });
    }

    keys
}

/// Stable multi-key sort comparing the string form of each value; missing
/// values sort as the empty string.
pub fn apply_order(mut rows: Vec<AliasRow>, spec: &str) -> Vec<AliasRow> {
    let keys = parse_order_spec(spec);

    if keys.is_empty() {
        return rows;
    }

    rows.sort_by(|a, b| {
        for key in &keys {
            let left = value_string(a.get(&key.field));
            let right = value_string(b.get(&key.field));

            let ordering = left.cmp(&right);
            if ordering != Ordering::Equal {
                return if key.descending {
                    ordering.reverse()
                } else {
                    ordering
                };
            }
        }

        Ordering::Equal
    });

    rows
}

/// Parses a 1-indexed page number; zero or unparsable input defaults to 1,
/// negative input clamps to 1.
pub fn parse_page(value: Option<&str>) -> u64 {
    parse_positive(value, 1)
}

/// Parses a page size; zero or unparsable input defaults to 10, negative
/// input clamps to 1.
pub fn parse_page_size(value: Option<&str>) -> u64 {
    parse_positive(value, 10)
}

fn parse_positive(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|text| text.trim().parse::<i64>().ok())
        .filter(|n| *n != 0)
        .map(|n| n.max(1) as u64)
        .unwrap_or(default)
}

/// Slices one 1-indexed page out of the row set.
pub fn paginate(rows: Vec<AliasRow>, page: u64, page_size: u64) -> Page {
    let total = rows.len() as u64;
    let start = (page - 1) * page_size;
    let end = start + page_size;

    let items: Vec<AliasRow> = rows
        .into_iter()
        .skip(start as usize)
        .take(page_size as usize)
        .collect();

    Page {
        items,
        total,
        remaining_records: total.saturating_sub(end),
        has_next: end < total,
    }
}
