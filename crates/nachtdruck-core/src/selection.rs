// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page selection expressions — comma-separated 1-based page numbers and
// inclusive ranges ("1-3,5,7-9"), parsed into a validated set of zero-based
// page indices.

use std::collections::BTreeSet;

use crate::error::{NachtdruckError, Result};

/// A validated set of zero-based page indices within one document.
///
/// Built from a user-facing 1-based expression via [`PageSelection::parse`].
/// Membership is set-like (duplicates and overlapping ranges collapse) and
/// iteration always yields ascending document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    indices: BTreeSet<usize>,
    total_pages: usize,
}

impl PageSelection {
    /// Parse a selection expression against a document of `total_pages` pages.
    ///
    /// The expression lists 1-based page numbers and inclusive ranges,
    /// separated by commas; whitespace around numbers is tolerated. `None`
    /// or a blank expression selects every page. A reversed range such as
    /// `"5-3"` is treated as `"3-5"`.
    pub fn parse(expression: Option<&str>, total_pages: usize) -> Result<Self> {
        let expression = match expression {
            Some(expr) if !expr.trim().is_empty() => expr,
            _ => {
                return Ok(Self {
                    indices: (0..total_pages).collect(),
                    total_pages,
                });
            }
        };

        // Each token becomes an inclusive 1-based span; singles are
        // one-page spans.
        let mut spans: Vec<(usize, usize)> = Vec::new();
        for token in expression.split(',') {
            let token = token.trim();
            let span = match token.split_once('-') {
                Some((start_text, end_text)) => {
                    let start = parse_page_number(start_text, token)?;
                    let end = parse_page_number(end_text, token)?;
                    if start <= end { (start, end) } else { (end, start) }
                }
                None => {
                    let page = parse_page_number(token, token)?;
                    (page, page)
                }
            };
            spans.push(span);
        }

        // Bounds are checked across the whole expression so the error can
        // name every offending page number, not just the first.
        let mut offending: BTreeSet<usize> = BTreeSet::new();
        for &(start, end) in &spans {
            for bound in [start, end] {
                if bound == 0 || bound > total_pages {
                    offending.insert(bound);
                }
            }
        }
        if !offending.is_empty() {
            let listed = offending
                .iter()
                .map(|page| page.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(NachtdruckError::PageOutOfBounds(format!(
                "page(s) {listed} outside the valid range 1-{total_pages}"
            )));
        }

        let mut indices: BTreeSet<usize> = BTreeSet::new();
        for (start, end) in spans {
            indices.extend(start - 1..=end - 1);
        }

        Ok(Self {
            indices,
            total_pages,
        })
    }

    /// True when the zero-based `index` is part of the selection.
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Zero-based indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Number of selected pages.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Page count of the document this selection was validated against.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// True when every page of the document is selected.
    pub fn is_all(&self) -> bool {
        self.indices.len() == self.total_pages
    }
}

/// Parse one 1-based page number; `token` is the full token for the error
/// message.
fn parse_page_number(text: &str, token: &str) -> Result<usize> {
    text.trim().parse::<usize>().map_err(|_| {
        NachtdruckError::InvalidRangeFormat(format!("'{token}' is not a page number or range"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(expression: &str, total_pages: usize) -> Vec<usize> {
        PageSelection::parse(Some(expression), total_pages)
            .unwrap()
            .iter()
            .collect()
    }

    #[test]
    fn absent_expression_selects_all_pages() {
        let selection = PageSelection::parse(None, 3).unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(selection.is_all());
    }

    #[test]
    fn blank_expression_selects_all_pages() {
        let selection = PageSelection::parse(Some("   "), 4).unwrap();
        assert_eq!(selection.len(), 4);
        assert!(selection.is_all());
    }

    #[test]
    fn single_page() {
        assert_eq!(indices("1", 5), vec![0]);
        assert_eq!(indices("3", 5), vec![2]);
    }

    #[test]
    fn page_range() {
        assert_eq!(indices("2-4", 5), vec![1, 2, 3]);
    }

    #[test]
    fn comma_separated() {
        assert_eq!(indices("1,3,5", 5), vec![0, 2, 4]);
    }

    #[test]
    fn mixed_singles_and_ranges() {
        assert_eq!(indices("1-3,7,10-12", 12), vec![0, 1, 2, 6, 9, 10, 11]);
    }

    #[test]
    fn whitespace_around_tokens_is_tolerated() {
        assert_eq!(indices(" 1 , 3 - 5 ", 5), vec![0, 2, 3, 4]);
    }

    #[test]
    fn duplicates_and_overlaps_collapse() {
        assert_eq!(indices("1,1,2-2", 3), vec![0, 1]);
        assert_eq!(indices("1-3,2-4", 5), vec![0, 1, 2, 3]);
    }

    #[test]
    fn reversed_range_is_swapped() {
        assert_eq!(indices("5-3", 5), vec![2, 3, 4]);
    }

    #[test]
    fn single_page_document_boundary() {
        assert_eq!(indices("1-1", 1), vec![0]);
        assert_eq!(indices("1", 1), vec![0]);
    }

    #[test]
    fn page_zero_is_out_of_bounds() {
        let err = PageSelection::parse(Some("0"), 5).unwrap_err();
        assert!(matches!(err, NachtdruckError::PageOutOfBounds(_)));
        assert!(err.to_string().contains('0'));
        assert!(err.to_string().contains("1-5"));
    }

    #[test]
    fn page_beyond_total_is_out_of_bounds() {
        let err = PageSelection::parse(Some("6"), 5).unwrap_err();
        assert!(matches!(err, NachtdruckError::PageOutOfBounds(_)));
        assert!(err.to_string().contains('6'));
    }

    #[test]
    fn every_offending_page_is_named() {
        let err = PageSelection::parse(Some("0,9,2,12-14"), 5).unwrap_err();
        let message = err.to_string();
        for offender in ["0", "9", "12", "14"] {
            assert!(message.contains(offender), "missing {offender}: {message}");
        }
    }

    #[test]
    fn garbage_token_is_a_format_error() {
        let err = PageSelection::parse(Some("abc"), 5).unwrap_err();
        assert!(matches!(err, NachtdruckError::InvalidRangeFormat(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn double_dash_range_is_a_format_error() {
        let err = PageSelection::parse(Some("1-2-3"), 5).unwrap_err();
        assert!(matches!(err, NachtdruckError::InvalidRangeFormat(_)));
    }

    #[test]
    fn empty_token_is_a_format_error() {
        let err = PageSelection::parse(Some("1,,2"), 5).unwrap_err();
        assert!(matches!(err, NachtdruckError::InvalidRangeFormat(_)));
    }

    #[test]
    fn leading_dash_is_a_format_error() {
        let err = PageSelection::parse(Some("-3"), 5).unwrap_err();
        assert!(matches!(err, NachtdruckError::InvalidRangeFormat(_)));
    }

    #[test]
    fn contains_matches_parsed_indices() {
        let selection = PageSelection::parse(Some("2,4-5"), 5).unwrap();
        assert!(!selection.contains(0));
        assert!(selection.contains(1));
        assert!(!selection.contains(2));
        assert!(selection.contains(3));
        assert!(selection.contains(4));
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.total_pages(), 5);
    }
}
