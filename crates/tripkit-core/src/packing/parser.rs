//! Best-effort extraction of structured lists from generator output
//!
//! The generation backend returns free text that loosely follows a
//! numbered-list convention. This module never fails: malformed input
//! degrades to empty lists, and the caller decides what to do with an
//! all-empty result. Generator output is only ever pattern-matched here,
//! never evaluated.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "<integer>. " item marker; an item's text runs to the next marker.
    static ref ITEM_MARKER: Regex = Regex::new(r"\d+\.\s+").expect("valid regex");
    /// Heading separating the packing list from the tips block.
    /// Case-insensitive: models are inconsistent about capitalization.
    static ref TIPS_HEADING: Regex = Regex::new(r"(?i)travel\s+tips:").expect("valid regex");
}

/// Structured lists extracted from raw generator output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    pub packing_list: Vec<String>,
    pub travel_tips: Vec<String>,
}

/// Split raw generator output into packing items and travel tips.
///
/// Packing items are the numbered entries before the "Travel Tips:" heading;
/// tips are the numbered entries after it. A missing heading means no tips,
/// and text without any numbered entries yields empty lists. Neither case is
/// an error.
pub fn parse(raw: &str) -> ParsedResponse {
    match TIPS_HEADING.find(raw) {
        Some(heading) => ParsedResponse {
            packing_list: numbered_items(&raw[..heading.start()]),
            travel_tips: numbered_items(&raw[heading.end()..]),
        },
        None => ParsedResponse {
            packing_list: numbered_items(raw),
            travel_tips: Vec::new(),
        },
    }
}

/// Extract "<integer>. <text>" entries from one block of text.
///
/// Each entry runs from the end of its marker to the start of the next
/// marker (or end of block), trimmed, with internal newlines collapsed to
/// spaces.
fn numbered_items(block: &str) -> Vec<String> {
    let markers: Vec<_> = ITEM_MARKER.find_iter(block).collect();

    let mut items = Vec::with_capacity(markers.len());
    for (i, marker) in markers.iter().enumerate() {
        let end = markers
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(block.len());
        let text = block[marker.end()..end].trim().replace('\n', " ");
        if !text.is_empty() {
            items.push(text);
        }
    }
    items
}
