use tracing::{debug, debug_span};

use super::fallback::FallbackReadings;
use super::lexicon::Lexicon;
use crate::unicode::{is_kana, katakana_to_hiragana};

/// A node in the segmentation lattice.
#[derive(Debug, Clone)]
pub struct LatticeNode {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    /// Text covered by the node
    pub surface: String,
    /// Hiragana reading, or the surface itself for text with no known reading
    pub reading: String,
    /// Word cost (lower = more preferred)
    pub cost: i64,
}

/// The lattice: all possible segmentations of the input text.
pub struct Lattice {
    pub input: String,
    pub nodes: Vec<LatticeNode>,
    /// nodes_by_end[i] = indices of nodes that end at position i
    pub nodes_by_end: Vec<Vec<usize>>,
    /// nodes_by_start[i] = indices of nodes that start at position i
    pub nodes_by_start: Vec<Vec<usize>>,
    pub char_count: usize,
}

/// Build a lattice from `text` using lexicon prefix searches.
///
/// Adds an unknown-word fallback node (1-char, `unknown_word_cost`) wherever
/// no lexicon entry covers exactly one character, so every position stays
/// reachable. An unknown kanji takes its reading from `fallback` when the
/// table has one.
pub fn build_lattice(
    lexicon: &Lexicon,
    text: &str,
    unknown_word_cost: i64,
    fallback: Option<&FallbackReadings>,
) -> Lattice {
    let char_count = text.chars().count();
    let _span = debug_span!("build_lattice", char_count).entered();
    let byte_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    let mut nodes = Vec::new();
    let mut nodes_by_end: Vec<Vec<usize>> = vec![Vec::new(); char_count + 1];
    let mut nodes_by_start: Vec<Vec<usize>> = vec![Vec::new(); char_count];

    for start in 0..char_count {
        let mut has_single_char_match = false;

        let suffix = &text[byte_offsets[start]..];
        for m in lexicon.common_prefix_search(suffix) {
            let end = start + m.char_len;
            for entry in m.entries {
                let idx = nodes.len();
                nodes.push(LatticeNode {
                    start,
                    end,
                    surface: m.surface.to_string(),
                    reading: entry.reading.clone(),
                    cost: entry.cost,
                });
                nodes_by_end[end].push(idx);
                nodes_by_start[start].push(idx);
            }
            if m.char_len == 1 {
                has_single_char_match = true;
            }
        }

        if !has_single_char_match {
            let next_offset = byte_offsets.get(start + 1).copied().unwrap_or(text.len());
            let surface = &text[byte_offsets[start]..next_offset];
            let reading = unknown_reading(surface, fallback);
            let idx = nodes.len();
            nodes.push(LatticeNode {
                start,
                end: start + 1,
                surface: surface.to_string(),
                reading,
                cost: unknown_word_cost,
            });
            nodes_by_end[start + 1].push(idx);
            nodes_by_start[start].push(idx);
        }
    }

    debug!(node_count = nodes.len());
    Lattice {
        input: text.to_string(),
        nodes,
        nodes_by_end,
        nodes_by_start,
        char_count,
    }
}

fn unknown_reading(surface: &str, fallback: Option<&FallbackReadings>) -> String {
    if surface.chars().all(is_kana) {
        return katakana_to_hiragana(surface);
    }
    surface
        .chars()
        .next()
        .and_then(|c| fallback?.get(c))
        .map_or_else(|| surface.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::parse("電脳\tでんのう\t3000\n電子\tでんし\t3200\n木\tき\t4500\n").unwrap()
    }

    #[test]
    fn test_build_lattice_basic() {
        let lattice = build_lattice(&lexicon(), "電脳", 10000, None);
        assert_eq!(lattice.char_count, 2);
        let word: Vec<_> = lattice
            .nodes
            .iter()
            .filter(|n| n.surface == "電脳")
            .collect();
        assert_eq!(word.len(), 1);
        assert_eq!(word[0].reading, "でんのう");
        assert_eq!((word[0].start, word[0].end), (0, 2));
    }

    #[test]
    fn test_unknown_word_fallback() {
        let lattice = build_lattice(&lexicon(), "カ", 10000, None);
        let unknown = &lattice.nodes[0];
        assert_eq!(unknown.surface, "カ");
        assert_eq!(unknown.reading, "か");
        assert_eq!(unknown.cost, 10000);

        let lattice = build_lattice(&lexicon(), "脳", 10000, None);
        assert_eq!(lattice.nodes[0].reading, "脳");
    }

    #[test]
    fn test_unknown_kanji_uses_fallback_reading() {
        let fallback = FallbackReadings::parse("[readings]\n\"脳\" = \"のう\"\n").unwrap();
        let lattice = build_lattice(&lexicon(), "脳火", 10000, Some(&fallback));
        assert_eq!(lattice.nodes[0].surface, "脳");
        assert_eq!(lattice.nodes[0].reading, "のう");
        assert_eq!(lattice.nodes[0].cost, 10000);
        // No entry in the table: the surface stands in.
        assert_eq!(lattice.nodes[1].reading, "火");
    }

    #[test]
    fn test_single_char_entry_suppresses_fallback() {
        let lattice = build_lattice(&lexicon(), "木", 10000, None);
        assert_eq!(lattice.nodes.len(), 1);
        assert_eq!(lattice.nodes[0].reading, "き");
    }

    #[test]
    fn test_lattice_connectivity() {
        let lattice = build_lattice(&lexicon(), "電子電脳の木", 10000, None);
        for pos in 1..=lattice.char_count {
            assert!(
                !lattice.nodes_by_end[pos].is_empty(),
                "no nodes end at position {pos}"
            );
        }
    }

    #[test]
    fn test_nodes_by_start_end_consistency() {
        let lattice = build_lattice(&lexicon(), "電子電脳の木", 10000, None);
        for (idx, node) in lattice.nodes.iter().enumerate() {
            assert!(lattice.nodes_by_start[node.start].contains(&idx));
            assert!(lattice.nodes_by_end[node.end].contains(&idx));
        }
    }
}
