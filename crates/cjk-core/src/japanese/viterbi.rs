use tracing::{debug, debug_span};

use super::lattice::Lattice;

/// One word of the best segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub surface: String,
    pub reading: String,
}

#[derive(Clone, Copy)]
struct Best {
    cost: i64,
    prev_idx: Option<usize>,
}

/// 1-best Viterbi over the lattice. Each node costs its word cost plus
/// `segment_penalty`, so fewer, longer words win on ties.
pub fn viterbi(lattice: &Lattice, segment_penalty: i64) -> Vec<Segment> {
    let char_count = lattice.char_count;
    let _span = debug_span!("viterbi", char_count).entered();
    if char_count == 0 {
        return Vec::new();
    }

    let mut best: Vec<Option<Best>> = vec![None; lattice.nodes.len()];

    for &idx in &lattice.nodes_by_start[0] {
        best[idx] = Some(Best {
            cost: lattice.nodes[idx].cost + segment_penalty,
            prev_idx: None,
        });
    }

    for pos in 1..char_count {
        for &next_idx in &lattice.nodes_by_start[pos] {
            let word = lattice.nodes[next_idx].cost + segment_penalty;
            for &prev_idx in &lattice.nodes_by_end[pos] {
                let Some(prev) = best[prev_idx] else {
                    continue;
                };
                let total = prev.cost + word;
                if best[next_idx].map_or(true, |b| total < b.cost) {
                    best[next_idx] = Some(Best {
                        cost: total,
                        prev_idx: Some(prev_idx),
                    });
                }
            }
        }
    }

    let Some((end_idx, end)) = lattice.nodes_by_end[char_count]
        .iter()
        .filter_map(|&idx| best[idx].map(|b| (idx, b)))
        .min_by_key(|(_, b)| b.cost)
    else {
        return Vec::new();
    };

    let mut path = vec![end_idx];
    let mut cursor = end.prev_idx;
    while let Some(idx) = cursor {
        path.push(idx);
        cursor = best[idx].and_then(|b| b.prev_idx);
    }
    path.reverse();

    debug!(best_cost = end.cost, segment_count = path.len());
    path.into_iter()
        .map(|idx| {
            let node = &lattice.nodes[idx];
            Segment {
                surface: node.surface.clone(),
                reading: node.reading.clone(),
            }
        })
        .collect()
}
