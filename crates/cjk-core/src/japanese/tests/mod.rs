mod segmenter;

use std::sync::Arc;

use super::*;

pub(super) fn embedded_segmenter() -> Arc<SharedResource<Segmenter>> {
    Arc::new(SharedResource::new("test segmenter", || {
        Lexicon::embedded().map(|lexicon| Segmenter::new(lexicon, 3000, 10000))
    }))
}
