use serde::Serialize;

/// One suspicious pair: the `inner-outer` label naming the two documents
/// and the number of phrases they share.
#[derive(Clone, Debug, Serialize)]
pub struct PairMatch {
    pub pair: String,
    pub count: usize,
}

impl PairMatch {
    pub fn new<P: Into<String>>(pair: P, count: usize) -> Self {
        Self {
            pair: pair.into(),
            count,
        }
    }
}
