use corpus::CorpusFile;

/// One planned comparison. `outer` is the later file in corpus order,
/// `inner` the earlier; the distinction matters because an unreadable
/// outer file cancels the rest of its round.
pub struct Pair<'a> {
    pub outer: &'a CorpusFile,
    pub inner: &'a CorpusFile,
    pub outer_index: usize,
}

impl Pair<'_> {
    /// The result key for this pair, inner file first.
    pub fn label(&self) -> String {
        format!("{}-{}", self.inner.name, self.outer.name)
    }
}

pub struct PairPlanner<'a> {
    files: &'a [CorpusFile],
}

impl<'a> PairPlanner<'a> {
    pub fn new(files: &'a [CorpusFile]) -> Self {
        Self { files }
    }

    /// Every unordered pair of distinct files, each emitted exactly once.
    /// Pairs sharing an outer file are contiguous, so a failed outer read
    /// can drop the rest of its round without lookahead.
    pub fn pairs(&self) -> impl Iterator<Item = Pair<'a>> + 'a {
        let files = self.files;
        (0..files.len()).flat_map(move |i| {
            (0..i).map(move |j| Pair {
                outer: &files[i],
                inner: &files[j],
                outer_index: i,
            })
        })
    }
}
