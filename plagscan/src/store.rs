use shingles::ShingleSet;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::spawn_blocking;

/// Per-run cache of extracted shingle sets. Each corpus file is read and
/// shingled at most once; an unreadable file is remembered as `None` and
/// never retried.
pub struct ShingleStore {
    window: usize,
    cache: HashMap<PathBuf, Option<Arc<ShingleSet>>>,
}

impl ShingleStore {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            cache: HashMap::new(),
        }
    }

    /// Produce the shingle sets for both sides of a pair. Uncached sides
    /// are extracted as two independent blocking tasks joined before
    /// returning; a failed side does not cancel its sibling.
    pub async fn pair(
        &mut self,
        first: &Path,
        second: &Path,
    ) -> (Option<Arc<ShingleSet>>, Option<Arc<ShingleSet>>) {
        let hit_first = self.cache.get(first).cloned();
        let hit_second = self.cache.get(second).cloned();
        let window = self.window;

        let (first_set, second_set) = tokio::join!(
            fetch(hit_first, first.to_path_buf(), window),
            fetch(hit_second, second.to_path_buf(), window),
        );

        self.cache.insert(first.to_path_buf(), first_set.clone());
        self.cache.insert(second.to_path_buf(), second_set.clone());

        (first_set, second_set)
    }
}

async fn fetch(
    cached: Option<Option<Arc<ShingleSet>>>,
    path: PathBuf,
    window: usize,
) -> Option<Arc<ShingleSet>> {
    if let Some(hit) = cached {
        return hit;
    }

    match extract(path.clone(), window).await {
        Ok(set) => Some(Arc::new(set)),
        Err(err) => {
            log::warn!("unable to read {}: {err}", path.display());
            None
        }
    }
}

async fn extract(path: PathBuf, window: usize) -> io::Result<ShingleSet> {
    spawn_blocking(move || -> io::Result<ShingleSet> {
        let text = std::fs::read_to_string(path)?;
        Ok(ShingleSet::from_text(text.as_str(), window))
    })
    .await?
}
