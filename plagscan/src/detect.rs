use crate::config::Settings;
use crate::error::{EmptyCorpusSnafu, InvalidWindowSnafu, IoSnafu, Result};
use crate::pairs::PairPlanner;
use crate::rank::rank;
use crate::record::PairMatch;
use crate::store::ShingleStore;
use crate::ui::Message;
use snafu::prelude::*;
use std::path::Path;

/// Outcome of a successful run: the ranked matches plus the counters the
/// summary reports. Zero matches is a valid outcome; configuration
/// problems and an empty corpus are errors instead.
#[derive(Debug)]
pub struct Detection {
    pub files: usize,
    pub compared: usize,
    pub skipped: usize,
    pub matches: Vec<PairMatch>,
}

pub async fn detect<F>(dir: &Path, settings: &Settings, on_message: F) -> Result<Detection>
where
    F: Fn(Message) -> Result<()>,
{
    ensure!(
        settings.window >= 1,
        InvalidWindowSnafu {
            window: settings.window
        }
    );

    let files = corpus::list(dir.to_path_buf())
        .await
        .context(IoSnafu { path: dir })?;
    ensure!(!files.is_empty(), EmptyCorpusSnafu { path: dir });

    log::debug!("comparing {} corpus files", files.len());

    let mut store = ShingleStore::new(settings.window);
    let mut records = Vec::new();
    let mut compared = 0;
    let mut skipped = 0;
    let mut abandoned = None;

    for pair in PairPlanner::new(&files).pairs() {
        if abandoned == Some(pair.outer_index) {
            skipped += 1;
            continue;
        }

        on_message(Message::SetStatus(pair.label()))?;

        let sets = store
            .pair(pair.outer.path.as_path(), pair.inner.path.as_path())
            .await;
        let (outer, inner) = match sets {
            (None, _) => {
                // an unreadable outer file drops the rest of its round
                abandoned = Some(pair.outer_index);
                skipped += 1;
                continue;
            }
            (_, None) => {
                skipped += 1;
                continue;
            }
            (Some(outer), Some(inner)) => (outer, inner),
        };

        compared += 1;
        let count = outer.match_count(&inner);
        if count > settings.threshold {
            let record = PairMatch::new(pair.label(), count);
            on_message(Message::Match(record.clone()))?;
            records.push(record);
        }
    }

    Ok(Detection {
        files: files.len(),
        compared,
        skipped,
        matches: rank(records),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;

    fn settings(window: usize, threshold: usize) -> Settings {
        Settings { window, threshold }
    }

    fn discard(_message: Message) -> Result<()> {
        Ok(())
    }

    fn write_corpus(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, text) in files {
            fs::write(dir.path().join(name), text).unwrap();
        }

        dir
    }

    #[tokio::test]
    async fn reports_pairs_sharing_more_phrases_than_the_threshold() {
        let dir = write_corpus(&[
            ("a.txt", "one two three four five six"),
            ("b.txt", "zero one two three four five"),
            ("c.txt", "one two three four five six seven"),
        ]);

        let detection = detect(dir.path(), &settings(4, 1), discard).await.unwrap();

        assert_eq!(detection.files, 3);
        assert_eq!(detection.compared, 3);
        assert_eq!(detection.skipped, 0);

        // a∩b = 2, a∩c = 3, b∩c = 2; ranked puts the 3 first
        assert_eq!(detection.matches.len(), 3);
        assert_eq!(detection.matches[0].pair, "a.txt-c.txt");
        assert_eq!(detection.matches[0].count, 3);

        let mut rest: Vec<_> = detection.matches[1..]
            .iter()
            .map(|r| (r.pair.as_str(), r.count))
            .collect();
        rest.sort_unstable();
        assert_eq!(rest, [("a.txt-b.txt", 2), ("b.txt-c.txt", 2)]);
    }

    #[tokio::test]
    async fn threshold_is_strictly_greater_than() {
        let dir = write_corpus(&[
            ("a.txt", "one two three four five six"),
            ("b.txt", "zero one two three four five"),
            ("c.txt", "one two three four five six seven"),
        ]);

        let detection = detect(dir.path(), &settings(4, 2), discard).await.unwrap();

        // only a∩c = 3 exceeds 2; the two pairs at exactly 2 do not
        assert_eq!(detection.matches.len(), 1);
        assert_eq!(detection.matches[0].pair, "a.txt-c.txt");
    }

    #[tokio::test]
    async fn unreachable_threshold_yields_an_empty_result_not_an_error() {
        let dir = write_corpus(&[
            ("a.txt", "one two three four five six"),
            ("b.txt", "one two three four five six"),
        ]);

        let detection = detect(dir.path(), &settings(4, 1000), discard).await.unwrap();

        assert!(detection.matches.is_empty());
        assert_eq!(detection.compared, 1);
    }

    #[tokio::test]
    async fn identical_documents_share_every_phrase() {
        let dir = write_corpus(&[
            ("a.txt", "the quick brown fox jumps over the lazy dog"),
            ("b.txt", "the quick brown fox jumps over the lazy dog"),
        ]);

        let detection = detect(dir.path(), &settings(4, 5), discard).await.unwrap();

        // 9 tokens, 6 distinct 4-token phrases
        assert_eq!(detection.matches.len(), 1);
        assert_eq!(detection.matches[0].pair, "a.txt-b.txt");
        assert_eq!(detection.matches[0].count, 6);
    }

    #[tokio::test]
    async fn empty_corpus_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = detect(dir.path(), &settings(4, 5), discard).await;

        assert!(matches!(result, Err(Error::EmptyCorpus { .. })));
    }

    #[tokio::test]
    async fn missing_corpus_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let result = detect(missing.as_path(), &settings(4, 5), discard).await;

        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[tokio::test]
    async fn zero_window_is_rejected_before_any_work() {
        let missing = PathBuf::from("does-not-matter");

        let result = detect(missing.as_path(), &settings(0, 5), discard).await;

        assert!(matches!(result, Err(Error::InvalidWindow { window: 0 })));
    }

    #[tokio::test]
    async fn unreadable_outer_file_abandons_only_its_own_round() {
        let dir = write_corpus(&[
            ("a.txt", "one two three four five six"),
            ("b.txt", "one two three four five six seven"),
            ("d.txt", "one two three four five six eight"),
        ]);
        fs::write(dir.path().join("c.txt"), [0xff, 0xfe, 0xfd]).unwrap();

        let detection = detect(dir.path(), &settings(4, 0), discard).await.unwrap();

        // c.txt is outer for (c,a) and (c,b): the first fails the read and
        // the second is abandoned; (d,c) later skips on the cached failure.
        // a, b, and d still compare among themselves.
        assert_eq!(detection.compared, 3);
        assert_eq!(detection.skipped, 3);
        assert!(detection
            .matches
            .iter()
            .all(|record| !record.pair.contains("c.txt")));

        let mut pairs: Vec<_> = detection
            .matches
            .iter()
            .map(|record| record.pair.as_str())
            .collect();
        pairs.sort_unstable();
        assert_eq!(pairs, ["a.txt-b.txt", "a.txt-d.txt", "b.txt-d.txt"]);
    }

    #[tokio::test]
    async fn qualifying_matches_are_streamed_as_found() {
        let dir = write_corpus(&[
            ("a.txt", "one two three four five six"),
            ("b.txt", "one two three four five six"),
        ]);

        let seen = RefCell::new(Vec::new());
        let detection = detect(dir.path(), &settings(4, 0), |message| {
            if let Message::Match(record) = message {
                seen.borrow_mut().push(record.pair);
            }
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(seen.into_inner(), ["a.txt-b.txt"]);
        assert_eq!(detection.matches.len(), 1);
    }
}
