use futures::{Stream, TryStreamExt};
use std::io::Result;
use std::path::PathBuf;
use tokio::fs::read_dir;
use tokio_stream::wrappers::ReadDirStream;

/// One document of the corpus. `name` is the bare file name used to label
/// result pairs; `path` locates the document on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusFile {
    pub name: String,
    pub path: PathBuf,
}

/// Stream the regular files of `dir` in whatever order the filesystem
/// yields them. Subdirectories and other non-file entries are dropped.
pub async fn walk(dir: PathBuf) -> Result<impl Stream<Item = Result<CorpusFile>>> {
    let entries = read_dir(dir).await?;

    Ok(ReadDirStream::new(entries).try_filter_map(|entry| async move {
        let meta = entry.metadata().await?;
        if !meta.is_file() {
            return Ok(None);
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        Ok(Some(CorpusFile {
            name,
            path: entry.path(),
        }))
    }))
}

/// The corpus as an ordered list: every regular file of `dir`, sorted by
/// file name so that pair labels do not depend on filesystem order.
pub async fn list(dir: PathBuf) -> Result<Vec<CorpusFile>> {
    let mut files: Vec<_> = walk(dir).await?.try_collect().await?;
    files.sort_unstable_by(|a, b| a.name.cmp(&b.name));

    Ok(files)
}
