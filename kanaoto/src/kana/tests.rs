use std::{future::Future, path::PathBuf};

use anyhow::Result;
use bytes::Bytes;
use futures::FutureExt;
use tempfile::tempdir;
use url::Url;

use crate::{
    batch::Outcome,
    kana::{self, FetchAudio, FetchConfig, ROMAJI},
};

mockall::mock! {
    Fetcher {}
    impl FetchAudio for Fetcher {
        fn fetch(&self, url: Url) -> impl Future<Output = Result<Bytes>> + Send;
    }
}

fn config(output_dir: PathBuf) -> FetchConfig {
    FetchConfig {
        base_url: Url::parse("http://localhost/media-files/").unwrap(),
        output_dir,
    }
}

#[tokio::test]
async fn writes_fetched_bytes_verbatim() {
    let directory = tempdir().unwrap();
    let config = config(directory.path().join("audio"));
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_fetch()
        .withf(|url| {
            url.as_str().starts_with("http://localhost/media-files/kanasound-")
                && url.as_str().ends_with(".mp3")
        })
        .times(ROMAJI.len())
        .returning(|_| async { Ok(Bytes::from_static(b"ID3...")) }.boxed());

    let reports = kana::run(&config, &fetcher).await.unwrap();

    assert_eq!(reports.len(), ROMAJI.len());
    assert!(reports.iter().all(|report| report.outcome == Outcome::Done));
    let chi = std::fs::read(config.output_dir.join("chi.mp3")).unwrap();
    assert_eq!(chi, b"ID3...");
}

#[tokio::test]
async fn present_files_are_skipped() {
    let directory = tempdir().unwrap();
    let config = config(directory.path().to_path_buf());
    std::fs::write(config.output_dir.join("a.mp3"), b"cached").unwrap();
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_fetch()
        .times(ROMAJI.len() - 1)
        .returning(|_| async { Ok(Bytes::from_static(b"ID3...")) }.boxed());

    let reports = kana::run(&config, &fetcher).await.unwrap();

    let skipped = reports
        .iter()
        .filter(|report| report.outcome == Outcome::Skipped)
        .collect::<Vec<_>>();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].id, "a");
    // The cached file is left untouched.
    assert_eq!(std::fs::read(config.output_dir.join("a.mp3")).unwrap(), b"cached");
}

#[tokio::test]
async fn second_pass_makes_no_requests() {
    let directory = tempdir().unwrap();
    let config = config(directory.path().to_path_buf());
    let mut fetcher = MockFetcher::new();
    fetcher
        .expect_fetch()
        .times(ROMAJI.len())
        .returning(|_| async { Ok(Bytes::from_static(b"ID3...")) }.boxed());
    kana::run(&config, &fetcher).await.unwrap();

    let mut idle_fetcher = MockFetcher::new();
    idle_fetcher.expect_fetch().never();

    let reports = kana::run(&config, &idle_fetcher).await.unwrap();

    assert!(reports.iter().all(|report| report.outcome == Outcome::Skipped));
}

#[tokio::test]
async fn one_failure_does_not_stop_the_pass() {
    let directory = tempdir().unwrap();
    let config = config(directory.path().to_path_buf());
    let mut fetcher = MockFetcher::new();
    fetcher.expect_fetch().times(ROMAJI.len()).returning(|url| {
        async move {
            if url.as_str().ends_with("kanasound-chi.mp3") {
                anyhow::bail!("404 Not Found");
            }
            Ok(Bytes::from_static(b"ID3..."))
        }
        .boxed()
    });

    let reports = kana::run(&config, &fetcher).await.unwrap();

    let failed = reports
        .iter()
        .filter(|report| matches!(report.outcome, Outcome::Failed(_)))
        .collect::<Vec<_>>();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].id, "chi");
    assert!(!config.output_dir.join("chi.mp3").exists());
    // Labels after the failing one were still fetched.
    assert!(config.output_dir.join("pyo.mp3").exists());
}
