#[cfg(test)]
mod tests;

use std::{
    future::Future,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context as _, Result};
use bytes::Bytes;
use reqwest::Client;
use tokio::fs;
use url::Url;

use crate::batch::ItemReport;

/// Every clip the flash-card set expects, keyed by its romanized label.
#[rustfmt::skip]
pub(crate) const ROMAJI: [&str; 102] = [
    // 46 basic
    "a", "i", "u", "e", "o",
    "ka", "ki", "ku", "ke", "ko",
    "sa", "shi", "su", "se", "so",
    "ta", "chi", "tsu", "te", "to",
    "na", "ni", "nu", "ne", "no",
    "ha", "hi", "fu", "he", "ho",
    "ma", "mi", "mu", "me", "mo",
    "ya", "yu", "yo",
    "ra", "ri", "ru", "re", "ro",
    "wa", "wo", "n",
    // 濁音/半濁音
    "ga", "gi", "gu", "ge", "go",
    "za", "ji", "zu", "ze", "zo",
    "da", "de", "do", // ぢ/じ and づ/ず share the same recording
    "ba", "bi", "bu", "be", "bo",
    "pa", "pi", "pu", "pe", "po",
    // 拗音
    "kya", "kyu", "kyo", "sha", "shu", "sho", "cha", "chu", "cho",
    "nya", "nyu", "nyo", "hya", "hyu", "hyo", "mya", "myu", "myo",
    "rya", "ryu", "ryo",
    // 拗音＋濁点/半濁点
    "gya", "gyu", "gyo", "ja", "ju", "jo",
    "bya", "byu", "byo", "pya", "pyu", "pyo",
];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub(crate) struct FetchConfig {
    pub(crate) base_url: Url,
    pub(crate) output_dir: PathBuf,
}

pub(crate) trait FetchAudio: Send + Sync {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<Bytes>> + Send;
}

pub(crate) struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub(crate) fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build http client")?;

        Ok(Self { client })
    }
}

impl FetchAudio for HttpFetcher {
    fn fetch(&self, url: Url) -> impl Future<Output = Result<Bytes>> + Send {
        async move {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .with_context(|| format!("failed to request with GET {url}"))?
                .error_for_status()
                .with_context(|| format!("received error status from GET {url}"))?;
            let bytes = response
                .bytes()
                .await
                .with_context(|| format!("failed to read response body of GET {url}"))?;

            Ok(bytes)
        }
    }
}

/// Downloads every missing clip into `config.output_dir`, one GET per label.
pub(crate) async fn run(config: &FetchConfig, fetcher: &impl FetchAudio) -> Result<Vec<ItemReport>> {
    fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let mut reports = Vec::with_capacity(ROMAJI.len());
    for label in ROMAJI {
        let destination = config.output_dir.join(format!("{label}.mp3"));
        if fs::try_exists(&destination)
            .await
            .with_context(|| format!("failed to stat {}", destination.display()))?
        {
            tracing::info!("{label}.mp3 is already present");
            reports.push(ItemReport::skipped(label));
            continue;
        }
        match fetch_one(config, fetcher, label, &destination).await {
            Ok(()) => {
                tracing::info!("downloaded {label}.mp3");
                reports.push(ItemReport::done(label));
            },
            Err(err) => {
                tracing::error!("failed to fetch {label}.mp3\nError: {err:?}");
                reports.push(ItemReport::failed(label, &err));
            },
        }
    }

    Ok(reports)
}

async fn fetch_one(
    config: &FetchConfig,
    fetcher: &impl FetchAudio,
    label: &str,
    destination: &Path,
) -> Result<()> {
    let source = config
        .base_url
        .join(&format!("kanasound-{label}.mp3"))
        .with_context(|| format!("failed to build source url for {label}"))?;
    let bytes = fetcher.fetch(source).await?;
    fs::write(destination, &bytes)
        .await
        .with_context(|| format!("failed to write {}", destination.display()))?;

    Ok(())
}
