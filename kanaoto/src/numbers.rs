pub(crate) mod reading;


use std::{
    future::Future,
    ops::RangeInclusive,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context as _, Result};
use bytes::Bytes;
use tokio::{fs, time};
use tts::synthesis::{Synthesizer, Voice};

use crate::batch::ItemReport;

/// The audio set covers ぜろ through いちまん.
pub(crate) const RANGE: RangeInclusive<u32> = 0..=10_000;

#[derive(Debug, Clone)]
pub(crate) struct GenerateConfig {
    pub(crate) output_dir: PathBuf,
    pub(crate) voice_name: String,
    pub(crate) language_code: String,
    pub(crate) delay: Duration,
    pub(crate) range: RangeInclusive<u32>,
}

pub(crate) trait SynthesizeAudio: Send + Sync {
    fn synthesize(&self, text: String) -> impl Future<Output = Result<Bytes>> + Send;
}

pub(crate) struct TtsSynthesizer {
    synthesizer: Synthesizer,
    voice: Voice,
}

impl TtsSynthesizer {
    pub(crate) fn new(synthesizer: Synthesizer, config: &GenerateConfig) -> Self {
        Self {
            synthesizer,
            voice: Voice {
                language_code: config.language_code.clone(),
                name: config.voice_name.clone(),
            },
        }
    }
}

impl SynthesizeAudio for TtsSynthesizer {
    fn synthesize(&self, text: String) -> impl Future<Output = Result<Bytes>> + Send {
        async move { Ok(self.synthesizer.synthesize(&text, &self.voice).await?) }
    }
}

/// Synthesizes every missing number clip into `config.output_dir`, pausing
/// `config.delay` after each successful call to stay under the API rate limit.
pub(crate) async fn run(
    config: &GenerateConfig,
    synthesizer: &impl SynthesizeAudio,
) -> Result<Vec<ItemReport>> {
    fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    let mut reports = Vec::with_capacity(config.range.clone().count());
    for n in config.range.clone() {
        let destination = config.output_dir.join(format!("{n}.mp3"));
        if fs::try_exists(&destination)
            .await
            .with_context(|| format!("failed to stat {}", destination.display()))?
        {
            tracing::info!("{n}.mp3 is already present");
            reports.push(ItemReport::skipped(n.to_string()));
            continue;
        }
        match generate_one(synthesizer, n, &destination).await {
            Ok(()) => {
                tracing::info!("generated {n}.mp3");
                reports.push(ItemReport::done(n.to_string()));
                time::sleep(config.delay).await;
            },
            Err(err) => {
                tracing::error!("failed to generate {n}.mp3\nError: {err:?}");
                reports.push(ItemReport::failed(n.to_string(), &err));
            },
        }
    }

    Ok(reports)
}

async fn generate_one(
    synthesizer: &impl SynthesizeAudio,
    n: u32,
    destination: &Path,
) -> Result<()> {
    let text = reading::reading(n);
    let audio = synthesizer
        .synthesize(text)
        .await
        .with_context(|| format!("failed to synthesize audio for {n}"))?;
    fs::write(destination, &audio)
        .await
        .with_context(|| format!("failed to write {}", destination.display()))?;

    Ok(())
}
