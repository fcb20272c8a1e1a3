use std::{env, path::PathBuf, time::Duration};

use anyhow::{Context as _, Result};
use clap::Parser;
use tts::Tts;
use url::Url;

use crate::{
    batch,
    kana::{self, FetchConfig, HttpFetcher},
    numbers::{self, GenerateConfig, TtsSynthesizer},
};

const API_KEY_VAR: &str = "GOOGLE_TTS_API_KEY";

pub(crate) struct Application;

#[derive(clap::Parser)]
#[command(about = "Batch tools for building the Japanese learning audio sets")]
pub(crate) struct Cli {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
enum Subcommand {
    /// Download the kana pronunciation clips.
    Kana(KanaArgs),
    /// Synthesize the number pronunciations 0 through 10000.
    Numbers(NumbersArgs),
}

#[derive(clap::Args)]
struct KanaArgs {
    /// Where the clips live. Must end with a trailing slash.
    #[arg(long, default_value = "https://www.learn-japanese-adventure.com/media-files/")]
    base_url: Url,

    #[arg(long, default_value = "audio")]
    output_dir: PathBuf,
}

#[derive(clap::Args)]
struct NumbersArgs {
    #[arg(long, default_value = "numbers/audio")]
    output_dir: PathBuf,

    #[arg(long, default_value = "ja-JP-Neural2-C")]
    voice: String,

    #[arg(long, default_value = "ja-JP")]
    language_code: String,

    /// Pause between requests, in milliseconds.
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,
}

impl Application {
    pub(crate) async fn start() -> Result<()> {
        let cli = Cli::parse();
        match cli.subcommand {
            Subcommand::Kana(args) => {
                let config = FetchConfig {
                    base_url: args.base_url,
                    output_dir: args.output_dir,
                };
                let fetcher = HttpFetcher::new()?;
                let reports = kana::run(&config, &fetcher).await?;
                batch::log_summary("kana download", &reports);
            },
            Subcommand::Numbers(args) => {
                let api_key =
                    env::var(API_KEY_VAR).with_context(|| format!("`{API_KEY_VAR}` is not set"))?;
                let config = GenerateConfig {
                    output_dir: args.output_dir,
                    voice_name: args.voice,
                    language_code: args.language_code,
                    delay: Duration::from_millis(args.delay_ms),
                    range: numbers::RANGE,
                };
                let tts = Tts::build(&api_key)?;
                let synthesizer = TtsSynthesizer::new(tts.synthesizer, &config);
                let reports = numbers::run(&config, &synthesizer).await?;
                batch::log_summary("number synthesis", &reports);
            },
        }

        Ok(())
    }
}
