use reqwest::Client;
use url::Url;

use crate::{error::TtsError, synthesis::Synthesizer};

const ENDPOINT: &str = "https://texttospeech.googleapis.com";

pub struct Tts {
    pub synthesizer: Synthesizer,
}

impl Tts {
    pub fn build(api_key: &str) -> Result<Self, TtsError> {
        let base = Url::parse(ENDPOINT).map_err(TtsError::InvalidUrl)?;

        Ok(Self {
            synthesizer: Synthesizer {
                base,
                client: Client::new(),
                api_key: api_key.to_owned(),
            },
        })
    }
}
