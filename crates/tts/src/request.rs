use std::future::Future;

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use url::Url;

use crate::error::TtsError;

pub trait Request: Send + Sync {
    fn base(&self) -> &Url;

    fn client(&self) -> &Client;

    fn post<T>(
        &self,
        endpoint: &str,
        parameters: &[(&str, &str)],
        body: &T,
    ) -> impl Future<Output = Result<(StatusCode, Bytes), TtsError>> + Send
    where
        T: Serialize + Sync,
    {
        async move {
            let url = self.url(endpoint, parameters);
            let response = self
                .client()
                .post(url)
                .json(body)
                .send()
                .await
                .map_err(TtsError::RequestError)?;
            let status = response.status();
            let bytes = response.bytes().await.map_err(TtsError::RequestError)?;

            Ok((status, bytes))
        }
    }

    fn url(&self, endpoint: &str, parameters: &[(&str, &str)]) -> Url {
        let mut url = self.base().clone();
        url.set_path(endpoint);
        if !parameters.is_empty() {
            url.query_pairs_mut().extend_pairs(parameters);
        }
        url
    }
}
