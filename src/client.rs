use reqwest::{Response, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: Url,
    auth_token: Option<Secret<String>>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            auth_token: None,
        }
    }

    // The token is attached to every request sent after this call.
    pub fn authorize(&mut self, token: Secret<String>) {
        self.auth_token = Some(token);
    }

    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        let url = self.base_url.join(path).unwrap();
        let mut request = self.http_client.get(url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }
        request.send().await
    }

    pub async fn post_json<Body>(&self, path: &str, body: &Body) -> Result<Response, reqwest::Error>
    where
        Body: Serialize + ?Sized,
    {
        let url = self.base_url.join(path).unwrap();
        let mut request = self.http_client.post(url).json(body);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }
        request.send().await
    }
}
