use std::time::Duration;

use crate::error::FetchError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("storescout/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client shared by the storefront fetchers.
///
/// Holds the timeout and user-agent policy in one place; fetchers only
/// deal in URLs and response bodies.
pub struct StoreClient {
    http: reqwest::blocking::Client,
}

impl StoreClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http })
    }

    /// GET a URL and return the response body as text.
    ///
    /// 404 maps to `FetchError::NotFound`; any other non-success status
    /// becomes `FetchError::Status` with a body excerpt for diagnostics.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.http.get(url).send()?;
        Self::read_body(resp)
    }

    /// POST a form-encoded body and return the response text.
    pub fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<String, FetchError> {
        let resp = self.http.post(url).form(form).send()?;
        Self::read_body(resp)
    }

    fn read_body(resp: reqwest::blocking::Response) -> Result<String, FetchError> {
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        let text = resp.text()?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }
        Ok(text)
    }
}
