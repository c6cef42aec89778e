//! Authenticated HTTP client for the interoperability server.

use std::time::Duration;

use reqwest::blocking::{Client as HttpClient, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::mission::Mission;
use crate::obstacle::ObstacleSet;
use crate::target::Target;
use crate::telemetry::Telemetry;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Authenticated handle to one interoperability server.
///
/// Construction performs the login request; the session cookie the server
/// issues is replayed on every subsequent request. All requests are blocking
/// and sequential.
#[derive(Debug)]
pub struct Client {
    http: HttpClient,
    base: String,
    username: String,
}

impl Client {
    /// Build the HTTP client and authenticate against `url`.
    ///
    /// The URL is normalized (one trailing `/` stripped) and must use the
    /// http or https scheme. A rejected login is
    /// [`Error::AuthenticationFailed`]; transport failures wrap through
    /// [`Error::Http`].
    pub fn new(url: &str, username: &str, password: &str) -> Result<Client> {
        let base = normalize_base_url(url)?;
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent())
            .cookie_store(true)
            .build()?;

        let client = Client {
            http,
            base,
            username: username.to_string(),
        };
        client.login(password)?;
        Ok(client)
    }

    /// Fetch the full mission list. Order is whatever the server returned;
    /// it is never re-sorted here.
    pub fn get_missions(&self) -> Result<Vec<Mission>> {
        debug!("fetching missions");
        let response = self.get("/api/missions", "get missions")?;
        Ok(response.json()?)
    }

    /// Post one telemetry reading.
    pub fn post_telemetry(&self, telemetry: &Telemetry) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("/api/telemetry"))
            .form(telemetry)
            .send()?;
        check(response, "post telemetry").map(|_| ())
    }

    /// Fetch the current obstacle set.
    pub fn get_obstacles(&self) -> Result<ObstacleSet> {
        let response = self.get("/api/obstacles", "get obstacles")?;
        Ok(response.json()?)
    }

    /// Create a target record. Returns the created record, which carries the
    /// server-assigned id.
    pub fn post_target(&self, target: &Target) -> Result<Target> {
        let response = self
            .http
            .post(self.endpoint("/api/targets"))
            .json(target)
            .send()?;
        let response = check(response, "post target")?;
        Ok(response.json()?)
    }

    /// Attach a thumbnail image to a previously created target.
    pub fn post_target_image(&self, id: u32, image: Vec<u8>, content_type: &str) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint(&format!("/api/targets/{}/image", id)))
            .header(CONTENT_TYPE, content_type)
            .body(image)
            .send()?;
        check(response, "post target image").map(|_| ())
    }

    fn login(&self, password: &str) -> Result<()> {
        debug!(url = %self.base, username = %self.username, "logging in");
        let response = self
            .http
            .post(self.endpoint("/api/login"))
            .form(&[("username", self.username.as_str()), ("password", password)])
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(Error::AuthenticationFailed {
                username: self.username.clone(),
                status,
                body,
            });
        }

        info!(username = %self.username, "authenticated with interoperability server");
        Ok(())
    }

    fn get(&self, path: &str, operation: &'static str) -> Result<Response> {
        let response = self.http.get(self.endpoint(path)).send()?;
        check(response, operation)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn check(response: Response, operation: &'static str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(Error::ServerRejected {
        operation,
        status: status.as_u16(),
        body,
    })
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|err| Error::InvalidUrl {
        url: raw.to_string(),
        message: err.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::InvalidUrl {
                url: raw.to_string(),
                message: format!("unsupported scheme {}", other),
            })
        }
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn user_agent() -> String {
    format!("interop-client/{}", env!("CARGO_PKG_VERSION"))
}
