//!
//! The source-control host API.
//!

pub mod comment;
pub mod error;
pub mod pull_request;

use crate::context::repository::Repository;

use self::comment::Comment;
use self::error::Error as FetchError;
use self::pull_request::PullRequest;

///
/// Lists the comments of a pull request, one page at a time.
///
pub trait CommentLister {
    ///
    /// Returns the 1-based `page` of the pull request comments, `per_page` comments at most.
    ///
    fn list_comments(
        &self,
        pull_request: u64,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<Comment>, FetchError>;
}

///
/// The remaining host operations the reporter needs.
///
pub trait Host: CommentLister {
    ///
    /// Returns the pull requests the commit belongs to.
    ///
    fn list_pull_requests(&self, commit: &str) -> Result<Vec<PullRequest>, FetchError>;

    ///
    /// Appends a new comment to the pull request.
    ///
    fn create_comment(&self, pull_request: u64, body: &str) -> Result<(), FetchError>;
}

///
/// The GitHub REST API client.
///
#[derive(Debug)]
pub struct Client {
    /// The `reqwest` HTTP client.
    http_client: reqwest::blocking::Client,
    /// The API root, e.g. `https://api.github.com`.
    api_url: String,
    /// The repository all requests are scoped to.
    repository: Repository,
    /// The authentication token.
    token: String,
}

impl Client {
    /// The default API root.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// The user agent sent with every request.
    const USER_AGENT: &'static str = "gas-reporter";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        http_client: reqwest::blocking::Client,
        api_url: &str,
        repository: Repository,
        token: String,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_owned(),
            repository,
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{path}",
            self.api_url, self.repository.owner, self.repository.name
        )
    }

    ///
    /// Sends the request and checks the response status.
    ///
    fn send(
        &self,
        url: &str,
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, FetchError> {
        tracing::debug!(%url, "sending request");
        let response = request
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, Self::USER_AGENT)
            .header("X-GitHub-Api-Version", "2022-11-28")
            .bearer_auth(self.token.as_str())
            .send()
            .map_err(|error| FetchError::Request {
                url: url.to_owned(),
                error,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_owned(),
                status,
                body,
            });
        }
        Ok(response)
    }

    ///
    /// Sends a `GET` request and deserializes the JSON response.
    ///
    fn get<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(url, self.http_client.get(url).query(query))?;
        let text = response.text().map_err(|error| FetchError::Request {
            url: url.to_owned(),
            error,
        })?;
        serde_json::from_str(text.as_str()).map_err(|error| FetchError::Decoding {
            url: url.to_owned(),
            error,
        })
    }
}

impl CommentLister for Client {
    fn list_comments(
        &self,
        pull_request: u64,
        page: usize,
        per_page: usize,
    ) -> Result<Vec<Comment>, FetchError> {
        let url = self.url(format!("issues/{pull_request}/comments").as_str());
        self.get(
            url.as_str(),
            &[("per_page", per_page.to_string()), ("page", page.to_string())],
        )
    }
}

impl Host for Client {
    fn list_pull_requests(&self, commit: &str) -> Result<Vec<PullRequest>, FetchError> {
        let url = self.url(format!("commits/{commit}/pulls").as_str());
        self.get(url.as_str(), &[])
    }

    fn create_comment(&self, pull_request: u64, body: &str) -> Result<(), FetchError> {
        let url = self.url(format!("issues/{pull_request}/comments").as_str());
        let request = self
            .http_client
            .post(url.as_str())
            .json(&serde_json::json!({ "body": body }));
        self.send(url.as_str(), request)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Client;

    #[test]
    fn url_is_scoped_to_repository() {
        let client = Client::new(
            reqwest::blocking::Client::new(),
            "https://github.example.com/api/v3/",
            "matter-labs/gas-reporter".parse().expect("Always valid"),
            "token".to_owned(),
        );
        assert_eq!(
            client.url("issues/7/comments"),
            "https://github.example.com/api/v3/repos/matter-labs/gas-reporter/issues/7/comments"
        );
    }
}
