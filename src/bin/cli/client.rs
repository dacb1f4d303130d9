use reqwest::{Client, StatusCode};
use taskcards::dto::{CardResponse, CreateCardDto};
use taskcards::models::Card;

/// Error type for CLI client operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Server answered with a failure status; the body carries no detail
    #[error("Server error ({status})")]
    Server { status: StatusCode },
    /// Server answered with success but an empty card
    #[error("Server returned no card")]
    MissingCard,
    /// Network/connection/request error
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Extension trait for turning failure statuses into errors
trait ResponseExt {
    fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            Ok(self)
        } else {
            Err(ClientError::Server { status: self.status() })
        }
    }
}

/// HTTP client wrapper for communicating with the taskcards server
pub struct TaskcardsClient {
    /// The base URL of the server (e.g. "http://localhost:3000")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

impl TaskcardsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /cards
    pub async fn create_card(&self, dto: &CreateCardDto) -> Result<Card, ClientError> {
        let response = self.client
            .post(self.url("/cards"))
            .json(dto)
            .send()
            .await?
            .check()?;
        let body: CardResponse = response.json().await?;
        body.card.ok_or(ClientError::MissingCard)
    }

    /// GET /cards
    pub async fn list_cards(&self) -> Result<Vec<Card>, ClientError> {
        let response = self.client
            .get(self.url("/cards"))
            .send()
            .await?
            .check()?;
        Ok(response.json().await?)
    }

    /// GET /cards/{id}
    pub async fn get_card(&self, id: i64) -> Result<Card, ClientError> {
        let response = self.client
            .get(self.url(&format!("/cards/{}", id)))
            .send()
            .await?
            .check()?;
        let body: CardResponse = response.json().await?;
        body.card.ok_or(ClientError::MissingCard)
    }
}
