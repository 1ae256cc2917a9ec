use std::time::Duration;

use api_types::{
    ErrorBody,
    expense::{ExpenseRow, columns},
};
use engine::{Expense, ExpensePatch, FilterCriteria};
use reqwest::{
    Client, Method, RequestBuilder, Response, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use tracing::debug;

use crate::{
    ExpenseGateway, GatewayError, Result,
    mapping::{from_row, to_insert, to_patch},
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings of a PostgREST backend.
#[derive(Clone, Debug)]
pub struct RestConfig {
    /// Project URL, without the `/rest/v1` suffix.
    pub base_url: String,
    pub api_key: String,
    pub table: String,
    pub timeout: Duration,
}

impl RestConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            table: "despesas".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Gateway over the PostgREST API at `{base_url}/rest/v1/{table}`.
#[derive(Clone, Debug)]
pub struct RestGateway {
    http: Client,
    endpoint: Url,
}

impl RestGateway {
    pub fn new(config: &RestConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(GatewayError::Config("base_url is empty".to_string()));
        }
        if config.table.trim().is_empty() {
            return Err(GatewayError::Config("table is empty".to_string()));
        }
        let endpoint = Url::parse(&format!(
            "{}/rest/v1/{}",
            config.base_url.trim_end_matches('/'),
            config.table
        ))
        .map_err(|err| GatewayError::Config(format!("invalid base_url: {err}")))?;

        let mut headers = HeaderMap::new();
        let key = header_value(&config.api_key)?;
        headers.insert("apikey", key);
        headers.insert(
            AUTHORIZATION,
            header_value(&format!("Bearer {}", config.api_key))?,
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http.request(method, self.endpoint.clone())
    }

    /// Writes ask the backend to echo the stored rows.
    fn write(&self, method: Method) -> RequestBuilder {
        self.request(method)
            .header("Prefer", "return=representation")
    }

    async fn rows(&self, builder: RequestBuilder) -> Result<Vec<ExpenseRow>> {
        let request = builder.build()?;
        debug!(method = %request.method(), url = %request.url(), "storage request");
        let response = self.http.execute(request).await?;
        let response = check_status(response).await?;
        response
            .json::<Vec<ExpenseRow>>()
            .await
            .map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

impl ExpenseGateway for RestGateway {
    async fn get_all(&self) -> Result<Vec<Expense>> {
        let rows = self
            .rows(self.request(Method::GET).query(&listing()))
            .await?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Expense>> {
        let rows = self
            .rows(
                self.request(Method::GET)
                    .query(&[("select", "*".to_string()), by_id(id)]),
            )
            .await?;
        Ok(rows.into_iter().next().map(from_row))
    }

    async fn create(&self, expense: &Expense) -> Result<Expense> {
        let rows = self
            .rows(self.write(Method::POST).json(&to_insert(expense)))
            .await?;
        rows.into_iter()
            .next()
            .map(from_row)
            .ok_or_else(|| GatewayError::Decode("insert returned no row".to_string()))
    }

    async fn update(&self, id: &str, patch: &ExpensePatch) -> Result<Expense> {
        let rows = self
            .rows(
                self.write(Method::PATCH)
                    .query(&[by_id(id)])
                    .json(&to_patch(patch)),
            )
            .await?;
        rows.into_iter()
            .next()
            .map(from_row)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let rows = self
            .rows(self.write(Method::DELETE).query(&[by_id(id)]))
            .await?;
        if rows.is_empty() {
            return Err(GatewayError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn get_with_filters(&self, criteria: &FilterCriteria) -> Result<Vec<Expense>> {
        let mut query = listing();
        let selected = [
            (columns::STATE, &criteria.state),
            (columns::CITY, &criteria.city),
            (columns::INSTITUTE, &criteria.institute),
            (columns::REGISTERED, &criteria.registered),
        ];
        for (column, value) in selected {
            if let Some(value) = value {
                query.push((column, format!("eq.{value}")));
            }
        }
        let rows = self.rows(self.request(Method::GET).query(&query)).await?;
        Ok(rows.into_iter().map(from_row).collect())
    }
}

fn listing() -> Vec<(&'static str, String)> {
    vec![
        ("select", "*".to_string()),
        ("order", format!("{}.desc", columns::CREATED_AT)),
    ]
}

fn by_id(id: &str) -> (&'static str, String) {
    (columns::ID, format!("eq.{id}"))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| GatewayError::Config("api_key contains invalid characters".to_string()))
}

/// Turns a non-success response into [`GatewayError::Server`], taking the
/// message from the error body when there is one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_text)
        .unwrap_or_else(|| status.to_string());
    Err(GatewayError::Server { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_table() {
        let mut config = RestConfig::new("https://demo.supabase.co/", "key");
        config.table = "despesas_teste".to_string();
        let gateway = RestGateway::new(&config).unwrap();
        assert_eq!(
            gateway.endpoint().as_str(),
            "https://demo.supabase.co/rest/v1/despesas_teste"
        );
    }

    #[test]
    fn bad_configuration_is_rejected() {
        assert!(matches!(
            RestGateway::new(&RestConfig::new("", "key")),
            Err(GatewayError::Config(_))
        ));
        assert!(matches!(
            RestGateway::new(&RestConfig::new("not a url", "key")),
            Err(GatewayError::Config(_))
        ));
        assert!(matches!(
            RestGateway::new(&RestConfig::new("http://localhost", "bad\nkey")),
            Err(GatewayError::Config(_))
        ));
    }
}
