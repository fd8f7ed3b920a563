use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;

const JSON: &str = "application/json";
// PostgREST answers 406 unless exactly one row matches.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("backend connection is not configured")]
    NotConfigured,
    #[error("request for {table} failed: {source}")]
    Transport {
        table: &'static str,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{table} responded with status {status}")]
    Status { table: &'static str, status: u16 },
    #[error("could not decode {table} rows: {message}")]
    Decode { table: &'static str, message: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Asc,
    Desc,
}

/// A read-only row query against one table, rendered as PostgREST
/// query parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    table: &'static str,
    filters: Vec<(&'static str, String)>,
    order: Vec<(&'static str, Direction)>,
    limit: Option<u32>,
}

impl Query {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Rows of `table` with `active = true`.
    pub fn active(table: &'static str) -> Self {
        Self::new(table).eq("active", "true")
    }

    pub fn eq(mut self, column: &'static str, value: impl Into<String>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn order_by(mut self, column: &'static str) -> Self {
        self.order.push((column, Direction::Asc));
        self
    }

    pub fn order_desc(mut self, column: &'static str) -> Self {
        self.order.push((column, Direction::Desc));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn url(&self, base_url: &str) -> String {
        let mut params = vec!["select=*".to_string()];

        for (column, value) in &self.filters {
            params.push(format!("{}=eq.{}", column, urlencoding::encode(value)));
        }

        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, direction)| match direction {
                    Direction::Asc => format!("{}.asc", column),
                    Direction::Desc => format!("{}.desc", column),
                })
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!("order={}", order));
        }

        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }

        format!(
            "{}/rest/v1/{}?{}",
            base_url.trim_end_matches('/'),
            self.table,
            params.join("&")
        )
    }

    /// The newest matching row only. With more than one active row the
    /// most recently created one wins.
    fn singleton(self) -> Self {
        self.order_desc("created_at").limit(1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config() -> Result<Self, FetchError> {
        match (config::supabase_url(), config::supabase_anon_key()) {
            (Some(url), Some(key)) => Ok(Self::new(url, key)),
            _ => Err(FetchError::NotConfigured),
        }
    }

    pub async fn list<T: DeserializeOwned>(&self, query: Query) -> Result<Vec<T>, FetchError> {
        self.fetch(&query, JSON).await
    }

    /// Fails when no row matches, so callers fall back the same way as on
    /// a network error.
    pub async fn single<T: DeserializeOwned>(&self, query: Query) -> Result<T, FetchError> {
        self.fetch(&query.singleton(), SINGLE_OBJECT).await
    }

    async fn fetch<T: DeserializeOwned>(&self, query: &Query, accept: &str) -> Result<T, FetchError> {
        let table = query.table();
        let response = Request::get(&query.url(&self.base_url))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Accept", accept)
            .send()
            .await
            .map_err(|source| FetchError::Transport { table, source })?;

        if !response.ok() {
            return Err(FetchError::Status {
                table,
                status: response.status(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            table,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://academy.supabase.co";

    #[test]
    fn active_list_query_filters_and_orders() {
        let url = Query::active("courses").order_by("order_index").url(BASE);
        assert_eq!(
            url,
            "https://academy.supabase.co/rest/v1/courses?select=*&active=eq.true&order=order_index.asc"
        );
    }

    #[test]
    fn category_filter_is_url_encoded() {
        let url = Query::active("statistics_achievements")
            .eq("category", "main page")
            .order_by("order_index")
            .url(BASE);
        assert!(url.contains("&category=eq.main%20page&"));
        assert!(url.ends_with("order=order_index.asc"));
    }

    #[test]
    fn multiple_order_columns_are_joined() {
        let url = Query::active("statistics_achievements")
            .order_by("category")
            .order_by("order_index")
            .url(BASE);
        assert!(url.ends_with("order=category.asc,order_index.asc"));
    }

    #[test]
    fn singleton_takes_newest_row() {
        let url = Query::active("hero_content").singleton().url(BASE);
        assert_eq!(
            url,
            "https://academy.supabase.co/rest/v1/hero_content?select=*&active=eq.true&order=created_at.desc&limit=1"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let url = Query::new("navigation_items").url("https://academy.supabase.co/");
        assert_eq!(
            url,
            "https://academy.supabase.co/rest/v1/navigation_items?select=*"
        );
    }

    #[test]
    fn status_error_names_the_table() {
        let err = FetchError::Status {
            table: "hero_content",
            status: 406,
        };
        assert_eq!(err.to_string(), "hero_content responded with status 406");
    }
}
