//! Stripe payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the Stripe REST API.
//! Requests are forwarded verbatim and responses returned as raw JSON;
//! this adapter reshapes nothing.
//!
//! # Policy
//!
//! - A single configurable request timeout bounds every call
//! - Zero retries: any failure, including timeouts, surfaces immediately
//! - Processor error bodies are carried back to the caller unmodified
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(secret_key, "https://app.example.com");
//! let gateway = StripeGateway::new(config);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::ports::{
    CancelRequest, CheckoutRequest, GatewayError, PaymentGateway, SubscriptionRequest,
};

/// Default bound on a single gateway call.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    secret_key: SecretString,

    /// Base URL for the Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// Frontend base URL used to build checkout redirect URLs.
    frontend_base_url: String,

    /// Bound on a single request to the processor.
    request_timeout: Duration,
}

impl StripeConfig {
    /// Create a new configuration.
    pub fn new(secret_key: impl Into<String>, frontend_base_url: impl Into<String>) -> Self {
        Self {
            secret_key: SecretString::new(secret_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            frontend_base_url: frontend_base_url.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    fn success_url(&self) -> String {
        format!(
            "{}/checkout/success",
            self.frontend_base_url.trim_end_matches('/')
        )
    }

    fn cancel_url(&self) -> String {
        format!(
            "{}/checkout/cancel",
            self.frontend_base_url.trim_end_matches('/')
        )
    }
}

/// Stripe gateway adapter.
pub struct StripeGateway {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: StripeConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http_client,
        }
    }

    /// POST a form-encoded request and return the processor's JSON verbatim.
    async fn post_form(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<serde_json::Value, GatewayError> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.secret_key.expose_secret(), Option::<&str>::None)
            .form(params)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        Self::into_json(response).await
    }

    /// DELETE a resource and return the processor's JSON verbatim.
    async fn delete(&self, path: &str) -> Result<serde_json::Value, GatewayError> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let response = self
            .http_client
            .delete(&url)
            .basic_auth(self.config.secret_key.expose_secret(), Option::<&str>::None)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        Self::into_json(response).await
    }

    async fn into_json(response: reqwest::Response) -> Result<serde_json::Value, GatewayError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = %status, error = %body, "Stripe API call failed");
            return Err(GatewayError::api(status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|e| {
            GatewayError::api(status.as_u16(), format!("Unparseable Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        let params = vec![
            ("mode", "payment".to_string()),
            ("line_items[0][price_data][currency]", request.currency),
            (
                "line_items[0][price_data][unit_amount]",
                request.amount.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                "Ledgergate checkout".to_string(),
            ),
            ("line_items[0][quantity]", "1".to_string()),
            ("success_url", self.config.success_url()),
            ("cancel_url", self.config.cancel_url()),
        ];

        self.post_form("/v1/checkout/sessions", &params).await
    }

    async fn create_subscription(
        &self,
        request: SubscriptionRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        let params = vec![
            ("customer", request.customer_id),
            ("items[0][price]", request.price_id),
        ];

        self.post_form("/v1/subscriptions", &params).await
    }

    async fn cancel_subscription(
        &self,
        request: CancelRequest,
    ) -> Result<serde_json::Value, GatewayError> {
        self.delete(&format!("/v1/subscriptions/{}", request.subscription_id))
            .await
    }
}

impl std::fmt::Debug for StripeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeGateway")
            .field("api_base_url", &self.config.api_base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> StripeConfig {
        StripeConfig::new("sk_test_key", "https://app.example.com")
    }

    #[test]
    fn config_new_sets_defaults() {
        let config = test_config();
        assert_eq!(config.api_base_url, "https://api.stripe.com");
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn config_with_base_url() {
        let config = test_config().with_base_url("http://localhost:12111");
        assert_eq!(config.api_base_url, "http://localhost:12111");
    }

    #[test]
    fn config_with_request_timeout() {
        let config = test_config().with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn redirect_urls_are_built_from_frontend_base() {
        let config = test_config();
        assert_eq!(config.success_url(), "https://app.example.com/checkout/success");
        assert_eq!(config.cancel_url(), "https://app.example.com/checkout/cancel");
    }

    #[test]
    fn redirect_urls_tolerate_trailing_slash() {
        let config = StripeConfig::new("sk_test_key", "https://app.example.com/");
        assert_eq!(config.success_url(), "https://app.example.com/checkout/success");
    }

    #[test]
    fn stripe_gateway_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StripeGateway>();
    }

    #[tokio::test]
    async fn network_failure_surfaces_as_gateway_error() {
        // Nothing listens on this port; the call must fail without retrying.
        let config = test_config()
            .with_base_url("http://127.0.0.1:1")
            .with_request_timeout(Duration::from_secs(2));
        let gateway = StripeGateway::new(config);

        let result = gateway
            .create_checkout_session(CheckoutRequest {
                amount: 1999,
                currency: "usd".to_string(),
            })
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.status, None);
        assert!(!err.message.is_empty());
    }
}
