use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use std::{fmt, rc::Rc, time::Duration};

use crate::{
    api::types::{ApiError, Envelope},
    config,
    locale::Locale,
    utils::storage::{self as storage_utils, KeyValueStorage, TOKEN_KEY},
};

pub const LANG_HEADER: &str = "x-lang";

/// How the session travels with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransport {
    /// `Authorization: Bearer <token>` read from durable storage (admin app).
    Bearer,
    /// HTTP-only cookie set by the server (consumer app).
    Cookie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    pub transport: SessionTransport,
    pub success_code: i64,
    /// Fixed per-client timeout; `None` follows the runtime config.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub const SUCCESS_CODE: i64 = 0;

    pub fn admin() -> Self {
        Self {
            transport: SessionTransport::Bearer,
            success_code: Self::SUCCESS_CODE,
            timeout: None,
        }
    }

    pub fn consumer() -> Self {
        Self {
            transport: SessionTransport::Cookie,
            ..Self::admin()
        }
    }

    pub fn resolved_timeout(&self) -> Duration {
        self.timeout.unwrap_or_else(config::request_timeout)
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::admin()
    }
}

pub type UnauthorizedHook = Rc<dyn Fn()>;
pub type LocaleResolver = Rc<dyn Fn() -> Locale>;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    options: ClientOptions,
    storage: Rc<dyn KeyValueStorage>,
    on_unauthorized: Option<UnauthorizedHook>,
    locale: LocaleResolver,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

impl ApiClient {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            options,
            storage: storage_utils::default_storage(),
            on_unauthorized: None,
            locale: Rc::new(Locale::current),
        }
    }

    pub fn new_with_base_url(options: ClientOptions, base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            ..Self::new(options)
        }
    }

    pub fn with_storage(mut self, storage: Rc<dyn KeyValueStorage>) -> Self {
        self.storage = storage;
        self
    }

    /// Invoked after a 401 has cleared the stored session.
    pub fn on_unauthorized(mut self, hook: impl Fn() + 'static) -> Self {
        self.on_unauthorized = Some(Rc::new(hook));
        self
    }

    pub fn with_locale_resolver(mut self, resolver: impl Fn() -> Locale + 'static) -> Self {
        self.locale = Rc::new(resolver);
        self
    }

    pub fn with_locale(self, locale: Locale) -> Self {
        self.with_locale_resolver(move || locale)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn storage(&self) -> Rc<dyn KeyValueStorage> {
        Rc::clone(&self.storage)
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn default_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            LANG_HEADER,
            HeaderValue::from_static((self.locale)().tag()),
        );

        if self.options.transport == SessionTransport::Bearer {
            if let Some(token) = self
                .storage
                .get_item(TOKEN_KEY)
                .filter(|token| !token.is_empty())
            {
                let value = HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|_| ApiError::validation("Invalid token format"))?;
                headers.insert(AUTHORIZATION, value);
            }
        }

        Ok(headers)
    }

    fn apply_transport(&self, builder: RequestBuilder) -> RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            if self.options.transport == SessionTransport::Cookie {
                return builder.fetch_credentials_include();
            }
            builder
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder.timeout(self.options.resolved_timeout())
        }
    }

    fn handle_unauthorized_status(&self, path: &str) {
        log::warn!("{} answered 401; discarding the local session", path);
        storage_utils::clear_session(self.storage.as_ref());
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }

    /// Sends one POST with a JSON body and checks the response envelope.
    pub async fn call<P, T>(&self, path: &str, payload: &P) -> Result<Envelope<T>, ApiError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let headers = self.default_headers()?;
        log::debug!("POST {}", path);

        let builder = self
            .client
            .post(format!("{}{}", base_url, path))
            .headers(headers)
            .json(payload);
        let response = self
            .apply_transport(builder)
            .send()
            .await
            .map_err(|e| {
                log::warn!("{} failed: {}", path, e);
                ApiError::transport(None, format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized_status(path);
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = response
                .json::<Envelope<Value>>()
                .await
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            log::warn!("{} answered {}: {}", path, status, message);
            return Err(ApiError::transport(Some(status.as_u16()), message));
        }

        let envelope: Envelope<Value> = response.json().await.map_err(|e| {
            log::warn!("{} returned an unreadable body: {}", path, e);
            ApiError::Decode(e.to_string())
        })?;
        if envelope.code != self.options.success_code {
            log::debug!("{} rejected with code {}", path, envelope.code);
            return Err(ApiError::application(envelope.code, envelope.message));
        }

        let data = envelope
            .data
            .map(serde_json::from_value::<T>)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Envelope {
            code: envelope.code,
            message: envelope.message,
            data,
        })
    }

    /// Like [`ApiClient::call`] but yields `data`; a missing payload decodes as JSON `null`.
    pub async fn request<P, T>(&self, path: &str, payload: &P) -> Result<T, ApiError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let envelope: Envelope<Value> = self.call(path, payload).await?;
        serde_json::from_value(envelope.data.unwrap_or(Value::Null))
            .map_err(|e| ApiError::Decode(format!("{}: {}", path, e)))
    }

    /// Parameterless variant of [`ApiClient::request`]; still sends `{}`.
    pub async fn request_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(path, &json!({})).await
    }

    /// Runs a call whose `data` is irrelevant, returning the envelope message.
    pub async fn execute<P>(&self, path: &str, payload: &P) -> Result<String, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let envelope: Envelope<Value> = self.call(path, payload).await?;
        Ok(envelope.message)
    }

    pub async fn execute_empty(&self, path: &str) -> Result<String, ApiError> {
        self.execute(path, &json!({})).await
    }
}
