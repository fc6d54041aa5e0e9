//! HTTP API client.
//!
//! Wraps `fetch` for the JSON auth endpoints. The backend answers rejected
//! logins with 400/401 and a JSON body, so the body is decoded whatever the
//! status; only a body that is not the expected JSON counts as a transport
//! failure.

use crate::dom;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use lm_api_types::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use lm_auth_adapter::AuthBackend;
use lm_storefront_core::StorefrontConfig;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

fn js_err(what: &str, e: JsValue) -> anyhow::Error {
    anyhow!("{what}: {e:?}")
}

/// POST `body` as JSON and decode the JSON reply.
async fn post_json<T: Serialize, R: DeserializeOwned>(url: &str, body: &T) -> Result<R> {
    let payload = serde_json::to_string(body).context("encode request")?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| js_err("headers", e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| js_err("content-type", e))?;
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| js_err("request", e))?;

    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request))
        .await
        .map_err(|e| js_err("fetch", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| anyhow!("response is not a Response"))?;

    let text = JsFuture::from(resp.text().map_err(|e| js_err("text", e))?)
        .await
        .map_err(|e| js_err("text", e))?;
    let text = text.as_string().unwrap_or_default();

    if !resp.ok() {
        tracing::debug!(status = resp.status(), %url, "non-2xx reply");
    }

    serde_json::from_str(&text)
        .with_context(|| format!("{} {}: unexpected body", resp.status(), resp.status_text()))
}

/// [`AuthBackend`] over `fetch`, rooted at the configured API base.
pub struct FetchBackend {
    config: StorefrontConfig,
}

impl FetchBackend {
    pub fn new(config: StorefrontConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl AuthBackend for FetchBackend {
    async fn signup(&self, req: &SignupRequest) -> Result<SignupResponse> {
        post_json(&self.config.endpoint("/signup"), req).await
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse> {
        post_json(&self.config.endpoint("/login"), req).await
    }
}
