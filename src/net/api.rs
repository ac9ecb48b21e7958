//! REST endpoint calls, one method per backend operation.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR):
//! stubs returning `ApiError::Unavailable`, since these endpoints are only
//! meaningful in the browser.

use super::error::ApiError;
use super::http::ApiClient;
use super::types::{
    LoginRequest, NewProductRequest, ProductRequestReceipt, ProductType, RegisterRequest,
    RegisterResponse, TokenResponse, User,
};

#[cfg(feature = "hydrate")]
use super::http::Verb;

/// Decode a JSON success body, mapping non-2xx responses through the error
/// taxonomy first.
#[cfg(feature = "hydrate")]
async fn parse_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    resp.json::<T>().await.map_err(ApiError::network)
}

/// Like `parse_json` for endpoints whose success body we ignore.
#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }
    Ok(())
}

impl ApiClient {
    /// `GET /csrf/` — provokes the server into setting the CSRF cookie.
    /// Must run before the first mutating request; failure is non-fatal.
    pub async fn fetch_csrf_cookie(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Verb::Get, "/csrf/")
                .send()
                .await
                .map_err(ApiError::network)?;
            expect_ok(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/login/` — exchange credentials for a token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Verb::Post, "/auth/login/")
                .json(credentials)
                .map_err(ApiError::network)?
                .send()
                .await
                .map_err(ApiError::network)?;
            parse_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/registration/` — create an account; the response carries a
    /// token only when the backend auto-logs-in new accounts.
    pub async fn register(&self, data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Verb::Post, "/auth/registration/")
                .json(data)
                .map_err(ApiError::network)?
                .send()
                .await
                .map_err(ApiError::network)?;
            parse_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = data;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/logout/` — best-effort server-side token invalidation.
    pub async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Verb::Post, "/auth/logout/")
                .send()
                .await
                .map_err(ApiError::network)?;
            expect_ok(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /auth/user/` — fetch the profile for the installed token.
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Verb::Get, "/auth/user/")
                .send()
                .await
                .map_err(ApiError::network)?;
            parse_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /product-types/` — product kinds for the request form.
    pub async fn fetch_product_types(&self) -> Result<Vec<ProductType>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Verb::Get, "/product-types/")
                .send()
                .await
                .map_err(ApiError::network)?;
            parse_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /product-requests/` — submit a product request; the server
    /// infers the requester from the auth token.
    pub async fn create_product_request(
        &self,
        request: &NewProductRequest,
    ) -> Result<ProductRequestReceipt, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .request(Verb::Post, "/product-requests/")
                .json(request)
                .map_err(ApiError::network)?
                .send()
                .await
                .map_err(ApiError::network)?;
            parse_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
