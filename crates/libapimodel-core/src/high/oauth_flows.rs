use crate::Value;
use crate::high::HighModel;
use crate::high::convert;
use crate::low;
use indexmap::IndexMap;
use inherent::inherent;
use serde::Serialize;
use std::sync::Arc;

/// High-level OAuth Flows Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(skip_serializing_if = "Option::is_none")]
    authorization_code: Option<OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_credentials: Option<OAuthFlow>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    implicit: Option<OAuthFlow>,
    #[serde(skip)]
    low: Arc<low::OAuthFlows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<OAuthFlow>,
}
#[inherent]
impl HighModel for OAuthFlows {
    type Low = low::OAuthFlows;

    pub fn from_low(low: Arc<low::OAuthFlows>) -> Self {
        Self {
            authorization_code: convert::object(&low.authorization_code),
            client_credentials: convert::object(&low.client_credentials),
            extensions: convert::extensions(&low.extensions),
            implicit: convert::object(&low.implicit),
            password: convert::object(&low.password),
            low,
        }
    }

    pub fn low(&self) -> &low::OAuthFlows {
        &self.low
    }
}
impl OAuthFlows {
    pub fn authorization_code(&self) -> Option<&OAuthFlow> {
        self.authorization_code.as_ref()
    }

    pub fn client_credentials(&self) -> Option<&OAuthFlow> {
        self.client_credentials.as_ref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn implicit(&self) -> Option<&OAuthFlow> {
        self.implicit.as_ref()
    }

    pub fn password(&self) -> Option<&OAuthFlow> {
        self.password.as_ref()
    }
}

/// High-level OAuth Flow Object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlow {
    #[serde(skip_serializing_if = "Option::is_none")]
    authorization_url: Option<String>,
    #[serde(flatten)]
    extensions: IndexMap<String, Value>,
    #[serde(skip)]
    low: Arc<low::OAuthFlow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_url: Option<String>,
    scopes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_url: Option<String>,
}
#[inherent]
impl HighModel for OAuthFlow {
    type Low = low::OAuthFlow;

    pub fn from_low(low: Arc<low::OAuthFlow>) -> Self {
        Self {
            authorization_url: convert::value(&low.authorization_url),
            extensions: convert::extensions(&low.extensions),
            refresh_url: convert::value(&low.refresh_url),
            scopes: convert::map(&low.scopes),
            token_url: convert::value(&low.token_url),
            low,
        }
    }

    pub fn low(&self) -> &low::OAuthFlow {
        &self.low
    }
}
impl OAuthFlow {
    pub fn authorization_url(&self) -> Option<&str> {
        self.authorization_url.as_deref()
    }

    pub fn extensions(&self) -> &IndexMap<String, Value> {
        &self.extensions
    }

    pub fn refresh_url(&self) -> Option<&str> {
        self.refresh_url.as_deref()
    }

    /// Scope name to description, in source order.
    pub fn scopes(&self) -> &IndexMap<String, String> {
        &self.scopes
    }

    pub fn token_url(&self) -> Option<&str> {
        self.token_url.as_deref()
    }
}
