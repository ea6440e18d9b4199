//! Request and response bodies of the templated registration endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::CardParameters;
use crate::sync::{SyncError, SyncResult};

/// Operation requested from the templated registration endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegistrationMethod {
    List,
    Register,
    Delete,
    DeleteAll,
}

impl fmt::Display for RegistrationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::List => "LIST",
            Self::Register => "REGISTER",
            Self::Delete => "DELETE",
            Self::DeleteAll => "DELETEALL",
        };
        f.write_str(label)
    }
}

/// User and template a registration call acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationScope {
    pub username: String,
    pub template_name: String,
}

impl RegistrationScope {
    pub fn new(username: impl Into<String>, template_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            template_name: template_name.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationRequest<'a> {
    pub method: RegistrationMethod,
    pub template_name: &'a str,
    pub username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<&'a CardParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'a str>,
}

impl<'a> RegistrationRequest<'a> {
    pub(crate) fn new(method: RegistrationMethod, scope: &'a RegistrationScope) -> Self {
        Self {
            method,
            template_name: &scope.template_name,
            username: &scope.username,
            parameters: None,
            link: None,
        }
    }

    pub(crate) const fn with_parameters(mut self, parameters: &'a CardParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub(crate) const fn with_link(mut self, link: &'a str) -> Self {
        self.link = Some(link);
        self
    }
}

/// One card registration as returned by `LIST`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCard {
    #[serde(default)]
    pub parameters: CardParameters,
}

impl RemoteCard {
    pub const fn new(parameters: CardParameters) -> Self {
        Self { parameters }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListResponse {
    Cards(Vec<RemoteCard>),
    Wrapped { results: Vec<RemoteCard> },
}

/// Parse a `LIST` response body.
///
/// Accepts a bare array of registrations or an object wrapping them in
/// `results`.
pub fn parse_list_response(body: &str) -> SyncResult<Vec<RemoteCard>> {
    let response = serde_json::from_str::<ListResponse>(body).map_err(|error| {
        SyncError::InvalidPayload(format!("card list is not valid JSON: {error}"))
    })?;
    Ok(match response {
        ListResponse::Cards(cards) | ListResponse::Wrapped { results: cards } => cards,
    })
}
