//! "View all" navigation payloads.
//!
//! The compact list links to the full page by encoding the page component
//! and its attributes as base64 JSON in a `one.app` URL fragment. The host
//! decides how to open it: a console subtab or a plain web-page navigation.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use serde::Serialize;

use crate::error::NavigationError;
use crate::model::Column;

/// Component opened by "view all".
pub const VIEW_ALL_COMPONENT: &str = "c:logRelatedPage";

const ONE_APP_PREFIX: &str = "/one/one.app#";
const SUBTAB_ICON: &str = "standard:form";

/// Attributes handed to the full-page component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAllAttributes {
    /// Full column set, not just the related-list subset.
    pub columns: Vec<Column>,
    pub object_api_name: String,
    pub record_id: String,
}

/// The full-page component and its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewAllTarget {
    pub component_def: String,
    pub attributes: ViewAllAttributes,
}

impl ViewAllTarget {
    /// Targets the log page component.
    pub fn new(
        columns: Vec<Column>,
        object_api_name: impl Into<String>,
        record_id: impl Into<String>,
    ) -> Self {
        Self {
            component_def: VIEW_ALL_COMPONENT.to_string(),
            attributes: ViewAllAttributes {
                columns,
                object_api_name: object_api_name.into(),
                record_id: record_id.into(),
            },
        }
    }

    /// `/one/one.app#{base64(json)}`.
    pub fn url(&self) -> Result<String, NavigationError> {
        let json = serde_json::to_vec(self)?;
        Ok(format!("{}{}", ONE_APP_PREFIX, STANDARD.encode(json)))
    }

    /// Reads a target back from a URL produced by [`url`](Self::url).
    pub fn from_url(url: &str) -> Result<Self, NavigationError> {
        let fragment = url
            .strip_prefix(ONE_APP_PREFIX)
            .ok_or_else(|| NavigationError::NotViewAllUrl(url.to_string()))?;
        let json = STANDARD.decode(fragment)?;
        Ok(serde_json::from_slice(&json)?)
    }

    /// Chooses how the host should open the page.
    ///
    /// Console apps open a focused subtab labelled with the list title;
    /// standard apps navigate the current window.
    pub fn navigation(&self, title: &str, is_console: bool) -> Result<Navigation, NavigationError> {
        let url = self.url()?;
        Ok(if is_console {
            Navigation::ConsoleSubtab(Subtab {
                url,
                label: title.to_string(),
                icon: SUBTAB_ICON.to_string(),
                icon_alt: title.to_string(),
                focus: true,
            })
        } else {
            Navigation::WebPage { url }
        })
    }
}

/// A console workspace subtab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtab {
    pub url: String,
    pub label: String,
    pub icon: String,
    pub icon_alt: String,
    pub focus: bool,
}

/// A navigation request for the host. The list never looks at the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Navigation {
    #[serde(rename = "console__subtab")]
    ConsoleSubtab(Subtab),
    #[serde(rename = "standard__webPage")]
    WebPage { url: String },
}

impl Navigation {
    /// The URL being opened.
    pub fn url(&self) -> &str {
        match self {
            Navigation::ConsoleSubtab(subtab) => &subtab.url,
            Navigation::WebPage { url } => url,
        }
    }
}
