//! Outbound links: contact buttons and project URLs
//!
//! Resolving a link is pure; performing it talks to the browser or the
//! clipboard and returns a message for a toast.

use folio_core::{Config, Project};
use thiserror::Error;
use url::Url;

use crate::tui::content::contact::{EMAIL, GITHUB_URL, LINKEDIN_URL};

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("no {0} link configured")]
    NotConfigured(&'static str),

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("refusing to open '{0}' (not http, https or mailto)")]
    UnsupportedScheme(String),

    #[error("could not open browser: {0}")]
    Browser(#[from] std::io::Error),

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// What following a link does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    Open(Url),
    Copy(String),
}

/// Buttons in the contact section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactLink {
    Resume,
    LinkedIn,
    GitHub,
    Email,
}

impl ContactLink {
    pub const ALL: [ContactLink; 4] = [
        ContactLink::Resume,
        ContactLink::LinkedIn,
        ContactLink::GitHub,
        ContactLink::Email,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactLink::Resume => "RESUME",
            ContactLink::LinkedIn => "LINKEDIN",
            ContactLink::GitHub => "GITHUB",
            ContactLink::Email => "EMAIL",
        }
    }

    /// Shortcut key
    pub fn key(self) -> char {
        match self {
            ContactLink::Resume => 'r',
            ContactLink::LinkedIn => 'l',
            ContactLink::GitHub => 'h',
            ContactLink::Email => 'e',
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|link| link.key() == key)
    }

    /// Email is copied rather than handed to a mail client
    pub fn action(self, config: &Config) -> Result<LinkAction, LinkError> {
        match self {
            ContactLink::Resume => {
                let url = config
                    .resume_url
                    .as_deref()
                    .ok_or(LinkError::NotConfigured("resume"))?;
                parse_external(url).map(LinkAction::Open)
            }
            ContactLink::LinkedIn => parse_external(LINKEDIN_URL).map(LinkAction::Open),
            ContactLink::GitHub => parse_external(GITHUB_URL).map(LinkAction::Open),
            ContactLink::Email => Ok(LinkAction::Copy(EMAIL.to_string())),
        }
    }
}

/// External page for a project
pub fn project_action(project: &Project) -> Result<LinkAction, LinkError> {
    let url = project
        .external_url()
        .ok_or(LinkError::NotConfigured("project"))?;
    parse_external(url).map(LinkAction::Open)
}

/// Source repository for a project
pub fn github_action(project: &Project) -> Result<LinkAction, LinkError> {
    let url = project
        .github_url
        .as_deref()
        .ok_or(LinkError::NotConfigured("GitHub"))?;
    parse_external(url).map(LinkAction::Open)
}

/// Parse an absolute URL, allowing only web and mail schemes
pub fn parse_external(raw: &str) -> Result<Url, LinkError> {
    let url = Url::parse(raw).map_err(|source| LinkError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" | "mailto" => Ok(url),
        _ => Err(LinkError::UnsupportedScheme(raw.to_string())),
    }
}

/// Carry out an action; the result is a toast message
pub fn perform(action: &LinkAction) -> Result<String, LinkError> {
    match action {
        LinkAction::Open(url) => {
            webbrowser::open(url.as_str())?;
            tracing::info!(url = %url, "Opened link");
            Ok(format!("Opened {}", url.host_str().unwrap_or(url.as_str())))
        }
        LinkAction::Copy(text) => {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(text.clone())?;
            tracing::info!("Copied {} to clipboard", text);
            Ok(format!("Copied {}", text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_keys_round_trip() {
        for link in ContactLink::ALL {
            assert_eq!(ContactLink::from_key(link.key()), Some(link));
        }
        assert_eq!(ContactLink::from_key('x'), None);
    }

    #[test]
    fn test_resume_needs_config() {
        let config = Config::default();
        assert!(matches!(
            ContactLink::Resume.action(&config),
            Err(LinkError::NotConfigured("resume"))
        ));

        let config = Config {
            resume_url: Some("https://example.com/resume.pdf".to_string()),
            ..Config::default()
        };
        let action = ContactLink::Resume.action(&config).unwrap();
        assert!(matches!(action, LinkAction::Open(url) if url.path() == "/resume.pdf"));
    }

    #[test]
    fn test_email_is_copied() {
        let action = ContactLink::Email.action(&Config::default()).unwrap();
        assert_eq!(action, LinkAction::Copy(EMAIL.to_string()));
    }

    #[test]
    fn test_parse_external_rejects_relative_and_odd_schemes() {
        assert!(matches!(
            parse_external("/resume"),
            Err(LinkError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_external("file:///etc/passwd"),
            Err(LinkError::UnsupportedScheme(_))
        ));
        assert!(parse_external("https://github.com/LukeDoesJava").is_ok());
    }

    #[test]
    fn test_project_action_uses_external_url() {
        let catalogue = folio_core::ProjectCatalogue::builtin();
        for project in catalogue.projects() {
            match project.external_url() {
                Some(_) => assert!(project_action(project).is_ok()),
                None => assert!(matches!(
                    project_action(project),
                    Err(LinkError::NotConfigured("project"))
                )),
            }
        }
    }
}
