//! Name and email decomposition.
//!
//! Pure functions over a fetched `User`; nothing here touches the network.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use userhub_core::{User, UserId};

/// Substrings that mark a domain as a public mail provider.
pub const DEFAULT_PUBLIC_PROVIDERS: [&str; 4] = ["gmail", "yahoo", "hotmail", "outlook"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("email '{email}' must contain exactly one '@' (found {at_signs})")]
    MalformedEmail { email: String, at_signs: usize },
}

/// Whitespace tokens of a full name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAnalysis {
    pub first_name: String,
    pub middle_names: Vec<String>,
    pub last_name: String,
    pub total_parts: usize,
}

/// Parts of an email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAnalysis {
    pub username: String,
    pub domain: String,
    pub is_corporate: bool,
}

/// Report returned by `POST /process/user/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAnalysis {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub email_domain: String,
    pub name_analysis: NameAnalysis,
    pub email_analysis: EmailAnalysis,
}

/// Split a name on whitespace.
///
/// The first token is the first name. The last token is the last name only
/// when there are at least two tokens, and everything between them is a
/// middle name only when there are at least three.
pub fn split_name(name: &str) -> NameAnalysis {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let total_parts = parts.len();

    let first_name = parts.first().map(|s| (*s).to_string()).unwrap_or_default();
    let last_name = match parts.as_slice() {
        [_, .., last] => (*last).to_string(),
        _ => String::new(),
    };
    let middle_names = match parts.as_slice() {
        [_, middle @ .., _] if !middle.is_empty() => {
            middle.iter().map(|s| (*s).to_string()).collect()
        }
        _ => Vec::new(),
    };

    NameAnalysis {
        first_name,
        middle_names,
        last_name,
        total_parts,
    }
}

/// Classifies email domains as public-provider or corporate
#[derive(Debug, Clone)]
pub struct EmailClassifier {
    public_providers: Vec<String>,
}

impl Default for EmailClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_PROVIDERS)
    }
}

impl EmailClassifier {
    pub fn new<I, S>(public_providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            public_providers: public_providers
                .into_iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    pub fn public_providers(&self) -> &[String] {
        &self.public_providers
    }

    /// Case-insensitive substring match against the provider list
    pub fn is_corporate(&self, domain: &str) -> bool {
        let domain = domain.to_lowercase();
        !self
            .public_providers
            .iter()
            .any(|provider| domain.contains(provider.as_str()))
    }

    /// Split an email on its single `@`
    pub fn analyze_email(&self, email: &str) -> Result<EmailAnalysis, AnalysisError> {
        let at_signs = email.matches('@').count();
        let Some((username, domain)) = email.split_once('@').filter(|_| at_signs == 1) else {
            return Err(AnalysisError::MalformedEmail {
                email: email.to_string(),
                at_signs,
            });
        };

        Ok(EmailAnalysis {
            username: username.to_string(),
            domain: domain.to_string(),
            is_corporate: self.is_corporate(domain),
        })
    }
}

/// Build the full report for one user
pub fn analyze_user(
    user: &User,
    classifier: &EmailClassifier,
) -> Result<UserAnalysis, AnalysisError> {
    let name_analysis = split_name(&user.name);
    let email_analysis = classifier.analyze_email(&user.email)?;

    Ok(UserAnalysis {
        user_id: user.id.clone(),
        name: user.name.clone(),
        email: user.email.clone(),
        email_domain: email_analysis.domain.clone(),
        name_analysis,
        email_analysis,
    })
}
