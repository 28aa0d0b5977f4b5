//! User domain types

use serde::{Deserialize, Serialize};

use super::UserId;
use crate::error::{HubError, Result};

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Full name, as supplied by the client
    pub name: String,

    /// Email address, as supplied by the client
    pub email: String,
}

/// Validated input for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    name: String,
    email: String,
}

impl CreateUser {
    /// Validate and build a create request.
    ///
    /// Both fields must contain something other than whitespace. The values
    /// are kept exactly as given.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let email = email.into();

        require_non_blank("name", &name)?;
        require_non_blank("email", &email)?;

        Ok(Self { name, email })
    }

    /// Name to store
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email to store
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Build the record for an assigned ID
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Partial update: only the fields that are `Some` are written
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdateUser {
    /// True when the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Reject supplied fields that are blank
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_non_blank("name", name)?;
        }
        if let Some(email) = &self.email {
            require_non_blank("email", email)?;
        }
        Ok(())
    }

    /// Overwrite the supplied fields on `user`
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HubError::validation(format!("Field '{field}' cannot be empty")));
    }
    Ok(())
}
