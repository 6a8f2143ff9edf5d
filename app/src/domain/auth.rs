//! Authentication primitives: credentials, registrations, sessions and the
//! observable auth state.
//!
//! Constructors validate raw strings so the session manager only ever talks
//! to the transport with well-formed input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::slice::RequestStatus;
use super::user::{UserId, is_plausible_email};

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN: usize = 8;

/// Domain error returned when auth payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Email does not look like an address.
    InvalidEmail,
    /// Password was blank.
    EmptyPassword,
    /// Registration password is shorter than [`PASSWORD_MIN`].
    PasswordTooShort { min: usize },
    /// Registration name was blank.
    EmptyName,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must look like name@domain.tld"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// Marketplace role carried by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Posts projects and reviews applications.
    Creator,
    /// Browses projects and applies to them.
    Contributor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creator => f.write_str("creator"),
            Self::Contributor => f.write_str("contributor"),
        }
    }
}

/// Error returned when parsing an unknown role or provider name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseNameError {
    kind: &'static str,
    value: String,
}

impl FromStr for Role {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creator" => Ok(Self::Creator),
            "contributor" => Ok(Self::Contributor),
            _ => Err(ParseNameError {
                kind: "role",
                value: s.to_owned(),
            }),
        }
    }
}

/// Third-party identity providers offered on the login page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,
    Github,
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => f.write_str("google"),
            Self::Github => f.write_str("github"),
        }
    }
}

impl FromStr for AuthProvider {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "github" => Ok(Self::Github),
            _ => Err(ParseNameError {
                kind: "provider",
                value: s.to_owned(),
            }),
        }
    }
}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and has a plausible address shape.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use projectmate::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" u@example.com ", "pw").expect("valid");
/// assert_eq!(creds.email(), "u@example.com");
/// assert_eq!(creds.password(), "pw");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(AuthValidationError::EmptyEmail);
        }
        if !is_plausible_email(normalized) {
            return Err(AuthValidationError::InvalidEmail);
        }
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }

        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address used to identify the account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Profile fields collected by the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationProfile {
    pub name: String,
    pub role: Role,
}

/// Validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: LoginCredentials,
    name: String,
    role: Role,
}

impl Registration {
    /// Validate registration input. Passwords must be at least
    /// [`PASSWORD_MIN`] characters.
    pub fn try_new(
        email: &str,
        password: &str,
        profile: RegistrationProfile,
    ) -> Result<Self, AuthValidationError> {
        let name = profile.name.trim();
        if name.is_empty() {
            return Err(AuthValidationError::EmptyName);
        }
        let credentials = LoginCredentials::try_from_parts(email, password)?;
        if password.chars().count() < PASSWORD_MIN {
            return Err(AuthValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }

        Ok(Self {
            credentials,
            name: name.to_owned(),
            role: profile.role,
        })
    }

    pub fn credentials(&self) -> &LoginCredentials {
        &self.credentials
    }

    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// The authenticated identity.
///
/// Serialised as the durable session record
/// `{"id", "name", "email", "role", "avatar"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
}

/// Observable auth state published by the session manager.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub status: RequestStatus,
    pub error: Option<String>,
}

impl AuthState {
    /// Whether a session is active.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the active session carries `role`; gates role-specific pages.
    pub fn has_role(&self, role: Role) -> bool {
        self.session.as_ref().is_some_and(|s| s.role == role)
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}
