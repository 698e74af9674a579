//! Login/register form model and submit flow.
//!
//! DESIGN
//! ======
//! The form is a two-mode state machine. Error and success messages share one
//! [`FormStatus`] slot, so the view can never show both at once.
//!
//! ERROR HANDLING
//! ==============
//! [`failure_message`] picks the user-facing text: a mode/status specific
//! message first, then the server's `detail` or `message`, then a generic
//! "<operation> failed".

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::config::ClientConfig;
use crate::net::api::{ApiError, CatalogApi, LOGIN_PATH, REGISTER_PATH, network_error_message};
use crate::net::types::{Credentials, User};
use crate::util::session_store::SessionStore;

/// Minimum length for both username and password.
pub const MIN_FIELD_LEN: usize = 3;

pub const USERNAME_TAKEN: &str = "Username already taken";
pub const INCORRECT_CREDENTIALS: &str = "Incorrect username or password";
pub const REGISTERED_DEFAULT: &str = "Registration successful! You can now login.";
pub const FIELDS_REQUIRED: &str = "Username and password are required.";
pub const FIELDS_TOO_SHORT: &str = "Username and password must be at least 3 characters.";

/// Which endpoint the form submits to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => REGISTER_PATH,
        }
    }

    /// Operation name used in the generic failure message.
    pub fn operation(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Registration",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login to FiMoney",
            Self::Register => "Register for FiMoney",
        }
    }

    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging in...",
            (Self::Register, false) => "Register",
            (Self::Register, true) => "Registering...",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Register => "Already have an account?",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Login => "Register here",
            Self::Register => "Login here",
        }
    }
}

/// Request lifecycle of the form. At most one message is visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(String),
}

impl FormStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Success(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Snapshot of the form taken when a submit starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub mode: AuthMode,
    pub credentials: Credentials,
}

/// Result of one submit round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Account created; carries the success message to show.
    Registered(String),
    /// Token issued and persisted.
    LoggedIn(User),
    /// Request failed; carries the error message to show.
    Failed(String),
}

/// Form state for the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub mode: AuthMode,
    pub credentials: Credentials,
    pub status: FormStatus,
}

impl LoginForm {
    /// Flip between login and register, clearing fields and messages.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.credentials = Credentials::default();
        self.status = FormStatus::Idle;
    }

    pub fn set_username(&mut self, value: String) {
        self.credentials.username = value;
        self.clear_message();
    }

    pub fn set_password(&mut self, value: String) {
        self.credentials.password = value;
        self.clear_message();
    }

    /// Hide any error/success message; an in-flight request stays loading.
    pub fn clear_message(&mut self) {
        if !self.status.is_loading() {
            self.status = FormStatus::Idle;
        }
    }

    /// Validate and move to `Loading`.
    ///
    /// Returns `None` without touching the network when a request is already
    /// in flight or the fields fail validation (the validation message is
    /// shown instead).
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if self.status.is_loading() {
            return None;
        }
        if let Err(msg) = validate_credentials(&self.credentials) {
            self.status = FormStatus::Error(msg.to_owned());
            return None;
        }
        self.status = FormStatus::Loading;
        Some(SubmitRequest { mode: self.mode, credentials: self.credentials.clone() })
    }

    /// Apply a finished submit. Returns the user to sign in on login success.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) -> Option<User> {
        match outcome {
            SubmitOutcome::Registered(msg) => {
                self.mode = AuthMode::Login;
                self.credentials = Credentials::default();
                self.status = FormStatus::Success(msg);
                None
            }
            SubmitOutcome::LoggedIn(user) => {
                self.status = FormStatus::Idle;
                Some(user)
            }
            SubmitOutcome::Failed(msg) => {
                self.status = FormStatus::Error(msg);
                None
            }
        }
    }
}

/// Both fields required and at least [`MIN_FIELD_LEN`] characters.
///
/// # Errors
///
/// Returns the message to display when either field is missing or too short.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), &'static str> {
    let Credentials { username, password } = credentials;
    if username.is_empty() || password.is_empty() {
        return Err(FIELDS_REQUIRED);
    }
    if username.chars().count() < MIN_FIELD_LEN || password.chars().count() < MIN_FIELD_LEN {
        return Err(FIELDS_TOO_SHORT);
    }
    Ok(())
}

/// User-facing message for a failed submit in `mode`.
pub fn failure_message(mode: AuthMode, err: &ApiError, config: &ClientConfig) -> String {
    match err {
        ApiError::Transport(_) => network_error_message(config),
        ApiError::Http { status, body } => match (mode, *status) {
            (AuthMode::Register, 400) => body.message_text().unwrap_or_else(|| USERNAME_TAKEN.to_owned()),
            (AuthMode::Login, 401) => INCORRECT_CREDENTIALS.to_owned(),
            _ => body
                .detail_text()
                .or_else(|| body.message_text())
                .unwrap_or_else(|| format!("{} failed", mode.operation())),
        },
    }
}

/// Run one submit against `api`.
///
/// Login success persists the issued token with the submitted username;
/// registration never touches `store`.
pub async fn submit<A: CatalogApi>(
    api: &A,
    store: &dyn SessionStore,
    config: &ClientConfig,
    request: SubmitRequest,
) -> SubmitOutcome {
    let SubmitRequest { mode, credentials } = request;
    match mode {
        AuthMode::Register => match api.register(&credentials).await {
            Ok(body) => {
                leptos::logging::log!("registered {}", credentials.username);
                SubmitOutcome::Registered(
                    body.message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| REGISTERED_DEFAULT.to_owned()),
                )
            }
            Err(e) => SubmitOutcome::Failed(failure_message(mode, &e, config)),
        },
        AuthMode::Login => match api.login(&credentials).await {
            Ok(body) => {
                let user = User { username: credentials.username, token: body.access_token };
                store.save(&user);
                leptos::logging::log!("logged in as {}", user.username);
                SubmitOutcome::LoggedIn(user)
            }
            Err(e) => SubmitOutcome::Failed(failure_message(mode, &e, config)),
        },
    }
}
