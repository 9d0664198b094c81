// src/auth.rs
//! Authentication capability and the login form.
//!
//! Screens only talk to an [`AuthProvider`]; the concrete identity service
//! is injected. [`InMemoryAuth`] keeps accounts in a map and is what the
//! tests and the CLI use.

use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Password should be at least 6 characters.")]
    WeakPassword,
    #[error("An account already exists for {0}.")]
    EmailInUse(String),
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("Authentication provider error: {0}")]
    Provider(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub uid: Uuid,
    pub email: String,
}

pub type SessionListener = Box<dyn FnMut(Option<&Session>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub trait AuthProvider {
    /// # Errors
    /// Fails when the credentials do not match an account.
    fn sign_in(&mut self, credentials: &Credentials) -> Result<Session, AuthError>;
    /// # Errors
    /// Fails when the email is malformed or taken, or the password is too weak.
    fn sign_up(&mut self, credentials: &Credentials) -> Result<Session, AuthError>;
    /// # Errors
    /// Fails if the provider cannot end the session.
    fn sign_out(&mut self) -> Result<(), AuthError>;
    fn current_session(&self) -> Option<Session>;
    /// Registers a listener. It is called once right away with the current session.
    fn on_session_change(&mut self, listener: SessionListener) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

struct Account {
    uid: Uuid,
    password: String,
}

#[derive(Default)]
pub struct InMemoryAuth {
    accounts: HashMap<String, Account>,
    session: Option<Session>,
    listeners: Vec<(SubscriptionId, SessionListener)>,
    next_subscription: u64,
}

impl InMemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
        let current = self.session.clone();
        for (_, listener) in &mut self.listeners {
            listener(current.as_ref());
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}

impl AuthProvider for InMemoryAuth {
    fn sign_in(&mut self, credentials: &Credentials) -> Result<Session, AuthError> {
        let email = normalize_email(&credentials.email);
        let account = self
            .accounts
            .get(&email)
            .filter(|acc| acc.password == credentials.password)
            .ok_or(AuthError::InvalidCredentials)?;
        let session = Session {
            uid: account.uid,
            email,
        };
        self.set_session(Some(session.clone()));
        log::info!("Signed in {}", session.email);
        Ok(session)
    }

    fn sign_up(&mut self, credentials: &Credentials) -> Result<Session, AuthError> {
        let email = normalize_email(&credentials.email);
        if !is_valid_email(&email) {
            return Err(AuthError::InvalidEmail(credentials.email.clone()));
        }
        if credentials.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        if self.accounts.contains_key(&email) {
            return Err(AuthError::EmailInUse(email));
        }
        let uid = Uuid::new_v4();
        self.accounts.insert(
            email.clone(),
            Account {
                uid,
                password: credentials.password.clone(),
            },
        );
        let session = Session { uid, email };
        self.set_session(Some(session.clone()));
        log::info!("Created account {}", session.email);
        Ok(session)
    }

    fn sign_out(&mut self) -> Result<(), AuthError> {
        self.set_session(None);
        Ok(())
    }

    fn current_session(&self) -> Option<Session> {
        self.session.clone()
    }

    fn on_session_change(&mut self, mut listener: SessionListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        listener(self.session.as_ref());
        self.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sub, _)| *sub != id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

/// Form state behind the login page.
#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    pub email: String,
    pub password: String,
    mode: LoginMode,
    error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        };
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Signs in or up depending on the mode. A failure is kept as display text.
    pub fn submit(&mut self, auth: &mut dyn AuthProvider) -> Option<Session> {
        self.error = None;
        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        let result = match self.mode {
            LoginMode::SignIn => auth.sign_in(&credentials),
            LoginMode::SignUp => auth.sign_up(&credentials),
        };
        match result {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Authentication failed: {e}");
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Ends the current session, logging rather than surfacing a failure.
pub fn sign_out_quietly(auth: &mut dyn AuthProvider) -> bool {
    match auth.sign_out() {
        Ok(()) => true,
        Err(e) => {
            log::error!("Error signing out: {e}");
            false
        }
    }
}
