//! Navigation state machine for the sign-in, case parameter, and results screens.
//!
//! A [`Session`] is owned by whichever presentation layer drives it: the HTTP service keeps
//! one per visitor inside a [`SessionStore`], the terminal demo keeps one on the stack.

pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::{
    score, AnalysisResult, AnalysisView, CaseAttributes, CaseAttributesDraft, DraftError,
    IncompleteAttributes, UnknownLabel,
};

pub use router::session_router;
pub use service::{SessionService, SessionServiceError};
pub use store::{SessionId, SessionStore, SessionStoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    SignedOut,
    AwaitingParameters,
    ShowingResults,
}

impl Screen {
    pub const fn title(self) -> &'static str {
        match self {
            Self::SignedOut => "Criminal Justice Decision Support",
            Self::AwaitingParameters => "Decision Analysis System",
            Self::ShowingResults => "Analysis Results",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SignedOut => "sign-in",
            Self::AwaitingParameters => "case parameters",
            Self::ShowingResults => "results",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionAction {
    SignIn,
    Submit,
    Back,
    SignOut,
}

impl SessionAction {
    pub const fn label(self) -> &'static str {
        match self {
            Self::SignIn => "sign in",
            Self::Submit => "submit case parameters",
            Self::Back => "go back",
            Self::SignOut => "sign out",
        }
    }
}

impl fmt::Display for SessionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of an action that may be silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Moved { from: Screen, to: Screen },
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteAttributes),
    #[error(transparent)]
    UnknownLabel(#[from] UnknownLabel),
    #[error("cannot {action} from the {screen} screen")]
    InvalidTransition {
        action: SessionAction,
        screen: Screen,
    },
}

impl From<DraftError> for SessionError {
    fn from(value: DraftError) -> Self {
        match value {
            DraftError::Incomplete(err) => Self::Incomplete(err),
            DraftError::UnknownLabel(err) => Self::UnknownLabel(err),
        }
    }
}

/// Single visitor's position in the workflow.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    screen: Screen,
    username: Option<String>,
    signed_in_at: Option<DateTime<Utc>>,
    attributes: Option<CaseAttributes>,
    analysis: Option<AnalysisResult>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::SignedOut,
            username: None,
            signed_in_at: None,
            attributes: None,
            analysis: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    pub fn attributes(&self) -> Option<&CaseAttributes> {
        self.attributes.as_ref()
    }

    /// Present only while the results screen is showing.
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    fn require(&self, action: SessionAction, screen: Screen) -> Result<(), SessionError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                screen: self.screen,
            })
        }
    }

    fn move_to(&mut self, to: Screen) -> Transition {
        let from = self.screen;
        self.screen = to;
        Transition::Moved { from, to }
    }

    /// Blank or whitespace-only usernames are ignored without a notice.
    pub fn sign_in(&mut self, username: &str) -> Result<Transition, SessionError> {
        self.require(SessionAction::SignIn, Screen::SignedOut)?;
        if username.trim().is_empty() {
            return Ok(Transition::Ignored);
        }

        self.username = Some(username.to_string());
        self.signed_in_at = Some(Utc::now());
        Ok(self.move_to(Screen::AwaitingParameters))
    }

    pub fn submit(&mut self, draft: &CaseAttributesDraft) -> Result<&AnalysisResult, SessionError> {
        self.require(SessionAction::Submit, Screen::AwaitingParameters)?;
        let attributes = draft.complete()?;
        self.submit_attributes(attributes)
    }

    /// Replaces any earlier submission and moves to the results screen.
    pub fn submit_attributes(
        &mut self,
        attributes: CaseAttributes,
    ) -> Result<&AnalysisResult, SessionError> {
        self.require(SessionAction::Submit, Screen::AwaitingParameters)?;
        self.attributes = Some(attributes);
        self.move_to(Screen::ShowingResults);
        Ok(&*self.analysis.insert(score(&attributes)))
    }

    /// Returns to the form with the last submission still selected.
    pub fn back(&mut self) -> Result<Transition, SessionError> {
        self.require(SessionAction::Back, Screen::ShowingResults)?;
        self.analysis = None;
        Ok(self.move_to(Screen::AwaitingParameters))
    }

    pub fn sign_out(&mut self) -> Transition {
        self.username = None;
        self.signed_in_at = None;
        self.attributes = None;
        self.analysis = None;
        self.move_to(Screen::SignedOut)
    }

    /// Form contents to show on the case parameter screen.
    pub fn form_draft(&self) -> CaseAttributesDraft {
        self.attributes
            .map(CaseAttributesDraft::from)
            .unwrap_or_default()
    }

    pub fn view(&self, session_id: &SessionId) -> SessionView {
        SessionView {
            session_id: session_id.clone(),
            screen: self.screen,
            title: self.screen.title(),
            username: self.username.clone(),
            signed_in_at: self.signed_in_at,
            form: (self.screen == Screen::AwaitingParameters).then(|| self.form_draft()),
            analysis: self.analysis.as_ref().map(AnalysisResult::view),
        }
    }
}

/// Serializable snapshot handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub screen: Screen,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_in_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<CaseAttributesDraft>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisView>,
}
