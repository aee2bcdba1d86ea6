//! User journey state machine.
//!
//! ```text
//! Anonymous --SubmitCredentials--> Authenticating --AuthSucceeded--> Authenticated { has_data: false }
//!                                       |                                   | DataSaved
//!                                       +--AuthFailed--> Anonymous          v
//!                                                            Authenticated { has_data: true }
//!                                                                           | ShowRecommendations
//!                                                                           v
//!                                                                 RecommendationsShown
//! ```
//!
//! `Logout` returns to `Anonymous` from any state. A second submit while a
//! sign-in is in flight is rejected.

use crate::auth::Session;
use crate::error::FlowError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated {
        has_data: bool,
    },
    RecommendationsShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    SubmitCredentials,
    AuthSucceeded,
    AuthFailed,
    DataSaved,
    ShowRecommendations,
    EditInput,
    Logout,
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowState::Anonymous => f.write_str("Anonymous"),
            FlowState::Authenticating => f.write_str("Authenticating"),
            FlowState::Authenticated { has_data: false } => f.write_str("Authenticated(no data)"),
            FlowState::Authenticated { has_data: true } => f.write_str("Authenticated(data entered)"),
            FlowState::RecommendationsShown => f.write_str("RecommendationsShown"),
        }
    }
}

impl fmt::Display for FlowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FlowState {
    /// State implied by a session and the presence of saved input.
    pub fn from_session(session: &Session, has_data: bool) -> Self {
        if session.is_signed_in() {
            FlowState::Authenticated { has_data }
        } else {
            FlowState::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            self,
            FlowState::Authenticated { .. } | FlowState::RecommendationsShown
        )
    }

    pub fn has_data(&self) -> bool {
        matches!(
            self,
            FlowState::Authenticated { has_data: true } | FlowState::RecommendationsShown
        )
    }

    /// Apply `event`, returning the next state or why it was refused.
    pub fn transition(self, event: FlowEvent) -> Result<FlowState, FlowError> {
        use FlowEvent::*;
        use FlowState::*;

        let next = match (self, event) {
            (_, Logout) => Anonymous,
            (Authenticating, SubmitCredentials) => return Err(FlowError::AlreadyAuthenticating),
            (_, SubmitCredentials) => Authenticating,
            (Authenticating, AuthSucceeded) => Authenticated { has_data: false },
            (Authenticating, AuthFailed) => Anonymous,
            (Authenticated { .. } | RecommendationsShown, DataSaved) => {
                Authenticated { has_data: true }
            }
            (Authenticated { has_data: true } | RecommendationsShown, ShowRecommendations) => {
                RecommendationsShown
            }
            (Authenticated { has_data: false }, ShowRecommendations) => {
                return Err(FlowError::NoInputData)
            }
            (RecommendationsShown, EditInput) => Authenticated { has_data: true },
            (Authenticated { has_data }, EditInput) => Authenticated { has_data },
            (from, event) => {
                return Err(FlowError::InvalidTransition {
                    from: from.to_string(),
                    event: event.to_string(),
                })
            }
        };
        log::debug!("flow {self} --{event}--> {next}");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{login, Credentials};

    #[test]
    fn happy_path_reaches_recommendations() {
        let state = FlowState::default()
            .transition(FlowEvent::SubmitCredentials)
            .and_then(|s| s.transition(FlowEvent::AuthSucceeded))
            .and_then(|s| s.transition(FlowEvent::DataSaved))
            .and_then(|s| s.transition(FlowEvent::ShowRecommendations))
            .unwrap();
        assert_eq!(state, FlowState::RecommendationsShown);
        assert!(state.has_data());
    }

    #[test]
    fn resubmitting_while_authenticating_is_rejected() {
        let state = FlowState::Anonymous
            .transition(FlowEvent::SubmitCredentials)
            .unwrap();
        assert_eq!(
            state.transition(FlowEvent::SubmitCredentials),
            Err(FlowError::AlreadyAuthenticating)
        );
    }

    #[test]
    fn failure_returns_to_anonymous() {
        assert_eq!(
            FlowState::Authenticating.transition(FlowEvent::AuthFailed),
            Ok(FlowState::Anonymous)
        );
    }

    #[test]
    fn recommendations_need_data() {
        assert_eq!(
            FlowState::Authenticated { has_data: false }.transition(FlowEvent::ShowRecommendations),
            Err(FlowError::NoInputData)
        );
    }

    #[test]
    fn logout_from_anywhere() {
        for state in [
            FlowState::Anonymous,
            FlowState::Authenticating,
            FlowState::Authenticated { has_data: true },
            FlowState::RecommendationsShown,
        ] {
            assert_eq!(state.transition(FlowEvent::Logout), Ok(FlowState::Anonymous));
        }
    }

    #[test]
    fn anonymous_cannot_save_data() {
        assert!(matches!(
            FlowState::Anonymous.transition(FlowEvent::DataSaved),
            Err(FlowError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn edit_input_keeps_the_saved_record() {
        assert_eq!(
            FlowState::RecommendationsShown.transition(FlowEvent::EditInput),
            Ok(FlowState::Authenticated { has_data: true })
        );
    }

    #[test]
    fn from_session_reflects_sign_in() {
        let session = login(&Credentials::new("a@b.c", "pw")).unwrap();
        assert_eq!(
            FlowState::from_session(&session, true),
            FlowState::Authenticated { has_data: true }
        );
        assert_eq!(
            FlowState::from_session(&Session::Anonymous, true),
            FlowState::Anonymous
        );
    }
}
