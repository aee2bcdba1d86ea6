//! Views and the navigation guard.
//!
//! The router asks [`resolve`] before rendering a view; the answer depends
//! only on the explicit [`Session`] and whether an input record is saved.

use crate::auth::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
    Dashboard,
    Input,
    Recommendations,
    NotFound,
}

/// Why a view request was redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    SignInRequired,
    NoInputData,
}

impl RedirectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RedirectReason::SignInRequired => "Please sign in to continue.",
            RedirectReason::NoInputData => {
                "No soil data found. Please enter your soil and climate parameters first."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render,
    Redirect { to: View, reason: RedirectReason },
}

/// A navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub view: View,
}

const PUBLIC_LINKS: [NavLink; 3] = [
    NavLink { label: "Home", view: View::Home },
    NavLink { label: "Login", view: View::Login },
    NavLink { label: "Register", view: View::Register },
];

const SIGNED_IN_LINKS: [NavLink; 3] = [
    NavLink { label: "Dashboard", view: View::Dashboard },
    NavLink { label: "Input Data", view: View::Input },
    NavLink { label: "Recommendations", view: View::Recommendations },
];

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::Login => "/login",
            View::Register => "/register",
            View::Dashboard => "/dashboard",
            View::Input => "/input",
            View::Recommendations => "/recommendations",
            View::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "CropWise",
            View::Login => "Welcome back",
            View::Register => "Create an account",
            View::Dashboard => "Farm Dashboard",
            View::Input => "Soil & Climate Data",
            View::Recommendations => "Crop Recommendations",
            View::NotFound => "Page not found",
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, View::Dashboard | View::Input | View::Recommendations)
    }

    /// Unknown paths map to [`View::NotFound`]. A trailing slash is ignored.
    pub fn from_path(path: &str) -> View {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => View::Home,
            "/login" => View::Login,
            "/register" => View::Register,
            "/dashboard" => View::Dashboard,
            "/input" => View::Input,
            "/recommendations" => View::Recommendations,
            _ => View::NotFound,
        }
    }

    /// Links shown in the navigation bar for `session`.
    pub fn nav_links(session: &Session) -> &'static [NavLink] {
        if session.is_signed_in() {
            &SIGNED_IN_LINKS
        } else {
            &PUBLIC_LINKS
        }
    }
}

/// Decide whether `view` renders for this session and saved-input state.
pub fn resolve(view: View, session: &Session, has_saved_input: bool) -> Navigation {
    if view.requires_session() && !session.is_signed_in() {
        log::debug!("redirecting {} to login", view.path());
        return Navigation::Redirect {
            to: View::Login,
            reason: RedirectReason::SignInRequired,
        };
    }
    if view == View::Recommendations && !has_saved_input {
        log::debug!("no saved input, redirecting to {}", View::Input.path());
        return Navigation::Redirect {
            to: View::Input,
            reason: RedirectReason::NoInputData,
        };
    }
    Navigation::Render
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{login, Credentials};
    use crate::field::FieldId;
    use crate::form::FormController;
    use crate::session::{MemoryStore, SessionTransfer};

    fn signed_in() -> Session {
        login(&Credentials::new("grower@example.com", "pw")).unwrap()
    }

    #[test]
    fn paths_round_trip() {
        for view in [
            View::Home,
            View::Login,
            View::Register,
            View::Dashboard,
            View::Input,
            View::Recommendations,
        ] {
            assert_eq!(View::from_path(view.path()), view);
        }
        assert_eq!(View::from_path("/input/"), View::Input);
        assert_eq!(View::from_path("/login?next=/input"), View::Login);
        assert_eq!(View::from_path("/nope"), View::NotFound);
    }

    #[test]
    fn anonymous_visitors_are_sent_to_login() {
        let anon = Session::Anonymous;
        assert_eq!(resolve(View::Home, &anon, false), Navigation::Render);
        assert_eq!(resolve(View::Register, &anon, false), Navigation::Render);
        for view in [View::Dashboard, View::Input, View::Recommendations] {
            assert_eq!(
                resolve(view, &anon, true),
                Navigation::Redirect {
                    to: View::Login,
                    reason: RedirectReason::SignInRequired
                }
            );
        }
    }

    #[test]
    fn recommendations_without_data_redirect_to_input() {
        let session = signed_in();
        assert_eq!(
            resolve(View::Recommendations, &session, false),
            Navigation::Redirect {
                to: View::Input,
                reason: RedirectReason::NoInputData
            }
        );
        assert_eq!(resolve(View::Recommendations, &session, true), Navigation::Render);
        assert_eq!(resolve(View::Input, &session, false), Navigation::Render);
    }

    #[test]
    fn submitted_form_unlocks_recommendations_with_the_same_record() {
        let session = signed_in();
        let transfer = SessionTransfer::new(MemoryStore::default());

        // Nothing saved yet: the guard sends the visitor to the input form.
        assert_eq!(
            resolve(View::Recommendations, &session, transfer.has_record()),
            Navigation::Redirect {
                to: View::Input,
                reason: RedirectReason::NoInputData
            }
        );

        let mut form = FormController::new();
        form.set(FieldId::Location, "Fresno, CA");
        form.set(FieldId::SoilType, "loamy");
        let mut submitted = None;
        form.submit(|record| {
            transfer.save(&record).unwrap();
            submitted = Some(record);
        })
        .unwrap();
        let submitted = submitted.unwrap();
        assert_eq!(submitted.nitrogen.get(), 40.0);
        assert_eq!(submitted.ph.get(), 6.5);
        assert_eq!(submitted.rainfall.get(), 100.0);

        assert_eq!(
            resolve(View::Recommendations, &session, transfer.has_record()),
            Navigation::Render
        );
        assert_eq!(transfer.load().unwrap(), Some(submitted));
    }

    #[test]
    fn nav_links_follow_the_session() {
        assert_eq!(View::nav_links(&Session::Anonymous)[0].view, View::Home);
        let links = View::nav_links(&signed_in());
        assert_eq!(
            links.iter().map(|l| l.label).collect::<Vec<_>>(),
            vec!["Dashboard", "Input Data", "Recommendations"]
        );
    }
}
