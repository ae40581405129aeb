//! Authenticated-user state shared by the admin views

use crate::user::AdminUser;

/// Single source of truth for who is signed in.
///
/// The session cookie itself stays opaque to the client; this only mirrors
/// what `/auth/me` and `/auth/update-profile` reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<AdminUser>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// `/auth/me` confirmed the session
    Authenticated(AdminUser),
    /// Profile update returned the new user
    ProfileUpdated(AdminUser),
    SignedOut,
}

impl SessionState {
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::Authenticated(user) | SessionAction::ProfileUpdated(user) => {
                self.user = Some(user)
            }
            SessionAction::SignedOut => self.user = None,
        }
    }

    pub fn user(&self) -> Option<&AdminUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_superadmin(&self) -> bool {
        self.user.as_ref().is_some_and(AdminUser::is_superadmin)
    }

    /// Whether the delete control is shown next to `target`.
    pub fn can_offer_delete(&self, target: &AdminUser) -> bool {
        target.deletable_by(self.user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::tests::user;
    use crate::user::Role;

    #[test]
    fn test_lifecycle() {
        let mut session = SessionState::default();
        assert!(!session.is_authenticated());

        session.apply(SessionAction::Authenticated(user("u1", "rina", Role::Superadmin)));
        assert!(session.is_superadmin());

        let mut renamed = user("u1", "rina", Role::Superadmin);
        renamed.name = "Rina Putri".into();
        session.apply(SessionAction::ProfileUpdated(renamed));
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Rina Putri"));

        session.apply(SessionAction::SignedOut);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_delete_hints_follow_session_user() {
        let mut session = SessionState::default();
        session.apply(SessionAction::Authenticated(user("u1", "rina", Role::Admin)));
        assert!(!session.can_offer_delete(&user("u1", "rina", Role::Admin)));
        assert!(!session.can_offer_delete(&user("u0", "root", Role::Superadmin)));
        assert!(session.can_offer_delete(&user("u2", "budi", Role::Admin)));
    }
}
