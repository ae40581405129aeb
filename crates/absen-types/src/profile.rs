//! Account settings forms

use thiserror::Error;

use crate::error::{ApiError, CONNECTION_ERROR};
use crate::user::{AdminUser, CreateUserRequest, UpdateProfileRequest};

pub const LOGIN_FAILED: &str = "Login gagal.";
pub const PROFILE_UPDATE_FAILED: &str = "Gagal memperbarui profil.";
pub const ACCOUNT_CREATE_FAILED: &str = "Gagal menambah akun.";
pub const ACCOUNT_DELETE_FAILED: &str = "Gagal menghapus akun.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Tidak ada perubahan.")]
    NothingToChange,
}

/// Contents of the profile form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub current_password: String,
    pub new_password: String,
}

impl ProfileForm {
    /// Form prefilled with the signed-in user's name.
    pub fn for_user(user: Option<&AdminUser>) -> Self {
        Self {
            name: user.map(|u| u.name.clone()).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Request carrying only what changed: the name when it differs from the
    /// session's, the password pair when a new password was typed.
    pub fn changes(
        &self,
        current: Option<&AdminUser>,
    ) -> Result<UpdateProfileRequest, ProfileError> {
        let mut body = UpdateProfileRequest::default();

        let current_name = current.map(|u| u.name.as_str());
        if !self.name.is_empty() && Some(self.name.as_str()) != current_name {
            body.name = Some(self.name.clone());
        }
        if !self.new_password.is_empty() {
            body.current_password = Some(self.current_password.clone());
            body.new_password = Some(self.new_password.clone());
        }

        if body.is_empty() {
            Err(ProfileError::NothingToChange)
        } else {
            Ok(body)
        }
    }

    /// Password fields are cleared after a successful update.
    pub fn clear_passwords(&mut self) {
        self.current_password.clear();
        self.new_password.clear();
    }

    pub fn apply(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::Name(name) => self.name = name,
            ProfileAction::CurrentPassword(value) => self.current_password = value,
            ProfileAction::NewPassword(value) => self.new_password = value,
            ProfileAction::ClearPasswords => self.clear_passwords(),
        }
    }
}

/// Edits to the profile form. Each touches only its own field, so a
/// `ClearPasswords` landing after a save keeps whatever name is typed now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    Name(String),
    CurrentPassword(String),
    NewPassword(String),
    ClearPasswords,
}

/// Admin accounts as last loaded, plus a revision bumped after every
/// successful create or delete. A load is requested whenever it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountList {
    pub users: Vec<AdminUser>,
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountsAction {
    Changed,
    Loaded(Vec<AdminUser>),
}

impl AccountList {
    pub fn apply(&mut self, action: AccountsAction) {
        match action {
            AccountsAction::Changed => self.revision += 1,
            AccountsAction::Loaded(users) => self.users = users,
        }
    }
}

/// Contents of the add-account form. Length rules belong to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAccountForm {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl NewAccountForm {
    pub fn to_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        }
    }
}

/// Inline result message under a settings form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    /// Failure notice for a settings call; transport failures get `failed`.
    pub fn from_error(e: &ApiError, failed: &str) -> Self {
        Notice::Error(e.user_message(failed, failed))
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }
}

/// Message of a failed login attempt.
pub fn login_error(e: &ApiError) -> String {
    e.user_message(CONNECTION_ERROR, LOGIN_FAILED)
}

/// Text of the confirmation prompt shown before deleting an account.
pub fn delete_prompt(username: &str) -> String {
    format!("Hapus akun \"{username}\"? Tindakan ini tidak dapat dibatalkan.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::tests::user;
    use crate::user::Role;

    #[test]
    fn test_unchanged_form_is_rejected_locally() {
        let me = user("u1", "rina", Role::Admin);
        let form = ProfileForm::for_user(Some(&me));
        assert_eq!(form.changes(Some(&me)), Err(ProfileError::NothingToChange));
        assert_eq!(
            ProfileError::NothingToChange.to_string(),
            "Tidak ada perubahan."
        );
    }

    #[test]
    fn test_blank_name_is_not_a_change() {
        let me = user("u1", "rina", Role::Admin);
        let form = ProfileForm {
            name: String::new(),
            ..Default::default()
        };
        assert_eq!(form.changes(Some(&me)), Err(ProfileError::NothingToChange));
    }

    #[test]
    fn test_name_change_only() {
        let me = user("u1", "rina", Role::Admin);
        let form = ProfileForm {
            name: "Rina Putri".into(),
            ..Default::default()
        };
        let body = form.changes(Some(&me)).unwrap();
        assert_eq!(body.name.as_deref(), Some("Rina Putri"));
        assert_eq!(body.new_password, None);
        assert_eq!(body.current_password, None);
    }

    #[test]
    fn test_password_change_sends_both_fields() {
        let me = user("u1", "rina", Role::Admin);
        let mut form = ProfileForm::for_user(Some(&me));
        form.current_password = "lama".into();
        form.new_password = "baru123".into();
        let body = form.changes(Some(&me)).unwrap();
        assert_eq!(body.name, None);
        assert_eq!(body.current_password.as_deref(), Some("lama"));
        assert_eq!(body.new_password.as_deref(), Some("baru123"));

        form.clear_passwords();
        assert!(form.current_password.is_empty() && form.new_password.is_empty());
    }

    #[test]
    fn test_current_password_alone_is_not_a_change() {
        let me = user("u1", "rina", Role::Admin);
        let mut form = ProfileForm::for_user(Some(&me));
        form.current_password = "lama".into();
        assert_eq!(form.changes(Some(&me)), Err(ProfileError::NothingToChange));
    }

    #[test]
    fn test_clearing_passwords_keeps_name_typed_during_save() {
        let me = user("u1", "rina", Role::Admin);
        let mut form = ProfileForm::for_user(Some(&me));
        form.apply(ProfileAction::CurrentPassword("lama".into()));
        form.apply(ProfileAction::NewPassword("baru123".into()));
        let submitted = form.changes(Some(&me)).unwrap();
        assert!(submitted.new_password.is_some());

        // edited while the request was in flight
        form.apply(ProfileAction::Name("Rina Putri".into()));
        form.apply(ProfileAction::ClearPasswords);

        assert_eq!(form.name, "Rina Putri");
        assert!(form.current_password.is_empty());
        assert!(form.new_password.is_empty());
    }

    #[test]
    fn test_every_account_change_bumps_revision() {
        let mut accounts = AccountList::default();
        accounts.apply(AccountsAction::Loaded(vec![
            user("a", "ani", Role::Admin),
            user("b", "budi", Role::Admin),
        ]));
        let before = accounts.revision;

        // two deletes finishing back to back must each ask for a reload
        accounts.apply(AccountsAction::Changed);
        let after_first = accounts.revision;
        accounts.apply(AccountsAction::Changed);

        assert_ne!(after_first, before);
        assert_ne!(accounts.revision, after_first);
        assert_eq!(accounts.users.len(), 2);

        accounts.apply(AccountsAction::Loaded(Vec::new()));
        assert!(accounts.users.is_empty());
        assert_eq!(accounts.revision, before + 2);
    }

    #[test]
    fn test_new_account_request_and_prompt() {
        let form = NewAccountForm {
            name: "Budi".into(),
            username: "budi".into(),
            password: "abc".into(),
        };
        let req = form.to_request();
        assert_eq!(req.username, "budi");
        assert_eq!(req.password, "abc");
        assert!(delete_prompt("budi").contains("\"budi\""));
    }

    #[test]
    fn test_notices() {
        let rejected = ApiError::Rejected(Some("Username sudah dipakai".into()));
        assert_eq!(
            Notice::from_error(&rejected, ACCOUNT_CREATE_FAILED),
            Notice::Error("Username sudah dipakai".into())
        );

        let offline = ApiError::Transport("network error".into());
        let notice = Notice::from_error(&offline, ACCOUNT_CREATE_FAILED);
        assert_eq!(notice.text(), "Gagal menambah akun.");
        assert!(!notice.is_success());

        assert_eq!(login_error(&offline), CONNECTION_ERROR);
        assert_eq!(login_error(&ApiError::Rejected(None)), LOGIN_FAILED);
    }
}
