//! Holder of the onboarded user's profile.

use crate::profile::{ProfileUpdate, UserProfile};

/// Receives the finished profile from onboarding and serves later edits.
///
/// Constructed once by the caller and passed by `&mut` to whatever needs it.
pub trait UserStore {
    fn set_user(&mut self, profile: UserProfile);

    fn set_onboarded(&mut self, onboarded: bool);

    fn user(&self) -> Option<&UserProfile>;

    fn is_onboarded(&self) -> bool;

    /// Shallow-merge `update` into the stored profile.
    ///
    /// Returns `false` without doing anything when no user is stored.
    fn update_profile(&mut self, update: ProfileUpdate) -> bool;
}

/// Process-local [`UserStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    user: Option<UserProfile>,
    onboarded: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn set_user(&mut self, profile: UserProfile) {
        tracing::debug!(user_id = %profile.id, "user profile stored");
        self.user = Some(profile);
    }

    fn set_onboarded(&mut self, onboarded: bool) {
        self.onboarded = onboarded;
    }

    fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn is_onboarded(&self) -> bool {
        self.onboarded
    }

    fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        match self.user.as_mut() {
            Some(user) => {
                update.apply_to(user);
                true
            }
            None => false,
        }
    }
}
