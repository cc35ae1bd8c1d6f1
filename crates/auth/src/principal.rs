use serde::{Deserialize, Serialize};

use barkeep_core::{ReviewStatus, UserId};

use crate::Role;

/// The user acting in a form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
}

impl Principal {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }

    /// Status a record receives when this principal saves it.
    ///
    /// Elevated roles write `Validated` directly; everyone else always
    /// produces `Draft`, even when editing a record that was validated.
    pub fn save_status(&self) -> ReviewStatus {
        if self.role.is_elevated() {
            ReviewStatus::Validated
        } else {
            ReviewStatus::Draft
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_status_is_role_gated() {
        let admin = Principal::new(UserId::new(), Role::ADMIN);
        let staff = Principal::new(UserId::new(), Role::BARTENDER);

        assert_eq!(admin.save_status(), ReviewStatus::Validated);
        assert_eq!(staff.save_status(), ReviewStatus::Draft);
    }
}
