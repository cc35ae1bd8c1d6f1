use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier of the acting user.
///
/// Roles are opaque strings at this layer (whatever the host's user directory
/// hands over). Only `admin` and `manager` carry meaning here: they are the
/// elevated roles allowed to validate records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub const ADMIN: Role = Role(Cow::Borrowed("admin"));
    pub const MANAGER: Role = Role(Cow::Borrowed("manager"));
    pub const BARTENDER: Role = Role(Cow::Borrowed("bartender"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Elevated roles write records as validated.
    pub fn is_elevated(&self) -> bool {
        let name = self.as_str().trim();
        name.eq_ignore_ascii_case("admin") || name.eq_ignore_ascii_case("manager")
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
