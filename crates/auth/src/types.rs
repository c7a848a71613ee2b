//! Role type shared by tokens, the role gate and the user collection

use serde::{Deserialize, Serialize};

/// User role for authorization decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Lector,
    Creador,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Lector => "lector",
            Role::Creador => "creador",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    #[mutants::skip] // Delegates to as_str()
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
