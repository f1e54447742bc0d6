use serde::{Deserialize, Serialize};

/// Backend user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Which area of the app a signed-in user lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Vendor,
    Customer,
}

/// Account details as returned by the login and contacts endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_vendor: bool,
    #[serde(default)]
    pub image: String,
}

impl User {
    /// Admin takes precedence over vendor.
    pub fn role(&self) -> UserRole {
        if self.is_admin {
            UserRole::Admin
        } else if self.is_vendor {
            UserRole::Vendor
        } else {
            UserRole::Customer
        }
    }

    /// Full name, or the username when no name is on file.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}
