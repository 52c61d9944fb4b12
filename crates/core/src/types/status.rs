//! Status and role enums for platform entities.
//!
//! Every enum carries `Display`/`FromStr` pairs matching its wire string,
//! because the admin API validates enum fields at the edge and stores them
//! as text columns.

use serde::{Deserialize, Serialize};

/// Account type for platform users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Delivery driver.
    Driver,
    /// Shop member without a full shop account.
    Shop,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Driver => write!(f, "driver"),
            Self::Shop => write!(f, "shop"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(Self::Driver),
            "shop" => Ok(Self::Shop),
            _ => Err(format!("invalid user type: {s}")),
        }
    }
}

/// Lifecycle status of a shop account.
///
/// New shop accounts start as `Pending` until approved; only `Active`
/// accounts may log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShopStatus {
    Active,
    Inactive,
    #[default]
    Pending,
}

impl std::fmt::Display for ShopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
            Self::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for ShopStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            _ => Err(format!("invalid shop status: {s}")),
        }
    }
}

/// Importance level of an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Importance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("invalid importance: {s}")),
        }
    }
}

/// Principal type requested at login.
///
/// Matches the `loginType` field of `POST /api/auth/login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginType {
    /// Dashboard operator (the only principal issued API session tokens).
    Admin,
    /// Delivery driver.
    Driver,
    /// Shop account.
    Shop,
}

impl std::fmt::Display for LoginType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Driver => write!(f, "driver"),
            Self::Shop => write!(f, "shop"),
        }
    }
}

impl std::str::FromStr for LoginType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "driver" => Ok(Self::Driver),
            "shop" => Ok(Self::Shop),
            _ => Err(format!("invalid login type: {s}")),
        }
    }
}

/// Admin role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full access including admin user management.
    SuperAdmin,
    /// Full access to platform data.
    #[default]
    Admin,
    /// Read-only access.
    Viewer,
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "super_admin"),
            Self::Admin => write!(f, "admin"),
            Self::Viewer => write!(f, "viewer"),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "viewer" => Ok(Self::Viewer),
            _ => Err(format!("invalid admin role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_roundtrip() {
        for s in ["driver", "shop"] {
            let parsed: UserType = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("manager".parse::<UserType>().is_err());
    }

    #[test]
    fn test_shop_status_roundtrip() {
        for s in ["active", "inactive", "pending"] {
            let parsed: ShopStatus = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("closed".parse::<ShopStatus>().is_err());
    }

    #[test]
    fn test_shop_status_default_is_pending() {
        assert_eq!(ShopStatus::default(), ShopStatus::Pending);
    }

    #[test]
    fn test_importance_roundtrip() {
        for s in ["low", "medium", "high"] {
            let parsed: Importance = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("urgent".parse::<Importance>().is_err());
    }

    #[test]
    fn test_login_type_serde() {
        let parsed: LoginType = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(parsed, LoginType::Admin);
    }

    #[test]
    fn test_admin_role_roundtrip() {
        for s in ["super_admin", "admin", "viewer"] {
            let parsed: AdminRole = s.parse().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
    }
}
