//! Role to permission policy for the back-office screens.
//!
//! The table is a plain value: build one (usually [`PermissionTable::admin_defaults`])
//! and hand it to the guard. Lookups never cache, so swapping the table
//! takes effect on the next check.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    rc::Rc,
    str::FromStr,
};

/// One capability, written as `resource:action` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    ChallengeView,
    ChallengeCreate,
    ChallengeUpdate,
    ChallengeDelete,
    UserView,
    UserCreate,
    UserUpdate,
    UserDelete,
    ConfigView,
    ConfigCreate,
    ConfigUpdate,
    ConfigDelete,
    SettingsView,
    SettingsUpdate,
    DashboardView,
}

impl Permission {
    pub const ALL: [Permission; 15] = [
        Permission::ChallengeView,
        Permission::ChallengeCreate,
        Permission::ChallengeUpdate,
        Permission::ChallengeDelete,
        Permission::UserView,
        Permission::UserCreate,
        Permission::UserUpdate,
        Permission::UserDelete,
        Permission::ConfigView,
        Permission::ConfigCreate,
        Permission::ConfigUpdate,
        Permission::ConfigDelete,
        Permission::SettingsView,
        Permission::SettingsUpdate,
        Permission::DashboardView,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Permission::ChallengeView => "challenge:view",
            Permission::ChallengeCreate => "challenge:create",
            Permission::ChallengeUpdate => "challenge:update",
            Permission::ChallengeDelete => "challenge:delete",
            Permission::UserView => "user:view",
            Permission::UserCreate => "user:create",
            Permission::UserUpdate => "user:update",
            Permission::UserDelete => "user:delete",
            Permission::ConfigView => "config:view",
            Permission::ConfigCreate => "config:create",
            Permission::ConfigUpdate => "config:update",
            Permission::ConfigDelete => "config:delete",
            Permission::SettingsView => "settings:view",
            Permission::SettingsUpdate => "settings:update",
            Permission::DashboardView => "dashboard:view",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPermission(pub String);

impl fmt::Display for UnknownPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown permission tag `{}`", self.0)
    }
}

impl std::error::Error for UnknownPermission {}

impl FromStr for Permission {
    type Err = UnknownPermission;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.tag() == tag)
            .ok_or_else(|| UnknownPermission(tag.to_string()))
    }
}

pub mod roles {
    pub const SUPER_ADMIN: i32 = 1;
    pub const ADMIN: i32 = 2;
    pub const BASIC: i32 = 3;
}

/// Tags a screen asks for. An empty requirement is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionRequirement {
    AllOf(Vec<Permission>),
    AnyOf(Vec<Permission>),
}

impl PermissionRequirement {
    pub fn none() -> Self {
        PermissionRequirement::AllOf(Vec::new())
    }

    pub fn single(permission: Permission) -> Self {
        PermissionRequirement::AllOf(vec![permission])
    }

    pub fn all_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        PermissionRequirement::AllOf(permissions.into_iter().collect())
    }

    pub fn any_of(permissions: impl IntoIterator<Item = Permission>) -> Self {
        PermissionRequirement::AnyOf(permissions.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PermissionRequirement::AllOf(p) | PermissionRequirement::AnyOf(p) => p.is_empty(),
        }
    }
}

impl Default for PermissionRequirement {
    fn default() -> Self {
        Self::none()
    }
}

impl From<Permission> for PermissionRequirement {
    fn from(permission: Permission) -> Self {
        Self::single(permission)
    }
}

/// Immutable role to permission-set mapping. Cloning shares the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionTable {
    roles: Rc<HashMap<i32, HashSet<Permission>>>,
}

impl PermissionTable {
    pub fn builder() -> PermissionTableBuilder {
        PermissionTableBuilder::default()
    }

    /// Super admin holds everything, admin can view and edit but not delete
    /// (users also not create), basic users only see challenges and the dashboard.
    pub fn admin_defaults() -> Self {
        use Permission::*;
        Self::builder()
            .role(roles::SUPER_ADMIN, Permission::ALL)
            .role(
                roles::ADMIN,
                [
                    ChallengeView,
                    ChallengeCreate,
                    ChallengeUpdate,
                    UserView,
                    UserUpdate,
                    ConfigView,
                    ConfigUpdate,
                    DashboardView,
                ],
            )
            .role(roles::BASIC, [ChallengeView, DashboardView])
            .build()
    }

    /// Unknown roles hold nothing.
    pub fn permissions_for(&self, role: i32) -> Vec<Permission> {
        let mut granted: Vec<Permission> = self
            .roles
            .get(&role)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        granted.sort();
        granted
    }

    pub fn check_permission(&self, role: i32, permission: Permission) -> bool {
        self.roles
            .get(&role)
            .is_some_and(|set| set.contains(&permission))
    }

    pub fn has_any(&self, role: i32, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.check_permission(role, *p))
    }

    pub fn has_all(&self, role: i32, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.check_permission(role, *p))
    }

    /// `role` is `None` for sessions without a profile; they only pass
    /// empty requirements.
    pub fn satisfies(&self, role: Option<i32>, requirement: &PermissionRequirement) -> bool {
        if requirement.is_empty() {
            return true;
        }
        let Some(role) = role else {
            return false;
        };
        match requirement {
            PermissionRequirement::AllOf(p) => self.has_all(role, p),
            PermissionRequirement::AnyOf(p) => self.has_any(role, p),
        }
    }
}

#[derive(Debug, Default)]
pub struct PermissionTableBuilder {
    roles: HashMap<i32, HashSet<Permission>>,
}

impl PermissionTableBuilder {
    /// Adds `permissions` to `role`, merging with anything granted earlier.
    pub fn role(mut self, role: i32, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.roles.entry(role).or_default().extend(permissions);
        self
    }

    pub fn build(self) -> PermissionTable {
        PermissionTable {
            roles: Rc::new(self.roles),
        }
    }
}
