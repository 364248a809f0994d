//! Admin route table: which permission each back-office path needs.

use crate::{
    permissions::{Permission, PermissionRequirement},
    utils::navigation::{LOGIN_PATH, NOT_FOUND_PATH},
};

pub const DEFAULT_ADMIN_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected(PermissionRequirement),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    /// Segments starting with `:` match any value; a trailing `?` makes the
    /// segment optional.
    pub pattern: &'static str,
    pub access: RouteAccess,
}

impl RouteRule {
    fn public(pattern: &'static str) -> Self {
        Self {
            pattern,
            access: RouteAccess::Public,
        }
    }

    fn protected(pattern: &'static str, permission: Permission) -> Self {
        Self {
            pattern,
            access: RouteAccess::Protected(PermissionRequirement::single(permission)),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        let mut pattern = segments(self.pattern);
        let mut actual = segments(path);
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return true,
                (Some(p), None) => return p.ends_with('?') && pattern.next().is_none(),
                (None, Some(_)) => return false,
                (Some(p), Some(a)) => {
                    if !p.starts_with(':') && p != a {
                        return false;
                    }
                }
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

pub fn admin_route_rules() -> Vec<RouteRule> {
    vec![
        RouteRule::public(LOGIN_PATH),
        RouteRule::public(NOT_FOUND_PATH),
        RouteRule::protected(DEFAULT_ADMIN_PATH, Permission::DashboardView),
        RouteRule::protected("/challenge", Permission::ChallengeView),
        RouteRule::protected("/challenge/list", Permission::ChallengeView),
        RouteRule::protected("/challenge/edit/:id?", Permission::ChallengeUpdate),
        RouteRule::protected("/config", Permission::ConfigView),
        RouteRule::protected("/config/list", Permission::ConfigView),
        RouteRule::protected("/config/edit/:id?", Permission::ConfigUpdate),
        RouteRule::protected("/user", Permission::UserView),
        RouteRule::protected("/settings", Permission::SettingsView),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Rule(RouteRule),
    /// `/` goes to the dashboard.
    Redirect(&'static str),
    NotFound,
}

pub fn resolve(rules: &[RouteRule], path: &str) -> Resolved {
    if segments(path).next().is_none() {
        return Resolved::Redirect(DEFAULT_ADMIN_PATH);
    }
    rules
        .iter()
        .find(|rule| rule.matches(path))
        .cloned()
        .map(Resolved::Rule)
        .unwrap_or(Resolved::NotFound)
}
