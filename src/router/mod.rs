//! Route table and navigation guard.
//!
//! Routes are declared statically; access rules are explicit per-leaf
//! [`AccessPolicy`] values — there is no metadata inheritance, every route
//! states its own policy.
//!
//! A navigation attempt moves through guard evaluation to exactly one
//! terminal outcome: committed, redirected to `/login` (unauthenticated on
//! an auth-requiring route), or redirected to `/` (authenticated but not in
//! the route's role allow-list). The checks run strictly in sequence against
//! a single session snapshot. Rapid successive navigation attempts are
//! independent: nothing orders one attempt's outcome against another's, a
//! known gap inherited from the observed product behavior and deliberately
//! left as-is.

use crate::session::SessionSnapshot;

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// No requirements.
    Public,
    /// A session token must be present.
    Authenticated,
    /// A token must be present and the user's role must be in the list.
    Roles(&'static [&'static str]),
}

/// One node of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub policy: AccessPolicy,
}

/// The console's route surface.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/login",
        name: "Login",
        policy: AccessPolicy::Public,
    },
    Route {
        path: "/",
        name: "Dashboard",
        policy: AccessPolicy::Authenticated,
    },
    Route {
        path: "/auth/users",
        name: "Users",
        policy: AccessPolicy::Roles(&["admin", "superuser"]),
    },
    Route {
        path: "/oauth/callback",
        name: "OAuthCallback",
        policy: AccessPolicy::Public,
    },
    Route {
        path: "/system/oauth",
        name: "SystemOAuth",
        policy: AccessPolicy::Roles(&["superuser"]),
    },
    Route {
        path: "/sync/ldap-configs",
        name: "LdapConfigs",
        policy: AccessPolicy::Authenticated,
    },
    Route {
        path: "/sync/configs",
        name: "SyncConfigs",
        policy: AccessPolicy::Authenticated,
    },
    Route {
        path: "/sync/logs",
        name: "SyncLogs",
        policy: AccessPolicy::Authenticated,
    },
];

/// Terminal outcome of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The transition is allowed; render the target route.
    Committed(&'static Route),
    /// Authentication required and no token present.
    RedirectToLogin,
    /// Authenticated but not authorized for the target.
    RedirectHome,
    /// No route matches the requested path.
    NotFound,
}

/// Look up a route by exact path.
pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

/// Evaluate the guard for one route against one session snapshot.
///
/// The two checks run in order with no early exit past a terminal outcome:
/// token presence first, then role membership. A missing user snapshot
/// fails the role check — role-gated routes stay closed until hydration has
/// produced a user.
pub fn guard(route: &'static Route, session: &SessionSnapshot) -> Navigation {
    let requires_auth = !matches!(route.policy, AccessPolicy::Public);
    if requires_auth && session.token.is_none() {
        return Navigation::RedirectToLogin;
    }

    if let AccessPolicy::Roles(allowed) = route.policy {
        let permitted = match session.role() {
            Some(role) => allowed.contains(&role),
            None => false,
        };
        if !permitted {
            return Navigation::RedirectHome;
        }
    }

    Navigation::Committed(route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::SessionSnapshot;

    fn snapshot(token: Option<&str>, role: Option<&str>) -> SessionSnapshot {
        let user = role.map(|role| -> User {
            serde_json::from_value(serde_json::json!({
                "id": "u-1",
                "username": "alice",
                "role": role,
                "is_active": true,
                "date_joined": "2024-01-01T00:00:00Z"
            }))
            .unwrap()
        });
        SessionSnapshot {
            token: token.map(String::from),
            user,
        }
    }

    fn route(path: &str) -> &'static Route {
        resolve(path).expect("route must exist")
    }

    #[test]
    fn test_public_route_commits_without_token() {
        let nav = guard(route("/login"), &snapshot(None, None));
        assert_eq!(nav, Navigation::Committed(route("/login")));
    }

    #[test]
    fn test_auth_route_without_token_redirects_to_login() {
        let nav = guard(route("/"), &snapshot(None, None));
        assert_eq!(nav, Navigation::RedirectToLogin);
    }

    #[test]
    fn test_auth_route_with_token_commits() {
        let nav = guard(route("/sync/logs"), &snapshot(Some("tok"), Some("user")));
        assert_eq!(nav, Navigation::Committed(route("/sync/logs")));
    }

    #[test]
    fn test_role_route_rejects_wrong_role() {
        // roles: ["superuser"], current role "admin" -> home
        let nav = guard(route("/system/oauth"), &snapshot(Some("tok"), Some("admin")));
        assert_eq!(nav, Navigation::RedirectHome);
    }

    #[test]
    fn test_role_route_accepts_member_role() {
        // roles: ["admin", "superuser"], current role "admin" -> commit
        let nav = guard(route("/auth/users"), &snapshot(Some("tok"), Some("admin")));
        assert_eq!(nav, Navigation::Committed(route("/auth/users")));
    }

    #[test]
    fn test_role_route_without_token_prefers_login_redirect() {
        // Token check runs before the role check.
        let nav = guard(route("/auth/users"), &snapshot(None, None));
        assert_eq!(nav, Navigation::RedirectToLogin);
    }

    #[test]
    fn test_role_route_without_hydrated_user_redirects_home() {
        // Token present but hydration produced no user: the role check
        // cannot pass.
        let nav = guard(route("/auth/users"), &snapshot(Some("tok"), None));
        assert_eq!(nav, Navigation::RedirectHome);
    }

    #[test]
    fn test_unknown_path_resolves_to_none() {
        assert!(resolve("/nope").is_none());
    }

    #[test]
    fn test_every_route_declares_its_own_policy() {
        // No inheritance: each leaf in the table carries a policy, and the
        // table covers the whole console surface.
        let paths: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            [
                "/login",
                "/",
                "/auth/users",
                "/oauth/callback",
                "/system/oauth",
                "/sync/ldap-configs",
                "/sync/configs",
                "/sync/logs"
            ]
        );
    }
}
