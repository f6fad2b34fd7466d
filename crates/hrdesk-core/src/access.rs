//! Role-based route and record visibility.
//!
//! These are pure decisions over a user (or session state) and a route.
//! Acting on a decision, by redirecting or refusing, is left to the caller.
//! The checks are advisory; the backend enforces authorization on its own.

use crate::session::SessionState;
use crate::types::{Employee, Role, User};

/// Where unauthenticated users are sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Where users are sent when their role may not see a route.
pub const LANDING_ROUTE: &str = "/dashboard";

const ALL_ROLES: &[Role] = &[Role::Hr, Role::Finance, Role::Employee];

/// A protected route and the roles permitted to use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub label: &'static str,
    pub path: &'static str,
    pub allowed_roles: &'static [Role],
}

impl Route {
    /// True if `path` is this route or lies beneath it.
    fn covers(&self, path: &str) -> bool {
        path.strip_prefix(self.path)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }
}

/// The navigation table. Nested paths inherit the nearest declared route.
pub const ROUTES: &[Route] = &[
    Route {
        label: "Dashboard",
        path: "/dashboard",
        allowed_roles: ALL_ROLES,
    },
    Route {
        label: "Employees",
        path: "/dashboard/employees",
        allowed_roles: &[Role::Hr],
    },
    Route {
        label: "Documents",
        path: "/dashboard/documents",
        allowed_roles: &[Role::Hr, Role::Employee],
    },
    Route {
        label: "Payslips",
        path: "/dashboard/payslips",
        allowed_roles: ALL_ROLES,
    },
    Route {
        label: "HR Assistant",
        path: "/dashboard/assistant",
        allowed_roles: &[Role::Hr],
    },
    Route {
        label: "Profile",
        path: "/dashboard/profile",
        allowed_roles: ALL_ROLES,
    },
    Route {
        label: "Settings",
        path: "/dashboard/settings",
        allowed_roles: ALL_ROLES,
    },
];

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The session is still being restored; decide nothing yet.
    Pending,
    /// Access is allowed.
    Granted,
    /// Nobody is logged in; send them to [`LOGIN_ROUTE`].
    Unauthenticated,
    /// The user's role is not permitted; send them to [`LANDING_ROUTE`].
    Forbidden,
}

impl AccessDecision {
    /// The route to navigate to instead, if access was refused.
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            AccessDecision::Unauthenticated => Some(LOGIN_ROUTE),
            AccessDecision::Forbidden => Some(LANDING_ROUTE),
            AccessDecision::Pending | AccessDecision::Granted => None,
        }
    }
}

/// True iff the user's role is one the route allows.
pub fn is_permitted(user: &User, route: &Route) -> bool {
    route.allowed_roles.contains(&user.role)
}

/// The most specific declared route covering `path`.
///
/// A trailing slash is ignored, so `/dashboard/employees/` and
/// `/dashboard/employees/42/edit` both resolve to the employees route.
pub fn route_for(path: &str) -> Option<&'static Route> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };

    ROUTES
        .iter()
        .filter(|route| route.covers(path))
        .max_by_key(|route| route.path.len())
}

/// Decide whether the session may use `route`.
pub fn authorize(state: &SessionState, route: &Route) -> AccessDecision {
    match state {
        SessionState::Initializing => AccessDecision::Pending,
        SessionState::Unauthenticated => AccessDecision::Unauthenticated,
        SessionState::Authenticated { user, .. } if is_permitted(user, route) => {
            AccessDecision::Granted
        }
        SessionState::Authenticated { .. } => AccessDecision::Forbidden,
    }
}

/// Navigation entries the user may see.
pub fn visible_routes(user: &User) -> impl Iterator<Item = &'static Route> + '_ {
    ROUTES.iter().filter(move |route| is_permitted(user, route))
}

/// True if the user may see this employee's record and payslip.
///
/// HR and finance see everyone; employees see only themselves.
pub fn can_view_employee_record(user: &User, employee: &Employee) -> bool {
    match user.role {
        Role::Hr | Role::Finance => true,
        Role::Employee => employee.email.eq_ignore_ascii_case(&user.email),
    }
}

/// Narrow an employee list to the records the user may see.
pub fn scope_employees(user: &User, employees: Vec<Employee>) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee| can_view_employee_record(user, employee))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AuthToken;

    fn user(role: Role) -> User {
        User {
            username: format!("{}1", role),
            email: format!("{}@x.com", role),
            role,
        }
    }

    fn employee(id: &str, email: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: "Someone".to_string(),
            email: email.to_string(),
            role: "Engineer".to_string(),
            date_of_birth: "1990-01-01".to_string(),
            salary: "50000".to_string(),
            address: "1 Main St".to_string(),
            phone_number: "555-0100".to_string(),
            document_id: None,
        }
    }

    fn route(path: &str) -> &'static Route {
        route_for(path).unwrap()
    }

    #[test]
    fn gate_holds_for_every_route_and_role() {
        for route in ROUTES {
            for role in Role::ALL {
                let u = user(role);
                let state = SessionState::Authenticated {
                    user: u.clone(),
                    token: AuthToken::new("t"),
                };
                let expected = route.allowed_roles.contains(&role);

                assert_eq!(is_permitted(&u, route), expected, "{} / {}", route.path, role);
                assert_eq!(
                    authorize(&state, route) == AccessDecision::Granted,
                    expected,
                    "{} / {}",
                    route.path,
                    role
                );
            }
        }
    }

    #[test]
    fn employee_denied_employee_management() {
        let state = SessionState::Authenticated {
            user: user(Role::Employee),
            token: AuthToken::new("t"),
        };
        let decision = authorize(&state, route("/dashboard/employees"));
        assert_eq!(decision, AccessDecision::Forbidden);
        assert_eq!(decision.redirect_target(), Some(LANDING_ROUTE));
    }

    #[test]
    fn finance_cannot_see_documents_or_assistant() {
        let finance = user(Role::Finance);
        assert!(!is_permitted(&finance, route("/dashboard/documents")));
        assert!(!is_permitted(&finance, route("/dashboard/assistant")));
        assert!(is_permitted(&finance, route("/dashboard/payslips")));
    }

    #[test]
    fn loading_session_decides_nothing() {
        let decision = authorize(&SessionState::Initializing, route("/dashboard"));
        assert_eq!(decision, AccessDecision::Pending);
        assert_eq!(decision.redirect_target(), None);
    }

    #[test]
    fn logged_out_session_goes_to_login() {
        let decision = authorize(&SessionState::Unauthenticated, route("/dashboard/profile"));
        assert_eq!(decision, AccessDecision::Unauthenticated);
        assert_eq!(decision.redirect_target(), Some(LOGIN_ROUTE));
    }

    #[test]
    fn nested_paths_inherit_their_parent_route() {
        assert_eq!(route("/dashboard/employees/new").path, "/dashboard/employees");
        assert_eq!(route("/dashboard/employees/42/upload-cv").path, "/dashboard/employees");
        assert_eq!(route("/dashboard/payslips/42").path, "/dashboard/payslips");
        assert_eq!(route("/dashboard/").path, "/dashboard");
    }

    #[test]
    fn similar_prefixes_do_not_match() {
        assert_eq!(route("/dashboard/employeesx").path, "/dashboard");
        assert!(route_for("/login").is_none());
        assert!(route_for("/").is_none());
    }

    #[test]
    fn sidebar_for_each_role() {
        let labels = |role| {
            visible_routes(&user(role))
                .map(|r| r.label)
                .collect::<Vec<_>>()
        };

        assert_eq!(labels(Role::Hr).len(), ROUTES.len());
        assert_eq!(
            labels(Role::Finance),
            vec!["Dashboard", "Payslips", "Profile", "Settings"]
        );
        assert_eq!(
            labels(Role::Employee),
            vec!["Dashboard", "Documents", "Payslips", "Profile", "Settings"]
        );
    }

    #[test]
    fn employees_only_see_their_own_record() {
        let all = vec![
            employee("1", "employee@x.com"),
            employee("2", "someone.else@x.com"),
        ];

        let own = scope_employees(&user(Role::Employee), all.clone());
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].id, "1");

        assert_eq!(scope_employees(&user(Role::Finance), all.clone()).len(), 2);
        assert_eq!(scope_employees(&user(Role::Hr), all).len(), 2);
    }
}
