use crate::config::PageConfig;

use super::AuthPolicy;

/// A static route table entry: which page file a path renders and the
/// auth policy gating entry to it.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    pub path: String,
    pub page: String,
    pub policy: AuthPolicy,
}

/// The immutable route table, built once from configuration at startup.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new(pages: &[PageConfig]) -> Self {
        let routes = pages
            .iter()
            .map(|page| RouteDescriptor {
                path: page.path.clone(),
                page: page.page.clone(),
                policy: page.policy,
            })
            .collect();
        RouteTable { routes }
    }

    /// Exact-match lookup. The original server made no query-string or
    /// method distinctions, so neither does this.
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::new(&[
            PageConfig {
                path: "/".to_string(),
                page: "index.html".to_string(),
                policy: AuthPolicy::RequireAuth,
            },
            PageConfig {
                path: "/login".to_string(),
                page: "login.html".to_string(),
                policy: AuthPolicy::RequireNoAuth,
            },
        ])
    }

    #[test]
    fn test_find_known_path() {
        let table = table();
        let route = table.find("/login").expect("route should exist");
        assert_eq!(route.page, "login.html");
        assert_eq!(route.policy, AuthPolicy::RequireNoAuth);
    }

    #[test]
    fn test_find_unknown_path() {
        assert!(table().find("/unknown").is_none());
    }

    /// A path must match exactly; prefixes are not routes.
    #[test]
    fn test_find_is_exact() {
        assert!(table().find("/login/extra").is_none());
    }
}
