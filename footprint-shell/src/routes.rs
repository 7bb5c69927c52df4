/// Routed pages of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    EmissionsMetrics,
    Recommendations,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::EmissionsMetrics => "Emissions Metrics",
            Page::Recommendations => "Recommendations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub page: Page,
    /// Exact routes match the pattern literally; the rest match by prefix.
    pub exact: bool,
}

/// Ordered path-pattern table. Exact matches win over prefix matches;
/// unknown paths fall back to the home page.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn footprint_routes() -> Self {
        Self {
            routes: vec![
                Route {
                    pattern: "/",
                    page: Page::EmissionsMetrics,
                    exact: true,
                },
                Route {
                    pattern: "/recommendations",
                    page: Page::Recommendations,
                    exact: false,
                },
            ],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn resolve(&self, path: &str) -> Page {
        let path = normalize(path);
        for route in &self.routes {
            if route.exact && path == route.pattern {
                return route.page;
            }
        }
        for route in &self.routes {
            if !route.exact && path.starts_with(route.pattern) {
                return route.page;
            }
        }
        Page::EmissionsMetrics
    }
}

/// Strip query string, fragment and trailing slash so `/recommendations/`
/// and `/recommendations?x=1` resolve like `/recommendations`.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
