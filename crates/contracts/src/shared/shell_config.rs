//! Static configuration of the sidebar shell: geometry, routes and links.

/// Panel width in logical pixels.
pub const SIDEBAR_WIDTH_PX: f64 = 250.0;

/// Viewports at or below this width use the overlay layout.
pub const NARROW_BREAKPOINT_PX: f64 = 900.0;

pub const ROOT_ROUTE: &str = "/";
pub const DEMO_SETTINGS_ROUTE: &str = "/demo/settings";

pub const COMPANY_URL: &str = "https://ast-softpro.ru";
pub const GITHUB_REPOSITORY_URL: &str =
    "https://github.com/AlexKidd727/giga-agent-ast-softpro/tree/main";

#[derive(Clone, Debug, PartialEq)]
pub struct ShellConfig {
    pub sidebar_width_px: f64,
    pub narrow_breakpoint_px: f64,
    pub root_route: String,
    pub settings_route: String,
    pub company_url: String,
    pub github_url: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            sidebar_width_px: SIDEBAR_WIDTH_PX,
            narrow_breakpoint_px: NARROW_BREAKPOINT_PX,
            root_route: ROOT_ROUTE.to_string(),
            settings_route: DEMO_SETTINGS_ROUTE.to_string(),
            company_url: COMPANY_URL.to_string(),
            github_url: GITHUB_REPOSITORY_URL.to_string(),
        }
    }
}
