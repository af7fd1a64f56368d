//! Top-level routes of the application
//!
//! Four fixed paths, each mapped to one page. There are no parameters,
//! redirects or guards.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Auth,
    Dashboard,
    Calendar,
    Kanban,
}

impl Route {
    /// All routes in sidebar order
    pub const ALL: [Route; 4] = [Route::Auth, Route::Dashboard, Route::Calendar, Route::Kanban];

    pub fn path(self) -> &'static str {
        match self {
            Route::Auth => "/",
            Route::Dashboard => "/dashboard",
            Route::Calendar => "/calendar",
            Route::Kanban => "/kanban",
        }
    }

    /// Page heading
    pub fn title(self) -> &'static str {
        match self {
            Route::Auth => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::Calendar => "Calendar",
            Route::Kanban => "Task Board",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.path() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown path '{}'. Valid paths are: /, /dashboard, /calendar, /kanban",
                    s
                )
            })
    }
}
