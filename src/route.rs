//! Routes between the input form and the menu display.

use std::fmt;

/// A place the app can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// The menu input form.
    #[default]
    MenuInput,
    /// The generated menu.
    MenuDisplay,
}

impl Route {
    /// Returns the path for this route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::MenuInput => "/",
            Self::MenuDisplay => "/menu",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_path())
    }
}

/// Moves the user to another route.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Records every navigation, newest last.
impl Navigator for Vec<Route> {
    fn navigate(&mut self, route: Route) {
        self.push(route);
    }
}
