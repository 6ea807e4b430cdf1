use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{Dashboard, Login, NotFound, Settings, Tenants};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login")]
    Login {},

    #[layout(Layout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/tenants")]
        Tenants {},
        #[route("/settings")]
        Settings {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::NAVIGATION;

    #[test]
    fn test_menu_paths_are_routes() {
        for entry in NAVIGATION.iter() {
            let route: Route = entry.path.parse().unwrap_or_else(|_| panic!("{}", entry.path));
            assert_eq!(route.to_string(), entry.path);
        }
    }

    #[test]
    fn test_login_route_is_outside_menu() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(crate::navigation::page_title("/login"), "");
    }
}
