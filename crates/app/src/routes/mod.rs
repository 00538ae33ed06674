pub mod home;
pub mod not_found;
pub mod student;
pub mod teacher;

use dioxus::prelude::*;
use shared_types::{guard, Access, RedirectTarget, UserRole};
use shared_ui::SkeletonPage;

use crate::auth::use_auth;
use crate::components::{SiteFooter, SiteHeader};
use home::Home;
use not_found::NotFound;
use student::{StudentDashboard, StudentProfile};
use teacher::TeacherDashboard;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[layout(StudentArea)]
            #[route("/student")]
            StudentDashboard {},
            #[route("/student/profile")]
            StudentProfile {},
        #[end_layout]
        #[layout(TeacherArea)]
            #[route("/teacher")]
            TeacherDashboard {},
        #[end_layout]
    #[end_layout]
    // Legacy entry point kept for old bookmarks.
    #[redirect("/dashboard", || Route::StudentDashboard {})]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Route a refused visitor is sent to.
pub fn redirect_route(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::Home => Route::Home {},
    }
}

/// Landing route of a role's portal.
pub fn portal_route(role: UserRole) -> Route {
    match role {
        UserRole::Student => Route::StudentDashboard {},
        UserRole::Teacher => Route::TeacherDashboard {},
    }
}

/// Header, page body and footer around every public and portal page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "site",
            SiteHeader {}
            main { class: "site-main",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}

/// Evaluate the role guard before any child page is constructed.
///
/// Nothing is decided until the stored record has been read, so a
/// signed-in visitor reloading a portal page is not bounced home.
fn role_gate(required: UserRole) -> Element {
    let auth = use_auth();

    if !auth.is_ready() {
        return rsx! {
            div { class: "container", SkeletonPage {} }
        };
    }

    let session = *auth.session.read();
    match guard(&session, required) {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::Redirect(target) => {
            tracing::debug!(
                required = required.as_str(),
                to = target.path(),
                "guard redirect"
            );
            navigator().replace(redirect_route(target));
            rsx! {}
        }
    }
}

#[component]
fn StudentArea() -> Element {
    role_gate(UserRole::Student)
}

#[component]
fn TeacherArea() -> Element {
    role_gate(UserRole::Teacher)
}
