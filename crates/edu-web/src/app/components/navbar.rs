use dioxus::prelude::*;

use crate::{
    Routes, app::auth::hooks::{use_auth, use_session}
};

#[component]
pub fn NavBar() -> Element {
    let mut auth = use_auth();
    let session = use_session();
    let navigator = use_navigator();
    let logged_in = auth.read().is_authenticated();

    let on_logout = move |_| {
        auth.set(session.logout());
        navigator.push(Routes::HomePage {});
    };

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                Link { class: "btn btn-ghost text-xl text-primary", to: Routes::HomePage {}, "EduBlog" }
            }
            div { class: "flex-none",
                ul { class: "menu menu-horizontal px-1",
                    if logged_in {
                        li { Link { to: Routes::blogs(), "Blogs" } }
                        li { Link { to: Routes::DashboardPage {}, "Dashboard" } }
                        li { button { onclick: on_logout, "Logout" } }
                    } else {
                        li { Link { to: Routes::HomePage {}, "Home" } }
                        li { Link { to: Routes::AboutPage {}, "About" } }
                        li { Link { to: Routes::blogs(), "Blogs" } }
                        li { Link { to: Routes::LoginPage {}, "Login" } }
                    }
                }
            }
        }
    }
}
