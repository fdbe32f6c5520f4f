use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default)] full_screen: bool) -> Element {
    let height = if full_screen { "min-h-screen" } else { "min-h-[40vh]" };
    rsx! {
        div { class: "flex items-center justify-center {height}",
            span { class: "loading loading-spinner loading-lg text-primary" }
        }
    }
}

#[component]
pub fn ErrorBanner(#[props(into)] message: String) -> Element {
    rsx! {
        div { role: "alert", class: "alert alert-error mb-6",
            span { "{message}" }
        }
    }
}

#[component]
pub fn InfoBanner(#[props(into)] message: String) -> Element {
    rsx! {
        div { role: "status", class: "alert alert-info mb-6",
            span { "{message}" }
        }
    }
}
