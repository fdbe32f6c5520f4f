use dioxus::prelude::*;

use crate::components::{Footer, NavBar};

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "edu-layout min-h-screen flex flex-col bg-base-100",
            header {
                NavBar {}
            }
            main {
                class: "edu-main flex-grow w-full max-w-7xl mx-auto px-4 py-8", {
                    children
                }
            }
            Footer {}
        }
    }
}
