use dioxus::prelude::*;
use edu_types::{Category, CategoryFilter};

use crate::Routes;

/// Category pills for the blog index; each one is a link to the filtered list.
#[component]
pub fn CategoryTabs(active: CategoryFilter) -> Element {
    let pill = |selected: bool| {
        if selected { "btn btn-sm btn-primary rounded-full" } else { "btn btn-sm btn-ghost bg-base-200 rounded-full" }
    };

    rsx! {
        div { class: "flex flex-wrap gap-2 mb-8",
            Link {
                class: pill(active == CategoryFilter::All),
                to: Routes::blogs(),
                "All"
            }
            for category in Category::ALL {
                Link {
                    key: "{category.as_str()}",
                    class: pill(active == CategoryFilter::Only(category)),
                    to: Routes::BlogListPage { category: category.as_str().to_string() },
                    "{category.label()}"
                }
            }
        }
    }
}
