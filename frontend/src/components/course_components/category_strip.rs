//! Category tab strip above the catalog.

use common::course_catalog::CourseCatalog;
use common::filter_criteria::ALL_CATEGORIES;
use dioxus::prelude::*;

#[component]
pub fn CategoryStrip(selected: ReadSignal<Option<String>>, on_select: Callback<Option<String>>) -> Element {
    let catalog = CourseCatalog::bundled();
    let tabs = std::iter::once(None)
        .chain(catalog.categories().iter().cloned().map(Some))
        .collect::<Vec<_>>();

    rsx! {
        section {
            style: "
                background: white;
                border-bottom: 1px solid #E5E7EB;
                box-shadow: 0 1px 2px rgba(0,0,0,0.04);
                position: sticky;
                top: 64px;
                z-index: 40;
            ",
            nav {
                "aria-label": "Course categories",
                style: "max-width: 1200px; margin: 0 auto; padding: 16px 24px; display: flex; gap: 4px; overflow-x: auto;",
                {tabs.into_iter().map(|tab| {
                    let is_selected = *selected.read() == tab;
                    let label = tab.clone().unwrap_or_else(|| ALL_CATEGORIES.to_string());
                    rsx! {
                        CategoryTab {
                            key: "{label}",
                            is_selected,
                            label: label.clone(),
                            onclick: move |_| on_select(tab.clone()),
                        }
                    }
                })}
            }
        }
    }
}

#[component]
fn CategoryTab(is_selected: bool, label: String, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if is_selected { "x-category-tab x-category-tab-selected" } else { "x-category-tab" };
    let aria_current = if is_selected { "page" } else { "false" };
    rsx! {
        button {
            class,
            "aria-current": aria_current,
            onclick: move |e| onclick.call(e),
            "{label}"
        }
    }
}
