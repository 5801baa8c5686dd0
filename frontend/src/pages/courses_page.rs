//! Course catalog page.

use dioxus::prelude::*;

use common::course_catalog::CourseCatalog;
use common::filter_criteria::FilterCriteria;
use common::url_state::{CatalogLocation, read_criteria_from_location, write_criteria_to_location};

use crate::components::course_components::{category_strip::CategoryStrip, courses_grid::CoursesGrid};
use crate::routes::Route;


/// Course catalog page
#[component]
pub fn CoursesPage(location: CatalogLocation) -> Element {
    rsx! {
        Title { "All Courses - CSG Education | Computer Training & Design Courses" }
        CatalogRootComponent { location: location.clone() }
    }
}

#[component]
fn CatalogRootComponent(location: ReadSignal<CatalogLocation>) -> Element {
    let catalog = CourseCatalog::bundled();
    let mut criteria = use_signal(|| read_criteria_from_location(&location.peek(), catalog));

    // when the url changes from outside (navbar links, back button), take its category and search.
    // level, duration and sort are not in the url and are kept.
    use_effect(move || {
        let from_url = read_criteria_from_location(&location.read(), catalog);
        let current = criteria.peek().clone();
        if write_criteria_to_location(&current) != write_criteria_to_location(&from_url) {
            let mut criteria = criteria.write();
            criteria.category = from_url.category;
            criteria.query = from_url.query;
        }
    });

    let push_criteria_to_url: Callback<()> = Callback::new(move |_: ()| {
        let target = write_criteria_to_location(&criteria.peek());
        if target != *location.peek() {
            navigator().replace(Route::CoursesPage { location: target });
        }
    });

    let on_select_category = move |category: Option<String>| {
        criteria.write().category = category;
        push_criteria_to_url(());
    };

    rsx! {
        div {
            id: "x-catalog-page",

            section {
                class: "x-page-hero",
                h1 { "Our Courses" }
                p { "Discover professional training programs designed to advance your career in technology and design" }
            }

            CategoryStrip {
                selected: criteria.read().category.clone(),
                on_select: on_select_category,
            }

            section {
                style: "padding: 48px 24px;",
                div {
                    style: "max-width: 1200px; margin: 0 auto;",
                    CoursesGrid { criteria, on_url_criteria_changed: push_criteria_to_url }
                }
            }

            TrainingInformation {}
        }
    }
}

#[component]
fn TrainingInformation() -> Element {
    rsx! {
        section {
            style: "padding: 64px 24px; background: #F9FAFB;",
            div {
                class: "card",
                style: "max-width: 1200px; margin: 0 auto; padding: 32px; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 32px;",
                div {
                    h2 { style: "font-family: Poppins, sans-serif; font-size: 24px; font-weight: 700; margin-bottom: 16px;", "Training Information" }
                    h3 { style: "font-size: 18px; font-weight: 600; margin-bottom: 8px;", "Training Types" }
                    ul {
                        style: "color: #4B5563; margin-bottom: 16px;",
                        li { "Computer Training" }
                        li { "Professional Training Institute" }
                    }
                    h3 { style: "font-size: 18px; font-weight: 600; margin-bottom: 8px;", "Mode of Instruction" }
                    p { style: "color: #4B5563;", "Offline (In-person training)" }
                }
                div {
                    style: "background: linear-gradient(135deg, #EFF6FF 0%, #F5F3FF 100%); border-radius: 12px; padding: 24px;",
                    h3 { style: "font-size: 18px; font-weight: 600; margin-bottom: 16px;", "Why Offline Training?" }
                    ul {
                        style: "display: flex; flex-direction: column; gap: 8px; font-size: 14px; color: #374151;",
                        li { "Direct interaction with expert instructors" }
                        li { "Hands-on practice with professional equipment" }
                        li { "Immediate doubt resolution and guidance" }
                        li { "Collaborative learning environment" }
                        li { "Access to high-spec computers and software" }
                    }
                }
            }
        }
    }
}
