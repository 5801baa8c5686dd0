use dioxus::prelude::*;

use crate::routes::Route;


#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Page Not Found - CSG Education" }
        div {
            style: "min-height: 60vh; display: flex; align-items: center; justify-content: center; padding: 48px 24px;",
            div {
                style: "text-align: center;",
                h1 { style: "font-size: 72px; font-weight: 700; color: #2563EB;", "404" }
                h2 { style: "font-size: 24px; font-weight: 600; color: #111827; margin-bottom: 8px;", "Page Not Found" }
                p { style: "color: #4B5563; margin-bottom: 24px;", "There is nothing at /{path}." }
                div {
                    style: "display: flex; gap: 16px; justify-content: center; flex-wrap: wrap;",
                    Link { class: "btn-primary", to: Route::HomePage {}, "Go Home" }
                    Link { class: "btn-secondary", to: Route::all_courses(), "Browse Courses" }
                }
            }
        }
    }
}
