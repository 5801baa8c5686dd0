//! Site header, footer and page layout.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_communication_icons::{MdEmail, MdLocationOn, MdPhone};
use dioxus_free_icons::icons::md_navigation_icons::{MdExpandMore, MdMenu};
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::Icon;

use common::course_catalog::CourseCatalog;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

pub const INSTITUTE_NAME: &str = "CSG Education";
pub const INSTITUTE_PHONE: &str = "+91 63844 92536";
pub const INSTITUTE_EMAIL: &str = "info@csgeducation.com";
pub const INSTITUTE_ADDRESS: [&str; 3] = ["No 1432, Near Krishna Ammal College", "Avinashi Road, Peelamedu", "Coimbatore-641004"];


/// Shared layout: header, routed page, footer.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-site-container",
            style: "
                display: flex;
                flex-direction: column;
                min-height: 100vh;
            ",

            SiteHeader {}

            main {
                id: "main-content",
                style: "flex: 1; padding-top: 64px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }

            SiteFooter {}
        }
    }
}

#[component]
fn SiteHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            style: "
                position: fixed;
                top: 0;
                width: 100%;
                z-index: 50;
                background: rgba(255,255,255,0.96);
                box-shadow: 0 1px 6px rgba(0,0,0,0.08);
            ",
            nav {
                "aria-label": "Main navigation",
                style: "
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 24px;
                    height: 64px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                ",
                Link {
                    to: Route::HomePage {},
                    style: "display: flex; align-items: center; gap: 8px; text-decoration: none;",
                    div {
                        style: "
                            width: 40px;
                            height: 40px;
                            border-radius: 8px;
                            background: #2563EB;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                        ",
                        Icon { icon: MdSchool, style: "width: 24px; height: 24px; color: white;" }
                    }
                    span { style: "font-family: Poppins, sans-serif; font-weight: 700; font-size: 20px; color: #111827;", "{INSTITUTE_NAME}" }
                }

                button {
                    class: "x-menu-toggle",
                    "aria-label": "Toggle menu",
                    onclick: move |_| {
                        let open = *menu_open.read();
                        menu_open.set(!open);
                    },
                    Icon { icon: MdMenu, style: "width: 24px; height: 24px;" }
                }

                ul {
                    class: if menu_open() { "x-nav-links x-nav-links-open" } else { "x-nav-links" },
                    // any followed link closes the mobile menu
                    onclick: move |_| menu_open.set(false),
                    li { Link { class: "nav-link", to: Route::HomePage {}, "Home" } }
                    li { CoursesMenu {} }
                    li { Link { class: "nav-link", to: Route::AboutPage {}, "About" } }
                    li { Link { class: "nav-link", to: Route::SuccessPage {}, "Success Stories" } }
                    li { Link { class: "nav-link", to: Route::ContactPage {}, "Contact" } }
                }
            }
        }
    }
}

#[component]
fn CoursesMenu() -> Element {
    let mut expanded = use_signal(|| false);
    let catalog = CourseCatalog::bundled();
    rsx! {
        div {
            style: "position: relative;",
            onmouseenter: move |_| expanded.set(true),
            onmouseleave: move |_| expanded.set(false),
            Link {
                class: "nav-link",
                to: Route::all_courses(),
                "Courses"
                Icon { icon: MdExpandMore, style: "width: 18px; height: 18px; vertical-align: middle;" }
            }
            if expanded() {
                div {
                    style: "
                        position: absolute;
                        top: 100%;
                        left: 0;
                        min-width: 240px;
                        padding: 8px 0;
                        background: white;
                        border-radius: 10px;
                        box-shadow: 0 10px 24px rgba(0,0,0,0.12);
                    ",
                    for category in catalog.categories() {
                        Link {
                            key: "{category}",
                            class: "x-dropdown-link",
                            to: Route::courses_in_category(category.clone()),
                            "{category}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    let catalog = CourseCatalog::bundled();
    rsx! {
        footer {
            style: "
                background: #111827;
                color: #D1D5DB;
                padding: 48px 24px 24px 24px;
            ",
            div {
                style: "
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 32px;
                ",
                div {
                    h3 { style: "color: white; font-size: 18px; margin-bottom: 12px;", "{INSTITUTE_NAME}" }
                    p { style: "font-size: 14px; line-height: 1.6;", "Professional computer training institute offering hands-on, offline courses with expert instructors." }
                }
                div {
                    h3 { style: "color: white; font-size: 18px; margin-bottom: 12px;", "Courses" }
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 6px;",
                        for category in catalog.categories() {
                            li {
                                key: "{category}",
                                Link { class: "x-footer-link", to: Route::courses_in_category(category.clone()), "{category}" }
                            }
                        }
                    }
                }
                div {
                    h3 { style: "color: white; font-size: 18px; margin-bottom: 12px;", "Contact" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 8px; font-size: 14px;",
                        div {
                            style: "display: flex; gap: 8px;",
                            Icon { icon: MdLocationOn, style: "width: 18px; height: 18px; flex-shrink: 0;" }
                            div {
                                for line in INSTITUTE_ADDRESS {
                                    div { key: "{line}", "{line}" }
                                }
                            }
                        }
                        a {
                            class: "x-footer-link",
                            href: "tel:{INSTITUTE_PHONE}",
                            Icon { icon: MdPhone, style: "width: 18px; height: 18px; vertical-align: middle; margin-right: 8px;" }
                            "{INSTITUTE_PHONE}"
                        }
                        a {
                            class: "x-footer-link",
                            href: "mailto:{INSTITUTE_EMAIL}",
                            Icon { icon: MdEmail, style: "width: 18px; height: 18px; vertical-align: middle; margin-right: 8px;" }
                            "{INSTITUTE_EMAIL}"
                        }
                    }
                }
            }
            div {
                style: "max-width: 1200px; margin: 32px auto 0 auto; padding-top: 16px; border-top: 1px solid #374151; font-size: 13px; text-align: center;",
                "© {INSTITUTE_NAME}. All rights reserved."
            }
        }
    }
}
