use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdSupervisorAccount, MdVerifiedUser, MdWork};
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::{Icon, IconShape};

use common::course_catalog::{CourseCatalog, FEATURED_COURSE_COUNT};

use crate::components::course_components::course_card::CourseCard;
use crate::components::navbar::INSTITUTE_PHONE;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "CSG Education - Computer Training Institute | Programming, Design & More" }
        Hero {}
        CategoryLinks {}
        FeaturedCourses {}
        Benefits {}
        CallToAction {}
    }
}

#[component]
fn Hero() -> Element {
    let catalog = CourseCatalog::bundled();
    let course_count = catalog.courses().len();
    let category_count = catalog.categories().len();
    rsx! {
        section {
            class: "x-page-hero",
            style: "padding: 96px 24px;",
            h1 { style: "font-size: 48px;", "Build Job-Ready Computer Skills" }
            p {
                "Learn practical computer skills, programming and design with expert instructors in hands-on, offline classes."
            }
            div {
                style: "display: flex; gap: 16px; justify-content: center; flex-wrap: wrap; margin-top: 32px;",
                Link { class: "btn-accent", to: Route::all_courses(), "Explore Courses" }
                Link { class: "btn-secondary", to: Route::ContactPage {}, "Contact Us" }
            }
            div {
                style: "display: flex; gap: 48px; justify-content: center; flex-wrap: wrap; margin-top: 48px;",
                HeroStat { value: "{course_count}+", label: "Courses" }
                HeroStat { value: "{category_count}", label: "Categories" }
                HeroStat { value: "100%", label: "Hands-on Training" }
            }
        }
    }
}

#[component]
fn HeroStat(value: String, label: String) -> Element {
    rsx! {
        div {
            style: "text-align: center;",
            div { style: "font-size: 32px; font-weight: 700;", "{value}" }
            div { style: "opacity: 0.85;", "{label}" }
        }
    }
}

#[component]
fn CategoryLinks() -> Element {
    let catalog = CourseCatalog::bundled();
    rsx! {
        section {
            style: "padding: 64px 24px; max-width: 1200px; margin: 0 auto;",
            h2 { class: "x-section-title", "Course Categories" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
                for category in catalog.categories() {
                    Link {
                        key: "{category}",
                        class: "card x-category-card",
                        to: Route::courses_in_category(category.clone()),
                        div { style: "font-weight: 600; font-size: 18px; color: #111827;", "{category}" }
                        div { style: "font-size: 14px; color: #6B7280;", "{catalog.courses_in_category_count(category)} courses" }
                    }
                }
            }
        }
    }
}

#[component]
fn FeaturedCourses() -> Element {
    let catalog = CourseCatalog::bundled();
    rsx! {
        section {
            style: "padding: 64px 24px; background: #F9FAFB;",
            div {
                style: "max-width: 1200px; margin: 0 auto;",
                h2 { class: "x-section-title", "Featured Courses" }
                p {
                    style: "text-align: center; color: #4B5563; margin-bottom: 32px;",
                    "Popular courses chosen by our students for their career growth and skill development"
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px;",
                    for course in catalog.featured_courses(FEATURED_COURSE_COUNT) {
                        CourseCard { key: "{course.id}", course: course.clone() }
                    }
                }
                div {
                    style: "text-align: center; margin-top: 32px;",
                    Link { class: "btn-primary", to: Route::all_courses(), "View All Courses" }
                }
            }
        }
    }
}

#[component]
fn Benefits() -> Element {
    rsx! {
        section {
            style: "padding: 64px 24px; max-width: 1200px; margin: 0 auto;",
            h2 { class: "x-section-title", "Why Choose CSG Education?" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px;",
                BenefitCard { icon: MdSupervisorAccount, title: "Expert Instructors", text: "Learn from experienced professionals with real industry backgrounds." }
                BenefitCard { icon: MdSchool, title: "Hands-on Training", text: "Practice on high-spec computers with professional software in every class." }
                BenefitCard { icon: MdVerifiedUser, title: "Certification", text: "Receive a certificate of completion for every course you finish." }
                BenefitCard { icon: MdWork, title: "Placement Support", text: "Career guidance, resume preparation and job placement assistance." }
            }
        }
    }
}

#[component]
fn BenefitCard<I: IconShape + Clone + PartialEq + 'static>(icon: I, title: String, text: String) -> Element {
    rsx! {
        div {
            class: "card",
            style: "padding: 24px; text-align: center;",
            div {
                style: "width: 56px; height: 56px; margin: 0 auto 16px auto; border-radius: 12px; background: #EFF6FF; display: flex; align-items: center; justify-content: center;",
                Icon { icon: icon, style: "width: 28px; height: 28px; color: #2563EB;" }
            }
            h3 { style: "font-size: 18px; font-weight: 600; margin-bottom: 8px;", "{title}" }
            p { style: "color: #4B5563; font-size: 14px;", "{text}" }
        }
    }
}

#[component]
fn CallToAction() -> Element {
    rsx! {
        section {
            style: "padding: 64px 24px; background: #2563EB; color: white; text-align: center;",
            h2 { style: "font-family: Poppins, sans-serif; font-size: 30px; font-weight: 700; margin-bottom: 16px;", "Ready to Start Learning?" }
            p { style: "font-size: 20px; opacity: 0.9; margin-bottom: 32px;", "Join our next batch and take the first step towards a better career." }
            div {
                style: "display: flex; gap: 16px; justify-content: center; flex-wrap: wrap;",
                a { class: "btn-accent", href: "tel:{INSTITUTE_PHONE}", "Call Now: {INSTITUTE_PHONE}" }
                Link { class: "btn-secondary", to: Route::all_courses(), "Browse Courses" }
            }
        }
    }
}
