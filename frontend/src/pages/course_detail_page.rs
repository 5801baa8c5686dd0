//! Single course page with syllabus, FAQ and enrollment.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdCheckCircle;
use dioxus_free_icons::icons::md_navigation_icons::MdArrowForward;

use common::course::{Course, SkillLevel};
use common::course_catalog::CourseCatalog;

use crate::components::course_components::course_card::LevelBadge;
use crate::components::lead_components::enroll_modal::EnrollModal;
use crate::components::navbar::{INSTITUTE_EMAIL, INSTITUTE_PHONE};
use crate::routes::Route;

const RELATED_COURSE_COUNT: usize = 3;


/// Course detail page
#[component]
pub fn CourseDetailPage(id: String) -> Element {
    let Some(course) = CourseCatalog::bundled().find_course(&id) else {
        return rsx! {
            Title { "Course Not Found - CSG Education" }
            CourseNotFound {}
        };
    };

    rsx! {
        Title { "{course.title} Course - CSG Education | Professional Training" }
        document::Meta {
            name: "description",
            content: "{course.description} Duration: {course.duration}. Enroll at CSG Education today.",
        }
        // keyed so that the syllabus toggle and the dialog reset between courses
        CourseDetails { key: "{course.id}", course: course.clone() }
    }
}

#[component]
fn CourseNotFound() -> Element {
    rsx! {
        div {
            style: "min-height: 60vh; display: flex; align-items: center; justify-content: center;",
            div {
                style: "text-align: center;",
                h1 { style: "font-size: 24px; font-weight: 700; color: #111827; margin-bottom: 16px;", "Course Not Found" }
                Link { class: "btn-primary", to: Route::all_courses(), "View All Courses" }
            }
        }
    }
}

#[component]
fn CourseDetails(course: ReadSignal<Course>) -> Element {
    let mut enroll_open = use_signal(|| false);
    let show_full_syllabus = use_signal(|| false);
    let course = course.read().clone();

    let open_enroll = move |_| enroll_open.set(true);

    rsx! {
        section {
            class: "x-page-hero",
            style: "text-align: left;",
            div {
                style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px; align-items: center;",
                div {
                    div {
                        style: "margin-bottom: 16px; display: flex; align-items: center; gap: 12px;",
                        LevelBadge { level: course.level }
                        span { style: "opacity: 0.9;", "{course.category}" }
                    }
                    h1 { "{course.title}" }
                    p { style: "margin: 0 0 32px 0;", "{course.short}" }
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-bottom: 32px;",
                        HeroFact { label: "Duration", value: course.duration.clone() }
                        if let Some(mode) = course.mode.clone() {
                            HeroFact { label: "Mode", value: mode }
                        }
                        if let Some(fees) = course.fees.clone() {
                            HeroFact { label: "Course Fee", value: fees }
                        }
                        if let Some(instructor) = course.instructor.clone() {
                            HeroFact { label: "Instructor", value: instructor }
                        }
                    }
                    button {
                        class: "btn-accent",
                        onclick: open_enroll,
                        "Enroll Now"
                        Icon { icon: MdArrowForward, style: "width: 20px; height: 20px; margin-left: 8px;" }
                    }
                }
                if let Some(image) = course.image.clone() {
                    img {
                        src: "{image}",
                        alt: "{course.title} course",
                        style: "width: 100%; height: 320px; object-fit: cover; border-radius: 16px; box-shadow: 0 25px 50px rgba(0,0,0,0.25);",
                    }
                }
            }
        }

        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 64px 24px; display: grid; grid-template-columns: minmax(0, 2fr) minmax(280px, 1fr); gap: 48px;",

            div {
                style: "display: flex; flex-direction: column; gap: 48px;",

                section {
                    h2 { class: "x-detail-heading", "Course Overview" }
                    p { style: "color: #374151; font-size: 18px; line-height: 1.7;", "{course.description}" }
                }

                if !course.technologies.is_empty() {
                    section {
                        h2 { class: "x-detail-heading", "Technologies Covered" }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 12px;",
                            for tech in course.technologies.iter() {
                                span { key: "{tech}", class: "x-tech-chip x-tech-chip-large", "{tech}" }
                            }
                        }
                    }
                }

                if !course.syllabus.is_empty() {
                    SyllabusSection { course: course.clone(), show_full_syllabus }
                }

                if !course.prerequisites.is_empty() {
                    section {
                        h2 { class: "x-detail-heading", "Prerequisites" }
                        ul {
                            style: "background: #FEFCE8; border-left: 4px solid #FACC15; padding: 16px; border-radius: 0 8px 8px 0; list-style: none; display: flex; flex-direction: column; gap: 4px;",
                            for prerequisite in course.prerequisites.iter() {
                                li {
                                    key: "{prerequisite}",
                                    style: "color: #854D0E;",
                                    Icon { icon: MdCheckCircle, style: "width: 16px; height: 16px; vertical-align: middle; margin-right: 8px;" }
                                    "{prerequisite}"
                                }
                            }
                        }
                    }
                }

                section {
                    h2 { class: "x-detail-heading", "Frequently Asked Questions" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        for (question, answer) in course.faq_items() {
                            details {
                                key: "{question}",
                                class: "card",
                                summary { style: "padding: 16px; cursor: pointer; font-weight: 500; color: #111827;", "{question}" }
                                p { style: "padding: 0 16px 16px 16px; color: #374151;", "{answer}" }
                            }
                        }
                    }
                }
            }

            aside {
                style: "display: flex; flex-direction: column; gap: 32px;",
                CourseInformationCard { course: course.clone(), on_enroll: move |_| enroll_open.set(true) }
                RelatedCourses { course: course.clone() }
            }
        }

        section {
            style: "padding: 64px 24px; background: #2563EB; color: white; text-align: center;",
            h2 { style: "font-family: Poppins, sans-serif; font-size: 30px; font-weight: 700; margin-bottom: 16px;", "Ready to Start Your Journey?" }
            p { style: "font-size: 20px; opacity: 0.9; margin-bottom: 32px;", "Join {course.title} and build skills employers are looking for." }
            button { class: "btn-accent", onclick: open_enroll, "Enroll Now" }
        }

        EnrollModal {
            is_open: enroll_open,
            on_close: move |_| enroll_open.set(false),
            course_title: course.title.clone(),
        }
    }
}

#[component]
fn HeroFact(label: String, value: String) -> Element {
    rsx! {
        div {
            div { style: "font-size: 14px; opacity: 0.7;", "{label}" }
            div { style: "font-size: 18px; font-weight: 600;", "{value}" }
        }
    }
}

#[component]
fn SyllabusSection(course: ReadSignal<Course>, mut show_full_syllabus: Signal<bool>) -> Element {
    let course = course.read().clone();
    let expanded = show_full_syllabus();
    let (topics, hidden) = course.syllabus_preview(expanded);
    // the toggle is offered whenever the full list is longer than the preview
    let (_, hidden_when_collapsed) = course.syllabus_preview(false);

    rsx! {
        section {
            h2 { class: "x-detail-heading", "Course Syllabus" }
            div {
                class: "card",
                ol {
                    style: "list-style: none; padding: 0; margin: 0;",
                    for (index, topic) in topics.iter().enumerate() {
                        li {
                            key: "{index}",
                            style: "padding: 16px; border-bottom: 1px solid #E5E7EB; display: flex; align-items: flex-start; gap: 12px;",
                            span {
                                style: "flex-shrink: 0; width: 32px; height: 32px; border-radius: 9999px; background: #DBEAFE; color: #2563EB; display: flex; align-items: center; justify-content: center; font-size: 14px; font-weight: 600;",
                                "{index + 1}"
                            }
                            p { style: "color: #1F2937; font-weight: 500;", "{topic}" }
                        }
                    }
                }
                if hidden_when_collapsed > 0 {
                    div {
                        style: "padding: 16px; background: #F9FAFB;",
                        button {
                            class: "x-link-button",
                            onclick: move |_| show_full_syllabus.set(!expanded),
                            if hidden > 0 { "Show {hidden} More Topics" } else { "Show Less" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseInformationCard(course: ReadSignal<Course>, on_enroll: Callback<()>) -> Element {
    let course = course.read().clone();
    rsx! {
        div {
            class: "card",
            style: "padding: 24px; position: sticky; top: 96px;",
            h3 { style: "font-family: Poppins, sans-serif; font-size: 18px; font-weight: 600; margin-bottom: 16px;", "Course Information" }
            div {
                style: "display: flex; flex-direction: column; gap: 16px; margin-bottom: 24px;",
                InformationRow { label: "Duration:", "{course.duration}" }
                InformationRow { label: "Level:", LevelBadge { level: course.level } }
                if let Some(mode) = course.mode.clone() {
                    InformationRow { label: "Mode:", "{mode}" }
                }
                if let Some(fees) = course.fees.clone() {
                    InformationRow { label: "Fee:", span { style: "color: #2563EB; font-size: 18px;", "{fees}" } }
                }
                if let Some(instructor) = course.instructor.clone() {
                    InformationRow { label: "Instructor:", "{instructor}" }
                }
            }
            button {
                class: "btn-primary",
                style: "width: 100%; margin-bottom: 16px;",
                onclick: move |_| on_enroll(()),
                "Enroll Now"
            }
            div {
                style: "text-align: center; font-size: 14px; color: #6B7280; display: flex; flex-direction: column; gap: 4px;",
                p { "Need more information?" }
                a { href: "tel:{INSTITUTE_PHONE}", style: "color: #2563EB;", "{INSTITUTE_PHONE}" }
                a { href: "mailto:{INSTITUTE_EMAIL}", style: "color: #2563EB;", "{INSTITUTE_EMAIL}" }
            }
        }
    }
}

#[component]
fn InformationRow(label: String, children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center;",
            span { style: "color: #4B5563;", "{label}" }
            span { style: "font-weight: 600;", {children} }
        }
    }
}

#[component]
fn RelatedCourses(course: ReadSignal<Course>) -> Element {
    let course = course.read().clone();
    let related: Vec<Course> = CourseCatalog::bundled()
        .related_courses(&course, RELATED_COURSE_COUNT)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div {
            style: "background: #F9FAFB; border-radius: 12px; padding: 24px;",
            h3 { style: "font-family: Poppins, sans-serif; font-size: 18px; font-weight: 600; margin-bottom: 16px;", "Related Courses" }
            div {
                style: "display: flex; flex-direction: column; gap: 12px;",
                for related_course in related.iter() {
                    Link {
                        key: "{related_course.id}",
                        class: "card x-related-course",
                        to: Route::course_detail(related_course.id.clone()),
                        h4 { style: "font-weight: 500; font-size: 14px; color: #111827;", "{related_course.title}" }
                        p {
                            style: "font-size: 12px; color: #4B5563; margin-top: 4px;",
                            "{related_course.duration} • {level_label(related_course.level)}"
                        }
                    }
                }
            }
            Link {
                to: Route::all_courses(),
                style: "display: block; margin-top: 16px; text-align: center; color: #2563EB; font-size: 14px;",
                "View All Courses"
            }
        }
    }
}

fn level_label(level: Option<SkillLevel>) -> &'static str {
    level.map(|l| l.as_str()).unwrap_or("All Levels")
}
