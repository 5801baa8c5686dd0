//! Catalog card for a single course.

use common::course::{Course, SkillLevel};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSchedule, md_editor_icons::MdAttachMoney, md_navigation_icons::MdChevronRight, md_social_icons::MdPerson}};

use crate::routes::Route;

#[component]
pub fn LevelBadge(level: ReadSignal<Option<SkillLevel>>) -> Element {
    let (background, color) = SkillLevel::badge_colors(level());
    let label = level().map(|l| l.as_str()).unwrap_or("All Levels");
    rsx! {
        span {
            style: "
                display: inline-flex;
                align-items: center;
                padding: 2px 10px;
                border-radius: 9999px;
                font-size: 12px;
                font-weight: 500;
                background: {background};
                color: {color};
            ",
            "{label}"
        }
    }
}

#[component]
pub fn CourseCard(course: ReadSignal<Course>) -> Element {
    let course = course.read().clone();
    let (technologies, hidden_technologies) = course.card_technologies();
    let image = course.image.clone().unwrap_or_default();

    rsx! {
        article {
            class: "card",
            style: "display: flex; flex-direction: column; height: 100%;",

            div {
                style: "position: relative; overflow: hidden; height: 192px; background: linear-gradient(135deg, #DBEAFE 0%, #EDE9FE 100%);",
                if !image.is_empty() {
                    img {
                        src: "{image}",
                        alt: "{course.title} course thumbnail",
                        loading: "lazy",
                        style: "width: 100%; height: 192px; object-fit: cover;",
                    }
                }
                div {
                    style: "position: absolute; top: 16px; left: 16px;",
                    LevelBadge { level: course.level }
                }
                if let Some(mode) = course.mode.clone() {
                    div {
                        style: "position: absolute; top: 16px; right: 16px; background: rgba(255,255,255,0.9); border-radius: 9999px; padding: 2px 8px; font-size: 12px; font-weight: 600; color: #374151;",
                        "{mode}"
                    }
                }
            }

            div {
                style: "padding: 24px; flex: 1; display: flex; flex-direction: column;",
                div {
                    style: "flex: 1;",
                    span {
                        style: "font-size: 12px; font-weight: 500; color: #2563EB; background: #EFF6FF; padding: 2px 8px; border-radius: 8px;",
                        "{course.category}"
                    }
                    h3 {
                        style: "font-family: Poppins, sans-serif; font-size: 20px; font-weight: 600; color: #111827; margin: 8px 0;",
                        "{course.title}"
                    }
                    p {
                        style: "color: #4B5563; font-size: 14px; margin-bottom: 16px;",
                        "{course.short}"
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 6px; margin-bottom: 16px; font-size: 14px; color: #6B7280;",
                        div {
                            Icon { icon: MdSchedule, style: "width: 16px; height: 16px; vertical-align: middle; margin-right: 8px;" }
                            "Duration: {course.duration}"
                        }
                        if let Some(fees) = course.fees.clone() {
                            div {
                                Icon { icon: MdAttachMoney, style: "width: 16px; height: 16px; vertical-align: middle; margin-right: 8px;" }
                                "Fee: {fees}"
                            }
                        }
                        if let Some(instructor) = course.instructor.clone() {
                            div {
                                Icon { icon: MdPerson, style: "width: 16px; height: 16px; vertical-align: middle; margin-right: 8px;" }
                                "{instructor}"
                            }
                        }
                    }

                    if !technologies.is_empty() {
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 4px; margin-bottom: 16px;",
                            for tech in technologies.iter() {
                                span { key: "{tech}", class: "x-tech-chip", "{tech}" }
                            }
                            if hidden_technologies > 0 {
                                span { class: "x-tech-chip", style: "color: #4B5563;", "+{hidden_technologies} more" }
                            }
                        }
                    }
                }

                div {
                    style: "padding-top: 16px; border-top: 1px solid #F3F4F6;",
                    Link {
                        class: "btn-primary",
                        style: "width: 100%;",
                        to: Route::course_detail(course.id.clone()),
                        "View Details"
                        Icon { icon: MdChevronRight, style: "width: 16px; height: 16px; margin-left: 8px;" }
                    }
                }
            }
        }
    }
}
