//! Catalog search box, filter controls and result grid.

use common::{
    catalog_filter::{filter_and_sort, results_summary},
    course::{Course, SkillLevel},
    course_catalog::CourseCatalog,
    filter_criteria::{ALL_DURATIONS, ALL_LEVELS, FilterCriteria, SortKey},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::components::course_components::course_card::CourseCard;

/// `criteria` is owned by the page; `on_url_criteria_changed` runs after
/// edits to the URL-backed search text, including a clear.
#[component]
pub fn CoursesGrid(mut criteria: Signal<FilterCriteria>, on_url_criteria_changed: Callback<()>) -> Element {
    let catalog = CourseCatalog::bundled();
    let results = use_memo(move || {
        filter_and_sort(catalog.courses(), &criteria.read())
            .into_iter()
            .cloned()
            .collect::<Vec<Course>>()
    });

    let clear_filters = move |_| {
        criteria.write().clear();
        on_url_criteria_changed(());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 24px;",

            div {
                class: "card",
                style: "padding: 24px;",

                // search bar
                div {
                    style: "position: relative; margin-bottom: 24px;",
                    Icon { icon: MdSearch, style: "position: absolute; left: 16px; top: 14px; width: 20px; height: 20px; color: #9CA3AF;" }
                    input {
                        r#type: "text",
                        class: "input-field",
                        style: "padding-left: 48px;",
                        placeholder: "Search courses, technologies, or categories...",
                        "aria-label": "Search courses",
                        value: "{criteria.read().query}",
                        oninput: move |e| {
                            criteria.write().query = e.value();
                            on_url_criteria_changed(());
                        },
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;",

                    div {
                        label { r#for: "level-filter", class: "x-filter-label", "Skill Level" }
                        select {
                            id: "level-filter",
                            class: "input-field",
                            value: "{criteria.read().level_control_value()}",
                            onchange: move |e| criteria.write().set_level_from_control(&e.value()),
                            option { value: ALL_LEVELS, selected: criteria.read().level.is_none(), "{ALL_LEVELS}" }
                            for level in SkillLevel::ALL {
                                option {
                                    key: "{level}",
                                    value: level.as_str(),
                                    selected: criteria.read().level == Some(level),
                                    "{level}"
                                }
                            }
                        }
                    }

                    div {
                        label { r#for: "duration-filter", class: "x-filter-label", "Duration" }
                        select {
                            id: "duration-filter",
                            class: "input-field",
                            value: "{criteria.read().duration_control_value()}",
                            onchange: move |e| criteria.write().set_duration_from_control(&e.value()),
                            option { value: ALL_DURATIONS, selected: criteria.read().duration.is_none(), "{ALL_DURATIONS}" }
                            for duration in catalog.durations() {
                                option {
                                    key: "{duration}",
                                    value: "{duration}",
                                    selected: criteria.read().duration.as_ref() == Some(duration),
                                    "{duration}"
                                }
                            }
                        }
                    }

                    div {
                        label { r#for: "sort-filter", class: "x-filter-label", "Sort By" }
                        select {
                            id: "sort-filter",
                            class: "input-field",
                            onchange: move |e| criteria.write().set_sort_from_control(&e.value()),
                            for (key, label) in SortKey::OPTIONS {
                                option {
                                    key: "{key}",
                                    value: key.as_str(),
                                    selected: criteria.read().sort_key == key,
                                    "{label}"
                                }
                            }
                        }
                    }

                    div {
                        style: "display: flex; align-items: flex-end;",
                        button { class: "btn-secondary", style: "width: 100%;", onclick: clear_filters, "Clear Filters" }
                    }
                }

                if criteria.read().has_active_filters() {
                    ActiveFilterChips { criteria }
                }
            }

            p { style: "color: #4B5563;", "{results_summary(results.read().len())}" }

            if results.read().is_empty() {
                div {
                    style: "text-align: center; padding: 48px 0;",
                    h3 { style: "font-size: 18px; font-weight: 500; color: #111827; margin-bottom: 8px;", "No courses found" }
                    p {
                        style: "color: #6B7280; margin-bottom: 16px;",
                        "Try adjusting your search terms or filters to find the courses you're looking for."
                    }
                    button { class: "btn-primary", onclick: clear_filters, "Clear All Filters" }
                }
            } else {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px;",
                    for course in results.read().iter() {
                        CourseCard { key: "{course.id}", course: course.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn ActiveFilterChips(criteria: ReadSignal<FilterCriteria>) -> Element {
    let criteria = criteria.read().clone();
    rsx! {
        div {
            style: "margin-top: 16px; padding-top: 16px; border-top: 1px solid #E5E7EB; display: flex; flex-wrap: wrap; gap: 8px; align-items: center;",
            span { style: "font-size: 14px; color: #4B5563;", "Active filters:" }
            if !criteria.query.is_empty() {
                span { class: "x-filter-chip", style: "background: #DBEAFE; color: #1E40AF;", "Search: \"{criteria.query}\"" }
            }
            if let Some(level) = criteria.level {
                span { class: "x-filter-chip", style: "background: #EDE9FE; color: #5B21B6;", "Level: {level}" }
            }
            if let Some(duration) = criteria.duration.clone() {
                span { class: "x-filter-chip", style: "background: #FEF9C3; color: #854D0E;", "Duration: {duration}" }
            }
        }
    }
}
