//! Enrollment dialog with the lead capture form.

use common::lead_capture::{
    ENROLL_RESET_DELAY_MS, EXPERIENCE_OPTIONS, LeadSubmission, SUBMISSION_DELAY_MS, SubmissionStatus,
};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdCheckCircle, md_navigation_icons::MdClose}};
use gloo_timers::future::TimeoutFuture;

use crate::api::lead_api::submit_enrollment;
use crate::components::navbar::INSTITUTE_PHONE;

/// Stays mounted while closed so a pending submission can still complete.
#[component]
pub fn EnrollModal(is_open: ReadSignal<bool>, on_close: Callback<()>, course_title: ReadSignal<String>) -> Element {
    let mut form = use_signal(|| LeadSubmission::for_course(course_title.peek().clone()));
    let mut status = use_signal(SubmissionStatus::default);

    // opening the dialog for a (possibly different) course starts fresh
    use_effect(move || {
        if is_open() {
            let title = course_title.read().clone();
            form.write().course = title;
            status.set(SubmissionStatus::Idle);
        }
    });

    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();
        let lead = form.peek().normalized();
        if let Err(invalid) = lead.validate() {
            status.set(SubmissionStatus::Invalid(invalid.to_string()));
            return;
        }
        status.set(SubmissionStatus::Submitting);
        spawn(async move {
            let course = lead.course.clone();
            let result = submit_enrollment(lead).await;
            TimeoutFuture::new(SUBMISSION_DELAY_MS).await;
            match &result {
                Ok(receipt) => info!("Enrollment accepted: {}", receipt.reference),
                Err(e) => warn!("Enrollment for {:?} submitted (demo mode): {:#?}", course, e),
            }
            status.set(SubmissionStatus::from_result(&result));

            TimeoutFuture::new(ENROLL_RESET_DELAY_MS).await;
            form.set(LeadSubmission::for_course(course_title.peek().clone()));
            status.set(SubmissionStatus::Idle);
            on_close(());
        });
    };

    if !is_open() {
        return rsx! {};
    }

    let is_submitting = status.read().is_submitting();

    rsx! {
        div {
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modal-title",
            tabindex: "-1",
            autofocus: true,
            style: "position: fixed; inset: 0; z-index: 60; overflow-y: auto;",
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close(());
                }
            },

            // backdrop
            div {
                style: "position: fixed; inset: 0; background: rgba(0,0,0,0.5);",
                onclick: move |_| on_close(()),
            }

            div {
                style: "position: relative; display: flex; align-items: center; justify-content: center; min-height: 100vh; padding: 16px; pointer-events: none;",
                div {
                    class: "card",
                    style: "width: 100%; max-width: 520px; padding: 24px; pointer-events: auto;",

                    div {
                        style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                        h2 { id: "modal-title", style: "font-family: Poppins, sans-serif; font-size: 20px; font-weight: 600;", "Enroll in Course" }
                        button {
                            r#type: "button",
                            class: "x-icon-button",
                            "aria-label": "Close modal",
                            onclick: move |_| on_close(()),
                            Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                        }
                    }

                    if *status.read() == SubmissionStatus::Success {
                        div {
                            style: "text-align: center; padding: 32px 0;",
                            Icon { icon: MdCheckCircle, style: "width: 64px; height: 64px; color: #16A34A;" }
                            h3 { style: "font-size: 18px; font-weight: 600; margin: 12px 0 8px 0;", "Enrollment Submitted!" }
                            p {
                                style: "color: #4B5563;",
                                "Thank you for your interest. Our team will contact you shortly to discuss the course details and next steps."
                            }
                        }
                    } else {
                        form {
                            style: "display: flex; flex-direction: column; gap: 16px;",
                            onsubmit: on_submit,

                            if !course_title.read().is_empty() {
                                div {
                                    style: "background: #EFF6FF; padding: 12px; border-radius: 8px;",
                                    p { style: "font-size: 14px; color: #2563EB; font-weight: 500;", "Selected Course:" }
                                    p { style: "color: #1E3A8A; font-weight: 600;", "{course_title}" }
                                }
                            }

                            div {
                                label { r#for: "enroll-name", class: "x-filter-label", "Full Name *" }
                                input {
                                    id: "enroll-name",
                                    name: "name",
                                    r#type: "text",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "Enter your full name",
                                    value: "{form.read().name}",
                                    oninput: move |e| form.write().name = e.value(),
                                }
                            }
                            div {
                                label { r#for: "enroll-email", class: "x-filter-label", "Email Address *" }
                                input {
                                    id: "enroll-email",
                                    name: "email",
                                    r#type: "email",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "Enter your email address",
                                    value: "{form.read().email}",
                                    oninput: move |e| form.write().email = e.value(),
                                }
                            }
                            div {
                                label { r#for: "enroll-phone", class: "x-filter-label", "Phone Number *" }
                                input {
                                    id: "enroll-phone",
                                    name: "phone",
                                    r#type: "tel",
                                    required: true,
                                    class: "input-field",
                                    placeholder: "Enter your phone number",
                                    value: "{form.read().phone}",
                                    oninput: move |e| form.write().phone = e.value(),
                                }
                            }
                            div {
                                label { r#for: "enroll-experience", class: "x-filter-label", "Experience Level" }
                                select {
                                    id: "enroll-experience",
                                    name: "experience",
                                    class: "input-field",
                                    onchange: move |e| form.write().experience = Some(e.value()),
                                    for (value, label) in EXPERIENCE_OPTIONS {
                                        option {
                                            key: "{value}",
                                            value,
                                            selected: form.read().experience.as_deref().unwrap_or("") == value,
                                            "{label}"
                                        }
                                    }
                                }
                            }
                            div {
                                label { r#for: "enroll-message", class: "x-filter-label", "Additional Message (Optional)" }
                                textarea {
                                    id: "enroll-message",
                                    name: "message",
                                    rows: "3",
                                    class: "input-field",
                                    style: "resize: none;",
                                    placeholder: "Any questions or special requirements?",
                                    value: "{form.read().message.clone().unwrap_or_default()}",
                                    oninput: move |e| form.write().message = Some(e.value()),
                                }
                            }

                            if let SubmissionStatus::Invalid(message) = status.read().clone() {
                                div {
                                    style: "background: #FEF2F2; border: 1px solid #FECACA; border-radius: 8px; padding: 12px; color: #991B1B; font-size: 14px;",
                                    "{message}"
                                }
                            }

                            div {
                                style: "display: flex; gap: 12px; padding-top: 16px;",
                                button {
                                    r#type: "button",
                                    class: "btn-secondary",
                                    style: "flex: 1;",
                                    disabled: is_submitting,
                                    onclick: move |_| on_close(()),
                                    "Cancel"
                                }
                                button {
                                    r#type: "submit",
                                    class: "btn-primary",
                                    style: "flex: 1;",
                                    disabled: is_submitting,
                                    if is_submitting { "Submitting..." } else { "Submit Enrollment" }
                                }
                            }

                            div {
                                style: "text-align: center; padding-top: 16px; border-top: 1px solid #E5E7EB; font-size: 12px; color: #6B7280;",
                                "Need help? Call us at "
                                a { href: "tel:{INSTITUTE_PHONE}", style: "color: #2563EB;", "{INSTITUTE_PHONE}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
