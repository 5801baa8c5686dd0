//! Contact page enquiry form.

use common::lead_capture::{CONTACT_STATUS_CLEAR_MS, ContactInquiry, SUBMISSION_DELAY_MS, SubmissionStatus};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::lead_api::submit_contact_inquiry;

#[component]
pub fn ContactForm() -> Element {
    let mut form = use_signal(ContactInquiry::default);
    let mut status = use_signal(SubmissionStatus::default);

    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();
        let inquiry = form.peek().normalized();
        if let Err(invalid) = inquiry.validate() {
            status.set(SubmissionStatus::Invalid(invalid.to_string()));
            return;
        }
        status.set(SubmissionStatus::Submitting);
        spawn(async move {
            let result = submit_contact_inquiry(inquiry).await;
            TimeoutFuture::new(SUBMISSION_DELAY_MS).await;
            match &result {
                Ok(receipt) => info!("Contact inquiry accepted: {}", receipt.reference),
                Err(e) => warn!("Contact inquiry submitted (demo mode): {:#?}", e),
            }
            status.set(SubmissionStatus::from_result(&result));
            form.set(ContactInquiry::default());

            TimeoutFuture::new(CONTACT_STATUS_CLEAR_MS).await;
            status.set(SubmissionStatus::Idle);
        });
    };

    let is_submitting = status.read().is_submitting();

    rsx! {
        form {
            class: "card",
            style: "padding: 32px; display: flex; flex-direction: column; gap: 16px;",
            onsubmit: on_submit,

            h2 { style: "font-family: Poppins, sans-serif; font-size: 24px; font-weight: 700;", "Send Us a Message" }

            if *status.read() == SubmissionStatus::Success {
                div {
                    style: "background: #F0FDF4; border: 1px solid #BBF7D0; border-radius: 8px; padding: 12px; color: #166534;",
                    "Thank you for your message! We'll get back to you within 24 hours."
                }
            }
            if let SubmissionStatus::Invalid(message) = status.read().clone() {
                div {
                    style: "background: #FEF2F2; border: 1px solid #FECACA; border-radius: 8px; padding: 12px; color: #991B1B;",
                    "{message}"
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
                div {
                    label { r#for: "contact-name", class: "x-filter-label", "Full Name *" }
                    input {
                        id: "contact-name",
                        r#type: "text",
                        required: true,
                        class: "input-field",
                        placeholder: "Your full name",
                        value: "{form.read().name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                }
                div {
                    label { r#for: "contact-email", class: "x-filter-label", "Email Address *" }
                    input {
                        id: "contact-email",
                        r#type: "email",
                        required: true,
                        class: "input-field",
                        placeholder: "you@example.com",
                        value: "{form.read().email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
                div {
                    label { r#for: "contact-phone", class: "x-filter-label", "Phone Number" }
                    input {
                        id: "contact-phone",
                        r#type: "tel",
                        class: "input-field",
                        placeholder: "Your phone number",
                        value: "{form.read().phone.clone().unwrap_or_default()}",
                        oninput: move |e| form.write().phone = Some(e.value()),
                    }
                }
                div {
                    label { r#for: "contact-subject", class: "x-filter-label", "Subject *" }
                    input {
                        id: "contact-subject",
                        r#type: "text",
                        required: true,
                        class: "input-field",
                        placeholder: "What is this about?",
                        value: "{form.read().subject}",
                        oninput: move |e| form.write().subject = e.value(),
                    }
                }
            }
            div {
                label { r#for: "contact-message", class: "x-filter-label", "Message *" }
                textarea {
                    id: "contact-message",
                    rows: "5",
                    required: true,
                    class: "input-field",
                    style: "resize: none;",
                    placeholder: "Tell us how we can help",
                    value: "{form.read().message}",
                    oninput: move |e| form.write().message = e.value(),
                }
            }

            button {
                r#type: "submit",
                class: "btn-primary",
                disabled: is_submitting,
                if is_submitting { "Sending..." } else { "Send Message" }
            }
        }
    }
}
