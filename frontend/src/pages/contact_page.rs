use dioxus::prelude::*;
use dioxus_free_icons::icons::md_communication_icons::{MdEmail, MdLocationOn, MdPhone};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::lead_components::{contact_form::ContactForm, enroll_modal::EnrollModal};
use crate::components::navbar::{INSTITUTE_ADDRESS, INSTITUTE_EMAIL, INSTITUTE_PHONE};

const OFFICE_HOURS: &str = "Mon-Sat: 9AM-7PM";

const CONTACT_FAQS: [(&str, &str); 5] = [
    (
        "What are the admission requirements?",
        "Most courses only require basic computer knowledge. Specific prerequisites are listed on each course page.",
    ),
    (
        "Do you provide certificates?",
        "Yes, we provide industry-recognized certificates upon successful completion of each course.",
    ),
    (
        "What are the payment options?",
        "We accept cash, bank transfer, UPI payments, and offer installment plans for longer courses.",
    ),
    (
        "Can I switch batches if needed?",
        "Yes, you can switch to another batch of the same course based on availability and valid reasons.",
    ),
    (
        "Do you provide job placement assistance?",
        "Yes, we offer career guidance, resume preparation, and job placement assistance to all our students.",
    ),
];


/// Contact page: details, enquiry form and a general enrollment dialog.
#[component]
pub fn ContactPage() -> Element {
    let mut enroll_open = use_signal(|| false);

    rsx! {
        Title { "Contact CSG Education - Get in Touch | Address, Phone, Email" }
        section {
            class: "x-page-hero",
            h1 { "Get in Touch" }
            p { "Ready to start your learning journey? Contact us for course information, admissions, or any questions you may have." }
        }

        section {
            style: "padding: 64px 24px; background: #F9FAFB;",
            div {
                style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 32px;",
                ContactInfoCard {
                    icon: MdLocationOn,
                    title: "Visit Us",
                    details: INSTITUTE_ADDRESS.iter().map(|line| line.to_string()).collect::<Vec<_>>(),
                }
                ContactInfoCard {
                    icon: MdPhone,
                    title: "Call Us",
                    details: vec![INSTITUTE_PHONE.to_string(), OFFICE_HOURS.to_string()],
                }
                ContactInfoCard {
                    icon: MdEmail,
                    title: "Email Us",
                    details: vec![INSTITUTE_EMAIL.to_string()],
                }
            }
        }

        section {
            style: "padding: 64px 24px;",
            div {
                style: "max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px;",
                ContactForm {}
                div {
                    style: "display: flex; flex-direction: column; gap: 32px;",
                    div {
                        class: "card",
                        div {
                            style: "height: 256px; background: linear-gradient(135deg, #DBEAFE 0%, #EDE9FE 100%); display: flex; align-items: center; justify-content: center; text-align: center;",
                            div {
                                p { style: "color: #4B5563; font-weight: 500;", "CSG Education Campus" }
                                p { style: "color: #6B7280; font-size: 14px;", "Peelamedu, Coimbatore-641004" }
                            }
                        }
                        div {
                            style: "padding: 24px;",
                            h3 { style: "font-weight: 600; color: #111827; margin-bottom: 8px;", "Visit Our Campus" }
                            p { style: "color: #4B5563; font-size: 14px; margin-bottom: 16px;", "Come see our modern facilities and speak with our admission counselors in person." }
                            p { style: "color: #6B7280; font-size: 14px;", strong { "Office Hours: " } "Monday - Saturday, 9:00 AM - 7:00 PM" }
                        }
                    }
                    div {
                        style: "background: #2563EB; border-radius: 12px; padding: 32px; color: white;",
                        h3 { style: "font-size: 20px; font-weight: 600; margin-bottom: 16px;", "Ready to Enroll?" }
                        p { style: "opacity: 0.9; margin-bottom: 24px;", "Skip the wait and start your enrollment process online. Our team will contact you within 24 hours." }
                        button {
                            class: "btn-accent",
                            style: "width: 100%;",
                            onclick: move |_| enroll_open.set(true),
                            "Start Enrollment Process"
                        }
                    }
                }
            }
        }

        section {
            style: "padding: 64px 24px; background: #F9FAFB;",
            div {
                style: "max-width: 900px; margin: 0 auto;",
                h2 { class: "x-section-title", "Frequently Asked Questions" }
                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    for (question, answer) in CONTACT_FAQS {
                        details {
                            key: "{question}",
                            class: "card",
                            summary { style: "padding: 24px; cursor: pointer; font-weight: 500; color: #111827;", "{question}" }
                            p { style: "padding: 0 24px 24px 24px; color: #374151;", "{answer}" }
                        }
                    }
                }
            }
        }

        section {
            style: "padding: 64px 24px; background: #2563EB; color: white; text-align: center;",
            h2 { style: "font-family: Poppins, sans-serif; font-size: 30px; font-weight: 700; margin-bottom: 16px;", "Still Have Questions?" }
            p { style: "font-size: 20px; opacity: 0.9; margin-bottom: 32px;", "Our friendly team is here to help you choose the right course for your career goals" }
            div {
                style: "display: flex; gap: 16px; justify-content: center; flex-wrap: wrap;",
                a { class: "btn-accent", href: "tel:{INSTITUTE_PHONE}", "Call Now: {INSTITUTE_PHONE}" }
                a { class: "btn-secondary", href: "mailto:{INSTITUTE_EMAIL}", "Send Email" }
            }
        }

        // no course preselected
        EnrollModal {
            is_open: enroll_open,
            on_close: move |_| enroll_open.set(false),
            course_title: String::new(),
        }
    }
}

#[component]
fn ContactInfoCard<I: IconShape + Clone + PartialEq + 'static>(icon: I, title: String, details: Vec<String>) -> Element {
    rsx! {
        div {
            class: "card",
            style: "padding: 24px; text-align: center;",
            div {
                style: "width: 64px; height: 64px; margin: 0 auto 16px auto; border-radius: 9999px; background: #DBEAFE; display: flex; align-items: center; justify-content: center;",
                Icon { icon: icon, style: "width: 32px; height: 32px; color: #2563EB;" }
            }
            h3 { style: "font-size: 20px; font-weight: 600; color: #111827; margin-bottom: 16px;", "{title}" }
            div {
                style: "color: #4B5563; display: flex; flex-direction: column; gap: 4px;",
                for detail in details.iter() {
                    p { key: "{detail}", "{detail}" }
                }
            }
        }
    }
}
