use dioxus::prelude::*;

use common::testimonials::{TESTIMONIALS, Testimonial};

use crate::routes::Route;


/// Student testimonials
#[component]
pub fn SuccessPage() -> Element {
    rsx! {
        Title { "Success Stories - CSG Education" }
        section {
            style: "padding: 64px 24px; max-width: 1200px; margin: 0 auto;",
            h2 { class: "x-section-title", "Success Stories" }
            p {
                style: "text-align: center; font-size: 18px; color: #4B5563; max-width: 640px; margin: 0 auto 48px auto;",
                "Real testimonials from students who have transformed their careers with our training"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px;",
                for testimonial in TESTIMONIALS {
                    TestimonialCard { key: "{testimonial.name}", testimonial }
                }
            }
            div {
                style: "text-align: center; margin-top: 48px;",
                Link { class: "btn-primary", to: Route::all_courses(), "Start Your Own Story" }
            }
        }
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        figure {
            class: "card",
            style: "padding: 24px; margin: 0;",
            div {
                style: "display: flex; align-items: center; margin-bottom: 16px;",
                img {
                    src: testimonial.image,
                    alt: testimonial.name,
                    style: "width: 48px; height: 48px; border-radius: 9999px; object-fit: cover; margin-right: 16px;",
                }
                div {
                    h4 { style: "font-weight: 600; color: #111827;", "{testimonial.name}" }
                    p { style: "font-size: 14px; color: #4B5563;", "{testimonial.course}" }
                }
            }
            div {
                style: "color: #FACC15; margin-bottom: 12px; letter-spacing: 2px;",
                "aria-label": "{testimonial.rating} out of 5 stars",
                "{testimonial.stars()}"
            }
            blockquote { style: "color: #374151; font-style: italic; margin: 0;", "\"{testimonial.text}\"" }
        }
    }
}
