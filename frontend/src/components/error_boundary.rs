//! Error boundary component for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render error in boundary {}: {:#?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: "
                            min-height: 60vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            gap: 16px;
                            padding: 32px;
                            text-align: center;
                            background: #F9FAFB;
                        ",
                        h1 {
                            style: "font-size: 28px; font-weight: 700; color: #111827;",
                            "Oops! Something went wrong"
                        }
                        p {
                            style: "color: #4B5563; max-width: 480px;",
                            "We're sorry for the inconvenience. Please refresh the page or try again later."
                        }
                        a {
                            href: "/",
                            class: "btn-primary",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color: #991B1B; font-size: 12px; max-width: 600px; text-wrap: auto;",
                            "Boundary: {boundary_name}\n{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}
