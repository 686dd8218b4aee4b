//! Error boundary components for rendering failures.

use dioxus::prelude::*;

fn format_boundary_error(err: &ErrorContext) -> String {
    match err.error() {
        Some(error) => format!("{:#?}", error.0),
        None => "Unknown error".to_string(),
    }
}

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = format_boundary_error(&err);
                dioxus::logger::tracing::error!("render failure in {} boundary: {error_txt}", boundary_name.read());
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: flex-start; padding: 15px;",
                        h1 {
                            style: "color:red; font-size: 40px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px;",
                            "Something went wrong",
                        }
                        p {
                            style: "color:darkred; font-size: 20px; margin: 5px;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 8px; border-radius: 5px; margin: 5px;",
                            "Return to Home Page"
                        }
                        pre {
                            style: "color:black; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto;",
                            "{error_txt}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = format_boundary_error(&err);
                dioxus::logger::tracing::error!("render failure in component boundary: {error_txt}");
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color:blue; font-size: 20px; border: 1px solid blue; padding: 8px; border-radius: 5px; margin: 10px;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color:red; font-size: 28px; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px;",
                "Component Error",
            }

            pre {
                style: "color:darkred; border: 1px solid red; padding: 10px; border-radius: 5px; margin: 5px; text-wrap: auto; max-width: 480px; max-height: 360px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
