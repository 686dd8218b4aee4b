//! Breadcrumb trail for page headers.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdChevronRight;

use crate::routes::Route;

/// One entry in the breadcrumb trail. Ancestor crumbs link somewhere,
/// the current page is rendered as plain text with `to: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub to: Option<Route>,
}

impl Crumb {
    pub fn link(label: &str, to: Route) -> Self {
        Self {
            label: label.to_string(),
            to: Some(to),
        }
    }

    pub fn current(label: &str) -> Self {
        Self {
            label: label.to_string(),
            to: None,
        }
    }
}

#[component]
pub fn Breadcrumb(crumbs: Vec<Crumb>) -> Element {
    rsx! {
        nav {
            aria_label: "Breadcrumb",
            style: "margin: 16px 0;",
            ol {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 6px;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    font-size: 14px;
                    color: #6B7280;
                ",
                for (i, crumb) in crumbs.iter().enumerate() {
                    if i > 0 {
                        li {
                            aria_hidden: "true",
                            Icon { icon: MdChevronRight, style: "width: 16px; height: 16px;" }
                        }
                    }
                    li {
                        {match &crumb.to {
                            Some(to) => rsx! {
                                Link {
                                    to: to.clone(),
                                    style: "color: #6B7280; text-decoration: none;",
                                    "{crumb.label}"
                                }
                            },
                            None => rsx! {
                                span {
                                    aria_current: "page",
                                    style: "color: #111827;",
                                    "{crumb.label}"
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}
