use dioxus::prelude::*;

struct NavItem {
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "View Site", href: "/" },
    NavItem { label: "Manual (PDF)", href: "/download_manual" },
    NavItem { label: "Logout", href: "/logout" },
];

/// Admin shell: top bar and page body.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, children: Element) -> Element {
    let full_title = format!("{title} | Saspo Admin");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            meta { name: "robots", content: "noindex" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            header { class: "bg-gray-900 text-white",
                div { class: "max-w-6xl mx-auto px-6 py-3 flex items-center justify-between",
                    a { href: "/dashboard", class: "text-lg font-semibold", "Saspo Admin" }
                    nav { class: "flex gap-4",
                        for item in NAV_ITEMS.iter() {
                            {
                                let href = item.href;
                                let label = item.label;
                                rsx! { a { href: href, class: "text-sm text-gray-300 hover:text-white", "{label}" } }
                            }
                        }
                    }
                }
            }
            main { class: "max-w-6xl mx-auto px-6 py-6",
                {children}
            }
        }
    }
}
