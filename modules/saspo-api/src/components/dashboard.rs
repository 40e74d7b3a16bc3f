use dioxus::prelude::*;

use super::layout::Layout;
use super::{AssetRow, DashboardView, LinkRow};
use crate::templates::render_page;

#[allow(non_snake_case)]
#[component]
fn Dashboard(view: DashboardView) -> Element {
    let asset_count = view.assets.len();
    let link_count = view.links.len();
    rsx! {
        Layout { title: "Dashboard".to_string(),
            if let Some(flash) = &view.flash {
                div { class: "{flash.class}", "{flash.message}" }
            }
            div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                // Content editor
                div { class: "lg:col-span-2 bg-white border border-gray-200 rounded-lg p-4",
                    h2 { class: "font-semibold mb-3", "Site Content (JSON)" }
                    form { method: "POST", action: "/update_data",
                        textarea {
                            name: "json_data", id: "json_data", rows: "32", spellcheck: "false",
                            class: "w-full px-3 py-2 border border-gray-300 rounded font-mono text-xs",
                            "{view.json_text}"
                        }
                        button {
                            r#type: "submit",
                            class: "mt-3 px-6 py-2 bg-blue-600 text-white rounded text-sm cursor-pointer hover:bg-blue-800",
                            "Save Changes"
                        }
                    }
                }

                div { class: "flex flex-col gap-6",
                    // Upload
                    div { class: "bg-white border border-gray-200 rounded-lg p-4",
                        h2 { class: "font-semibold mb-3", "Upload Asset" }
                        form { method: "POST", action: "/upload_file", enctype: "multipart/form-data",
                            input {
                                r#type: "file", name: "file", required: true,
                                accept: ".png,.jpg,.jpeg,.gif,.webp,.mp4,.webm",
                                class: "w-full text-sm mb-3"
                            }
                            button {
                                r#type: "submit",
                                class: "px-6 py-2 bg-blue-600 text-white rounded text-sm cursor-pointer hover:bg-blue-800",
                                "Upload"
                            }
                        }
                    }

                    // Links
                    div { class: "bg-white border border-gray-200 rounded-lg p-4",
                        h2 { class: "font-semibold mb-3", "Video Links ({link_count})" }
                        form { method: "POST", action: "/add_link", class: "flex flex-col gap-2 mb-4",
                            input {
                                r#type: "text", name: "title", required: true, placeholder: "Title",
                                class: "px-3 py-2 border border-gray-300 rounded text-sm"
                            }
                            input {
                                r#type: "url", name: "url", required: true, placeholder: "https://youtu.be/...",
                                class: "px-3 py-2 border border-gray-300 rounded text-sm"
                            }
                            button {
                                r#type: "submit",
                                class: "px-6 py-2 bg-gray-800 text-white rounded text-sm cursor-pointer hover:bg-gray-700",
                                "Add Link"
                            }
                        }
                        if view.links.is_empty() {
                            p { class: "text-sm text-gray-400", "No links yet." }
                        }
                        for link in view.links.iter() {
                            { render_link_row(link) }
                        }
                    }

                    a {
                        href: "/download_manual",
                        class: "block text-center px-6 py-2 border border-gray-300 rounded text-sm hover:bg-gray-100",
                        "Download Operations Manual"
                    }
                }
            }

            // Assets
            div { class: "bg-white border border-gray-200 rounded-lg p-4 mt-6",
                div { class: "flex items-center justify-between mb-3",
                    h2 { class: "font-semibold", "Assets ({asset_count})" }
                    span { class: "text-xs text-gray-400", "Usage matching: {view.reference_mode}" }
                }
                if view.assets.is_empty() {
                    p { class: "text-sm text-gray-400", "The asset folder is empty." }
                }
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                    for asset in view.assets.iter() {
                        { render_asset_card(asset) }
                    }
                }
            }
        }
    }
}

fn usage_badge(label: &str, in_use: bool) -> Element {
    let class = if in_use {
        "text-xs px-2 py-0.5 rounded bg-green-100 text-green-800"
    } else {
        "text-xs px-2 py-0.5 rounded bg-gray-100 text-gray-500"
    };
    rsx! { span { class: class, "{label}" } }
}

fn render_link_row(link: &LinkRow) -> Element {
    rsx! {
        div { class: "flex items-center justify-between gap-2 py-2 border-t border-gray-100",
            div { class: "min-w-0",
                div { class: "text-sm font-medium truncate", "{link.title}" }
                a { href: "{link.url}", target: "_blank", rel: "noopener", class: "text-xs text-blue-600 truncate block", "{link.url}" }
            }
            div { class: "flex items-center gap-2 shrink-0",
                { usage_badge(&link.usage_label, link.in_use) }
                form { method: "POST", action: "/delete_link",
                    input { r#type: "hidden", name: "url", value: "{link.url}" }
                    button {
                        r#type: "submit",
                        class: "text-xs text-red-600 hover:underline cursor-pointer",
                        "Delete"
                    }
                }
            }
        }
    }
}

fn render_asset_card(asset: &AssetRow) -> Element {
    rsx! {
        div { class: "border border-gray-200 rounded p-2 flex flex-col gap-2",
            if asset.is_video {
                video { src: "{asset.src}", class: "w-full h-28 object-cover bg-gray-100", muted: true }
            } else {
                img { src: "{asset.src}", alt: "{asset.name}", class: "w-full h-28 object-contain bg-gray-100" }
            }
            div { class: "text-xs font-mono break-all", "{asset.name}" }
            div { class: "flex items-center justify-between",
                { usage_badge(&asset.usage_label, asset.in_use) }
                if asset.protected {
                    span { class: "text-xs text-gray-400", "Protected" }
                } else {
                    form { method: "POST", action: "{asset.delete_action}",
                        button {
                            r#type: "submit",
                            class: "text-xs text-red-600 hover:underline cursor-pointer",
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

pub fn render_dashboard(view: DashboardView) -> String {
    render_page(VirtualDom::new_with_props(Dashboard, DashboardProps { view }))
}
