use dioxus::prelude::*;

use super::{CardView, HomeView, LegalView, VideoView};
use crate::templates::render_page;

const SW_REGISTER: &str = r#"if ('serviceWorker' in navigator) { navigator.serviceWorker.register('/static/sw.js'); }"#;

#[allow(non_snake_case)]
#[component]
fn Home(view: HomeView) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "Saspo World | AI & Immersive Tech Studio" }
            meta { name: "keywords", content: "{view.keywords}" }
            meta { name: "description", content: "{view.description}" }
            meta { "property": "og:title", content: "Saspo World Technologies" }
            meta { "property": "og:description", content: "{view.description}" }
            link { rel: "icon", href: "/static/img/logo.png" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "bg-gray-950 font-sans text-gray-100",
            header { class: "max-w-6xl mx-auto px-6 py-5 flex items-center justify-between",
                a { href: "/", class: "flex items-center gap-3",
                    img { src: "/static/img/logo.png", alt: "Saspo World", class: "h-10" }
                    span { class: "text-xl font-semibold", "Saspo World" }
                }
                nav { class: "hidden md:flex gap-6 text-sm text-gray-400",
                    a { href: "#games", class: "hover:text-white", "Games" }
                    a { href: "#ai-tools", class: "hover:text-white", "AI Tools" }
                    a { href: "#courses", class: "hover:text-white", "Courses" }
                    a { href: "#team", class: "hover:text-white", "Team" }
                    a { href: "#contact", class: "hover:text-white", "Contact" }
                }
            }

            section { class: "max-w-6xl mx-auto px-6 py-16",
                h1 { class: "text-4xl md:text-5xl font-bold mb-4", "AI & Immersive Tech Studio" }
                p { class: "text-gray-400 max-w-2xl", "{view.description}" }
            }

            section { id: "games", class: "max-w-6xl mx-auto px-6 py-10",
                h2 { class: "text-2xl font-semibold mb-6", "Games" }
                if let Some(featured) = &view.featured {
                    div { class: "mb-8", { render_card(featured, true) } }
                }
                { render_grid(&view.games) }
            }

            section { id: "ai-tools", class: "max-w-6xl mx-auto px-6 py-10",
                h2 { class: "text-2xl font-semibold mb-6", "AI Tools" }
                { render_grid(&view.ai_tools) }
            }

            section { id: "courses", class: "max-w-6xl mx-auto px-6 py-10",
                h2 { class: "text-2xl font-semibold mb-6", "Courses" }
                { render_grid(&view.courses) }
            }

            section { id: "influencers", class: "max-w-6xl mx-auto px-6 py-10",
                h2 { class: "text-2xl font-semibold mb-6", "AI Influencers" }
                { render_grid(&view.influencers) }
            }

            if !view.videos.is_empty() {
                section { id: "videos", class: "max-w-6xl mx-auto px-6 py-10",
                    h2 { class: "text-2xl font-semibold mb-6", "Videos" }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        for video in view.videos.iter() {
                            { render_video(video) }
                        }
                    }
                }
            }

            section { id: "team", class: "max-w-6xl mx-auto px-6 py-10",
                h2 { class: "text-2xl font-semibold mb-6", "Team" }
                { render_grid(&view.team) }
            }

            footer { id: "contact", class: "border-t border-gray-800 mt-10",
                div { class: "max-w-6xl mx-auto px-6 py-10 grid grid-cols-1 md:grid-cols-3 gap-6 text-sm text-gray-400",
                    div {
                        h3 { class: "text-white font-semibold mb-2", "Contact" }
                        if let Some(email) = &view.contact.email {
                            p { a { href: "mailto:{email}", class: "hover:text-white", "{email}" } }
                        }
                        if let Some(phone) = &view.contact.phone {
                            p { "{phone}" }
                        }
                        if let Some(address) = &view.contact.address {
                            p { "{address}" }
                        }
                        if let Some(whatsapp) = &view.contact.whatsapp_url {
                            a {
                                href: "{whatsapp}", target: "_blank", rel: "noopener",
                                class: "inline-block mt-3 px-4 py-2 bg-green-600 text-white rounded hover:bg-green-500",
                                "Chat on WhatsApp"
                            }
                        }
                    }
                    if let Some(privacy) = &view.contact.privacy {
                        { render_legal(privacy) }
                    }
                    if let Some(terms) = &view.contact.terms {
                        { render_legal(terms) }
                    }
                }
            }
            script { dangerous_inner_html: SW_REGISTER }
        }
    }
}

fn render_grid(cards: &[CardView]) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
            for card in cards.iter() {
                { render_card(card, false) }
            }
        }
    }
}

fn render_card(card: &CardView, featured: bool) -> Element {
    let class = if featured {
        "bg-gray-900 border border-blue-700 rounded-lg overflow-hidden md:flex"
    } else {
        "bg-gray-900 border border-gray-800 rounded-lg overflow-hidden"
    };
    rsx! {
        div { class: class,
            if let Some(image) = &card.image {
                img { src: "{image}", alt: "{card.title}", loading: "lazy", class: "w-full md:max-h-72 object-cover" }
            }
            div { class: "p-4",
                h3 { class: "text-lg font-semibold", "{card.title}" }
                if !card.subtitle.is_empty() {
                    p { class: "text-xs uppercase tracking-wide text-blue-400 mb-2", "{card.subtitle}" }
                }
                if !card.body.is_empty() {
                    p { class: "text-sm text-gray-400 mb-3", "{card.body}" }
                }
                if !card.tags.is_empty() {
                    div { class: "flex flex-wrap gap-2 mb-3",
                        for tag in card.tags.iter() {
                            span { class: "text-xs px-2 py-0.5 rounded bg-gray-800 text-gray-300", "{tag}" }
                        }
                    }
                }
                if let Some(link) = &card.link {
                    a { href: "{link}", target: "_blank", rel: "noopener", class: "text-sm text-blue-400 hover:underline", "Learn more" }
                }
            }
        }
    }
}

fn render_video(video: &VideoView) -> Element {
    rsx! {
        div { class: "bg-gray-900 border border-gray-800 rounded-lg overflow-hidden",
            if let Some(embed) = &video.embed_url {
                iframe {
                    src: "{embed}", title: "{video.title}", class: "w-full aspect-video",
                    allow: "accelerometer; clipboard-write; encrypted-media; picture-in-picture",
                    allowfullscreen: true
                }
            }
            div { class: "p-3",
                a { href: "{video.url}", target: "_blank", rel: "noopener", class: "text-sm hover:underline", "{video.title}" }
            }
        }
    }
}

fn render_legal(doc: &LegalView) -> Element {
    rsx! {
        details {
            summary { class: "text-white font-semibold cursor-pointer mb-2", "{doc.heading}" }
            if !doc.updated.is_empty() {
                p { class: "text-xs mb-2", "Last updated: {doc.updated}" }
            }
            if !doc.intro.is_empty() {
                p { class: "mb-2", "{doc.intro}" }
            }
            for section in doc.sections.iter() {
                h4 { class: "text-gray-200 mt-2", "{section.title}" }
                p { "{section.content}" }
            }
        }
    }
}

pub fn render_home(view: HomeView) -> String {
    render_page(VirtualDom::new_with_props(Home, HomeProps { view }))
}
