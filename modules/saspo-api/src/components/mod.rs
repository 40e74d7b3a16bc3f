use serde_json::Value;

use saspo_common::{is_protected_asset, Flash, FlashLevel, LinkEntry};
use saspo_store::{DashboardSnapshot, UsageKind};

use crate::seo::SeoMeta;

pub mod dashboard;
pub mod home;
pub mod layout;
pub mod login;

pub use dashboard::render_dashboard;
pub use home::render_home;
pub use login::render_login;

/// Game id the home page shows as the full-width featured project.
pub const FEATURED_GAME_ID: &str = "drone-3d";

// --- View Models ---

#[derive(Clone, PartialEq)]
pub struct FlashView {
    pub message: String,
    pub class: String,
}

pub fn flash_to_view(flash: &Flash) -> FlashView {
    let class = match flash.level {
        FlashLevel::Success => "bg-green-50 border border-green-200 text-green-800",
        FlashLevel::Error => "bg-red-50 border border-red-200 text-red-800",
    };
    FlashView {
        message: flash.message.clone(),
        class: format!("{class} text-sm px-3 py-2 rounded mb-4"),
    }
}

#[derive(Clone, PartialEq)]
pub struct AssetRow {
    pub name: String,
    pub src: String,
    pub delete_action: String,
    pub usage_label: String,
    pub in_use: bool,
    pub protected: bool,
    pub is_video: bool,
}

#[derive(Clone, PartialEq)]
pub struct LinkRow {
    pub title: String,
    pub url: String,
    pub usage_label: String,
    pub in_use: bool,
}

#[derive(Clone, PartialEq)]
pub struct DashboardView {
    pub json_text: String,
    pub assets: Vec<AssetRow>,
    pub links: Vec<LinkRow>,
    pub flash: Option<FlashView>,
    pub reference_mode: String,
}

fn usage_label(line: Option<usize>) -> String {
    match line {
        Some(line) => format!("Line {line}"),
        None => "unused".to_string(),
    }
}

/// Percent-encoded `/delete_file/<name>` path.
pub fn delete_file_action(name: &str) -> String {
    let mut url = match url::Url::parse("http://localhost/delete_file/") {
        Ok(url) => url,
        Err(_) => return format!("/delete_file/{name}"),
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(name);
    }
    url.path().to_string()
}

pub fn dashboard_to_view(
    snapshot: DashboardSnapshot,
    flash: Option<&Flash>,
    reference_mode: String,
) -> DashboardView {
    let line_for = |target: &str, kind: UsageKind| {
        snapshot
            .usage
            .iter()
            .find(|u| u.kind == kind && u.target == target)
            .and_then(|u| u.line)
    };

    let assets = snapshot
        .assets
        .iter()
        .map(|name| {
            let line = line_for(name, UsageKind::Asset);
            let lower = name.to_ascii_lowercase();
            AssetRow {
                name: name.clone(),
                src: format!("/static/img/{name}"),
                delete_action: delete_file_action(name),
                usage_label: usage_label(line),
                in_use: line.is_some(),
                protected: is_protected_asset(name),
                is_video: lower.ends_with(".mp4") || lower.ends_with(".webm"),
            }
        })
        .collect();

    let links = snapshot
        .links
        .iter()
        .map(|link| {
            let line = line_for(&link.url, UsageKind::Link);
            LinkRow {
                title: link.title.clone(),
                url: link.url.clone(),
                usage_label: usage_label(line),
                in_use: line.is_some(),
            }
        })
        .collect();

    DashboardView {
        json_text: snapshot.json_text,
        assets,
        links,
        flash: flash.map(flash_to_view),
        reference_mode,
    }
}

// --- Public page ---

#[derive(Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub image: Option<String>,
    pub link: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq)]
pub struct VideoView {
    pub title: String,
    pub url: String,
    pub embed_url: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct LegalSection {
    pub title: String,
    pub content: String,
}

#[derive(Clone, PartialEq)]
pub struct LegalView {
    pub heading: String,
    pub updated: String,
    pub intro: String,
    pub sections: Vec<LegalSection>,
}

#[derive(Clone, PartialEq)]
pub struct ContactView {
    pub whatsapp_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub privacy: Option<LegalView>,
    pub terms: Option<LegalView>,
}

#[derive(Clone, PartialEq)]
pub struct HomeView {
    pub keywords: String,
    pub description: String,
    pub featured: Option<CardView>,
    pub games: Vec<CardView>,
    pub ai_tools: Vec<CardView>,
    pub courses: Vec<CardView>,
    pub team: Vec<CardView>,
    pub influencers: Vec<CardView>,
    pub videos: Vec<VideoView>,
    pub contact: ContactView,
}

fn first_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| value.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn str_list(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Bare filenames live in the asset folder; anything with a slash is used as-is.
pub fn asset_src(image: &str) -> String {
    if image.contains('/') {
        image.to_string()
    } else {
        format!("/static/img/{image}")
    }
}

fn card(value: &Value, subtitle_keys: &[&str], body_keys: &[&str], tags_key: &str) -> CardView {
    let link = first_str(value, &["link", "url"]).or_else(|| {
        value
            .get("socials")
            .and_then(|s| first_str(s, &["linkedin"]))
    });
    CardView {
        title: first_str(value, &["title", "name"]).unwrap_or_default(),
        subtitle: first_str(value, subtitle_keys).unwrap_or_default(),
        body: first_str(value, body_keys).unwrap_or_default(),
        image: first_str(value, &["img", "image"]).map(|i| asset_src(&i)),
        link: link.filter(|l| l != "#"),
        tags: str_list(value, tags_key),
    }
}

fn cards(content: &Value, key: &str, subtitle_keys: &[&str], body_keys: &[&str], tags_key: &str) -> Vec<CardView> {
    match content.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| card(v, subtitle_keys, body_keys, tags_key))
            .collect(),
        _ => Vec::new(),
    }
}

/// The video id from the usual YouTube URL shapes.
pub fn youtube_id(raw: &str) -> Option<String> {
    let url = url::Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.trim_start_matches("www.").trim_start_matches("m.");
    let id = match host {
        "youtu.be" => url.path_segments()?.next().map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" => {
            let mut segments = url.path_segments()?;
            match segments.next() {
                Some("watch") => url
                    .query_pairs()
                    .find(|(k, _)| k == "v")
                    .map(|(_, v)| v.into_owned()),
                Some("embed") | Some("shorts") | Some("live") | Some("v") => {
                    segments.next().map(str::to_string)
                }
                _ => None,
            }
        }
        _ => None,
    }?;
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(id)
}

fn legal(contact: &Value, key: &str, heading: &str) -> Option<LegalView> {
    let doc = contact.get(key)?;
    let sections = match doc.get("sections") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|s| LegalSection {
                title: first_str(s, &["title"]).unwrap_or_default(),
                content: first_str(s, &["content"]).unwrap_or_default(),
            })
            .collect(),
        _ => Vec::new(),
    };
    Some(LegalView {
        heading: heading.to_string(),
        updated: first_str(doc, &["updated"]).unwrap_or_default(),
        intro: first_str(doc, &["intro"]).unwrap_or_default(),
        sections,
    })
}

pub fn home_to_view(content: &Value, links: &[LinkEntry], seo: SeoMeta) -> HomeView {
    let mut featured = None;
    let mut games = Vec::new();
    if let Some(Value::Object(map)) = content.get("games") {
        for (id, game) in map {
            let view = card(game, &["genre"], &["description"], "features");
            if id == FEATURED_GAME_ID {
                featured = Some(view);
            } else {
                games.push(view);
            }
        }
    }

    let courses = cards(content, "courses", &["duration", "level"], &["description", "level"], "modules");
    let contact_doc = content.get("contact").cloned().unwrap_or(Value::Null);

    HomeView {
        keywords: seo.keywords,
        description: seo.description,
        featured,
        games,
        ai_tools: cards(content, "ai_tools", &["icon"], &["desc", "description"], "tags"),
        courses,
        team: cards(content, "team", &["role", "position"], &["bio", "description"], "skills"),
        influencers: cards(content, "ai_influencers", &["niche", "role"], &["bio", "description"], "tags"),
        videos: links
            .iter()
            .map(|link| VideoView {
                title: link.title.clone(),
                url: link.url.clone(),
                embed_url: youtube_id(&link.url)
                    .map(|id| format!("https://www.youtube.com/embed/{id}")),
            })
            .collect(),
        contact: ContactView {
            whatsapp_url: first_str(&contact_doc, &["whatsapp_url"]),
            email: first_str(&contact_doc, &["email"]),
            phone: first_str(&contact_doc, &["phone"]),
            address: first_str(&contact_doc, &["address", "location"]),
            privacy: legal(&contact_doc, "privacy", "Privacy Policy"),
            terms: legal(&contact_doc, "terms", "Terms of Service"),
        },
    }
}
