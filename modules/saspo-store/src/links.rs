use saspo_common::LinkEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddLinkOutcome {
    Added,
    /// The url is already listed; nothing changed.
    Duplicate,
    /// Title or url was blank; nothing changed.
    MissingField,
}

/// Append `title`/`url` unless either is blank or the url is already present.
pub fn add_link(links: &mut Vec<LinkEntry>, title: &str, url: &str) -> AddLinkOutcome {
    let title = title.trim();
    let url = url.trim();
    if title.is_empty() || url.is_empty() {
        return AddLinkOutcome::MissingField;
    }
    if links.iter().any(|l| l.url == url) {
        return AddLinkOutcome::Duplicate;
    }
    links.push(LinkEntry::new(title, url));
    AddLinkOutcome::Added
}

/// Remove every entry with exactly this url. Returns how many were dropped.
pub fn remove_links(links: &mut Vec<LinkEntry>, url: &str) -> usize {
    let before = links.len();
    links.retain(|l| l.url != url);
    before - links.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_url_is_a_noop() {
        let mut links = vec![LinkEntry::new("Reel", "https://youtu.be/x")];
        assert_eq!(
            add_link(&mut links, "Other title", "https://youtu.be/x"),
            AddLinkOutcome::Duplicate
        );
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "Reel");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut links = Vec::new();
        assert_eq!(add_link(&mut links, "  ", "https://a"), AddLinkOutcome::MissingField);
        assert_eq!(add_link(&mut links, "A", ""), AddLinkOutcome::MissingField);
        assert!(links.is_empty());
    }

    #[test]
    fn remove_drops_all_matches_only() {
        let mut links = vec![
            LinkEntry::new("A", "https://a"),
            LinkEntry::new("B", "https://b"),
            LinkEntry::new("A again", "https://a"),
        ];
        assert_eq!(remove_links(&mut links, "https://a"), 2);
        assert_eq!(links, vec![LinkEntry::new("B", "https://b")]);
        assert_eq!(remove_links(&mut links, "https://missing"), 0);
    }
}
