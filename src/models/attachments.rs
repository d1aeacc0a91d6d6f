/// Session attachments, stored by the backend as one comma-joined string of
/// URLs. Order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttachmentList {
    urls: Vec<String>,
}

impl AttachmentList {
    pub fn parse(raw: Option<&str>) -> Self {
        let urls = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect();
        Self { urls }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Entries whose checkbox position is still checked, in their original
    /// order. Positions are used instead of URLs so duplicate entries can be
    /// dropped one at a time.
    pub fn retain_positions(&self, checked: &[usize]) -> Self {
        Self {
            urls: self
                .urls
                .iter()
                .enumerate()
                .filter(|(i, _)| checked.contains(i))
                .map(|(_, url)| url.clone())
                .collect(),
        }
    }

    pub fn joined(&self) -> String {
        self.urls.join(",")
    }
}

/// Display name of an attachment (last path segment)
pub fn filename_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => url,
    }
}
