const DEFAULT_TAG: &str = "latest";

/// Only the first `:` after the last `/` separates the tag.
pub fn format_image(image: Option<&str>) -> Option<String> {
    let image = image?;
    if image.is_empty() {
        return Some(String::new());
    }

    let (repo, image) = match image.rfind('/') {
        Some(idx) => image.split_at(idx + 1),
        None => ("", image),
    };

    let mut parts = image.split(':');
    let base = parts.next().unwrap_or_default();
    let tag = parts.next().unwrap_or(DEFAULT_TAG);

    Some(format!("{}{}:{}", repo, base, tag))
}
