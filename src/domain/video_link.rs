// SPDX-License-Identifier: MPL-2.0
//! Hosted-video URL helpers.
//!
//! Sermon and gallery rows store plain watch URLs. When a row carries no
//! explicit thumbnail, YouTube links still give us a poster image.

use reqwest::Url;

/// Extracts the YouTube video id from watch, short and embed links.
#[must_use]
pub fn youtube_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.trim_start_matches("www.").trim_start_matches("m.");

    let id = match host {
        "youtu.be" => parsed.path_segments()?.next().map(str::to_string),
        "youtube.com" | "youtube-nocookie.com" => {
            let mut segments = parsed.path_segments()?;
            match segments.next() {
                Some("watch") => parsed
                    .query_pairs()
                    .find(|(key, _)| key == "v")
                    .map(|(_, value)| value.into_owned()),
                Some("embed" | "shorts" | "live") => segments.next().map(str::to_string),
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

/// Poster image for a hosted video, when the host is recognised.
#[must_use]
pub fn poster_url(url: &str) -> Option<String> {
    youtube_id(url).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_common_youtube_forms() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "https://m.youtube.com/shorts/dQw4w9WgXcQ",
        ] {
            assert_eq!(youtube_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{url}");
        }
    }

    #[test]
    fn rejects_other_hosts_and_garbage() {
        assert_eq!(youtube_id("https://vimeo.com/12345"), None);
        assert_eq!(youtube_id("not a url"), None);
        assert_eq!(youtube_id("https://youtube.com/watch?list=abc"), None);
    }

    #[test]
    fn poster_points_at_thumbnail_host() {
        assert_eq!(
            poster_url("https://youtu.be/abc_DEF-123").as_deref(),
            Some("https://img.youtube.com/vi/abc_DEF-123/hqdefault.jpg")
        );
    }
}
