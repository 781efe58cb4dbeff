//! Video embed URL normalization.
//!
//! Course pages store YouTube iframe sources in wildly inconsistent forms
//! (`embed/xyz`, `//www.youtube.com/embed/xyz`, scheme-less paths). The
//! normalizer rewrites them into canonical absolute URLs. The fixup steps
//! overlap and are applied in a fixed order; later steps only act when an
//! earlier step has not already produced an `http`-prefixed result.

use regex::{Captures, Regex};

/// Normalize one iframe `src` value containing `embed/`.
pub fn normalize_embed_src(src: &str) -> String {
    // Insert a slash before `embed/` where it is missing.
    let mut temp = if src.contains("/embed/") {
        src.to_string()
    } else {
        src.replace("embed/", "/embed/")
    };

    // Collapse leading slashes down to one (e.g. `//www.youtube.com`).
    while temp.starts_with("//") {
        temp.remove(0);
    }

    if temp.starts_with("/www.youtube.com/embed") {
        temp = format!("https:/{}", temp);
    } else if temp.starts_with("/embed/") {
        temp = format!("https://www.youtube.com{}", temp);
    }

    // Last resort: rebuild from whatever follows the `/embed/` marker.
    if !temp.starts_with("http") {
        let parts: Vec<&str> = temp.splitn(2, "/embed/").collect();
        if parts.len() == 2 {
            temp = format!("https://www.youtube.com/embed/{}", parts[1]);
        }
    }

    temp
}

/// Rewrite every iframe `src` containing `embed/` in an HTML fragment.
///
/// Runs over the raw markup; everything outside the matched `src`
/// attributes is left byte-for-byte untouched.
pub fn rewrite_video_embeds(html: &str) -> String {
    let iframe_src =
        Regex::new(r#"(?is)(<iframe\b[^>]*?src\s*=\s*)(["'])([^"']*)(["'])"#).unwrap();

    iframe_src
        .replace_all(html, |caps: &Captures| {
            let src = &caps[3];
            tracing::debug!("iframe src: {}", src);

            if src.contains("embed/") {
                let fixed = normalize_embed_src(src);
                tracing::debug!("rewrote embed src to {}", fixed);
                format!("{}{}{}{}", &caps[1], &caps[2], fixed, &caps[4])
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
