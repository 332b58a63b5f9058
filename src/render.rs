//! Markdown to HTML rendering.
//!
//! The pipeline is fixed: convert the report body with GFM-parity options
//! and slugified heading ids, entity-encode email autolinks in the rendered
//! fragment, then wrap the fragment in a document shell with the stylesheet
//! inlined. Rendering is pure; identical inputs produce byte-identical
//! output.

use comrak::{markdown_to_html, Options};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Email autolinks as emitted by the autolink extension.
    static ref MAILTO_LINK: Regex =
        Regex::new(r#"<a href="mailto:([^"]+)">([^<]*)</a>"#).unwrap();
}

fn conversion_options() -> Options {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    // Stable URL-safe heading ids, so anchor links survive re-renders.
    options.extension.header_ids = Some(String::new());
    // Reports may carry raw HTML tables; pass them through.
    options.render.unsafe_ = true;
    options
}

/// Encode every character as a decimal character reference.
fn encode_entities(text: &str) -> String {
    text.chars().map(|c| format!("&#{};", c as u32)).collect()
}

/// Obscure email addresses in rendered autolinks. The address is encoded in
/// both the `mailto:` href and the link text; always decimal references, so
/// the output stays deterministic.
fn mangle_mailto_links(html: &str) -> String {
    MAILTO_LINK
        .replace_all(html, |caps: &Captures| {
            format!(
                r#"<a href="mailto:{}">{}</a>"#,
                encode_entities(&caps[1]),
                encode_entities(&caps[2])
            )
        })
        .into_owned()
}

/// Render a markdown report into a complete, self-contained HTML document.
///
/// The shell embeds the stylesheet verbatim in a `<style>` block and titles
/// the page `VPAT for <product_name>`; no external resources are referenced.
/// The caller is responsible for having validated `product_name`.
pub fn render(markdown: &str, stylesheet: &str, product_name: &str) -> String {
    let fragment = markdown_to_html(markdown, &conversion_options());
    let fragment = mangle_mailto_links(&fragment);

    format!(
        "<html>\n  <head>\n    <title>VPAT for {product_name}</title>\n    <style>\n{stylesheet}\n    </style>\n  </head>\n  <body class=\"markdown-body\">\n{fragment}  </body>\n</html>\n"
    )
}
