//! Static page content. Long-form text is Markdown rendered to HTML once per
//! page view.

pub mod api_docs;
pub mod docs;
pub mod faq;
pub mod features;
pub mod legal;

use pulldown_cmark::{html, Options, Parser};

pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_lists_and_code() {
        let html = render_markdown("## Setup\n\n1. **Invite** the bot\n\nRun `!clara status`.");

        assert!(html.contains("<h2>Setup</h2>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<strong>Invite</strong>"));
        assert!(html.contains("<code>!clara status</code>"));
    }
}
