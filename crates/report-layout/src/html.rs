//! Minimal HTML helpers
//!
//! Every piece of user text goes through [`esc`] before it reaches markup.

/// Escape text for HTML element content and attribute values
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text and keep its line breaks visible
pub fn esc_multiline(s: &str) -> String {
    esc(s).replace("\r\n", "\n").replace('\n', "<br/>")
}

/// Escaped text, or the placeholder when the text is blank
pub fn or_placeholder(s: &str, placeholder: &str) -> String {
    if s.trim().is_empty() {
        esc(placeholder)
    } else {
        esc(s)
    }
}

/// Append-only markup buffer
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(4 * 1024),
        }
    }

    /// Open `<tag class="...">`
    pub fn open(&mut self, tag: &str, class: &str) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        if !class.is_empty() {
            self.buf.push_str(" class=\"");
            self.buf.push_str(class);
            self.buf.push('"');
        }
        self.buf.push('>');
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// `<tag class="...">escaped text</tag>`
    pub fn element(&mut self, tag: &str, class: &str, text: &str) -> &mut Self {
        self.open(tag, class);
        self.buf.push_str(&esc(text));
        self.close(tag)
    }

    /// Append pre-escaped markup
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&esc(text));
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Default for Markup {
    fn default() -> Self {
        Self::new()
    }
}
