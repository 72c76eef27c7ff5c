/// Where a rendered report ends up (a notebook cell, a terminal, a buffer).
pub trait DisplaySink {
    /// A plain horizontal separator.
    fn separator(&mut self);

    /// A rendered HTML fragment.
    fn html(&mut self, html: &str);
}

/// Writes everything to stdout; separators become `---`.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn separator(&mut self) {
        println!("---");
    }

    fn html(&mut self, html: &str) {
        println!("{html}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEntry {
    Separator,
    Html(String),
}

/// Collects display output in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub entries: Vec<DisplayEntry>,
}

impl BufferSink {
    /// Concatenation of every HTML fragment written so far.
    pub fn html_output(&self) -> String {
        self.entries.iter()
            .filter_map(|e| match e {
                DisplayEntry::Html(h) => Some(h.as_str()),
                DisplayEntry::Separator => None,
            })
            .collect()
    }
}

impl DisplaySink for BufferSink {
    fn separator(&mut self) {
        self.entries.push(DisplayEntry::Separator);
    }

    fn html(&mut self, html: &str) {
        self.entries.push(DisplayEntry::Html(html.to_string()));
    }
}
