//! Incremental construction of C# source text with indentation handling.

/// Append-only writer used for one compilation unit.
///
/// Text accumulates as discrete fragments so that a single trailing list
/// separator can be discarded; the only non-append mutation is
/// [`discard_last_fragment`](CSharpSourceWriter::discard_last_fragment).
#[derive(Debug, Clone)]
pub struct CSharpSourceWriter {
    fragments: Vec<String>,
    indent: String,
    indent_level: usize,
    pending_indent: bool,
}

impl CSharpSourceWriter {
    pub fn new(indent: String) -> Self {
        Self {
            fragments: Vec::new(),
            indent,
            indent_level: 0,
            pending_indent: false,
        }
    }

    /// Append text, prefixing one indent run if a line start is pending.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.pending_indent {
            let mut fragment = self.indent.repeat(self.indent_level);
            fragment.push_str(text);
            self.fragments.push(fragment);
            self.pending_indent = false;
        } else {
            self.fragments.push(text.to_string());
        }
    }

    /// Append text and terminate the line; the next write starts indented.
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.fragments.push("\n".to_string());
        self.pending_indent = true;
    }

    /// Force the next write to start at the current indent depth.
    pub fn write_indented(&mut self, text: &str) {
        self.pending_indent = true;
        self.write(text);
    }

    /// Drop the most recently appended fragment. Used solely to trim a
    /// trailing list separator.
    pub fn discard_last_fragment(&mut self) {
        self.fragments.pop();
    }

    pub(crate) fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn text(&self) -> String {
        self.fragments.concat()
    }

    pub fn take_text(&mut self) -> String {
        let text = self.fragments.concat();
        self.fragments.clear();
        self.pending_indent = false;
        text
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
