/// Language assumed when none is given.
pub const DEFAULT_LANGUAGE: &str = "python3";

/// A block of syntax-highlighted source code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code {
    pub code: String,
    /// Language name or file extension, e.g. `"rust"`, `"py"`, `"yaml"`.
    pub language: String,
    pub theme: Option<String>,
    pub line_numbers: Option<bool>,
    pub start_line: Option<usize>,
    pub tab_size: Option<usize>,
    pub word_wrap: Option<bool>,
    pub background_color: Option<String>,
    pub code_width: Option<usize>,
    pub highlight_lines: Vec<usize>,
    pub dedent: Option<bool>,
}

impl Default for Code {
    fn default() -> Self {
        Code {
            code: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            theme: None,
            line_numbers: None,
            start_line: None,
            tab_size: None,
            word_wrap: None,
            background_color: None,
            code_width: None,
            highlight_lines: Vec::new(),
            dedent: None,
        }
    }
}

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Code {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    pub fn line_numbers(mut self, on: bool) -> Self {
        self.line_numbers = Some(on);
        self
    }

    pub fn start_line(mut self, line: usize) -> Self {
        self.start_line = Some(line);
        self
    }

    pub fn tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = Some(tab_size);
        self
    }

    pub fn word_wrap(mut self, on: bool) -> Self {
        self.word_wrap = Some(on);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn code_width(mut self, width: usize) -> Self {
        self.code_width = Some(width);
        self
    }

    pub fn highlight_lines(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.highlight_lines = lines.into_iter().collect();
        self
    }

    pub fn dedent(mut self, on: bool) -> Self {
        self.dedent = Some(on);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        assert_eq!(Code::new("x = 1").language, "python3");
        assert_eq!(Code::default().code, "");
    }
}
