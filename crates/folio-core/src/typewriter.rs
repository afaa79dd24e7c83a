//! Deterministic character-by-character text reveal.
//!
//! Both types are pure functions of elapsed time so they can be driven from a
//! frame loop or a timer without holding any per-tick state.

/// Byte prefix of `text` containing its first `chars` characters.
fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    text: String,
    speed_ms: f64,
    delay_ms: f64,
    enabled: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed_ms: f64, delay_ms: f64) -> Self {
        Self {
            text: text.into(),
            speed_ms,
            delay_ms,
            enabled: true,
        }
    }

    /// A disabled typewriter shows its full text immediately.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn typed_chars(&self, elapsed_ms: f64) -> usize {
        let total = self.text.chars().count();
        if !self.enabled || self.speed_ms <= 0.0 {
            return total;
        }
        let typing = elapsed_ms - self.delay_ms;
        if typing < 0.0 {
            return 0;
        }
        ((typing / self.speed_ms).floor() as usize).min(total)
    }

    pub fn visible(&self, elapsed_ms: f64) -> &str {
        char_prefix(&self.text, self.typed_chars(elapsed_ms))
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        self.typed_chars(elapsed_ms) == self.text.chars().count()
    }
}

/// What a [`TypewriterSequence`] shows at one instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceView<'a> {
    pub finished_lines: &'a [String],
    /// Partially typed text of the line in progress.
    pub current: &'a str,
    pub complete: bool,
}

/// Several lines typed one after another with a pause between lines.
#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterSequence {
    lines: Vec<String>,
    speed_ms: f64,
    line_delay_ms: f64,
    enabled: bool,
}

impl TypewriterSequence {
    pub fn new(lines: Vec<String>, speed_ms: f64, line_delay_ms: f64) -> Self {
        Self {
            lines,
            speed_ms,
            line_delay_ms,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn view(&self, elapsed_ms: f64) -> SequenceView<'_> {
        let done = SequenceView {
            finished_lines: &self.lines,
            current: "",
            complete: true,
        };
        if !self.enabled || self.lines.is_empty() || self.speed_ms <= 0.0 {
            return done;
        }

        // Each line types one char per tick and then spends one more tick
        // committing; the next line starts `line_delay_ms` after that.
        let mut line_start = 0.0;
        for (i, line) in self.lines.iter().enumerate() {
            let len = line.chars().count();
            let committed_at = line_start + (len + 1) as f64 * self.speed_ms;
            if elapsed_ms < committed_at {
                let ticks = ((elapsed_ms - line_start) / self.speed_ms).floor().max(0.0) as usize;
                return SequenceView {
                    finished_lines: &self.lines[..i],
                    current: char_prefix(line, ticks.min(len)),
                    complete: false,
                };
            }
            line_start = committed_at - self.speed_ms + self.line_delay_ms;
        }
        done
    }
}
