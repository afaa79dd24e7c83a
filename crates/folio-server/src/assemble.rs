//! Fixed single-page resume layout.
//!
//! Sections render top to bottom in a fixed order: header, summary, education,
//! experience, research & projects, skills, leadership. Anything that would
//! run past the bottom margin is dropped and reported once as a warning.

use crate::error::AssembleError;
use crate::pdf::{text_width, Font, Page, PAGE_HEIGHT, PAGE_WIDTH};
use folio_core::ResumeData;

const MARGIN_X: f32 = 48.0;
const MARGIN_Y: f32 = 36.0;
const BODY_SIZE: f32 = 10.5;
const DETAIL_SIZE: f32 = 10.0;
const LINE_HEIGHT: f32 = 1.2;
const BULLET_LINE_HEIGHT: f32 = 1.25;
const NAME_SIZE: f32 = 18.0;
const NAME_SPACING: f32 = 1.0;
const TITLE_SIZE: f32 = 11.0;
const TITLE_SPACING: f32 = 0.5;
const BULLET_INDENT: f32 = 8.0;
const BULLET_WIDTH: f32 = 8.0;
const ENTRY_GAP: f32 = 4.0;

/// Greedy word wrap against the real glyph widths. A single word wider than
/// the line is kept whole on its own line.
pub fn wrap(text: &str, font: Font, size: f32, first_width: f32, width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let limit = if lines.is_empty() { first_width } else { width };
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if current.is_empty() || text_width(&candidate, font, size, 0.0) <= limit {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

struct Layout {
    page: Page,
    /// Top of the next line, in points from the page top.
    y: f32,
    bottom: f32,
    dropped: usize,
}

impl Layout {
    fn new() -> Self {
        Self {
            page: Page::new(),
            y: MARGIN_Y,
            bottom: PAGE_HEIGHT - MARGIN_Y,
            dropped: 0,
        }
    }

    fn left(&self) -> f32 {
        MARGIN_X
    }

    fn right(&self) -> f32 {
        PAGE_WIDTH - MARGIN_X
    }

    fn content_width(&self) -> f32 {
        self.right() - self.left()
    }

    /// Reserve a line box; returns its baseline, or `None` when it would
    /// overflow the page.
    fn line(&mut self, size: f32, line_height: f32) -> Option<f32> {
        let h = size * line_height;
        if self.y + h > self.bottom {
            self.dropped += 1;
            return None;
        }
        let baseline = self.y + (h - size) * 0.5 + size * 0.8;
        self.y += h;
        Some(baseline)
    }

    fn gap(&mut self, pts: f32) {
        self.y += pts;
    }

    fn rule(&mut self, thickness: f32, before: f32, after: f32) {
        self.gap(before);
        if self.y > self.bottom {
            return;
        }
        let (l, r) = (self.left(), self.right());
        self.page.rule(l, r, self.y, thickness);
        self.gap(thickness + after);
    }

    fn section_title(&mut self, title: &str) {
        self.gap(6.0);
        if let Some(b) = self.line(TITLE_SIZE, LINE_HEIGHT) {
            let x = self.left();
            self.page
                .text(x, b, Font::Bold, TITLE_SIZE, TITLE_SPACING, &title.to_uppercase());
        }
        self.gap(4.0);
        self.rule(0.5, 0.0, 6.0);
    }

    /// Left text and right-aligned detail on one row.
    fn split_row(&mut self, left: &str, left_font: Font, right: &str) {
        let Some(b) = self.line(BODY_SIZE, LINE_HEIGHT) else {
            return;
        };
        let x = self.left();
        self.page.text(x, b, left_font, BODY_SIZE, 0.0, left);
        if !right.is_empty() {
            let rx = self.right() - text_width(right, Font::Roman, DETAIL_SIZE, 0.0);
            self.page.text(rx, b, Font::Roman, DETAIL_SIZE, 0.0, right);
        }
    }

    fn paragraph(&mut self, text: &str) {
        let width = self.content_width();
        for line in wrap(text, Font::Roman, BODY_SIZE, width, width) {
            if let Some(b) = self.line(BODY_SIZE, LINE_HEIGHT) {
                let x = self.left();
                self.page.text(x, b, Font::Roman, BODY_SIZE, 0.0, &line);
            }
        }
    }

    fn bullet(&mut self, text: &str) {
        let x_bullet = self.left() + BULLET_INDENT;
        let x_text = x_bullet + BULLET_WIDTH;
        let width = self.right() - x_text;
        for (i, line) in wrap(text, Font::Roman, BODY_SIZE, width, width)
            .iter()
            .enumerate()
        {
            if let Some(b) = self.line(BODY_SIZE, BULLET_LINE_HEIGHT) {
                if i == 0 {
                    self.page.text(x_bullet, b, Font::Roman, BODY_SIZE, 0.0, "\u{2022}");
                }
                self.page.text(x_text, b, Font::Roman, BODY_SIZE, 0.0, line);
            }
        }
        self.gap(1.0);
    }

    /// Bullet whose text is a label followed by an underlined link.
    fn link_bullet(&mut self, label: &str, link_text: &str, uri: &str) {
        let x_bullet = self.left() + BULLET_INDENT;
        let x_text = x_bullet + BULLET_WIDTH;
        let Some(b) = self.line(BODY_SIZE, BULLET_LINE_HEIGHT) else {
            return;
        };
        self.page.text(x_bullet, b, Font::Roman, BODY_SIZE, 0.0, "\u{2022}");
        self.page.text(x_text, b, Font::Roman, BODY_SIZE, 0.0, label);
        let x_link = x_text + text_width(label, Font::Roman, BODY_SIZE, 0.0);
        let max_w = self.right() - x_link;
        let link_w = text_width(link_text, Font::Roman, BODY_SIZE, 0.0).min(max_w);
        self.page.text(x_link, b, Font::Roman, BODY_SIZE, 0.0, link_text);
        self.page.rule(x_link, x_link + link_w, b + 1.5, 0.5);
        self.page.link(x_link, b - BODY_SIZE, x_link + link_w, b + 2.0, uri);
        self.gap(1.0);
    }

    /// Bold label with the comma-joined items wrapping after it.
    fn labelled_list(&mut self, label: &str, items: &[String]) {
        let label = format!("{}: ", label);
        let label_w = text_width(&label, Font::Bold, BODY_SIZE, 0.0);
        let width = self.content_width();
        let lines = wrap(&items.join(", "), Font::Roman, BODY_SIZE, width - label_w, width);
        let Some(b) = self.line(BODY_SIZE, LINE_HEIGHT) else {
            return;
        };
        let x = self.left();
        self.page.text(x, b, Font::Bold, BODY_SIZE, 0.0, &label);
        let mut rest = lines.iter();
        if let Some(first) = rest.next() {
            self.page.text(x + label_w, b, Font::Roman, BODY_SIZE, 0.0, first);
        }
        for line in rest {
            if let Some(b) = self.line(BODY_SIZE, LINE_HEIGHT) {
                self.page.text(x, b, Font::Roman, BODY_SIZE, 0.0, line);
            }
        }
        self.gap(2.0);
    }

    fn header(&mut self, data: &ResumeData) {
        let name = data.name.to_uppercase();
        if let Some(b) = self.line(NAME_SIZE, LINE_HEIGHT) {
            let w = text_width(&name, Font::Bold, NAME_SIZE, NAME_SPACING);
            let x = (PAGE_WIDTH - w) * 0.5;
            self.page.text(x, b, Font::Bold, NAME_SIZE, NAME_SPACING, &name);
        }
        self.gap(10.0);

        let mut parts: Vec<(String, Option<&str>)> = vec![
            (data.location.clone(), None),
            (data.email.clone(), None),
        ];
        for (label, url) in [
            ("LinkedIn", &data.linkedin_url),
            ("GitHub", &data.github_url),
            ("Scholar", &data.google_scholar_url),
        ] {
            if !url.is_empty() {
                parts.push((label.to_string(), Some(url.as_str())));
            }
        }
        parts.retain(|(text, _)| !text.is_empty());

        let sep = " | ";
        let sep_w = text_width(sep, Font::Roman, DETAIL_SIZE, 0.0);
        let total: f32 = parts
            .iter()
            .map(|(t, _)| text_width(t, Font::Roman, DETAIL_SIZE, 0.0))
            .sum::<f32>()
            + sep_w * parts.len().saturating_sub(1) as f32;
        let Some(b) = self.line(DETAIL_SIZE, LINE_HEIGHT) else {
            return;
        };
        let mut x = (PAGE_WIDTH - total) * 0.5;
        for (i, (text, url)) in parts.iter().enumerate() {
            if i > 0 {
                self.page.text(x, b, Font::Roman, DETAIL_SIZE, 0.0, sep);
                x += sep_w;
            }
            let w = text_width(text, Font::Roman, DETAIL_SIZE, 0.0);
            self.page.text(x, b, Font::Roman, DETAIL_SIZE, 0.0, text);
            if let Some(url) = url {
                self.page.rule(x, x + w, b + 1.5, 0.5);
                self.page.link(x, b - DETAIL_SIZE, x + w, b + 2.0, url);
            }
            x += w;
        }
        self.rule(1.0, 8.0, 6.0);
    }
}

/// Validate and lay out `data`, returning the finished PDF bytes.
pub fn render(data: &ResumeData) -> Result<Vec<u8>, AssembleError> {
    data.validate()?;
    let mut l = Layout::new();

    l.header(data);

    if !data.summary.trim().is_empty() {
        l.section_title("Summary");
        l.paragraph(&data.summary);
    }

    if !data.education.is_empty() {
        l.section_title("Education");
        for edu in &data.education {
            l.split_row(&edu.institution, Font::Bold, &edu.location);
            let mut degree = edu.degree.clone();
            if let Some(field) = edu.field.as_deref().filter(|f| !f.is_empty()) {
                degree.push_str(", ");
                degree.push_str(field);
            }
            if let Some(gpa) = edu.gpa.as_deref().filter(|g| !g.is_empty()) {
                degree.push_str(" | GPA: ");
                degree.push_str(gpa);
            }
            l.split_row(&degree, Font::Italic, &edu.period);
            l.gap(ENTRY_GAP);
        }
    }

    if !data.experience.is_empty() {
        l.section_title("Experience");
        for exp in &data.experience {
            l.split_row(&exp.company, Font::Bold, &exp.location);
            l.split_row(&exp.role, Font::Italic, &exp.period);
            l.gap(2.0);
            for bullet in &exp.bullets {
                l.bullet(bullet);
            }
            if let Some(tools) = exp.tools.as_deref().filter(|t| !t.is_empty()) {
                l.bullet(&format!("Tools: {}", tools));
            }
            l.gap(ENTRY_GAP);
        }
    }

    if !data.projects.is_empty() {
        l.section_title("Research & Projects");
        for proj in &data.projects {
            l.split_row(&proj.title, Font::Bold, &proj.period);
            l.gap(2.0);
            for bullet in &proj.bullets {
                l.bullet(bullet);
            }
            if let (Some(title), Some(link)) =
                (proj.publication.as_deref(), proj.publication_link.as_deref())
            {
                if !title.is_empty() && !link.is_empty() {
                    l.link_bullet("Publication: ", title, link);
                }
            }
            l.gap(ENTRY_GAP);
        }
    }

    l.section_title("Skills");
    for (label, items) in data.skills.categories() {
        l.labelled_list(label, items);
    }

    if let Some(items) = data.leadership.as_deref().filter(|v| !v.is_empty()) {
        l.section_title("Leadership & Teaching");
        for item in items {
            l.bullet(item);
        }
    }

    if l.dropped > 0 {
        log::warn!(
            "[resume] {} line(s) did not fit on one page and were dropped",
            l.dropped
        );
    }
    Ok(l.page.finish())
}
