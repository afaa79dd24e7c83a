use crate::constants::*;
use folio_core::content::{ROLE, TAGLINE};
use folio_core::TypewriterSequence;
use web_sys as web;

/// Types the role and tagline into the hero terminal once, on first frame.
pub struct HeroTerminal {
    el: web::Element,
    sequence: TypewriterSequence,
    started_ms: Option<f64>,
    shown: usize,
    done: bool,
}

impl HeroTerminal {
    pub fn find(document: &web::Document, reduced_motion: bool) -> Option<Self> {
        let el = document.get_element_by_id(HERO_TERMINAL_ID)?;
        let sequence = TypewriterSequence::new(
            vec![format!("> {}", ROLE), format!("> {}", TAGLINE)],
            HERO_TYPE_MS,
            HERO_LINE_DELAY_MS,
        )
        .enabled(!reduced_motion);
        Some(Self {
            el,
            sequence,
            started_ms: None,
            shown: usize::MAX,
            done: false,
        })
    }

    pub fn update(&mut self, now_ms: f64) {
        if self.done {
            return;
        }
        let started = *self.started_ms.get_or_insert(now_ms + HERO_START_DELAY_MS);
        let view = self.sequence.view(now_ms - started);
        let chars = view.finished_lines.iter().map(|l| l.len() + 1).sum::<usize>() + view.current.len();
        if chars != self.shown {
            let mut text = view.finished_lines.join("\n");
            if !view.current.is_empty() {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(view.current);
            }
            self.el.set_text_content(Some(&text));
            self.shown = chars;
        }
        self.done = view.complete;
    }
}
