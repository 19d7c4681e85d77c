use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static FEATURED: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static DATE: Lazy<Style> = Lazy::new(|| Style::new().color256(246).italic());
pub static FACET: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static FACET_SELECTED: Lazy<Style> = Lazy::new(|| Style::new().black().on_cyan());
pub static URL: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static HINT: Lazy<Style> = Lazy::new(|| Style::new().dim().italic());

/// Applies styles only when color output is on.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub color: bool,
}

impl Painter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, style: &Style, text: &str) -> String {
        if self.color {
            style.apply_to(text).force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }
}
