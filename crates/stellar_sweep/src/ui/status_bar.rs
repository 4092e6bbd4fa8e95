use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::styles::{HELP_COLOR, WARNING_COLOR};

const HELP_TEXT: &str = "t: error/temperature | c: color map | f: scale floor | q: quit";

/// Help line, or the latest message when there is one
pub struct StatusBar<'a> {
    pub message: Option<&'a str>,
    pub unconverged: usize,
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        if self.unconverged > 0 {
            spans.push(Span::styled(
                format!("{} cell(s) not converged | ", self.unconverged),
                Style::default().fg(WARNING_COLOR),
            ));
        }
        match self.message {
            Some(message) => spans.push(Span::raw(message.to_string())),
            None => spans.push(Span::styled(HELP_TEXT, Style::default().fg(HELP_COLOR))),
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
