//! Common styling utilities for the viewer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use stellar_sweep_core::render::Rgb;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for axis labels
pub const LABEL_COLOR: Color = Color::Magenta;

/// Standard color for warning/caution values
pub const WARNING_COLOR: Color = Color::Yellow;

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Black on light backgrounds, white on dark ones
pub fn contrast_color(background: Rgb) -> Color {
    if background.luminance() > 0.5 {
        Color::Black
    } else {
        Color::White
    }
}

/// Bordered block with a bold header-colored title
pub fn titled_block(title: &str) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(Line::from(
        Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast() {
        assert_eq!(contrast_color(Rgb::WHITE), Color::Black);
        assert_eq!(contrast_color(Rgb::BLACK), Color::White);
        assert_eq!(contrast_color(Rgb(59, 76, 192)), Color::White);
    }
}
