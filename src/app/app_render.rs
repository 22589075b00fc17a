use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use textarea_mentions::popup::render_popup;

use super::app_state::App;

/// Field height including its border
const FIELD_HEIGHT: u16 = 6;

const HELP: &str = " ↑↓ choose  Tab/Enter insert  Esc close  Ctrl+C quit";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let [field_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Message ");
        let inner = block.inner(field_area);
        frame.render_widget(block, field_area);

        self.field.sync_viewport(inner);
        frame.render_widget(&self.field.textarea, inner);
        self.regions.field = Some(inner);

        if let Some(status) = &self.status {
            let line = Line::from(Span::styled(format!(" {}", status), Style::default().fg(Color::Green)));
            frame.render_widget(Paragraph::new(line), status_area);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(HELP, Style::default().fg(Color::DarkGray)))),
            help_area,
        );

        // Last, so the popup draws over the status and help lines
        self.regions.popup = render_popup(&self.mentions, frame, inner);
        if let Some(popup) = self.regions.popup {
            self.mentions.set_viewport(popup.height.saturating_sub(2));
        }
    }
}
