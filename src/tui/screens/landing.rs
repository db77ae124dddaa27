//! 首页渲染

use crate::tui::components::{render_hint, render_title_block, three_panel_layout};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use crate::wizard::InputConfiguration;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use rust_i18n::t;

/// Finished configurations listed on the landing page
const MAX_FINISHED_SHOWN: usize = 5;

/// 渲染首页
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("app_title"), frame, header);

    let mut lines = vec![
        Line::from(t!("landing_welcome").to_string()).style(theme().title()),
        Line::from(t!("landing_description").to_string()).style(theme().normal()),
        Line::default(),
        Line::from(t!("finished_heading").to_string()).style(theme().title()),
    ];

    if state.finished.is_empty() {
        lines.push(Line::from(t!("no_finished_yet").to_string()).style(theme().hint()));
    } else {
        lines.extend(
            state
                .finished
                .iter()
                .rev()
                .take(MAX_FINISHED_SHOWN)
                .map(finished_line),
        );
    }

    let content = Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .style(theme().normal())
        .wrap(Wrap { trim: false });
    frame.render_widget(content, body);

    render_hint(&t!("landing_hint"), frame, footer);
}

/// One-line summary: type name followed by the properties that were filled in
fn finished_line(config: &InputConfiguration) -> Line<'static> {
    let filled: Vec<String> = config
        .properties
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| format!("{}={}", p.name, p.value))
        .collect();

    Line::from(vec![
        Span::styled(format!("• {} ", config.display_name), theme().title()),
        Span::styled(filled.join(", "), theme().normal()),
    ])
}
