//! 向导对话框渲染

use crate::catalog::TypeDescriptor;
use crate::tui::components::{centered_rect, render_hint, wrap_lines};
use crate::tui::labels::{back_label, primary_action_label, step_hint, step_indicator, step_title};
use crate::tui::state::AppState;
use crate::tui::theme::{DIALOG_HEIGHT_PERCENT, DIALOG_WIDTH_PERCENT, HIGHLIGHT_SYMBOL, theme};
use crate::wizard::{PreviewLine, PropertyEntry, StepContent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table},
};
use rust_i18n::t;
use unicode_width::UnicodeWidthStr;

/// Width of the name column in the preview table
const NAME_COLUMN_WIDTH: u16 = 16;

/// 渲染向导对话框
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let popup = centered_rect(area, DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT_PERCENT);
    frame.render_widget(Clear, popup);

    let step = state.wizard.step();
    let title = Line::from(format!(
        " {} · {} ",
        step_title(step),
        step_indicator(step)
    ))
    .centered()
    .style(theme().title());

    let block = Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(theme().border())
        .style(theme().dialog());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [body, error, buttons, hint] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .areas(inner);

    match state.wizard.step_content() {
        StepContent::SelectType { selected, choices } => {
            draw_type_list(frame, body, selected, choices, &mut state.type_list)
        }
        StepContent::ConfigureProperties { properties } => {
            draw_property_fields(frame, body, properties, state)
        }
        StepContent::Preview {
            display_name,
            lines,
        } => draw_preview(frame, body, display_name, &lines),
    }

    if let Some(message) = &state.error_message {
        let error_line = Paragraph::new(format!("{}: {}", t!("error_prefix"), message))
            .style(theme().error());
        frame.render_widget(error_line, error);
    }

    draw_buttons(frame, buttons, state);
    render_hint(&step_hint(step), frame, hint);
}

fn draw_type_list(
    frame: &mut Frame,
    area: Rect,
    selected: &TypeDescriptor,
    choices: &[TypeDescriptor],
    list_state: &mut ListState,
) {
    let items: Vec<ListItem> = choices
        .iter()
        .map(|descriptor| {
            let style = if descriptor.id == selected.id {
                theme().selected()
            } else {
                theme().dialog()
            };
            ListItem::new(descriptor.display_name).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(t!("available_types"))
                .border_type(BorderType::Rounded),
        )
        .highlight_style(theme().selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    frame.render_stateful_widget(list, area, list_state);
}

fn draw_property_fields(
    frame: &mut Frame,
    area: Rect,
    properties: &[PropertyEntry],
    state: &AppState,
) {
    let focused = state.editor.focused();
    let content_width = list_content_width(area);

    let items: Vec<ListItem> = properties
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let (content, style) = if idx == focused {
                let (left, right) = state.editor.split_at_cursor();
                (
                    format!("{}: [{}|{}]", entry.name, left, right),
                    theme().selected().add_modifier(Modifier::ITALIC),
                )
            } else {
                (format!("{}: {}", entry.name, entry.value), theme().dialog())
            };
            ListItem::new(wrap_lines(&content, content_width)).style(style)
        })
        .collect();

    let rows_above: usize = items.iter().take(focused).map(ListItem::height).sum();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(t!("properties_title"))
                .border_type(BorderType::Rounded),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut list_state = ListState::default().with_selected(Some(focused));
    frame.render_stateful_widget(list, area, &mut list_state);

    if let Some(entry) = properties.get(focused) {
        let prefix = format!("{}: [", entry.name);
        let column = UnicodeWidthStr::width(HIGHLIGHT_SYMBOL)
            + UnicodeWidthStr::width(prefix.as_str())
            + state.editor.visual_cursor();
        if let Some(position) = field_cursor(area, rows_above, column) {
            frame.set_cursor_position(position);
        }
    }
}

/// Terminal cursor for the focused field, if it lands inside the list's border.
///
/// Only the focused field's first line is considered; when its text wraps
/// before the cursor no cursor is placed.
fn field_cursor(area: Rect, rows_above: usize, column: usize) -> Option<Position> {
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    if column >= inner_width || rows_above >= inner_height {
        return None;
    }
    Some(Position {
        x: area.x + 1 + column as u16,
        y: area.y + 1 + rows_above as u16,
    })
}

fn draw_preview(frame: &mut Frame, area: Rect, display_name: &str, lines: &[PreviewLine<'_>]) {
    let value_width = area
        .width
        .saturating_sub(2 + NAME_COLUMN_WIDTH + 2)
        .max(1) as usize;

    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            let style = if line.is_placeholder {
                theme().placeholder()
            } else {
                theme().dialog()
            };
            let value = wrap_lines(line.value, value_width);
            let height = value.len() as u16;
            Row::new(vec![
                Cell::from(line.name.to_string()),
                Cell::from(value).style(style),
            ])
            .height(height)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(NAME_COLUMN_WIDTH), Constraint::Fill(1)])
        .block(
            Block::bordered()
                .title(t!("preview_type", name = display_name))
                .border_type(BorderType::Rounded),
        )
        .column_spacing(2)
        .style(theme().dialog());

    frame.render_widget(table, area);
}

fn draw_buttons(frame: &mut Frame, area: Rect, state: &AppState) {
    let snapshot = state.wizard.snapshot();
    let mut spans = Vec::new();

    if snapshot.can_go_back {
        spans.push(Span::styled(
            format!("[ {} ]", back_label()),
            theme().secondary_button(),
        ));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!("[ {} ]", primary_action_label(snapshot.primary_action)),
        theme().primary_button(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans).right_aligned()), area);
}

fn list_content_width(area: Rect) -> usize {
    let inner_width = area.width.saturating_sub(2) as usize;
    let highlight_width = UnicodeWidthStr::width(HIGHLIGHT_SYMBOL);
    inner_width.saturating_sub(highlight_width).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cursor_inside_border() {
        let area = Rect::new(10, 5, 40, 10);
        assert_eq!(
            field_cursor(area, 2, 12),
            Some(Position { x: 23, y: 8 })
        );
    }

    #[test]
    fn test_field_cursor_outside_border() {
        let area = Rect::new(0, 0, 20, 6);
        assert_eq!(field_cursor(area, 0, 18), None);
        assert_eq!(field_cursor(area, 4, 1), None);
    }
}
