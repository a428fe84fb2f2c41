use classifier_core::{FormViewModel, ProductList, Screen};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout::{describe_areas, form_areas};
use crate::platform::input::ListCursor;

pub(crate) fn render(frame: &mut Frame<'_>, view: &FormViewModel, cursor: ListCursor) {
    let areas = form_areas(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, areas.title);

    let hints = match view.screen {
        Screen::ChooseList => HINTS_CHOOSE_LIST,
        Screen::Describe { .. } => HINTS_DESCRIBE,
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        areas.hints,
    );

    match view.screen {
        Screen::ChooseList => render_choose_list(frame, areas.body, view, cursor),
        Screen::Describe { list } => render_describe(frame, areas.body, view, list),
    }
}

fn render_choose_list(frame: &mut Frame<'_>, area: Rect, view: &FormViewModel, cursor: ListCursor) {
    let mut lines = vec![
        Line::from(CHOOSE_LIST_PROMPT),
        Line::from(Span::styled(
            CHOOSE_LIST_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for (index, list) in view.lists.iter().enumerate() {
        let text = format!("{}. {}", index + 1, list.label());
        let line = if index == cursor.index {
            Line::from(Span::styled(
                format!("> {text}"),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(format!("  {text}"))
        };
        lines.push(line);
    }

    let picker = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(picker, area);
}

fn render_describe(frame: &mut Frame<'_>, area: Rect, view: &FormViewModel, list: ProductList) {
    let areas = describe_areas(area);

    let selected = Paragraph::new(Line::from(vec![
        Span::styled(
            SELECTED_LIST_PREFIX,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(list.label()),
    ]));
    frame.render_widget(selected, areas.selected);

    let inner_width = areas.input.width.saturating_sub(2);
    let (visible, cursor_offset) = input_window(&view.description, inner_width);
    let input_text = if view.description.is_empty() {
        Span::styled(DESCRIPTION_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(visible)
    };
    let input = Paragraph::new(Line::from(input_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(DESCRIPTION_TITLE),
    );
    frame.render_widget(input, areas.input);

    frame.set_cursor_position(Position::new(
        areas.input.x.saturating_add(1).saturating_add(cursor_offset),
        areas.input.y.saturating_add(1),
    ));

    let (label, style) = if view.submitting {
        (SUBMITTING_LABEL, Style::default().fg(Color::Yellow))
    } else if view.submit_enabled {
        (
            SUBMIT_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (SUBMIT_LABEL, Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(format!("[ {label} ]"), style))),
        areas.submit,
    );

    if let Some(result) = &view.result_label {
        let panel = Paragraph::new(Line::from(Span::styled(
            result.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(RESULT_TITLE));
        frame.render_widget(panel, areas.result);
    }

    if let Some(message) = &view.error_message {
        let panel = Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            );
        frame.render_widget(panel, areas.error);
    }
}

/// Tail of `text` that fits in `width` columns with one column left for the
/// cursor, and the cursor column relative to the start of the box.
fn input_window(text: &str, width: u16) -> (&str, u16) {
    let available = usize::from(width.saturating_sub(1));
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let ch_width = char_width(ch);
        if used + ch_width > available {
            break;
        }
        used += ch_width;
        start = index;
    }
    // `used` never exceeds `available`, which came from a u16.
    (&text[start..], u16::try_from(used).unwrap_or(u16::MAX))
}

fn char_width(ch: char) -> usize {
    let mut buf = [0u8; 4];
    Span::raw(&*ch.encode_utf8(&mut buf)).width()
}
