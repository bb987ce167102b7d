//! Frame rendering.
//!
//! Draws the header (search input and method selector), the card list or
//! its status message, the key help footer, and the detail overlay. Areas
//! used for mouse hit-testing are written back into [`App::areas`].

use exoview_core::{CardView, DetailView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{App, Areas, CARD_HEIGHT, Mode};

const HELP: &str = "/ search  Tab/Shift-Tab method  ↑/↓ move  Enter details  Esc/x close  q quit";
const CLOSE_LABEL: &str = "[ x ] Close";

/// Render a full frame.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let (search, method) = render_header(frame, chunks[0], app);
    let cards = render_body(frame, chunks[1], app);
    frame.render_widget(
        Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    let (modal, close) = match app.detail().cloned() {
        Some(detail) => {
            let (modal, close) = render_detail(frame, &detail);
            (Some(modal), Some(close))
        }
        None => (None, None),
    };

    app.areas = Areas {
        search,
        method,
        cards,
        modal,
        close,
    };
}

// ============================================================================
// Header
// ============================================================================

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(34)])
        .split(area);

    let editing = app.mode() == Mode::Search;
    let search_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let search = Paragraph::new(app.search()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search by name ")
            .border_style(search_style),
    );
    frame.render_widget(search, chunks[0]);

    if editing {
        let width = u16::try_from(app.search().chars().count()).unwrap_or(u16::MAX);
        let x = chunks[0]
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(chunks[0].right().saturating_sub(2));
        frame.set_cursor_position((x, chunks[0].y + 1));
    }

    let method = Paragraph::new(format!("◂ {} ▸", app.method_label()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Discovery method "),
        );
    frame.render_widget(method, chunks[1]);

    (chunks[0], chunks[1])
}

// ============================================================================
// Card list
// ============================================================================

fn render_body(frame: &mut Frame<'_>, area: Rect, app: &mut App) -> Rect {
    let count = app.list().cards().len();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Exoplanets ({count}) "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if let Some(message) = app.list().message() {
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            inner,
        );
        return inner;
    }

    let rows = usize::from(inner.height / CARD_HEIGHT);
    app.scroll_to_selection(rows);

    let visible = app
        .list()
        .cards()
        .iter()
        .enumerate()
        .skip(app.offset())
        .take(rows.max(1));
    for (slot, (position, card)) in visible.enumerate() {
        let y = inner.y + u16::try_from(slot).unwrap_or(u16::MAX) * CARD_HEIGHT;
        if y >= inner.bottom() {
            break;
        }
        let height = CARD_HEIGHT.min(inner.bottom() - y);
        let rect = Rect::new(inner.x, y, inner.width, height);
        render_card(frame, rect, card, position == app.selected());
    }

    inner
}

fn render_card(frame: &mut Frame<'_>, area: Rect, card: &CardView, selected: bool) {
    let border = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let (first, second) = card.fields.split_at(card.fields.len().min(2));
    let lines = vec![field_line(first), field_line(second)];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(
                format!(" {} ", card.title),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(widget, area);
}

fn field_line(fields: &[exoview_core::Field]) -> Line<'_> {
    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  ·  "));
        }
        spans.push(Span::styled(
            format!("{}: ", field.label),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::raw(field.value.as_str()));
    }
    Line::from(spans)
}

// ============================================================================
// Detail overlay
// ============================================================================

/// Draw the overlay; returns its area and the close control's area.
fn render_detail(frame: &mut Frame<'_>, detail: &DetailView) -> (Rect, Rect) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", detail.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line<'_>> = detail
        .fields
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(field.value.as_str()),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(CLOSE_LABEL)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Yellow)),
        chunks[1],
    );

    (area, chunks[1])
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

// ============================================================================
// Tests
// ============================================================================
