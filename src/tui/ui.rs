use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Row, Table};

use crate::tui::app::App;
use crate::tui::theme::Theme;

const HEADERS: [&str; 4] = ["Summary", "Author", "Labels", "Date"];
const WIDTHS: [Constraint; 4] = [
    Constraint::Length(35),
    Constraint::Length(20),
    Constraint::Length(30),
    Constraint::Length(26),
];

const HEADER_RULE: &str = "─";

// Borders (2) plus header row and its bottom margin (2)
const TABLE_CHROME: u16 = 4;

pub fn draw(frame: &mut Frame, app: &mut App, theme: &Theme) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 6 || area.width < 30 {
        let msg = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let table_height = u16::try_from(app.page_size)
        .unwrap_or(u16::MAX)
        .saturating_add(TABLE_CHROME);

    // Layout: Title(1) + Table(rows + chrome) + spacer(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Max(table_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_title(frame, chunks[0], app, theme);
    render_table(frame, chunks[1], app, theme);
    render_status_bar(frame, chunks[3], app, theme);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(app.repo.to_string(), theme.title_style),
        Span::raw("  "),
        Span::styled(
            format!("{} pull requests", app.rows.len()),
            Style::default().fg(theme.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_table(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let rows: Vec<Row> = app
        .rows
        .iter()
        .map(|row| Row::new(row.cells().map(str::to_string)))
        .collect();

    let highlight = if app.is_focused() {
        theme.row_selected
    } else {
        theme.row_selected_unfocused
    };

    let block = Block::bordered().border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);

    let table = Table::new(rows, WIDTHS)
        .header(Row::new(HEADERS).style(theme.header_style).bottom_margin(1))
        .block(block)
        .row_highlight_style(highlight);

    frame.render_stateful_widget(table, area, &mut app.table_state);

    // Rule under the header, drawn over its bottom margin
    if inner.height > 1 {
        let rule_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(HEADER_RULE.repeat(usize::from(rule_area.width)))
                .style(Style::default().fg(theme.border)),
            rule_area,
        );
    }

    if app.rows.is_empty() && inner.height > 2 {
        let message_area = Rect {
            y: inner.y + 2,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new("No open pull requests").style(Style::default().fg(theme.muted)),
            message_area,
        );
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let text = if let Some(ref msg) = app.flash_message {
        Line::from(Span::styled(msg.clone(), Style::default().fg(theme.flash_error)))
    } else {
        let focus = if app.is_focused() { "focused" } else { "unfocused" };
        let hints = [
            ("j/k", ":nav "),
            ("Enter", ":open "),
            ("Esc", ":focus "),
            ("q", ":quit"),
        ];

        let mut spans = vec![
            Span::styled(focus, Style::default().fg(theme.muted)),
            Span::raw("  "),
        ];
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bar_bg)),
        area,
    );
}
