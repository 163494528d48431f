use crate::checklist::Item;
use crate::tui::app::App;
use crate::tui::edit::EditTarget;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer / input line
        ])
        .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_item_list(frame, chunks[1], app);
    if app.edit_mode() {
        draw_input(frame, chunks[2], app);
    } else {
        draw_footer(frame, chunks[2], app);
    }

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("Checklist")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn item_line(item: &Item) -> Line<'static> {
    let (mark, style) = if item.is_checked() {
        (
            "☑",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        ("☐", Style::default().fg(Color::White))
    };

    Line::from(vec![
        Span::styled(format!(" {} ", mark), style),
        Span::raw(item.name().to_string()),
    ])
}

fn draw_item_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|item| ListItem::new(item_line(item)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Items"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if !app.is_empty() {
        list_state.select(Some(app.selected_index()));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let title = match app.edit.target {
        Some(EditTarget::Rename(_)) => "Rename | Enter: save | Esc: cancel",
        _ => "Add | Enter: save | Esc: cancel",
    };
    let (before_cursor, after_cursor) = app.edit.split_at_cursor();
    let mut spans = vec![
        Span::styled("Name: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!("{}█{}", before_cursor, after_cursor)),
    ];
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!("  ({})", message),
            Style::default().fg(Color::Red),
        ));
    }

    let input = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(input, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut footer_text = format!(
        "Items: {} | Checked: {} | ↑↓/j/k: navigate | Enter: toggle | ?: help | q: quit",
        app.total_items(),
        app.checked_items(),
    );
    if let Some(message) = &app.status_message {
        footer_text = format!("{} | {}", message, footer_text);
    }

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Checklist - Keyboard Commands",
        "",
        "  ↑↓ / j/k          Navigate up/down",
        "  Enter / Space     Toggle checked",
        "  a                 Add item",
        "  e                 Rename selected item",
        "  d                 Delete selected item",
        "  ?                 Show this help",
        "  q / Ctrl+C        Quit",
        "",
        "Press ? or Esc to close this help window",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
