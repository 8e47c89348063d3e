//! Rendering of the table, paginator, count input, and notification modal.

use catalog::core::paging;
use catalog::core::types::Artwork;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use crate::app::{App, InputMode};

pub fn draw(frame: &mut Frame, app: &App) {
    let [input_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_count_input(frame, app, input_area);
    draw_table(frame, app, table_area);
    draw_footer(frame, app, footer_area);

    if let Some(message) = &app.notification {
        draw_notification(frame, message);
    }
}

fn draw_count_input(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.input_mode {
        InputMode::Count => (
            format!("Rows to select: {}_", app.count_input),
            Style::default().fg(Color::Yellow),
        ),
        InputMode::Normal => (
            "Press 's' to select the first N rows of this page".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Select Rows"));
    frame.render_widget(input, area);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from(" "),
        Cell::from("Title"),
        Cell::from("Origin"),
        Cell::from("Artist"),
        Cell::from("Inscriptions"),
        Cell::from("Start"),
        Cell::from("End"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let selection = app.session.selection();
    let rows: Vec<Row> = app
        .session
        .records()
        .iter()
        .enumerate()
        .map(|(i, artwork)| {
            let checkbox = if selection.is_selected(artwork.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let mut row = Row::new(vec![
                Cell::from(checkbox),
                Cell::from(display(&artwork.title)),
                Cell::from(display(&artwork.place_of_origin)),
                Cell::from(display(&artwork.artist_display)),
                Cell::from(display(&artwork.inscriptions)),
                Cell::from(year(artwork.date_start)),
                Cell::from(year(artwork.date_end)),
            ]);
            if i == app.cursor {
                row = row.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            row
        })
        .collect();

    let title = if app.session.is_loading() {
        format!("Artworks - page {} (loading...)", app.session.page_number())
    } else {
        format!("Artworks - page {}", app.session.page_number())
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
            Constraint::Percentage(18),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let range = paging::record_range(app.session.page_number(), app.session.total_records())
        .map(|(first, last)| format!("{first}-{last} of {}", app.session.total_records()))
        .unwrap_or_else(|| "no records".to_string());
    let footer = Line::from(format!(
        " page {}/{} · {} · {} selected · ←/→ pages · space toggle · s select rows · q quit",
        app.session.page_number(),
        app.session.total_pages(),
        range,
        app.session.selection().len(),
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(footer), area);
}

fn draw_notification(frame: &mut Frame, message: &str) {
    let area = centered(frame.area(), 50, 5);
    let popup = Paragraph::new(format!("{message}\n\npress any key"))
        .block(Block::default().borders(Borders::ALL).title("Notice"))
        .style(Style::default().fg(Color::Red));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn display(field: &Option<String>) -> String {
    field.as_deref().unwrap_or("—").replace('\n', " ")
}

fn year(field: Option<i64>) -> String {
    field.map_or_else(|| "—".to_string(), |y| y.to_string())
}
