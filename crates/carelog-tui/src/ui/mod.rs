use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Mode};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(size);

    render_header(frame, chunks[0], app);

    match &app.mode {
        Mode::Detail(_) => render_detail(frame, chunks[1], app),
        _ => render_list(frame, chunks[1], app),
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help(frame, size);
    }

    if let Mode::ConfirmDelete(_) = &app.mode {
        render_confirm(frame, size, app);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let search_display = if app.search_input.trim().is_empty() {
        "(none)".to_string()
    } else {
        app.search_input.clone()
    };
    let title = format!(
        "carelog  patients: {}  search: {}",
        app.patients.len(),
        search_display
    );

    let block = Block::default().borders(Borders::ALL).title("carelog");
    let paragraph = Paragraph::new(Line::from(title)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match app.mode {
        Mode::List => "j/k move  enter detail  / search  c clear  d delete  r refresh  ? help  q quit",
        Mode::SearchEditing => "enter apply  esc cancel",
        Mode::Detail(_) => "esc back  j/k scroll  d delete  ? help  q quit",
        Mode::ConfirmDelete(_) => "y confirm  n cancel",
    };

    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    ))];

    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(err) = &app.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if app.patients.is_empty() {
        let paragraph = Paragraph::new(app.empty_hint)
            .block(Block::default().borders(Borders::ALL).title("Patients"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .patients
        .iter()
        .map(|patient| {
            let line = Line::from(vec![
                Span::styled(
                    patient.full_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::raw(format!("age {}", patient.age)),
                Span::raw("  "),
                Span::raw(format!("bmi {}", patient.bmi)),
                Span::raw("  "),
                Span::styled(
                    patient.bmi_category.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Patients"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(detail) = &app.detail else {
        let paragraph = Paragraph::new("Loading...")
            .block(Block::default().borders(Borders::ALL).title("Detail"));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("{} {}", detail.first_name, detail.last_name),
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(format!("Phone: {}", detail.phone)),
        Line::from(format!("Emails: {}", detail.emails.join(", "))),
        Line::from(format!(
            "Born: {} (age {})",
            detail.birth_date, detail.age
        )),
        Line::from(format!(
            "Height: {} cm  Weight: {} kg",
            detail.height_cm, detail.weight_kg
        )),
        Line::from(format!("BMI: {} ({})", detail.bmi, detail.bmi_category)),
    ];
    if let Some(gender) = detail.gender.as_deref() {
        lines.push(Line::from(format!("Gender: {}", gender)));
    }
    if let Some(notes) = detail.health_notes.as_deref() {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Notes: {}", notes)));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Detail"))
        .wrap(Wrap { trim: true })
        .scroll((app.detail_scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let name = app.selected_patient_name().unwrap_or("this patient");
    let modal = centered_rect(50, 30, area);
    frame.render_widget(Clear, modal);
    let paragraph = Paragraph::new(format!("Delete {}? (y/n)", name))
        .block(Block::default().borders(Borders::ALL).title("Confirm"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, modal);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: q quit, Ctrl+C quit, ? help"),
        Line::from("List: j/k move, enter detail, / search, c clear search, d delete, r refresh"),
        Line::from("Search: type to edit, enter apply, esc cancel"),
        Line::from("Detail: esc back, j/k scroll, d delete"),
        Line::from(""),
        Line::from("Search matches name, phone, email, birth date, gender, BMI category and notes."),
        Line::from("Adding and editing records happens in the CLI: carelog add / carelog edit."),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
