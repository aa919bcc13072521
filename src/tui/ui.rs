//! Main UI rendering and the interactive event loop.

use super::app::App;
use super::events::{Event, EventHandler};
use crate::session::Session;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use std::io::{self, stdout};

/// Run the interactive assessment loop until the user quits.
pub fn run_tui(app: &mut App, tick_rate_ms: u64) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate_ms);

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function
fn render(frame: &mut Frame, app: &App) {
    match app.session() {
        Session::Intro => render_intro(frame, app),
        Session::InProgress { .. } => render_question(frame, app),
        Session::Completed { .. } => render_results(frame, app),
    }
}

fn render_intro(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let [main, footer] =
        Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).areas(frame.area());

    let mut lines = vec![
        Line::from(Span::styled(
            "skillscope",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Scenario-based leadership self-assessment."),
        Line::from(format!(
            "{} real-world scenarios, one choice each. Measured dimensions:",
            app.navigator().total_questions()
        )),
        Line::from(""),
    ];
    for dim in crate::model::Dimension::ALL {
        lines.push(Line::from(format!("  {:<4} {}", dim.code(), dim.label())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to start.",
        Style::default().fg(theme.accent),
    )));

    let intro = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .border_style(Style::default().fg(theme.border))
                .padding(Padding::uniform(1))
                .title(" Welcome "),
        )
        .alignment(Alignment::Left);

    frame.render_widget(intro, centered(main, 60, 16));
    render_footer(frame, app, footer, "Enter start · q quit");
}

fn render_question(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let Some((position, question)) = app.current_question() else {
        return;
    };
    let total = app.navigator().total_questions();
    let (answered, _) = app.progress();

    let [gauge_area, prompt_area, options_area, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Min(6),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    // Progress across the question set
    let ratio = (position as f64 / total as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::bordered()
                .border_style(Style::default().fg(theme.border))
                .title(format!(" Question {} of {} ", position + 1, total)),
        )
        .gauge_style(Style::default().fg(theme.primary))
        .label(format!("{answered} answered"))
        .ratio(ratio);
    frame.render_widget(gauge, gauge_area);

    let prompt = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .border_style(Style::default().fg(theme.border_focused))
                .padding(Padding::horizontal(1))
                .title(format!(" {} ", question.category.name())),
        );
    frame.render_widget(prompt, prompt_area);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .map(|option| ListItem::new(option.text.as_str()))
        .collect();
    let list = List::new(items)
        .block(
            Block::bordered()
                .border_style(Style::default().fg(theme.border))
                .title(" Your response "),
        )
        .highlight_style(
            Style::default()
                .bg(theme.selection)
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("❯ ");
    let mut state = ListState::default().with_selected(Some(app.selected_option));
    frame.render_stateful_widget(list, options_area, &mut state);

    render_footer(
        frame,
        app,
        footer,
        "↑↓ select · Enter confirm · ←→ navigate · r restart · q quit",
    );
}

fn render_results(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let Some(outcome) = app.outcome() else {
        return;
    };
    let dashboard = &outcome.dashboard;

    let [header_area, body_area, footer] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(9),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let overall_level = crate::scoring::ScoreLevel::from_score(dashboard.overall_score);
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Subject: ", Style::default().fg(theme.text_muted)),
            Span::raw(dashboard.subject.clone()),
        ]),
        Line::from(vec![
            Span::styled("Overall: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("{:.1}/100 ({})", dashboard.overall_score, overall_level),
                Style::default()
                    .fg(theme.level_color(overall_level))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Style: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                dashboard.style_label.clone(),
                Style::default().fg(theme.accent),
            ),
            Span::styled("   Innovation: ", Style::default().fg(theme.text_muted)),
            Span::raw(format!("{:.1}/100", dashboard.innovation_potential)),
        ]),
    ])
    .block(
        Block::bordered()
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(1))
            .title(" Assessment Results "),
    );
    frame.render_widget(header, header_area);

    let [scores_area, side_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(body_area);
    render_dimension_gauges(frame, app, scores_area);
    render_results_side(frame, app, side_area);

    render_footer(frame, app, footer, "r restart · q quit");
}

fn render_dimension_gauges(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(outcome) = app.outcome() else {
        return;
    };

    let block = Block::bordered()
        .border_style(Style::default().fg(theme.border))
        .title(" Dimension Scores ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical(vec![Constraint::Length(1); outcome.dashboard.dimensions.len()])
        .split(inner);
    for (entry, row) in outcome.dashboard.dimensions.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.level_color(entry.level)))
            .label(format!(
                "{} {:.1} ({})",
                entry.label,
                entry.score,
                entry.level.name()
            ))
            .ratio(f64::from(entry.score / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, *row);
    }
}

fn render_results_side(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let Some(outcome) = app.outcome() else {
        return;
    };
    let dashboard = &outcome.dashboard;

    let mut lines = vec![Line::from(Span::styled(
        "Top strengths",
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD),
    ))];
    for dim in &dashboard.top_strengths {
        lines.push(Line::from(format!("  {}", dim.label())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Development areas",
        Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD),
    )));
    for dim in &dashboard.development_areas {
        lines.push(Line::from(format!("  {}", dim.label())));
    }

    if !outcome.recommendations.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Recommendations",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )));
        for rec in &outcome.recommendations {
            lines.push(Line::from(format!("  {}. {}", rec.priority, rec.title)));
            lines.push(Line::from(Span::styled(
                format!("     {}", rec.description),
                Style::default().fg(theme.text_muted),
            )));
        }
    }

    let side = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::bordered()
            .border_style(Style::default().fg(theme.border))
            .padding(Padding::horizontal(1))
            .title(" Insights "),
    );
    frame.render_widget(side, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, hints: &str) {
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(app.theme.muted))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Center a fixed-size box inside an area, clamped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
