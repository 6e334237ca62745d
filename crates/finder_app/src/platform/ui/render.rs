use finder_core::{AppViewModel, OutcomeView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::form::{Field, FormUi};

/// Footer content that lives outside the core view model.
pub struct StatusLine<'a> {
    pub endpoint: &'a str,
    pub last_response: Option<String>,
}

pub fn render_ui(f: &mut Frame, view: &AppViewModel, form: &FormUi, status: &StatusLine<'_>) {
    let picker_rows = if form.focus() == Field::Algorithm {
        form.picker().visible_options().len().max(1) as u16 + 1
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(8 + picker_rows),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_form(f, view, form, chunks[1]);
    render_outcome(f, view, form, chunks[2]);
    render_status_bar(f, status, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Ontology Similarity Finder").style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(header, area);
}

fn render_form(f: &mut Frame, view: &AppViewModel, form: &FormUi, area: Rect) {
    let mut lines = vec![
        field_line(form, Field::TargetItem, "Target Item", &view.target_item, "Enter item name"),
        algorithm_line(view, form),
    ];

    if form.focus() == Field::Algorithm {
        lines.extend(picker_lines(form));
    }

    lines.push(field_line(
        form,
        Field::StartIndex,
        "Start Index (optional)",
        &view.start_index,
        "Start index",
    ));
    lines.push(field_line(
        form,
        Field::EndIndex,
        "End Index (optional)",
        &view.end_index,
        "End index",
    ));
    lines.push(Line::from(vec![
        label_span(form, Field::GenerateGraph, "Generate Graph"),
        Span::raw(if view.generate_graph { "[x]" } else { "[ ]" }),
    ]));

    let button = if view.submitting { " Searching… " } else { " Search " };
    let button_style = if form.focus() == Field::Search {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    lines.push(Line::from(Span::styled(button, button_style)));

    let form_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Query"));
    f.render_widget(form_widget, area);
}

fn render_outcome(f: &mut Frame, view: &AppViewModel, form: &FormUi, area: Rect) {
    let (title, body, style) = match &view.outcome {
        OutcomeView::Idle if view.submitting => {
            ("Results".to_string(), "Searching…".to_string(), Style::default())
        }
        OutcomeView::Idle => (
            "Results".to_string(),
            String::new(),
            Style::default().fg(Color::DarkGray),
        ),
        OutcomeView::Results {
            algorithm_used,
            target,
            pretty,
        } => {
            let title = match target {
                Some(target) => format!("Results for {target} (via {algorithm_used})"),
                None => format!("Results (via {algorithm_used})"),
            };
            (title, pretty.clone(), Style::default())
        }
        OutcomeView::Error(message) => (
            "Error".to_string(),
            format!("❌ {message}"),
            Style::default().fg(Color::Red),
        ),
    };

    let widget = Paragraph::new(body)
        .style(style)
        .wrap(Wrap { trim: false })
        .scroll((form.results_scroll(), 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, status: &StatusLine<'_>, area: Rect) {
    let last = status
        .last_response
        .as_deref()
        .map(|at| format!(" | Last response: {at}"))
        .unwrap_or_default();
    let text = format!(
        "Endpoint: {}{} | Tab/Shift+Tab: move | Enter: search | PgUp/PgDn: scroll | Esc: quit",
        status.endpoint, last
    );
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Yellow)),
        area,
    );
}

fn label_span(form: &FormUi, field: Field, label: &str) -> Span<'static> {
    let style = if form.focus() == field {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Span::styled(format!("{label:<24}"), style)
}

fn field_line(
    form: &FormUi,
    field: Field,
    label: &str,
    value: &str,
    placeholder: &str,
) -> Line<'static> {
    let value_span = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_string())
    };
    let mut spans = vec![label_span(form, field, label), value_span];
    if form.focus() == field {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn algorithm_line(view: &AppViewModel, form: &FormUi) -> Line<'static> {
    let focused = form.focus() == Field::Algorithm;
    let value = match (focused, view.algorithm) {
        (true, _) if !form.picker().query().is_empty() => {
            Span::raw(format!("search: {}", form.picker().query()))
        }
        (_, Some(algorithm)) => Span::raw(algorithm.label().to_string()),
        (_, None) => Span::styled(
            "Select an algorithm...".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    Line::from(vec![label_span(form, Field::Algorithm, "Choose Algorithm"), value])
}

fn picker_lines(form: &FormUi) -> Vec<Line<'static>> {
    let options = form.picker().visible_options();
    if options.is_empty() {
        return vec![
            Line::from(Span::styled(
                "    no matching algorithm",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];
    }

    let mut lines: Vec<Line<'static>> = options
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let style = if idx == form.picker().highlighted() {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("    {}", option.label), style))
        })
        .collect();
    lines.push(Line::default());
    lines
}
