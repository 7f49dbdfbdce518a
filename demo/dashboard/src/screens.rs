//! Screen rendering functions for the TUI.

use crate::app::{DashboardState, Screen};
use crate::chart::{self, format_k, format_thousands};
use crate::content;
use crate::form::{Field, PortfolioForm};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{
        block::{Position, Title},
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
    },
};
use risk_core::types::MarketScenario;
use risk_models::assessment::RiskAssessment;
use risk_models::payoff::{
    adjustment_factor, PayoffCurve, CURVE_X_LABEL, CURVE_Y_LABEL, STRIKE_LEVEL_LABEL,
};
use risk_models::scenarios::{ScenarioRiskEntry, SCENARIO_CHART_TITLE, SCENARIO_RISK_LABEL};

/// Colour used for a scenario's bar
fn scenario_color(scenario: MarketScenario) -> Color {
    match scenario {
        MarketScenario::BullMarket => Color::Green,
        MarketScenario::BearMarket => Color::Red,
        MarketScenario::StableMarket => Color::Blue,
        MarketScenario::HighVolatility => Color::Magenta,
    }
}

/// Draw header
pub fn draw_header(frame: &mut Frame, area: Rect, screen: Screen) {
    let title = format!(" {} - {} ", content::APP_TITLE, screen.title());
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw footer with keybindings, or the validation message when inputs are invalid
pub fn draw_footer(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let footer = match status {
        Some(message) => Paragraph::new(format!(" {} ", message))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        None => Paragraph::new(
            " [Up/Down]Field [Left/Right]Adjust [Space]Toggle [r]Reset | [Tab]Screen | [q]Quit ",
        )
        .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer.block(Block::default().borders(Borders::ALL)), area);
}

/// Draw the assessment screen: sidebar form on the left, charts on the right
pub fn draw_assessment(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(0)])
        .split(area);

    draw_form(frame, columns[0], &state.form, state.selected);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(60),
            Constraint::Min(8),
        ])
        .split(columns[1]);

    match &state.assessment {
        Some(assessment) => {
            draw_summary(frame, rows[0], assessment);
            draw_payoff_chart(frame, rows[1], &assessment.curve);
            draw_scenario_chart(frame, rows[2], &assessment.scenario_risks);
        }
        None => {
            let placeholder = Paragraph::new("No valid inputs assessed yet.")
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(placeholder, columns[1]);
        }
    }
}

/// Draw the sidebar input form
fn draw_form(frame: &mut Frame, area: Rect, form: &PortfolioForm, selected: Field) {
    let mut lines = Vec::new();

    for field in Field::ALL {
        let is_selected = field == selected;
        let label_style = if is_selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { "> " } else { "  " };

        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, field.label()),
            label_style,
        )));

        if field == Field::Scenarios {
            for (i, scenario) in MarketScenario::ALL.iter().enumerate() {
                let checked = if form.scenarios.contains(scenario) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if is_selected && i == form.scenario_cursor {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default().fg(scenario_color(*scenario))
                };
                lines.push(Line::from(Span::styled(
                    format!("    {} {}", checked, scenario.name()),
                    style,
                )));
            }
        } else {
            lines.push(Line::from(format!("    {}", form.display(field))));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        selected.help(),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));
    if selected == Field::Scenarios {
        let scenario = form.cursor_scenario();
        lines.push(Line::from(Span::styled(
            format!("{}: {}", scenario.name(), scenario.description()),
            Style::default().fg(scenario_color(scenario)),
        )));
    }

    let sidebar = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Portfolio Configuration ")
                .borders(Borders::ALL),
        );
    frame.render_widget(sidebar, area);
}

/// Draw the summary above the charts
fn draw_summary(frame: &mut Frame, area: Rect, assessment: &RiskAssessment) {
    let config = &assessment.config;
    let factor = adjustment_factor(config.volatility(), config.interest_rate());

    let text = vec![
        Line::from(vec![
            Span::raw("Max value: "),
            Span::styled(
                format_thousands(assessment.curve.max_value()),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  |  Adjustment: "),
            Span::styled(format!("{:.4}x", factor), Style::default().fg(Color::Cyan)),
            Span::raw("  |  Notional: "),
            Span::raw(format_thousands(config.notional())),
        ]),
        Line::from(vec![
            Span::raw(format!(
                "{} {} on {}, expiring {}",
                config.option_type(),
                assessment.curve.strike_label(),
                config.underlying(),
                config.expiration()
            )),
        ]),
    ];

    let summary = Paragraph::new(text)
        .block(Block::default().title(" Summary ").borders(Borders::ALL));
    frame.render_widget(summary, area);
}

/// Draw the portfolio value line chart with the strike marker
fn draw_payoff_chart(frame: &mut Frame, area: Rect, curve: &PayoffCurve) {
    let curve_data = chart::curve_data(curve);
    let marker_data = chart::strike_marker(curve);
    let level_data = [chart::strike_level_point(curve)];

    let x_bounds = chart::x_bounds(curve);
    let y_bounds = chart::y_bounds(curve);

    let datasets = vec![
        Dataset::default()
            .name(CURVE_Y_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&curve_data),
        Dataset::default()
            .name(curve.strike_label())
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(&marker_data),
        Dataset::default()
            .name(STRIKE_LEVEL_LABEL)
            .marker(symbols::Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::White))
            .data(&level_data),
    ];

    let x_labels: Vec<Span> = chart::ticks(x_bounds, 5)
        .into_iter()
        .map(|x| Span::raw(format!("{:.0}", x)))
        .collect();
    let y_labels: Vec<Span> = chart::ticks(y_bounds, 3)
        .into_iter()
        .map(|y| Span::raw(format_k(y)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", curve.title()))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(CURVE_X_LABEL)
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(CURVE_Y_LABEL)
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Draw the scenario risk bar chart, one coloured bar per selected scenario
fn draw_scenario_chart(frame: &mut Frame, area: Rect, entries: &[ScenarioRiskEntry]) {
    let block = Block::default()
        .title(format!(" {} ", SCENARIO_CHART_TITLE))
        .borders(Borders::ALL);

    if entries.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from("No market scenarios selected."),
            Line::from(Span::styled(
                content::SCENARIO_CAPTION,
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let bars: Vec<Bar> = entries
        .iter()
        .map(|entry| {
            Bar::default()
                .value(chart::bar_value(entry))
                .text_value(chart::bar_text(entry))
                .label(Line::from(entry.scenario.name()))
                .style(Style::default().fg(scenario_color(entry.scenario)))
        })
        .collect();

    let bar_chart = BarChart::default()
        .block(block.title(
            Title::from(format!(" {} ", SCENARIO_RISK_LABEL)).position(Position::Bottom),
        ))
        .bar_width(15)
        .bar_gap(3)
        .max(chart::bar_axis_max())
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(Color::Yellow))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(bar_chart, area);
}

/// Draw the key concepts screen
pub fn draw_concepts(frame: &mut Frame, area: Rect) {
    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let term = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("Welcome", heading)),
        Line::from(content::WELCOME),
        Line::from(""),
        Line::from(Span::styled("Learning Outcomes", heading)),
    ];
    lines.extend(
        content::LEARNING_OUTCOMES
            .iter()
            .map(|outcome| Line::from(format!("  - {}", outcome))),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Risk Factors", heading)));
    lines.extend(content::RISK_FACTORS.iter().map(|(name, text)| {
        Line::from(vec![
            Span::styled(format!("  {}: ", name), term),
            Span::raw(*text),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Reading the Charts", heading)));
    lines.push(Line::from(format!("  {}", content::CURVE_CAPTION)));
    lines.push(Line::from(format!("  {}", content::SCENARIO_CAPTION)));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Key Concepts", heading)));
    lines.extend(content::KEY_CONCEPTS.iter().map(|(name, text)| {
        Line::from(vec![
            Span::styled(format!("  {}: ", name), term),
            Span::raw(*text),
        ])
    }));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Disclaimer: {}", content::DISCLAIMER),
        Style::default().fg(Color::Red),
    )));

    let concepts = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Key Concepts ").borders(Borders::ALL));
    frame.render_widget(concepts, area);
}
