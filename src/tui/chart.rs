//! Savings chart view
//!
//! Renders the savings chart as grouped bars: one group per insertion month,
//! one colored bar per income type.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::reports::SavingsChart;

const BAR_WIDTH: u16 = 9;

/// Bar colors, cycled by income type
const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::LightRed,
    Color::LightBlue,
    Color::LightYellow,
    Color::LightGreen,
];

/// Color assigned to the income type at `index` of the legend
pub fn color_for(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Render the chart window contents
pub fn render(frame: &mut Frame, chart: &SavingsChart, currency_symbol: &str) {
    let [chart_area, legend_area, help_area] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let block = Block::default()
        .title(" Monthly Saving Performance ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(" Saving Insertion Month ").alignment(Alignment::Center))
        .borders(Borders::ALL);

    if chart.is_empty() {
        render_empty(frame, block, chart_area);
    } else {
        frame.render_widget(bar_chart(chart, currency_symbol).block(block), chart_area);
    }

    frame.render_widget(Paragraph::new(legend(chart)), legend_area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        help_area,
    );
}

fn render_empty(frame: &mut Frame, block: Block<'_>, area: Rect) {
    frame.render_widget(
        Paragraph::new("No savings to plot.")
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn bar_chart<'a>(chart: &'a SavingsChart, currency_symbol: &str) -> BarChart<'a> {
    let mut widget = BarChart::default()
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .group_gap(3)
        .label_style(Style::default().add_modifier(Modifier::BOLD));

    for group in &chart.groups {
        let bars: Vec<Bar> = group
            .bars
            .iter()
            .map(|bar| {
                let color = chart
                    .income_type_index(&bar.income_type)
                    .map(color_for)
                    .unwrap_or(Color::White);
                Bar::default()
                    .value(bar.total.cents().max(0) as u64)
                    .text_value(bar.total.format_with_symbol(currency_symbol))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();

        widget = widget.data(
            BarGroup::default()
                .label(Line::from(group.month.as_str()))
                .bars(&bars),
        );
    }

    widget
}

fn legend(chart: &SavingsChart) -> Line<'_> {
    let mut spans = vec![Span::raw(" Income Type: ")];
    for (index, income_type) in chart.income_types.iter().enumerate() {
        spans.push(Span::styled("■ ", Style::default().fg(color_for(index))));
        spans.push(Span::raw(income_type.as_str()));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}
