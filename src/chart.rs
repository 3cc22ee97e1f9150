// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Bar chart preview of a sensitivity profile
//!
//! The chart is drawn with ratatui widgets into an off-screen buffer and
//! returned as plain text, so it works in pipes and scrollback.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Widget};

use crate::config::ChartConfig;
use crate::sensitivity::{SavedProfile, MAX_SENSITIVITY};

const BAR_GAP: u16 = 2;

/// Widest bar accepted from settings
pub const MAX_BAR_WIDTH: u16 = 64;

/// Bar chart widget for one saved profile
pub struct ProfileChart<'a> {
    saved: &'a SavedProfile,
    bar_width: u16,
}

impl<'a> ProfileChart<'a> {
    pub fn new(saved: &'a SavedProfile) -> Self {
        Self {
            saved,
            bar_width: ChartConfig::default().bar_width,
        }
    }

    pub fn bar_width(mut self, bar_width: u16) -> Self {
        self.bar_width = bar_width.clamp(1, MAX_BAR_WIDTH);
        self
    }

    /// Chart title shown in the border
    pub fn title(&self) -> String {
        format!(
            "{} Sensitivity for {}",
            self.saved.play_style, self.saved.device
        )
    }

    /// Width needed to show every bar plus the border
    pub fn required_width(&self) -> u16 {
        let bars = self.saved.profile.values().len() as u16;
        bars
            .saturating_mul(self.bar_width)
            .saturating_add((bars - 1).saturating_mul(BAR_GAP))
            .saturating_add(2)
    }
}

impl<'a> Widget for ProfileChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .saved
            .profile
            .iter()
            .map(|(field, value)| {
                Bar::default()
                    .value(u64::from(value))
                    .label(Line::from(field.label()))
            })
            .collect();

        let title = self.title();
        BarChart::default()
            .block(Block::bordered().title(title))
            .bar_width(self.bar_width)
            .bar_gap(BAR_GAP)
            .bar_style(Style::default().fg(Color::LightRed))
            .value_style(Style::default().fg(Color::White).bg(Color::LightRed))
            .max(u64::from(MAX_SENSITIVITY))
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

/// Render the profile chart to text lines, trailing whitespace trimmed.
pub fn render_text(saved: &SavedProfile, config: &ChartConfig) -> String {
    let chart = ProfileChart::new(saved).bar_width(config.bar_width);
    let title_width = u16::try_from(chart.title().chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let width = chart.required_width().max(title_width);
    let area = Rect::new(0, 0, width, config.height);

    let mut buffer = Buffer::empty(area);
    chart.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        let mut line = String::new();
        for x in 0..buffer.area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}
