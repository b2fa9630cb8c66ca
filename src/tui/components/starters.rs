//! # Starter Suggestions
//!
//! Canned prompts offered on a fresh conversation. Picking one (F1–F4 or a
//! click) fills the composer with the prompt and sends it straight away.
//!
//! Wide terminals get a 2×2 grid of bordered cards with a description line.
//! Narrow ones get a compact list, one starter per row.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub struct Starter {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
}

pub static STARTERS: [Starter; 4] = [
    Starter {
        icon: "📅",
        title: "Find Events This Week",
        description: "Browse upcoming events at Purdue",
        prompt: "What events are happening at Purdue this week?",
    },
    Starter {
        icon: "🏈",
        title: "Sports Schedule",
        description: "Check Purdue sports games and schedules",
        prompt: "What are the upcoming Purdue sports events?",
    },
    Starter {
        icon: "🍝",
        title: "Dining Options",
        description: "Find concerts and shows",
        prompt: "Find dining locations that follow these dietary restrictions: ",
    },
    Starter {
        icon: "📖",
        title: "Study Locations",
        description: "Discover open study spots",
        prompt: "Find optimal study locations on campus",
    },
];

/// Below this width the grid collapses into a list.
const GRID_MIN_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 4;

/// Card rectangles from the last render, for mouse hit testing.
#[derive(Default)]
pub struct StarterState {
    pub card_areas: Vec<Rect>,
}

impl StarterState {
    /// Index of the starter drawn at screen cell (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.card_areas.iter().position(|r| r.contains(position))
    }

    pub fn clear(&mut self) {
        self.card_areas.clear();
    }
}

pub struct StarterGrid<'a> {
    pub state: &'a mut StarterState,
    /// A reply is pending; cards render dimmed
    pub disabled: bool,
}

impl<'a> StarterGrid<'a> {
    pub fn new(state: &'a mut StarterState, disabled: bool) -> Self {
        Self { state, disabled }
    }

    /// Rows needed at `width`.
    pub fn height(width: u16) -> u16 {
        if width >= GRID_MIN_WIDTH {
            CARD_HEIGHT * 2
        } else {
            STARTERS.len() as u16
        }
    }

    fn accent(&self) -> Style {
        if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        }
    }

    fn title_line(&self, index: usize, starter: &Starter) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("F{} ", index + 1), self.accent()),
            Span::raw(format!("{} ", starter.icon)),
            Span::styled(starter.title, Style::default().add_modifier(Modifier::BOLD)),
        ])
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(CARD_HEIGHT); 2]).split(area);
        for (row_index, row) in rows.iter().enumerate() {
            let cells = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row);
            for (col_index, cell) in cells.iter().enumerate() {
                let index = row_index * 2 + col_index;
                let starter = &STARTERS[index];
                let lines = vec![
                    self.title_line(index, starter),
                    Line::styled(
                        starter.description,
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ];
                let card = Paragraph::new(lines).block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(self.accent().add_modifier(Modifier::DIM)),
                );
                frame.render_widget(card, *cell);
                self.state.card_areas.push(*cell);
            }
        }
    }

    fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical(vec![Constraint::Length(1); STARTERS.len()]).split(area);
        for (index, (row, starter)) in rows.iter().zip(STARTERS.iter()).enumerate() {
            frame.render_widget(self.title_line(index, starter), *row);
            self.state.card_areas.push(*row);
        }
    }
}

impl<'a> Component for StarterGrid<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.clear();
        if area.width >= GRID_MIN_WIDTH {
            self.render_grid(frame, area);
        } else {
            self.render_list(frame, area);
        }
    }
}
