//! Status line widgets.
//!
//! Pure and stateless: everything shown is passed in by the caller.

use crate::config::TriggerPolicy;
use crate::model::{EngagementPhase, RawScrollPhase};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Engagement phase label, colored by phase.
///
/// # Examples
///
/// ```rust
/// use scrollpin::model::EngagementPhase;
/// use scrollpin::view::status::PhaseIndicator;
///
/// let span = PhaseIndicator::new(Some(EngagementPhase::AutoScrolling)).render();
/// assert_eq!(span.content, "AUTO SCROLLING");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhaseIndicator {
    phase: Option<EngagementPhase>,
}

impl PhaseIndicator {
    /// Indicator for `phase`; `None` when the policy has no engagement phase.
    pub fn new(phase: Option<EngagementPhase>) -> Self {
        Self { phase }
    }

    /// Render as a styled span.
    pub fn render(&self) -> Span<'static> {
        match self.phase {
            Some(phase) => {
                let style = match phase {
                    EngagementPhase::AutoScrolling => Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                    EngagementPhase::UserScrolling => Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    EngagementPhase::Idle => Style::default().fg(Color::Gray),
                    EngagementPhase::IdleExpired => Style::default().fg(Color::DarkGray),
                };
                Span::styled(phase.label(), style)
            }
            None => Span::styled("n/a", Style::default().fg(Color::DarkGray)),
        }
    }
}

/// Full status line for one surface.
#[derive(Debug, Clone, Copy)]
pub struct StatusLine {
    /// Active policy.
    pub policy: TriggerPolicy,
    /// Engagement phase, if the policy tracks one.
    pub phase: Option<EngagementPhase>,
    /// Latest raw scroll phase.
    pub raw: RawScrollPhase,
    /// Whether the bottom sentinel is visible.
    pub bottom_visible: bool,
    /// Whether content is streaming.
    pub streaming: bool,
}

impl StatusLine {
    /// Render as one line.
    pub fn render(&self) -> Line<'static> {
        let dim = Style::default().fg(Color::DarkGray);
        let bottom = if self.bottom_visible {
            Span::styled("visible", Style::default().fg(Color::Green))
        } else {
            Span::styled("hidden", dim)
        };
        let stream = if self.streaming {
            Span::styled(" [LIVE]", Style::default().fg(Color::Green))
        } else {
            Span::raw("")
        };

        Line::from(vec![
            Span::styled(format!("[{}] ", self.policy), dim),
            PhaseIndicator::new(self.phase).render(),
            Span::styled(" | raw: ", dim),
            Span::raw(self.raw.label()),
            Span::styled(" | bottom: ", dim),
            bottom,
            stream,
        ])
    }
}

// ===== Tests =====
