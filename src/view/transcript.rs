//! Message transcript shown in the demo pane.

use ratatui::{
    style::{Color, Style},
    text::Line,
};
use unicode_width::UnicodeWidthChar;

/// Finished messages plus the one currently streaming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    finished: Vec<String>,
    current: String,
    streaming: bool,
}

/// Value-equatable view of a transcript, fed to the content watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSnapshot {
    /// Number of finished messages.
    pub finished: usize,
    /// Text of the streaming message.
    pub current: String,
}

impl Transcript {
    /// Empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new streaming message, discarding any unfinished text.
    pub fn start(&mut self) {
        self.current.clear();
        self.streaming = true;
    }

    /// Finish the streaming message. No-op when nothing is streaming.
    pub fn stop(&mut self) {
        if !self.streaming {
            return;
        }
        self.streaming = false;
        self.finished.push(std::mem::take(&mut self.current));
    }

    /// Append streamed text. Ignored when nothing is streaming.
    pub fn push_chunk(&mut self, chunk: &str) {
        if self.streaming {
            self.current.push_str(chunk);
        }
    }

    /// Whether a message is streaming.
    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Finished messages, oldest first.
    pub fn finished(&self) -> &[String] {
        &self.finished
    }

    /// Streaming message text.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Snapshot for change detection.
    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            finished: self.finished.len(),
            current: self.current.clone(),
        }
    }

    /// Render every message wrapped to `width`, separated by blank rows.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let finished_style = Style::default().fg(Color::Green);
        let current_style = Style::default().fg(Color::Cyan);

        let mut lines = Vec::new();
        let messages = self
            .finished
            .iter()
            .map(|text| (text.as_str(), finished_style))
            .chain(std::iter::once((self.current.as_str(), current_style)));

        for (index, (text, style)) in messages.enumerate() {
            if index > 0 {
                lines.push(Line::default());
            }
            lines.extend(
                wrap_text(text, width)
                    .into_iter()
                    .map(|row| Line::styled(row, style)),
            );
        }
        lines
    }
}

/// Hard-wrap `text` at `width` display columns.
///
/// Every `\n` starts a new row; an empty input yields one empty row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for source_line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for ch in source_line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
        rows.push(row);
    }
    rows
}

// ===== Tests =====
