use crate::config::{ErrorStatusRange, MonitorConfig};
use crate::monitor::types::Event;
use chrono::{DateTime, FixedOffset, TimeDelta};

/// A left-closed time bucket anchored at the timestamp of its first member.
#[derive(Debug)]
pub struct Window<'a> {
    start_time: DateTime<FixedOffset>,
    size: TimeDelta,
    members: Vec<&'a Event>,
}

impl<'a> Window<'a> {
    fn open(start_time: DateTime<FixedOffset>, size: TimeDelta) -> Self {
        Self {
            start_time,
            size,
            members: Vec::new(),
        }
    }

    pub fn start_time(&self) -> DateTime<FixedOffset> {
        self.start_time
    }

    /// True when `timestamp` lies in `[start, start + size]`. The upper bound is
    /// inclusive; an event earlier than the start never belongs to the window.
    pub fn contains(&self, timestamp: DateTime<FixedOffset>) -> bool {
        let offset = timestamp - self.start_time;
        offset >= TimeDelta::zero() && offset <= self.size
    }

    fn push(&mut self, event: &'a Event) {
        self.members.push(event);
    }

    fn seal(self, error_status: ErrorStatusRange) -> Option<SealedWindow<'a>> {
        if self.members.is_empty() {
            return None;
        }

        let error_count = self
            .members
            .iter()
            .filter(|e| error_status.contains(e.status_code))
            .count();

        Some(SealedWindow {
            start_time: self.start_time,
            size: self.size,
            members: self.members,
            error_count,
        })
    }
}

/// A window closed to new members. Always holds at least one event.
#[derive(Debug, Clone)]
pub struct SealedWindow<'a> {
    pub start_time: DateTime<FixedOffset>,
    pub size: TimeDelta,
    pub members: Vec<&'a Event>,
    pub error_count: usize,
}

impl SealedWindow<'_> {
    pub fn error_rate(&self) -> f64 {
        self.error_count as f64 / self.members.len() as f64
    }
}

#[derive(Debug)]
pub enum WindowState<'a> {
    NoWindowOpen,
    WindowOpen(Window<'a>),
}

/// Partitions a timestamp-ordered event stream into contiguous windows.
///
/// Exactly one window is open at a time. A window is sealed when an event falls
/// past its span (see [`WindowAggregator::push`]) or when the stream ends
/// ([`WindowAggregator::finish`]). Window boundaries follow the data: each new
/// window starts at the timestamp of the event that opened it, not on a
/// wall-clock grid.
pub struct WindowAggregator<'a> {
    size: TimeDelta,
    error_status: ErrorStatusRange,
    state: WindowState<'a>,
}

impl<'a> WindowAggregator<'a> {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            size: config.window_delta(),
            error_status: config.error_status,
            state: WindowState::NoWindowOpen,
        }
    }

    pub fn state(&self) -> &WindowState<'a> {
        &self.state
    }

    /// Assigns `event` to the open window, or seals that window and opens a new
    /// one starting at `event.timestamp`. Returns the sealed window, if any.
    ///
    /// Events must arrive in non-decreasing timestamp order.
    pub fn push(&mut self, event: &'a Event) -> Option<SealedWindow<'a>> {
        let in_window = matches!(
            &self.state,
            WindowState::WindowOpen(window) if window.contains(event.timestamp)
        );

        let sealed = if in_window {
            None
        } else {
            let next = Window::open(event.timestamp, self.size);
            self.transition(WindowState::WindowOpen(next))
        };

        if let WindowState::WindowOpen(window) = &mut self.state {
            window.push(event);
        }

        sealed
    }

    /// Seals the last open window once the stream is exhausted.
    pub fn finish(mut self) -> Option<SealedWindow<'a>> {
        self.transition(WindowState::NoWindowOpen)
    }

    // Seal-and-replace: the only place a window leaves the open state.
    fn transition(&mut self, next: WindowState<'a>) -> Option<SealedWindow<'a>> {
        match std::mem::replace(&mut self.state, next) {
            WindowState::NoWindowOpen => None,
            WindowState::WindowOpen(window) => window.seal(self.error_status),
        }
    }
}

/// Runs one full sweep over `events` and returns every sealed window in order.
pub fn seal_windows<'a>(events: &'a [Event], config: &MonitorConfig) -> Vec<SealedWindow<'a>> {
    let mut aggregator = WindowAggregator::new(config);

    let mut sealed: Vec<_> = events.iter().filter_map(|e| aggregator.push(e)).collect();
    sealed.extend(aggregator.finish());
    sealed
}
