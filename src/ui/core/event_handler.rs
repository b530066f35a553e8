use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Frame budget used to throttle redraws (~60 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct EventHandler {
    tick_rate: Duration,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(100))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_render_time: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                // Windows reports both press and release; only presses are intents
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Duration {
        self.last_render_time.elapsed()
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.time_since_last_render() >= FRAME_INTERVAL
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
