//! Gameplay event log
//!
//! The log is an explicit sink: every operation that records something takes
//! `&mut EventLog`. Recorded events are also mirrored to the `log` facade.

use std::fmt;

use super::state::TankRole;

/// Something worth telling the player about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// A game was loaded from a file (or built in)
    GameInitialized { source: String },
    BulletFired { shooter: TankRole },
    TankDestroyed { role: TankRole },
    /// Bullets removed by bullet or tank collisions this tick
    BulletsDestroyed { count: usize },
    /// Bullets handed to the ownerless pool
    BulletsOrphaned { count: usize },
    GameWon,
    GameLost,
    LogCleared,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::GameInitialized { source } => {
                write!(f, "Game initialized from source {}", source)
            }
            EventKind::BulletFired { shooter } => write!(f, "{} fired a new bullet.", shooter),
            EventKind::TankDestroyed { role } => write!(f, "{} destroyed.", role),
            EventKind::BulletsDestroyed { count } => {
                write!(f, "{} bullet(s) destroyed in collisions.", count)
            }
            EventKind::BulletsOrphaned { count } => {
                write!(f, "{} bullet(s) lost their tank.", count)
            }
            EventKind::GameWon => write!(f, "All enemy tanks destroyed. You won!"),
            EventKind::GameLost => write!(f, "Player tank destroyed. Game over."),
            EventKind::LogCleared => write!(f, "Event log cleared."),
        }
    }
}

/// A recorded event, stamped with the tick it happened on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub tick: u64,
    pub kind: EventKind,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[tick {}] {}", self.tick, self.kind)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
    current_tick: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick stamped onto subsequently recorded events
    pub fn set_tick(&mut self, tick: u64) {
        self.current_tick = tick;
    }

    pub fn record(&mut self, kind: EventKind) {
        let event = Event {
            tick: self.current_tick,
            kind,
        };
        log::debug!("{}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Forget everything, leaving a single LogCleared entry
    pub fn clear(&mut self) {
        self.events.clear();
        self.record(EventKind::LogCleared);
    }

    /// Whether any recorded event matches `pred`
    pub fn contains(&self, pred: impl Fn(&EventKind) -> bool) -> bool {
        self.events.iter().any(|e| pred(&e.kind))
    }
}
