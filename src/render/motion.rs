//! Declarative entrance animations.
//!
//! Every animated node carries a [`Reveal`]: which variant it uses and how
//! long after page load it starts. Siblings are staggered by a fixed step, so
//! ordering is decided here at build time rather than by timers in the page.
//! [`Timeline`] keeps the per-node `hidden -> visible` lifecycle.

use std::f64::consts::PI;

/// Delay between consecutive staggered siblings.
pub const STAGGER_STEP_MS: u32 = 100;

/// Footer starts after the body has begun revealing.
pub const FOOTER_DELAY_MS: u32 = 500;

/// Visual state of a node: offsets in px, opacity in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub const fn hidden(x: f64, y: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    Spring { stiffness: f64 },
}

impl Easing {
    /// Springs become an overshooting cubic-bezier; stiffer springs overshoot more.
    pub fn css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::Spring { stiffness } => {
                let overshoot = 1.0 + (stiffness / 200.0).min(1.0) * 0.6;
                format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", overshoot)
            }
        }
    }

    /// Settling time of an undamped spring period with unit mass.
    pub fn natural_duration_ms(&self) -> Option<u32> {
        match self {
            Easing::EaseOut => None,
            Easing::Spring { stiffness } => Some((2.0 * PI / stiffness.sqrt() * 1000.0).round() as u32),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn tween(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::EaseOut,
        }
    }

    pub fn spring(stiffness: f64) -> Self {
        let easing = Easing::Spring { stiffness };
        Self {
            duration_ms: easing.natural_duration_ms().unwrap_or(500),
            easing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Header,
    Section,
    Card,
    ListItem,
    Footer,
}

impl RevealKind {
    pub const ALL: [RevealKind; 5] = [
        RevealKind::Header,
        RevealKind::Section,
        RevealKind::Card,
        RevealKind::ListItem,
        RevealKind::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RevealKind::Header => "header",
            RevealKind::Section => "section",
            RevealKind::Card => "card",
            RevealKind::ListItem => "item",
            RevealKind::Footer => "footer",
        }
    }

    pub fn hidden(self) -> Pose {
        match self {
            RevealKind::Header => Pose::hidden(0.0, -50.0),
            RevealKind::Section | RevealKind::Card => Pose::hidden(0.0, 20.0),
            RevealKind::ListItem => Pose::hidden(-20.0, 0.0),
            RevealKind::Footer => Pose::hidden(0.0, 0.0),
        }
    }

    pub fn visible(self) -> Pose {
        Pose::VISIBLE
    }

    pub fn transition(self) -> Transition {
        match self {
            RevealKind::ListItem => Transition::spring(100.0),
            _ => Transition::tween(500),
        }
    }

    pub fn class(self) -> String {
        format!("reveal reveal-{}", self.name())
    }
}

/// Hover response of project cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hover {
    pub lift_px: f64,
    pub scale: f64,
    pub transition: Transition,
}

pub fn card_hover() -> Hover {
    Hover {
        lift_px: -5.0,
        scale: 1.02,
        transition: Transition::spring(300.0),
    }
}

/// Fixed per-child offset on top of the parent's own delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub fn after(base_ms: u32) -> Self {
        Self {
            base_ms,
            step_ms: STAGGER_STEP_MS,
        }
    }

    pub fn delay(&self, index: usize) -> u32 {
        self.base_ms + self.step_ms * index as u32
    }
}

/// Animation descriptor attached to one rendered node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub kind: RevealKind,
    pub delay_ms: u32,
}

impl Reveal {
    pub fn new(kind: RevealKind, delay_ms: u32) -> Self {
        Self { kind, delay_ms }
    }

    pub fn class(&self) -> String {
        self.kind.class()
    }

    pub fn style(&self) -> String {
        format!("--reveal-delay: {}ms", self.delay_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub id: String,
    pub reveal: Reveal,
    pub state: RevealState,
    pub transitions: u32,
}

impl TimelineEntry {
    pub fn pose(&self) -> Pose {
        match self.state {
            RevealState::Hidden => self.reveal.kind.hidden(),
            RevealState::Visible => self.reveal.kind.visible(),
        }
    }
}

/// All reveals on a page, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node's reveal and hand the descriptor back for markup.
    pub fn register(&mut self, id: impl Into<String>, kind: RevealKind, delay_ms: u32) -> Reveal {
        let reveal = Reveal::new(kind, delay_ms);
        self.entries.push(TimelineEntry {
            id: id.into(),
            reveal,
            state: RevealState::Hidden,
            transitions: 0,
        });
        reveal
    }

    /// Move every hidden entry to visible. Returns how many moved; a second
    /// call moves none.
    pub fn mount(&mut self) -> usize {
        let mut moved = 0;
        for entry in &mut self.entries {
            if entry.state == RevealState::Hidden {
                entry.state = RevealState::Visible;
                entry.transitions += 1;
                moved += 1;
            }
        }
        moved
    }

    /// Entries ordered by when their animation starts; ties keep document order.
    pub fn schedule(&self) -> Vec<&TimelineEntry> {
        let mut ordered: Vec<&TimelineEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| e.reveal.delay_ms);
        ordered
    }

    /// Time at which the last animation has finished.
    pub fn total_duration_ms(&self) -> u32 {
        self.entries
            .iter()
            .map(|e| e.reveal.delay_ms + e.reveal.kind.transition().duration_ms)
            .max()
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
