//! User-editable skill tags

use super::focus::NavKey;
use super::timer::TimerSlot;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("skill id pattern compiles"));

/// Canonical key of a skill: lowercase, runs of anything outside `[a-z0-9]`
/// collapsed to one hyphen, no leading or trailing hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SkillId(String);

impl SkillId {
    pub fn normalize(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let collapsed = NON_ALNUM_RUN.replace_all(&lowered, "-");
        Self(collapsed.trim_matches('-').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short highlight shown on an entry after an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseKind {
    /// The entry was just appended
    Added,
    /// An add attempt collided with this entry
    Duplicate,
}

impl PulseKind {
    pub fn duration(self) -> Duration {
        match self {
            PulseKind::Added => Duration::from_millis(250),
            PulseKind::Duplicate => Duration::from_millis(220),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub display_text: String,
    pub id: SkillId,
    pub is_selected: bool,
    pulse: Option<PulseKind>,
    pulse_timer: TimerSlot,
}

impl Skill {
    fn new(display_text: &str, id: SkillId, is_selected: bool) -> Self {
        Self {
            display_text: display_text.to_string(),
            id,
            is_selected,
            pulse: None,
            pulse_timer: TimerSlot::new(),
        }
    }

    fn start_pulse(&mut self, kind: PulseKind, now: Instant) {
        self.pulse = Some(kind);
        self.pulse_timer.schedule(now, kind.duration());
    }

    pub fn pulse(&self) -> Option<PulseKind> {
        self.pulse
    }

    /// Highlight strength in [0, 1], easing out over the pulse's lifetime
    pub fn pulse_intensity(&self, now: Instant) -> f32 {
        match (self.pulse, self.pulse_timer.progress(now)) {
            (Some(_), Some(progress)) => 1.0 - simple_easing::cubic_out(progress),
            _ => 0.0,
        }
    }
}

/// Result of an add attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(SkillId),
    /// Already present; the existing entry got a pulse instead
    Duplicate(SkillId),
    /// Blank input, nothing happened
    Ignored,
}

/// Ordered skill entries, unique by [`SkillId`]
#[derive(Debug, Clone, Default)]
pub struct SkillCollection {
    skills: Vec<Skill>,
}

impl SkillCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection seeded with unselected preset skills (duplicates dropped)
    pub fn with_presets<I, S>(presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collection = Self::new();
        for text in presets {
            let text = text.as_ref().trim();
            let id = SkillId::normalize(text);
            if !id.is_empty() && collection.position(&id).is_none() {
                collection.skills.push(Skill::new(text, id, false));
            }
        }
        collection
    }

    fn position(&self, id: &SkillId) -> Option<usize> {
        self.skills.iter().position(|s| &s.id == id)
    }

    /// Add a skill from raw input. New skills start selected.
    pub fn add(&mut self, raw_text: &str, now: Instant) -> AddOutcome {
        let text = raw_text.trim();
        let id = SkillId::normalize(text);
        if id.is_empty() {
            return AddOutcome::Ignored;
        }

        if let Some(index) = self.position(&id) {
            tracing::debug!(skill = %id, "duplicate skill");
            self.skills[index].start_pulse(PulseKind::Duplicate, now);
            return AddOutcome::Duplicate(id);
        }

        tracing::info!(skill = %id, "skill added");
        let mut skill = Skill::new(text, id.clone(), true);
        skill.start_pulse(PulseKind::Added, now);
        self.skills.push(skill);
        AddOutcome::Added(id)
    }

    /// Remove an entry, keeping the order of the rest
    pub fn remove(&mut self, id: &SkillId) -> Option<Skill> {
        let index = self.position(id)?;
        tracing::info!(skill = %id, "skill removed");
        Some(self.skills.remove(index))
    }

    /// Flip the selection of an entry. Returns the new selection state.
    pub fn toggle_selection(&mut self, id: &SkillId) -> Option<bool> {
        let index = self.position(id)?;
        let skill = &mut self.skills[index];
        skill.is_selected = !skill.is_selected;
        Some(skill.is_selected)
    }

    /// Keyboard activation of a focused entry; Enter and Space toggle it
    pub fn activate(&mut self, id: &SkillId, key: NavKey) -> Option<bool> {
        match key {
            NavKey::Enter | NavKey::Space => self.toggle_selection(id),
            _ => None,
        }
    }

    /// End pulses whose time is up
    pub fn tick(&mut self, now: Instant) {
        for skill in &mut self.skills {
            if skill.pulse_timer.fire(now).is_some() {
                skill.pulse = None;
            }
        }
    }

    pub fn get(&self, id: &SkillId) -> Option<&Skill> {
        self.position(id).map(|i| &self.skills[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    /// Display texts of the selected entries, in order
    pub fn selected(&self) -> Vec<String> {
        self.skills
            .iter()
            .filter(|s| s.is_selected)
            .map(|s| s.display_text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
