use serde::{Deserialize, Serialize};
use snafu::ensure;
use std::collections::HashSet;

use crate::error::{self, Result};
use crate::game::Target;
use crate::primitives::{Coordinate2D, HitBox, ImageSize};

/// Half-width of the square window around a target's rescaled position
/// within which a click counts as a hit.
pub const HIT_TOLERANCE_PX: f64 = 15.0;

/// An input to the progress tracker.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum TrackerEvent {
    /// The player clicked somewhere on the rendered photo.
    ImageClicked { position: Coordinate2D },
    /// The player picked a target from the selection menu. `displayed` is
    /// the rendered size of the photo at the time of the click.
    TargetSelected { name: String, displayed: ImageSize },
}

/// An observable transition produced by a tracker update.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum TrackerSignal {
    TargetFound { name: String },
    /// Emitted at most once per tracker, by the update that finds the last
    /// target. The caller records the completion and opens the
    /// name-submission prompt in response.
    AllTargetsFound,
}

#[derive(Clone, Debug, PartialEq)]
struct TargetState {
    target: Target,
    found: bool,
}

/// Tracks which targets the player has found in one photo.
///
/// The tracker is a reducer: all mutation goes through [`update`], which maps
/// an event to zero or more [`TrackerSignal`]s. Clicking only records the
/// position; found-state changes when a target is selected from the menu and
/// the recorded click lies within [`HIT_TOLERANCE_PX`] of the target's
/// position rescaled to the rendered image size.
///
/// [`update`]: ProgressTracker::update
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressTracker {
    original_size: ImageSize,
    targets: Vec<TargetState>,
    last_click: Option<Coordinate2D>,
    completion_fired: bool,
}

impl ProgressTracker {
    /// Creates a tracker for a photo's target list, all targets unfound.
    ///
    /// # Errors
    ///
    /// Fails if the target list is empty or contains duplicate names.
    ///
    pub fn new(original_size: ImageSize, targets: Vec<Target>) -> Result<Self> {
        ensure!(!targets.is_empty(), error::EmptyTargetList);

        let mut seen = HashSet::new();
        for target in &targets {
            ensure!(
                seen.insert(target.name.clone()),
                error::DuplicateTargetName {
                    name: target.name.clone()
                }
            );
        }

        Ok(Self {
            original_size,
            targets: targets
                .into_iter()
                .map(|target| TargetState {
                    target,
                    found: false,
                })
                .collect(),
            last_click: None,
            completion_fired: false,
        })
    }

    /// Applies one event and returns the transitions it caused.
    pub fn update(&mut self, event: TrackerEvent) -> Vec<TrackerSignal> {
        match event {
            TrackerEvent::ImageClicked { position } => {
                self.last_click = Some(position);
                Vec::new()
            }
            TrackerEvent::TargetSelected { name, displayed } => {
                self.select_target(&name, displayed)
            }
        }
    }

    fn select_target(&mut self, name: &str, displayed: ImageSize) -> Vec<TrackerSignal> {
        let Some(click) = self.last_click else {
            return Vec::new();
        };

        let Some(entry) = self.targets.iter_mut().find(|t| t.target.name == name) else {
            return Vec::new();
        };

        // The menu only offers unfound targets; re-confirming one anyway is
        // a no-op.
        if entry.found {
            return Vec::new();
        }

        let displayed_position = self
            .original_size
            .map_position(displayed, entry.target.position);
        let hit_box = HitBox::new(displayed_position, HIT_TOLERANCE_PX)
            .expect("tolerance constant is positive");

        if !hit_box.contains(click) {
            return Vec::new();
        }

        entry.found = true;

        let mut signals = vec![TrackerSignal::TargetFound {
            name: name.to_string(),
        }];

        if self.targets.iter().all(|t| t.found) && !self.completion_fired {
            self.completion_fired = true;
            signals.push(TrackerSignal::AllTargetsFound);
        }

        signals
    }

    pub fn last_click(&self) -> Option<Coordinate2D> {
        self.last_click
    }

    pub fn found_count(&self) -> usize {
        self.targets.iter().filter(|t| t.found).count()
    }

    pub fn total_targets(&self) -> usize {
        self.targets.len()
    }

    pub fn is_complete(&self) -> bool {
        self.targets.iter().all(|t| t.found)
    }

    /// The targets still to be found, in the photo's target order. This is
    /// what the selection menu offers.
    pub fn unfound_targets(&self) -> impl Iterator<Item = &Target> {
        self.targets
            .iter()
            .filter(|t| !t.found)
            .map(|t| &t.target)
    }
}
