//! Order progress model.
//!
//! Locates an order's current status on a linear stage sequence and
//! classifies every stage and every connector between adjacent stages.
//! Classification is a pure function of its inputs.

use crate::constants::{DUPLICATE_STAGE_MESSAGE, EMPTY_SEQUENCE_MESSAGE, UNKNOWN_STATUS_MESSAGE};
use crate::types::order_status::OrderStatusId;
use crate::types::stage::{Stage, StageIcon};
use serde::Serialize;
use thiserror::Error;

/// Reasons a progress bar cannot be produced.
///
/// None of these are fatal; the caller shows [`ProgressError::user_message`]
/// in place of the progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgressError {
    #[error("stage sequence is empty")]
    EmptySequence,
    #[error("status \"{0}\" is not part of the stage sequence")]
    UnknownStatus(String),
    #[error("stage {0} appears more than once in the sequence")]
    DuplicateStage(OrderStatusId),
}

impl ProgressError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ProgressError::EmptySequence => EMPTY_SEQUENCE_MESSAGE,
            ProgressError::UnknownStatus(_) => UNKNOWN_STATUS_MESSAGE,
            ProgressError::DuplicateStage(_) => DUPLICATE_STAGE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum StageState {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ConnectorState {
    Completed,
    Pending,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StageProgress<'a> {
    pub stage: &'a Stage,
    pub state: StageState,
}

impl StageProgress<'_> {
    /// Icon to draw: completed stages show a check mark instead of their own icon.
    pub fn icon(&self) -> StageIcon {
        match self.state {
            StageState::Completed => StageIcon::CheckCircle,
            StageState::Active | StageState::Pending => self.stage.icon,
        }
    }

    /// Completed or active, i.e. the order has reached this stage.
    pub fn is_reached(&self) -> bool {
        self.state != StageState::Pending
    }
}

/// Result of classifying a stage sequence against a current status.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Progress<'a> {
    pub current_index: usize,
    pub stages: Vec<StageProgress<'a>>,
    /// `connectors[i]` links `stages[i]` and `stages[i + 1]`.
    pub connectors: Vec<ConnectorState>,
}

impl<'a> Progress<'a> {
    pub fn active(&self) -> &'a Stage {
        self.stages[self.current_index].stage
    }

    pub fn is_terminal(&self) -> bool {
        self.current_index + 1 == self.stages.len()
    }

    pub fn states(&self) -> Vec<StageState> {
        self.stages.iter().map(|s| s.state).collect()
    }
}

/// Classifies `stages` against `current`.
///
/// Stage `i` is completed before the current index, active at it and
/// pending after it. Connector `i` is completed when the stage it starts
/// from is completed.
pub fn classify(stages: &[Stage], current: OrderStatusId) -> Result<Progress<'_>, ProgressError> {
    if stages.is_empty() {
        return Err(ProgressError::EmptySequence);
    }
    let current_index = stages
        .iter()
        .position(|stage| stage.id == current)
        .ok_or_else(|| ProgressError::UnknownStatus(current.to_string()))?;

    let classified = stages
        .iter()
        .enumerate()
        .map(|(i, stage)| StageProgress {
            stage,
            state: match i.cmp(&current_index) {
                std::cmp::Ordering::Less => StageState::Completed,
                std::cmp::Ordering::Equal => StageState::Active,
                std::cmp::Ordering::Greater => StageState::Pending,
            },
        })
        .collect();

    let connectors = (0..stages.len() - 1)
        .map(|i| {
            if i < current_index {
                ConnectorState::Completed
            } else {
                ConnectorState::Pending
            }
        })
        .collect();

    Ok(Progress {
        current_index,
        stages: classified,
        connectors,
    })
}

/// Same as [`classify`] for a status string coming straight from a data source.
pub fn classify_raw<'a>(stages: &'a [Stage], current: &str) -> Result<Progress<'a>, ProgressError> {
    if stages.is_empty() {
        return Err(ProgressError::EmptySequence);
    }
    classify(stages, current.parse()?)
}
