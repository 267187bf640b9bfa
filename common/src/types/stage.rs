use crate::progress::{self, Progress, ProgressError};
use crate::types::order_status::OrderStatusId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Symbolic icon key. The presentation layer resolves it to something drawable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StageIcon {
    ClipboardList,
    ChefHat,
    Truck,
    PackageCheck,
    Package,
    Utensils,
    Clock,
    MapPin,
    /// Shown instead of the stage's own icon once the stage is completed.
    CheckCircle,
}

/// One discrete step of an order's lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stage {
    pub id: OrderStatusId,
    pub label: String,
    pub icon: StageIcon,
}

impl Stage {
    pub fn new(id: OrderStatusId, label: impl Into<String>, icon: StageIcon) -> Self {
        Self {
            id,
            label: label.into(),
            icon,
        }
    }
}

/// Ordered, duplicate-free list of stages.
///
/// The order is the only transition order: stage `i` can only be followed
/// by stage `i + 1`. The first stage is the initial state and the last one
/// is terminal.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StageSequence {
    stages: Vec<Stage>,
}

impl StageSequence {
    /// Builds a sequence, rejecting repeated stage ids.
    ///
    /// An empty list is accepted; classifying against it reports
    /// [`ProgressError::EmptySequence`].
    pub fn new(stages: Vec<Stage>) -> Result<Self, ProgressError> {
        let mut seen = HashSet::with_capacity(stages.len());
        for stage in &stages {
            if !seen.insert(stage.id) {
                return Err(ProgressError::DuplicateStage(stage.id));
            }
        }
        Ok(Self { stages })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn initial(&self) -> Option<&Stage> {
        self.stages.first()
    }

    pub fn terminal(&self) -> Option<&Stage> {
        self.stages.last()
    }

    pub fn position(&self, id: OrderStatusId) -> Option<usize> {
        self.stages.iter().position(|stage| stage.id == id)
    }

    pub fn classify(&self, current: OrderStatusId) -> Result<Progress<'_>, ProgressError> {
        progress::classify(&self.stages, current)
    }

    /// Stage that follows `current`, or `None` when `current` is terminal.
    pub fn next_after(&self, current: OrderStatusId) -> Result<Option<&Stage>, ProgressError> {
        if self.stages.is_empty() {
            return Err(ProgressError::EmptySequence);
        }
        let index = self
            .position(current)
            .ok_or_else(|| ProgressError::UnknownStatus(current.to_string()))?;
        Ok(self.stages.get(index + 1))
    }
}

impl Default for StageSequence {
    fn default() -> Self {
        Self {
            stages: vec![
                Stage::new(
                    OrderStatusId::OrderPlaced,
                    OrderStatusId::OrderPlaced.default_label(),
                    StageIcon::ClipboardList,
                ),
                Stage::new(
                    OrderStatusId::Preparing,
                    OrderStatusId::Preparing.default_label(),
                    StageIcon::ChefHat,
                ),
                Stage::new(
                    OrderStatusId::OutForDelivery,
                    OrderStatusId::OutForDelivery.default_label(),
                    StageIcon::Truck,
                ),
                Stage::new(
                    OrderStatusId::Delivered,
                    OrderStatusId::Delivered.default_label(),
                    StageIcon::PackageCheck,
                ),
            ],
        }
    }
}

// Deserialize goes through `new` so files with repeated ids are rejected.
impl<'de> Deserialize<'de> for StageSequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let stages = Vec::<Stage>::deserialize(deserializer)?;
        StageSequence::new(stages).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a StageSequence {
    type Item = &'a Stage;
    type IntoIter = std::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}
