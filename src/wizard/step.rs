//! Wizard steps

use serde::Serialize;

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Choose an input type
    #[default]
    SelectType,
    /// Fill in the type's properties
    ConfigureProperties,
    /// Read-only review before finishing
    Preview,
}

/// Primary button shown by the host for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryAction {
    /// Advance to the following step
    Next,
    /// Commit and close the wizard
    Finish,
}

impl Step {
    /// Dialog title for the step
    pub fn title(&self) -> &'static str {
        match self {
            Step::SelectType => "Select Input Type",
            Step::ConfigureProperties => "Configure Input Properties",
            Step::Preview => "Preview Input Configuration",
        }
    }

    /// Following step, if any
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::SelectType => Some(Step::ConfigureProperties),
            Step::ConfigureProperties => Some(Step::Preview),
            Step::Preview => None,
        }
    }

    /// Preceding step, if any
    pub fn prev(&self) -> Option<Step> {
        match self {
            Step::SelectType => None,
            Step::ConfigureProperties => Some(Step::SelectType),
            Step::Preview => Some(Step::ConfigureProperties),
        }
    }

    /// Whether the host shows a Back control
    pub fn can_go_back(&self) -> bool {
        self.prev().is_some()
    }

    pub fn primary_action(&self) -> PrimaryAction {
        match self {
            Step::Preview => PrimaryAction::Finish,
            _ => PrimaryAction::Next,
        }
    }

    /// 1-based position, for "step n of 3" indicators
    pub fn number(&self) -> usize {
        match self {
            Step::SelectType => 1,
            Step::ConfigureProperties => 2,
            Step::Preview => 3,
        }
    }

    pub const COUNT: usize = 3;
}
