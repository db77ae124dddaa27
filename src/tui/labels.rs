//! 本地化标签映射
//!
//! 用于将向导步骤和按钮映射为稳定的翻译键。

use crate::wizard::{PrimaryAction, Step};
use rust_i18n::t;
use std::borrow::Cow;

/// 步骤标题
pub fn step_title(step: Step) -> Cow<'static, str> {
    match step {
        Step::SelectType => t!("step_select_type"),
        Step::ConfigureProperties => t!("step_configure_properties"),
        Step::Preview => t!("step_preview"),
    }
}

/// 步骤提示
pub fn step_hint(step: Step) -> Cow<'static, str> {
    match step {
        Step::SelectType => t!("select_type_hint"),
        Step::ConfigureProperties => t!("configure_hint"),
        Step::Preview => t!("preview_hint"),
    }
}

/// 主按钮标签
pub fn primary_action_label(action: PrimaryAction) -> Cow<'static, str> {
    match action {
        PrimaryAction::Next => t!("button_next"),
        PrimaryAction::Finish => t!("button_finish"),
    }
}

/// 返回按钮标签
pub fn back_label() -> Cow<'static, str> {
    t!("button_back")
}

/// 步骤进度，例如 "Step 2 of 3"
pub fn step_indicator(step: Step) -> Cow<'static, str> {
    t!("step_indicator", current = step.number(), total = Step::COUNT)
}
