//! 主题模块
//!
//! 提供统一的主题定义。

use ratatui::style::{Color, Modifier, Style};

/// Highlight marker for list items
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Dialog size as a percentage of the terminal
pub const DIALOG_WIDTH_PERCENT: u16 = 70;
pub const DIALOG_HEIGHT_PERCENT: u16 = 70;

/// 主题颜色配置
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 对话框背景色
    pub dialog_bg: Color,
    /// 选中项背景色
    pub selected_bg: Color,
    /// 选中项前景色
    pub selected_fg: Color,
    /// 主按钮颜色
    pub primary: Color,
    /// 错误色
    pub error: Color,
    /// 提示/次要文字色
    pub hint: Color,
    /// 边框色
    pub border: Color,
    /// 标题颜色
    pub title: Color,
}

impl Theme {
    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 对话框内文本样式
    pub fn dialog(&self) -> Style {
        Style::new().fg(self.fg).bg(self.dialog_bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 边框样式
    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    /// 提示文本样式
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    /// 未填写值的占位样式
    pub fn placeholder(&self) -> Style {
        Style::new()
            .fg(self.hint)
            .bg(self.dialog_bg)
            .add_modifier(Modifier::ITALIC)
    }

    /// 主按钮样式
    pub fn primary_button(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// 次按钮样式
    pub fn secondary_button(&self) -> Style {
        Style::new().fg(self.fg).bg(self.dialog_bg)
    }

    /// 错误样式
    pub fn error(&self) -> Style {
        Style::new().fg(self.error).bg(self.dialog_bg)
    }
}

/// 全局主题实例
pub static THEME: Theme = Theme {
    bg: Color::Black,
    fg: Color::White,
    dialog_bg: Color::Black,
    selected_bg: Color::Cyan,
    selected_fg: Color::Black,
    primary: Color::Blue,
    error: Color::Red,
    hint: Color::Gray,
    border: Color::Cyan,
    title: Color::Cyan,
};

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

/// 获取全局主题引用
pub fn theme() -> &'static Theme {
    &THEME
}
