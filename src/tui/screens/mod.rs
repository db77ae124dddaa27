//! 各屏幕渲染

pub mod dialog;
pub mod landing;
