//! promptboard - 终端提示词卡片面板
//!
//! 模块结构：
//! - core: 输入事件类型
//! - kernel: 状态/动作/副作用（store），以及 services（ports + adapters）
//! - ui: 绘制原语与渲染后端
//! - views: 卡片面板的渲染、布局与滚动
//! - app: 应用层（PromptBoard, Keymap）
//! - tui: 终端前端（crossterm 输入、终端恢复）

pub mod app;
pub mod core;
pub mod kernel;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;
