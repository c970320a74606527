//! 视图层模块
//!
//! - BoardView: 提示卡片面板（纯渲染 + 命中测试）

pub mod board;

pub use board::{render, BoardView, CardElement, RenderedBoard};
