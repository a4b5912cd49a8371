//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 事件分发          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │ school-dashboard- │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入和终端尺寸变化转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     handle_event 接收以下 Event 类型：
//!         Event::Key(KeyEvent)                // 键盘事件
//!         Event::Resize(width, height)        // 终端宽度即视口宽度
//!         其他                                 // 忽略
//!
//!     键盘事件的判断顺序：
//!         1. 有弹窗打开时，交给 handle_modal_keys
//!         2. 带修饰键的全局快捷键（Ctrl+C、Alt+←/→、Tab、Esc……）
//!         3. 没有在输入文本时，普通字母快捷键（m、s、t、f、g、q、?）
//!         4. 焦点在侧边栏 → handle_sidebar_keys
//!            焦点在内容面板 → 按当前模块分发（向导 / 学生列表）
//!
//!
//!     为什么第 3 步要判断“是否在输入文本”？
//!         录取向导和学生列表的搜索框里，t、m、s 都是正常的字母。
//!         此时用 Tab 回到侧边栏，就又可以使用单字母快捷键了。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
