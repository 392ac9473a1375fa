//! cppview - C/C++ 工程文件浏览面板
//!
//! 模块结构：
//! - models: 数据模型（TreeNode, NodeKind, FileClass）
//! - explorer: 树模型构建（目录列举、头文件配对、排序）
//! - actions: 面板命令（新建、删除、复制、定位、固定、差异）
//! - services: 服务层（ports + adapters + refresh bus）
//! - views: 渲染适配（TreeItemView）
//! - panel: 面板生命周期上下文

pub mod actions;
pub mod explorer;
pub mod models;
pub mod panel;
pub mod services;
pub mod views;

pub use actions::{ActionContext, ActionError, ActionOutcome, ExplorerCommand};
pub use explorer::TreeModelBuilder;
pub use models::{FileClass, NodeKind, SortTier, TreeNode};
pub use panel::{CppViewPanel, PANEL_ID};
