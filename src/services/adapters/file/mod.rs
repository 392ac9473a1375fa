//! 文件服务模块
//!
//! 本地文件系统实现；其它后端实现同一个 `FileProvider` 即可接入。

pub mod local;

pub use local::LocalFileProvider;
