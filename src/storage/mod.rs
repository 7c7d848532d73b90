//! 存储层模块
//!
//! 提供数据持久化服务，支持 SurrealDB 和内存后端。

#[cfg(feature = "surrealdb")]
pub mod surrealdb;

pub mod factory;
pub mod memory;

pub use factory::{Repositories, StorageFactory};
