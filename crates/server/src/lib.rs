//! Minecraft host for the chisel tools: vanilla block catalog, the family
//! and paint tables, tool items, and interaction dispatch.

pub mod block;
pub mod config;
pub mod families;
pub mod interaction;
pub mod paint_table;
pub mod tools;
