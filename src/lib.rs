//! # GrokNews
//!
//! A terminal research assistant: fetch the latest headlines on a topic and ask an LLM
//! for a witty summary with per-headline sentiment.
//!
//! ## Flow
//!
//! - **Fetch**: one newsdata.io search, top 5 results kept in API order
//! - **Digest**: `"{title}. {description}\n"` per article
//! - **Summarise**: one chat-completion call (Groq by default) with the digest embedded
//!
//! [`Pipeline::run`] performs a whole cycle and returns an [`Outcome`]; the [`ui`] module
//! renders it.

pub mod agent;
pub mod article;
pub mod config;
pub mod logging;
pub mod news;
pub mod pipeline;
pub mod ui;

pub use article::{Article, Digest};
pub use config::Config;
pub use pipeline::{CycleError, Outcome, Pipeline};
