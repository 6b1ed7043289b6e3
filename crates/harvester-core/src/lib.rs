//! harvester-core
//!
//! Orchestrator for cross-platform influencer scrape tasks: accept a
//! request covering up to three platforms (TikTok, Instagram, YouTube),
//! persist a trackable task, hand the combined plan to the remote scraping
//! backend, and expose paginated task status while the work runs.
//!
//! # Module layout
//! - **domain**: data model + task state machine (request, plan, task
//!   record, ids, errors)
//! - **ports**: trait seams (TaskStore, Dispatcher, Clock, IdGenerator)
//! - **app**: application services (TaskManager, TaskQueryService,
//!   OrchestratorBuilder)
//! - **impls**: reference adapters (InMemoryTaskStore, HttpDispatcher)
//! - **config**: backend endpoint configuration
//!
//! Creation is non-blocking by contract: `create` returns the pending task
//! and a spawned advance walks it through running -> completed|failed.
//! Failed dispatches are terminal; resubmit as a new task.

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{Orchestrator, OrchestratorBuilder};
pub use domain::{HarvestError, ScrapeRequest, ScrapeTask, TaskId, TaskStatus};
