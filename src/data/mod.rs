//! Wiki-wide page data.
//!
//! The [`PageGraph`] collects every page of a build and the links between
//! them. It is filled in two phases:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Phase 1: Ingest (write-only)                                       │
//! │  ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐  │
//! │  │ scan order  │ ──► │ page::load   │ ──► │ PageGraph::ingest    │  │
//! │  │ (sorted)    │     │ (one file)   │     │ placeholders,        │  │
//! │  └─────────────┘     └──────────────┘     │ backlinks, merge     │  │
//! │                                           └──────────────────────┘  │
//! │                                                                     │
//! │  Phase 2: Project (read-only)                                       │
//! │  ┌──────────────────────┐     ┌─────────────────────────────────┐   │
//! │  │ PageGraph::iter      │ ──► │ render pages, folder listing,   │   │
//! │  │ (discovery order)    │     │ recent list, full dump          │   │
//! │  └──────────────────────┘     └─────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod graph;

pub use graph::PageGraph;
