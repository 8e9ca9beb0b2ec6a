//! Event-driven dashboard front-end.
//!
//! The dashboard speaks newline-delimited JSON: each `DashboardEvent` line
//! read from the input produces one `DashboardResponse` line carrying an
//! optional notice, animation frames and a fresh `DashboardView`.

pub mod event;
pub mod view;
pub mod controller;

pub use event::DashboardEvent;
pub use view::{DailyStatus, DashboardResponse, DashboardView, KindSummary, Notice, NoticeLevel, StreakMeter};
pub use controller::Dashboard;
