//! UI resource layer for the Lyrebird streaming music client.
//!
//! Everything a page needs besides layout: asynchronous artwork loading
//! with a process-wide decoded-image cache ([`art`]), deterministic
//! cover-fit/crop transforms, a frame-driven marquee for overflowing
//! titles, and an optimistic like toggle with revert-on-failure ([`ui`]).
//!
//! Concurrency discipline: a single UI-owning loop executes all widget
//! state mutations; fetch and confirmation work runs on blocking workers
//! that hand results back through [`ui::UiScheduler`].

pub mod app;
pub mod art;
pub mod track;
pub mod ui;
