#![forbid(unsafe_code)]

//! Core: input events, geometry, and swipe gesture state machines.
//!
//! # Role in nudge
//! `nudge-core` is the input layer. It owns the normalized pointer/touch
//! event types and the two gesture state machines the UI builds on:
//!
//! - **SwipeRecognizer**: classifies a pointer stream into a directional
//!   swipe and invokes the callback registered for that direction.
//! - **CardSwipe**: the swipeable-card variant with resistance, arming and
//!   flick detection for one left and one right action.
//!
//! # How it fits in the system
//! `nudge-widgets` wraps these state machines into mounted components
//! (haptics, transient feedback, teardown) and `nudge-runtime` provides the
//! timers they schedule. Nothing here renders, blocks, or performs I/O.

pub mod card_gesture;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod listeners;
pub mod semantic_event;
