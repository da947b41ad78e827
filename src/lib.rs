//! Interaction layer for a single-page portfolio.
//!
//! This crate is compiled to WebAssembly and attached once to static page
//! markup on load. It owns every piece of interaction state: the full-page
//! scroll lock, the nav/section pairing, hover reveals, the credentials modal,
//! and the project-button label animations. The browser host (feature
//! `hydrate`) is responsible only for wiring DOM events into the
//! [`engine::PageCore`] and applying the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Page controller and its event/action vocabulary |
//! | [`scroll`] | Wheel direction and the scroll lock |
//! | [`nav`] | Nav/section pairing, click targets, highlight |
//! | [`reveal`] | Hover reveal of interest explanations |
//! | [`modal`] | Credentials modal triggers and visibility |
//! | [`buttons`] | Project-button label width animations |
//! | [`timeline`] | Per-target animation queues with completion events |
//! | [`tween`] | Easing and interpolation |
//! | [`config`] | Runtime configuration and selectors |
//! | [`error`] | Crate error type |
//! | [`consts`] | Durations and sizes used by the portfolio page |
//! | `host` | Browser bindings (feature `hydrate`) |

pub mod buttons;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod timeline;
pub mod tween;

#[cfg(feature = "hydrate")]
pub mod host;
