//! **bingo-screen** — the rendering-collaborator contract for bingo.
//!
//! A small single-threaded screen runtime: styled character cells in an
//! owned buffer, frame diffing so a back-end only repaints what changed,
//! input messages, and an Elm-style application loop ([`Model`],
//! [`Driver`], [`Effect`], [`App`]) with delayed commands for the
//! celebration ticks.

pub mod app;
pub mod cell;
pub mod geom;
pub mod messages;
pub mod screen;
pub mod style;

pub use app::{cmd, tick_after, App, AppConfig, Context, Driver, Effect, Model};
pub use cell::Cell;
pub use geom::{Point, Rect};
pub use messages::{Key, MouseAction, Msg};
pub use screen::{Frame, FrameCell, Screen};
pub use style::{AttrMask, Color, Style};
