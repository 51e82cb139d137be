//! Render adapter
//!
//! Decides what a frame shows (sprites, positions, texts). Loading images,
//! fonts and talking to a graphics API belongs to the host.

pub mod draw_list;

pub use draw_list::{DrawCommand, SCORE_COLOR, Sprite, build_draw_list};
