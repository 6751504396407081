//! Building and writing the agent introduction.
//!
//! The record comes from [`builder`], is encoded and written by [`writer`],
//! and [`pipeline`] runs the two in sequence.

pub mod builder;
pub mod pipeline;
pub mod writer;

pub use builder::introduce_myself;
pub use pipeline::{IntroduceResult, run, run_with};
pub use writer::{
    encode_introduction, encode_with_indent, load_introduction, write_introduction,
    write_introduction_to,
};
