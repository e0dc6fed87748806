//! Test helpers module
//!
//! Mock backend server, recording view and scripted decoder shared by the
//! integration tests.

#![allow(dead_code)]

pub mod backend_mock;
pub mod recording_view;
pub mod scripted_decoder;
pub mod simple_test;

pub use backend_mock::*;
pub use recording_view::*;
pub use scripted_decoder::*;
pub use simple_test::*;
