#![allow(dead_code)]

pub mod client;

pub use client::{StubClient, create_test_router};
