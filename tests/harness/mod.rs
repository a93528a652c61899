#![allow(dead_code, unused_imports)]

pub(crate) mod fake_engine;
pub(crate) mod test_context;

pub(crate) use fake_engine::FakeEngine;
pub(crate) use test_context::TestContext;
