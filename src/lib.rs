// Library for tests to access modules
//
// Collection runs on a current-thread runtime, so the capability traits use plain
// `async fn` without `Send` bounds.
#![allow(async_fn_in_trait)]

pub mod collectors;
pub mod config;
pub mod executor;
pub mod models;
pub mod pipeline;
pub mod publisher;
pub mod repos;
pub mod sink;
