pub mod config;
pub mod ctx;
pub mod ops;

use std::marker::PhantomData;

use ctx::LogCtx;

pub fn check() -> LogCtx<ops::check::Check> { LogCtx { json: config::logs_are_json(), _marker: PhantomData } }
pub fn pages() -> LogCtx<ops::pages::Pages> { LogCtx { json: config::logs_are_json(), _marker: PhantomData } }
