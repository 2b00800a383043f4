pub mod demo;
pub mod invocation;
pub mod proxy;
pub mod subject;
