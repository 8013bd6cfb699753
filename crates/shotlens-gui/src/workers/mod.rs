mod classify;
mod dispatch;
mod io;

pub use dispatch::spawn_worker;
