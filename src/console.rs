//! Console presentation: turns organizer results into the status lines a
//! user sees.

pub mod render;
mod session;

pub use session::Console;

#[cfg(test)]
mod tests;
