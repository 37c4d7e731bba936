//! Example applications for the Entrain simulator.
//!
//! The runnable examples live in the `examples/` directory:
//!
//! ```sh
//! cargo run --example live_network --release
//! ```
