//! osmod - comment moderation CLI
//!
//! Works a moderation queue from the terminal against recorded fixture
//! data.
//!
//! ## Quick Start
//!
//! ```bash
//! # Pull the bucket lists for an article into a session
//! osmod load --fixture queue.json --article a1
//!
//! # Approve two comments
//! osmod moderate --article a1 --action approve --ids c1,c2 --previous rejected
//!
//! # See where everything landed
//! osmod summary --article a1
//! ```

mod commands;

#[tokio::main]
async fn main() {
    if let Err(err) = commands::run().await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
