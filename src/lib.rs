//! A model of one round of pairwise meetings among agents with discrete health states.
//!
//! Each agent carries one of five [`HealthCategory`](agent::HealthCategory) values, ordered from
//! `CURE` to `DEAD`. A round takes a listing of agents and:
//! * sets aside the `HEALTHY` and `DEAD` agents, who do not take part;
//! * pairs up the remaining agents in listing order;
//! * cures both agents of a pair if either of them is `CURE`, and worsens both otherwise;
//! * returns the resolved pairs, then any unpaired agent, then the agents set aside.
//!
//! The round itself is a pure function ([`meetup::meetup`]). The rest of the crate supplies
//! what a runnable model needs around it:
//! * [`listing`] reads agent listings from CSV or JSON files;
//! * [`report`] writes the resulting listing to a CSV file;
//! * [`config`] and [`runner`] provide the `meetup` command line tool;
//! * [`log`] configures logging.
//!
//! ```rust
//! use meetup::prelude::*;
//!
//! let agents = vec![
//!     Agent::new("Adam", HealthCategory::Sick),
//!     Agent::new("Cure0", HealthCategory::Cure),
//! ];
//! let after = meetup(&agents).unwrap();
//! assert_eq!(after[0], Agent::new("Adam", HealthCategory::Healthy));
//! ```
pub mod agent;
pub mod config;
pub mod error;
pub mod lattice;
pub mod listing;
pub mod log;
pub mod meetup;
pub mod prelude;
pub mod report;
pub mod runner;

pub use crate::log::{debug, error, info, trace, warn};
