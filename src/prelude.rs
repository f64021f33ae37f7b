pub use crate::agent::{Agent, HealthCategory};
pub use crate::error::MeetupError;
pub use crate::lattice::{apply_cure, apply_worsening};
pub use crate::listing::{load_listing, sample_listing};
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::meetup::{meetup, meetup_round, Meeting, MeetingOutcome, RoundSummary};
pub use crate::report::write_listing_file;
