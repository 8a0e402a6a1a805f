mod record;
mod panel;

pub use record::{CountryObservation, CountryRecord, StatusLabel};
pub use panel::Panel;
