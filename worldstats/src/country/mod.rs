//! Country data model
//!
//! Records fetched from the country-data provider, the canonical continent
//! set, and the membership predicate shared by reports and listings.

mod continent;
mod listing;
mod raw;
mod record;

pub use continent::{Continent, ContinentFilter, UnknownContinent};
pub use listing::{countries_in, osm_embed_url};
pub use raw::{decode_record, decode_records};
pub use record::{
    Coordinates, CountryCollection, CountryRecord, CountryRecordBuilder, Currency, FlagRef,
};
