pub mod abbrev;
pub mod national;
pub mod record;
pub mod state;

pub use national::NationalTable;
pub use record::{NameYearSexRecord, NameYearStateRecord, Sex};
pub use state::StateTable;
