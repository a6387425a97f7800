mod address;
mod macro_region;
mod province;

pub use address::{classify, AddressClass};
pub use macro_region::MacroRegion;
pub use province::{region_of, Province};
