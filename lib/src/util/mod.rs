pub use as_num::AsNum;
pub use plain_enum::*;
pub use failure::{bail, format_err, Error, Fail};
pub use suecascorer_util::*;
