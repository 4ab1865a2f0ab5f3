mod format;
mod load;
mod site;

pub use self::format::*;
pub use self::load::PROJECT_FILE;
pub use self::site::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
