pub use folio_config as config;

pub use crate::new::create_new_project;

mod new;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
