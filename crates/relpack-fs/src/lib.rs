pub mod io;

pub use io::{FsError, atomic_write, atomic_write_str, unique_tmp_path};
