mod ls;
mod put;

pub use ls::execute_ls;
pub use put::execute_put;
