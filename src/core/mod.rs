pub mod add;
pub mod close;
pub mod del;
pub mod session;

pub use add::AddLogic;
pub use close::CloseLogic;
pub use del::DeleteLogic;
pub use session::Session;
