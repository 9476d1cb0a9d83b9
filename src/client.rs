//! In-process model of the TaskFlow frontend shell: the splash/loading state
//! machine and the toast presentation layer. Rendering belongs to the UI;
//! these types own the state and timing rules it renders from.

pub mod shell;
pub mod toast;
