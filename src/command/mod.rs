mod history;
mod mutation;

pub use history::HistoryBuffer;
pub use mutation::{Applied, Mutation};
