pub mod assessment;
pub mod recommendation;
pub mod score;
pub mod sentiment;
pub mod severity;
pub mod subject;
