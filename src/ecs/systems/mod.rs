pub mod alerts;
pub mod needs;
