pub mod audio;
pub mod camera;
pub mod colony_map;
pub mod message_log;

pub use audio::SoundQueue;
pub use camera::CameraFocus;
pub use colony_map::ColonyMap;
pub use message_log::{LoggedMessage, MessageLog};
