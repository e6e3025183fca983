pub mod devices;
pub mod dialog;
pub mod mapping_store;
pub mod midi;
pub mod mosaic;
pub mod pad_session;
pub mod player;

pub use devices::{DeviceSource, StdinDevice};
pub use dialog::{FileDialog, FileKind, PathDialog, PickedFile};
pub use mapping_store::{MappingStore, MAPPINGS_FILE_NAME};
pub use midi::{parse_hex_line, parse_note_on, NoteOn};
pub use mosaic::{MosaicReport, MosaicService};
pub use pad_session::{PadSession, Trigger};
pub use player::{AudioPlayer, LogPlayer};
