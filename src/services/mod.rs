// chromehist services
// Services provide the query pipeline pieces: path resolution, snapshotting,
// and result formatting.

pub mod formatter;
pub mod path_resolver;
pub mod snapshot;
