/// Row ids are client-generated millisecond timestamps.
pub type DbId = i64;

/// Display rank of an item inside its section.
pub type SortOrder = i32;
