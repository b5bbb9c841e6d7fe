pub mod enums;
pub mod lists;
pub mod local;
pub mod record;
pub mod strings;
