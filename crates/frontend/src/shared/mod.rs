pub mod api_utils;
pub mod format;
pub mod icons;
pub mod line_editor;
pub mod page_frame;
pub mod page_standard;
pub mod printing;
