pub mod background;
pub mod chrome;
pub mod detail_modal;
pub mod marker;
pub mod planet;
pub mod space_map;
