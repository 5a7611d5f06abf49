pub mod layout;
pub mod search_box;
pub mod video_card;
