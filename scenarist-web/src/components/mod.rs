pub mod footer;
pub mod header;
pub mod layout;
pub mod pack_card;
pub mod recent_list;
pub mod scenario_card;
