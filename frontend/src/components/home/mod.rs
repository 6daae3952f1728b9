mod footer;
mod header;
mod level_dropdown;
mod material_card;

pub use footer::Footer;
pub use header::Header;
pub use level_dropdown::LevelDropdown;
pub use material_card::MaterialCard;
