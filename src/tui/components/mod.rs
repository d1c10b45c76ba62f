pub mod next_prayer;
pub mod prayer_table;
pub mod title_bar;

pub use next_prayer::NextPrayerPanel;
pub use prayer_table::PrayerTable;
pub use title_bar::TitleBar;
