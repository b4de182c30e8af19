pub mod capabilities;
pub mod google_maps;
