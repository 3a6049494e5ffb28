// Fort catalogue data: starter dataset and the static image lookup

pub mod images;
pub mod seed;
