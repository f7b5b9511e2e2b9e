mod location_dto;

pub use location_dto::{CityOptionsQuery, LocationOptionsDto, ProvinceOptionsQuery};
