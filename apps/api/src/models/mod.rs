pub mod dates;
pub mod experience;
pub mod job_offer;
pub mod profile;
pub mod resume;
pub mod rows;
