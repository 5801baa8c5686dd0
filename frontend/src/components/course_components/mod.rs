pub mod category_strip;
pub mod course_card;
pub mod courses_grid;
